//! Summary figures for the three role dashboards.
//!
//! DESIGN
//! ======
//! The admin dashboard shows fixed placeholder figures. Lecturer and
//! student dashboards derive their numbers from the ticket list they load,
//! scoped to the signed-in user's id.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Ticket, TicketStatus};
use crate::util::listing::{self, ChartPoint, SortDirection, SortField, SortOptions};

/// Color treatment for a stat card's progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Warning,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "progress--primary",
            Self::Success => "progress--success",
            Self::Warning => "progress--warning",
        }
    }
}

/// One headline number with a progress bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u32,
    /// Bar fill, 0..=100.
    pub progress: u8,
    pub tone: Tone,
}

#[must_use]
pub fn admin_cards() -> Vec<StatCard> {
    vec![
        StatCard { title: "Active Users", value: 120, progress: 80, tone: Tone::Success },
        StatCard { title: "Pending issues", value: 35, progress: 50, tone: Tone::Warning },
        StatCard { title: "Resolved issues", value: 85, progress: 85, tone: Tone::Primary },
    ]
}

/// Monthly sign-ups for the admin "User Growth" chart.
#[must_use]
pub fn user_growth() -> Vec<ChartPoint> {
    [("Jan", 30), ("Feb", 50), ("Mar", 40), ("Apr", 70), ("May", 90)]
        .into_iter()
        .map(|(name, value)| ChartPoint { name: name.to_owned(), value })
        .collect()
}

/// Bar height as a percentage of the tallest point. Zero when the series
/// is empty or all zeros.
#[must_use]
pub fn bar_percent(value: usize, points: &[ChartPoint]) -> usize {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
    if max == 0 {
        return 0;
    }
    value.min(max) * 100 / max
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LecturerSummary {
    pub assigned: usize,
    pub open: usize,
    pub resolved: usize,
    /// Unsettled high/critical tickets, most urgent first.
    pub urgent: Vec<Ticket>,
    pub by_category: Vec<ChartPoint>,
}

/// Figures for the tickets assigned to `lecturer_id`.
#[must_use]
pub fn lecturer_summary(tickets: &[Ticket], lecturer_id: &str) -> LecturerSummary {
    let assigned = tickets
        .iter()
        .filter(|t| t.assigned_to.as_ref().is_some_and(|p| p.id == lecturer_id))
        .cloned()
        .collect::<Vec<_>>();

    let resolved = assigned.iter().filter(|t| t.status.is_settled()).count();
    let mut urgent = assigned
        .iter()
        .filter(|t| t.priority.is_urgent() && !t.status.is_settled())
        .cloned()
        .collect::<Vec<_>>();
    urgent.sort_by(|a, b| b.priority.cmp(&a.priority));

    LecturerSummary {
        assigned: assigned.len(),
        open: assigned.len() - resolved,
        resolved,
        urgent,
        by_category: listing::chart_data(&assigned, |t| t.category.clone()),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentSummary {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// Newest tickets first.
    pub recent: Vec<Ticket>,
}

/// Figures for the tickets reported by `student_id`. At most `recent_limit`
/// tickets are kept in `recent`.
#[must_use]
pub fn student_summary(tickets: &[Ticket], student_id: &str, recent_limit: usize) -> StudentSummary {
    let mine = tickets.iter().filter(|t| t.student.id == student_id).cloned().collect::<Vec<_>>();
    let count = |status: TicketStatus| mine.iter().filter(|t| t.status == status).count();

    let newest = SortOptions { field: SortField::CreatedAt, direction: SortDirection::Desc };
    let mut recent = listing::filter_and_sort(&mine, &Default::default(), newest);
    recent.truncate(recent_limit);

    StudentSummary {
        total: mine.len(),
        open: count(TicketStatus::Open) + count(TicketStatus::New) + count(TicketStatus::Reopened),
        in_progress: count(TicketStatus::InProgress) + count(TicketStatus::Pending),
        resolved: mine.iter().filter(|t| t.status.is_settled()).count(),
        recent,
    }
}
