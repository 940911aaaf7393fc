use super::*;
use crate::net::tickets::seed_tickets;

#[test]
fn admin_cards_match_placeholder_figures() {
    let cards = admin_cards();
    let summary = cards.iter().map(|c| (c.title, c.value, c.progress)).collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![("Active Users", 120, 80), ("Pending issues", 35, 50), ("Resolved issues", 85, 85)]
    );
}

#[test]
fn user_growth_series_is_monthly() {
    let names = user_growth().into_iter().map(|p| p.name).collect::<Vec<_>>();
    assert_eq!(names, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
}

#[test]
fn bar_percent_scales_to_tallest_point() {
    let points = user_growth();
    assert_eq!(bar_percent(90, &points), 100);
    assert_eq!(bar_percent(45, &points), 50);
    assert_eq!(bar_percent(500, &points), 100);
    assert_eq!(bar_percent(10, &[]), 0);
}

#[test]
fn lecturer_summary_counts_assigned_tickets() {
    let summary = lecturer_summary(&seed_tickets(), "2");
    assert_eq!(summary.assigned, 2);
    assert_eq!(summary.open, 2);
    assert_eq!(summary.resolved, 0);
    let urgent = summary.urgent.iter().map(|t| t.id.as_str()).collect::<Vec<_>>();
    assert_eq!(urgent, vec!["TKT-2023-002", "TKT-2023-001"]);
    assert_eq!(summary.by_category, vec![ChartPoint { name: "academic".to_owned(), value: 2 }]);
}

#[test]
fn lecturer_summary_empty_for_unknown_lecturer() {
    assert_eq!(lecturer_summary(&seed_tickets(), "nobody"), LecturerSummary::default());
}

#[test]
fn student_summary_counts_by_status_and_orders_recent() {
    let summary = student_summary(&seed_tickets(), "1", 2);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.open, 1);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.resolved, 1);
    let recent = summary.recent.iter().map(|t| t.id.as_str()).collect::<Vec<_>>();
    assert_eq!(recent, vec!["TKT-2023-001", "TKT-2023-002"]);
}
