//! Issue-list state: loaded tickets, the create form, filters, and paging.
//!
//! DESIGN
//! ======
//! Tickets live only in this state. Creating or updating a ticket goes
//! through the mock service and the echoed result is merged here; nothing
//! is shared with other views.

#[cfg(test)]
#[path = "issues_test.rs"]
mod issues_test;

use crate::config::DEFAULT_PAGINATION_LIMIT;
use crate::net::types::{NewTicket, Person, Priority, Role, Ticket, TicketFilters, TicketStatus, TicketUpdate};
use crate::util::listing::{self, SortOptions};

/// Category used when the create form's category is left blank.
pub const DEFAULT_CATEGORY: &str = "academic";

/// Categories offered by the create form.
pub const CATEGORIES: [&str; 3] = ["academic", "technical", "administrative"];

#[derive(Clone, Debug, Default)]
pub struct IssueListState {
    pub items: Vec<Ticket>,
    pub loading: bool,
    pub error: Option<String>,
    /// Create-form title input.
    pub title: String,
    /// Create-form description input.
    pub description: String,
    /// Create-form category selector. Blank means [`DEFAULT_CATEGORY`].
    pub category: String,
    /// Create-form priority selector.
    pub priority: Priority,
    pub filters: TicketFilters,
    pub sort: SortOptions,
    /// Zero-based page index.
    pub page: usize,
}

impl IssueListState {
    /// Initial state while the first list request is in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Replace the list with freshly loaded tickets.
    pub fn set_loaded(&mut self, tickets: Vec<Ticket>) {
        self.items = tickets;
        self.loading = false;
        self.error = None;
        self.page = 0;
    }

    pub fn set_failed(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
    }

    /// Turn the form inputs into a create payload and clear them.
    ///
    /// Both title and description are required; when either is blank the
    /// inputs are left as typed and `None` is returned. The category and
    /// priority selectors keep their values for the next issue.
    pub fn take_draft(&mut self, student: Person) -> Option<NewTicket> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return None;
        }
        let category = match self.category.trim() {
            "" => DEFAULT_CATEGORY.to_owned(),
            chosen => chosen.to_owned(),
        };
        let draft = NewTicket {
            title: std::mem::take(&mut self.title).trim().to_owned(),
            description: std::mem::take(&mut self.description).trim().to_owned(),
            status: TicketStatus::Open,
            priority: self.priority,
            category,
            student,
            assigned_to: None,
        };
        Some(draft)
    }

    /// Append a ticket returned by the service.
    pub fn push_created(&mut self, ticket: Ticket) {
        self.items.push(ticket);
    }

    /// Merge an update echo into the matching ticket.
    pub fn apply_update(&mut self, update: &TicketUpdate) {
        for ticket in &mut self.items {
            update.apply_to(ticket);
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Ticket> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn set_status_filter(&mut self, status: Option<TicketStatus>) {
        self.filters.status = status;
        self.page = 0;
    }

    pub fn set_search(&mut self, search: String) {
        self.filters.search = if search.trim().is_empty() { None } else { Some(search) };
        self.page = 0;
    }

    /// Tickets after filters and sorting, before paging.
    #[must_use]
    pub fn filtered(&self) -> Vec<Ticket> {
        listing::filter_and_sort(&self.items, &self.filters, self.sort)
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        listing::page_count(self.filtered().len(), DEFAULT_PAGINATION_LIMIT)
    }

    /// Tickets on the current page.
    #[must_use]
    pub fn visible(&self) -> Vec<Ticket> {
        let filtered = self.filtered();
        listing::paginate(&filtered, self.page, DEFAULT_PAGINATION_LIMIT).to_vec()
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}

/// Detail route for a ticket within a role's section.
#[must_use]
pub fn issue_path(role: Role, id: &str) -> String {
    format!("{}/issues/{id}", role.landing_path())
}

/// List route for a role's section.
#[must_use]
pub fn issues_path(role: Role) -> String {
    format!("{}/issues", role.landing_path())
}
