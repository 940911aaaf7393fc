//! Sorting, grouping, paging, and chart-series helpers for ticket lists.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::BTreeMap;

use crate::net::types::{Ticket, TicketFilters};

/// Column a ticket table can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Status,
    Priority,
    #[default]
    CreatedAt,
    UpdatedAt,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Sort settings for a ticket table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Filter `items` with `filters`, then sort by `sort`. Input order is kept
/// for equal keys.
#[must_use]
pub fn filter_and_sort(items: &[Ticket], filters: &TicketFilters, sort: SortOptions) -> Vec<Ticket> {
    let mut out = items.iter().filter(|t| filters.matches(t)).cloned().collect::<Vec<_>>();
    out.sort_by(|a, b| {
        let ord = match sort.field {
            SortField::Id => a.id.to_lowercase().cmp(&b.id.to_lowercase()),
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Status => a.status.cmp(&b.status),
            SortField::Priority => a.priority.cmp(&b.priority),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    out
}

/// Group items by a derived key. Keys iterate in sorted order.
pub fn group_by<'a, T, K, F>(items: &'a [T], key: F) -> BTreeMap<K, Vec<&'a T>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<&T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// One bar/slice in a chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartPoint {
    pub name: String,
    pub value: usize,
}

/// Count items per key, ready for a bar chart.
pub fn chart_data<T, F>(items: &[T], key: F) -> Vec<ChartPoint>
where
    F: Fn(&T) -> String,
{
    group_by(items, key)
        .into_iter()
        .map(|(name, group)| ChartPoint { name, value: group.len() })
        .collect()
}

/// Number of pages needed for `len` rows at `limit` per page (at least 1).
#[must_use]
pub fn page_count(len: usize, limit: usize) -> usize {
    if limit == 0 {
        return 1;
    }
    len.div_ceil(limit).max(1)
}

/// Rows on zero-based `page`. Out-of-range pages are empty.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, limit: usize) -> &[T] {
    if limit == 0 {
        return items;
    }
    let start = page.saturating_mul(limit);
    if start >= items.len() {
        return &[];
    }
    let end = (start + limit).min(items.len());
    &items[start..end]
}
