//! Display formatting helpers for dates, names, numbers, and badges.
//!
//! All functions are pure; callers pass `now` explicitly where time matters
//! so output is deterministic under test.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

use crate::config::{DATE_FORMAT, DATETIME_FORMAT};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// Format a timestamp as `Mar 15, 2025`, optionally with `09:30 AM`.
#[must_use]
pub fn format_date(ts: DateTime<Utc>, include_time: bool) -> String {
    if include_time {
        ts.format("%b %-d, %Y, %I:%M %p").to_string()
    } else {
        ts.format("%b %-d, %Y").to_string()
    }
}

/// Machine-style timestamp using the portal's configured `DATE_FORMAT` /
/// `DATETIME_FORMAT`, e.g. `2025-03-15 09:30:00`. Used for tooltips.
#[must_use]
pub fn format_iso(ts: DateTime<Utc>, include_time: bool) -> String {
    ts.format(if include_time { DATETIME_FORMAT } else { DATE_FORMAT }).to_string()
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{count} {unit}s ago")
    } else {
        format!("{count} {unit} ago")
    }
}

/// Relative description of `ts` as seen from `now` ("3 days ago").
///
/// Timestamps in the future read as "Just now".
#[must_use]
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - ts).num_seconds();
    if secs < SECS_PER_MINUTE {
        return "Just now".to_owned();
    }
    let minutes = secs / SECS_PER_MINUTE;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = secs / SECS_PER_HOUR;
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = secs / SECS_PER_DAY;
    if days < 7 {
        return plural(days, "day");
    }
    let weeks = days / 7;
    if weeks < 4 {
        return plural(weeks, "week");
    }
    if days < DAYS_PER_YEAR {
        return plural((days / DAYS_PER_MONTH).max(1), "month");
    }
    plural(days / DAYS_PER_YEAR, "year")
}

/// Cut `s` to at most `max_chars` characters and append `suffix` when cut.
#[must_use]
pub fn truncate(s: &str, max_chars: usize, suffix: &str) -> String {
    if s.chars().count() <= max_chars {
        return s.to_owned();
    }
    let head = s.chars().take(max_chars).collect::<String>();
    format!("{}{suffix}", head.trim_end())
}

/// Uppercase initials of the first `limit` words of `name`.
#[must_use]
pub fn initials(name: &str, limit: usize) -> String {
    name.split(' ')
        .take(limit)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Render an integer with comma thousands separators.
#[must_use]
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

/// CSS class for a status string; unknown statuses get `status-default`.
#[must_use]
pub fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "new" => "status-new",
        "open" => "status-open",
        "in-progress" => "status-in-progress",
        "pending" => "status-pending",
        "resolved" => "status-resolved",
        "closed" => "status-closed",
        "reopened" => "status-reopened",
        _ => "status-default",
    }
}

/// CSS class for a priority given as a word or as a rank (`1` = high).
#[must_use]
pub fn priority_class(priority: &str) -> &'static str {
    let raw = priority.trim();
    if let Ok(rank) = raw.parse::<f64>() {
        return match rank {
            r if (r - 1.0).abs() < f64::EPSILON => "priority-high",
            r if (r - 2.0).abs() < f64::EPSILON => "priority-medium",
            r if (r - 3.0).abs() < f64::EPSILON => "priority-low",
            _ => "priority-default",
        };
    }
    match raw.to_lowercase().as_str() {
        "high" | "urgent" | "critical" => "priority-high",
        "medium" | "normal" => "priority-medium",
        "low" => "priority-low",
        _ => "priority-default",
    }
}
