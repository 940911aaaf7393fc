//! Headline number with a progress bar.

use leptos::prelude::*;

use crate::state::dashboard::StatCard as Stat;
use crate::util::format::format_number;

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let width = format!("width: {}%", stat.progress.min(100));
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{stat.title}</span>
            <span class="stat-card__value">{format_number(i64::from(stat.value))}</span>
            <div class="progress">
                <div class=format!("progress__bar {}", stat.tone.class()) style=width></div>
            </div>
            <span class="stat-card__percent">{format!("{}%", stat.progress)}</span>
        </div>
    }
}

/// Plain count tile for derived dashboard figures.
#[component]
pub fn CountTile(label: &'static str, #[prop(into)] count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card stat-card--count">
            <span class="stat-card__title">{label}</span>
            <span class="stat-card__value">{move || count.get()}</span>
        </div>
    }
}
