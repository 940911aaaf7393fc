//! Minimal vertical bar chart drawn with CSS heights.

use leptos::prelude::*;

use crate::state::dashboard::bar_percent;
use crate::util::listing::ChartPoint;

#[component]
pub fn BarChart(title: &'static str, #[prop(into)] points: Signal<Vec<ChartPoint>>) -> impl IntoView {
    view! {
        <section class="bar-chart">
            <h3 class="bar-chart__title">{title}</h3>
            <div class="bar-chart__bars">
                {move || {
                    let series = points.get();
                    series
                        .iter()
                        .map(|point| {
                            let height = format!("height: {}%", bar_percent(point.value, &series));
                            view! {
                                <div class="bar-chart__column" title=format!("{}: {}", point.name, point.value)>
                                    <div class="bar-chart__bar" style=height></div>
                                    <span class="bar-chart__label">{point.name.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
