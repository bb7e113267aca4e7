//! The month grid.
//!
//! Geometry is re-solved only when the committed container size or the cell
//! count changes; raw resize events pass through the debounce in
//! [`use_container_size`](crate::hooks::use_container_size) first.

use dioxus::prelude::*;

use crate::core::cells::{build_cells, month_info, MonthInfo, TimeContext};
use crate::core::config::LayoutConfig;
use crate::core::events::LifeEvents;
use crate::core::format::month_year;
use crate::core::layout::solve_with;
use crate::core::profile::Profile;
use crate::core::temporal::{derive_snapshot, today};
use crate::hooks::use_container_size;
use crate::t;

fn context_label(context: TimeContext) -> String {
    match context {
        TimeContext::CurrentMonth => t!("cell-current-month"),
        TimeContext::YearsAgo(count) => t!("cell-years-ago", count = count),
        TimeContext::MonthsAgo(count) => t!("cell-months-ago", count = count),
        TimeContext::Recently => t!("cell-recently"),
        TimeContext::InYears(count) => t!("cell-in-years", count = count),
        TimeContext::InMonths(count) => t!("cell-in-months", count = count),
        TimeContext::Soon => t!("cell-soon"),
    }
}

#[component]
pub fn LifeGrid(profile: ReadOnlySignal<Profile>) -> Element {
    let config = LayoutConfig::default();
    let (container, onresize) = use_container_size(config);
    let events = use_hook(LifeEvents::milestones);
    let mut hovered = use_signal(|| None::<u32>);

    let snapshot = use_memo(move || derive_snapshot(&profile.read(), today()));
    let geometry = use_memo(move || solve_with(&config, snapshot().total_months, container()));
    let cells = use_memo({
        let events = events.clone();
        move || build_cells(&snapshot(), &events)
    });

    let detail: Option<MonthInfo> = hovered().map(|index| month_info(&snapshot(), &events, index));

    let geo = geometry();
    let grid_style = format!(
        "grid-template-columns: repeat({}, {}px); gap: {}px; width: {}px; height: {}px;",
        geo.num_columns, geo.dot_size, geo.gap, geo.total_grid_width, geo.total_grid_height,
    );
    let cell_style = format!("width: {0}px; height: {0}px;", geo.dot_size);
    let total = snapshot().total_months;
    let cells = cells();

    rsx! {
        section { class: "life-grid",
            div {
                class: "life-grid__viewport",
                style: "padding: {geo.padding}px;",
                onresize: onresize,
                div {
                    class: "life-grid__cells",
                    style: "{grid_style}",
                    onmouseleave: move |_| hovered.set(None),
                    for cell in cells {
                        div {
                            key: "{cell.index}",
                            class: "life-cell {cell.state.css_modifier()}",
                            class: if cell.has_event { "life-cell--event" },
                            style: "{cell_style}",
                            onmouseenter: move |_| hovered.set(Some(cell.index)),
                        }
                    }
                }
            }

            div { class: "life-grid__legend",
                span { class: "legend legend--past", {t!("legend-past")} }
                span { class: "legend legend--current", {t!("legend-current")} }
                span { class: "legend legend--future", {t!("legend-future")} }
            }

            div { class: "life-grid__detail", aria_live: "polite",
                if let Some(info) = detail {
                    p { class: "life-grid__detail-title",
                        strong { "{month_year(info.month_date)}" }
                        " · "
                        {t!("cell-month-of", index = (info.index + 1), total = total)}
                    }
                    p {
                        {t!("cell-age", years = info.age_years, months = info.month_of_year)}
                        " · "
                        {context_label(info.context)}
                    }
                    if let Some(event) = info.event.clone() {
                        p { class: "life-grid__detail-event", {t!("cell-event", event = event)} }
                    }
                } else {
                    p { class: "life-grid__detail-hint", {t!("cell-hint")} }
                }
            }
        }
    }
}
