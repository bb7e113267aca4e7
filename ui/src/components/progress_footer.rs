use dioxus::prelude::*;

use crate::core::countries;
use crate::core::expectancy::{lifestyle_impacts, Factor};
use crate::core::format::{format_percent, format_years};
use crate::core::profile::Profile;
use crate::core::temporal::{derive_snapshot, today};
use crate::t;

fn factor_label(factor: Factor) -> String {
    match factor {
        Factor::HealthyDiet => t!("impact-healthy-diet"),
        Factor::Exercise => t!("impact-exercise"),
        Factor::Alcohol => t!("impact-alcohol"),
        Factor::Smoking => t!("impact-smoking"),
    }
}

/// Age, progress and remaining-time summary under the grid.
#[component]
pub fn ProgressFooter(profile: Profile) -> Element {
    let snapshot = derive_snapshot(&profile, today());
    let progress = snapshot.display_progress_percent();
    let remaining = snapshot.years_remaining();
    let impacts = lifestyle_impacts(profile.lifestyle());
    let country = countries::label_for(profile.nationality.as_str());

    let remaining_label = if remaining > 0.0 {
        t!("footer-years", years = format_years(remaining))
    } else {
        t!("footer-extended")
    };

    rsx! {
        footer { class: "progress-footer",
            div { class: "progress-footer__stats",
                div { class: "stat",
                    span { class: "stat__label", {t!("footer-current-age")} }
                    span { class: "stat__value",
                        {t!("footer-years", years = snapshot.age_years().to_string())}
                    }
                }
                div { class: "stat",
                    span { class: "stat__label", {t!("footer-life-progress")} }
                    span { class: "stat__value", "{format_percent(progress)}" }
                }
                div { class: "stat",
                    span { class: "stat__label", {t!("footer-time-remaining")} }
                    span {
                        class: if remaining > 0.0 { "stat__value" } else { "stat__value stat__value--extended" },
                        "{remaining_label}"
                    }
                }
            }

            div {
                class: "progress-bar",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{progress}",
                div { class: "progress-bar__fill", style: "width: {progress}%" }
            }

            p { class: "progress-footer__summary",
                {t!(
                    "footer-summary",
                    country = country.to_string(),
                    years = format_years(snapshot.life_expectancy_years)
                )}
            }

            if !impacts.is_empty() {
                div { class: "progress-footer__impacts",
                    h3 { {t!("lifestyle-factors")} }
                    ul {
                        for impact in impacts {
                            li {
                                class: if impact.is_positive() { "impact impact--positive" } else { "impact impact--negative" },
                                span { "{factor_label(impact.factor)}" }
                                span { class: "impact__years",
                                    if impact.is_positive() { "+{format_years(impact.years)}" } else { "{format_years(impact.years)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
