use dioxus::prelude::*;

use super::{QuoteTicker, SharePanel};
use crate::core::profile::Profile;
use crate::hooks::use_profile_store;
use crate::t;

/// Title, lifestyle indicators, quote and the profile actions.
#[component]
pub fn ProgressHeader(profile: Profile) -> Element {
    let store = use_profile_store();
    let mut sharing = use_signal(|| false);
    let mut confirming_delete = use_signal(|| false);

    let indicators = [
        (profile.healthy_food, t!("indicator-healthy-diet")),
        (profile.running, t!("indicator-exercise")),
        (!profile.alcohol, t!("indicator-no-alcohol")),
        (!profile.smoking, t!("indicator-no-smoking")),
    ];

    let title = t!("header-title", name = profile.name.to_uppercase());

    let confirm_delete = move |_| {
        tracing::info!("profile deletion confirmed");
        confirming_delete.set(false);
        sharing.set(false);
        store.clear();
    };

    rsx! {
        header { class: "progress-header",
            div { class: "progress-header__top",
                h1 { class: "progress-header__title", "{title}" }
                div { class: "progress-header__actions",
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| sharing.set(!sharing()),
                        {t!("header-share")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| confirming_delete.set(true),
                        {t!("header-delete")}
                    }
                }
            }

            ul { class: "progress-header__indicators",
                for (active, label) in indicators {
                    li {
                        class: if active { "indicator indicator--on" } else { "indicator indicator--off" },
                        span { class: "indicator__dot", aria_hidden: "true" }
                        "{label}"
                    }
                }
            }

            QuoteTicker {}

            if confirming_delete() {
                div { class: "confirm-bar", role: "alertdialog",
                    p { class: "confirm-bar__prompt", {t!("delete-confirm-prompt")} }
                    div { class: "confirm-bar__actions",
                        button {
                            r#type: "button",
                            class: "button button--danger",
                            onclick: confirm_delete,
                            {t!("delete-confirm-yes")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| confirming_delete.set(false),
                            {t!("delete-confirm-cancel")}
                        }
                    }
                }
            }

            if sharing() {
                SharePanel {
                    profile: profile.clone(),
                    on_close: move |_| sharing.set(false),
                }
            }
        }
    }
}
