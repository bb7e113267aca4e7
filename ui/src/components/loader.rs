use dioxus::prelude::*;

use crate::t;

/// Placeholder shown while the calendar mounts.
#[component]
pub fn AppLoader(#[props(default = false)] with_profile: bool) -> Element {
    let message = if with_profile {
        t!("loading-calendar")
    } else {
        t!("loading-app")
    };

    rsx! {
        div { class: "app-loader", role: "status", aria_live: "polite",
            div { class: "app-loader__dots", aria_hidden: "true",
                span { class: "app-loader__dot" }
                span { class: "app-loader__dot" }
                span { class: "app-loader__dot" }
            }
            p { class: "app-loader__message", "{message}" }
        }
    }
}
