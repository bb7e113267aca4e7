use dioxus::prelude::*;

use crate::core::platform::platform_string;
use crate::t;

#[component]
pub fn About() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let platform = platform_string();
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        section { class: "page page-about",
            h1 { {t!("about-title")} }
            p { {t!("about-intro")} }
            ul { class: "page-about__points",
                li { {t!("about-point-months")} }
                li { {t!("about-point-estimate")} }
                li { {t!("about-point-local")} }
            }
            p { class: "page-about__disclaimer", {t!("about-disclaimer")} }
            p { class: "page-about__meta", "v{version} · {platform}" }
        }
    }
}
