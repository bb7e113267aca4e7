#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::storage::platform_backend;
use ui::core::store::ProfileStore;
use ui::views::{About, Calendar};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Calendar {},
    #[route("/about")]
    About {},
}

// Shared theme from ui/, always inlined so packaged builds need no asset directory.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(log_level()).ok();
    info!("starting lifegrid desktop v{}", env!("CARGO_PKG_VERSION"));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Lifegrid – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1200.0, 860.0))
                    .with_min_inner_size(LogicalSize::new(480.0, 520.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(log_level()).ok();
    LaunchBuilder::server().launch(App);
}

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn nav_calendar(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Calendar {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates this through context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(|| ProfileStore::open(platform_backend()));

    register_nav(NavBuilder {
        calendar: nav_calendar,
        about: nav_about,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts with fresh strings.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

/// Desktop-specific layout wrapping the shared navbar around the desktop `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
