//! Shared UI crate for Lifegrid. The life model, persistence and every view live here;
//! the platform crates only supply routing and launch configuration.

pub mod core;
pub mod hooks;
pub mod i18n;
pub mod share;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod loader;
    pub use loader::AppLoader;

    mod profile_form;
    pub use profile_form::ProfileForm;

    mod progress_header;
    pub use progress_header::ProgressHeader;

    mod progress_footer;
    pub use progress_footer::ProgressFooter;

    mod life_grid;
    pub use life_grid::LifeGrid;

    mod quote;
    pub use quote::QuoteTicker;

    mod share_panel;
    pub use share_panel::SharePanel;
}
