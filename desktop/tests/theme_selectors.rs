#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Components in `ui` rely on BEM-style classes from the shared theme
(`ui/assets/theme/main.css`). A substring presence check catches a rename
that would otherwise only degrade styling in packaged builds.

When a component's markup changes class names, update REQUIRED_SELECTORS too.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".button--danger",
    // Navbar
    ".navbar",
    ".navbar__links",
    ".navbar__link",
    ".navbar__locale",
    // Loader & form
    ".app-loader",
    ".profile-form",
    ".profile-form__error",
    ".profile-form__lifestyle",
    // Header
    ".progress-header__title",
    ".progress-header__indicators",
    ".indicator--on",
    ".indicator--off",
    ".confirm-bar",
    ".quote-ticker",
    // Grid
    ".life-grid__viewport",
    ".life-grid__cells",
    ".life-cell--past",
    ".life-cell--current",
    ".life-cell--future",
    ".life-cell--event",
    ".life-grid__detail",
    // Footer
    ".progress-footer__stats",
    ".progress-bar__fill",
    ".stat__value--extended",
    ".impact--positive",
    ".impact--negative",
    // Share
    ".share-panel",
    ".share-panel__status--success",
    ".share-panel__status--error",
    // Responsive
    "@media (max-width: 720px)",
];

#[test]
fn required_selectors_present() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing required selectors in unified theme (ui/assets/theme/main.css):\n  - {}",
        missing.join("\n  - ")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn cell_state_selectors_are_paired() {
    for state in ["past", "current", "future"] {
        let selector = format!(".life-cell--{state}");
        let legend = format!(".legend--{state}");
        assert!(
            THEME_CSS.contains(&selector) && THEME_CSS.contains(&legend),
            "cell state `{state}` needs both a cell and a legend style"
        );
    }
}
