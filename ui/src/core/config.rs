//! Fixed contract values and tunable layout defaults.
//!
//! The expectancy and month bands are compatibility values for stored
//! profiles and rendered calendars. They are not meant to be tuned.

/// Plausible lifespan band in years; anything outside falls back.
pub const EXPECTANCY_MIN_YEARS: f64 = 60.0;
pub const EXPECTANCY_MAX_YEARS: f64 = 120.0;
pub const EXPECTANCY_FALLBACK_YEARS: f64 = 80.0;

/// Cell-count band for the rendered calendar.
pub const TOTAL_MONTHS_MIN: u32 = 600;
pub const TOTAL_MONTHS_MAX: u32 = 1440;
pub const TOTAL_MONTHS_FALLBACK: u32 = 960;

/// Earliest accepted birth year.
pub const BIRTH_YEAR_MIN: i32 = 1900;

/// Key holding the serialized profile in local storage.
pub const STORAGE_KEY: &str = "lifeVisualizerUserData";

/// Identity used for native data directories (`directories::ProjectDirs`).
pub const APP_QUALIFIER: &str = "app";
pub const APP_ORGANIZATION: &str = "Lifegrid";
pub const APP_NAME: &str = "Lifegrid";

/// Loader delay on mount, in milliseconds.
pub const MOUNT_DELAY_EMPTY_MS: u64 = 100;
pub const MOUNT_DELAY_WITH_PROFILE_MS: u64 = 200;

/// Quote rotation period and typewriter tick.
pub const QUOTE_ROTATION_MS: u64 = 30_000;
pub const QUOTE_TYPING_TICK_MS: u64 = 50;

/// Layout knobs for the grid solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Padding applied on each side of the container.
    pub padding: f64,
    /// Spacing between cells.
    pub gap: f64,
    /// Smallest acceptable cell side; smaller candidates are rejected.
    pub min_dot_size: f64,
    /// Used until the container reports a real size.
    pub fallback_width: f64,
    pub fallback_height: f64,
    /// Size changes below this many pixels are treated as jitter.
    pub resize_threshold: f64,
    /// Debounce applied to container measurements.
    pub resize_debounce_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 4.0,
            gap: 2.0,
            min_dot_size: 3.0,
            fallback_width: 800.0,
            fallback_height: 600.0,
            resize_threshold: 1.0,
            resize_debounce_ms: 100,
        }
    }
}

/// Public site address used in share links when no page URL is available.
pub const SITE_URL: &str = "https://faticalendar.vercel.app";
