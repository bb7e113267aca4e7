//! Derived birth/elapsed/total month values for a profile.
//!
//! Everything here is a pure function of `(Profile, today)`; callers recompute
//! whenever either changes rather than caching fields.

use time::{Date, Month, OffsetDateTime};
use tracing::warn;

use super::config::{
    EXPECTANCY_FALLBACK_YEARS, EXPECTANCY_MAX_YEARS, EXPECTANCY_MIN_YEARS, TOTAL_MONTHS_FALLBACK,
    TOTAL_MONTHS_MAX, TOTAL_MONTHS_MIN,
};
use super::expectancy;
use super::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalSnapshot {
    /// Always within `[60, 120]`.
    pub life_expectancy_years: f64,
    pub birth_date: Date,
    pub today: Date,
    pub months_lived: u32,
    /// Always within `[600, 1440]`.
    pub total_months: u32,
    /// Not capped at 100; display code clamps.
    pub life_progress_percent: u32,
}

impl TemporalSnapshot {
    /// Whole years of age at `today`.
    pub fn age_years(&self) -> u32 {
        self.months_lived / 12
    }

    /// Estimated years left; zero or negative once the estimate is outlived.
    pub fn years_remaining(&self) -> f64 {
        self.life_expectancy_years - f64::from(self.age_years())
    }

    /// Age as a share of the estimate, capped at 100 for progress bars.
    pub fn display_progress_percent(&self) -> u32 {
        let pct = (f64::from(self.age_years()) / self.life_expectancy_years * 100.0).round();
        pct.clamp(0.0, 100.0) as u32
    }

    /// Number of cells the calendar draws.
    pub fn cell_count(&self) -> u32 {
        self.total_months.clamp(TOTAL_MONTHS_MIN, TOTAL_MONTHS_MAX)
    }
}

/// Today's calendar date in local time (UTC when the offset is unknown).
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub fn derive_snapshot(profile: &Profile, now: Date) -> TemporalSnapshot {
    let raw = expectancy::estimate_for(&profile.nationality, profile.lifestyle());
    snapshot_from_estimate(profile.birth_year, raw, now)
}

/// Build a snapshot from an already computed (possibly implausible) estimate.
pub fn snapshot_from_estimate(birth_year: i32, raw_years: f64, now: Date) -> TemporalSnapshot {
    let life_expectancy_years = normalize_expectancy(raw_years);
    let birth_date = january_first(birth_year).unwrap_or(now);
    let months_lived = whole_months_between(birth_date, now);
    let total_months = normalize_total_months(life_expectancy_years * 12.0);
    let life_progress_percent =
        (f64::from(months_lived) / f64::from(total_months) * 100.0).round() as u32;

    TemporalSnapshot {
        life_expectancy_years,
        birth_date,
        today: now,
        months_lived,
        total_months,
        life_progress_percent,
    }
}

fn normalize_expectancy(raw_years: f64) -> f64 {
    if raw_years.is_finite() && (EXPECTANCY_MIN_YEARS..=EXPECTANCY_MAX_YEARS).contains(&raw_years)
    {
        raw_years
    } else {
        warn!(
            raw = raw_years,
            fallback = EXPECTANCY_FALLBACK_YEARS,
            "life expectancy outside plausible range; using fallback"
        );
        EXPECTANCY_FALLBACK_YEARS
    }
}

fn normalize_total_months(raw_months: f64) -> u32 {
    let band = f64::from(TOTAL_MONTHS_MIN)..=f64::from(TOTAL_MONTHS_MAX);
    if raw_months.is_finite() && band.contains(&raw_months) {
        raw_months.round() as u32
    } else {
        warn!(
            raw = raw_months,
            fallback = TOTAL_MONTHS_FALLBACK,
            "total months outside plausible range; using fallback"
        );
        TOTAL_MONTHS_FALLBACK
    }
}

pub fn january_first(year: i32) -> Option<Date> {
    Date::from_calendar_date(year, Month::January, 1).ok()
}

/// Whole calendar months from `from` to `to`; zero when `to` precedes `from`.
pub fn whole_months_between(from: Date, to: Date) -> u32 {
    if to <= from {
        return 0;
    }
    let mut months = (to.year() - from.year()) * 12 + (i32::from(u8::from(to.month()))
        - i32::from(u8::from(from.month())));
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Calendar month `offset` months after `start`, pinned to day 1.
pub fn add_months(start: Date, offset: u32) -> Option<Date> {
    let zero_based = i64::from(u8::from(start.month())) - 1 + i64::from(offset);
    let year = i64::from(start.year()) + zero_based.div_euclid(12);
    let month = u8::try_from(zero_based.rem_euclid(12) + 1).ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(i32::try_from(year).ok()?, month, 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expectancy::CountryCode;
    use time::macros::date;

    fn profile(birth_year: i32, nationality: &str) -> Profile {
        Profile {
            id: None,
            name: "Ada".into(),
            birth_year,
            nationality: CountryCode::new(nationality),
            healthy_food: false,
            running: false,
            alcohol: false,
            smoking: false,
        }
    }

    #[test]
    fn reference_scenario_1990() {
        let snap = snapshot_from_estimate(1990, 80.0, date!(2024 - 01 - 01));
        assert_eq!(snap.total_months, 960);
        assert_eq!(snap.months_lived, 408);
        assert_eq!(snap.life_progress_percent, 43);
        assert_eq!(snap.birth_date, date!(1990 - 01 - 01));
    }

    #[test]
    fn derive_uses_estimator() {
        let snap = derive_snapshot(&profile(1990, "jp"), date!(2024 - 06 - 15));
        assert_eq!(snap.life_expectancy_years, 84.0);
        assert_eq!(snap.total_months, 1008);
        assert_eq!(snap.months_lived, 34 * 12 + 5);
    }

    #[test]
    fn forced_estimates_stay_in_band() {
        let now = date!(2024 - 03 - 10);
        for raw in [f64::NAN, f64::INFINITY, -3.0, 0.0, 59.9, 120.5, 1e9] {
            for birth_year in (1900..=2024).step_by(7) {
                let snap = snapshot_from_estimate(birth_year, raw, now);
                assert_eq!(snap.life_expectancy_years, 80.0, "raw={raw}");
                assert!((600..=1440).contains(&snap.total_months));
            }
        }
        let edge = snapshot_from_estimate(2000, 120.0, now);
        assert_eq!(edge.total_months, 1440);
        let edge = snapshot_from_estimate(2000, 60.0, now);
        assert_eq!(edge.total_months, 600);
    }

    #[test]
    fn months_grow_by_one_per_calendar_month() {
        let birth = date!(1990 - 01 - 01);
        let mut now = birth;
        for expected in 0..300u32 {
            assert_eq!(whole_months_between(birth, now), expected);
            now = add_months(now, 1).unwrap();
        }
    }

    #[test]
    fn now_before_birth_is_zero() {
        let snap = snapshot_from_estimate(2030, 80.0, date!(2024 - 01 - 01));
        assert_eq!(snap.months_lived, 0);
        assert_eq!(snap.life_progress_percent, 0);
    }

    #[test]
    fn partial_month_is_not_counted() {
        assert_eq!(
            whole_months_between(date!(2020 - 01 - 31), date!(2020 - 02 - 29)),
            0
        );
        assert_eq!(
            whole_months_between(date!(2020 - 01 - 15), date!(2020 - 03 - 15)),
            2
        );
    }

    #[test]
    fn add_months_rolls_years() {
        assert_eq!(add_months(date!(1990 - 01 - 01), 13), Some(date!(1991 - 02 - 01)));
        assert_eq!(add_months(date!(1990 - 11 - 20), 2), Some(date!(1991 - 01 - 01)));
    }

    #[test]
    fn footer_figures() {
        let snap = snapshot_from_estimate(1990, 80.0, date!(2024 - 07 - 01));
        assert_eq!(snap.age_years(), 34);
        assert_eq!(snap.years_remaining(), 46.0);
        assert_eq!(snap.display_progress_percent(), 43);

        let outlived = snapshot_from_estimate(1900, 60.0, date!(2024 - 07 - 01));
        assert!(outlived.years_remaining() < 0.0);
        assert_eq!(outlived.display_progress_percent(), 100);
        assert!(outlived.life_progress_percent > 100);
    }
}
