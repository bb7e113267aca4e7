//! Lifestyle-adjusted life expectancy estimate.
//!
//! Deliberately simple: a per-country base plus fixed additive adjustments.
//! The result is not clamped here; `temporal` validates it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base used for any country without a dedicated entry.
pub const DEFAULT_BASE_YEARS: f64 = 80.0;

pub const HEALTHY_FOOD_BONUS: f64 = 2.0;
pub const RUNNING_BONUS: f64 = 3.0;
pub const ALCOHOL_PENALTY: f64 = 2.0;
pub const SMOKING_PENALTY: f64 = 5.0;

/// Two-letter lowercase country code as stored in the profile (`"jp"`, `"us"`, ...).
///
/// Codes outside the known table are kept verbatim and estimate with
/// [`DEFAULT_BASE_YEARS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for CountryCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four boolean lifestyle answers from the profile form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifestyle {
    pub healthy_food: bool,
    pub running: bool,
    pub alcohol: bool,
    pub smoking: bool,
}

/// Base expectancy for a country before lifestyle adjustments.
pub fn base_years(country: &CountryCode) -> f64 {
    match country.as_str() {
        "jp" => 84.0,
        "us" => 78.0,
        "es" => 83.0,
        _ => DEFAULT_BASE_YEARS,
    }
}

/// Estimated lifespan in years. Total over its inputs.
pub fn estimate(
    nationality: &CountryCode,
    healthy_food: bool,
    running: bool,
    alcohol: bool,
    smoking: bool,
) -> f64 {
    let mut years = base_years(nationality);
    if healthy_food {
        years += HEALTHY_FOOD_BONUS;
    }
    if running {
        years += RUNNING_BONUS;
    }
    if alcohol {
        years -= ALCOHOL_PENALTY;
    }
    if smoking {
        years -= SMOKING_PENALTY;
    }
    years
}

pub fn estimate_for(nationality: &CountryCode, lifestyle: Lifestyle) -> f64 {
    estimate(
        nationality,
        lifestyle.healthy_food,
        lifestyle.running,
        lifestyle.alcohol,
        lifestyle.smoking,
    )
}

/// Which lifestyle factor an impact line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    HealthyDiet,
    Exercise,
    Alcohol,
    Smoking,
}

/// One active lifestyle factor and its signed effect in years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifestyleImpact {
    pub factor: Factor,
    pub years: f64,
}

impl LifestyleImpact {
    pub fn is_positive(&self) -> bool {
        self.years > 0.0
    }
}

/// Active factors in display order (diet, exercise, alcohol, smoking).
pub fn lifestyle_impacts(lifestyle: Lifestyle) -> Vec<LifestyleImpact> {
    let mut impacts = Vec::with_capacity(4);
    if lifestyle.healthy_food {
        impacts.push(LifestyleImpact {
            factor: Factor::HealthyDiet,
            years: HEALTHY_FOOD_BONUS,
        });
    }
    if lifestyle.running {
        impacts.push(LifestyleImpact {
            factor: Factor::Exercise,
            years: RUNNING_BONUS,
        });
    }
    if lifestyle.alcohol {
        impacts.push(LifestyleImpact {
            factor: Factor::Alcohol,
            years: -ALCOHOL_PENALTY,
        });
    }
    if lifestyle.smoking {
        impacts.push(LifestyleImpact {
            factor: Factor::Smoking,
            years: -SMOKING_PENALTY,
        });
    }
    impacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::countries::COUNTRIES;

    fn code(raw: &str) -> CountryCode {
        CountryCode::new(raw)
    }

    #[test]
    fn japan_with_healthy_habits() {
        assert_eq!(estimate(&code("jp"), true, true, false, false), 89.0);
    }

    #[test]
    fn us_with_vices() {
        assert_eq!(estimate(&code("us"), false, false, true, true), 71.0);
    }

    #[test]
    fn unknown_code_uses_default_base() {
        assert_eq!(estimate(&code("zz"), false, false, false, false), 80.0);
        assert_eq!(estimate(&code(""), false, false, false, false), 80.0);
    }

    #[test]
    fn every_country_and_flag_combination_is_additive() {
        for country in COUNTRIES {
            let nationality = code(country.code);
            let base = base_years(&nationality);
            for mask in 0u8..16 {
                let healthy_food = mask & 1 != 0;
                let running = mask & 2 != 0;
                let alcohol = mask & 4 != 0;
                let smoking = mask & 8 != 0;
                let expected = base + 2.0 * f64::from(u8::from(healthy_food))
                    + 3.0 * f64::from(u8::from(running))
                    - 2.0 * f64::from(u8::from(alcohol))
                    - 5.0 * f64::from(u8::from(smoking));
                assert_eq!(
                    estimate(&nationality, healthy_food, running, alcohol, smoking),
                    expected,
                    "{} mask={mask:04b}",
                    country.code
                );
            }
        }
    }

    #[test]
    fn codes_are_normalized() {
        assert_eq!(code(" JP "), code("jp"));
        assert_eq!(base_years(&code("ES")), 83.0);
    }

    #[test]
    fn impacts_follow_display_order() {
        let impacts = lifestyle_impacts(Lifestyle {
            healthy_food: true,
            running: false,
            alcohol: true,
            smoking: true,
        });
        let factors: Vec<Factor> = impacts.iter().map(|i| i.factor).collect();
        assert_eq!(factors, vec![Factor::HealthyDiet, Factor::Alcohol, Factor::Smoking]);
        assert!(impacts[0].is_positive());
        assert!(!impacts[2].is_positive());
        assert_eq!(impacts[2].years, -5.0);
    }
}
