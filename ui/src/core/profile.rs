//! The persisted profile record and the form draft that produces it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::BIRTH_YEAR_MIN;
use super::expectancy::{CountryCode, Lifestyle};

/// A fully populated profile. Partial profiles are never constructed outside
/// [`ProfileDraft`], so a `Profile` value always has every required field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Assigned by a remote save; carried through local round-trips untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub birth_year: i32,
    pub nationality: CountryCode,
    #[serde(default)]
    pub healthy_food: bool,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub alcohol: bool,
    #[serde(default)]
    pub smoking: bool,
}

impl Profile {
    pub fn lifestyle(&self) -> Lifestyle {
        Lifestyle {
            healthy_food: self.healthy_food,
            running: self.running,
            alcohol: self.alcohol,
            smoking: self.smoking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("name must be at least 2 characters")]
    NameTooShort,
    #[error("birth year must be between {min} and {max}")]
    BirthYearOutOfRange { min: i32, max: i32 },
    #[error("birth year is not a number")]
    BirthYearInvalid,
    #[error("please select a nationality")]
    MissingNationality,
}

/// Raw form state. Everything is kept as entered until [`ProfileDraft::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub birth_year: String,
    pub nationality: String,
    pub healthy_food: bool,
    pub running: bool,
    pub alcohol: bool,
    pub smoking: bool,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            birth_year: "1990".to_string(),
            nationality: String::new(),
            healthy_food: false,
            running: false,
            alcohol: false,
            smoking: false,
        }
    }
}

impl ProfileDraft {
    /// Produce a complete profile, or every field error found.
    pub fn validate(&self, current_year: i32) -> Result<Profile, Vec<ProfileError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.chars().count() < 2 {
            errors.push(ProfileError::NameTooShort);
        }

        let birth_year = match self.birth_year.trim().parse::<i32>() {
            Ok(year) if (BIRTH_YEAR_MIN..=current_year).contains(&year) => Some(year),
            Ok(_) => {
                errors.push(ProfileError::BirthYearOutOfRange {
                    min: BIRTH_YEAR_MIN,
                    max: current_year,
                });
                None
            }
            Err(_) => {
                errors.push(ProfileError::BirthYearInvalid);
                None
            }
        };

        let nationality = CountryCode::new(self.nationality.as_str());
        if nationality.is_empty() {
            errors.push(ProfileError::MissingNationality);
        }

        match birth_year {
            Some(birth_year) if errors.is_empty() => Ok(Profile {
                id: None,
                name: name.to_string(),
                birth_year,
                nationality,
                healthy_food: self.healthy_food,
                running: self.running,
                alcohol: self.alcohol,
                smoking: self.smoking,
            }),
            _ => Err(errors),
        }
    }
}
