//! Body metrics and the daily maintenance-calorie estimate.
//!
//! The calculator is the Mifflin-St Jeor basal metabolic rate equation scaled
//! by an activity multiplier. It is a pure function of the profile: identical
//! input always yields an identical, strictly positive estimate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{KcalError, Result};

/// Activity multipliers, sedentary through very active.
const ACTIVITY_FACTORS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];

/// Biological sex used by the BMR base formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = KcalError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(KcalError::Validation(format!(
                "Unknown gender \"{}\" (use male or female)",
                other
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Activity tier selecting the maintenance multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to the basal metabolic rate.
    pub fn factor(&self) -> f64 {
        ACTIVITY_FACTORS[*self as usize]
    }
}

impl FromStr for ActivityLevel {
    type Err = KcalError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" | "very-active" => Ok(ActivityLevel::VeryActive),
            other => Err(KcalError::Validation(format!(
                "Unknown activity level \"{}\" (use sedentary, light, moderate, active or very_active)",
                other
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "light"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Active => write!(f, "active"),
            ActivityLevel::VeryActive => write!(f, "very_active"),
        }
    }
}

/// User body metrics, entered once and overwritten on every change.
///
/// A stored profile with a missing or mistyped field fails deserialization,
/// which the storage layer reports as an invalid profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,

    /// Age in whole years
    pub age: u32,

    /// Sex used by the base formula
    pub gender: Gender,

    /// Activity tier
    pub activity: ActivityLevel,
}

impl Profile {
    /// Check that the metrics are physically plausible.
    ///
    /// # Errors
    ///
    /// Returns `KcalError::Validation` if weight or height is non-finite or
    /// not strictly positive, or if age is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(KcalError::Validation(format!(
                "Weight must be a positive number, got {}",
                self.weight_kg
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(KcalError::Validation(format!(
                "Height must be a positive number, got {}",
                self.height_cm
            )));
        }
        if self.age == 0 {
            return Err(KcalError::Validation("Age must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Estimated daily maintenance calories (kcal/day).
    ///
    /// Mifflin-St Jeor BMR (`10w + 6.25h - 5a`, plus 5 for men, minus 161 for
    /// women) multiplied by the activity factor. Deterministic and free of
    /// side effects.
    ///
    /// # Errors
    ///
    /// Returns `KcalError::Validation` for implausible metrics; callers must
    /// not display a maintenance value in that case.
    pub fn maintenance_kcal(&self) -> Result<f64> {
        self.validate()?;

        let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * f64::from(self.age);
        let bmr = match self.gender {
            Gender::Male => base + 5.0,
            Gender::Female => base - 161.0,
        };

        Ok(bmr * self.activity.factor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_profile() -> Profile {
        Profile {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            gender: Gender::Male,
            activity: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_maintenance_reference_scenario() {
        // 70 kg / 175 cm / 30 y male, moderate: BMR 1648.75, x1.55 = 2555.5625
        let maintenance = reference_profile().maintenance_kcal().unwrap();
        assert!(maintenance > 2000.0 && maintenance < 3000.0);
        assert!((maintenance - 2555.5625).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_is_deterministic() {
        let profile = reference_profile();
        let first = profile.maintenance_kcal().unwrap();
        let second = profile.maintenance_kcal().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_maintenance_female_below_male() {
        let male = reference_profile();
        let female = Profile {
            gender: Gender::Female,
            ..male.clone()
        };
        assert!(female.maintenance_kcal().unwrap() < male.maintenance_kcal().unwrap());
    }

    #[test]
    fn test_activity_factors_increase() {
        let tiers = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        for pair in tiers.windows(2) {
            assert!(pair[0].factor() < pair[1].factor());
        }
    }

    #[test]
    fn test_maintenance_positive_for_plausible_inputs() {
        for weight in [45.0, 70.0, 120.0] {
            for height in [150.0, 175.0, 200.0] {
                for age in [18, 40, 80] {
                    for gender in [Gender::Male, Gender::Female] {
                        let profile = Profile {
                            weight_kg: weight,
                            height_cm: height,
                            age,
                            gender,
                            activity: ActivityLevel::Sedentary,
                        };
                        assert!(profile.maintenance_kcal().unwrap() > 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_maintenance_rejects_implausible_metrics() {
        let mut profile = reference_profile();
        profile.weight_kg = 0.0;
        assert!(profile.maintenance_kcal().is_err());

        let mut profile = reference_profile();
        profile.height_cm = f64::NAN;
        assert!(profile.maintenance_kcal().is_err());

        let mut profile = reference_profile();
        profile.age = 0;
        assert!(profile.maintenance_kcal().is_err());
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = reference_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_profile_rejects_missing_field() {
        // No "activity" field: the stored profile is invalid
        let json = r#"{"weight_kg":70.0,"height_cm":175.0,"age":30,"gender":"male"}"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn test_profile_rejects_mistyped_field() {
        let json = r#"{"weight_kg":"seventy","height_cm":175.0,"age":30,"gender":"male","activity":"moderate"}"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn test_activity_from_str() {
        assert_eq!(
            "very_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            " Moderate ".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Moderate
        );
        assert!("extreme".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }
}
