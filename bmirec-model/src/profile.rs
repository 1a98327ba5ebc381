use std::{error::Error, fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const AGE_RANGE: RangeInclusive<u8> = 10..=100;
pub const HEIGHT_CM_RANGE: RangeInclusive<u16> = 100..=220;
pub const WEIGHT_KG_RANGE: RangeInclusive<u16> = 30..=150;
pub const SLEEP_HOURS_RANGE: RangeInclusive<u8> = 3..=12;

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum DietType {
    Vegetarian,
    #[strum(serialize = "Non-Vegetarian")]
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
    Mixed,
}

#[derive(Debug, PartialEq, Eq)]
pub enum InvalidProfile {
    AgeOutOfRange(u8),
    HeightOutOfRange(u16),
    WeightOutOfRange(u16),
    SleepHoursOutOfRange(u8),
}

impl fmt::Display for InvalidProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for InvalidProfile {}

/// Snapshot of the user's inputs for a single evaluation. Never reused or
/// mutated across evaluations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u8,
    pub height_cm: u16,
    pub weight_kg: u16,
    pub activity_level: ActivityLevel,
    pub diet_type: DietType,
    pub sleep_hours: u8,
}

impl UserProfile {
    /// Range checks mirror the input widget constraints. Out-of-range values
    /// fail loudly instead of being clamped.
    pub fn validate(&self) -> Result<(), InvalidProfile> {
        if !AGE_RANGE.contains(&self.age) {
            Err(InvalidProfile::AgeOutOfRange(self.age))
        } else if !HEIGHT_CM_RANGE.contains(&self.height_cm) {
            Err(InvalidProfile::HeightOutOfRange(self.height_cm))
        } else if !WEIGHT_KG_RANGE.contains(&self.weight_kg) {
            Err(InvalidProfile::WeightOutOfRange(self.weight_kg))
        } else if !SLEEP_HOURS_RANGE.contains(&self.sleep_hours) {
            Err(InvalidProfile::SleepHoursOutOfRange(self.sleep_hours))
        } else {
            Ok(())
        }
    }

    pub fn height_m(&self) -> f64 {
        self.height_cm as f64 / 100.0
    }
}
