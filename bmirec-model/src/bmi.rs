use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[strum(serialize = "Normal weight")]
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Blue,
    Green,
    Orange,
    Red,
}

/// BMI rounded to 2 decimal places plus its category. The category and color
/// partition the BMI axis without gaps or overlap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
    pub color: SeverityColor,
}
