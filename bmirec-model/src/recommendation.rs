use serde::{Deserialize, Serialize};

/// Number of features both classifiers were trained against.
pub const FEATURE_COUNT: usize = 5;

/// The exact ordered tuple consumed by both classifiers. Field order is a
/// trained-model contract; `to_array` is the only place it is flattened.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub age: u8,
    pub bmi: f64,
    pub activity_code: u32,
    pub sleep_hours: u8,
    pub diet_code: u32,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age as f64,
            self.bmi,
            self.activity_code as f64,
            self.sleep_hours as f64,
            self.diet_code as f64,
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub diet_plan: String,
    pub activity_plan: String,
}
