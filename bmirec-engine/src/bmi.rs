use bmirec_model::bmi::{BmiCategory, SeverityColor};

/// Compute BMI as weight in kilograms over height in meters squared, rounded
/// to 2 decimal places. Rounding is half-away-from-zero (`f64::round`), which
/// on the positive BMI domain means half-up; this is observable at the exact
/// category thresholds, so callers categorize the rounded value.
///
/// Callers must reject non-positive height before calling.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / height_m.powf(2.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Threshold table for BMI categories, first match wins. Boundary values
/// (18.5, 25, 30 exactly) belong to the higher category.
pub fn categorize(bmi: f64) -> (BmiCategory, SeverityColor) {
    if bmi < 18.5 {
        (BmiCategory::Underweight, SeverityColor::Blue)
    } else if bmi < 25.0 {
        (BmiCategory::NormalWeight, SeverityColor::Green)
    } else if bmi < 30.0 {
        (BmiCategory::Overweight, SeverityColor::Orange)
    } else {
        (BmiCategory::Obese, SeverityColor::Red)
    }
}
