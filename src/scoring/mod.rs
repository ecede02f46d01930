// Scoring — bias score fusion and political leaning.
//
// Every ratio in the crate goes through `safe_ratio`: a zero denominator
// yields 0.0 instead of NaN or infinity. Degenerate input (empty text, no
// tokens, no partisan matches) therefore always produces zero scores.

pub mod overall;
pub mod political;

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    safe_ratio(values.iter().sum(), values.len() as f64)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
