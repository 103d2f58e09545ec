//! Weight unit conversions
//!
//! Kilogram/pound conversions used by the calculator and its input forms.

use super::error::{EnergyError, EnergyResult};

// ============================================================================
// Weight Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

/// Convert a weight in kilograms to pounds
pub fn kilograms_to_pounds(kilograms: f64) -> EnergyResult<f64> {
    // NaN fails this check too
    if !(kilograms >= 0.0) {
        return Err(EnergyError::out_of_range(
            "kilograms",
            "Weight cannot be negative.",
        ));
    }
    Ok(kilograms * LB_PER_KG)
}

/// Convert a weight in pounds to kilograms
pub fn pounds_to_kilograms(pounds: f64) -> EnergyResult<f64> {
    if !(pounds >= 0.0) {
        return Err(EnergyError::out_of_range("pounds", "Weight cannot be negative."));
    }
    Ok(pounds / LB_PER_KG)
}
