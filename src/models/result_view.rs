//! MER result view
//!
//! Packages a raw energy calculation into a display-ready result.

use serde::{Deserialize, Serialize};

use crate::energy::{
    kilograms_to_pounds, maintenance_energy_requirement, EnergyError, EnergyResult, LifeStage,
};

use super::label::add_spaces_to_pascal_case;

/// Display-ready MER calculation results
///
/// All energy values are kcal/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultView {
    /// Human-readable life stage, e.g. "Neutered Adult"
    pub life_stage: String,
    pub weight_in_pounds: f64,
    pub lower_bounds: f64,
    pub upper_bounds: f64,
    /// Midpoint of `lower_bounds` and `upper_bounds`
    pub mean: f64,
    pub rer: f64,
    // Feed volumes, filled in by callers that know the food's kcal per cup
    pub cups_low: Option<f64>,
    pub cups_high: Option<f64>,
    pub cups_mean: Option<f64>,
}

/// Calculate the MER result view for a dog
///
/// Fails with `OutOfRange` for a non-positive weight and `InvalidArgument`
/// for `LifeStage::None`.
pub fn calculate_result_view(life_stage: LifeStage, weight_kg: f64) -> EnergyResult<ResultView> {
    if !(weight_kg > 0.0) {
        return Err(EnergyError::out_of_range(
            "weight_in_kgs",
            "Weight must be positive.",
        ));
    }

    let mer = maintenance_energy_requirement(life_stage, weight_kg).map_err(|e| match e {
        EnergyError::InvalidArgument { .. } => EnergyError::invalid_life_stage(life_stage),
        EnergyError::OutOfRange { message, .. } => EnergyError::out_of_range(
            "weight_in_kgs",
            format!("Invalid weight provided for calculation. {}", message),
        ),
        other => EnergyError::ComputationFailed {
            cause: other.to_string(),
        },
    })?;

    let energies = [
        ("rer", mer.resting_energy_requirement),
        ("lower_mer", mer.lower_mer),
        ("upper_mer", mer.upper_mer),
    ];
    if let Some((name, value)) = energies.iter().find(|(_, v)| !v.is_finite()) {
        return Err(EnergyError::ComputationFailed {
            cause: format!("{} is not finite ({}) for weight {} kg", name, value, weight_kg),
        });
    }

    let mean = (mer.lower_mer + mer.upper_mer) / 2.0;
    let weight_in_pounds = kilograms_to_pounds(weight_kg)?;

    tracing::debug!(
        life_stage = %life_stage,
        weight_kg,
        rer = mer.resting_energy_requirement,
        lower = mer.lower_mer,
        upper = mer.upper_mer,
        "Calculated MER result view"
    );

    Ok(ResultView {
        life_stage: add_spaces_to_pascal_case(life_stage.as_str()),
        weight_in_pounds,
        lower_bounds: mer.lower_mer,
        upper_bounds: mer.upper_mer,
        mean,
        rer: mer.resting_energy_requirement,
        cups_low: None,
        cups_high: None,
        cups_mean: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutered_adult_ten_kg() {
        let view = calculate_result_view(LifeStage::NeuteredAdult, 10.0).unwrap();
        assert_eq!(view.life_stage, "Neutered Adult");
        assert!((view.weight_in_pounds - 22.0462).abs() < 0.0001);
        assert!((view.rer - 393.6389).abs() < 0.001);
        assert!((view.lower_bounds - 551.0945).abs() < 0.001);
        assert!((view.upper_bounds - 629.8223).abs() < 0.001);
        assert!((view.mean - 590.4584).abs() < 0.001);
        assert!(view.upper_bounds > view.lower_bounds);
    }

    #[test]
    fn test_mean_is_midpoint() {
        for stage in LifeStage::valid() {
            let view = calculate_result_view(stage, 12.0).unwrap();
            assert_eq!(view.mean, (view.lower_bounds + view.upper_bounds) / 2.0);
        }
    }

    #[test]
    fn test_puppy_degenerate_range() {
        let view = calculate_result_view(LifeStage::Puppy0To4Months, 5.0).unwrap();
        assert_eq!(view.lower_bounds, view.upper_bounds);
        assert_eq!(view.lower_bounds, view.rer * 3.0);
        assert_eq!(view.mean, view.lower_bounds);
        assert_eq!(view.life_stage, "Puppy 0 To 4 Months");
    }

    #[test]
    fn test_active_working_dog() {
        let view = calculate_result_view(LifeStage::ActiveWorkingDog, 15.0).unwrap();
        assert_eq!(view.lower_bounds, view.rer * 2.0);
        assert_eq!(view.upper_bounds, view.rer * 5.0);
        assert_eq!(view.life_stage, "Active Working Dog");
    }

    #[test]
    fn test_cup_fields_unset() {
        let view = calculate_result_view(LifeStage::Lactation, 20.0).unwrap();
        assert!(view.cups_low.is_none());
        assert!(view.cups_high.is_none());
        assert!(view.cups_mean.is_none());
    }

    #[test]
    fn test_none_life_stage() {
        let err = calculate_result_view(LifeStage::None, 10.0).unwrap_err();
        assert_eq!(err, EnergyError::invalid_life_stage("None"));
    }

    #[test]
    fn test_non_positive_weight() {
        for w in [0.0, -1.0, -5.0, f64::NAN] {
            let err = calculate_result_view(LifeStage::NeuteredAdult, w).unwrap_err();
            assert!(matches!(err, EnergyError::OutOfRange { .. }));
            assert!(err.to_string().contains("Weight must be positive"));
        }
    }

    #[test]
    fn test_bad_weight_reported_before_bad_stage() {
        let err = calculate_result_view(LifeStage::None, -5.0).unwrap_err();
        assert!(matches!(err, EnergyError::OutOfRange { .. }));
    }

    #[test]
    fn test_infinite_weight_fails_computation() {
        let err = calculate_result_view(LifeStage::NeuteredAdult, f64::INFINITY).unwrap_err();
        assert!(matches!(err, EnergyError::ComputationFailed { .. }));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_result_view(LifeStage::WeightGain, 8.4).unwrap();
        let b = calculate_result_view(LifeStage::WeightGain, 8.4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.mean.to_bits(), b.mean.to_bits());
        assert_eq!(a.rer.to_bits(), b.rer.to_bits());
    }

    #[test]
    fn test_serializes_unset_cups_as_null() {
        let view = calculate_result_view(LifeStage::IntactAdult, 10.0).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["life_stage"], "Intact Adult");
        assert!(json["cups_low"].is_null());
        assert!(json["cups_mean"].is_null());
    }
}
