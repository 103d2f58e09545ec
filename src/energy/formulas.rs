//! Energy requirement formulas
//!
//! Resting Energy Requirement (RER) and Maintenance Energy Requirement (MER)
//! for dogs. MER is expressed as a range: RER multiplied by the lower and
//! upper factor for the dog's life stage.

use serde::{Deserialize, Serialize};

use super::error::{EnergyError, EnergyResult};
use super::life_stage::LifeStage;

/// Kilocalories per metabolic kilogram
pub const RER_COEFFICIENT: f64 = 70.0;
/// Exponent applied to body weight for metabolic body size
pub const RER_EXPONENT: f64 = 0.75;

/// Lower and upper MER multipliers for a life stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MerFactorRange {
    pub lower: f64,
    pub upper: f64,
}

impl MerFactorRange {
    const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// True when the stage has a single factor (e.g. weight loss, young puppies)
    pub fn is_fixed(&self) -> bool {
        self.lower == self.upper
    }
}

/// RER plus the MER range, all in kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MerResult {
    pub resting_energy_requirement: f64,
    pub lower_mer: f64,
    pub upper_mer: f64,
}

impl MerResult {
    pub fn mean(&self) -> f64 {
        (self.lower_mer + self.upper_mer) / 2.0
    }
}

/// Calculate RER in kcal/day: `70 * weight_kg^0.75`
pub fn resting_energy_requirement(weight_kg: f64) -> EnergyResult<f64> {
    if !(weight_kg > 0.0) {
        return Err(EnergyError::out_of_range(
            "body_weight_kg",
            "Body weight must be positive.",
        ));
    }
    Ok(RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT))
}

/// Look up the MER factor range for a life stage
pub fn mer_factor_range(life_stage: LifeStage) -> EnergyResult<MerFactorRange> {
    let range = match life_stage {
        LifeStage::NeuteredAdult | LifeStage::IntactAdult => MerFactorRange::new(1.4, 1.6),
        LifeStage::InactiveObeseProne => MerFactorRange::new(1.2, 1.4),
        LifeStage::WeightLoss => MerFactorRange::new(1.0, 1.0),
        LifeStage::WeightGain => MerFactorRange::new(1.2, 1.8),
        LifeStage::ActiveWorkingDog => MerFactorRange::new(2.0, 5.0),
        LifeStage::Puppy0To4Months => MerFactorRange::new(3.0, 3.0),
        LifeStage::Puppy4MonthsToAdult => MerFactorRange::new(1.5, 2.0),
        LifeStage::Gestation => MerFactorRange::new(1.6, 2.0),
        LifeStage::Lactation => MerFactorRange::new(2.0, 5.0),
        LifeStage::None => return Err(EnergyError::invalid_life_stage(life_stage)),
    };
    Ok(range)
}

/// Calculate RER and the MER range for a life stage and weight
///
/// Weight is validated before the life stage.
pub fn maintenance_energy_requirement(
    life_stage: LifeStage,
    weight_kg: f64,
) -> EnergyResult<MerResult> {
    let rer = resting_energy_requirement(weight_kg)?;
    let factors = mer_factor_range(life_stage)?;

    Ok(MerResult {
        resting_energy_requirement: rer,
        lower_mer: rer * factors.lower,
        upper_mer: rer * factors.upper,
    })
}

/// Calculate the midpoint of the MER range
pub fn mean_maintenance_energy_requirement(
    life_stage: LifeStage,
    weight_kg: f64,
) -> EnergyResult<f64> {
    Ok(maintenance_energy_requirement(life_stage, weight_kg)?.mean())
}
