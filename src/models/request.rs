//! MER calculation request
//!
//! Input form for a calculation where the dog's weight was entered in pounds.

use serde::{Deserialize, Serialize};

use crate::energy::{pounds_to_kilograms, EnergyResult, LifeStage};

use super::result_view::{calculate_result_view, ResultView};

/// Dog's weight in pounds plus its life stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MerRequest {
    pub weight_in_pounds: f64,
    pub life_stage: LifeStage,
}

impl MerRequest {
    pub fn new(weight_in_pounds: f64, life_stage: LifeStage) -> Self {
        Self {
            weight_in_pounds,
            life_stage,
        }
    }

    /// Weight converted to kilograms
    pub fn weight_in_kilograms(&self) -> EnergyResult<f64> {
        pounds_to_kilograms(self.weight_in_pounds)
    }

    /// Convert to kilograms and calculate the result view
    pub fn calculate(&self) -> EnergyResult<ResultView> {
        let weight_kg = self.weight_in_kilograms()?;
        calculate_result_view(self.life_stage, weight_kg)
    }
}
