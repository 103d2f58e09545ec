//! Energy calculation module
//!
//! Pure formulas for canine energy requirements and weight conversions.

pub mod error;
pub mod formulas;
pub mod life_stage;
pub mod units;

pub use error::{EnergyError, EnergyResult};
pub use formulas::{
    maintenance_energy_requirement, mean_maintenance_energy_requirement, mer_factor_range,
    resting_energy_requirement, MerFactorRange, MerResult,
};
pub use life_stage::LifeStage;
pub use units::{kilograms_to_pounds, pounds_to_kilograms, LB_PER_KG};
