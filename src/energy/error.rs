//! Energy calculation errors
//!
//! Classified failures surfaced by the formulas and the result assembly.

use thiserror::Error;

/// Energy calculation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnergyError {
    /// A numeric input violates a domain precondition
    #[error("{message} (parameter: {parameter})")]
    OutOfRange {
        parameter: &'static str,
        message: String,
    },

    /// The life stage is not one of the ten valid stages
    #[error("Invalid life stage: {value} (parameter: {parameter})")]
    InvalidArgument {
        parameter: &'static str,
        value: String,
    },

    #[error("Failed to calculate MER results: {cause}")]
    ComputationFailed { cause: String },
}

impl EnergyError {
    pub fn out_of_range(parameter: &'static str, message: impl Into<String>) -> Self {
        EnergyError::OutOfRange {
            parameter,
            message: message.into(),
        }
    }

    pub fn invalid_life_stage(value: impl ToString) -> Self {
        EnergyError::InvalidArgument {
            parameter: "life_stage",
            value: value.to_string(),
        }
    }

    /// True for failures caused by caller input rather than the calculation itself
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EnergyError::OutOfRange { .. } | EnergyError::InvalidArgument { .. }
        )
    }
}

/// Result type for energy calculations
pub type EnergyResult<T> = Result<T, EnergyError>;
