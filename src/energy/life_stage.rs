//! Life stage types
//!
//! The closed set of physiological stages that select a dog's MER factors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EnergyError;

/// Life stage or condition of a dog
///
/// `None` is a sentinel kept for parity with form inputs that have no
/// selection yet. It is never valid for a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifeStage {
    #[default]
    None,
    NeuteredAdult,
    IntactAdult,
    InactiveObeseProne,
    WeightLoss,
    WeightGain,
    ActiveWorkingDog,
    Puppy0To4Months,
    Puppy4MonthsToAdult,
    Gestation,
    Lactation,
}

impl LifeStage {
    /// Every stage including the `None` sentinel, in code order
    pub const ALL: [LifeStage; 11] = [
        LifeStage::None,
        LifeStage::NeuteredAdult,
        LifeStage::IntactAdult,
        LifeStage::InactiveObeseProne,
        LifeStage::WeightLoss,
        LifeStage::WeightGain,
        LifeStage::ActiveWorkingDog,
        LifeStage::Puppy0To4Months,
        LifeStage::Puppy4MonthsToAdult,
        LifeStage::Gestation,
        LifeStage::Lactation,
    ];

    /// Stages that can be used in a calculation
    pub fn valid() -> impl Iterator<Item = LifeStage> {
        Self::ALL.into_iter().filter(|s| *s != LifeStage::None)
    }

    /// Stable numeric code
    pub fn code(&self) -> i64 {
        match self {
            LifeStage::None => 0,
            LifeStage::NeuteredAdult => 1,
            LifeStage::IntactAdult => 2,
            LifeStage::InactiveObeseProne => 3,
            LifeStage::WeightLoss => 4,
            LifeStage::WeightGain => 5,
            LifeStage::ActiveWorkingDog => 6,
            LifeStage::Puppy0To4Months => 7,
            LifeStage::Puppy4MonthsToAdult => 8,
            LifeStage::Gestation => 9,
            LifeStage::Lactation => 10,
        }
    }

    /// Identifier name, e.g. "NeuteredAdult"
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeStage::None => "None",
            LifeStage::NeuteredAdult => "NeuteredAdult",
            LifeStage::IntactAdult => "IntactAdult",
            LifeStage::InactiveObeseProne => "InactiveObeseProne",
            LifeStage::WeightLoss => "WeightLoss",
            LifeStage::WeightGain => "WeightGain",
            LifeStage::ActiveWorkingDog => "ActiveWorkingDog",
            LifeStage::Puppy0To4Months => "Puppy0To4Months",
            LifeStage::Puppy4MonthsToAdult => "Puppy4MonthsToAdult",
            LifeStage::Gestation => "Gestation",
            LifeStage::Lactation => "Lactation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LifeStage::None => "No specific life stage or condition (invalid for MER calculation).",
            LifeStage::NeuteredAdult => "Neutered adult dog.",
            LifeStage::IntactAdult => "Intact (non-neutered) adult dog.",
            LifeStage::InactiveObeseProne => "Inactive or obesity-prone dog.",
            LifeStage::WeightLoss => "Dog on a weight loss plan.",
            LifeStage::WeightGain => "Dog requiring weight gain.",
            LifeStage::ActiveWorkingDog => "Active working dog with high energy needs.",
            LifeStage::Puppy0To4Months => "Puppy aged 0 to 4 months.",
            LifeStage::Puppy4MonthsToAdult => "Puppy aged 4 months to adulthood.",
            LifeStage::Gestation => "Pregnant (gestating) dog.",
            LifeStage::Lactation => "Lactating (nursing) dog.",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for LifeStage {
    type Error = EnergyError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| EnergyError::invalid_life_stage(code))
    }
}

impl FromStr for LifeStage {
    type Err = EnergyError;

    /// Accepts an identifier in any case, with or without separators
    /// ("NeuteredAdult", "neutered_adult", "Neutered Adult"), or a numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(code) = trimmed.parse::<i64>() {
            return LifeStage::try_from(code);
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(*c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str().to_lowercase() == normalized)
            .ok_or_else(|| EnergyError::invalid_life_stage(trimmed))
    }
}
