//! Calculator MCP Tools
//!
//! Tools for energy requirement calculations and weight conversions.

use serde::Serialize;

use crate::energy::{
    kilograms_to_pounds, mer_factor_range, pounds_to_kilograms, EnergyResult, LifeStage,
};
use crate::models::{add_spaces_to_pascal_case, calculate_result_view, MerRequest, ResultView};

/// Unit a weight was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lb",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pounds),
            _ => None,
        }
    }
}

/// Response for convert_weight
#[derive(Debug, Serialize)]
pub struct ConvertWeightResponse {
    pub kilograms: f64,
    pub pounds: f64,
}

/// Life stage with its MER factors
#[derive(Debug, Serialize)]
pub struct LifeStageSummary {
    pub code: i64,
    pub identifier: &'static str,
    pub label: String,
    pub description: &'static str,
    pub lower_factor: f64,
    pub upper_factor: f64,
}

/// Response for list_life_stages
#[derive(Debug, Serialize)]
pub struct ListLifeStagesResponse {
    pub life_stages: Vec<LifeStageSummary>,
    pub total: usize,
}

// ============================================================================
// Calculator Tools
// ============================================================================

/// Calculate the MER result view for a life stage name/code and a weight
pub fn calculate_mer(life_stage: &str, weight: f64, unit: WeightUnit) -> EnergyResult<ResultView> {
    let life_stage: LifeStage = life_stage.parse()?;

    match unit {
        WeightUnit::Kilograms => calculate_result_view(life_stage, weight),
        WeightUnit::Pounds => MerRequest::new(weight, life_stage).calculate(),
    }
}

/// Convert a weight to both kilograms and pounds
pub fn convert_weight(value: f64, from: WeightUnit) -> EnergyResult<ConvertWeightResponse> {
    let response = match from {
        WeightUnit::Kilograms => ConvertWeightResponse {
            kilograms: value,
            pounds: kilograms_to_pounds(value)?,
        },
        WeightUnit::Pounds => ConvertWeightResponse {
            kilograms: pounds_to_kilograms(value)?,
            pounds: value,
        },
    };
    Ok(response)
}

/// List every life stage usable in a calculation
pub fn list_life_stages() -> EnergyResult<ListLifeStagesResponse> {
    let life_stages = LifeStage::valid()
        .map(|stage| {
            let factors = mer_factor_range(stage)?;
            Ok(LifeStageSummary {
                code: stage.code(),
                identifier: stage.as_str(),
                label: add_spaces_to_pascal_case(stage.as_str()),
                description: stage.description(),
                lower_factor: factors.lower,
                upper_factor: factors.upper,
            })
        })
        .collect::<EnergyResult<Vec<_>>>()?;

    Ok(ListLifeStagesResponse {
        total: life_stages.len(),
        life_stages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::EnergyError;

    #[test]
    fn test_weight_unit_from_str() {
        assert_eq!(WeightUnit::from_str("kg"), Some(WeightUnit::Kilograms));
        assert_eq!(WeightUnit::from_str(" LBS "), Some(WeightUnit::Pounds));
        assert_eq!(WeightUnit::from_str("stone"), None);
        assert_eq!(WeightUnit::Pounds.as_str(), "lb");
    }

    #[test]
    fn test_calculate_mer_by_name_and_code() {
        let by_name = calculate_mer("NeuteredAdult", 10.0, WeightUnit::Kilograms).unwrap();
        let by_code = calculate_mer("1", 10.0, WeightUnit::Kilograms).unwrap();
        assert_eq!(by_name, by_code);
        assert_eq!(by_name.life_stage, "Neutered Adult");
    }

    #[test]
    fn test_calculate_mer_in_pounds() {
        let view = calculate_mer("gestation", 22.0462, WeightUnit::Pounds).unwrap();
        let direct = calculate_mer("Gestation", 10.0, WeightUnit::Kilograms).unwrap();
        assert!((view.mean - direct.mean).abs() < 1e-6);
    }

    #[test]
    fn test_calculate_mer_rejects_input() {
        let err = calculate_mer("0", 10.0, WeightUnit::Kilograms).unwrap_err();
        assert!(matches!(err, EnergyError::InvalidArgument { .. }));

        let err = calculate_mer("999", 10.0, WeightUnit::Kilograms).unwrap_err();
        assert!(err.to_string().contains("999"));

        let err = calculate_mer("Lactation", 0.0, WeightUnit::Kilograms).unwrap_err();
        assert!(matches!(err, EnergyError::OutOfRange { .. }));
    }

    #[test]
    fn test_convert_weight() {
        let from_kg = convert_weight(10.0, WeightUnit::Kilograms).unwrap();
        assert!((from_kg.pounds - 22.0462).abs() < 0.0001);

        let from_lb = convert_weight(22.0462, WeightUnit::Pounds).unwrap();
        assert!((from_lb.kilograms - 10.0).abs() < 0.0001);

        assert!(convert_weight(-1.0, WeightUnit::Pounds).is_err());
    }

    #[test]
    fn test_list_life_stages() {
        let response = list_life_stages().unwrap();
        assert_eq!(response.total, 10);
        assert_eq!(response.life_stages[0].identifier, "NeuteredAdult");
        assert_eq!(response.life_stages[0].label, "Neutered Adult");

        let working = response
            .life_stages
            .iter()
            .find(|s| s.identifier == "ActiveWorkingDog")
            .unwrap();
        assert_eq!(working.code, 6);
        assert_eq!(working.lower_factor, 2.0);
        assert_eq!(working.upper_factor, 5.0);
    }
}
