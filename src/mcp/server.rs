//! Canine MER MCP Server Implementation
//!
//! Implements the MCP server with all calculator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::energy::EnergyError;
use crate::tools::calculator::{self, WeightUnit};
use crate::tools::status::StatusTracker;

/// Canine MER MCP Service
#[derive(Clone)]
pub struct MerService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<MerService>,
}

impl MerService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for MerService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMerParams {
    /// Life stage identifier (e.g. "NeuteredAdult", "puppy_0_to_4_months") or numeric code 1-10
    pub life_stage: String,
    /// Dog's body weight, must be greater than zero
    pub weight: f64,
    /// Unit of the weight: "kg" (default) or "lb"
    #[serde(default = "default_unit")]
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertWeightParams {
    /// Weight to convert, must not be negative
    pub value: f64,
    /// Unit of the value: "kg" (default) or "lb"
    #[serde(default = "default_unit")]
    pub from: String,
}

fn default_unit() -> String { "kg".to_string() }

// ============================================================================
// Helpers
// ============================================================================

/// Map a calculation failure to an MCP error
fn energy_error(e: EnergyError) -> McpError {
    if e.is_validation() {
        McpError::invalid_params(e.to_string(), None)
    } else {
        McpError::internal_error(e.to_string(), None)
    }
}

fn parse_unit(unit: &str) -> Result<WeightUnit, McpError> {
    WeightUnit::from_str(unit).ok_or_else(|| {
        McpError::invalid_params(
            format!("Unknown weight unit: '{}'. Use \"kg\" or \"lb\".", unit),
            None,
        )
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl MerService {
    // --- Status ---

    #[tool(description = "Get the current status of the MER calculator service including build info, calculation counts, and process information")]
    async fn mer_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        to_json(&status)
    }

    #[tool(description = "Get instructions for calculating a dog's energy requirements, including the life stage factor table. Call this when unsure how to use the calculator tools.")]
    fn mer_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::MER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(MER_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Calculate a dog's Resting Energy Requirement (RER) and Maintenance Energy Requirement (MER) range and mean in kcal/day from its life stage and body weight")]
    async fn calculate_mer(&self, Parameters(p): Parameters<CalculateMerParams>) -> Result<CallToolResult, McpError> {
        let unit = parse_unit(&p.unit)?;
        let result = calculator::calculate_mer(&p.life_stage, p.weight, unit);

        self.status_tracker.lock().await.record_calculation(result.is_ok());

        let view = result.map_err(|e| {
            tracing::warn!(
                life_stage = %p.life_stage,
                weight = p.weight,
                unit = unit.as_str(),
                "Rejected MER calculation: {}",
                e
            );
            energy_error(e)
        })?;
        to_json(&view)
    }

    #[tool(description = "Convert a dog's weight between kilograms and pounds (1 kg = 2.20462 lb)")]
    fn convert_weight(&self, Parameters(p): Parameters<ConvertWeightParams>) -> Result<CallToolResult, McpError> {
        let unit = parse_unit(&p.from)?;
        let result = calculator::convert_weight(p.value, unit).map_err(energy_error)?;
        to_json(&result)
    }

    #[tool(description = "List all valid life stages with their numeric codes, labels, descriptions, and MER factor ranges")]
    fn list_life_stages(&self) -> Result<CallToolResult, McpError> {
        let result = calculator::list_life_stages().map_err(energy_error)?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "canine_mer".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Canine MER Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Canine MER Calculator - daily energy requirements for dogs. \
                 Call mer_instructions for the formulas and life stage table. \
                 Calculate: calculate_mer (life_stage, weight, unit kg|lb). \
                 Reference: list_life_stages, convert_weight. \
                 Status: mer_status."
                    .into(),
            ),
        }
    }
}
