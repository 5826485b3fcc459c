//! Recipe Metrics MCP Server Implementation
//!
//! Exposes nutrient queries and store rebuilds as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::library::RecipeLibrary;
use crate::tools::preview;
use crate::tools::recipes;
use crate::tools::status::{StatusTracker, USAGE_INSTRUCTIONS};

/// Recipe Metrics MCP Service
#[derive(Clone)]
pub struct RecipeMetricsService {
    library: Arc<RecipeLibrary>,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<RecipeMetricsService>,
}

impl RecipeMetricsService {
    pub fn new(library: Arc<RecipeLibrary>) -> Self {
        Self {
            library,
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateNutrientsParams {
    /// Recipe name, exactly as the document or table row is named
    pub name: String,
    /// Amount in the given unit (default 1)
    #[serde(default = "default_amount")]
    pub amount: f64,
    /// Unit: "g", "Portion" or any unit the recipe defines (default "g")
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_amount() -> f64 { 1.0 }
fn default_unit() -> String { "g".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeNameParams {
    /// Recipe name
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseIngredientParams {
    /// Text containing "<name> - <amount><unit>", e.g. "Apple - 2 Stück"
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalorieBadgesParams {
    /// Markdown document text
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListRecipesParams {
    /// Case-insensitive substring filter (optional)
    pub query: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl RecipeMetricsService {
    // --- Status ---

    #[tool(description = "Get the current status of the Recipe Metrics service including build info, vault path, recipe count and the last store rebuild")]
    fn recipe_status(&self) -> Result<CallToolResult, McpError> {
        to_json(&self.status_tracker.get_status(&self.library))
    }

    #[tool(description = "Get instructions for the recipe document format and the nutrient tools. Call this when unsure how recipes are written or queried.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Store ---

    #[tool(description = "Rebuild the recipe store from the nutrient table and every Markdown document in the vault. Call after documents were created, changed, renamed or deleted.")]
    fn update_recipes(&self) -> Result<CallToolResult, McpError> {
        let result = recipes::update_recipes(&self.library).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Queries ---

    #[tool(description = "Calculate kcal, fat, carbohydrates (kh) and protein (prot) for an amount of a recipe in grams or any unit the recipe defines. Unresolvable values are null.")]
    fn calculate_nutrients(&self, Parameters(p): Parameters<CalculateNutrientsParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::calculate_nutrients(&self.library, &p.name, p.amount, &p.unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Calculate the nutrients of one portion of a recipe")]
    fn portion_nutrients(&self, Parameters(p): Parameters<RecipeNameParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::portion_nutrients(&self.library, &p.name)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Parse a single ingredient reference such as 'Apple - 2 Stück' into name, amount and canonical unit")]
    fn parse_ingredient(&self, Parameters(p): Parameters<ParseIngredientParams>) -> Result<CallToolResult, McpError> {
        to_json(&recipes::parse_ingredient(&self.library, &p.text))
    }

    #[tool(description = "Compute a calorie badge for every Markdown list line of a document that references a known recipe")]
    fn calorie_badges(&self, Parameters(p): Parameters<CalorieBadgesParams>) -> Result<CallToolResult, McpError> {
        to_json(&preview::calorie_badges(&self.library, &p.text))
    }

    // --- Inspection ---

    #[tool(description = "List recipe names in the store with an optional substring filter")]
    fn list_recipes(&self, Parameters(p): Parameters<ListRecipesParams>) -> Result<CallToolResult, McpError> {
        to_json(&recipes::list_recipes(&self.library, p.query.as_deref()))
    }

    #[tool(description = "Get a recipe's ingredients, unit conversions, total weight and any nutrients derived so far")]
    fn get_recipe(&self, Parameters(p): Parameters<RecipeNameParams>) -> Result<CallToolResult, McpError> {
        match recipes::get_recipe(&self.library, &p.name) {
            Some(detail) => to_json(&detail),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                r#"{{"error": "Recipe not found", "name": {}}}"#,
                serde_json::Value::String(p.name)
            ))])),
        }
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for RecipeMetricsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "recipe-metrics".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Recipe Metrics".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Recipe Metrics - nutrition for Markdown recipe vaults. \
                 Call usage_instructions for the document format. \
                 Queries: calculate_nutrients, portion_nutrients, parse_ingredient, calorie_badges. \
                 Store: update_recipes after vault changes, recipe_status. \
                 Inspection: list_recipes, get_recipe."
                    .into(),
            ),
        }
    }
}
