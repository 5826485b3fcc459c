//! Recipe Metrics
//!
//! An MCP server computing nutrition for a vault of Markdown recipes.

use std::sync::Arc;

use recipe_metrics::build_info;
use recipe_metrics::mcp::RecipeMetricsService;
use recipe_metrics::{Config, RecipeLibrary};
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so it does not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("recipe_metrics=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    eprintln!("Vault path: {}", config.vault_path.display());
    eprintln!("Nutrient table: {}", config.table_path.display());

    let library = Arc::new(RecipeLibrary::new(&config));

    // A missing vault is not fatal: update_recipes can be called once it exists
    if let Err(e) = library.update_recipes() {
        tracing::warn!(error = %e, "initial recipe load failed");
    }

    eprintln!("Starting MCP server on stdio...");
    let service = RecipeMetricsService::new(library);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
