//! Canine MER Calculator
//!
//! An MCP server for dog daily energy requirement calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use canine_mer::build_info;
use canine_mer::mcp::MerService;

/// Get the log directive from environment or use default
fn get_log_directive() -> String {
    std::env::var("CANINE_MER_LOG").unwrap_or_else(|_| "canine_mer=info".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(get_log_directive().parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = MerService::new();

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
