//! Mention Loader MCP Server
//!
//! Loads file and directory content for `@mention` tokens via MCP protocol.
//!
//! ## Tools
//!
//! - `mention_loader` - Resolve a list of @mentioned paths and return their
//!   content (files) or a one-level listing (directories)
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "mention-loader": {
//!       "command": "mention-mcp"
//!     }
//!   }
//! }
//! ```
//!
//! Configuration is read once at startup from the file named by the
//! `MENTION_CONFIG` environment variable (JSON or TOML); defaults apply
//! when unset.

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::MentionLoaderService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting mention loader MCP server");

    let service = MentionLoaderService::new();
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Mention loader MCP server stopped");
    Ok(())
}
