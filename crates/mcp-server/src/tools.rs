//! MCP tool surface for the mention loader.
//!
//! One tool, `mention_loader`, backed by an immutable configuration loaded
//! once at service construction.

use mention_loader::{LoaderConfig, MentionLoader};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Mention Loader MCP Service
#[derive(Clone)]
pub struct MentionLoaderService {
    /// Loader with its per-instance configuration
    loader: Arc<MentionLoader>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl MentionLoaderService {
    pub fn new() -> Self {
        Self::with_config(load_config_from_env())
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            loader: Arc::new(MentionLoader::new(config)),
            tool_router: Self::tool_router(),
        }
    }
}

fn load_config_from_env() -> LoaderConfig {
    let Some(path) = std::env::var("MENTION_CONFIG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    else {
        return LoaderConfig::default();
    };

    match LoaderConfig::from_file(Path::new(&path)) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Failed to load config from {path}: {err}; falling back to defaults");
            LoaderConfig::default()
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MentionLoadRequest {
    /// @mentioned file or directory paths, in order
    #[schemars(description = "List of @mentioned file or directory paths")]
    pub mentions: Vec<String>,
}

#[tool_router]
impl MentionLoaderService {
    /// Load @mentioned files and directories
    #[tool(description = "Load file or directory content when @mentions are used in prompts")]
    pub async fn mention_loader(
        &self,
        Parameters(request): Parameters<MentionLoadRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.loader.execute(&request.mentions).await;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).unwrap_or_default(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for MentionLoaderService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Mention Loader resolves @mention tokens (e.g. '@README.md', '@docs/') against the working directory or git root and returns file content or directory listings. Call 'mention_loader' with the list of mentioned paths.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mention_loader::BasePathMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_requires_mentions() {
        let missing = serde_json::from_value::<MentionLoadRequest>(serde_json::json!({}));
        assert!(missing.is_err());

        let request: MentionLoadRequest =
            serde_json::from_value(serde_json::json!({"mentions": ["@a.md", "b"]})).unwrap();
        assert_eq!(request.mentions, vec!["@a.md", "b"]);
    }

    #[test]
    fn service_holds_custom_config() {
        let config = LoaderConfig {
            resolve_relative_to: BasePathMode::GitRoot,
            show_loaded_files: false,
            ..LoaderConfig::default()
        };
        let service = MentionLoaderService::with_config(config);
        assert_eq!(
            service.loader.config().resolve_relative_to,
            BasePathMode::GitRoot
        );
        assert!(!service.loader.config().show_loaded_files);
    }

    #[test]
    fn config_file_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("mention.toml");
        std::fs::write(&path, "max_file_size = 2048\n").unwrap();

        let config = LoaderConfig::from_file(&path).unwrap();
        assert_eq!(config.max_file_size, 2048);
    }
}
