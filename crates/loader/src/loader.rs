use serde::Serialize;
use std::path::PathBuf;

use crate::base_path::{GitRootProbe, RepoRootProbe};
use crate::config::{BasePathMode, LoaderConfig};
use crate::content::{load_directory, load_file};
use crate::mention::parse_mention;
use crate::resolve::resolve_path;

/// Separator between content fragments in the aggregated response.
pub const CONTENT_SEPARATOR: &str = "\n\n---\n\n";

/// Aggregated outcome of one `execute` call.
///
/// `loaded_files` preserves mention order and duplicates. `content` is an
/// explicit `null` when no mention resolved; `message` is omitted from the
/// serialized form entirely when absent, which consumers rely on.
#[derive(Debug, Clone, Serialize)]
pub struct MentionResponse {
    pub loaded_files: Vec<String>,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Resolves `@mention` tokens into loaded file and directory content.
///
/// The configuration is fixed at construction; every call runs the same
/// linear pipeline (parse, resolve base, resolve path, load, aggregate)
/// with no state carried between mentions or between calls, so concurrent
/// calls against one instance are safe.
pub struct MentionLoader {
    config: LoaderConfig,
    probe: Box<dyn RepoRootProbe>,
}

impl MentionLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_probe(config, Box::new(GitRootProbe))
    }

    /// Construct with a custom repository-root probe. Tests substitute a
    /// stub here to pin the base path without touching the resolution logic.
    pub fn with_probe(config: LoaderConfig, probe: Box<dyn RepoRootProbe>) -> Self {
        Self { config, probe }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load content for the given mentions, in order.
    ///
    /// Mentions that parse to nothing or resolve to nothing contribute
    /// nothing; they are not errors. Size-limited and unreadable files
    /// still count as loaded, with an in-band notice as their body.
    pub async fn execute(&self, mentions: &[String]) -> MentionResponse {
        let base_path = self.base_path().await;

        let mut loaded_files = Vec::new();
        let mut content_parts = Vec::new();

        for mention in mentions {
            let Some(path_str) = parse_mention(mention) else {
                continue;
            };

            let Some(resolved) = resolve_path(&base_path, path_str, &self.config.try_extensions)
            else {
                log::debug!("No match for mention '{path_str}'");
                continue;
            };

            // The entry can vanish between resolution and this check; treat
            // that the same as a resolution miss.
            let Ok(meta) = std::fs::metadata(&resolved) else {
                continue;
            };

            let display = resolved.display();
            if meta.is_file() {
                let body = load_file(&resolved, self.config.max_file_size);
                loaded_files.push(display.to_string());
                content_parts.push(format!("# {display}\n\n{body}"));
            } else if meta.is_dir() {
                let body = load_directory(&resolved);
                loaded_files.push(display.to_string());
                content_parts.push(format!("# {display}/\n\n{body}"));
            }
        }

        let content = if content_parts.is_empty() {
            None
        } else {
            Some(content_parts.join(CONTENT_SEPARATOR))
        };

        let message = if self.config.show_loaded_files && !loaded_files.is_empty() {
            Some(format!(
                "Loaded {} file(s): {}",
                loaded_files.len(),
                loaded_files.join(", ")
            ))
        } else {
            None
        };

        MentionResponse {
            loaded_files,
            content,
            message,
        }
    }

    /// One base path per call, computed before any mention is resolved.
    /// Root discovery failures fall back to the working directory and are
    /// never surfaced past this boundary.
    async fn base_path(&self) -> PathBuf {
        if self.config.resolve_relative_to == BasePathMode::GitRoot {
            if let Some(root) = self.probe.discover_root().await {
                return root;
            }
            log::debug!("Repository root discovery failed; using working directory");
        }
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}
