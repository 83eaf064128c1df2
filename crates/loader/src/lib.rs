//! # Mention Loader
//!
//! Resolve user-supplied `@mention` tokens into loaded file and directory
//! content, ready for injection into a larger prompt or document.
//!
//! ## Pipeline
//!
//! ```text
//! Mentions
//!     │
//!     ├──> Parser (strip sigil, trim, skip empties)
//!     │      └─> Path strings
//!     │
//!     ├──> Base path (cwd, or git root with silent fallback)
//!     │
//!     ├──> Resolver (exact match, then extension fallback in order)
//!     │      └─> Files / directories
//!     │
//!     └──> Loader (bounded read / sorted listing)
//!            └─> Aggregated response
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use mention_loader::{LoaderConfig, MentionLoader};
//!
//! #[tokio::main]
//! async fn main() {
//!     let loader = MentionLoader::new(LoaderConfig::default());
//!     let response = loader.execute(&["@README.md".to_string()]).await;
//!
//!     println!("loaded {} file(s)", response.loaded_files.len());
//! }
//! ```

mod base_path;
mod config;
mod content;
mod error;
mod loader;
mod mention;
mod resolve;

pub use base_path::{GitRootProbe, RepoRootProbe};
pub use config::{BasePathMode, LoaderConfig, DEFAULT_MAX_FILE_SIZE};
pub use error::{ConfigError, Result};
pub use loader::{MentionLoader, MentionResponse, CONTENT_SEPARATOR};
