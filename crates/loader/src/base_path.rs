use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;

const GIT_ROOT_TIMEOUT: Duration = Duration::from_secs(2);

/// Discovers the repository root for the current working directory.
///
/// Narrow capability boundary: one operation, `None` on any failure. The
/// caller decides the fallback, so no error ever crosses this interface.
#[async_trait]
pub trait RepoRootProbe: Send + Sync {
    async fn discover_root(&self) -> Option<PathBuf>;
}

/// `git rev-parse --show-toplevel` against the process working directory.
#[derive(Debug, Default)]
pub struct GitRootProbe;

#[async_trait]
impl RepoRootProbe for GitRootProbe {
    async fn discover_root(&self) -> Option<PathBuf> {
        let out = timeout(
            GIT_ROOT_TIMEOUT,
            tokio::process::Command::new("git")
                .arg("rev-parse")
                .arg("--show-toplevel")
                .output(),
        )
        .await
        .ok()?
        .ok()?;
        if !out.status.success() {
            return None;
        }
        let raw = String::from_utf8_lossy(&out.stdout);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(PathBuf::from(trimmed))
    }
}
