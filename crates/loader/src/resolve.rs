use std::path::{Path, PathBuf};

/// Map a normalized path string onto an existing filesystem entry.
///
/// The literal join is tried first and wins over any extension candidate.
/// Otherwise extensions are appended in configured order and the first hit
/// wins; the order is caller-controlled and contractual, since callers rely
/// on it to disambiguate between sibling files. Existence checks go through
/// `Path::exists`, which follows symlinks.
pub fn resolve_path(base: &Path, path_str: &str, try_extensions: &[String]) -> Option<PathBuf> {
    let candidate = base.join(path_str);
    if candidate.exists() {
        return Some(candidate);
    }

    for ext in try_extensions {
        let with_ext = base.join(format!("{path_str}{ext}"));
        if with_ext.exists() {
            return Some(with_ext);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::resolve_path;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_match_wins_over_extension_candidates() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("notes"), b"exact").unwrap();
        fs::write(temp.path().join("notes.md"), b"fallback").unwrap();

        let resolved = resolve_path(temp.path(), "notes", &exts(&[".md"])).unwrap();
        assert_eq!(resolved, temp.path().join("notes"));
    }

    #[test]
    fn first_configured_extension_wins() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("config.md"), b"md").unwrap();
        fs::write(temp.path().join("config.txt"), b"txt").unwrap();

        let resolved = resolve_path(temp.path(), "config", &exts(&[".txt", ".md"])).unwrap();
        assert_eq!(resolved, temp.path().join("config.txt"));

        let resolved = resolve_path(temp.path(), "config", &exts(&[".md", ".txt"])).unwrap();
        assert_eq!(resolved, temp.path().join("config.md"));
    }

    #[test]
    fn resolves_directories() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();

        let resolved = resolve_path(temp.path(), "docs", &exts(&[".md"])).unwrap();
        assert_eq!(resolved, temp.path().join("docs"));
    }

    #[test]
    fn missing_path_yields_none() {
        let temp = tempdir().unwrap();
        assert_eq!(resolve_path(temp.path(), "ghost", &exts(&[".md", ".txt"])), None);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("target.md"), b"real").unwrap();
        std::os::unix::fs::symlink(temp.path().join("target.md"), temp.path().join("link.md"))
            .unwrap();

        let resolved = resolve_path(temp.path(), "link.md", &[]).unwrap();
        assert_eq!(resolved, temp.path().join("link.md"));
    }
}
