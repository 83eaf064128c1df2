use std::path::Path;

/// Read a file, bounded by `max_file_size` bytes.
///
/// Always returns a body: real content, a size-limit notice, or an error
/// notice. The limit is inclusive, so a file of exactly `max_file_size`
/// bytes reads normally. The stat and the read race against external
/// mutation; a file vanishing in between degrades to the error notice.
pub fn load_file(path: &Path, max_file_size: u64) -> String {
    let size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) => return format!("[Error reading file: {err}]"),
    };
    if size > max_file_size {
        return format!("[File too large: {size} bytes > {max_file_size} bytes]");
    }
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => format!("[Error reading file: {err}]"),
    }
}

/// List a directory's immediate entries, sorted by name.
///
/// Files carry their byte size, subdirectories a trailing `/`. Entries that
/// stat as neither (broken symlinks, sockets) are skipped. No recursion.
pub fn load_directory(path: &Path) -> String {
    match list_entries(path) {
        Ok(lines) if lines.is_empty() => "Empty directory".to_string(),
        Ok(lines) => format!("Directory contents:\n{}", lines.join("\n")),
        Err(err) => format!("[Error reading directory: {err}]"),
    }
}

fn list_entries(path: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path)? {
        names.push(entry?.file_name());
    }
    names.sort();

    let mut lines = Vec::new();
    for name in names {
        // Follow symlinks so a linked file shows its target's size.
        let Ok(meta) = std::fs::metadata(path.join(&name)) else {
            continue;
        };
        let display = name.to_string_lossy();
        if meta.is_file() {
            lines.push(format!("  - {display} ({} bytes)", meta.len()));
        } else if meta.is_dir() {
            lines.push(format!("  - {display}/"));
        }
    }
    Ok(lines)
}
