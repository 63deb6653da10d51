use super::types::AbsoluteFsPath;
use super::util::{clean_path, is_rooted, normalize_separators};
use std::io;
use std::path::PathBuf;

/// Current working directory in POSIX form.
pub fn pwd() -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    normalize_separators(cwd.to_string_lossy().as_ref())
}

/// Lexically resolve `paths` right to left until an absolute path is formed,
/// anchoring at the current directory if none is. The file system is not
/// consulted.
pub fn resolve(base_path: &str, paths: &[&str]) -> AbsoluteFsPath {
    let mut resolved = String::new();
    for segment in std::iter::once(base_path).chain(paths.iter().copied()) {
        if segment.is_empty() {
            continue;
        }
        if is_rooted(segment) {
            resolved = segment.to_string();
        } else if resolved.is_empty() {
            resolved = segment.to_string();
        } else {
            resolved = format!("{}/{}", resolved, segment);
        }
    }
    if !is_rooted(&resolved) {
        resolved = if resolved.is_empty() {
            pwd()
        } else {
            format!("{}/{}", pwd(), resolved)
        };
    }
    AbsoluteFsPath::new(clean_path(&resolved))
}

/// Parent directory of `file`, `.` when it has none.
pub fn dirname(file: &str) -> String {
    let normalized = normalize_separators(file);
    let trimmed = normalized.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => trimmed[..idx].to_string(),
        None if normalized.starts_with('/') => "/".to_string(),
        None => ".".to_string(),
    }
}

/// Canonical path with every symbolic link resolved. Fails when the path
/// does not exist or cannot be accessed.
pub fn realpath(path: &AbsoluteFsPath) -> io::Result<AbsoluteFsPath> {
    let real = std::fs::canonicalize(path.as_path())?;
    Ok(AbsoluteFsPath::new(normalize_separators(
        real.to_string_lossy().as_ref(),
    )))
}
