// Source URL helpers
//
// Lexical normalization of source names, applied the same way a debugger
// resolves them against `sourceRoot`.

/// URL scheme plus authority, e.g. `https://host`, if `path` is a URL.
fn split_url(path: &str) -> Option<(&str, &str)> {
    let scheme_end = path.find("://")?;
    let scheme = &path[..scheme_end];
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    let rest = &path[scheme_end + 3..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    let split = scheme_end + 3 + authority_end;
    Some((&path[..split], &path[split..]))
}

/// Whether `path` is absolute or a URL.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || split_url(path).is_some()
}

/// Fold `.` and `..` segments and collapse repeated separators.
///
/// Leading `..` segments of relative paths are kept; `..` above the root of
/// an absolute path is dropped.
pub fn normalize(path: &str) -> String {
    if let Some((origin, rest)) = split_url(path) {
        if rest.is_empty() {
            return path.to_string();
        }
        return format!("{}{}", origin, normalize(rest));
    }

    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Canonical name of `source` as seen through `source_root`.
pub fn compute_source_url(source_root: Option<&str>, source: &str) -> String {
    match source_root {
        Some(root) if !root.is_empty() && !is_absolute(source) => {
            if root.ends_with('/') || source.starts_with('/') {
                normalize(&format!("{}{}", root, source))
            } else {
                normalize(&format!("{}/{}", root, source))
            }
        }
        _ => normalize(source),
    }
}
