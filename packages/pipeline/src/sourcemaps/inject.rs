//! Sources Content Injection
//!
//! Fills missing `sourcesContent` entries from disk so the map is
//! self-contained.

use super::source_root::LazySourceRoot;
use crate::config::SourcemapOptions;
use crate::file_system::{decode_uri, dirname, resolve, AbsoluteFsPath};
use crate::logging::Logger;
use devmap_codec::RawSourceMap;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use std::fs;

// Null-byte prefixed ids and a few internal schemes never name a file on disk.
static VIRTUAL_SOURCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:dep:|browser-external:|virtual:)|\x00").unwrap());

/// Whether `source` is a virtual module id rather than a file path.
pub fn is_virtual_source(source: &str) -> bool {
    VIRTUAL_SOURCE_RE.is_match(source)
}

fn needs_content(source: &str, content: Option<&str>) -> bool {
    content.filter(|c| !c.is_empty()).is_none() && !source.is_empty() && !is_virtual_source(source)
}

fn resolve_source_path(
    source_root: &LazySourceRoot<'_>,
    artifact_dir: &str,
    source: &str,
) -> AbsoluteFsPath {
    let decoded = decode_uri(source).unwrap_or_else(|| source.to_string());
    match source_root.get() {
        Some(root) => resolve(root.as_str(), &[&decoded]),
        None => resolve(artifact_dir, &[&decoded]),
    }
}

/// Read every source whose content is missing from `map` and store it at the
/// source's own `sourcesContent` index.
///
/// Reads run in parallel, one task per slot. Unreadable sources get `null`
/// content and a single coalesced warning for `file`; the resolved paths are
/// returned.
pub fn inject_sources_content(
    map: &mut RawSourceMap,
    file: &str,
    logger: &dyn Logger,
    options: &SourcemapOptions,
) -> Vec<AbsoluteFsPath> {
    let mut sources_content = map.sources_content.take().unwrap_or_default();
    if sources_content.len() < map.sources.len() {
        sources_content.resize(map.sources.len(), None);
    }

    let source_root = LazySourceRoot::new(map.source_root.as_deref(), file);
    let artifact_dir = dirname(file);

    let missing_sources: Vec<AbsoluteFsPath> = map
        .sources
        .par_iter()
        .zip(sources_content.par_iter_mut())
        .filter_map(|(source, slot)| {
            let source = source.as_deref()?;
            if !needs_content(source, slot.as_deref()) {
                return None;
            }

            let resolved = resolve_source_path(&source_root, &artifact_dir, source);
            match fs::read(resolved.as_path()) {
                Ok(bytes) => {
                    *slot = Some(String::from_utf8_lossy(&bytes).into_owned());
                    None
                }
                Err(err) => {
                    tracing::trace!(target: "devmap::sourcemap", "cannot read {}: {}", resolved, err);
                    *slot = None;
                    Some(resolved)
                }
            }
        })
        .collect();

    map.sources_content = Some(sources_content);

    if !missing_sources.is_empty() {
        logger.warn_once(&format!(
            "Sourcemap for \"{}\" points to missing source files",
            file
        ));
        if options.debug {
            let listing: Vec<&str> = missing_sources.iter().map(AbsoluteFsPath::as_str).collect();
            tracing::debug!(target: "devmap::sourcemap", "Missing sources:\n  {}", listing.join("\n  "));
        }
    }

    missing_sources
}
