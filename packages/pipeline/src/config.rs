use crate::sourcemaps::ignore_list::Classification;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Namespace that switches on source map diagnostics in `DEBUG`.
pub const DEBUG_NAMESPACE: &str = "devmap:sourcemap";

/// The diagnostic toggle.
///
/// When `debug` is set, the injector lists every missing source and emitted
/// code carries the pretty-printed map as a trailing comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcemapOptions {
    #[serde(default)]
    pub debug: bool,
}

impl SourcemapOptions {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Read the toggle from the `DEBUG` environment variable.
    pub fn from_env() -> Self {
        let debug = std::env::var("DEBUG")
            .map(|value| debug_filter_enables(&value, DEBUG_NAMESPACE))
            .unwrap_or(false);
        Self { debug }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let options: SourcemapOptions = serde_json::from_str(&content)?;
        Ok(options)
    }
}

fn pattern_matches(pattern: &str, namespace: &str) -> bool {
    glob::Pattern::new(pattern)
        .map(|p| p.matches(namespace))
        .unwrap_or(false)
}

/// Whether a `DEBUG`-style filter (`a:*,-a:b c`) enables `namespace`.
/// Exclusions (`-` prefix) win over inclusions.
pub fn debug_filter_enables(filter: &str, namespace: &str) -> bool {
    let mut enabled = false;
    for pattern in filter
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
    {
        if let Some(excluded) = pattern.strip_prefix('-') {
            if pattern_matches(excluded, namespace) {
                return false;
            }
        } else if pattern_matches(pattern, namespace) {
            enabled = true;
        }
    }
    enabled
}

/// Classifier deciding whether a source should be hidden from debuggers.
/// Receives the absolute source path and the map's own path.
pub type IgnoreListFn = dyn Fn(&str, &str) -> Classification + Send + Sync;

/// How sources are marked in `x_google_ignoreList`.
#[derive(Clone, Default)]
pub enum IgnoreListOption {
    /// Leave the ignore list untouched.
    Disabled,
    /// Mark every source whose path contains `/node_modules/`.
    #[default]
    NodeModules,
    Custom(Arc<IgnoreListFn>),
}

impl IgnoreListOption {
    pub fn custom<F, R>(classifier: F) -> Self
    where
        F: Fn(&str, &str) -> R + Send + Sync + 'static,
        R: Into<Classification>,
    {
        IgnoreListOption::Custom(Arc::new(
            move |source_path: &str, sourcemap_path: &str| -> Classification {
                classifier(source_path, sourcemap_path).into()
            },
        ))
    }
}

impl std::fmt::Debug for IgnoreListOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreListOption::Disabled => f.write_str("Disabled"),
            IgnoreListOption::NodeModules => f.write_str("NodeModules"),
            IgnoreListOption::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Default classifier: dependency code is ignorable.
pub fn is_node_modules_path(source_path: &str, _sourcemap_path: &str) -> bool {
    source_path.contains("/node_modules/")
}
