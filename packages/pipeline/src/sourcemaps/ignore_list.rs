// Ignore List
//
// Marks sources debuggers should skip, via `x_google_ignoreList`.

use crate::config::{is_node_modules_path, IgnoreListOption};
use crate::file_system::{dirname, is_rooted, resolve};
use crate::logging::Logger;
use devmap_codec::RawSourceMap;
use serde_json::Value;

/// A classifier verdict, plus whether the classifier actually answered with
/// a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub ignored: bool,
    pub is_boolean: bool,
}

impl From<bool> for Classification {
    fn from(ignored: bool) -> Self {
        Self {
            ignored,
            is_boolean: true,
        }
    }
}

impl From<Option<bool>> for Classification {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(ignored) => ignored.into(),
            None => Self {
                ignored: false,
                is_boolean: false,
            },
        }
    }
}

/// Values crossing a JSON boundary are judged by JavaScript truthiness.
impl From<Value> for Classification {
    fn from(value: Value) -> Self {
        let ignored = match &value {
            Value::Bool(b) => return (*b).into(),
            Value::Null => false,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        Self {
            ignored,
            is_boolean: false,
        }
    }
}

/// Add the index of every source `classifier` flags to the map's ignore list.
///
/// Relative source names are resolved against the directory of
/// `sourcemap_path`; `null` and empty entries are skipped. Existing entries
/// are kept, and a list is only attached when it has something in it or the
/// map already carried one.
pub fn apply_sourcemap_ignore_list<F, R>(
    map: &mut RawSourceMap,
    sourcemap_path: &str,
    classifier: F,
    logger: Option<&dyn Logger>,
) where
    F: Fn(&str, &str) -> R,
    R: Into<Classification>,
{
    let had_list = map.x_google_ignore_list.is_some();
    let mut ignore_list = map.x_google_ignore_list.take().unwrap_or_default();
    let map_dir = dirname(sourcemap_path);

    for (index, source) in map.sources.iter().enumerate() {
        let source = match source.as_deref() {
            Some(source) if !source.is_empty() => source,
            _ => continue,
        };

        let source_path = if is_rooted(source) {
            source.to_string()
        } else {
            resolve(&map_dir, &[source]).into_string()
        };

        let classification: Classification = classifier(&source_path, sourcemap_path).into();
        if let Some(logger) = logger {
            if !classification.is_boolean {
                logger.warn("sourcemapIgnoreList function must return a boolean.");
            }
        }

        let index = index as u32;
        if classification.ignored && !ignore_list.contains(&index) {
            ignore_list.push(index);
        }
    }

    if had_list || !ignore_list.is_empty() {
        map.x_google_ignore_list = Some(ignore_list);
    }
}

/// Apply the configured ignore-list policy.
pub fn apply_ignore_list_option(
    map: &mut RawSourceMap,
    sourcemap_path: &str,
    option: &IgnoreListOption,
    logger: Option<&dyn Logger>,
) {
    match option {
        IgnoreListOption::Disabled => {}
        IgnoreListOption::NodeModules => {
            apply_sourcemap_ignore_list(map, sourcemap_path, is_node_modules_path, logger)
        }
        IgnoreListOption::Custom(classifier) => apply_sourcemap_ignore_list(
            map,
            sourcemap_path,
            |source_path: &str, map_path: &str| classifier(source_path, map_path),
            logger,
        ),
    }
}
