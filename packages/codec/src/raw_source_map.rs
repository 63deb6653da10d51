// Raw Source Map
//
// Raw source map data structure, as it appears on the wire.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::VERSION;

/// Raw source map (version 3), plus the `x_google_ignoreList` extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSourceMap {
    #[serde(deserialize_with = "deserialize_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default)]
    pub sources: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub mappings: String,
    #[serde(
        rename = "x_google_ignoreList",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub x_google_ignore_list: Option<Vec<u32>>,
    /// Fields this crate does not interpret, kept for re-serialization.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawSourceMap {
    pub fn new(file: Option<String>) -> Self {
        Self {
            version: VERSION,
            file,
            source_root: None,
            sources: Vec::new(),
            sources_content: None,
            names: Vec::new(),
            mappings: String::new(),
            x_google_ignore_list: None,
            extra: Map::new(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The declared `sourceRoot`, treating an empty string as absent.
    pub fn source_root(&self) -> Option<&str> {
        self.source_root.as_deref().filter(|root| !root.is_empty())
    }
}

/// Accepts `3` as well as `"3"`.
fn deserialize_version<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Number(u32),
        Text(String),
    }

    match Version::deserialize(deserializer)? {
        Version::Number(n) => Ok(n),
        Version::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid version {:?}", text))),
    }
}
