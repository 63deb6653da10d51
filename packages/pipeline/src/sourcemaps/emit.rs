// Emit
//
// Inline source map annotations for emitted scripts and stylesheets.

use crate::config::SourcemapOptions;
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use devmap_codec::RawSourceMap;

const DATA_URI_PREFIX: &str = "data:application/json;base64,";

/// Kind of artifact an annotation is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Js,
    Css,
}

/// A map either as a value or already serialized.
#[derive(Debug, Clone, Copy)]
pub enum MapPayload<'a> {
    Map(&'a RawSourceMap),
    Json(&'a str),
}

impl<'a> From<&'a RawSourceMap> for MapPayload<'a> {
    fn from(map: &'a RawSourceMap) -> Self {
        MapPayload::Map(map)
    }
}

impl<'a> From<&'a str> for MapPayload<'a> {
    fn from(json: &'a str) -> Self {
        MapPayload::Json(json)
    }
}

/// `data:application/json;base64,...` URI for `map`.
pub fn gen_source_map_url<'a>(map: impl Into<MapPayload<'a>>) -> Result<String> {
    let encoded = match map.into() {
        MapPayload::Map(map) => STANDARD.encode(map.to_json()?),
        MapPayload::Json(json) => STANDARD.encode(json),
    };
    Ok(format!("{}{}", DATA_URI_PREFIX, encoded))
}

/// Append the inline `sourceMappingURL` annotation for `kind` to `code`.
///
/// With diagnostics enabled the pretty-printed map is embedded first as a
/// block comment, with `*/` escaped.
pub fn get_code_with_sourcemap(
    kind: CodeKind,
    code: &str,
    map: &RawSourceMap,
    options: &SourcemapOptions,
) -> Result<String> {
    let mut code = code.to_string();

    if options.debug {
        let pretty = map.to_json_pretty()?.replace("*/", "*\\/");
        code.push_str(&format!("\n/*{}*/\n", pretty));
    }

    let url = gen_source_map_url(map)?;
    match kind {
        CodeKind::Js => code.push_str(&format!("\n//# sourceMappingURL={}", url)),
        CodeKind::Css => code.push_str(&format!("\n/*# sourceMappingURL={} */", url)),
    }

    Ok(code)
}
