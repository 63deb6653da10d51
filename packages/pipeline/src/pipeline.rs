use crate::config::{IgnoreListOption, SourcemapOptions};
use crate::error::Result;
use crate::logging::Logger;
use crate::sourcemaps::{apply_ignore_list_option, flatten_source_map, inject_sources_content};
use devmap_codec::RawSourceMap;

/// Run the post-processing passes over a map produced for `file`:
/// flatten, inject missing source content, then mark ignorable sources.
///
/// Only a structurally malformed `raw_map` is an error; missing sources are
/// reported through `logger` and left as `null` content.
pub fn finalize_source_map(
    raw_map: &RawSourceMap,
    file: &str,
    logger: &dyn Logger,
    options: &SourcemapOptions,
    ignore_list: &IgnoreListOption,
) -> Result<RawSourceMap> {
    let mut map = flatten_source_map(raw_map)?;
    inject_sources_content(&mut map, file, logger, options);
    apply_ignore_list_option(&mut map, file, ignore_list, Some(logger));
    Ok(map)
}
