// Flatten
//
// Replays a map through its own consumer to produce a normalized map.

use crate::error::Result;
use devmap_codec::{RawSourceMap, SourceMapConsumer, SourceMapGenerator};

/// Rebuild `raw_map` as a consumer would read it back.
///
/// Every record's source is re-resolved by looking up its own generated
/// position; records for which that lookup finds no source are dropped.
/// Source names come out with `sourceRoot` folded in, every known source keeps
/// its embedded content, and names are not carried over.
pub fn flatten_source_map(raw_map: &RawSourceMap) -> Result<RawSourceMap> {
    let consumer = SourceMapConsumer::new(raw_map)?;
    let mut generated_map = SourceMapGenerator::new(consumer.file().map(str::to_string));

    for source in consumer.sources() {
        let content = consumer.source_content_for(source).map(str::to_string);
        generated_map.set_source_content(source, content);
    }

    let mut dropped = 0usize;
    for mapping in consumer.iter() {
        let location =
            consumer.original_position_for(mapping.generated.line, mapping.generated.column);

        match (location.source.as_deref(), mapping.original) {
            (Some(source), Some(original)) => {
                generated_map.add_mapping(mapping.generated, Some(source), Some(original), None)?;
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::trace!(target: "devmap::sourcemap", "flatten dropped {} unresolvable mappings", dropped);
    }

    Ok(generated_map.to_json())
}
