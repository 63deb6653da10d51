//! Source Map Generator
//!
//! Incremental builder: accepts mappings in any order plus per-source
//! content, and serializes to a [`RawSourceMap`].

use crate::error::{Result, SourceMapError};
use crate::raw_source_map::RawSourceMap;
use crate::segment_marker::{compare_markers, Mapping, Position};
use crate::vlq::encode_vlq_into;
use indexmap::IndexSet;
use std::collections::HashMap;

pub struct SourceMapGenerator {
    file: Option<String>,
    sources: IndexSet<String>,
    names: IndexSet<String>,
    sources_content: HashMap<String, String>,
    mappings: Vec<Mapping>,
}

impl SourceMapGenerator {
    pub fn new(file: Option<String>) -> Self {
        SourceMapGenerator {
            file,
            sources: IndexSet::new(),
            names: IndexSet::new(),
            sources_content: HashMap::new(),
            mappings: Vec::new(),
        }
    }

    fn source_id(&mut self, source: &str) -> u32 {
        match self.sources.get_index_of(source) {
            Some(idx) => idx as u32,
            None => self.sources.insert_full(source.to_string()).0 as u32,
        }
    }

    fn name_id(&mut self, name: &str) -> u32 {
        match self.names.get_index_of(name) {
            Some(idx) => idx as u32,
            None => self.names.insert_full(name.to_string()).0 as u32,
        }
    }

    /// Register `source` and attach its content. `None` clears previously set
    /// content but keeps the source registered.
    pub fn set_source_content(&mut self, source: &str, content: Option<String>) -> &mut Self {
        self.source_id(source);
        match content {
            Some(content) => {
                self.sources_content.insert(source.to_string(), content);
            }
            None => {
                self.sources_content.remove(source);
            }
        }
        self
    }

    pub fn add_mapping(
        &mut self,
        generated: Position,
        source: Option<&str>,
        original: Option<Position>,
        name: Option<&str>,
    ) -> Result<&mut Self> {
        let mapping = match (source, original) {
            (Some(source), Some(original)) => {
                let source_id = self.source_id(source);
                let mut mapping = Mapping::generated_only(generated).with_source(source_id, original);
                if let Some(name) = name {
                    mapping = mapping.with_name(self.name_id(name));
                }
                mapping
            }
            (None, None) if name.is_none() => Mapping::generated_only(generated),
            (Some(source), None) => {
                return Err(SourceMapError::InvalidMapping(format!(
                    "source \"{}\" at {}:{} has no original position",
                    source, generated.line, generated.column
                )))
            }
            _ => {
                return Err(SourceMapError::InvalidMapping(format!(
                    "an original position or name at {}:{} requires a source",
                    generated.line, generated.column
                )))
            }
        };

        self.mappings.push(mapping);
        Ok(self)
    }

    pub fn has_mappings(&self) -> bool {
        !self.mappings.is_empty()
    }

    fn serialize_mappings(&self) -> String {
        let mut sorted = self.mappings.clone();
        sorted.sort_by(compare_markers);
        sorted.dedup();

        let mut out = String::new();
        let mut current_line = 0;
        let mut last_col0: i64 = 0;
        let mut last_source_index: i64 = 0;
        let mut last_source_line0: i64 = 0;
        let mut last_source_col0: i64 = 0;
        let mut last_name_index: i64 = 0;

        for (i, segment) in sorted.iter().enumerate() {
            if segment.generated.line != current_line {
                while current_line < segment.generated.line {
                    out.push(';');
                    current_line += 1;
                }
                last_col0 = 0;
            } else if i > 0 {
                out.push(',');
            }

            // zero-based starting column of the line in the generated code
            encode_vlq_into(segment.generated.column as i64 - last_col0, &mut out);
            last_col0 = segment.generated.column as i64;

            if let (Some(source_idx), Some(original)) = (segment.source, segment.original) {
                // zero-based index into the "sources" list
                encode_vlq_into(source_idx as i64 - last_source_index, &mut out);
                last_source_index = source_idx as i64;

                // the zero-based starting line in the original source
                encode_vlq_into(original.line as i64 - last_source_line0, &mut out);
                last_source_line0 = original.line as i64;

                // the zero-based starting column in the original source
                encode_vlq_into(original.column as i64 - last_source_col0, &mut out);
                last_source_col0 = original.column as i64;

                if let Some(name_idx) = segment.name {
                    encode_vlq_into(name_idx as i64 - last_name_index, &mut out);
                    last_name_index = name_idx as i64;
                }
            }
        }

        out
    }

    pub fn to_json(&self) -> RawSourceMap {
        let sources: Vec<Option<String>> = self.sources.iter().cloned().map(Some).collect();
        let sources_content = if self.sources_content.is_empty() {
            None
        } else {
            Some(
                self.sources
                    .iter()
                    .map(|source| self.sources_content.get(source).cloned())
                    .collect(),
            )
        };

        let mut map = RawSourceMap::new(self.file.clone());
        map.sources = sources;
        map.sources_content = sources_content;
        map.names = self.names.iter().cloned().collect();
        map.mappings = self.serialize_mappings();
        map
    }
}
