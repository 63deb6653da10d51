//! Source Map Consumer
//!
//! Decodes a raw map into a generated-position table and answers
//! generated → original queries by bisection.

use crate::error::{Result, SourceMapError};
use crate::raw_source_map::RawSourceMap;
use crate::segment_marker::{compare_markers, Mapping, Position};
use crate::util::compute_source_url;
use crate::vlq::decode_segment;
use crate::VERSION;
use indexmap::IndexMap;

/// Result of an original-position lookup. Every field is `None` when the
/// generated position maps to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub source: Option<String>,
    /// 0-based.
    pub line: Option<u32>,
    /// 0-based.
    pub column: Option<u32>,
    pub name: Option<String>,
}

/// A mapping record with its source and name resolved to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingItem<'a> {
    pub generated: Position,
    pub original: Option<Position>,
    pub source: Option<&'a str>,
    pub name: Option<&'a str>,
}

pub struct SourceMapConsumer {
    file: Option<String>,
    /// Canonical source names by index; `None` for null entries.
    sources: Vec<Option<String>>,
    /// Canonical name → declared index, first declaration wins.
    source_index: IndexMap<String, usize>,
    sources_content: Option<Vec<Option<String>>>,
    names: Vec<String>,
    generated_mappings: Vec<Mapping>,
}

impl SourceMapConsumer {
    pub fn new(map: &RawSourceMap) -> Result<Self> {
        if map.version != VERSION {
            return Err(SourceMapError::UnsupportedVersion(map.version));
        }

        let root = map.source_root();
        let sources: Vec<Option<String>> = map
            .sources
            .iter()
            .map(|source| source.as_deref().map(|s| compute_source_url(root, s)))
            .collect();

        let mut source_index = IndexMap::new();
        for (index, source) in sources.iter().enumerate() {
            if let Some(source) = source {
                source_index.entry(source.clone()).or_insert(index);
            }
        }

        let generated_mappings = parse_mappings(&map.mappings, sources.len(), map.names.len())?;

        Ok(Self {
            file: map.file.clone(),
            sources,
            source_index,
            sources_content: map.sources_content.clone(),
            names: map.names.clone(),
            generated_mappings,
        })
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Distinct canonical source names, in declaration order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.source_index.keys().map(String::as_str)
    }

    /// All decoded records, sorted by generated position.
    pub fn mappings(&self) -> &[Mapping] {
        &self.generated_mappings
    }

    /// Every mapping in generated order.
    pub fn iter(&self) -> impl Iterator<Item = MappingItem<'_>> {
        self.generated_mappings
            .iter()
            .map(move |mapping| self.resolve_item(mapping))
    }

    /// Visit every mapping in generated order.
    pub fn each_mapping<F>(&self, f: F)
    where
        F: FnMut(MappingItem<'_>),
    {
        self.iter().for_each(f);
    }

    fn resolve_item(&self, mapping: &Mapping) -> MappingItem<'_> {
        MappingItem {
            generated: mapping.generated,
            original: mapping.original,
            source: mapping.source.and_then(|idx| self.source_name(idx)),
            name: mapping
                .name
                .map(|idx| self.names[idx as usize].as_str()),
        }
    }

    fn source_name(&self, index: u32) -> Option<&str> {
        self.sources
            .get(index as usize)
            .and_then(|source| source.as_deref())
    }

    /// Embedded content for `source`, or `None` when the map carries none.
    pub fn source_content_for(&self, source: &str) -> Option<&str> {
        let index = *self.source_index.get(source)?;
        self.sources_content
            .as_ref()?
            .get(index)?
            .as_deref()
    }

    /// Look up the original position for a 0-based generated position.
    ///
    /// Only records on the same generated line are considered; the record with
    /// the greatest generated column not past `column` answers. When several
    /// records share that generated position, the first in table order wins.
    pub fn original_position_for(&self, line: u32, column: u32) -> SourceLocation {
        let needle = Position::new(line, column);
        let upper = self
            .generated_mappings
            .partition_point(|m| m.generated <= needle);
        if upper == 0 {
            return SourceLocation::default();
        }

        let found = self.generated_mappings[upper - 1].generated;
        if found.line != line {
            return SourceLocation::default();
        }
        let first = self
            .generated_mappings
            .partition_point(|m| m.generated < found);
        let mapping = &self.generated_mappings[first];

        let item = self.resolve_item(mapping);
        match item.source {
            Some(source) => SourceLocation {
                source: Some(source.to_string()),
                line: item.original.map(|p| p.line),
                column: item.original.map(|p| p.column),
                name: item.name.map(str::to_string),
            },
            None => SourceLocation::default(),
        }
    }
}

fn non_negative(value: i64, field: &'static str, segment: &str) -> Result<u32> {
    if value < 0 || value > u32::MAX as i64 {
        return Err(SourceMapError::ValueOutOfRange {
            field,
            value,
            segment: segment.to_string(),
        });
    }
    Ok(value as u32)
}

fn parse_mappings(mappings: &str, source_count: usize, name_count: usize) -> Result<Vec<Mapping>> {
    let mut out = Vec::new();
    let mut source: i64 = 0;
    let mut original_line: i64 = 0;
    let mut original_column: i64 = 0;
    let mut name: i64 = 0;

    if mappings.is_empty() {
        return Ok(out);
    }

    for (line_idx, line) in mappings.split(';').enumerate() {
        let line_start = out.len();
        let mut generated_column: i64 = 0;

        for segment in line.split(',').filter(|s| !s.is_empty()) {
            let values = decode_segment(segment)?;
            if values.is_empty() {
                continue;
            }

            generated_column += values[0];
            let generated = Position::new(
                line_idx as u32,
                non_negative(generated_column, "generated column", segment)?,
            );
            let mut mapping = Mapping::generated_only(generated);

            match values.len() {
                1 => {}
                n if n >= 4 => {
                    source += values[1];
                    original_line += values[2];
                    original_column += values[3];

                    if source < 0 || source as usize >= source_count {
                        return Err(SourceMapError::SourceIndexOutOfBounds {
                            index: source,
                            len: source_count,
                        });
                    }
                    let original = Position::new(
                        non_negative(original_line, "original line", segment)?,
                        non_negative(original_column, "original column", segment)?,
                    );
                    mapping = mapping.with_source(source as u32, original);

                    if values.len() >= 5 {
                        name += values[4];
                        if name < 0 || name as usize >= name_count {
                            return Err(SourceMapError::NameIndexOutOfBounds {
                                index: name,
                                len: name_count,
                            });
                        }
                        mapping = mapping.with_name(name as u32);
                    }
                }
                _ => return Err(SourceMapError::IncompleteSegment(segment.to_string())),
            }

            out.push(mapping);
        }

        out[line_start..].sort_by(compare_markers);
    }

    Ok(out)
}
