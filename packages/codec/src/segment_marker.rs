// Segment Marker
//
// Positions and decoded mapping records.

use std::cmp::Ordering;

/// A zero-based line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Line number (0-indexed).
    pub line: u32,
    /// Column number (0-indexed).
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// One decoded segment of the `mappings` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub generated: Position,
    /// Absent for generated-only code.
    pub original: Option<Position>,
    /// Index into the owning map's `sources`.
    pub source: Option<u32>,
    /// Index into the owning map's `names`.
    pub name: Option<u32>,
}

impl Mapping {
    pub fn generated_only(generated: Position) -> Self {
        Self {
            generated,
            original: None,
            source: None,
            name: None,
        }
    }

    pub fn with_source(mut self, source: u32, original: Position) -> Self {
        self.source = Some(source);
        self.original = Some(original);
        self
    }

    pub fn with_name(mut self, name: u32) -> Self {
        self.name = Some(name);
        self
    }
}

/// Orders absent values after present ones.
fn cmp_present_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two mappings by generated position only.
pub fn compare_generated_positions(a: &Mapping, b: &Mapping) -> Ordering {
    a.generated.cmp(&b.generated)
}

/// Total order used for the generated-position table: generated position,
/// then source, original position and name, with absent values last.
pub fn compare_markers(a: &Mapping, b: &Mapping) -> Ordering {
    compare_generated_positions(a, b)
        .then_with(|| cmp_present_first(a.source, b.source))
        .then_with(|| cmp_present_first(a.original, b.original))
        .then_with(|| cmp_present_first(a.name, b.name))
}
