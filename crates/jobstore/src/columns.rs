//! Field-name to column-identifier mapping.
//!
//! Partial-update payloads arrive keyed by application-level field names
//! (camelCase, as the JSON boundary produces them). [`ColumnMap`] carries the
//! overrides that differ from the store's column identifiers; any field
//! without an override resolves to itself.

/// Override table from application field name to store column identifier.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    overrides: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    /// A map with no overrides; every field resolves to itself.
    pub const EMPTY: ColumnMap = ColumnMap::new(&[]);

    /// Create a map from a static override table.
    pub const fn new(overrides: &'static [(&'static str, &'static str)]) -> Self {
        Self { overrides }
    }

    /// Resolve a field name to its column identifier.
    ///
    /// Returns the mapped name when an override exists, otherwise the field
    /// name unchanged. The result is a bare name; quoting is the builders'
    /// concern.
    pub fn resolve<'a>(&self, field: &'a str) -> &'a str {
        self.overrides
            .iter()
            .find(|(from, _)| *from == field)
            .map(|(_, to)| *to)
            .unwrap_or(field)
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::EMPTY
    }
}
