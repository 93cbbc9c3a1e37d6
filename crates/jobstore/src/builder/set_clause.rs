//! Partial-update SET clause builder.

use crate::columns::ColumnMap;
use crate::error::{StoreError, StoreResult};
use crate::ident;
use tokio_postgres::types::ToSql;

/// Builder for the SET clause of a partial UPDATE.
///
/// Fields are collected in insertion order; that order is normative for both
/// the emitted fragments and the placeholder numbering. Field names are
/// application-level and resolved through the [`ColumnMap`] at build time.
pub struct SetClauseBuilder {
    /// Field-name overrides
    columns: ColumnMap,
    /// SET fields (application field name, value), insertion-ordered
    fields: Vec<(String, Box<dyn ToSql + Sync + Send>)>,
}

impl SetClauseBuilder {
    pub fn new(columns: ColumnMap) -> Self {
        Self {
            columns,
            fields: Vec::new(),
        }
    }

    /// Set a field to a new value.
    pub fn set<T>(&mut self, field: &str, value: T) -> &mut Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.fields.push((field.to_string(), Box::new(value)));
        self
    }

    /// Set an optional field (None => skip).
    pub fn set_opt<T>(&mut self, field: &str, value: Option<T>) -> &mut Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        if let Some(v) = value {
            self.set(field, v);
        }
        self
    }

    /// Check if any fields have been set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields set so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Build the SET clause and its bound values.
    ///
    /// Emits one `"<column>"=$<n>` fragment per field, `$1` first, joined
    /// with `", "`. Fails with [`StoreError::BadRequest`] when no fields were
    /// set, since an empty SET clause is not valid SQL.
    pub fn build(&self) -> StoreResult<SetClause<'_>> {
        if self.fields.is_empty() {
            return Err(StoreError::bad_request("No fields to update"));
        }

        let mut set_cols = String::new();
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(self.fields.len());

        for (idx, (field, value)) in self.fields.iter().enumerate() {
            if idx > 0 {
                set_cols.push_str(", ");
            }
            ident::write_quoted(&mut set_cols, self.columns.resolve(field));
            set_cols.push_str(&format!("=${}", idx + 1));
            params.push(&**value as &(dyn ToSql + Sync));
        }

        Ok(SetClause { set_cols, params })
    }
}

/// Built SET clause holding the fragment string and bound values.
///
/// The parameter list is index-aligned with the `$n` placeholders in
/// [`SetClause::set_cols`] (1-based, contiguous, no gaps).
pub struct SetClause<'a> {
    set_cols: String,
    params: Vec<&'a (dyn ToSql + Sync)>,
}

impl<'a> SetClause<'a> {
    /// The comma-joined `"<column>"=$<n>` fragments.
    pub fn set_cols(&self) -> &str {
        &self.set_cols
    }

    /// Bound values, in placeholder order.
    pub fn params(&self) -> &[&'a (dyn ToSql + Sync)] {
        &self.params
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Index for the next placeholder a caller appends (e.g. a trailing
    /// `WHERE id = $<n>`).
    pub fn next_placeholder(&self) -> usize {
        self.params.len() + 1
    }
}

impl std::fmt::Debug for SetClause<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetClause")
            .field("set_cols", &self.set_cols)
            .field("param_count", &self.params.len())
            .finish()
    }
}
