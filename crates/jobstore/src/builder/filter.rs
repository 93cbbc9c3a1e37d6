//! Conditional WHERE clause builder.

use crate::ident;
use tokio_postgres::types::ToSql;

/// Reusable WHERE clause builder.
///
/// Conditions are appended in call order. Parameterized conditions consume
/// the next placeholder index; structural conditions (raw fragments) consume
/// none. The built clause joins conditions with `" AND "`; the surrounding
/// whitespace is load-bearing, a bare `"AND"` join concatenates adjacent
/// literal terms into invalid SQL.
pub struct WhereBuilder {
    /// WHERE conditions (without leading AND)
    conditions: Vec<String>,
    /// Parameter values
    params: Vec<Box<dyn ToSql + Sync + Send>>,
    /// Current parameter counter (starts from offset)
    param_count: usize,
}

impl WhereBuilder {
    /// Create a new WhereBuilder with param numbering starting at 1.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Create a new WhereBuilder with param numbering starting after `offset`.
    ///
    /// For example, `with_offset(2)` means the first param will be `$3`.
    pub fn with_offset(offset: usize) -> Self {
        Self {
            conditions: Vec::new(),
            params: Vec::new(),
            param_count: offset,
        }
    }

    /// Get current parameter count.
    pub fn param_count(&self) -> usize {
        self.param_count
    }

    /// Check if any conditions have been added.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Build the WHERE clause string (without "WHERE" prefix).
    pub fn build_clause(&self) -> String {
        self.conditions.join(" AND ")
    }

    /// Get parameter references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|v| &**v as &(dyn ToSql + Sync))
            .collect()
    }

    fn add_condition<T>(&mut self, col: &str, op: &str, value: T)
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.param_count += 1;
        let mut condition = String::new();
        ident::write_quoted(&mut condition, col);
        condition.push_str(&format!(" {} ${}", op, self.param_count));
        self.conditions.push(condition);
        self.params.push(Box::new(value));
    }

    /// Add AND equality condition.
    pub fn and_eq<T>(&mut self, col: &str, val: T)
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.add_condition(col, "=", val);
    }

    /// Add AND >= condition.
    pub fn and_gte<T>(&mut self, col: &str, val: T)
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.add_condition(col, ">=", val);
    }

    /// Add AND ILIKE condition.
    pub fn and_ilike<T>(&mut self, col: &str, val: T)
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.add_condition(col, "ILIKE", val);
    }

    /// Add a raw WHERE condition without params.
    ///
    /// # Safety
    ///
    /// This directly concatenates SQL. The caller must ensure safety.
    pub fn and_raw(&mut self, sql: &str) {
        self.conditions.push(sql.to_string());
    }

    // ==================== Option-friendly helpers ====================

    pub fn and_eq_opt<T>(&mut self, col: &str, val: Option<T>)
    where
        T: ToSql + Sync + Send + 'static,
    {
        if let Some(v) = val {
            self.and_eq(col, v);
        }
    }

    pub fn and_gte_opt<T>(&mut self, col: &str, val: Option<T>)
    where
        T: ToSql + Sync + Send + 'static,
    {
        if let Some(v) = val {
            self.and_gte(col, v);
        }
    }

    pub fn and_ilike_opt<T>(&mut self, col: &str, val: Option<T>)
    where
        T: ToSql + Sync + Send + 'static,
    {
        if let Some(v) = val {
            self.and_ilike(col, v);
        }
    }
}

impl Default for WhereBuilder {
    fn default() -> Self {
        Self::new()
    }
}
