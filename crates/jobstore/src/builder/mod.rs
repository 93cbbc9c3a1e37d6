//! Structured SQL builders.
//!
//! This module provides the two dynamic pieces of the gateway's SQL:
//! partial-update SET clauses and conditional WHERE clauses.
//!
//! ## Design
//!
//! - SQL is still explicit (strings), but the dynamic patterns are structured.
//! - Safe defaults: an UPDATE with no SET fields is rejected before any SQL
//!   is assembled.
//! - Placeholders are managed automatically ($1, $2, ...), contiguous and
//!   index-aligned with the bound value list.
//! - Column references are emitted as double-quoted identifiers.

pub mod filter;
pub mod set_clause;

pub use filter::WhereBuilder;
pub use set_clause::{SetClause, SetClauseBuilder};

#[cfg(test)]
mod tests;
