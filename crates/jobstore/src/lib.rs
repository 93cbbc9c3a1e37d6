//! # jobstore
//!
//! A job record gateway for PostgreSQL.
//!
//! The interesting part of this crate is the dynamic SQL layer: a partial
//! update with an arbitrary subset of fields becomes a parameterized SET
//! clause, and optional search criteria become a parameterized WHERE clause.
//! Everything around it (HTTP routing, schema validation, auth) lives in the
//! surrounding service and talks to this crate through plain types.
//!
//! ## Guarantees
//!
//! - **Parameter-safe**: every caller-supplied value is bound to a `$n`
//!   placeholder; placeholders are contiguous from `$1` and index-aligned
//!   with the value list.
//! - **Quoted identifiers**: every column reference emitted by the builders
//!   is double-quoted.
//! - **Fail fast**: an empty partial update is rejected before any SQL is
//!   assembled; a single-entity operation that matches zero rows fails with
//!   a distinguishable not-found error.
//!
//! ## Example
//!
//! ```ignore
//! use jobstore::{Job, JobFilter, JobPatch};
//!
//! // PATCH /jobs/:id
//! let patch = JobPatch { salary: Some(120_000), ..JobPatch::default() };
//! let job = Job::update(&client, id, &patch).await?;
//!
//! // GET /jobs?minSalary=100000&hasEquity=true
//! let filter = JobFilter { min_salary: Some(100_000), has_equity: Some(true), ..JobFilter::default() };
//! let jobs = Job::find_all(&client, &filter).await?;
//! ```

pub mod builder;
pub mod client;
pub mod columns;
pub mod error;
pub mod ident;
pub mod job;
pub mod row;

pub use builder::{SetClause, SetClauseBuilder, WhereBuilder};
pub use client::StoreClient;
pub use columns::ColumnMap;
pub use error::{StoreError, StoreResult};
pub use job::{
    Company, Job, JobDetail, JobDraft, JobFilter, JobListing, JobPatch, SearchQuery,
};
pub use row::{FromRow, RowExt};
