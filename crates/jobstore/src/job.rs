//! Job records and their store gateway.
//!
//! The gateway composes the SQL builders with fixed statement skeletons and
//! interprets row counts: a single-entity operation that matches zero rows
//! fails with [`StoreError::NotFound`]. All operations take the store client
//! explicitly; none of them owns a connection.

use crate::builder::{SetClauseBuilder, WhereBuilder};
use crate::client::StoreClient;
use crate::columns::ColumnMap;
use crate::error::{StoreError, StoreResult};
use crate::row::{FromRow, RowExt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

/// Field-name overrides for job partial updates.
///
/// The JSON boundary speaks camelCase; only `companyHandle` differs from its
/// column identifier.
const JOB_COLUMNS: ColumnMap = ColumnMap::new(&[("companyHandle", "company_handle")]);

/// A persisted job row.
///
/// `id` is store-assigned and immutable; every other field is mutable via
/// [`Job::update`]. `salary` and `equity` are nullable in the schema
/// (`salary >= 0`, `equity <= 1.0` enforced by CHECK constraints).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl FromRow for Job {
    fn from_row(row: &Row) -> StoreResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
            company_handle: row.try_get_column("company_handle")?,
        })
    }
}

/// Create payload for a new job.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Partial-update payload; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub title: Option<String>,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: Option<String>,
}

impl JobPatch {
    /// Collect the supplied fields into a SET clause builder.
    ///
    /// Declaration order is the placeholder order.
    fn set_clause(&self) -> SetClauseBuilder {
        let mut set = SetClauseBuilder::new(JOB_COLUMNS);
        set.set_opt("title", self.title.clone())
            .set_opt("salary", self.salary)
            .set_opt("equity", self.equity)
            .set_opt("companyHandle", self.company_handle.clone());
        set
    }
}

/// Optional search criteria for [`Job::find_all`].
///
/// Each present field contributes exactly one WHERE condition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub min_salary: Option<i32>,
    pub has_equity: Option<bool>,
    pub title: Option<String>,
}

impl JobFilter {
    /// Build the full search statement over the jobs/companies join.
    ///
    /// Conditions are evaluated in fixed order (`min_salary`, `has_equity`,
    /// `title`); the equity condition is structural and binds no parameter.
    /// Rows are always ordered by the job title; consumers render ordered
    /// lists, so the ORDER BY is part of the contract.
    pub fn build_search(&self) -> SearchQuery {
        let mut wheres = WhereBuilder::new();
        wheres.and_gte_opt("salary", self.min_salary);
        if self.has_equity == Some(true) {
            wheres.and_raw("\"equity\" > 0");
        }
        wheres.and_ilike_opt("title", self.title.as_ref().map(|t| format!("%{t}%")));

        let mut sql = String::from(
            "SELECT jobs.id, jobs.title, jobs.salary, jobs.equity, jobs.company_handle, \
             companies.name AS company_name \
             FROM jobs LEFT JOIN companies ON companies.handle = jobs.company_handle",
        );
        if !wheres.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&wheres.build_clause());
        }
        sql.push_str(" ORDER BY jobs.title");

        SearchQuery { sql, wheres }
    }
}

/// Built search statement holding SQL and bound parameters.
pub struct SearchQuery {
    sql: String,
    wheres: WhereBuilder,
}

impl SearchQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound values, in placeholder order.
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.wheres.params_ref()
    }
}

/// A search result row: job columns plus the company display name from the
/// LEFT JOIN (absent when the handle has no matching company).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
    pub company_name: Option<String>,
}

impl FromRow for JobListing {
    fn from_row(row: &Row) -> StoreResult<Self> {
        Ok(Self {
            id: row.try_get_column("id")?,
            title: row.try_get_column("title")?,
            salary: row.try_get_column("salary")?,
            equity: row.try_get_column("equity")?,
            company_handle: row.try_get_column("company_handle")?,
            company_name: row.try_get_column("company_name")?,
        })
    }
}

/// Parent record embedded into [`JobDetail`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl FromRow for Company {
    fn from_row(row: &Row) -> StoreResult<Self> {
        Ok(Self {
            handle: row.try_get_column("handle")?,
            name: row.try_get_column("name")?,
            description: row.try_get_column("description")?,
            num_employees: row.try_get_column("num_employees")?,
            logo_url: row.try_get_column("logo_url")?,
        })
    }
}

impl Company {
    /// Fetch a company by handle.
    pub async fn get(client: &impl StoreClient, handle: &str) -> StoreResult<Company> {
        let sql = "SELECT handle, name, description, num_employees, logo_url \
                   FROM companies WHERE handle = $1";
        let row = client
            .query_opt(sql, &[&handle])
            .await?
            .ok_or_else(|| StoreError::not_found(format!("No company found: {handle}")))?;
        Company::from_row(&row)
    }
}

/// [`Job::get`] result: the job with its parent company embedded and the raw
/// foreign key trimmed from the shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company: Company,
}

impl Job {
    /// Create a job from a draft.
    ///
    /// Returns the created row including the store-assigned id.
    pub async fn create(client: &impl StoreClient, draft: &JobDraft) -> StoreResult<Job> {
        let sql = "INSERT INTO jobs (title, salary, equity, company_handle) \
                   VALUES ($1, $2, $3, $4) \
                   RETURNING id, title, salary, equity, company_handle";
        tracing::debug!(target: "jobstore.sql", param_count = 4, sql, "create job");
        let row = client
            .query_one(
                sql,
                &[&draft.title, &draft.salary, &draft.equity, &draft.company_handle],
            )
            .await?;
        Job::from_row(&row)
    }

    /// Find all jobs matching the filter, ordered by title.
    pub async fn find_all(
        client: &impl StoreClient,
        filter: &JobFilter,
    ) -> StoreResult<Vec<JobListing>> {
        let search = filter.build_search();
        let params = search.params();
        tracing::debug!(
            target: "jobstore.sql",
            param_count = params.len(),
            sql = search.sql(),
            "search jobs"
        );
        let rows = client.query(search.sql(), &params).await?;
        rows.iter().map(JobListing::from_row).collect()
    }

    /// Get a job by id with its company embedded.
    pub async fn get(client: &impl StoreClient, id: i32) -> StoreResult<JobDetail> {
        let sql = "SELECT id, title, salary, equity, company_handle FROM jobs WHERE id = $1";
        tracing::debug!(target: "jobstore.sql", param_count = 1, sql, "get job");
        let row = client
            .query_opt(sql, &[&id])
            .await?
            .ok_or_else(|| StoreError::not_found(format!("No job found: {id}")))?;
        let job = Job::from_row(&row)?;

        let company = Company::get(client, &job.company_handle).await?;
        Ok(JobDetail {
            id: job.id,
            title: job.title,
            salary: job.salary,
            equity: job.equity,
            company,
        })
    }

    /// Apply a partial update to a job.
    ///
    /// Fails with [`StoreError::BadRequest`] when the patch carries no
    /// fields, and [`StoreError::NotFound`] when the id matches no row;
    /// zero affected rows is the only signal the store gives us.
    pub async fn update(client: &impl StoreClient, id: i32, patch: &JobPatch) -> StoreResult<Job> {
        let set = patch.set_clause();
        let clause = set.build()?;

        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} \
             RETURNING id, title, salary, equity, company_handle",
            clause.set_cols(),
            clause.next_placeholder(),
        );
        tracing::debug!(
            target: "jobstore.sql",
            param_count = clause.len() + 1,
            sql = %sql,
            "update job"
        );

        let mut params: Vec<&(dyn ToSql + Sync)> = clause.params().to_vec();
        params.push(&id);

        let row = client
            .query_opt(&sql, &params)
            .await?
            .ok_or_else(|| StoreError::not_found(format!("No job found: {id}")))?;
        Job::from_row(&row)
    }

    /// Delete a job by id.
    pub async fn delete(client: &impl StoreClient, id: i32) -> StoreResult<()> {
        let sql = "DELETE FROM jobs WHERE id = $1";
        tracing::debug!(target: "jobstore.sql", param_count = 1, sql, "delete job");
        let affected = client.execute(sql, &[&id]).await?;
        if affected == 0 {
            return Err(StoreError::not_found(format!("No job found: {id}")));
        }
        Ok(())
    }
}
