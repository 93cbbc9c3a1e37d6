//! Compile-only checks for the gateway API surface.
//!
//! These verify that the gateway operations accept both a direct client and
//! a transaction through the `StoreClient` boundary. They do not run actual
//! database operations.

#![allow(dead_code)]

use jobstore::{Job, JobDraft, JobFilter, JobPatch, StoreClient, StoreResult};

async fn _ops_accept_client(client: &tokio_postgres::Client) -> StoreResult<()> {
    let draft = JobDraft {
        title: "Engineer".to_string(),
        salary: Some(100_000),
        equity: None,
        company_handle: "acme".to_string(),
    };
    let job = Job::create(client, &draft).await?;

    let _listings = Job::find_all(client, &JobFilter::default()).await?;
    let _detail = Job::get(client, job.id).await?;

    let patch = JobPatch {
        salary: Some(110_000),
        ..JobPatch::default()
    };
    let _updated = Job::update(client, job.id, &patch).await?;

    Job::delete(client, job.id).await
}

async fn _ops_accept_transaction(tx: &tokio_postgres::Transaction<'_>) -> StoreResult<()> {
    Job::delete(tx, 1).await
}

async fn _ops_are_generic_over_store_client(client: &impl StoreClient) -> StoreResult<()> {
    Job::get(client, 1).await.map(|_| ())
}
