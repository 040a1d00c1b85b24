//! Test fixtures for creating test data.
//!
//! Postgres-backed tests share one database, so every fixture row takes a
//! fresh id above the seeded range.

use anyhow::Result;
use sampleapp_core::common::SampleAppId;
use sampleapp_core::domains::sample_app::SampleApp;
use sqlx::PgPool;
use std::sync::atomic::{AtomicI32, Ordering};

static NEXT_ID: AtomicI32 = AtomicI32::new(10_000);

/// Allocate an id no other test in this binary uses
pub fn next_id() -> SampleAppId {
    SampleAppId::new(NEXT_ID.fetch_add(1, Ordering::SeqCst))
}

/// Build a record without persisting it
pub fn sample_app(id: SampleAppId, name: &str, flags: [bool; 5]) -> SampleApp {
    SampleApp {
        id,
        name: name.to_string(),
        job0001_flag: flags[0],
        job0002_flag: flags[1],
        job0003_flag: flags[2],
        job0004_flag: flags[3],
        job0005_flag: flags[4],
    }
}

/// Insert a record with a fresh id
pub async fn create_test_sample_app(
    pool: &PgPool,
    name: &str,
    flags: [bool; 5],
) -> Result<SampleApp> {
    let record = sample_app(next_id(), name, flags);
    record.insert(pool).await?;
    Ok(record)
}
