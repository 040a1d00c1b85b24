//! Postgres-backed record store

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

use super::{BaseSampleAppStore, PoolStats};
use crate::common::SampleAppId;
use crate::domains::sample_app::models::{Job, SampleApp};

/// `sampleapp_table` accessed through a shared `PgPool`
#[derive(Clone)]
pub struct PgSampleAppStore {
    pool: PgPool,
}

impl PgSampleAppStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseSampleAppStore for PgSampleAppStore {
    async fn find_all(&self) -> Result<Vec<SampleApp>> {
        SampleApp::find_all(&self.pool)
            .await
            .context("Failed to load sample app records")
    }

    async fn find_by_id(&self, id: SampleAppId) -> Result<Option<SampleApp>> {
        SampleApp::find_by_id(id, &self.pool)
            .await
            .with_context(|| format!("Failed to load sample app record {}", id))
    }

    async fn save_all(&self, records: &[SampleApp]) -> Result<()> {
        SampleApp::save_all(records, &self.pool)
            .await
            .with_context(|| format!("Failed to save {} sample app records", records.len()))
    }

    async fn find_by_flag(&self, job: Job, value: bool) -> Result<Vec<SampleApp>> {
        SampleApp::find_by_flag(job, value, &self.pool)
            .await
            .with_context(|| format!("Failed to query records by {} flag", job))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Query failed")?;
        Ok(())
    }

    fn pool_stats(&self) -> Option<PoolStats> {
        Some(PoolStats {
            size: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        })
    }
}
