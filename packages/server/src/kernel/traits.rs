// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "overwrite the flags of a batch") lives in domain
// activities that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseSampleAppStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::SampleAppId;
use crate::domains::sample_app::models::{Job, SampleApp};

// =============================================================================
// Record Store Trait (Infrastructure - table access)
// =============================================================================

/// Connection pool utilization, reported by stores backed by a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

#[async_trait]
pub trait BaseSampleAppStore: Send + Sync {
    /// Every record, in store order
    async fn find_all(&self) -> Result<Vec<SampleApp>>;

    /// One record, or None if the id is unknown
    async fn find_by_id(&self, id: SampleAppId) -> Result<Option<SampleApp>>;

    /// Persist a batch of existing records; all or nothing
    async fn save_all(&self, records: &[SampleApp]) -> Result<()>;

    /// Records whose flag for `job` equals `value`
    async fn find_by_flag(&self, job: Job, value: bool) -> Result<Vec<SampleApp>>;

    /// Cheap connectivity check
    async fn ping(&self) -> Result<()>;

    /// Pool metrics, if the store has a pool
    fn pool_stats(&self) -> Option<PoolStats> {
        None
    }
}
