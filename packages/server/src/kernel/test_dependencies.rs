// TestDependencies - in-memory implementations for testing
//
// Provides a record store that can be injected into ServerDeps so activities
// and routes can be exercised without Postgres.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseSampleAppStore, ServerDeps};
use crate::common::SampleAppId;
use crate::domains::sample_app::models::{Job, SampleApp};

// =============================================================================
// Memory Record Store
// =============================================================================

/// Ordered in-memory table. Store order is id order, like the Postgres store.
#[derive(Clone, Default)]
pub struct MemorySampleAppStore {
    records: Arc<Mutex<BTreeMap<SampleAppId, SampleApp>>>,
    save_calls: Arc<Mutex<usize>>,
    fail_pings: bool,
    latency: Option<Duration>,
}

impl MemorySampleAppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = SampleApp>) -> Self {
        let store = Self::new();
        {
            let mut table = store.records.lock().unwrap();
            for record in records {
                table.insert(record.id, record);
            }
        }
        store
    }

    /// Make `ping` fail, to simulate an unreachable database
    pub fn unreachable(mut self) -> Self {
        self.fail_pings = true;
        self
    }

    /// Delay every `find_all`, to simulate a slow database
    pub fn slow(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Snapshot of the table
    pub fn records(&self) -> Vec<SampleApp> {
        self.records.lock().unwrap().values().cloned().collect()
    }

    /// Number of `save_all` calls that reached the store
    pub fn save_calls(&self) -> usize {
        *self.save_calls.lock().unwrap()
    }
}

#[async_trait]
impl BaseSampleAppStore for MemorySampleAppStore {
    async fn find_all(&self) -> Result<Vec<SampleApp>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.records())
    }

    async fn find_by_id(&self, id: SampleAppId) -> Result<Option<SampleApp>> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn save_all(&self, records: &[SampleApp]) -> Result<()> {
        *self.save_calls.lock().unwrap() += 1;

        let mut table = self.records.lock().unwrap();
        if let Some(missing) = records.iter().find(|r| !table.contains_key(&r.id)) {
            return Err(anyhow!("record {} does not exist", missing.id));
        }
        for record in records {
            table.insert(record.id, record.clone());
        }
        Ok(())
    }

    async fn find_by_flag(&self, job: Job, value: bool) -> Result<Vec<SampleApp>> {
        Ok(self
            .records()
            .into_iter()
            .filter(|r| r.flag(job) == value)
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        if self.fail_pings {
            return Err(anyhow!("connection refused"));
        }
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for ServerDeps backed by in-memory services
#[derive(Clone, Default)]
pub struct TestDependencies {
    pub store: MemorySampleAppStore,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MemorySampleAppStore) -> Self {
        Self { store }
    }

    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(Arc::new(self.store))
    }
}
