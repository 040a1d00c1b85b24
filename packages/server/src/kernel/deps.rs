//! Server dependencies for activities (using traits for testability)
//!
//! This module provides the central dependency container used by domain
//! activities. The record store is a trait object so tests can swap in the
//! in-memory store.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::{BaseSampleAppStore, PgSampleAppStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    pub sample_apps: Arc<dyn BaseSampleAppStore>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(sample_apps: Arc<dyn BaseSampleAppStore>) -> Self {
        Self { sample_apps }
    }

    /// Production wiring: every store backed by the same pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgSampleAppStore::new(pool)))
    }
}
