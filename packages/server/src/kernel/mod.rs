//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod sample_app_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use sample_app_store::PgSampleAppStore;
pub use test_dependencies::{MemorySampleAppStore, TestDependencies};
pub use traits::*;
