//! Sample app domain - named records with five job-enable flags

pub mod activities;
pub mod data;
pub mod errors;
pub mod models;

// Re-export commonly used types
pub use data::{SampleAppData, SampleAppFlagsInput, SampleAppForm, SampleAppListData};
pub use errors::SampleAppError;
pub use models::{Job, SampleApp};
