use thiserror::Error;

use crate::common::SampleAppId;

/// Errors surfaced by sample app activities
#[derive(Error, Debug)]
pub enum SampleAppError {
    #[error("Sample app record {0} not found")]
    NotFound(SampleAppId),

    #[error("Invalid form submission: {0}")]
    InvalidForm(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown job: {0}")]
    UnknownJob(String),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}
