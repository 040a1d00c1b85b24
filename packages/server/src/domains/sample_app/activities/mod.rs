//! Sample app activities - business logic functions
//!
//! Activities are async functions called from HTTP handlers and the job-check
//! CLI. They do the work and return results directly.

mod job_check;
mod mutations;
mod queries;

pub use job_check::*;
pub use mutations::*;
pub use queries::*;
