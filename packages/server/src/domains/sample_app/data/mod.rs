pub mod form;
pub mod job_check;
pub mod sample_app;

pub use form::*;
pub use job_check::*;
pub use sample_app::*;
