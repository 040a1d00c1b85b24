pub mod job;
pub mod sample_app;

pub use job::*;
pub use sample_app::*;
