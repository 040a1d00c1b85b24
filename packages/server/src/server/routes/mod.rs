// HTTP routes
pub mod api;
pub mod health;
pub mod sample_app;

pub use api::*;
pub use health::*;
pub use sample_app::*;
