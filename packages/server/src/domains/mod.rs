// Business domains
pub mod sample_app;
