// Sample App - record form service
//
// Lists the rows of `sampleapp_table` (a name plus five job flags each),
// renders them as an editable form and writes submitted flags back.
// Architecture follows the domain layout: models/data/activities per domain,
// infrastructure traits in kernel/, HTTP surface in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
