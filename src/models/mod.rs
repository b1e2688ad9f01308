//! Domain models
//!
//! Application and organization records, the file-backed catalog that
//! stores them, and display models for CLI output.

pub mod application;
pub mod catalog;
pub mod display;
pub mod organization;

pub use application::Application;
pub use catalog::Catalog;
pub use organization::{OrgRegistry, Organization};
