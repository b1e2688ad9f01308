//! apptree - attribute schema selection and tree-view export for an
//! application catalog
//!
//! - [`serializer::SerializerSelector`] picks the attrs schema for a request
//!   from its `type`/`category` parameters and action.
//! - [`serializer::TreeSerializer`] turns applications into organization and
//!   application tree nodes.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod registry;
pub mod serializer;

pub use error::{Error, Result};
