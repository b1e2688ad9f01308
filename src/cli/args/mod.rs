//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, ParamArgs};
pub use global::GlobalOptions;
