//! Display model implementations for table and JSON output
//!
//! Display models transform domain types into CLI-friendly formats
//! with appropriate column names and serialization.

mod app;
mod node;
mod org;
mod schema;

pub use app::AppDisplay;
pub use node::NodeDisplay;
pub use org::OrgDisplay;
pub use schema::{AttrFieldDisplay, TypeDisplay};
