//! Application serializers
//!
//! - [`selector`]: picks the attrs schema for a request from its `type` and
//!   `category` parameters.
//! - [`tree`]: flattens applications and their organizations into tree nodes.

pub mod application;
pub mod selector;
pub mod tree;

pub use application::{ApplicationSerializer, BaseSerializer};
pub use selector::{Action, QueryParams, SerializerSelector};
pub use tree::{NodeMeta, NodeType, TreeNode, TreeSerializer};
