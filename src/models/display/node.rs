//! Tree node display model

use serde::Serialize;
use tabled::Tabled;

use crate::serializer::{NodeType, TreeNode};

/// Flattened tree node for table output; nesting is shown by indenting leaves.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NodeDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "KIND")]
    pub kind: String,

    #[tabled(rename = "PARENT")]
    pub parent: String,
}

fn kind_label(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Node => "organization",
        NodeType::DatabaseApp => "database",
        NodeType::RemoteApp => "remote app",
        NodeType::K8sApp => "kubernetes",
    }
}

impl From<&TreeNode> for NodeDisplay {
    fn from(node: &TreeNode) -> Self {
        let name = if node.is_root() {
            node.name.clone()
        } else {
            format!("  \u{2514} {}", node.name) // └
        };

        Self {
            name,
            id: node.id.clone(),
            kind: kind_label(node.meta.node_type).to_string(),
            parent: node.p_id.clone(),
        }
    }
}

impl From<TreeNode> for NodeDisplay {
    fn from(node: TreeNode) -> Self {
        Self::from(&node)
    }
}
