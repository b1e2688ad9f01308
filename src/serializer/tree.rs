//! Tree-view export of applications grouped by organization
//!
//! Produces the flat node list consumed by the asset tree widget: one root
//! node per organization followed by one leaf node per application, each
//! leaf pointing at its organization through `pId`.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Application, OrgRegistry, Organization};
use crate::registry::AppCategory;

/// Node type tag under `meta.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Organization root
    Node,
    DatabaseApp,
    RemoteApp,
    K8sApp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMeta {
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

/// One entry of the tree widget's node list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub title: String,
    /// Parent id; empty for roots
    #[serde(rename = "pId")]
    pub p_id: String,
    pub open: bool,
    #[serde(rename = "isParent", default, skip_serializing_if = "Option::is_none")]
    pub is_parent: Option<bool>,
    #[serde(rename = "iconSkin", default, skip_serializing_if = "Option::is_none")]
    pub icon_skin: Option<String>,
    pub meta: NodeMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
}

impl TreeNode {
    fn leaf(
        app: &Application,
        org: &Organization,
        icon: &str,
        is_parent: Option<bool>,
        node_type: NodeType,
    ) -> Self {
        Self {
            id: app.id.clone(),
            name: app.name.clone(),
            title: app.name.clone(),
            p_id: org.id.clone(),
            open: false,
            is_parent,
            icon_skin: Some(icon.to_string()),
            meta: NodeMeta { node_type },
            org_name: Some(org.name.clone()),
        }
    }

    pub fn is_root(&self) -> bool {
        self.p_id.is_empty()
    }
}

fn serialize_db(app: &Application, org: &Organization) -> TreeNode {
    TreeNode::leaf(app, org, "database", None, NodeType::DatabaseApp)
}

fn serialize_remote_app(app: &Application, org: &Organization) -> TreeNode {
    TreeNode::leaf(app, org, "chrome", Some(false), NodeType::RemoteApp)
}

fn serialize_cloud(app: &Application, org: &Organization) -> TreeNode {
    TreeNode::leaf(app, org, "k8s", Some(false), NodeType::K8sApp)
}

fn serialize_application(app: &Application, org: &Organization) -> Result<TreeNode> {
    let node = match app.category()? {
        AppCategory::Db => serialize_db(app, org),
        AppCategory::RemoteApp => serialize_remote_app(app, org),
        AppCategory::Cloud => serialize_cloud(app, org),
    };
    Ok(node)
}

fn serialize_organization(org: &Organization) -> TreeNode {
    TreeNode {
        id: org.id.clone(),
        name: org.name.clone(),
        title: org.name.clone(),
        p_id: String::new(),
        open: true,
        is_parent: Some(true),
        icon_skin: None,
        meta: NodeMeta {
            node_type: NodeType::Node,
        },
        org_name: None,
    }
}

/// Stored `org_id` of each application mapped to its resolved organization.
type ResolvedOrgs<'b> = BTreeMap<&'b str, Organization>;

/// Distinct organizations of `resolved`, keyed by canonical id.
fn distinct_organizations(resolved: &ResolvedOrgs<'_>) -> Vec<Organization> {
    let by_id: BTreeMap<&str, &Organization> = resolved
        .values()
        .map(|org| (org.id.as_str(), org))
        .collect();
    by_id.into_values().cloned().collect()
}

/// Builds tree nodes, resolving organizations through `R`.
pub struct TreeSerializer<'a, R: OrgRegistry> {
    orgs: &'a R,
}

impl<'a, R: OrgRegistry> TreeSerializer<'a, R> {
    pub fn new(orgs: &'a R) -> Self {
        Self { orgs }
    }

    /// Look up each distinct stored `org_id` once.
    ///
    /// Several stored ids may resolve to the same organization: an empty id
    /// and the default org id, or an id and a name.
    fn resolve_organizations<'b>(
        &self,
        applications: &'b [Application],
    ) -> Result<ResolvedOrgs<'b>> {
        let mut resolved = BTreeMap::new();
        for app in applications {
            if let Entry::Vacant(slot) = resolved.entry(app.org_id.as_str()) {
                slot.insert(self.orgs.get_instance(&app.org_id)?);
            }
        }
        debug!("Resolved {} stored organization ids", resolved.len());
        Ok(resolved)
    }

    fn serialize_leaves(
        &self,
        applications: &[Application],
        resolved: &ResolvedOrgs<'_>,
    ) -> Result<Vec<TreeNode>> {
        applications
            .iter()
            .map(|app| {
                let org = resolved
                    .get(app.org_id.as_str())
                    .ok_or_else(|| Error::OrgNotFound(app.org_id.clone()))?;
                serialize_application(app, org)
            })
            .collect()
    }

    /// One leaf node per application, in input order, each pointing at the
    /// id of its resolved organization.
    ///
    /// Fails with `UnsupportedCategory` on the first record whose category
    /// has no node shape.
    pub fn serialize_applications(&self, applications: &[Application]) -> Result<Vec<TreeNode>> {
        let resolved = self.resolve_organizations(applications)?;
        self.serialize_leaves(applications, &resolved)
    }

    /// Distinct organizations owning `applications`, sorted by id.
    pub fn filter_organizations(&self, applications: &[Application]) -> Result<Vec<Organization>> {
        let resolved = self.resolve_organizations(applications)?;
        Ok(distinct_organizations(&resolved))
    }

    pub fn serialize_organizations(&self, organizations: &[Organization]) -> Vec<TreeNode> {
        organizations.iter().map(serialize_organization).collect()
    }

    /// Organization roots followed by application leaves.
    pub fn serialize_applications_with_org(
        &self,
        applications: &[Application],
    ) -> Result<Vec<TreeNode>> {
        let resolved = self.resolve_organizations(applications)?;
        let organizations = distinct_organizations(&resolved);

        let mut data = self.serialize_organizations(&organizations);
        data.extend(self.serialize_leaves(applications, &resolved)?);

        debug!(
            "Serialized {} organizations and {} applications",
            organizations.len(),
            applications.len()
        );
        Ok(data)
    }
}
