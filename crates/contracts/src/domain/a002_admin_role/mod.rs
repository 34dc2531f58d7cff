pub mod permission_tree;
pub mod schema;

use serde::{Deserialize, Serialize};

pub use permission_tree::{CheckState, PermissionNode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRole {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub permission_ids: Vec<String>,
    #[serde(default)]
    pub assigned_admins: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of role create and update
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpsert {
    pub name: String,
    pub permission_ids: Vec<String>,
}

/// Arguments of the role update mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoleArgs {
    pub id: String,
    pub body: RoleUpsert,
}
