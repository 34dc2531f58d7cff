pub mod schema;

use serde::{Deserialize, Serialize};

use crate::shared::list::SortOrder;
use crate::shared::sentinel::ALL;

/// Admin / sub-admin account as shown in the admin listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role_name: Option<String>,
    pub status: AdminStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Full admin record returned by `user-details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDetail {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    pub status: AdminStatus,
    #[serde(default)]
    pub permission_ids: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
    #[serde(default)]
    pub admin_blocked_un_blocked_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminStatus {
    Active,
    Blocked,
    Deleted,
}

impl AdminStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminStatus::Active => "active",
            AdminStatus::Blocked => "blocked",
            AdminStatus::Deleted => "deleted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminStatus::Active => "Active",
            AdminStatus::Blocked => "Blocked",
            AdminStatus::Deleted => "Deleted",
        }
    }
}

/// Arguments of the admin listing query.
///
/// `status` uses `"all"` and `search` uses `""` as their unset sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminListArgs {
    pub sort_order: SortOrder,
    pub page: i64,
    pub limit: i64,
    pub status: String,
    pub search: String,
}

impl Default for AdminListArgs {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Desc,
            page: crate::shared::list::DEFAULT_PAGE,
            limit: crate::shared::list::DEFAULT_LIMIT,
            status: ALL.to_string(),
            search: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockAction {
    Block,
    Unblock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockUnblockRequest {
    pub user_ids: Vec<String>,
    pub action: BlockAction,
    pub admin_blocked_un_blocked_reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteAction {
    Delete,
    Reactivate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReactivateRequest {
    pub user_ids: Vec<String>,
    pub action: DeleteAction,
    pub admin_delete_and_reactivate_reason: String,
}

/// Payload of `create-sub-admin`. `full_name` and `email` are already
/// encrypted by the caller when they reach this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubAdminRequest {
    pub full_name: String,
    pub email: String,
    pub role: String,
}

/// Role option offered when assigning a sub-admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
