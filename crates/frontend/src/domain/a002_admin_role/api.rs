use contracts::domain::a002_admin_role::{AdminRole, PermissionNode, RoleUpsert, UpdateRoleArgs};
use contracts::shared::list::ListResponse;
use serde_json::Value;

use crate::shared::query::{MutationEndpoint, QueryEndpoint, RequestSpec, Tag};

const ROLES: &str = "/admin/user/roles";

pub struct GetAdminRoles;

impl QueryEndpoint for GetAdminRoles {
    const NAME: &'static str = "getAdminRoles";
    type Args = ();
    type Output = ListResponse<AdminRole>;

    fn request(_: &Self::Args) -> RequestSpec {
        RequestSpec::get(ROLES)
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Roles]
    }
}

/// Permission forest shown in the role editor.
pub struct GetPermissions;

impl QueryEndpoint for GetPermissions {
    const NAME: &'static str = "getPermissions";
    type Args = ();
    type Output = Vec<PermissionNode>;

    fn request(_: &Self::Args) -> RequestSpec {
        RequestSpec::get("/admin/user/permissions")
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Roles]
    }
}

pub struct CreateAdminRole;

impl MutationEndpoint for CreateAdminRole {
    const NAME: &'static str = "createAdminRole";
    type Args = RoleUpsert;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(ROLES, args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Roles]
    }
}

/// Admins display their role name, so role writes also invalidate `Admin`.
pub struct UpdateAdminRole;

impl MutationEndpoint for UpdateAdminRole {
    const NAME: &'static str = "updateAdminRole";
    type Args = UpdateRoleArgs;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::put(format!("{ROLES}/{}", args.id), &args.body)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Roles, Tag::Admin]
    }
}

pub struct DeleteAdminRole;

impl MutationEndpoint for DeleteAdminRole {
    const NAME: &'static str = "deleteAdminRole";
    type Args = String;
    type Output = Value;

    fn request(role_id: &Self::Args) -> RequestSpec {
        RequestSpec::delete(format!("{ROLES}/{role_id}"))
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Roles, Tag::Admin]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::Method;

    #[test]
    fn test_update_role_request() {
        let args = UpdateRoleArgs {
            id: "r7".into(),
            body: RoleUpsert {
                name: "Reviewers".into(),
                permission_ids: vec!["content.view".into()],
            },
        };
        let spec = UpdateAdminRole::request(&args);
        assert_eq!(spec.method, Method::Put);
        assert_eq!(spec.url, "/admin/user/roles/r7");
        assert_eq!(
            spec.body.unwrap(),
            serde_json::json!({ "name": "Reviewers", "permissionIds": ["content.view"] })
        );
        assert_eq!(UpdateAdminRole::invalidates(&args), vec![Tag::Roles, Tag::Admin]);
    }

    #[test]
    fn test_create_invalidates_only_roles() {
        assert_eq!(CreateAdminRole::invalidates(&RoleUpsert::default()), vec![Tag::Roles]);
        assert_eq!(CreateAdminRole::request(&RoleUpsert::default()).method, Method::Post);
    }

    #[test]
    fn test_delete_role_request() {
        let spec = DeleteAdminRole::request(&"r7".to_string());
        assert_eq!(spec.method, Method::Delete);
        assert_eq!(spec.url, "/admin/user/roles/r7");
        assert!(spec.body.is_none());
    }
}
