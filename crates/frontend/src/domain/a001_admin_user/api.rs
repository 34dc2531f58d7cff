use contracts::domain::a001_admin_user::{
    AdminDetail, AdminListArgs, AdminUser, BlockUnblockRequest, ChangePasswordRequest,
    CreateSubAdminRequest, DeleteReactivateRequest, UserRole,
};
use contracts::shared::list::ListResponse;
use serde_json::Value;

use crate::shared::query::{MutationEndpoint, QueryEndpoint, QueryParams, RequestSpec, Tag};

const BASE: &str = "/admin/user";

/// Admin listing, always restricted to admin accounts.
pub struct GetAdmins;

impl QueryEndpoint for GetAdmins {
    const NAME: &'static str = "getAdmins";
    type Args = AdminListArgs;
    type Output = ListResponse<AdminUser>;

    fn request(args: &Self::Args) -> RequestSpec {
        let url = QueryParams::new()
            .set("sortOrder", args.sort_order.as_str())
            .set("page", args.page)
            .set("limit", args.limit)
            .set("adminUser", true)
            .opt("status", args.status.as_str())
            .opt("search", args.search.as_str())
            .append_to(&format!("{BASE}/listing"));
        RequestSpec::get(url)
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Admin]
    }
}

pub struct GetAdmin;

impl QueryEndpoint for GetAdmin {
    const NAME: &'static str = "getAdmin";
    type Args = String;
    type Output = AdminDetail;

    fn request(user_id: &Self::Args) -> RequestSpec {
        RequestSpec::get(format!("{BASE}/user-details/{user_id}"))
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Admin]
    }
}

/// Roles a sub-admin can be assigned to.
pub struct GetUserRoles;

impl QueryEndpoint for GetUserRoles {
    const NAME: &'static str = "getUserRoles";
    type Args = ();
    type Output = Vec<UserRole>;

    fn request(_: &Self::Args) -> RequestSpec {
        RequestSpec::get(format!("{BASE}/user-roles"))
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Roles]
    }
}

pub struct BlockUnblockAdmins;

impl MutationEndpoint for BlockUnblockAdmins {
    const NAME: &'static str = "blockUnblockAdmins";
    type Args = BlockUnblockRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(format!("{BASE}/block-unblock"), args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Admin]
    }
}

pub struct DeleteReactivateAdmins;

impl MutationEndpoint for DeleteReactivateAdmins {
    const NAME: &'static str = "deleteReactivateAdmins";
    type Args = DeleteReactivateRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(format!("{BASE}/delete"), args)
    }

    // roles carry the count of admins assigned to them
    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Admin, Tag::Roles]
    }
}

/// Expects `full_name` and `email` already passed through a `FieldEncryptor`.
pub struct CreateSubAdmin;

impl MutationEndpoint for CreateSubAdmin {
    const NAME: &'static str = "createSubAdmin";
    type Args = CreateSubAdminRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(format!("{BASE}/create-sub-admin"), args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Admin, Tag::Roles]
    }
}

/// Password change of the signed-in admin. Touches no cached data.
pub struct ChangePassword;

impl MutationEndpoint for ChangePassword {
    const NAME: &'static str = "changePassword";
    type Args = ChangePasswordRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(format!("{BASE}/change-password"), args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::Method;
    use contracts::domain::a001_admin_user::{BlockAction, DeleteAction};

    #[test]
    fn test_listing_url_omits_unset_filters() {
        let spec = GetAdmins::request(&AdminListArgs::default());
        assert_eq!(spec.method, Method::Get);
        assert_eq!(
            spec.url,
            "/admin/user/listing?sortOrder=desc&page=1&limit=10&adminUser=true"
        );
    }

    #[test]
    fn test_listing_url_with_filters() {
        let args = AdminListArgs {
            status: "blocked".into(),
            search: "ana m".into(),
            page: 2,
            ..AdminListArgs::default()
        };
        assert_eq!(
            GetAdmins::request(&args).url,
            "/admin/user/listing?sortOrder=desc&page=2&limit=10&adminUser=true&status=blocked&search=ana%20m"
        );
    }

    #[test]
    fn test_detail_url() {
        assert_eq!(
            GetAdmin::request(&"123".to_string()).url,
            "/admin/user/user-details/123"
        );
        assert_eq!(GetAdmin::provides(&"123".to_string()), vec![Tag::Admin]);
    }

    #[test]
    fn test_block_unblock_request() {
        let args = BlockUnblockRequest {
            user_ids: vec!["u1".into()],
            action: BlockAction::Unblock,
            admin_blocked_un_blocked_reason: "Appeal accepted".into(),
        };
        let spec = BlockUnblockAdmins::request(&args);
        assert_eq!(spec.method, Method::Post);
        assert_eq!(spec.url, "/admin/user/block-unblock");
        assert_eq!(spec.body.unwrap()["action"], "unblock");
        assert_eq!(BlockUnblockAdmins::invalidates(&args), vec![Tag::Admin]);
    }

    #[test]
    fn test_admin_count_changes_invalidate_roles() {
        let delete = DeleteReactivateRequest {
            user_ids: vec!["u1".into()],
            action: DeleteAction::Delete,
            admin_delete_and_reactivate_reason: "Left the team".into(),
        };
        assert_eq!(
            DeleteReactivateAdmins::invalidates(&delete),
            vec![Tag::Admin, Tag::Roles]
        );
        let create = CreateSubAdminRequest {
            full_name: "Ana".into(),
            email: "ana@example.com".into(),
            role: "r1".into(),
        };
        assert_eq!(CreateSubAdmin::invalidates(&create), vec![Tag::Admin, Tag::Roles]);
    }

    #[test]
    fn test_change_password_invalidates_nothing() {
        let args = ChangePasswordRequest {
            current_password: "Old#12345".into(),
            new_password: "New#12345".into(),
        };
        assert!(ChangePassword::invalidates(&args).is_empty());
    }
}
