use contracts::domain::a001_admin_user::{
    AdminStatus, BlockAction, BlockUnblockRequest, DeleteAction, DeleteReactivateRequest,
};

/// Bulk action offered for the selected admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Block,
    Unblock,
    Delete,
    Reactivate,
}

/// One of the two account-status mutations, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminActionRequest {
    BlockUnblock(BlockUnblockRequest),
    DeleteReactivate(DeleteReactivateRequest),
}

impl AdminAction {
    pub const ALL: [AdminAction; 4] = [
        AdminAction::Block,
        AdminAction::Unblock,
        AdminAction::Delete,
        AdminAction::Reactivate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminAction::Block => "Block",
            AdminAction::Unblock => "Unblock",
            AdminAction::Delete => "Delete",
            AdminAction::Reactivate => "Reactivate",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            AdminAction::Block => "Admins blocked",
            AdminAction::Unblock => "Admins unblocked",
            AdminAction::Delete => "Admins deleted",
            AdminAction::Reactivate => "Admins reactivated",
        }
    }

    pub fn dialog_title(&self, count: usize) -> String {
        let noun = if count == 1 { "admin" } else { "admins" };
        format!("{} {} {}?", self.label(), count, noun)
    }

    /// Whether the action changes an account currently in `status`.
    pub fn applies_to(&self, status: AdminStatus) -> bool {
        matches!(
            (self, status),
            (AdminAction::Block, AdminStatus::Active)
                | (AdminAction::Unblock, AdminStatus::Blocked)
                | (AdminAction::Delete, AdminStatus::Active | AdminStatus::Blocked)
                | (AdminAction::Reactivate, AdminStatus::Deleted)
        )
    }

    pub fn request(&self, user_ids: Vec<String>, reason: String) -> AdminActionRequest {
        match self {
            AdminAction::Block | AdminAction::Unblock => {
                AdminActionRequest::BlockUnblock(BlockUnblockRequest {
                    user_ids,
                    action: if *self == AdminAction::Block {
                        BlockAction::Block
                    } else {
                        BlockAction::Unblock
                    },
                    admin_blocked_un_blocked_reason: reason,
                })
            }
            AdminAction::Delete | AdminAction::Reactivate => {
                AdminActionRequest::DeleteReactivate(DeleteReactivateRequest {
                    user_ids,
                    action: if *self == AdminAction::Delete {
                        DeleteAction::Delete
                    } else {
                        DeleteAction::Reactivate
                    },
                    admin_delete_and_reactivate_reason: reason,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_maps_to_block_unblock() {
        let request = AdminAction::Block.request(vec!["u1".into()], "Spam".into());
        assert_eq!(
            request,
            AdminActionRequest::BlockUnblock(BlockUnblockRequest {
                user_ids: vec!["u1".into()],
                action: BlockAction::Block,
                admin_blocked_un_blocked_reason: "Spam".into(),
            })
        );
    }

    #[test]
    fn test_reactivate_maps_to_delete_endpoint() {
        match AdminAction::Reactivate.request(vec!["u2".into()], "Appeal".into()) {
            AdminActionRequest::DeleteReactivate(req) => {
                assert_eq!(req.action, DeleteAction::Reactivate);
                assert_eq!(req.admin_delete_and_reactivate_reason, "Appeal");
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn test_applies_to() {
        assert!(AdminAction::Block.applies_to(AdminStatus::Active));
        assert!(!AdminAction::Block.applies_to(AdminStatus::Blocked));
        assert!(AdminAction::Delete.applies_to(AdminStatus::Blocked));
        assert!(!AdminAction::Reactivate.applies_to(AdminStatus::Active));
    }

    #[test]
    fn test_dialog_title() {
        assert_eq!(AdminAction::Block.dialog_title(1), "Block 1 admin?");
        assert_eq!(AdminAction::Delete.dialog_title(3), "Delete 3 admins?");
    }
}
