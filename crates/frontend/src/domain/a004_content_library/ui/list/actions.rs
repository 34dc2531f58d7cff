use contracts::domain::a004_content_library::{ContentActionRequest, ContentStatus, ModerationAction};

pub const ACTIONS: [ModerationAction; 3] = [
    ModerationAction::Approve,
    ModerationAction::Reject,
    ModerationAction::Flag,
];

/// Status an item ends up in after `action`; items already there are skipped.
pub fn target_status(action: ModerationAction) -> ContentStatus {
    match action {
        ModerationAction::Approve => ContentStatus::Approved,
        ModerationAction::Reject => ContentStatus::Rejected,
        ModerationAction::Flag => ContentStatus::Flagged,
    }
}

pub fn success_message(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Approve => "Content approved",
        ModerationAction::Reject => "Content rejected",
        ModerationAction::Flag => "Content flagged",
    }
}

pub fn dialog_title(action: ModerationAction, count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} {}?", action.label(), count, noun)
}

/// Request for `action`; the reason is only sent for actions that need one.
pub fn build_request(
    action: ModerationAction,
    content_ids: Vec<String>,
    reason: Option<String>,
) -> ContentActionRequest {
    ContentActionRequest {
        content_ids,
        action,
        reason: if action.needs_reason() { reason } else { None },
    }
}
