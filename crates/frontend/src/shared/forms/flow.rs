//! Submit/confirm and close/discard state machines shared by drawer forms.

/// Submit path of a drawer form.
///
/// `Idle -> PendingConfirm -> Submitting -> Closed`; cancelling the
/// confirmation or a failed request returns to `Idle` with the form intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmFlow {
    #[default]
    Idle,
    PendingConfirm,
    Submitting,
    Closed,
}

impl ConfirmFlow {
    /// Submit pressed; `valid` is the outcome of schema validation.
    pub fn submit(self, valid: bool) -> Self {
        match self {
            ConfirmFlow::Idle if valid => ConfirmFlow::PendingConfirm,
            other => other,
        }
    }

    pub fn confirm(self) -> Self {
        match self {
            ConfirmFlow::PendingConfirm => ConfirmFlow::Submitting,
            other => other,
        }
    }

    pub fn cancel(self) -> Self {
        match self {
            ConfirmFlow::PendingConfirm => ConfirmFlow::Idle,
            other => other,
        }
    }

    /// Request finished.
    pub fn settle(self, ok: bool) -> Self {
        match self {
            ConfirmFlow::Submitting if ok => ConfirmFlow::Closed,
            ConfirmFlow::Submitting => ConfirmFlow::Idle,
            other => other,
        }
    }

    pub fn is_dialog_open(self) -> bool {
        matches!(self, ConfirmFlow::PendingConfirm | ConfirmFlow::Submitting)
    }

    pub fn is_submitting(self) -> bool {
        self == ConfirmFlow::Submitting
    }
}

/// Close path of a drawer form holding unsaved edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscardGuard {
    #[default]
    Editing,
    AskingDiscard,
    Closed,
}

impl DiscardGuard {
    pub fn request_close(self, dirty: bool) -> Self {
        match self {
            DiscardGuard::Editing if dirty => DiscardGuard::AskingDiscard,
            DiscardGuard::Editing => DiscardGuard::Closed,
            other => other,
        }
    }

    pub fn discard(self) -> Self {
        match self {
            DiscardGuard::AskingDiscard => DiscardGuard::Closed,
            other => other,
        }
    }

    pub fn keep_editing(self) -> Self {
        match self {
            DiscardGuard::AskingDiscard => DiscardGuard::Editing,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let flow = ConfirmFlow::Idle.submit(true);
        assert_eq!(flow, ConfirmFlow::PendingConfirm);
        assert!(flow.is_dialog_open());
        let flow = flow.confirm();
        assert!(flow.is_submitting());
        assert_eq!(flow.settle(true), ConfirmFlow::Closed);
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        assert_eq!(ConfirmFlow::Idle.submit(false), ConfirmFlow::Idle);
    }

    #[test]
    fn test_cancel_and_failure_return_to_idle() {
        assert_eq!(ConfirmFlow::PendingConfirm.cancel(), ConfirmFlow::Idle);
        assert_eq!(ConfirmFlow::Submitting.settle(false), ConfirmFlow::Idle);
        // a second submit while the request runs is ignored
        assert_eq!(ConfirmFlow::Submitting.submit(true), ConfirmFlow::Submitting);
        assert_eq!(ConfirmFlow::Submitting.cancel(), ConfirmFlow::Submitting);
    }

    #[test]
    fn test_discard_guard() {
        assert_eq!(DiscardGuard::Editing.request_close(false), DiscardGuard::Closed);
        let asking = DiscardGuard::Editing.request_close(true);
        assert_eq!(asking, DiscardGuard::AskingDiscard);
        assert_eq!(asking.keep_editing(), DiscardGuard::Editing);
        assert_eq!(asking.discard(), DiscardGuard::Closed);
    }
}
