//! State of one in-flight or completed write action.
//!
//! Each mutation modal owns exactly one [`MutationState`]; it is created
//! fresh with the modal instance and reset when the modal closes, so a
//! reopened modal can never show a previous instance's outcome.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationPhase {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationState {
    phase: MutationPhase,
    message: Option<String>,
}

impl MutationState {
    pub fn phase(&self) -> MutationPhase {
        self.phase
    }

    pub fn start(&mut self) {
        self.phase = MutationPhase::Pending;
        self.message = None;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.phase = MutationPhase::Success;
        self.message = Some(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = MutationPhase::Error;
        self.message = Some(message.into());
    }

    pub fn reset(&mut self) {
        *self = MutationState::default();
    }

    pub fn is_busy(&self) -> bool {
        self.phase == MutationPhase::Pending
    }

    pub fn is_success(&self) -> bool {
        self.phase == MutationPhase::Success
    }

    /// The inline error to render in the modal, if the action failed.
    pub fn error(&self) -> Option<&str> {
        match self.phase {
            MutationPhase::Error => self.message.as_deref(),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flow() {
        let mut m = MutationState::default();
        m.start();
        assert!(m.is_busy());
        m.succeed("Policy paused successfully");
        assert!(m.is_success());
        assert_eq!(m.message(), Some("Policy paused successfully"));
        assert_eq!(m.error(), None);
    }

    #[test]
    fn test_failure_keeps_error_visible() {
        let mut m = MutationState::default();
        m.start();
        m.fail("HTTP 409: policy already active");
        assert!(!m.is_busy());
        assert!(!m.is_success());
        assert_eq!(m.error(), Some("HTTP 409: policy already active"));
    }

    #[test]
    fn test_retry_after_failure() {
        let mut m = MutationState::default();
        m.start();
        m.fail("network error");
        // The modal stays open; confirming again restarts cleanly.
        m.start();
        assert!(m.is_busy());
        assert_eq!(m.error(), None);
        assert_eq!(m.message(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut m = MutationState::default();
        m.start();
        m.succeed("done");
        m.reset();
        assert_eq!(m, MutationState::default());
        assert_eq!(m.message(), None);
    }
}
