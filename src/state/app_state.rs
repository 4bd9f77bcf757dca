//! Application state definitions

use super::session::Session;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The user's form and result
    pub session: Session,
    /// Why prediction is disabled, shown as a persistent banner
    pub artifact_error: Option<String>,
    /// Queue of errors waiting to be shown in the error dialog
    error_queue: VecDeque<String>,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Fresh state, with the banner text when artifact loading failed
    pub fn new(artifact_error: Option<String>) -> Self {
        Self {
            artifact_error,
            ..Default::default()
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Clear transient UI state along with the session
    pub fn reset(&mut self) {
        self.session.reset();
        self.error_queue.clear();
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Form, PatientForm};

    #[test]
    fn test_error_queue_order() {
        let mut state = AppState::default();
        assert!(!state.has_errors());

        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(!state.has_errors());
        assert_eq!(state.current_error(), None);
    }

    #[test]
    fn test_new_carries_artifact_error() {
        let state = AppState::new(Some("missing".to_string()));
        assert_eq!(state.artifact_error.as_deref(), Some("missing"));
        assert!(!state.has_errors());
        assert!(state.status_message.is_none());
        assert!(AppState::new(None).artifact_error.is_none());
    }

    #[test]
    fn test_reset_clears_transient_state_but_keeps_artifact_error() {
        let mut state = AppState::new(Some("missing".to_string()));
        state.status_message = Some("Copied".to_string());
        state.push_error("clipboard".to_string());
        state.session.form.set_active_field(5);

        state.reset();

        assert!(!state.has_errors());
        assert!(state.status_message.is_none());
        assert_eq!(state.session.form, PatientForm::new());
        assert_eq!(state.session.form.active_field(), 0);
        assert_eq!(state.artifact_error.as_deref(), Some("missing"));
    }
}
