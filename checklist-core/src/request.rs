//! Lifecycle of a script-generation request.

use serde::{Deserialize, Serialize};

/// Idle, waiting on the generator, or holding the last script.
///
/// A pending request keeps the previously resolved script so it stays on
/// screen until the replacement arrives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScriptRequest {
    #[default]
    Idle,
    Pending { previous: Option<String> },
    Resolved { script: String },
}

impl ScriptRequest {
    /// Start a request. Overlapping triggers are refused while one is pending.
    pub fn begin(&mut self) -> bool {
        let previous = match std::mem::take(self) {
            ScriptRequest::Idle => None,
            ScriptRequest::Resolved { script } => Some(script),
            pending @ ScriptRequest::Pending { .. } => {
                *self = pending;
                return false;
            }
        };
        *self = ScriptRequest::Pending { previous };
        true
    }

    /// Store the result of the pending request. Ignored when nothing is pending.
    pub fn resolve(&mut self, script: String) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = ScriptRequest::Resolved { script };
        true
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ScriptRequest::Pending { .. })
    }

    /// Last resolved script, including while a newer one is being written.
    pub fn script(&self) -> Option<&str> {
        match self {
            ScriptRequest::Idle => None,
            ScriptRequest::Pending { previous } => previous.as_deref(),
            ScriptRequest::Resolved { script } => Some(script),
        }
    }

    /// Label of the trigger button.
    pub fn button_label(&self) -> &'static str {
        if self.is_pending() {
            "Writing Script..."
        } else {
            "Generate \"How to Ask\" Script"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_trigger_is_refused() {
        let mut request = ScriptRequest::default();
        assert!(request.begin());
        assert!(!request.begin());
        assert!(request.is_pending());
        assert_eq!(request.script(), None);
    }

    #[test]
    fn resolve_then_retrigger_keeps_previous_script() {
        let mut request = ScriptRequest::default();
        request.begin();
        assert!(request.resolve("first".to_string()));
        assert_eq!(request.script(), Some("first"));

        assert!(request.begin());
        assert!(request.is_pending());
        assert_eq!(request.script(), Some("first"));

        assert!(!request.begin());
        assert_eq!(request.script(), Some("first"));

        request.resolve("second".to_string());
        assert_eq!(request.script(), Some("second"));
    }

    #[test]
    fn stray_resolve_is_ignored() {
        let mut request = ScriptRequest::default();
        assert!(!request.resolve("late".to_string()));
        assert_eq!(request, ScriptRequest::Idle);
    }

    #[test]
    fn serializes_with_state_tag() {
        let request = ScriptRequest::Pending {
            previous: Some("first".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["state"], "pending");
        assert_eq!(json["previous"], "first");
    }
}
