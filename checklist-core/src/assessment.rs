//! Severity classification and the recommendation card derived from it.

use serde::{Deserialize, Serialize};

use crate::catalog::SymptomId;
use crate::phrase::compose_critical_clause;

/// Overall result of the checklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    None,
    Minor,
    Critical,
}

/// Classify a selection: nothing checked, only minor symptoms, or at least
/// one critical symptom.
pub fn classify(selection: &[SymptomId]) -> Status {
    if selection.is_empty() {
        Status::None
    } else if selection.iter().any(|id| id.is_critical()) {
        Status::Critical
    } else {
        Status::Minor
    }
}

pub const CRITICAL_TITLE: &str = "Recommendation";
pub const CRITICAL_ACTION: &str = "Book Appointment Now";
pub const MINOR_TITLE: &str = "Good to Track";
pub const MINOR_MESSAGE: &str = "These symptoms are likely minor, but good to track. Ask your doctor about them at your next visit.";
pub const MINOR_ACTION: &str = "Email Me This List";

/// What the result card should do when the user follows its action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Open the intake form.
    BookAppointment,
    /// Follow the `mailto:` link built from the selection.
    EmailList,
}

/// Content of the result card shown after "See My Results".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub status: Status,
    pub title: String,
    pub message: String,
    pub action: RecommendedAction,
    pub action_label: String,
}

impl Recommendation {
    /// Build the card for a selection; `None` when nothing is checked.
    pub fn for_selection(selection: &[SymptomId]) -> Option<Self> {
        match classify(selection) {
            Status::None => None,
            Status::Critical => Some(Self {
                status: Status::Critical,
                title: CRITICAL_TITLE.to_string(),
                message: critical_message(&compose_critical_clause(selection)),
                action: RecommendedAction::BookAppointment,
                action_label: CRITICAL_ACTION.to_string(),
            }),
            Status::Minor => Some(Self {
                status: Status::Minor,
                title: MINOR_TITLE.to_string(),
                message: MINOR_MESSAGE.to_string(),
                action: RecommendedAction::EmailList,
                action_label: MINOR_ACTION.to_string(),
            }),
        }
    }
}

/// Surround a critical clause with the recommendation sentence.
pub fn critical_message(clause: &str) -> String {
    format!(
        "Because you noted {clause}, we recommend seeing a specialist soon to rule out anything serious."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_none() {
        assert_eq!(classify(&[]), Status::None);
        assert!(Recommendation::for_selection(&[]).is_none());
    }

    #[test]
    fn one_critical_symptom_outweighs_minor_ones() {
        let selection = [
            SymptomId::Itching,
            SymptomId::Bowel,
            SymptomId::Hpv,
            SymptomId::Lumps,
        ];
        assert_eq!(classify(&selection), Status::Critical);
    }

    #[test]
    fn minor_only_selection_is_minor() {
        assert_eq!(classify(&[SymptomId::Itching, SymptomId::Hpv]), Status::Minor);
    }

    #[test]
    fn critical_card_embeds_clause() {
        let card = Recommendation::for_selection(&[SymptomId::Bleeding, SymptomId::Pain])
            .expect("card for critical selection");
        assert_eq!(card.action, RecommendedAction::BookAppointment);
        assert_eq!(
            card.message,
            "Because you noted bleeding around your rectum and Feeling of fullness or pain in your rectum, \
             we recommend seeing a specialist soon to rule out anything serious."
        );
    }

    #[test]
    fn minor_card_offers_email() {
        let card = Recommendation::for_selection(&[SymptomId::Bowel]).expect("card");
        assert_eq!(card.status, Status::Minor);
        assert_eq!(card.action, RecommendedAction::EmailList);
        assert_eq!(card.message, MINOR_MESSAGE);
    }
}
