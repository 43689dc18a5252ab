//! Core logic of the symptom checklist: catalog, severity classification,
//! recommendation wording, script templates and the intake form model.

pub mod assessment;
pub mod catalog;
pub mod checklist;
pub mod intake;
pub mod mail;
pub mod phrase;
pub mod request;
pub mod script;

pub use assessment::{classify, critical_message, Recommendation, RecommendedAction, Status};
pub use catalog::{Category, Symptom, SymptomDefinition, SymptomId, SymptomSummary, CATALOG};
pub use checklist::Checklist;
pub use intake::{IntakeError, IntakeField, IntakeForm, IntakeModal, Insurance, Language};
pub use mail::{mail_body, mailto_link};
pub use phrase::{compose_critical_clause, join_english_list};
pub use request::ScriptRequest;
pub use script::{
    compose_script, compose_script_for, CALL_TO_ACTION, GENERIC_FALLBACK_SCRIPT, PROACTIVE_SCRIPT,
};

/// Errors raised by the string-facing entry points.
#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),
    #[error("Could not decode text: {0}")]
    Encoding(String),
}

/// Parse symptom keys (`"itching"`, `"bleeding"`, ...) into a selection in
/// catalog order, dropping duplicates.
pub fn parse_selection<S: AsRef<str>>(keys: &[S]) -> Result<Vec<SymptomId>, ChecklistError> {
    let mut selection = keys
        .iter()
        .map(|key| key.as_ref().parse::<SymptomId>())
        .collect::<Result<Vec<_>, _>>()?;
    selection.sort();
    selection.dedup();
    Ok(selection)
}
