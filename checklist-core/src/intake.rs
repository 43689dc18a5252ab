//! Patient intake form behind the "Book Appointment" buttons.
//!
//! Submission is simulated: a valid form is only marked as sent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{0} is required")]
    Missing(IntakeField),
    #[error("date of birth must be YYYY-MM-DD, got {0:?}")]
    InvalidDateOfBirth(String),
    #[error("email address {0:?} is malformed")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeField {
    Name,
    DateOfBirth,
    Phone,
    Email,
}

impl std::fmt::Display for IntakeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            IntakeField::Name => "full name",
            IntakeField::DateOfBirth => "date of birth",
            IntakeField::Phone => "phone number",
            IntakeField::Email => "email address",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Insurance {
    Private,
    Medicare,
    Medicaid,
    #[serde(rename = "Self-Pay")]
    SelfPay,
    Other,
}

impl Insurance {
    pub const ALL: [Insurance; 5] = [
        Insurance::Private,
        Insurance::Medicare,
        Insurance::Medicaid,
        Insurance::SelfPay,
        Insurance::Other,
    ];

    /// Form value, as submitted.
    pub fn value(self) -> &'static str {
        match self {
            Insurance::Private => "Private",
            Insurance::Medicare => "Medicare",
            Insurance::Medicaid => "Medicaid",
            Insurance::SelfPay => "Self-Pay",
            Insurance::Other => "Other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Insurance::Private => "Private (Aetna, BCBS, etc.)",
            other => other.value(),
        }
    }

    pub fn from_value(value: &str) -> Option<Insurance> {
        Insurance::ALL.into_iter().find(|option| option.value() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Vietnamese,
    Arabic,
    Other,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::Vietnamese,
        Language::Arabic,
        Language::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Vietnamese => "Vietnamese",
            Language::Arabic => "Arabic",
            Language::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|option| option.label() == value)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntakeForm {
    pub name: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub insurance: Option<Insurance>,
    pub language: Language,
    pub notes: String,
}

impl IntakeForm {
    /// Empty form whose notes mention the selected symptoms.
    pub fn prefilled<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            notes: symptom_notes(labels),
            ..Self::default()
        }
    }

    /// Presence and shape checks only.
    pub fn validate(&self) -> Result<(), IntakeError> {
        require(&self.name, IntakeField::Name)?;
        let dob = require(&self.date_of_birth, IntakeField::DateOfBirth)?;
        require(&self.phone, IntakeField::Phone)?;
        let email = require(&self.email, IntakeField::Email)?;

        NaiveDate::parse_from_str(dob, "%Y-%m-%d")
            .map_err(|_| IntakeError::InvalidDateOfBirth(dob.to_string()))?;

        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(IntakeError::InvalidEmail(email.to_string())),
        }
    }
}

fn require(value: &str, field: IntakeField) -> Result<&str, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(IntakeError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

/// "I am experiencing the following: ..." or an empty string.
pub fn symptom_notes<S: AsRef<str>>(labels: &[S]) -> String {
    if labels.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    format!("I am experiencing the following: {}", joined.join(", "))
}

/// Modal state: closed, editing a form, sending, or showing the confirmation.
///
/// Sending is split in two steps so a delayed confirmation can be applied
/// to whatever the modal looks like when it lands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntakeModal {
    open: bool,
    sending: bool,
    submitted: bool,
    form: IntakeForm,
    #[serde(skip)]
    error: Option<IntakeError>,
}

impl IntakeModal {
    /// Open with a fresh form prefilled from the current selection.
    pub fn open<S: AsRef<str>>(&mut self, labels: &[S]) {
        *self = Self {
            open: true,
            form: IntakeForm::prefilled(labels),
            ..Self::default()
        };
    }

    /// Close the dialog. A send still in flight will not confirm.
    pub fn close(&mut self) {
        self.open = false;
        self.sending = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Validation error of the last submit attempt on this form.
    pub fn error(&self) -> Option<&IntakeError> {
        self.error.as_ref()
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut IntakeForm {
        &mut self.form
    }

    /// Validate and start sending. Returns `Ok(false)` when the dialog is
    /// closed, already sending or already confirmed.
    pub fn submit(&mut self) -> Result<bool, IntakeError> {
        if !self.open || self.sending || self.submitted {
            return Ok(false);
        }
        if let Err(err) = self.form.validate() {
            self.error = Some(err.clone());
            return Err(err);
        }
        self.error = None;
        self.sending = true;
        Ok(true)
    }

    /// Confirm the send started by [`IntakeModal::submit`]. Does nothing
    /// once the dialog was closed or reopened in the meantime.
    pub fn complete_submission(&mut self) -> bool {
        if !(self.open && self.sending) {
            return false;
        }
        self.sending = false;
        self.submitted = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> IntakeForm {
        IntakeForm {
            name: "Jane Doe".to_string(),
            date_of_birth: "1988-04-12".to_string(),
            phone: "(555) 555-5555".to_string(),
            email: "jane@example.com".to_string(),
            ..IntakeForm::default()
        }
    }

    #[test]
    fn notes_list_selected_labels() {
        let form = IntakeForm::prefilled(&["Persistent Itching", "History of HPV"]);
        assert_eq!(
            form.notes,
            "I am experiencing the following: Persistent Itching, History of HPV"
        );
        assert_eq!(IntakeForm::prefilled::<&str>(&[]).notes, "");
        assert_eq!(form.language, Language::English);
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(complete_form().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let form = IntakeForm {
            name: "   ".to_string(),
            ..complete_form()
        };
        assert_eq!(form.validate(), Err(IntakeError::Missing(IntakeField::Name)));

        let form = IntakeForm {
            phone: String::new(),
            ..complete_form()
        };
        assert_eq!(form.validate(), Err(IntakeError::Missing(IntakeField::Phone)));
    }

    #[test]
    fn shape_checks() {
        let form = IntakeForm {
            date_of_birth: "12/04/1988".to_string(),
            ..complete_form()
        };
        assert!(matches!(form.validate(), Err(IntakeError::InvalidDateOfBirth(_))));

        let form = IntakeForm {
            email: "jane.example.com".to_string(),
            ..complete_form()
        };
        assert!(matches!(form.validate(), Err(IntakeError::InvalidEmail(_))));
    }

    #[test]
    fn insurance_values_round_trip() {
        for option in Insurance::ALL {
            assert_eq!(Insurance::from_value(option.value()), Some(option));
        }
        assert_eq!(Insurance::Private.label(), "Private (Aetna, BCBS, etc.)");
    }

    #[test]
    fn modal_reopen_resets_submission() {
        let mut modal = IntakeModal::default();
        modal.open(&["History of HPV"]);
        *modal.form_mut() = IntakeForm {
            notes: modal.form().notes.clone(),
            ..complete_form()
        };
        assert_eq!(modal.submit(), Ok(true));
        assert!(modal.is_sending());
        assert!(modal.complete_submission());
        assert!(modal.is_submitted());
        assert!(!modal.is_sending());

        modal.close();
        modal.open::<&str>(&[]);
        assert!(modal.is_open());
        assert!(!modal.is_submitted());
        assert_eq!(modal.form().name, "");
    }

    #[test]
    fn closing_while_sending_stays_closed() {
        let mut modal = IntakeModal::default();
        modal.open::<&str>(&[]);
        *modal.form_mut() = complete_form();
        assert_eq!(modal.submit(), Ok(true));

        modal.close();
        assert!(!modal.complete_submission());
        assert!(!modal.is_open());
        assert!(!modal.is_submitted());
    }

    #[test]
    fn late_confirmation_does_not_touch_reopened_form() {
        let mut modal = IntakeModal::default();
        modal.open::<&str>(&[]);
        *modal.form_mut() = complete_form();
        assert_eq!(modal.submit(), Ok(true));

        modal.close();
        modal.open(&["History of HPV"]);
        modal.form_mut().name = "Ana".to_string();
        assert!(!modal.complete_submission());
        assert!(modal.is_open());
        assert!(!modal.is_submitted());
        assert_eq!(modal.form().name, "Ana");
    }

    #[test]
    fn repeated_submit_while_sending_is_ignored() {
        let mut modal = IntakeModal::default();
        modal.open::<&str>(&[]);
        *modal.form_mut() = complete_form();
        assert_eq!(modal.submit(), Ok(true));
        assert_eq!(modal.submit(), Ok(false));
        assert!(modal.complete_submission());
        assert!(!modal.complete_submission());
        assert_eq!(modal.submit(), Ok(false));
    }

    #[test]
    fn validation_error_is_cleared_on_reopen() {
        let mut modal = IntakeModal::default();
        modal.open::<&str>(&[]);
        assert_eq!(modal.submit(), Err(IntakeError::Missing(IntakeField::Name)));
        assert_eq!(modal.error(), Some(&IntakeError::Missing(IntakeField::Name)));
        assert!(!modal.is_sending());

        modal.close();
        modal.open::<&str>(&[]);
        assert_eq!(modal.error(), None);
    }
}
