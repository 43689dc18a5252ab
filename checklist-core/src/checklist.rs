//! Checklist state owned by the page.

use serde::{Deserialize, Serialize};

use crate::assessment::{classify, Recommendation, Status};
use crate::catalog::{Symptom, SymptomId, SymptomSummary};
use crate::mail::mailto_link;
use crate::phrase::compose_critical_clause;
use crate::script::compose_script_for;

/// The catalog with checked flags plus the result-card visibility.
///
/// All mutation goes through [`Checklist::toggle`] and
/// [`Checklist::reveal_result`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checklist {
    symptoms: Vec<Symptom>,
    result_visible: bool,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}

impl Checklist {
    pub fn new() -> Self {
        Self {
            symptoms: SymptomId::ALL.into_iter().map(Symptom::unchecked).collect(),
            result_visible: false,
        }
    }

    /// Flip one symptom. Hides the result card once nothing is checked.
    pub fn toggle(&mut self, id: SymptomId) {
        if let Some(symptom) = self.symptoms.iter_mut().find(|symptom| symptom.id == id) {
            symptom.checked = !symptom.checked;
        }
        if !self.has_selection() {
            self.result_visible = false;
        }
    }

    pub fn is_checked(&self, id: SymptomId) -> bool {
        self.symptoms
            .iter()
            .any(|symptom| symptom.id == id && symptom.checked)
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn summaries(&self) -> Vec<SymptomSummary> {
        self.symptoms.iter().map(SymptomSummary::from).collect()
    }

    /// Checked identifiers in catalog order.
    pub fn selection(&self) -> Vec<SymptomId> {
        self.symptoms
            .iter()
            .filter(|symptom| symptom.checked)
            .map(|symptom| symptom.id)
            .collect()
    }

    pub fn selected_labels(&self) -> Vec<&'static str> {
        self.symptoms
            .iter()
            .filter(|symptom| symptom.checked)
            .map(Symptom::label)
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.symptoms.iter().any(|symptom| symptom.checked)
    }

    pub fn status(&self) -> Status {
        classify(&self.selection())
    }

    pub fn critical_clause(&self) -> String {
        compose_critical_clause(&self.selection())
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        Recommendation::for_selection(&self.selection())
    }

    pub fn template_script(&self) -> String {
        compose_script_for(&self.selection())
    }

    pub fn mailto_link(&self) -> String {
        mailto_link(&self.selected_labels())
    }

    /// Show the result card. Returns `false` when nothing is checked.
    pub fn reveal_result(&mut self) -> bool {
        self.result_visible = self.has_selection();
        self.result_visible
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unchecked_in_catalog_order() {
        let checklist = Checklist::new();
        let ids: Vec<SymptomId> = checklist.symptoms().iter().map(|s| s.id).collect();
        assert_eq!(ids, SymptomId::ALL.to_vec());
        assert!(!checklist.has_selection());
        assert_eq!(checklist.status(), Status::None);
    }

    #[test]
    fn selection_follows_catalog_not_click_order() {
        let mut checklist = Checklist::new();
        checklist.toggle(SymptomId::Lumps);
        checklist.toggle(SymptomId::Itching);
        assert_eq!(
            checklist.selection(),
            vec![SymptomId::Itching, SymptomId::Lumps]
        );
    }

    #[test]
    fn toggling_twice_unchecks() {
        let mut checklist = Checklist::new();
        checklist.toggle(SymptomId::Pain);
        assert!(checklist.is_checked(SymptomId::Pain));
        checklist.toggle(SymptomId::Pain);
        assert!(!checklist.is_checked(SymptomId::Pain));
    }

    #[test]
    fn result_needs_a_selection() {
        let mut checklist = Checklist::new();
        assert!(!checklist.reveal_result());

        checklist.toggle(SymptomId::Hpv);
        assert!(checklist.reveal_result());

        checklist.toggle(SymptomId::Bowel);
        assert!(checklist.result_visible());

        checklist.toggle(SymptomId::Hpv);
        checklist.toggle(SymptomId::Bowel);
        assert!(!checklist.result_visible());
    }

    #[test]
    fn template_script_follows_the_selection() {
        let mut checklist = Checklist::new();
        assert_eq!(checklist.template_script(), crate::script::PROACTIVE_SCRIPT);

        checklist.toggle(SymptomId::Hpv);
        let script = checklist.template_script();
        assert!(script.starts_with("I have been diagnosed with HPV"));
        assert_eq!(script, compose_script_for(&[SymptomId::Hpv]));
    }
}
