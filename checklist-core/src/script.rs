//! Template path of the doctor-conversation script.

use crate::catalog::SymptomId;

/// Script used when nothing is selected.
pub const PROACTIVE_SCRIPT: &str = "I don't have specific urgent symptoms right now, but I am aware of the link between HPV and anal cancer. I would like to discuss scheduling an Anal Pap to be proactive about my health.";

/// Script used when none of the given labels has a template.
pub const GENERIC_FALLBACK_SCRIPT: &str =
    "I have some concerns about my pelvic health and would like to discuss scheduling an Anal Pap.";

pub const CALL_TO_ACTION: &str = "I would like to discuss scheduling an Anal Pap.";

/// Template sentence for a display label, if the label is in the catalog.
pub fn script_sentence_for_label(label: &str) -> Option<&'static str> {
    SymptomId::from_label(label).map(SymptomId::script_sentence)
}

/// Compose a script from display labels. Labels without a template are
/// dropped; the function never fails.
pub fn compose_script<S: AsRef<str>>(labels: &[S]) -> String {
    if labels.is_empty() {
        return PROACTIVE_SCRIPT.to_string();
    }

    let findings: Vec<&str> = labels
        .iter()
        .filter_map(|label| script_sentence_for_label(label.as_ref()))
        .collect();

    join_findings(&findings)
}

/// Compose a script from catalog identifiers.
pub fn compose_script_for(selection: &[SymptomId]) -> String {
    if selection.is_empty() {
        return PROACTIVE_SCRIPT.to_string();
    }

    let findings: Vec<&str> = selection.iter().map(|id| id.script_sentence()).collect();
    join_findings(&findings)
}

fn join_findings(findings: &[&str]) -> String {
    if findings.is_empty() {
        return GENERIC_FALLBACK_SCRIPT.to_string();
    }
    format!("{}. {CALL_TO_ACTION}", findings.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_uses_proactive_script() {
        assert_eq!(compose_script::<&str>(&[]), PROACTIVE_SCRIPT);
        assert_eq!(compose_script_for(&[]), PROACTIVE_SCRIPT);
    }

    #[test]
    fn single_label() {
        assert_eq!(
            compose_script(&["Persistent Itching"]),
            "I’ve been experiencing a persistent itching feeling around my rectal area. \
             I would like to discuss scheduling an Anal Pap."
        );
    }

    #[test]
    fn sentences_follow_input_order() {
        let script = compose_script(&["History of HPV", "Changes in Bowel Habits"]);
        assert_eq!(
            script,
            "I have been diagnosed with HPV and am aware of the link between HPV and Anal Cancer. \
             I’ve been experiencing changes in my bowel habits lately. \
             I would like to discuss scheduling an Anal Pap."
        );
    }

    #[test]
    fn unknown_labels_are_dropped() {
        assert_eq!(
            compose_script(&["Unknown Label Not In Table"]),
            GENERIC_FALLBACK_SCRIPT
        );
        assert_eq!(
            compose_script(&["Unknown", "History of HPV"]),
            compose_script(&["History of HPV"])
        );
    }

    #[test]
    fn id_and_label_paths_agree() {
        let ids = [SymptomId::Bleeding, SymptomId::Lumps];
        let labels: Vec<&str> = ids.iter().map(|id| id.label()).collect();
        assert_eq!(compose_script_for(&ids), compose_script(&labels));
    }
}
