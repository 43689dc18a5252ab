//! English clause for the critical symptoms of a selection.

use crate::catalog::SymptomId;

/// Body phrase for a label in the recommendation sentence. Labels without a
/// dedicated phrase are used verbatim.
pub fn critical_phrase_for_label(label: &str) -> &str {
    SymptomId::from_label(label)
        .and_then(SymptomId::critical_phrase)
        .unwrap_or(label)
}

/// Join items with English list grammar, using the Oxford comma from three
/// items on.
pub fn join_english_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Clause naming the critical symptoms of `selection`, in selection order.
pub fn compose_critical_clause(selection: &[SymptomId]) -> String {
    let phrases: Vec<&str> = selection
        .iter()
        .filter(|id| id.is_critical())
        .map(|id| id.critical_phrase().unwrap_or_else(|| id.label()))
        .collect();
    join_english_list(&phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_grammar() {
        assert_eq!(join_english_list::<&str>(&[]), "");
        assert_eq!(join_english_list(&["A"]), "A");
        assert_eq!(join_english_list(&["A", "B"]), "A and B");
        assert_eq!(join_english_list(&["A", "B", "C"]), "A, B, and C");
        assert_eq!(join_english_list(&["A", "B", "C", "D"]), "A, B, C, and D");
    }

    #[test]
    fn minor_symptoms_are_ignored() {
        assert_eq!(
            compose_critical_clause(&[SymptomId::Itching, SymptomId::Hpv]),
            ""
        );
    }

    #[test]
    fn all_critical_symptoms_in_catalog_order() {
        let clause = compose_critical_clause(&[
            SymptomId::Bleeding,
            SymptomId::Mucus,
            SymptomId::Pain,
            SymptomId::Lumps,
        ]);
        assert_eq!(
            clause,
            "bleeding around your rectum, unexplained discharge around your rectum, \
             Feeling of fullness or pain in your rectum, and lumps or bumps around your rectum"
        );
    }

    #[test]
    fn unknown_label_falls_back_to_itself() {
        assert_eq!(critical_phrase_for_label("Night sweats"), "Night sweats");
        assert_eq!(
            critical_phrase_for_label("Unexplained discharge or mucus"),
            "unexplained discharge around your rectum"
        );
    }
}
