//! Static symptom catalog.
//!
//! Every symptom carries its display label, category, script sentence and
//! (for critical symptoms) the phrase used in the recommendation card. The
//! data lives on [`SymptomId`] so that looking up an identifier can never
//! miss; only the label-keyed entry points have to deal with unknown text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChecklistError;

/// Severity bucket assigned to each symptom when the catalog is defined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Critical,
    Minor,
}

/// Stable identifier of a catalog entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SymptomId {
    Itching,
    Bowel,
    Bleeding,
    Hpv,
    Mucus,
    Pain,
    Lumps,
}

impl SymptomId {
    /// All identifiers in catalog order.
    pub const ALL: [SymptomId; 7] = [
        SymptomId::Itching,
        SymptomId::Bowel,
        SymptomId::Bleeding,
        SymptomId::Hpv,
        SymptomId::Mucus,
        SymptomId::Pain,
        SymptomId::Lumps,
    ];

    /// Full catalog record for this identifier.
    pub fn definition(self) -> &'static SymptomDefinition {
        &CATALOG[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.definition().key
    }

    pub fn label(self) -> &'static str {
        self.definition().label
    }

    pub fn category(self) -> Category {
        self.definition().category
    }

    pub fn is_critical(self) -> bool {
        self.category() == Category::Critical
    }

    /// Sentence spoken to the clinician for this symptom.
    pub fn script_sentence(self) -> &'static str {
        self.definition().script_sentence
    }

    /// Phrase used inside the "Because you noted ..." sentence.
    pub fn critical_phrase(self) -> Option<&'static str> {
        self.definition().critical_phrase
    }

    /// Resolve a display label back to its identifier (exact match).
    pub fn from_label(label: &str) -> Option<SymptomId> {
        CATALOG
            .iter()
            .find(|definition| definition.label == label)
            .map(|definition| definition.id)
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SymptomId {
    type Err = ChecklistError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        CATALOG
            .iter()
            .find(|definition| definition.key.eq_ignore_ascii_case(needle))
            .map(|definition| definition.id)
            .ok_or_else(|| ChecklistError::UnknownSymptom(value.to_string()))
    }
}

/// One immutable row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomDefinition {
    pub id: SymptomId,
    pub key: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub script_sentence: &'static str,
    pub critical_phrase: Option<&'static str>,
}

/// Catalog rows, indexed by `SymptomId as usize`.
pub static CATALOG: [SymptomDefinition; 7] = [
    SymptomDefinition {
        id: SymptomId::Itching,
        key: "itching",
        label: "Persistent Itching",
        category: Category::Minor,
        script_sentence: "I’ve been experiencing a persistent itching feeling around my rectal area",
        critical_phrase: None,
    },
    SymptomDefinition {
        id: SymptomId::Bowel,
        key: "bowel",
        label: "Changes in Bowel Habits",
        category: Category::Minor,
        script_sentence: "I’ve been experiencing changes in my bowel habits lately",
        critical_phrase: None,
    },
    SymptomDefinition {
        id: SymptomId::Bleeding,
        key: "bleeding",
        label: "Bleeding (Thought it was hemorrhoids?)",
        category: Category::Critical,
        script_sentence: "I’ve been experiencing persistent bleeding in my rectal area and have ruled out hemorrhoids",
        critical_phrase: Some("bleeding around your rectum"),
    },
    SymptomDefinition {
        id: SymptomId::Hpv,
        key: "hpv",
        label: "History of HPV",
        category: Category::Minor,
        script_sentence: "I have been diagnosed with HPV and am aware of the link between HPV and Anal Cancer",
        critical_phrase: None,
    },
    SymptomDefinition {
        id: SymptomId::Mucus,
        key: "mucus",
        label: "Unexplained discharge or mucus",
        category: Category::Critical,
        script_sentence: "I have been experiencing unexplained discharge and mucus around my rectal area",
        critical_phrase: Some("unexplained discharge around your rectum"),
    },
    SymptomDefinition {
        id: SymptomId::Pain,
        key: "pain",
        label: "Feeling of fullness or pain in the area",
        category: Category::Critical,
        script_sentence: "I have been experiencing a feeling of fullness and consistent pain around my rectal area",
        critical_phrase: Some("Feeling of fullness or pain in your rectum"),
    },
    SymptomDefinition {
        id: SymptomId::Lumps,
        key: "lumps",
        label: "Lumps or bumps (Not sure if it is a skin tag?)",
        category: Category::Critical,
        script_sentence: "I have noticed some lumps and bumps around my rectal area. I have ruled out skin tags and hemorrhoids",
        critical_phrase: Some("lumps or bumps around your rectum"),
    },
];

/// Catalog entry plus the user's checked flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Symptom {
    pub id: SymptomId,
    pub checked: bool,
}

impl Symptom {
    pub fn unchecked(id: SymptomId) -> Self {
        Self { id, checked: false }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn category(&self) -> Category {
        self.id.category()
    }
}

/// Serializable view of a symptom for JS callers and UI rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SymptomSummary {
    pub id: SymptomId,
    pub label: &'static str,
    pub category: Category,
    pub checked: bool,
}

impl From<&Symptom> for SymptomSummary {
    fn from(symptom: &Symptom) -> Self {
        Self {
            id: symptom.id,
            label: symptom.label(),
            category: symptom.category(),
            checked: symptom.checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_rows_are_indexed_by_id() {
        for id in SymptomId::ALL {
            assert_eq!(id.definition().id, id);
        }
    }

    #[test]
    fn only_critical_symptoms_have_phrases() {
        for id in SymptomId::ALL {
            assert_eq!(id.critical_phrase().is_some(), id.is_critical(), "{id}");
        }
    }

    #[test]
    fn labels_resolve_back_to_ids() {
        assert_eq!(
            SymptomId::from_label("Bleeding (Thought it was hemorrhoids?)"),
            Some(SymptomId::Bleeding)
        );
        assert_eq!(SymptomId::from_label("bleeding"), None);
    }

    #[test]
    fn keys_parse_case_insensitively() {
        assert_eq!("Lumps".parse::<SymptomId>().unwrap(), SymptomId::Lumps);
        assert_eq!(" hpv ".parse::<SymptomId>().unwrap(), SymptomId::Hpv);
        assert!("rash".parse::<SymptomId>().is_err());
    }
}
