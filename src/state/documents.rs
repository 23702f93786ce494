//! Core-document upload ledger types and the fixed document catalog.
//!
//! Visibility of a conditional document is a predicate over the current
//! triage result, evaluated at read time — never stored as a flag.

use super::triage::TriageResult;

/// Predicate attached to a document's static definition. A document with
/// a condition counts toward module totals only while the condition
/// matches the current triage result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCondition {
    /// Matches when the deceased's will status equals the given value.
    HasWill(bool),
    /// Matches when the deceased's religion answer equals the given value.
    IsMuslim(bool),
}

impl DocumentCondition {
    pub fn matches(&self, triage: &TriageResult) -> bool {
        match self {
            DocumentCondition::HasWill(v) => triage.has_will == Some(*v),
            DocumentCondition::IsMuslim(v) => triage.is_muslim == Some(*v),
        }
    }
}

/// One required document in the core-documents module.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub description: String,
    pub required: bool,
    pub uploaded: bool,
    pub conditional: Option<DocumentCondition>,
}

impl Document {
    pub fn visible(&self, triage: &TriageResult) -> bool {
        match &self.conditional {
            None => true,
            Some(cond) => cond.matches(triage),
        }
    }
}

/// The fixed document catalog. The certified will copy appears only for
/// sessions where triage confirmed a valid will.
pub fn seed_documents() -> Vec<Document> {
    vec![
        Document {
            id: "death-cert".into(),
            name: "Digital Death Certificate".into(),
            description: "Obtain from MyLegacy portal or Registry of Births and Deaths".into(),
            required: true,
            uploaded: false,
            conditional: None,
        },
        Document {
            id: "deceased-nric".into(),
            name: "Deceased NRIC".into(),
            description: "Front and back copy of the deceased's identity card".into(),
            required: true,
            uploaded: false,
            conditional: None,
        },
        Document {
            id: "will-copy".into(),
            name: "Certified Will Copy".into(),
            description: "Verified copy of the original Will".into(),
            required: true,
            uploaded: false,
            conditional: Some(DocumentCondition::HasWill(true)),
        },
    ]
}
