//! Triage questionnaire — answers, classification, and the resulting
//! legal pathway.
//!
//! The classifier is a pure function over the submitted answers. Rules are
//! checked in priority order, first match wins:
//!
//! 1. deceased was Muslim            → Syariah Court process
//! 2. a valid Will exists            → Grant of Probate
//! 3. estate below S$50,000          → Public Trustee route
//! 4. otherwise                      → Letters of Administration
//!
//! Missing answers fall through to Letters of Administration. The wizard
//! UI disables submission until every question is answered, so validation
//! stays at that boundary and the classifier stays total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The four jurisdiction-specific procedures a triage can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalPath {
    Probate,
    Loa,
    PublicTrustee,
    Syariah,
}

impl LegalPath {
    /// Human-readable pathway title, as shown on the roadmap card.
    pub fn title(&self) -> &'static str {
        match self {
            LegalPath::Probate => "Grant of Probate",
            LegalPath::Loa => "Letters of Administration",
            LegalPath::PublicTrustee => "Public Trustee Route",
            LegalPath::Syariah => "Syariah Court Process",
        }
    }
}

/// Applicant's relationship to the deceased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Spouse,
    Child,
    Parent,
    Sibling,
    Other,
}

/// Estate value band from the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstateValueBand {
    #[serde(rename = "below50k")]
    Below50k,
    #[serde(rename = "above50k")]
    Above50k,
}

/// Question id → chosen option id. Immutable once submitted in a session.
#[derive(Debug, Clone, Default)]
pub struct TriageAnswers(BTreeMap<String, String>);

impl TriageAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&mut self, question_id: &str, option_id: &str) {
        self.0.insert(question_id.to_string(), option_id.to_string());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    fn is(&self, question_id: &str, option_id: &str) -> bool {
        self.get(question_id) == Some(option_id)
    }
}

/// Outcome of the triage wizard. Derived once from [`TriageAnswers`];
/// drives module descriptions and conditional document visibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriageResult {
    pub is_muslim: Option<bool>,
    pub has_will: Option<bool>,
    pub estate_value: Option<EstateValueBand>,
    pub relationship: Option<Relationship>,
    pub legal_path: Option<LegalPath>,
}

impl TriageResult {
    /// Build the full result from submitted answers, including the
    /// classified pathway.
    pub fn from_answers(answers: &TriageAnswers) -> Self {
        Self {
            is_muslim: answers.get("religion").map(|a| a == "yes"),
            has_will: answers.get("will").map(|a| a == "yes"),
            estate_value: match answers.get("value") {
                Some("below50k") => Some(EstateValueBand::Below50k),
                Some("above50k") => Some(EstateValueBand::Above50k),
                _ => None,
            },
            relationship: match answers.get("relationship") {
                Some("spouse") => Some(Relationship::Spouse),
                Some("child") => Some(Relationship::Child),
                Some("parent") => Some(Relationship::Parent),
                Some("sibling") => Some(Relationship::Sibling),
                Some("other") => Some(Relationship::Other),
                _ => None,
            },
            legal_path: Some(classify(answers)),
        }
    }
}

/// Map questionnaire answers to a legal pathway. First match wins.
pub fn classify(answers: &TriageAnswers) -> LegalPath {
    if answers.is("religion", "yes") {
        return LegalPath::Syariah;
    }
    if answers.is("will", "yes") {
        return LegalPath::Probate;
    }
    if answers.is("value", "below50k") {
        return LegalPath::PublicTrustee;
    }
    LegalPath::Loa
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> TriageAnswers {
        let mut a = TriageAnswers::new();
        for (q, o) in pairs {
            a.answer(q, o);
        }
        a
    }

    #[test]
    fn muslim_always_syariah() {
        // Religion dominates every other answer combination.
        for will in ["yes", "no", "unsure"] {
            for value in ["below50k", "above50k", "unsure"] {
                let a = answers(&[("religion", "yes"), ("will", will), ("value", value)]);
                assert_eq!(classify(&a), LegalPath::Syariah);
            }
        }
    }

    #[test]
    fn will_without_muslim_is_probate() {
        for value in ["below50k", "above50k", "unsure"] {
            let a = answers(&[("religion", "no"), ("will", "yes"), ("value", value)]);
            assert_eq!(classify(&a), LegalPath::Probate);
        }
    }

    #[test]
    fn small_estate_no_will_is_public_trustee() {
        for will in ["no", "unsure"] {
            let a = answers(&[("religion", "no"), ("will", will), ("value", "below50k")]);
            assert_eq!(classify(&a), LegalPath::PublicTrustee);
        }
    }

    #[test]
    fn everything_else_is_loa() {
        let a = answers(&[("religion", "no"), ("will", "no"), ("value", "above50k")]);
        assert_eq!(classify(&a), LegalPath::Loa);

        let a = answers(&[("religion", "no"), ("will", "unsure"), ("value", "unsure")]);
        assert_eq!(classify(&a), LegalPath::Loa);
    }

    #[test]
    fn empty_answers_fall_through_to_loa() {
        assert_eq!(classify(&TriageAnswers::new()), LegalPath::Loa);
    }

    #[test]
    fn result_captures_fields_and_path() {
        let a = answers(&[
            ("religion", "no"),
            ("will", "yes"),
            ("value", "above50k"),
            ("relationship", "spouse"),
        ]);
        let r = TriageResult::from_answers(&a);
        assert_eq!(r.is_muslim, Some(false));
        assert_eq!(r.has_will, Some(true));
        assert_eq!(r.estate_value, Some(EstateValueBand::Above50k));
        assert_eq!(r.relationship, Some(Relationship::Spouse));
        assert_eq!(r.legal_path, Some(LegalPath::Probate));
    }

    #[test]
    fn incomplete_result_has_none_fields() {
        let r = TriageResult::from_answers(&TriageAnswers::new());
        assert_eq!(r.is_muslim, None);
        assert_eq!(r.has_will, None);
        assert_eq!(r.legal_path, Some(LegalPath::Loa));
    }
}
