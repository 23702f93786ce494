//! Legal application state — the court bundle and the filing step
//! tracker, both seeded per legal pathway.

use super::triage::LegalPath;

/// Lifecycle of one court document inside the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourtDocStatus {
    Drafting,
    Ready,
    Downloaded,
}

/// One pre-filled court document.
#[derive(Debug, Clone)]
pub struct CourtDocument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: CourtDocStatus,
}

fn court_doc(id: &str, name: &str, description: &str) -> CourtDocument {
    CourtDocument {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        status: CourtDocStatus::Drafting,
    }
}

/// The application bundle for the chosen pathway. Compilation marks every
/// document ready; downloading marks them downloaded.
#[derive(Debug, Clone)]
pub struct CourtBundle {
    pub documents: Vec<CourtDocument>,
    pub ready: bool,
}

impl CourtBundle {
    /// Probate sessions get the probate bundle; every other pathway uses
    /// the administrator (LOA) bundle, matching the product's two
    /// generator variants.
    pub fn for_path(path: Option<LegalPath>) -> Self {
        let documents = if path == Some(LegalPath::Probate) {
            vec![
                court_doc(
                    "probate-app",
                    "Probate Application Form",
                    "Main application for Grant of Probate",
                ),
                court_doc("will-copy", "Certified Will Copy", "Verified copy of the original Will"),
                court_doc(
                    "schedule-assets",
                    "Schedule of Assets",
                    "Complete list of estate assets and values",
                ),
                court_doc("death-cert", "Death Certificate", "Official death certificate copy"),
            ]
        } else {
            vec![
                court_doc(
                    "orig-summons",
                    "Originating Summons",
                    "Application to be appointed Administrator",
                ),
                court_doc(
                    "renunciation",
                    "Renunciation Forms",
                    "Consent from other eligible family members",
                ),
                court_doc(
                    "schedule-assets",
                    "Schedule of Assets",
                    "Complete list of estate assets and values",
                ),
                court_doc("affidavit", "Supporting Affidavit", "Sworn statement of facts"),
            ]
        };
        Self { documents, ready: false }
    }

    pub fn mark_ready(&mut self) {
        for doc in &mut self.documents {
            doc.status = CourtDocStatus::Ready;
        }
        self.ready = true;
    }

    pub fn mark_downloaded(&mut self) {
        for doc in &mut self.documents {
            doc.status = CourtDocStatus::Downloaded;
        }
    }
}

/// One step on the road to a grant.
#[derive(Debug, Clone)]
pub struct CourtStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub download_label: Option<String>,
}

fn step(id: &str, title: &str, description: &str, download_label: Option<&str>) -> CourtStep {
    CourtStep {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        completed: false,
        download_label: download_label.map(Into::into),
    }
}

/// Filing checklist for the chosen pathway.
#[derive(Debug, Clone)]
pub struct CourtSteps {
    pub steps: Vec<CourtStep>,
}

impl CourtSteps {
    pub fn for_path(path: Option<LegalPath>) -> Self {
        let steps = if path == Some(LegalPath::Probate) {
            vec![
                step(
                    "1",
                    "Verify Will Authenticity",
                    "Ensure the Will is valid and properly witnessed",
                    None,
                ),
                step(
                    "2",
                    "File Probate Application",
                    "Submit the application with the original Will to the Court",
                    Some("Download Application Form"),
                ),
                step(
                    "3",
                    "Publish Citation",
                    "Advertise the application as required by law",
                    None,
                ),
                step(
                    "4",
                    "Attend Court Hearing",
                    "Attend the scheduled hearing date (if required)",
                    None,
                ),
                step(
                    "5",
                    "Receive Grant of Probate",
                    "Obtain the Grant of Probate from the Court",
                    None,
                ),
            ]
        } else {
            vec![
                step(
                    "1",
                    "Get Consent from Family Members",
                    "All eligible family members must consent to your appointment as Administrator",
                    Some("Download Consent Form"),
                ),
                step(
                    "2",
                    "File Originating Summons",
                    "Submit the application to the Family Justice Courts",
                    Some("Download OS Template"),
                ),
                step(
                    "3",
                    "File Schedule of Assets",
                    "List all known assets and their estimated values",
                    Some("Download Asset Schedule"),
                ),
                step(
                    "4",
                    "Attend Court Hearing",
                    "Attend the scheduled hearing date (if required)",
                    None,
                ),
                step(
                    "5",
                    "Receive Grant",
                    "Obtain the Letters of Administration from the Court",
                    None,
                ),
            ]
        };
        Self { steps }
    }

    pub fn toggle(&mut self, step_id: &str) {
        if let Some(s) = self.steps.iter_mut().find(|s| s.id == step_id) {
            s.completed = !s.completed;
        }
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// First incomplete step, or the last step once everything is done.
    pub fn current_step(&self) -> &CourtStep {
        self.steps
            .iter()
            .find(|s| !s.completed)
            .unwrap_or_else(|| self.steps.last().expect("step catalog is never empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probate_bundle_contains_will_copy() {
        let bundle = CourtBundle::for_path(Some(LegalPath::Probate));
        assert!(bundle.documents.iter().any(|d| d.id == "will-copy"));
        assert!(bundle.documents.iter().all(|d| d.status == CourtDocStatus::Drafting));
    }

    #[test]
    fn loa_bundle_contains_summons() {
        for path in [Some(LegalPath::Loa), Some(LegalPath::PublicTrustee), None] {
            let bundle = CourtBundle::for_path(path);
            assert!(bundle.documents.iter().any(|d| d.id == "orig-summons"));
            assert!(!bundle.documents.iter().any(|d| d.id == "will-copy"));
        }
    }

    #[test]
    fn bundle_lifecycle() {
        let mut bundle = CourtBundle::for_path(Some(LegalPath::Loa));
        assert!(!bundle.ready);
        bundle.mark_ready();
        assert!(bundle.ready);
        assert!(bundle.documents.iter().all(|d| d.status == CourtDocStatus::Ready));
        bundle.mark_downloaded();
        assert!(bundle.documents.iter().all(|d| d.status == CourtDocStatus::Downloaded));
    }

    #[test]
    fn steps_differ_by_path() {
        let probate = CourtSteps::for_path(Some(LegalPath::Probate));
        let loa = CourtSteps::for_path(Some(LegalPath::Loa));
        assert_eq!(probate.steps.len(), 5);
        assert_eq!(loa.steps.len(), 5);
        assert_eq!(probate.steps[0].title, "Verify Will Authenticity");
        assert_eq!(loa.steps[0].title, "Get Consent from Family Members");
    }

    #[test]
    fn current_step_advances_and_saturates() {
        let mut steps = CourtSteps::for_path(Some(LegalPath::Loa));
        assert_eq!(steps.current_step().id, "1");
        steps.toggle("1");
        assert_eq!(steps.current_step().id, "2");
        for id in ["2", "3", "4", "5"] {
            steps.toggle(id);
        }
        // everything complete — cursor stays on the last step
        assert_eq!(steps.current_step().id, "5");
        assert_eq!(steps.completed_count(), 5);
    }

    #[test]
    fn toggle_unknown_step_is_noop() {
        let mut steps = CourtSteps::for_path(Some(LegalPath::Loa));
        steps.toggle("99");
        assert_eq!(steps.completed_count(), 0);
    }
}
