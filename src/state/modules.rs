//! Module progress ledger types and the fixed module catalog.
//!
//! Four sequential modules make up the workflow. Each carries a lock
//! state and a progress counter; other ledgers advance them through
//! [`super::EstateState`]'s update methods.

use serde::{Deserialize, Serialize};

use super::triage::{LegalPath, TriageResult};

/// Lifecycle of a single module: `locked → pending → in-progress → completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    Locked,
    Pending,
    InProgress,
    Completed,
}

/// One sequential phase of the estate-administration workflow.
#[derive(Debug, Clone)]
pub struct Module {
    pub id: u8,
    pub title: String,
    pub description: String,
    pub status: ModuleStatus,
    pub progress: u32,
    pub total: u32,
    pub route: String,
}

pub const MODULE_DOCUMENTS: u8 = 1;
pub const MODULE_ASSETS: u8 = 2;
pub const MODULE_LEGAL: u8 = 3;
pub const MODULE_CLOSING: u8 = 4;

/// Seed the module catalog for a (possibly still unclassified) triage
/// result.
///
/// Module 3's description is pathway-specific; the Syariah pathway reuses
/// the probate wording used elsewhere in the product. Module 1's total is
/// the number of documents *visible* under the given triage result, so a
/// conditional document only counts once its clause matches.
pub fn seed_modules(triage: &TriageResult, visible_documents: u32) -> Vec<Module> {
    let legal_description = match triage.legal_path {
        Some(LegalPath::Probate) => "Grant of Probate",
        Some(LegalPath::PublicTrustee) => "Public Trustee Application",
        Some(LegalPath::Syariah) => "Syariah Court Application",
        Some(LegalPath::Loa) | None => "Letters of Administration",
    };

    vec![
        Module {
            id: MODULE_DOCUMENTS,
            title: "Core Documents".into(),
            description: "Gather essential legal documents".into(),
            status: ModuleStatus::Pending,
            progress: 0,
            total: visible_documents,
            route: "/documents".into(),
        },
        Module {
            id: MODULE_ASSETS,
            title: "Asset Discovery".into(),
            description: "Identify bank accounts and assets".into(),
            status: ModuleStatus::Locked,
            progress: 0,
            total: 5,
            route: "/assets".into(),
        },
        Module {
            id: MODULE_LEGAL,
            title: "Legal Application".into(),
            description: legal_description.into(),
            status: ModuleStatus::Locked,
            progress: 0,
            total: 3,
            route: "/legal".into(),
        },
        Module {
            id: MODULE_CLOSING,
            title: "Closing Matters".into(),
            description: "Cancel accounts and subscriptions".into(),
            status: ModuleStatus::Pending,
            progress: 0,
            total: 12,
            route: "/closing".into(),
        },
    ]
}
