//! The estate workbench state — one mutable state object and the update
//! functions everything else goes through.
//!
//! All cross-module derivation lives here: document uploads advance the
//! core-documents module and unlock asset discovery; recorded assets
//! advance asset discovery and unlock the legal application; closing
//! items advance the closing module. Fields are readable directly, but
//! every mutation must go through the methods below so the unlock rules
//! and derived rows stay consistent.

pub mod assets;
pub mod banks;
pub mod closing;
pub mod documents;
pub mod legal;
pub mod modules;
pub mod triage;

use std::collections::BTreeMap;

use tracing::debug;

use assets::{AssetDocument, DiscoveredAsset, account_type_label, institution_label, seed_asset_documents};
use banks::{BankStatus, OutreachStatus, seed_banks};
use closing::{ClosingCategory, seed_closing};
use documents::{Document, seed_documents};
use legal::{CourtBundle, CourtSteps};
use modules::{
    MODULE_ASSETS, MODULE_CLOSING, MODULE_DOCUMENTS, MODULE_LEGAL, Module, ModuleStatus,
    seed_modules,
};
use triage::TriageResult;

/// The single application state object. Lives for one session; resetting
/// returns everything to the seeded catalogs.
#[derive(Debug)]
pub struct EstateState {
    pub triage_complete: bool,
    pub triage: TriageResult,
    pub modules: Vec<Module>,
    pub banks: Vec<BankStatus>,
    pub documents: Vec<Document>,
    pub asset_documents: Vec<AssetDocument>,
    /// bank id → recorded balance. Insertion-ordered lookups are not
    /// needed; a sorted map keeps iteration deterministic for display.
    pub bank_assets: BTreeMap<String, u64>,
    pub discovered_assets: Vec<DiscoveredAsset>,
    pub closing: Vec<ClosingCategory>,
    /// Seeded when triage completes; `None` before that.
    pub court_bundle: Option<CourtBundle>,
    pub court_steps: Option<CourtSteps>,
}

impl Default for EstateState {
    fn default() -> Self {
        Self::new()
    }
}

impl EstateState {
    pub fn new() -> Self {
        let triage = TriageResult::default();
        let documents = seed_documents();
        let visible = documents.iter().filter(|d| d.visible(&triage)).count() as u32;
        Self {
            triage_complete: false,
            modules: seed_modules(&triage, visible),
            triage,
            banks: seed_banks(),
            documents,
            asset_documents: seed_asset_documents(),
            bank_assets: BTreeMap::new(),
            discovered_assets: Vec::new(),
            closing: seed_closing(),
            court_bundle: None,
            court_steps: None,
        }
    }

    /// Discard the session and return to the seeded catalogs.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn module(&self, id: u8) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    fn module_mut(&mut self, id: u8) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.id == id)
    }

    /// Documents visible under the current triage result. Conditional
    /// documents drop in and out of this view as triage answers change;
    /// nothing about visibility is stored.
    pub fn visible_documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|d| d.visible(&self.triage))
    }

    // ── triage ────────────────────────────────────────────────────────────────

    /// Accept a triage result: reseed the module catalog with
    /// pathway-specific wording and seed the legal application state.
    pub fn set_triage_result(&mut self, result: TriageResult) {
        self.triage = result;
        self.triage_complete = true;
        let visible = self.visible_documents().count() as u32;
        self.modules = seed_modules(&self.triage, visible);
        self.court_bundle = Some(CourtBundle::for_path(self.triage.legal_path));
        self.court_steps = Some(CourtSteps::for_path(self.triage.legal_path));
    }

    // ── module ledger ─────────────────────────────────────────────────────────

    /// Overwrite a single module's status and, when given, its progress.
    /// No internal validation — callers are responsible for keeping
    /// `progress <= total`.
    pub fn update_module_status(&mut self, id: u8, status: ModuleStatus, progress: Option<u32>) {
        if let Some(m) = self.module_mut(id) {
            m.status = status;
            if let Some(p) = progress {
                m.progress = p;
            }
        }
    }

    // ── document ledger ───────────────────────────────────────────────────────

    /// Toggle a core document's upload flag and recompute module 1.
    /// Uploading every visible document unlocks asset discovery.
    /// Idempotent: repeating the same toggle changes nothing.
    pub fn set_document_uploaded(&mut self, doc_id: &str, uploaded: bool) {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == doc_id) else {
            debug!(doc_id, "ignoring upload for unknown document");
            return;
        };
        doc.uploaded = uploaded;
        self.recompute_documents_module();
    }

    fn recompute_documents_module(&mut self) {
        let visible_total = self.visible_documents().count() as u32;
        let uploaded = self.visible_documents().filter(|d| d.uploaded).count() as u32;

        if let Some(m) = self.module_mut(MODULE_DOCUMENTS) {
            m.progress = uploaded.min(m.total);
            m.status = if uploaded == m.total {
                ModuleStatus::Completed
            } else {
                ModuleStatus::InProgress
            };
        }

        // All visible documents gathered: unlock asset discovery. Only a
        // locked module moves; a module already past pending keeps its state.
        if uploaded == visible_total
            && let Some(m) = self.module_mut(MODULE_ASSETS)
            && m.status == ModuleStatus::Locked
        {
            m.status = ModuleStatus::Pending;
        }
    }

    // ── bank outreach ─────────────────────────────────────────────────────────

    /// Flip an institution's selection. Independent of outreach status.
    pub fn toggle_bank_selection(&mut self, bank_id: &str) {
        if let Some(b) = self.banks.iter_mut().find(|b| b.id == bank_id) {
            b.selected = !b.selected;
        }
    }

    /// Advance an institution's outreach status. Status only moves
    /// forward along the pipeline; backward or sideways writes are
    /// ignored, which keeps transitions monotonic by construction.
    pub fn update_bank_status(&mut self, bank_id: &str, status: OutreachStatus) {
        let Some(b) = self.banks.iter_mut().find(|b| b.id == bank_id) else {
            debug!(bank_id, "ignoring status update for unknown bank");
            return;
        };
        if status.rank() > b.status.rank() {
            b.status = status;
        } else {
            debug!(bank_id, from = ?b.status, to = ?status, "ignoring non-forward outreach transition");
        }
    }

    // ── asset aggregation ─────────────────────────────────────────────────────

    /// Toggle an asset document's upload flag, maintain its derived
    /// discovered-asset row, and recompute module 2.
    pub fn set_asset_document_uploaded(&mut self, doc_id: &str, uploaded: bool) {
        let Some(doc) = self.asset_documents.iter_mut().find(|d| d.id == doc_id) else {
            debug!(doc_id, "ignoring upload for unknown asset document");
            return;
        };
        doc.uploaded = uploaded;
        let (name, value) = (doc.name.clone(), doc.value);

        if uploaded {
            if !self.discovered_assets.iter().any(|a| a.id == doc_id) {
                self.discovered_assets.push(DiscoveredAsset {
                    id: doc_id.to_string(),
                    institution: institution_label(doc_id).map(Into::into).unwrap_or_else(|| name.clone()),
                    account_type: account_type_label(doc_id).map(Into::into).unwrap_or(name),
                    value,
                });
            }
        } else {
            self.discovered_assets.retain(|a| a.id != doc_id);
        }

        self.recompute_assets_module();
    }

    /// Record (or re-record) the balance a bank reply disclosed. Upserts
    /// the bank's discovered-asset row — one row per bank, latest value
    /// wins — and recomputes module 2.
    pub fn record_bank_asset(&mut self, bank_id: &str, bank_name: &str, value: u64) {
        self.bank_assets.insert(bank_id.to_string(), value);

        let row_id = format!("bank-{bank_id}");
        self.discovered_assets.retain(|a| a.id != row_id);
        self.discovered_assets.push(DiscoveredAsset {
            id: row_id,
            institution: bank_name.to_string(),
            account_type: "Bank Account".to_string(),
            value,
        });

        self.recompute_assets_module();
    }

    fn recompute_assets_module(&mut self) {
        let uploaded = self.asset_documents.iter().filter(|d| d.uploaded).count() as u32;
        let recorded = self.bank_assets.len() as u32;
        let has_assets = uploaded + recorded > 0;

        if let Some(m) = self.module_mut(MODULE_ASSETS) {
            m.progress = (uploaded + recorded).min(m.total);
            m.status = if has_assets {
                ModuleStatus::Completed
            } else {
                ModuleStatus::InProgress
            };
        }

        // Any discovered asset unlocks the legal application.
        if has_assets
            && let Some(m) = self.module_mut(MODULE_LEGAL)
            && m.status == ModuleStatus::Locked
        {
            m.status = ModuleStatus::Pending;
        }
    }

    /// Sum of uploaded asset-document values plus all recorded bank
    /// balances. Recomputed on demand; the catalogs are small.
    pub fn total_estate_value(&self) -> u64 {
        let doc_value: u64 = self
            .asset_documents
            .iter()
            .filter(|d| d.uploaded)
            .map(|d| d.value)
            .sum();
        let bank_value: u64 = self.bank_assets.values().sum();
        doc_value + bank_value
    }

    // ── legal application ─────────────────────────────────────────────────────

    /// Whether the court bundle can be compiled: triage done and asset
    /// discovery completed (the schedule of assets is populated from it).
    pub fn bundle_compilable(&self) -> bool {
        self.court_bundle.is_some()
            && self.module(MODULE_ASSETS).is_some_and(|m| m.status == ModuleStatus::Completed)
    }

    /// Mark every bundle document ready and move module 3 to
    /// in-progress. Returns `false` (and changes nothing) while asset
    /// discovery is still open.
    pub fn mark_bundle_ready(&mut self) -> bool {
        if !self.bundle_compilable() {
            return false;
        }
        if let Some(bundle) = &mut self.court_bundle {
            bundle.mark_ready();
        }
        self.update_module_status(MODULE_LEGAL, ModuleStatus::InProgress, Some(2));
        true
    }

    /// Mark the compiled bundle downloaded and complete module 3.
    /// Returns `false` before compilation.
    pub fn mark_bundle_downloaded(&mut self) -> bool {
        match &mut self.court_bundle {
            Some(bundle) if bundle.ready => {
                bundle.mark_downloaded();
                self.update_module_status(MODULE_LEGAL, ModuleStatus::Completed, Some(3));
                true
            }
            _ => false,
        }
    }

    /// Flip one filing step on the court tracker. Checklist state only —
    /// module 3 is driven by the bundle, not the tracker.
    pub fn toggle_court_step(&mut self, step_id: &str) {
        if let Some(steps) = &mut self.court_steps {
            steps.toggle(step_id);
        }
    }

    // ── closing matters ───────────────────────────────────────────────────────

    /// Flip one closing item and recompute module 4.
    pub fn toggle_closing_item(&mut self, item_id: &str) {
        let mut found = false;
        for category in &mut self.closing {
            if let Some(item) = category.items.iter_mut().find(|i| i.id == item_id) {
                item.completed = !item.completed;
                found = true;
                break;
            }
        }
        if !found {
            debug!(item_id, "ignoring toggle for unknown closing item");
            return;
        }

        let completed: u32 = self.closing.iter().map(|c| c.completed_count() as u32).sum();
        if let Some(m) = self.module_mut(MODULE_CLOSING) {
            m.progress = completed.min(m.total);
            m.status = if completed == m.total {
                ModuleStatus::Completed
            } else if completed > 0 {
                ModuleStatus::InProgress
            } else {
                ModuleStatus::Pending
            };
        }
    }
}
