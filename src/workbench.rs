//! The workbench — async shell around [`EstateState`].
//!
//! Owns the shared state plus the clients and latencies the simulated
//! operations need. Everything here is cooperative and sequential: one
//! user action maps to one awaited operation, and state mutation happens
//! only through the state's own update methods. The only in-flight
//! bookkeeping is the per-bank scan marker.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::outreach::{BlastDelivery, EnquiryBlast, WebhookClient};
use crate::state::EstateState;
use crate::state::banks::{OutreachStatus, reply_value};

/// Outcome of a letter blast.
#[derive(Debug, Clone)]
pub struct LetterBlast {
    pub institutions: usize,
    pub delivery: BlastDelivery,
}

/// Outcome of a simulated bank-reply scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub bank_id: String,
    pub bank_name: String,
    pub value: u64,
}

pub struct Workbench {
    state: Arc<Mutex<EstateState>>,
    /// Bank ids with a scan currently in flight.
    scanning: Mutex<HashSet<String>>,
    webhook: WebhookClient,
    scan_latency: Duration,
    compile_latency: Duration,
}

impl Workbench {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            state: Arc::new(Mutex::new(EstateState::new())),
            scanning: Mutex::new(HashSet::new()),
            webhook: WebhookClient::new(config)?,
            scan_latency: Duration::from_millis(config.outreach.scan_latency_ms),
            compile_latency: Duration::from_millis(config.legal.compile_latency_ms),
        })
    }

    /// Shared handle to the session state. Reads and synchronous updates
    /// go straight through this.
    pub fn state(&self) -> Arc<Mutex<EstateState>> {
        self.state.clone()
    }

    /// Blast enquiry letters to every selected institution.
    ///
    /// Returns `None` (and does nothing) when no institution is selected.
    /// The webhook POST is best-effort; either way each selected bank
    /// still waiting advances to `letter-generated`.
    pub async fn generate_letters(&self) -> Option<LetterBlast> {
        let selected: Vec<(String, String)> = {
            let state = self.state.lock().await;
            state
                .banks
                .iter()
                .filter(|b| b.selected)
                .map(|b| (b.id.clone(), b.name.clone()))
                .collect()
        };

        if selected.is_empty() {
            warn!("letter blast requested with no institutions selected");
            return None;
        }

        let blast = EnquiryBlast::new(selected.iter().map(|(_, name)| name.clone()).collect());
        let delivery = self.webhook.post_blast(&blast).await;

        {
            let mut state = self.state.lock().await;
            for (id, _) in &selected {
                // forward-only: banks already past not-started are untouched
                state.update_bank_status(id, OutreachStatus::LetterGenerated);
            }
        }

        Some(LetterBlast { institutions: selected.len(), delivery })
    }

    /// Scan an uploaded bank reply: suspend for the configured latency,
    /// then resolve the disclosed balance from the static table, mark the
    /// bank replied, and record the asset.
    ///
    /// Returns `None` for an unknown bank or when a scan for the same
    /// bank is already in flight. Scans for different banks do not block
    /// each other.
    pub async fn scan_bank_reply(&self, bank_id: &str) -> Option<ScanReport> {
        let bank_name = {
            let state = self.state.lock().await;
            match state.banks.iter().find(|b| b.id == bank_id) {
                Some(b) => b.name.clone(),
                None => {
                    warn!(bank_id, "scan requested for unknown bank");
                    return None;
                }
            }
        };

        {
            let mut scanning = self.scanning.lock().await;
            if !scanning.insert(bank_id.to_string()) {
                warn!(bank_id, "scan already in flight");
                return None;
            }
        }

        sleep(self.scan_latency).await;

        let value = reply_value(bank_id);
        {
            let mut state = self.state.lock().await;
            state.update_bank_status(bank_id, OutreachStatus::ReplyFound);
            state.record_bank_asset(bank_id, &bank_name, value);
        }

        self.scanning.lock().await.remove(bank_id);
        info!(bank_id, value, "bank reply scanned");

        Some(ScanReport { bank_id: bank_id.to_string(), bank_name, value })
    }

    /// Compile the court bundle: suspend for the configured latency, then
    /// mark every document ready and advance module 3. A no-op returning
    /// `false` while asset discovery is still open.
    pub async fn compile_court_bundle(&self) -> bool {
        {
            let state = self.state.lock().await;
            if !state.bundle_compilable() {
                warn!("bundle compilation requested before asset discovery completed");
                return false;
            }
        }

        sleep(self.compile_latency).await;

        let ready = self.state.lock().await.mark_bundle_ready();
        if ready {
            info!("court bundle compiled");
        }
        ready
    }

    /// Mark the compiled bundle downloaded and complete module 3.
    /// Returns `false` before compilation.
    pub async fn download_court_bundle(&self) -> bool {
        let downloaded = self.state.lock().await.mark_bundle_downloaded();
        if downloaded {
            info!("court bundle downloaded");
        }
        downloaded
    }
}
