//! Enquiry-letter blast — fixed payload construction and the best-effort
//! webhook delivery.
//!
//! The webhook is fire-and-forget: no response contract is consumed, and
//! a transport failure is logged and masked so the demo flow always
//! reports success to the user.

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;

/// Fixed applicant/deceased identifiers used for the showcase payload.
const APPLICANT_NAME: &str = "Tan Xiao Ming";
const DECEASED_NAME: &str = "Tan Ah Kow";
const DECEASED_NRIC: &str = "S1234567A";

/// Three fixed sample documents attached to every blast.
const DOCUMENT_URLS: [&str; 3] = [
    "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf",
    "https://pdfobject.com/pdf/sample.pdf",
    "https://unec.edu.az/application/uploads/2014/12/pdf-sample.pdf",
];
const DOCUMENT_NAMES: [&str; 3] = ["Death Certificate", "Birth Certificate", "NRIC"];

/// Wire payload for the automation endpoint.
#[derive(Debug, Serialize)]
pub struct EnquiryBlast {
    applicant_name: &'static str,
    deceased_name: &'static str,
    deceased_nric: &'static str,
    selected_banks: Vec<String>,
    document_urls: [&'static str; 3],
    document_names: [&'static str; 3],
}

impl EnquiryBlast {
    pub fn new(selected_banks: Vec<String>) -> Self {
        Self {
            applicant_name: APPLICANT_NAME,
            deceased_name: DECEASED_NAME,
            deceased_nric: DECEASED_NRIC,
            selected_banks,
            document_urls: DOCUMENT_URLS,
            document_names: DOCUMENT_NAMES,
        }
    }

    pub fn bank_count(&self) -> usize {
        self.selected_banks.len()
    }
}

/// How the blast went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlastDelivery {
    /// The webhook accepted the POST.
    Webhook,
    /// Transport failed; the failure was masked and the flow continued.
    DemoFallback,
}

#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("failed to build webhook client: {e}")))?;
        Ok(Self { http, url: config.outreach.webhook_url.clone() })
    }

    /// Single best-effort POST. Failures never propagate.
    pub async fn post_blast(&self, blast: &EnquiryBlast) -> BlastDelivery {
        match self.http.post(&self.url).json(blast).send().await {
            Ok(response) => {
                info!(status = %response.status(), banks = blast.bank_count(), "enquiry blast delivered");
                BlastDelivery::Webhook
            }
            Err(e) => {
                warn!("enquiry blast failed, continuing in demo mode: {e}");
                BlastDelivery::DemoFallback
            }
        }
    }
}
