//! Sheet Submission Client
//!
//! Outbound channel to the spreadsheet's write endpoint. Submissions are
//! best effort: the endpoint answers opaquely, so delivery can never be
//! confirmed and failures are only logged.

use async_trait::async_trait;
use chrono::Local;
use log::error;
use serde::Serialize;

/// One submitted row, in the sheet's wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub item: String,
    pub quantidade: f64,
    pub valor: f64,
    pub total: f64,
    /// Month/year label, e.g. "janeiro de 2026".
    pub mes: String,
}

/// Outbound client for row submissions.
#[async_trait]
pub trait SheetClient: Send + Sync {
    /// Best effort: errors are the implementation's to log, never the
    /// caller's to handle.
    async fn submit(&self, submission: Submission);
}

/// POSTs submissions as JSON to the Apps Script `doPost` endpoint.
pub struct HttpSheetClient {
    url: String,
    client: reqwest::Client,
}

impl HttpSheetClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SheetClient for HttpSheetClient {
    async fn submit(&self, submission: Submission) {
        // Response body deliberately not read; the endpoint is opaque.
        if let Err(e) = self.client.post(&self.url).json(&submission).send().await {
            error!("sheet submission for '{}' failed: {}", submission.item, e);
        }
    }
}

/// Current month/year label in pt-BR long form.
pub fn current_period() -> String {
    Local::now()
        .format_localized("%B de %Y", chrono::Locale::pt_BR)
        .to_string()
}
