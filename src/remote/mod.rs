//! Remote Layer
//!
//! Clients for the spreadsheet endpoint: the one-shot baseline fetch at
//! startup and the best-effort row submissions.

mod baseline;
mod sheet;

pub use baseline::{BaselineSource, JsonpBaselineLoader};
pub use sheet::{current_period, HttpSheetClient, SheetClient, Submission};
