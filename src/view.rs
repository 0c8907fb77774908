use crate::client::{ArticleRecord, ProcessResponse};
use crate::parser::{self, ReportItem};

pub const SEARCHING_STATUS: &str = "Searching, classifying, and summarizing articles...";
pub const DEFAULT_SUCCESS_STATUS: &str = "Report generated successfully.";
pub const UNKNOWN_ERROR_STATUS: &str = "An unknown error occurred.";
pub const REQUEST_FAILED_STATUS: &str = "An error occurred while contacting the backend.";
pub const EMPTY_SELECTION_STATUS: &str = "Please select at least one keyword to search.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Snapshot of everything the display needs. Updated only through the named
/// transitions below; each one consumes the current view and returns the
/// next, so there is no ambient mutable state to drift.
#[derive(Debug, Clone)]
pub struct ReportView {
    pub phase: Phase,
    pub status: String,
    pub articles: Vec<ArticleRecord>,
    pub items: Vec<ReportItem>,
}

impl ReportView {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            status: String::new(),
            articles: Vec::new(),
            items: Vec::new(),
        }
    }

    /// A submission is in flight: previous results are cleared immediately so
    /// stale data can never render next to the new status line.
    pub fn submit(self) -> Self {
        Self {
            phase: Phase::Loading,
            status: SEARCHING_STATUS.to_string(),
            articles: Vec::new(),
            items: Vec::new(),
        }
    }

    /// A successful response arrived. This is the only place the report
    /// parser runs; articles pass through in backend order.
    pub fn receive_success(self, response: ProcessResponse) -> Self {
        let items = parser::parse_report(&response.report_content);
        let status = if response.message.is_empty() {
            DEFAULT_SUCCESS_STATUS.to_string()
        } else {
            response.message
        };
        Self {
            phase: Phase::Ready,
            status,
            articles: response.articles,
            items,
        }
    }

    /// The request failed or the backend reported an error. No partial data
    /// survives; only the human-readable status remains.
    pub fn receive_failure(self, status: String) -> Self {
        Self {
            phase: Phase::Failed,
            status,
            articles: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn reset(self) -> Self {
        Self::idle()
    }

    pub fn has_report(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn has_articles(&self) -> bool {
        !self.articles.is_empty()
    }
}

// ── Tests ──
