use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const BACKEND_ENV_VAR: &str = "FEDSCOPE_BACKEND";

/// Request body for the backend's /api/process endpoint. Field names match
/// the wire contract exactly.
#[derive(Debug, Serialize)]
pub struct ProcessRequest {
    pub recipient_email: String,
    pub selected_keywords: Vec<String>,
    pub date_filter: String,
}

/// Response envelope from /api/process. Every payload field is defaulted so
/// a sparse reply (error path, no-results path) still deserializes.
#[derive(Debug, Deserialize)]
pub struct ProcessResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
    #[serde(default)]
    pub report_content: String,
}

impl ProcessResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// One ranked source article, produced and ordered upstream. Displayed as
/// received; the relevance score is a confidence in [0.0, 1.0].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub relevance_score: f64,
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Resolve the backend address: explicit flag, then the FEDSCOPE_BACKEND
    /// environment variable, then the local dev default.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .or_else(|| std::env::var(BACKEND_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit a keyword/date selection and wait for the generated report.
    /// One POST, no retry; search + classification + summarization happen
    /// upstream, so this call can take a while.
    pub async fn process(&self, request: &ProcessRequest) -> Result<ProcessResponse> {
        let url = format!("{}/api/process", self.base_url);
        info!(
            "Submitting {} keywords (range '{}') to {}",
            request.selected_keywords.len(),
            request.date_filter,
            url
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to reach backend at {}", url))?
            .error_for_status()
            .context("Backend rejected the request")?
            .json::<ProcessResponse>()
            .await
            .context("Malformed backend response")?;

        Ok(response)
    }
}

// ── Tests ──
