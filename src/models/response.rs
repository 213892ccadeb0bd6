use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a successful `/parse` call. Only the first result is ever
/// consumed; the rest of the sequence is carried but ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Vec<ResultRecord>,
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl ParseResponse {
    /// The record the renderer will display, if the server produced any.
    pub fn first_result(&self) -> Option<&ResultRecord> {
        self.results.first()
    }
}

/// One structured-metadata entry. Every field is optional at the transport
/// boundary; the renderer substitutes placeholders for anything absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultRecord {
    pub title: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub summary: Option<String>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub file_size: Option<u64>,
    pub time_taken_sec: Option<f64>,
    pub memory_usage_mb: Option<f64>,
}

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_file_size(mut self, file_size: u64) -> Self {
        self.file_size = Some(file_size);
        self
    }

    pub fn with_timings(mut self, time_taken_sec: f64, memory_usage_mb: f64) -> Self {
        self.time_taken_sec = Some(time_taken_sec);
        self.memory_usage_mb = Some(memory_usage_mb);
        self
    }
}
