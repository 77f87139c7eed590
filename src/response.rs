// wordcount-plugin — Response shapes written to standard output

use serde::Serialize;

use crate::counter::CountSummary;

/// Per-file outcome reported to the host. The host dispatches on the
/// `success` flag, so both variants carry it explicitly.
///
/// Field order is fixed by declaration, which keeps serialized output
/// byte-stable across identical runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success {
        success: bool,
        file: String,
        word_count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        message: String,
    },
    Failure {
        success: bool,
        error: String,
        file: String,
    },
}

impl Response {
    pub fn success(summary: CountSummary) -> Self {
        let message = summary.message();
        Response::Success {
            success: true,
            file: summary.file,
            word_count: summary.word_count,
            pattern: summary.pattern,
            message,
        }
    }

    pub fn failure(file: impl Into<String>, error: impl Into<String>) -> Self {
        Response::Failure {
            success: false,
            error: error.into(),
            file: file.into(),
        }
    }
}

/// Fatal-invocation shape: no file was named, so no count was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageError {
    pub error: String,
    pub usage: String,
}

impl UsageError {
    pub fn missing_file() -> Self {
        Self {
            error: "No file specified".into(),
            usage: "Provide 'file' parameter with path to file".into(),
        }
    }
}

/// Render any output shape as the one pretty-printed JSON document the
/// protocol allows per invocation.
pub fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!(r#"{{"success": false, "error": "{}"}}"#, e))
}
