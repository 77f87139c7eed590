// wordcount-plugin — Typed request boundary for the stdio protocol

use serde::Deserialize;

/// Parameters supplied by the host as one JSON object on standard input.
///
/// Unknown keys are ignored and missing keys take their defaults. A payload
/// that is empty, whitespace, or not valid JSON degrades to
/// `Request::default()` instead of erroring; the missing-`file` check
/// downstream then produces the canonical usage-error shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Path of the file to count. Required (non-empty) to proceed.
    pub file: String,
    /// Case-fold content and pattern before counting/filtering.
    pub ignore_case: bool,
    /// Substring filter applied to each token.
    pub pattern: Option<String>,
}

impl Request {
    /// Parse a raw stdin payload, degrading to defaults on malformed input.
    pub fn from_stdin_payload(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Self>(raw) {
            Ok(request) => request.normalized(),
            Err(e) => {
                tracing::debug!(error = %e, "Malformed request JSON, using defaults");
                Self::default()
            }
        }
    }

    /// Collapse degenerate field values once, at the boundary.
    ///
    /// An empty pattern is contained in every token; it means "no filter".
    fn normalized(mut self) -> Self {
        if self.pattern.as_deref() == Some("") {
            self.pattern = None;
        }
        self
    }

    /// Whether the request names a file to operate on.
    pub fn has_file(&self) -> bool {
        !self.file.is_empty()
    }
}
