// wordcount-plugin — Whitespace tokenizer with optional substring filtering

use std::fs;

use thiserror::Error;

/// Failure while reading or decoding the target file.
///
/// Covers missing files, permission errors, and non-UTF-8 data; the
/// `Display` text is what ends up in the failure response's `error` field.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a successful count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSummary {
    /// Path as given in the request.
    pub file: String,
    /// Tokens remaining after filtering.
    pub word_count: usize,
    /// Pattern actually applied (lowercased when case folding was on).
    pub pattern: Option<String>,
}

impl CountSummary {
    /// Human-readable summary for the response `message` field.
    pub fn message(&self) -> String {
        match &self.pattern {
            Some(p) => format!("Found {} words containing '{}'", self.word_count, p),
            None => format!("Found {} words", self.word_count),
        }
    }
}

/// Count whitespace-delimited words in `file`, optionally case-folded and
/// filtered to tokens containing `pattern` as a substring.
///
/// Case folding applies to both the content and the pattern, so the filter
/// stays symmetric. A token matches on containment, not whole-word equality.
pub fn count_words(
    file: &str,
    ignore_case: bool,
    pattern: Option<&str>,
) -> Result<CountSummary, CountError> {
    let raw = fs::read_to_string(file).map_err(|source| CountError::Read {
        path: file.to_string(),
        source,
    })?;

    let content = if ignore_case { raw.to_lowercase() } else { raw };
    let pattern = pattern.map(|p| {
        if ignore_case {
            p.to_lowercase()
        } else {
            p.to_string()
        }
    });

    let word_count = match pattern.as_deref() {
        Some(p) => content
            .split_whitespace()
            .filter(|word| word.contains(p))
            .count(),
        None => content.split_whitespace().count(),
    };

    Ok(CountSummary {
        file: file.to_string(),
        word_count,
        pattern,
    })
}
