// wordcount-plugin — Word-counting example plugin for JSON-over-stdio tool hosts
// License: Apache-2.0

use std::io::Read;

use wordcount_plugin::counter::count_words;
use wordcount_plugin::request::Request;
use wordcount_plugin::response::{self, Response, UsageError};

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    wordcount_plugin::logger::init();

    tracing::debug!(version = wordcount_plugin::VERSION, "wordcount-plugin starting");

    let request = Request::from_stdin_payload(&read_stdin());

    // Without a file there is nothing to count: report usage and bail.
    // This is the only path that exits nonzero.
    if !request.has_file() {
        println!("{}", response::render(&UsageError::missing_file()));
        std::process::exit(1);
    }

    tracing::debug!(
        file = %request.file,
        ignore_case = request.ignore_case,
        pattern = request.pattern.as_deref().unwrap_or(""),
        "Counting words"
    );

    let result = match count_words(&request.file, request.ignore_case, request.pattern.as_deref()) {
        Ok(summary) => {
            tracing::info!(file = %summary.file, words = summary.word_count, "Count completed");
            Response::success(summary)
        }
        Err(e) => {
            // Operational failures become a response, not an exit code.
            tracing::warn!(file = %request.file, error = %e, "Count failed");
            Response::failure(request.file, e.to_string())
        }
    };

    println!("{}", response::render(&result));
}

// ---------------------------------------------------------------------------
// Stdin
// ---------------------------------------------------------------------------

/// Slurp the request payload. An unreadable stdin degrades to an empty
/// payload, which downstream parsing treats as the default request.
fn read_stdin() -> String {
    let mut buffer = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
        tracing::debug!(error = %e, "Failed to read stdin, treating request as empty");
        buffer.clear();
    }
    buffer
}
