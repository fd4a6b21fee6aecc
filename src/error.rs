//! Host-boundary error type.
//!
//! Language-level lexing/parsing/evaluation failures are never exceptions
//! — they are `Vec<String>` diagnostics or `Object::Error` values, per the
//! interpreter's error-as-data design. `MonkeyError` exists only for
//! failures outside the language itself: reading a source file the user
//! pointed the CLI at.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonkeyError {
    #[error("could not read {path}: {source}")]
    ReadSource {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
