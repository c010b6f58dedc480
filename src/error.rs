//! Diagnostic error types for honeypot-intel.
//!
//! Extraction itself never fails; these errors cover the surfaces around it:
//! reading configuration, loading conversation input, and rendering output.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error, Diagnostic)]
pub enum IntelError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(honeypot::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    #[diagnostic(
        code(honeypot::config::parse),
        help(
            "Check the TOML syntax. Known keys: history_window, max_text_bytes, parallel, \
             surface_amounts, extra_upi_providers, extra_keywords."
        )
    )]
    ConfigParse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(honeypot::config::write),
        help("Ensure you have write permissions to the target directory.")
    )]
    ConfigWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read conversation: {path}")]
    #[diagnostic(
        code(honeypot::input::read),
        help("Pass a readable JSON file, or `-` to read from stdin.")
    )]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse conversation {path}: {message}")]
    #[diagnostic(
        code(honeypot::input::parse),
        help(
            "The conversation must be a JSON array of objects like \
             {{\"sender\": \"scammer\", \"text\": \"...\"}}."
        )
    )]
    InputParse { path: String, message: String },

    #[error("serialization error: {message}")]
    #[diagnostic(
        code(honeypot::output::serialize),
        help("The record or configuration could not be rendered. This is a bug; please report it.")
    )]
    Serialization { message: String },
}

/// Convenience alias.
pub type IntelResult<T> = std::result::Result<T, IntelError>;
