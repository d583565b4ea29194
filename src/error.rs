//! Error types for the pokedex CLI
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the pokedex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Outbound HTTP request failed (connection, timeout, body read)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API answered with a non-success status
    #[error("Request error ({url}): status {status}")]
    ApiStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body could not be decoded as the expected JSON shape
    #[error("Could not parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// User typed a command that does not exist
    #[error("Command `{0}` does not exist. Type \"help\" for usage information")]
    UnknownCommand(String),

    /// Command invoked without its required argument
    #[error("The `{command}` command requires {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    /// Too many words on the input line
    #[error("Expected at most one argument but got {0}")]
    TooManyArguments(usize),

    /// `mapb` issued before any forward page was fetched
    #[error("There is no previous page")]
    NoPreviousPage,

    /// `inspect` on a creature that was never caught
    #[error("You have not caught {0}; it is not in your pokedex")]
    NotCaught(String),
}

// == Result Type Alias ==
/// Convenience Result type for the pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
