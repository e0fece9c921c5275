//! Error types for the greeting library.

use thiserror::Error;

/// Errors that can occur when formatting greetings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetError {
    /// The name was empty or contained only whitespace.
    #[error("name cannot be empty or whitespace only")]
    EmptyName,

    /// The default greeting was empty or contained only whitespace.
    #[error("default greeting cannot be empty or whitespace only")]
    EmptyGreeting,
}
