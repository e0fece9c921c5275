//! Greeting formatting library.
//!
//! This library builds greeting messages of the form `"{greeting}, {name}!"`
//! and offers batch and stateful variants on top of the single formatter.
//!
//! ## Formatters
//!
//! - [`greet`] - Format a single greeting message
//! - [`greet_many`] - Format a batch, failing on the first invalid name
//! - [`greet_many_lenient`] - Format a batch, skipping invalid entries
//!
//! ## Stateful Greeting
//!
//! - [`Greeter`] - A configured greeter that records every message it produces
//! - [`GreetingRecord`] - One history entry with its greeting word and name
//! - [`GreetingStats`] - Aggregate statistics derived from the history
//!
//! ## Examples
//!
//! ```
//! use hail_lib::{greet, Greeter};
//!
//! let message = greet("World", "Hello").unwrap();
//! assert_eq!(message, "Hello, World!");
//!
//! let mut greeter = Greeter::new("Hi").unwrap();
//! greeter.greet("Alice").unwrap();
//! assert_eq!(greeter.statistics().total_greetings, 1);
//! ```
//!
//! Operations emit `tracing` events (info for normal progress, warnings for
//! skipped batch entries); the consuming binary decides whether and where a
//! subscriber is installed.

mod error;
mod format;
mod greeter;

pub use error::GreetError;
pub use format::{DEFAULT_GREETING, greet, greet_many, greet_many_lenient};
pub use greeter::{Greeter, GreetingRecord, GreetingStats};
