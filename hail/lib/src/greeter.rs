//! Stateful greeter with history tracking and derived statistics.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GreetError;
use crate::format::{DEFAULT_GREETING, greet};

/// One produced greeting, stored with its parts.
///
/// Keeping the greeting word and name alongside the formatted message means
/// statistics never have to be re-parsed out of the message text, so names
/// containing `,` or `!` are counted correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRecord {
    /// The greeting word that was used.
    pub greeting: String,
    /// The trimmed name that was greeted.
    pub name: String,
    /// The full formatted message.
    pub message: String,
}

/// Aggregate statistics over a greeter's history.
///
/// Recomputed on demand by [`Greeter::statistics`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingStats {
    /// Number of greetings produced since construction or the last clear.
    pub total_greetings: usize,
    /// Number of distinct names greeted.
    pub unique_names: usize,
    /// The greeting word used most often, if any greetings exist.
    ///
    /// Ties go to the word encountered first.
    pub most_common_greeting: Option<String>,
}

/// A greeter that remembers every message it produces.
///
/// Configuration (default greeting word and case sensitivity) is fixed at
/// construction; only the history mutates. A single instance is not designed
/// for concurrent mutation.
///
/// ## Examples
///
/// ```
/// use hail_lib::Greeter;
///
/// let mut greeter = Greeter::new("Hi").unwrap();
/// assert_eq!(greeter.greet("World").unwrap(), "Hi, World!");
/// assert_eq!(greeter.history(), vec!["Hi, World!"]);
/// ```
#[derive(Debug, Clone)]
pub struct Greeter {
    default_greeting: String,
    case_sensitive: bool,
    history: Vec<GreetingRecord>,
}

impl Greeter {
    /// Creates a case-sensitive greeter with the given default greeting.
    ///
    /// The default greeting is stored trimmed.
    ///
    /// ## Errors
    ///
    /// Returns `GreetError::EmptyGreeting` if the default greeting is empty
    /// or whitespace only.
    pub fn new(default_greeting: &str) -> Result<Self, GreetError> {
        Self::with_case_sensitivity(default_greeting, true)
    }

    /// Creates a greeter with explicit case sensitivity.
    ///
    /// When case sensitivity is disabled, names are title-cased (first
    /// letter of every word uppercased, the rest lowercased) before being
    /// validated and formatted.
    ///
    /// ## Errors
    ///
    /// Returns `GreetError::EmptyGreeting` if the default greeting is empty
    /// or whitespace only.
    ///
    /// ## Examples
    ///
    /// ```
    /// use hail_lib::Greeter;
    ///
    /// let mut greeter = Greeter::with_case_sensitivity("Hello", false).unwrap();
    /// assert_eq!(greeter.greet("bob smith").unwrap(), "Hello, Bob Smith!");
    /// ```
    pub fn with_case_sensitivity(
        default_greeting: &str,
        case_sensitive: bool,
    ) -> Result<Self, GreetError> {
        let default_greeting = default_greeting.trim();
        if default_greeting.is_empty() {
            return Err(GreetError::EmptyGreeting);
        }

        info!("Initialized greeter with default greeting: {default_greeting}");
        Ok(Self {
            default_greeting: default_greeting.to_string(),
            case_sensitive,
            history: Vec::new(),
        })
    }

    /// Greets a name with the stored default greeting.
    ///
    /// On success the message is appended to the history.
    ///
    /// ## Errors
    ///
    /// Returns `GreetError::EmptyName` if the name is empty or whitespace
    /// only (also when title-casing leaves it empty).
    pub fn greet(&mut self, name: &str) -> Result<String, GreetError> {
        let greeting = self.default_greeting.clone();
        self.greet_with(name, &greeting)
    }

    /// Greets a name with an explicit greeting word.
    ///
    /// The greeting word is used verbatim; only the stored *default*
    /// greeting is trimmed at construction.
    ///
    /// ## Errors
    ///
    /// Returns `GreetError::EmptyName` if the name is empty or whitespace
    /// only.
    pub fn greet_with(&mut self, name: &str, greeting: &str) -> Result<String, GreetError> {
        let name = if self.case_sensitive {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(title_case(name))
        };

        let message = greet(&name, greeting)?;
        self.history.push(GreetingRecord {
            greeting: greeting.to_string(),
            name: name.trim().to_string(),
            message: message.clone(),
        });

        Ok(message)
    }

    /// Returns the formatted messages produced so far, in order.
    pub fn history(&self) -> Vec<&str> {
        self.history.iter().map(|r| r.message.as_str()).collect()
    }

    /// Returns the structured greeting records, in order.
    pub fn records(&self) -> &[GreetingRecord] {
        &self.history
    }

    /// Returns the default greeting word.
    pub fn default_greeting(&self) -> &str {
        &self.default_greeting
    }

    /// Returns true if names are passed through without title-casing.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Computes statistics over the current history.
    ///
    /// ## Examples
    ///
    /// ```
    /// use hail_lib::Greeter;
    ///
    /// let mut greeter = Greeter::new("Hi").unwrap();
    /// greeter.greet("Alice").unwrap();
    /// greeter.greet("Bob").unwrap();
    ///
    /// let stats = greeter.statistics();
    /// assert_eq!(stats.total_greetings, 2);
    /// assert_eq!(stats.unique_names, 2);
    /// assert_eq!(stats.most_common_greeting.as_deref(), Some("Hi"));
    /// ```
    pub fn statistics(&self) -> GreetingStats {
        if self.history.is_empty() {
            return GreetingStats {
                total_greetings: 0,
                unique_names: 0,
                most_common_greeting: None,
            };
        }

        let unique_names = self
            .history
            .iter()
            .map(|r| r.name.as_str())
            .collect::<HashSet<_>>()
            .len();

        // Count greeting words in first-appearance order so ties resolve to
        // the word encountered first.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for record in &self.history {
            match counts.iter_mut().find(|(word, _)| *word == record.greeting) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.greeting.as_str(), 1)),
            }
        }

        let mut most_common: Option<(&str, usize)> = None;
        for (word, count) in counts.iter().copied() {
            if most_common.is_none_or(|(_, best)| count > best) {
                most_common = Some((word, count));
            }
        }

        GreetingStats {
            total_greetings: self.history.len(),
            unique_names,
            most_common_greeting: most_common.map(|(word, _)| word.to_string()),
        }
    }

    /// Clears the greeting history, leaving the configuration intact.
    ///
    /// Idempotent.
    pub fn clear_history(&mut self) {
        info!("Clearing greeting history ({} entries)", self.history.len());
        self.history.clear();
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self {
            default_greeting: DEFAULT_GREETING.to_string(),
            case_sensitive: true,
            history: Vec::new(),
        }
    }
}

/// Title-cases a name: the first letter of every word is uppercased and the
/// rest lowercased. Any non-alphabetic character starts a new word.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}
