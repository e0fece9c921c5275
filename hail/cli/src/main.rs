use std::io::{self, Read};

use clap::Parser;
use hail_lib::{DEFAULT_GREETING, Greeter, greet, greet_many, greet_many_lenient};
use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::{info, warn};

/// Upper bound on bytes read from stdin.
const STDIN_LIMIT: u64 = 64 * 1024;

/// Format greeting messages for one or more names.
///
/// Names come from the command line or, when none are given, one per line
/// from stdin. With --json, stdin is parsed as a JSON array and non-string
/// elements are skipped.
#[derive(Debug, Parser)]
#[command(name = "hail")]
#[command(version)]
#[command(about = "Format greeting messages for one or more names")]
struct Cli {
    /// Names to greet (reads newline-separated names from stdin if omitted)
    names: Vec<String>,

    /// Greeting word to use
    #[arg(short, long, default_value = DEFAULT_GREETING)]
    greeting: String,

    /// Skip invalid names instead of failing on the first one
    #[arg(long)]
    lenient: bool,

    /// Parse stdin as a JSON array of names; non-string elements are skipped
    #[arg(long, conflicts_with = "names")]
    json: bool,

    /// Title-case names before greeting (case-insensitive mode)
    #[arg(long)]
    title_case: bool,

    /// Print aggregate statistics as JSON after greeting
    #[arg(long)]
    stats: bool,

    /// Run a demonstration of every operation and exit
    #[arg(long, conflicts_with_all = ["names", "json", "stats"])]
    demo: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Error)]
enum HailError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON input must be an array of names")]
    NotAnArray,

    #[error(transparent)]
    Greet(#[from] hail_lib::GreetError),
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), HailError> {
    if cli.debug {
        init_debug_logging();
    }

    if cli.demo {
        return run_demo();
    }

    // Non-string JSON elements can only be skipped, so --json implies the
    // lenient policy.
    let lenient = cli.lenient || cli.json;

    let entries: Vec<Option<String>> = if cli.json {
        parse_json_entries(&read_stdin()?)?
    } else if cli.names.is_empty() {
        read_stdin()?.lines().map(|line| Some(line.to_string())).collect()
    } else {
        cli.names.iter().map(|name| Some(name.clone())).collect()
    };

    if entries.is_empty() {
        eprintln!("Error: No names provided");
        eprintln!("Usage: hail <name>... or echo \"name\" | hail");
        std::process::exit(1);
    }

    let mut greeter = Greeter::with_case_sensitivity(&cli.greeting, !cli.title_case)?;
    let mut skipped = 0usize;

    for entry in &entries {
        match entry {
            Some(name) => match greeter.greet(name) {
                Ok(message) => println!("{message}"),
                Err(_) if lenient => {
                    skipped += 1;
                    warn!("Skipping invalid name: {name:?}");
                }
                Err(error) => return Err(error.into()),
            },
            None => {
                skipped += 1;
                warn!("Skipping non-text entry");
            }
        }
    }

    if lenient {
        info!(
            "Greeted {} names, skipped {} invalid entries",
            greeter.records().len(),
            skipped
        );
    }

    if cli.stats {
        println!("{}", serde_json::to_string_pretty(&greeter.statistics())?);
    }

    Ok(())
}

/// Reads stdin up to [`STDIN_LIMIT`] bytes.
fn read_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().take(STDIN_LIMIT).read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Parses a JSON array into greeting entries.
///
/// String elements become `Some(name)`; anything else (numbers, nulls,
/// nested values) becomes `None` and is later skipped with a warning.
fn parse_json_entries(input: &str) -> Result<Vec<Option<String>>, HailError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let serde_json::Value::Array(items) = value else {
        return Err(HailError::NotAnArray);
    };

    Ok(items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(name) => Some(name),
            _ => None,
        })
        .collect())
}

/// Prints sample invocations of every operation. Illustrative only.
fn run_demo() -> Result<(), HailError> {
    println!("{}", "Hail Demo".bold());
    println!("{}", "=".repeat(20));

    println!("\n{}", "1. Single greetings".cyan());
    println!("{}", greet("World", DEFAULT_GREETING)?);
    println!("{}", greet("Rust", "Welcome")?);

    println!("\n{}", "2. Batch greetings".cyan());
    for message in greet_many(&["Alice", "Bob", "Charlie"], DEFAULT_GREETING)? {
        println!("{message}");
    }

    println!("\n{}", "3. Lenient batch (invalid entries skipped)".cyan());
    let entries = [Some("Alice"), Some(""), None, Some("Charlie")];
    for message in greet_many_lenient(&entries, DEFAULT_GREETING) {
        println!("{message}");
    }

    println!("\n{}", "4. Stateful greeter".cyan());
    let mut greeter = Greeter::new("Good morning")?;
    println!("{}", greeter.greet("Developer")?);
    println!("{}", greeter.greet_with("User", "Welcome")?);

    println!("\n{}", "5. Statistics".cyan());
    let stats = greeter.statistics();
    println!("Total greetings: {}", stats.total_greetings);
    println!("Unique names: {}", stats.unique_names);
    if let Some(word) = stats.most_common_greeting {
        println!("Most common greeting: {word}");
    }

    Ok(())
}

fn init_debug_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_entries_mixed_array() {
        let entries = parse_json_entries(r#"["Alice", 42, "Bob", null, true]"#).unwrap();
        assert_eq!(
            entries,
            vec![
                Some("Alice".to_string()),
                None,
                Some("Bob".to_string()),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_parse_json_entries_empty_array() {
        assert!(parse_json_entries("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_entries_rejects_non_array() {
        let result = parse_json_entries(r#"{"name": "Alice"}"#);
        assert!(matches!(result, Err(HailError::NotAnArray)));
    }

    #[test]
    fn test_parse_json_entries_rejects_invalid_json() {
        let result = parse_json_entries("not json");
        assert!(matches!(result, Err(HailError::Json(_))));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["hail", "-g", "Hi", "--lenient", "Alice", "Bob"]);
        assert_eq!(cli.greeting, "Hi");
        assert!(cli.lenient);
        assert_eq!(cli.names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_cli_defaults_to_hello() {
        let cli = Cli::parse_from(["hail", "Alice"]);
        assert_eq!(cli.greeting, "Hello");
        assert!(!cli.lenient);
        assert!(!cli.title_case);
    }

    #[test]
    fn test_cli_rejects_json_with_positional_names() {
        assert!(Cli::try_parse_from(["hail", "--json", "Alice"]).is_err());
    }
}
