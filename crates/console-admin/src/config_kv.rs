//! Parser for the admin API's subsystem configuration output.
//!
//! The cluster returns one line per subsystem target:
//!
//! ```text
//! # comment lines are skipped
//! subnet license=eyJ... api_key=abc proxy=
//! notify_webhook:primary endpoint="http://hook:8080" queue_limit=0
//! ```

use thiserror::Error;

use console_core::error::{AppError, ErrorKind};

const COMMENT_PREFIX: char = '#';
const TARGET_SEPARATOR: char = ':';

/// Errors raised while parsing configuration output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigParseError {
    /// A token in the key-value section had no `=`.
    #[error("line {line}: expected key=value, found '{token}'")]
    MissingSeparator { line: usize, token: String },
    /// A quoted value was never closed.
    #[error("line {line}: unterminated quoted value for key '{key}'")]
    UnterminatedQuote { line: usize, key: String },
    /// A token started with `=`.
    #[error("line {line}: empty key")]
    EmptyKey { line: usize },
}

impl From<ConfigParseError> for AppError {
    fn from(err: ConfigParseError) -> Self {
        AppError::with_source(
            ErrorKind::ExternalService,
            format!("Invalid server config output: {err}"),
            err,
        )
    }
}

/// A single `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKv {
    pub key: String,
    pub value: String,
}

/// Configuration of one subsystem target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsysConfig {
    /// Subsystem name, e.g. `subnet`.
    pub sub_system: String,
    /// Target name; empty for the default target.
    pub target: String,
    /// Key-value pairs in the order they were listed.
    pub kv: Vec<ConfigKv>,
}

impl SubsysConfig {
    /// Returns the value for `key`, if present.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.kv
            .iter()
            .find(|kv| kv.key == key)
            .map(|kv| kv.value.as_str())
    }

    /// Whether this is the subsystem's default (unnamed) target.
    pub fn is_default_target(&self) -> bool {
        self.target.is_empty()
    }
}

/// Parses configuration output into one [`SubsysConfig`] per line.
pub fn parse_server_config_output(output: &str) -> Result<Vec<SubsysConfig>, ConfigParseError> {
    let mut configs = Vec::new();

    for (idx, raw) in output.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest),
            None => (line, ""),
        };

        let (sub_system, target) = match head.split_once(TARGET_SEPARATOR) {
            Some((sub_system, target)) => (sub_system, target),
            None => (head, ""),
        };

        configs.push(SubsysConfig {
            sub_system: sub_system.to_string(),
            target: target.to_string(),
            kv: parse_kvs(rest, idx + 1)?,
        });
    }

    Ok(configs)
}

fn parse_kvs(input: &str, line: usize) -> Result<Vec<ConfigKv>, ConfigParseError> {
    let mut kvs = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let eq = match rest.find('=') {
            Some(eq) => eq,
            None => {
                return Err(ConfigParseError::MissingSeparator {
                    line,
                    token: rest.split_whitespace().next().unwrap_or(rest).to_string(),
                });
            }
        };

        let key = &rest[..eq];
        if key.is_empty() {
            return Err(ConfigParseError::EmptyKey { line });
        }
        if let Some(ws) = key.find(char::is_whitespace) {
            return Err(ConfigParseError::MissingSeparator {
                line,
                token: key[..ws].to_string(),
            });
        }

        let after = &rest[eq + 1..];
        let (value, remaining) = if let Some(quoted) = after.strip_prefix('"') {
            read_quoted(quoted).ok_or_else(|| ConfigParseError::UnterminatedQuote {
                line,
                key: key.to_string(),
            })?
        } else {
            let end = after.find(char::is_whitespace).unwrap_or(after.len());
            (after[..end].to_string(), &after[end..])
        };

        kvs.push(ConfigKv {
            key: key.to_string(),
            value,
        });
        rest = remaining.trim_start();
    }

    Ok(kvs)
}

/// Reads up to the closing quote, handling `\"` and `\\` escapes.
fn read_quoted(input: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => return None,
            },
            '"' => return Some((value, &input[i + 1..])),
            _ => value.push(c),
        }
    }

    None
}
