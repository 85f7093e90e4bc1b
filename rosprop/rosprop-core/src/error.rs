//! Error types for generator construction and draws.

use std::fmt;

use crate::value::Value;

/// Malformed constraints passed to a field primitive constructor.
///
/// Returned before any value is drawn; never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `min` is greater than `max`.
    #[error("invalid bounds for {generator}: min {min} > max {max}")]
    InvertedRange {
        generator: &'static str,
        min: String,
        max: String,
    },

    /// An exclusive bound leaves no value to draw (e.g. `5..5`).
    #[error("empty range for {generator}")]
    EmptyRange { generator: &'static str },

    /// A float bound is NaN or infinite.
    #[error("non-finite bound {bound} for {generator}")]
    NonFiniteBound { generator: &'static str, bound: String },

    /// Float ranges only accept inclusive or unbounded lower ends.
    #[error("exclusive lower bound is not supported for {generator}")]
    ExclusiveLowerBound { generator: &'static str },

    /// A string alphabet is empty but the minimum length is not zero.
    #[error("empty alphabet for string of at least {min_len} chars")]
    EmptyAlphabet { min_len: usize },
}

/// Declared-type mismatch between a value and the type it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}{}", location_suffix(.location))]
pub struct ValueTypeError {
    pub expected: String,
    pub found: String,
    /// Location of the mismatch inside the checked value, e.g. `position.x`
    /// or `[3]`. Empty when the value itself mismatched.
    pub location: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
            location: String::new(),
        }
    }

    /// Prefix the mismatch location with an enclosing field name or index.
    pub fn within(mut self, segment: &str) -> Self {
        self.location = join_path(segment, &self.location);
        self
    }
}

fn location_suffix(location: &str) -> String {
    if location.is_empty() {
        String::new()
    } else {
        format!(" at {location}")
    }
}

pub(crate) fn join_path(parent: &str, child: &str) -> String {
    if child.is_empty() {
        parent.to_string()
    } else if parent.is_empty() || child.starts_with('[') {
        format!("{parent}{child}")
    } else {
        format!("{parent}.{child}")
    }
}

/// One field whose drawn value broke its declared contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Path of the offending field inside the record, e.g. `stamp.secs`.
    /// Empty for a primitive generator checking its own constraint.
    pub path: String,
    /// The value that was drawn.
    pub value: Value,
    /// Label of the generator that produced `value`.
    pub generator: String,
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "value" } else { &self.path };
        write!(
            f,
            "drew invalid {path}={} from {}: {}",
            self.value, self.generator, self.detail
        )
    }
}

/// A draw produced values that do not match the declared contract.
///
/// This signals a misconfigured generator (usually an incompatible override),
/// never bad caller input. All violations of one draw are reported together.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("contract violation in {record}: {}", render_violations(.violations))]
pub struct ContractViolation {
    /// Record type name, or the label of the primitive generator.
    pub record: String,
    pub violations: Vec<Violation>,
}

impl ContractViolation {
    pub fn new(record: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            record: record.into(),
            violations,
        }
    }

    /// Find the violation reported for `path`.
    pub fn violation(&self, path: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.path == path)
    }

    /// Re-root every violation path under the enclosing field `segment`.
    pub(crate) fn nested_in(mut self, segment: &str) -> Self {
        for violation in &mut self.violations {
            violation.path = join_path(segment, &violation.path);
        }
        self
    }
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned by [`Generator::draw`](crate::Generator::draw).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DrawError {
    #[error(transparent)]
    Contract(#[from] ContractViolation),

    /// The underlying engine refused to produce a value.
    #[error("draw rejected: {0}")]
    Rejected(String),
}
