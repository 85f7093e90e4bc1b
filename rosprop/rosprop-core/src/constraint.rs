//! Declarative bounds attached to primitive generators.

use std::fmt;

use crate::value::Value;

/// Inclusive bounds a primitive generator promises to honour.
///
/// Checked against every drawn value as a postcondition; never used to clamp.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Unconstrained,
    /// Integer bounds, widened so that every declared width fits.
    Int { min: i128, max: i128 },
    Float { min: f64, max: f64 },
    /// Length bounds: chars for strings, elements for sequences.
    Len { min: usize, max: usize },
}

impl Constraint {
    /// Check `value` against the bounds, describing the breach on failure.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            Constraint::Unconstrained => Ok(()),
            Constraint::Int { min, max } => match value.as_i128() {
                Some(v) if (*min..=*max).contains(&v) => Ok(()),
                Some(v) => Err(format!("{v} outside {self}")),
                None => Err(format!("{} is not an integer", value.variant_name())),
            },
            Constraint::Float { min, max } => match value.as_float() {
                Some(v) if *min <= v && v <= *max => Ok(()),
                Some(v) => Err(format!("{v:?} outside {self}")),
                None => Err(format!("{} is not a float", value.variant_name())),
            },
            Constraint::Len { min, max } => match value.len() {
                Some(n) if (*min..=*max).contains(&n) => Ok(()),
                Some(n) => Err(format!("length {n} outside {self}")),
                None => Err(format!("{} has no length", value.variant_name())),
            },
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Unconstrained => f.write_str(".."),
            Constraint::Int { min, max } => write!(f, "{min}..={max}"),
            Constraint::Float { min, max } => write!(f, "{min:?}..={max:?}"),
            Constraint::Len { min, max } => write!(f, "{min}..={max}"),
        }
    }
}
