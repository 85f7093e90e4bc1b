//! String and boolean generators.

use std::ops::RangeBounds;

use proptest::{
    arbitrary::any as any_strategy,
    collection::vec,
    sample::select,
    strategy::{Just, Strategy},
};

use super::{DEFAULT_STRING_LEN, Primitive, len_bounds};
use crate::{constraint::Constraint, error::ConfigError, generator::Generator, value::Value};

impl Primitive for String {
    fn any_generator() -> Generator {
        string_between(None, *DEFAULT_STRING_LEN.start(), *DEFAULT_STRING_LEN.end())
    }
}

impl Primitive for bool {
    fn any_generator() -> Generator {
        boolean()
    }
}

/// String of arbitrary chars whose length in chars lies in `len`.
pub fn string(len: impl RangeBounds<usize>) -> Result<Generator, ConfigError> {
    let (min, max) = len_bounds("string", &len, *DEFAULT_STRING_LEN.end())?;
    Ok(string_between(None, min, max))
}

/// String drawn from the chars of `alphabet` whose length in chars lies in `len`.
pub fn string_from(
    alphabet: &str,
    len: impl RangeBounds<usize>,
) -> Result<Generator, ConfigError> {
    let (min, max) = len_bounds("string", &len, *DEFAULT_STRING_LEN.end())?;
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() && min > 0 {
        return Err(ConfigError::EmptyAlphabet { min_len: min });
    }
    Ok(string_between(Some(chars), min, max))
}

fn string_between(alphabet: Option<Vec<char>>, min: usize, max: usize) -> Generator {
    let constraint = Constraint::Len { min, max };
    match alphabet {
        None => Generator::primitive(
            format!("string({min}..={max})"),
            constraint,
            vec(any_strategy::<char>(), min..=max).prop_map(collect_string),
        ),
        // An empty alphabet with a zero minimum can only spell the empty string.
        Some(chars) if chars.is_empty() => Generator::primitive(
            "string_from(\"\", 0..=0)".to_string(),
            Constraint::Len { min: 0, max: 0 },
            Just(Value::string("")),
        ),
        Some(chars) => {
            let label = format!(
                "string_from({:?}, {min}..={max})",
                chars.iter().collect::<String>()
            );
            Generator::primitive(
                label,
                constraint,
                vec(select(chars), min..=max).prop_map(collect_string),
            )
        }
    }
}

fn collect_string(chars: Vec<char>) -> Value {
    Value::from(chars.into_iter().collect::<String>())
}

/// Either `true` or `false`.
pub fn boolean() -> Generator {
    Generator::primitive(
        "boolean()".to_string(),
        Constraint::Unconstrained,
        proptest::bool::ANY.prop_map(Value::Bool),
    )
}
