//! Homogeneous sequence generators.

use std::ops::RangeBounds;

use proptest::{collection::vec, strategy::Strategy};

use super::{DEFAULT_ARRAY_SIZE, len_bounds};
use crate::{
    constraint::Constraint,
    error::ConfigError,
    generator::{Drawn, Generator},
    value::Value,
};

/// Variable-length sequence of [`DEFAULT_ARRAY_SIZE`] elements drawn from `elements`.
pub fn array(elements: Generator) -> Generator {
    array_between(elements, *DEFAULT_ARRAY_SIZE.start(), *DEFAULT_ARRAY_SIZE.end())
}

/// Sequence whose length lies in `size`; each element is drawn independently.
pub fn bounded_array(
    elements: Generator,
    size: impl RangeBounds<usize>,
) -> Result<Generator, ConfigError> {
    let (min, max) = len_bounds("array", &size, *DEFAULT_ARRAY_SIZE.end())?;
    Ok(array_between(elements, min, max))
}

/// Sequence of exactly `size` elements.
pub fn fixed_array(elements: Generator, size: usize) -> Generator {
    array_between(elements, size, size)
}

fn array_between(elements: Generator, min: usize, max: usize) -> Generator {
    let label = if min == max {
        format!("array({}, {min})", elements.label())
    } else {
        format!("array({}, {min}..={max})", elements.label())
    };
    let strategy = vec(elements.checked_strategy(), min..=max).prop_map(collect_items);
    Generator::checked(label, Constraint::Len { min, max }, strategy)
}

fn collect_items(drawn: Vec<Drawn>) -> Drawn {
    drawn
        .into_iter()
        .enumerate()
        .map(|(i, item)| item.map_err(|violation| violation.nested_in(&format!("[{i}]"))))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::List)
}
