//! Field primitive constructors.
//!
//! Every constructor validates its bounds up front: a malformed range is a
//! [`ConfigError`] returned before any value is drawn. Drawn values are
//! checked against the same bounds as a postcondition.
//!
//! | constructor                               | value          |
//! |-------------------------------------------|----------------|
//! | [`int8`] .. [`int64`], [`uint8`] .. [`uint64`] | `I8` .. `U64` |
//! | [`float32`], [`float64`]                  | `F32`, `F64`   |
//! | [`string`], [`string_from`]               | `String`       |
//! | [`boolean`]                               | `Bool`         |
//! | [`time`], [`duration`]                    | `Struct` pair  |
//! | [`array`], [`bounded_array`], [`fixed_array`] | `List`     |
//!
//! [`any`] returns the unconstrained generator of a primitive type and is
//! what record types use for fields that are not overridden.

mod numeric;
mod sequence;
mod text;
mod time;

use std::ops::{Bound, RangeBounds, RangeInclusive};

pub use numeric::{
    Float, Integer, float, float32, float64, int8, int16, int32, int64, integer, uint8, uint16,
    uint32, uint64,
};
pub use sequence::{array, bounded_array, fixed_array};
pub use text::{boolean, string, string_from};
pub use time::{Duration, Time, duration, time};

use crate::{error::ConfigError, generator::Generator};

/// Length range used by [`any::<String>()`](any) and by [`string`] ranges
/// without an upper end.
pub const DEFAULT_STRING_LEN: RangeInclusive<usize> = 0..=32;

/// Size range used by [`array`] and by [`bounded_array`] ranges without an
/// upper end.
pub const DEFAULT_ARRAY_SIZE: RangeInclusive<usize> = 0..=8;

/// Types with a canonical unconstrained generator.
pub trait Primitive {
    fn any_generator() -> Generator;
}

/// The unconstrained generator for `T`.
pub fn any<T: Primitive>() -> Generator {
    T::any_generator()
}

/// Resolve a length range into inclusive `(min, max)`.
///
/// A missing upper end allows `default_span` more than the minimum.
fn len_bounds(
    generator: &'static str,
    range: &impl RangeBounds<usize>,
    default_span: usize,
) -> Result<(usize, usize), ConfigError> {
    if let (Bound::Included(a) | Bound::Excluded(a), Bound::Included(b) | Bound::Excluded(b)) =
        (range.start_bound(), range.end_bound())
        && a > b
    {
        return Err(ConfigError::InvertedRange {
            generator,
            min: a.to_string(),
            max: b.to_string(),
        });
    }

    let min = match range.start_bound() {
        Bound::Included(v) => *v,
        Bound::Excluded(v) => v
            .checked_add(1)
            .ok_or(ConfigError::EmptyRange { generator })?,
        Bound::Unbounded => 0,
    };
    let max = match range.end_bound() {
        Bound::Included(v) => *v,
        Bound::Excluded(v) => v
            .checked_sub(1)
            .ok_or(ConfigError::EmptyRange { generator })?,
        Bound::Unbounded => min.saturating_add(default_span),
    };
    if min > max {
        return Err(ConfigError::EmptyRange { generator });
    }
    Ok((min, max))
}
