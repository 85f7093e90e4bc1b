//! Bounded integer and float generators.

use std::{
    fmt::{Debug, Display},
    ops::{Bound, RangeBounds},
};

use proptest::strategy::{Just, SBoxedStrategy, Strategy, Union};

use super::Primitive;
use crate::{constraint::Constraint, error::ConfigError, generator::Generator, value::Value};

/// Fixed-width integer types that can back a bounded integer field.
pub trait Integer: Primitive + Copy + PartialOrd + Display + Debug + Send + Sync + 'static {
    /// Constructor name used in generator labels, e.g. `uint32`.
    const NAME: &'static str;
    const MIN: Self;
    const MAX: Self;

    fn into_value(self) -> Value;
    fn widen(self) -> i128;
    fn step_up(self) -> Option<Self>;
    fn step_down(self) -> Option<Self>;
    fn range_strategy(min: Self, max: Self) -> SBoxedStrategy<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Integer for $ty {
                const NAME: &'static str = $name;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                fn into_value(self) -> Value {
                    Value::from(self)
                }

                fn widen(self) -> i128 {
                    i128::from(self)
                }

                fn step_up(self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn step_down(self) -> Option<Self> {
                    self.checked_sub(1)
                }

                fn range_strategy(min: Self, max: Self) -> SBoxedStrategy<Self> {
                    (min..=max).sboxed()
                }
            }

            impl Primitive for $ty {
                fn any_generator() -> Generator {
                    integer_between::<$ty>(<$ty>::MIN, <$ty>::MAX)
                }
            }
        )*
    };
}

impl_integer! {
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
}

/// Bounded integer generator over an inclusive or exclusive range.
///
/// Open ends default to the full range of `T`. `min == max == k` always
/// draws `k`.
pub fn integer<T: Integer>(range: impl RangeBounds<T>) -> Result<Generator, ConfigError> {
    if let (Bound::Included(a) | Bound::Excluded(a), Bound::Included(b) | Bound::Excluded(b)) =
        (range.start_bound(), range.end_bound())
        && a > b
    {
        return Err(ConfigError::InvertedRange {
            generator: T::NAME,
            min: a.to_string(),
            max: b.to_string(),
        });
    }

    let empty = ConfigError::EmptyRange { generator: T::NAME };
    let min = match range.start_bound() {
        Bound::Included(v) => *v,
        Bound::Excluded(v) => v.step_up().ok_or_else(|| empty.clone())?,
        Bound::Unbounded => T::MIN,
    };
    let max = match range.end_bound() {
        Bound::Included(v) => *v,
        Bound::Excluded(v) => v.step_down().ok_or_else(|| empty.clone())?,
        Bound::Unbounded => T::MAX,
    };
    if min > max {
        return Err(empty);
    }
    Ok(integer_between(min, max))
}

fn integer_between<T: Integer>(min: T, max: T) -> Generator {
    let label = if min == T::MIN && max == T::MAX {
        format!("{}(..)", T::NAME)
    } else {
        format!("{}({min}..={max})", T::NAME)
    };
    let constraint = Constraint::Int {
        min: min.widen(),
        max: max.widen(),
    };
    let strategy = if min == max {
        Just(min).sboxed()
    } else {
        T::range_strategy(min, max)
    };
    Generator::primitive(label, constraint, strategy.prop_map(T::into_value))
}

pub fn int8(range: impl RangeBounds<i8>) -> Result<Generator, ConfigError> {
    integer(range)
}

pub fn int16(range: impl RangeBounds<i16>) -> Result<Generator, ConfigError> {
    integer(range)
}

pub fn int32(range: impl RangeBounds<i32>) -> Result<Generator, ConfigError> {
    integer(range)
}

pub fn int64(range: impl RangeBounds<i64>) -> Result<Generator, ConfigError> {
    integer(range)
}

pub fn uint8(range: impl RangeBounds<u8>) -> Result<Generator, ConfigError> {
    integer(range)
}

pub fn uint16(range: impl RangeBounds<u16>) -> Result<Generator, ConfigError> {
    integer(range)
}

pub fn uint32(range: impl RangeBounds<u32>) -> Result<Generator, ConfigError> {
    integer(range)
}

pub fn uint64(range: impl RangeBounds<u64>) -> Result<Generator, ConfigError> {
    integer(range)
}

/// IEEE floating point types that can back a bounded float field.
pub trait Float: Primitive + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Constructor name used in generator labels, e.g. `float64`.
    const NAME: &'static str;
    const MIN: Self;
    const MAX: Self;

    fn into_value(self) -> Value;
    fn widen(self) -> f64;
    fn is_finite(self) -> bool;
    fn next_down(self) -> Self;
    /// Midpoint of `lo` and `hi` that cannot overflow.
    fn midpoint(lo: Self, hi: Self) -> Self;
    /// Whether `lo..=hi` is narrow enough to be sampled uniformly in one piece.
    fn sampleable(lo: Self, hi: Self) -> bool;
    /// The engine's full float domain, special values included.
    fn any_strategy() -> SBoxedStrategy<Self>;
    fn range_strategy(lo: Self, hi: Self) -> SBoxedStrategy<Self>;
}

macro_rules! impl_float {
    ($($ty:ident => $name:literal),* $(,)?) => {
        $(
            impl Float for $ty {
                const NAME: &'static str = $name;
                const MIN: Self = $ty::MIN;
                const MAX: Self = $ty::MAX;

                fn into_value(self) -> Value {
                    Value::from(self)
                }

                fn widen(self) -> f64 {
                    f64::from(self)
                }

                fn is_finite(self) -> bool {
                    $ty::is_finite(self)
                }

                fn next_down(self) -> Self {
                    $ty::next_down(self)
                }

                fn midpoint(lo: Self, hi: Self) -> Self {
                    lo / 2.0 + hi / 2.0
                }

                fn sampleable(lo: Self, hi: Self) -> bool {
                    hi - lo <= $ty::MAX / 2.0
                }

                fn any_strategy() -> SBoxedStrategy<Self> {
                    proptest::num::$ty::ANY.sboxed()
                }

                fn range_strategy(lo: Self, hi: Self) -> SBoxedStrategy<Self> {
                    (lo..=hi).sboxed()
                }
            }

            impl Primitive for $ty {
                fn any_generator() -> Generator {
                    Generator::primitive(
                        format!("{}(..)", $name),
                        Constraint::Unconstrained,
                        <$ty as Float>::any_strategy().prop_map(<$ty as Float>::into_value),
                    )
                }
            }
        )*
    };
}

impl_float! {
    f32 => "float32",
    f64 => "float64",
}

/// Bounded float generator.
///
/// A fully open range (`..`) is unconstrained and may draw NaN and the
/// infinities. Any bound restricts draws to finite values inside the
/// inclusive range; an exclusive upper end steps down to the previous float.
pub fn float<T: Float>(range: impl RangeBounds<T>) -> Result<Generator, ConfigError> {
    let check_finite = |bound: &T| {
        if bound.is_finite() {
            Ok(*bound)
        } else {
            Err(ConfigError::NonFiniteBound {
                generator: T::NAME,
                bound: format!("{bound:?}"),
            })
        }
    };

    let lo = match range.start_bound() {
        Bound::Included(v) => check_finite(v)?,
        Bound::Excluded(_) => return Err(ConfigError::ExclusiveLowerBound { generator: T::NAME }),
        Bound::Unbounded => T::MIN,
    };
    let hi = match range.end_bound() {
        Bound::Included(v) => check_finite(v)?,
        Bound::Excluded(v) => check_finite(v)?.next_down(),
        Bound::Unbounded if matches!(range.start_bound(), Bound::Unbounded) => {
            return Ok(T::any_generator());
        }
        Bound::Unbounded => T::MAX,
    };

    if let (Bound::Included(_), Bound::Included(b) | Bound::Excluded(b)) =
        (range.start_bound(), range.end_bound())
        && lo > *b
    {
        return Err(ConfigError::InvertedRange {
            generator: T::NAME,
            min: format!("{lo:?}"),
            max: format!("{b:?}"),
        });
    }
    if lo > hi {
        return Err(ConfigError::EmptyRange { generator: T::NAME });
    }

    let label = format!("{}({lo:?}..={hi:?})", T::NAME);
    let constraint = Constraint::Float {
        min: lo.widen(),
        max: hi.widen(),
    };
    let strategy = if lo == hi {
        Just(lo).sboxed()
    } else {
        let mut pieces = Vec::new();
        split_sampleable(lo, hi, &mut pieces);
        if pieces.len() == 1 {
            T::range_strategy(lo, hi)
        } else {
            Union::new(pieces.into_iter().map(|(a, b)| T::range_strategy(a, b))).sboxed()
        }
    };
    Ok(Generator::primitive(
        label,
        constraint,
        strategy.prop_map(T::into_value),
    ))
}

/// Bisect `lo..=hi` until every piece can be sampled uniformly.
fn split_sampleable<T: Float>(lo: T, hi: T, out: &mut Vec<(T, T)>) {
    if T::sampleable(lo, hi) {
        out.push((lo, hi));
    } else {
        let mid = T::midpoint(lo, hi);
        split_sampleable(lo, mid, out);
        split_sampleable(mid, hi, out);
    }
}

pub fn float32(range: impl RangeBounds<f32>) -> Result<Generator, ConfigError> {
    float(range)
}

pub fn float64(range: impl RangeBounds<f64>) -> Result<Generator, ConfigError> {
    float(range)
}
