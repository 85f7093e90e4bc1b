//! Composable value generators for ROS message fixtures.
//!
//! This crate provides the value model ([`Value`]), the declared-shape model
//! ([`DataTypeDef`] / [`FieldDefs`]), the field primitive constructors in
//! [`fields`] and the composite layer ([`Message`], [`FieldSlot`]) that
//! turns them into generators of whole records.
//!
//! Randomness and shrinking come from `proptest`: every [`Generator`] wraps a
//! `proptest` strategy and can be drawn from with a `TestRunner` or used
//! directly in `proptest!` blocks.
//!
//! # Typical Flow
//! ```rust
//! use proptest::test_runner::TestRunner;
//! use rosprop_core::{
//!     Generator, Message, Value,
//!     fields::{Time, uint32},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let stamp = Time {
//!     secs: Some(uint32(1..=1)?),
//!     nsecs: Some(Generator::just(2u32)),
//! }
//! .generator();
//!
//! let mut runner = TestRunner::deterministic();
//! assert_eq!(
//!     stamp.draw(&mut runner)?,
//!     Value::record([Value::U32(1), Value::U32(2)])
//! );
//! # Ok(())
//! # }
//! ```

mod composite;
mod constraint;
mod error;
pub mod fields;
mod generator;
mod schema;
mod value;

pub use composite::{FieldSlot, Message, compose};
pub use constraint::Constraint;
pub use error::{ConfigError, ContractViolation, DrawError, ValueTypeError, Violation};
pub use generator::{Drawn, Generator};
pub use schema::{DataTypeDef, FieldDef, FieldDefs, format_field_defs};
pub use value::Value;
