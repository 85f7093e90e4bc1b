//! Declared shapes of record types and their fields.

mod format;
mod types;

pub use format::format_field_defs;
pub use types::{DataTypeDef, FieldDef, FieldDefs};
