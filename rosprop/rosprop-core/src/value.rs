//! Type-safe representation of drawn field values and assembled records.

use std::{fmt, sync::Arc};

use crate::{error::ValueTypeError, schema::DataTypeDef};

/// Value produced by a generator draw.
///
/// All types are explicit; no lossy conversions. Records are positional:
/// `Struct` members follow the declared field order of the record type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Struct(Vec<Value>),
    List(Vec<Value>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Build a record from its members in declared field order.
    pub fn record(fields: impl IntoIterator<Item = Value>) -> Self {
        Self::Struct(fields.into_iter().collect())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::List(items.into_iter().collect())
    }

    pub fn try_bool(&self) -> Result<bool, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            _ => Err(self.type_mismatch("bool")),
        }
    }

    pub fn try_i8(&self) -> Result<i8, ValueTypeError> {
        match self {
            Value::I8(v) => Ok(*v),
            _ => Err(self.type_mismatch("i8")),
        }
    }

    pub fn try_i16(&self) -> Result<i16, ValueTypeError> {
        match self {
            Value::I16(v) => Ok(*v),
            _ => Err(self.type_mismatch("i16")),
        }
    }

    pub fn try_i32(&self) -> Result<i32, ValueTypeError> {
        match self {
            Value::I32(v) => Ok(*v),
            _ => Err(self.type_mismatch("i32")),
        }
    }

    pub fn try_i64(&self) -> Result<i64, ValueTypeError> {
        match self {
            Value::I64(v) => Ok(*v),
            _ => Err(self.type_mismatch("i64")),
        }
    }

    pub fn try_u8(&self) -> Result<u8, ValueTypeError> {
        match self {
            Value::U8(v) => Ok(*v),
            _ => Err(self.type_mismatch("u8")),
        }
    }

    pub fn try_u16(&self) -> Result<u16, ValueTypeError> {
        match self {
            Value::U16(v) => Ok(*v),
            _ => Err(self.type_mismatch("u16")),
        }
    }

    pub fn try_u32(&self) -> Result<u32, ValueTypeError> {
        match self {
            Value::U32(v) => Ok(*v),
            _ => Err(self.type_mismatch("u32")),
        }
    }

    pub fn try_u64(&self) -> Result<u64, ValueTypeError> {
        match self {
            Value::U64(v) => Ok(*v),
            _ => Err(self.type_mismatch("u64")),
        }
    }

    pub fn try_f32(&self) -> Result<f32, ValueTypeError> {
        match self {
            Value::F32(v) => Ok(*v),
            _ => Err(self.type_mismatch("f32")),
        }
    }

    pub fn try_f64(&self) -> Result<f64, ValueTypeError> {
        match self {
            Value::F64(v) => Ok(*v),
            _ => Err(self.type_mismatch("f64")),
        }
    }

    pub fn try_str(&self) -> Result<&str, ValueTypeError> {
        match self {
            Value::String(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("string")),
        }
    }

    /// Members of a record, in declared field order.
    pub fn try_fields(&self) -> Result<&[Value], ValueTypeError> {
        match self {
            Value::Struct(v) => Ok(v),
            _ => Err(self.type_mismatch("struct")),
        }
    }

    pub fn try_list(&self) -> Result<&[Value], ValueTypeError> {
        match self {
            Value::List(v) => Ok(v),
            _ => Err(self.type_mismatch("list")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::String(_) => "string",
            Value::Struct(_) => "struct",
            Value::List(_) => "list",
        }
    }

    /// Check that this value has the shape declared by `data_type`.
    ///
    /// Scalars must match the exact variant. Lists are checked element by
    /// element, fixed-size arrays additionally by length, and records by
    /// arity and then member by member. The first mismatch is reported with
    /// its location inside the value.
    pub fn conforms_to(&self, data_type: &DataTypeDef) -> Result<(), ValueTypeError> {
        match (data_type, self) {
            (DataTypeDef::Bool, Value::Bool(_))
            | (DataTypeDef::I8, Value::I8(_))
            | (DataTypeDef::I16, Value::I16(_))
            | (DataTypeDef::I32, Value::I32(_))
            | (DataTypeDef::I64, Value::I64(_))
            | (DataTypeDef::U8, Value::U8(_))
            | (DataTypeDef::U16, Value::U16(_))
            | (DataTypeDef::U32, Value::U32(_))
            | (DataTypeDef::U64, Value::U64(_))
            | (DataTypeDef::F32, Value::F32(_))
            | (DataTypeDef::F64, Value::F64(_))
            | (DataTypeDef::String, Value::String(_)) => Ok(()),
            (DataTypeDef::Struct(defs), Value::Struct(members)) => {
                if defs.len() != members.len() {
                    return Err(ValueTypeError::new(
                        format!("struct with {} fields", defs.len()),
                        format!("struct with {} fields", members.len()),
                    ));
                }
                for (def, member) in defs.iter().zip(members) {
                    member
                        .conforms_to(&def.data_type)
                        .map_err(|e| e.within(&def.name))?;
                }
                Ok(())
            }
            (DataTypeDef::List(elem), Value::List(items)) => conforms_items(items, elem),
            (DataTypeDef::Array(elem, size), Value::List(items)) => {
                if items.len() != *size {
                    return Err(ValueTypeError::new(
                        format!("{}[{size}]", elem.type_name()),
                        format!("list of {}", items.len()),
                    ));
                }
                conforms_items(items, elem)
            }
            _ => Err(self.type_mismatch(data_type.type_name())),
        }
    }

    pub(crate) fn as_i128(&self) -> Option<i128> {
        Some(match self {
            Value::I8(v) => i128::from(*v),
            Value::I16(v) => i128::from(*v),
            Value::I32(v) => i128::from(*v),
            Value::I64(v) => i128::from(*v),
            Value::U8(v) => i128::from(*v),
            Value::U16(v) => i128::from(*v),
            Value::U32(v) => i128::from(*v),
            Value::U64(v) => i128::from(*v),
            _ => return None,
        })
    }

    pub(crate) fn as_float(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Length in chars for strings, in elements for lists.
    pub(crate) fn len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            _ => None,
        }
    }
}

fn conforms_items(items: &[Value], elem: &DataTypeDef) -> Result<(), ValueTypeError> {
    for (i, item) in items.iter().enumerate() {
        item.conforms_to(elem)
            .map_err(|e| e.within(&format!("[{i}]")))?;
    }
    Ok(())
}

/// Tuple-like rendering: records as `(..)`, lists as `[..]`, strings quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v:?}"),
            Value::F64(v) => write!(f, "{v:?}"),
            Value::String(s) => write!(f, "{:?}", s.as_ref()),
            Value::Struct(members) => write_seq(f, members, "(", ")"),
            Value::List(items) => write_seq(f, items, "[", "]"),
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value], open: &str, close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Arc::from(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}
