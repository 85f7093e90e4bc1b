use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Declared type of a record field.
///
/// Variant names mirror [`Value`](crate::Value) for consistency (values ↔ types).
/// `List` and `Array` both hold [`Value::List`](crate::Value::List) values;
/// `Array` additionally fixes the element count.
#[derive(Debug, Clone, PartialEq)]
pub enum DataTypeDef {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Struct(FieldDefs),
    List(Box<DataTypeDef>),
    Array(Box<DataTypeDef>, usize),
}

impl DataTypeDef {
    pub fn list(elem: DataTypeDef) -> Self {
        DataTypeDef::List(Box::new(elem))
    }

    pub fn array(elem: DataTypeDef, size: usize) -> Self {
        DataTypeDef::Array(Box::new(elem), size)
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            DataTypeDef::Struct(_) | DataTypeDef::List(_) | DataTypeDef::Array(_, _)
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            DataTypeDef::Bool => "bool",
            DataTypeDef::I8 => "i8",
            DataTypeDef::I16 => "i16",
            DataTypeDef::I32 => "i32",
            DataTypeDef::I64 => "i64",
            DataTypeDef::U8 => "u8",
            DataTypeDef::U16 => "u16",
            DataTypeDef::U32 => "u32",
            DataTypeDef::U64 => "u64",
            DataTypeDef::F32 => "f32",
            DataTypeDef::F64 => "f64",
            DataTypeDef::String => "string",
            DataTypeDef::Struct(_) => "struct",
            DataTypeDef::List(_) => "list",
            DataTypeDef::Array(_, _) => "array",
        }
    }
}

/// Ordered collection of [`FieldDef`] describing one record type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDefs(pub Vec<FieldDef>);

impl FieldDefs {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }

    /// Field names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.name.as_str())
    }
}

impl From<Vec<FieldDef>> for FieldDefs {
    fn from(value: Vec<FieldDef>) -> Self {
        Self(value)
    }
}

impl FromIterator<FieldDef> for FieldDefs {
    fn from_iter<I: IntoIterator<Item = FieldDef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for FieldDefs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_field_defs(self.as_slice())?;
        f.write_str(&text)
    }
}

/// A named, typed field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub data_type: DataTypeDef,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, data_type: DataTypeDef) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}
