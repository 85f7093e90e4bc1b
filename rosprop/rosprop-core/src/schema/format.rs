use std::fmt::{Error, Result, Write as _};

use super::{DataTypeDef, FieldDef};

/// Format field definitions in a readable style:
/// primitive fields and sequences of primitives are rendered in one line,
/// records and sequences of records are pretty-printed.
/// Nested fields follow the same rule.
pub fn format_field_defs(fields: impl AsRef<[FieldDef]>) -> std::result::Result<String, Error> {
    let fields = fields.as_ref();
    let mut out = String::new();

    for field in fields.iter() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &FieldDef, indent: usize, out: &mut String) -> Result {
    format_labeled_type(&field.name, &field.data_type, indent, out)
}

fn inline_type_name(data_type: &DataTypeDef) -> Option<String> {
    match data_type {
        DataTypeDef::List(elem) if elem.is_primitive() => Some(format!("{}[]", elem.type_name())),
        DataTypeDef::Array(elem, size) if elem.is_primitive() => {
            Some(format!("{}[{size}]", elem.type_name()))
        }
        dt if dt.is_primitive() => Some(dt.type_name().to_string()),
        _ => None,
    }
}

fn format_data_type(data_type: &DataTypeDef, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", data_type.type_name())?;

    match data_type {
        DataTypeDef::Struct(fields) => {
            writeln!(out, "{pad}fields:")?;
            for child in fields.iter() {
                format_field(child, indent + 4, out)?;
            }
        }
        DataTypeDef::List(elem) => {
            format_labeled_type("item", elem, indent, out)?;
        }
        DataTypeDef::Array(elem, size) => {
            format_labeled_type("item", elem, indent, out)?;
            writeln!(out, "{pad}size: {size}")?;
        }
        _ => unreachable!("{data_type:?} is not a compound type"),
    }

    Ok(())
}

fn format_labeled_type(
    label: &str,
    data_type: &DataTypeDef,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    match inline_type_name(data_type) {
        Some(name) => writeln!(out, "{pad}{label}: {name}")?,
        None => {
            writeln!(out, "{pad}{label}:")?;
            format_data_type(data_type, indent + 4, out)?;
        }
    }
    Ok(())
}
