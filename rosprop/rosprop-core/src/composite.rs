//! Composite generators for record types.
//!
//! A record type is declared once as an override struct (one
//! `Option<Generator>` per field) implementing [`Message`]. Calling
//! [`Message::generator`] resolves every slot (the caller's override, or a
//! freshly built default) and returns a [`Generator`] that on each draw:
//!
//! 1. draws every field in declared order,
//! 2. checks each value against the field's declared [`DataTypeDef`],
//!    collecting every mismatch into one [`ContractViolation`],
//! 3. assembles the values into a positional [`Value::Struct`].
//!
//! Nested records are declared with [`FieldSlot::message`]; their shape is
//! the nested type's [`Message::field_defs`], so any generator producing a
//! record of that shape is an acceptable override.

use std::sync::Arc;

use proptest::strategy::{Just, SBoxedStrategy, Strategy};
use tracing::debug;

use crate::{
    error::{ContractViolation, Violation},
    generator::{Drawn, Generator},
    schema::{DataTypeDef, FieldDef, FieldDefs},
    value::Value,
};

/// A record type with a fixed, ordered set of typed fields.
///
/// Implementors are the override structs themselves: `Default` leaves every
/// field to its standard generator.
pub trait Message: Default + Sized {
    /// Fully qualified type name, e.g. `std_msgs/Header`.
    const TYPE_NAME: &'static str;

    /// The declared fields in order, carrying this value's overrides.
    fn into_slots(self) -> Vec<FieldSlot>;

    /// Shape of the record: field names and declared types in order.
    fn field_defs() -> FieldDefs {
        Self::default()
            .into_slots()
            .into_iter()
            .map(|slot| slot.def)
            .collect()
    }

    /// Positional layout of generated records, one line per field.
    fn layout() -> String {
        Self::field_defs().to_string()
    }

    /// Resolve overrides and defaults into a composite generator.
    fn generator(self) -> Generator {
        compose(Self::TYPE_NAME, self.into_slots())
    }
}

/// One declared field of a record: its definition, the caller's override and
/// the constructor of its standard generator.
pub struct FieldSlot {
    def: FieldDef,
    generator: Option<Generator>,
    default: fn() -> Generator,
}

impl FieldSlot {
    pub fn new(
        name: &str,
        data_type: DataTypeDef,
        generator: Option<Generator>,
        default: fn() -> Generator,
    ) -> Self {
        Self {
            def: FieldDef::new(name, data_type),
            generator,
            default,
        }
    }

    /// Field holding a nested record of type `M`.
    pub fn message<M: Message>(name: &str, generator: Option<Generator>) -> Self {
        Self::new(
            name,
            DataTypeDef::Struct(M::field_defs()),
            generator,
            default_generator::<M>,
        )
    }

    pub fn def(&self) -> &FieldDef {
        &self.def
    }

    pub fn is_overridden(&self) -> bool {
        self.generator.is_some()
    }

    /// The override, or a default built for this call only.
    fn resolve(self) -> (FieldDef, Generator) {
        let generator = self.generator.unwrap_or_else(self.default);
        (self.def, generator)
    }
}

fn default_generator<M: Message>() -> Generator {
    M::default().generator()
}

/// Build the composite generator for `type_name` from resolved slots.
pub fn compose(type_name: &'static str, slots: Vec<FieldSlot>) -> Generator {
    let overridden: Vec<&str> = slots
        .iter()
        .filter(|slot| slot.is_overridden())
        .map(|slot| slot.def.name.as_str())
        .collect();
    debug!(record = type_name, ?overridden, "resolving composite generator");

    let (defs, generators): (Vec<FieldDef>, Vec<Generator>) =
        slots.into_iter().map(FieldSlot::resolve).unzip();
    let labels = generators.iter().map(|g| g.label().to_string()).collect();

    // Left fold keeps the declared draw order and lets the engine shrink each
    // field independently.
    let fields = generators.iter().fold(
        Just(Vec::with_capacity(defs.len())).sboxed(),
        |acc: SBoxedStrategy<Vec<Drawn>>, field| {
            (acc, field.checked_strategy())
                .prop_map(|(mut drawn, next)| {
                    drawn.push(next);
                    drawn
                })
                .sboxed()
        },
    );

    let assembler = Arc::new(Assembler {
        type_name,
        defs,
        labels,
    });
    Generator::from_drawn(
        type_name,
        fields.prop_map(move |drawn| assembler.assemble(drawn)),
    )
}

struct Assembler {
    type_name: &'static str,
    defs: Vec<FieldDef>,
    labels: Vec<String>,
}

impl Assembler {
    fn assemble(&self, drawn: Vec<Drawn>) -> Drawn {
        let mut values = Vec::with_capacity(drawn.len());
        let mut violations = Vec::new();

        for ((def, label), result) in self.defs.iter().zip(&self.labels).zip(drawn) {
            match result {
                Ok(value) => {
                    if let Err(mismatch) = value.conforms_to(&def.data_type) {
                        violations.push(Violation {
                            path: def.name.clone(),
                            value: value.clone(),
                            generator: label.clone(),
                            detail: format!("{} field: {mismatch}", def.data_type.type_name()),
                        });
                    }
                    values.push(value);
                }
                Err(inner) => violations.extend(inner.nested_in(&def.name).violations),
            }
        }

        if violations.is_empty() {
            Ok(Value::Struct(values))
        } else {
            Err(ContractViolation::new(self.type_name, violations))
        }
    }
}
