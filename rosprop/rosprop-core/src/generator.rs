//! The [`Generator`] handle shared by field primitives and composite records.

use std::{fmt, sync::Arc};

use proptest::{
    strategy::{Just, SBoxedStrategy, Strategy, ValueTree},
    test_runner::TestRunner,
};
use tracing::debug;

use crate::{
    constraint::Constraint,
    error::{ContractViolation, DrawError, Violation},
    value::Value,
};

/// Outcome of one draw before it is handed to the caller.
///
/// Contract violations travel through the strategy as data so that the
/// enclosing record can aggregate them into one diagnostic.
pub type Drawn = Result<Value, ContractViolation>;

/// A stateless, reusable value generator.
///
/// Wraps a boxed `proptest` strategy together with a label used to name the
/// generator in diagnostics. Cloning is cheap and clones share the strategy;
/// no draw mutates the generator, so it can be shared across threads.
#[derive(Clone)]
pub struct Generator {
    strategy: SBoxedStrategy<Drawn>,
    label: Arc<str>,
}

impl Generator {
    pub(crate) fn from_drawn<S>(label: impl Into<Arc<str>>, strategy: S) -> Self
    where
        S: Strategy<Value = Drawn> + Send + Sync + 'static,
    {
        Self {
            strategy: strategy.sboxed(),
            label: label.into(),
        }
    }

    /// Primitive generator whose draws are checked against `constraint`.
    pub(crate) fn primitive<S>(label: String, constraint: Constraint, strategy: S) -> Self
    where
        S: Strategy<Value = Value> + Send + Sync + 'static,
    {
        Self::checked(label, constraint, strategy.prop_map(Ok))
    }

    pub(crate) fn checked<S>(label: String, constraint: Constraint, strategy: S) -> Self
    where
        S: Strategy<Value = Drawn> + Send + Sync + 'static,
    {
        let label: Arc<str> = label.into();
        let owner = Arc::clone(&label);
        let strategy = strategy.prop_map(move |drawn: Drawn| -> Drawn {
            let value = drawn?;
            match constraint.check(&value) {
                Ok(()) => Ok(value),
                Err(detail) => Err(ContractViolation::new(
                    owner.as_ref(),
                    vec![Violation {
                        path: String::new(),
                        value,
                        generator: owner.to_string(),
                        detail,
                    }],
                )),
            }
        });
        Self::from_drawn(label, strategy)
    }

    /// Generator that always yields `value`.
    pub fn just(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::from_drawn(format!("just({value})"), Just(Ok(value)))
    }

    /// Wrap an arbitrary strategy producing [`Value`]s.
    ///
    /// Draws are not checked here; a record using this generator for one of
    /// its fields validates each value against the field's declared type.
    pub fn from_strategy<S>(label: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy<Value = Value> + Send + Sync + 'static,
    {
        Self::from_drawn(label.into(), strategy.prop_map(Ok))
    }

    /// Human readable description, e.g. `uint32(0..=10)` or `std_msgs/Header`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Strategy yielding each draw's outcome, violations included.
    pub fn checked_strategy(&self) -> SBoxedStrategy<Drawn> {
        self.strategy.clone()
    }

    /// Strategy for direct use in `proptest!` blocks.
    ///
    /// # Panics
    ///
    /// Producing a value panics with the diagnostic when the draw breaks its
    /// contract, which fails the surrounding property test.
    pub fn strategy(&self) -> SBoxedStrategy<Value> {
        self.strategy
            .clone()
            .prop_map(|drawn| match drawn {
                Ok(value) => value,
                Err(violation) => panic!("{violation}"),
            })
            .sboxed()
    }

    /// Draw one value using `runner` as the source of randomness.
    pub fn draw(&self, runner: &mut TestRunner) -> Result<Value, DrawError> {
        let tree = self
            .strategy
            .new_tree(runner)
            .map_err(|reason| DrawError::Rejected(reason.message().to_string()))?;
        tree.current().map_err(|violation| {
            debug!(generator = %self.label, %violation, "draw broke its contract");
            DrawError::Contract(violation)
        })
    }

    /// Draw `count` independent values.
    pub fn draw_many(&self, runner: &mut TestRunner, count: usize) -> Result<Vec<Value>, DrawError> {
        (0..count).map(|_| self.draw(runner)).collect()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Generator").field(&self.label).finish()
    }
}
