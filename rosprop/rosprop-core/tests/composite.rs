use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::test_runner::TestRunner;
use rosprop_core::{
    DataTypeDef, DrawError, FieldSlot, Generator, Message, Value,
    fields::{Time, any, float64, uint8, uint32},
};

// ── a small record catalog declared against the core ─────────────────────────

#[derive(Debug, Clone, Default)]
struct Sample {
    level: Option<Generator>,
    stamp: Option<Generator>,
    reading: Option<Generator>,
}

impl Message for Sample {
    const TYPE_NAME: &'static str = "test_msgs/Sample";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("level", DataTypeDef::U8, self.level, any::<u8>),
            FieldSlot::message::<Time>("stamp", self.stamp),
            FieldSlot::new("reading", DataTypeDef::F64, self.reading, any::<f64>),
        ]
    }
}

static COUNTED_DEFAULTS: AtomicUsize = AtomicUsize::new(0);

fn counted_default() -> Generator {
    COUNTED_DEFAULTS.fetch_add(1, Ordering::SeqCst);
    any::<bool>()
}

#[derive(Debug, Clone, Default)]
struct Counted {
    flag: Option<Generator>,
}

impl Message for Counted {
    const TYPE_NAME: &'static str = "test_msgs/Counted";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![FieldSlot::new(
            "flag",
            DataTypeDef::Bool,
            self.flag,
            counted_default,
        )]
    }
}

fn runner() -> TestRunner {
    TestRunner::deterministic()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[test]
fn records_follow_declared_order_and_arity() -> Result<(), Box<dyn std::error::Error>> {
    let generator = Sample::default().generator();
    assert_eq!(generator.label(), "test_msgs/Sample");
    for value in generator.draw_many(&mut runner(), 100)? {
        let fields = value.try_fields()?;
        assert_eq!(fields.len(), 3);
        assert!(matches!(fields[0], Value::U8(_)));
        assert!(matches!(&fields[1], Value::Struct(pair) if pair.len() == 2));
        assert!(matches!(fields[2], Value::F64(_)));
    }
    Ok(())
}

#[test]
fn field_defs_expose_the_shape() {
    let defs = Sample::field_defs();
    assert_eq!(defs.names().collect::<Vec<_>>(), ["level", "stamp", "reading"]);
    assert_eq!(
        defs[1].data_type,
        DataTypeDef::Struct(Time::field_defs())
    );
    assert_eq!(
        Sample::layout(),
        "\
level: u8
stamp:
    type: struct
    fields:
        secs: u32
        nsecs: u32
reading: f64
"
    );
}

#[test]
fn fully_constrained_nested_override_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let generator = Sample {
        level: Some(uint8(4..=4)?),
        stamp: Some(
            Time {
                secs: Some(uint32(7..=7)?),
                nsecs: Some(uint32(0..=0)?),
            }
            .generator(),
        ),
        reading: Some(float64(0.5..=0.5)?),
    }
    .generator();

    let expected = Value::record([
        Value::U8(4),
        Value::record([Value::U32(7), Value::U32(0)]),
        Value::F64(0.5),
    ]);
    for value in generator.draw_many(&mut runner(), 50)? {
        assert_eq!(value, expected);
    }
    Ok(())
}

#[test]
fn overriding_one_field_leaves_others_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let generator = Sample {
        level: Some(uint8(0..=0)?),
        stamp: Some(
            Time {
                secs: Some(uint32(10..=20)?),
                ..Default::default()
            }
            .generator(),
        ),
        ..Default::default()
    }
    .generator();

    for value in generator.draw_many(&mut runner(), 100)? {
        let fields = value.try_fields()?;
        assert_eq!(fields[0], Value::U8(0));
        let stamp = fields[1].try_fields()?;
        assert!((10..=20).contains(&stamp[0].try_u32()?));
        stamp[1].try_u32()?;
        fields[2].try_f64()?;
    }
    Ok(())
}

#[test]
fn wrong_typed_override_fails_the_draw() {
    let generator = Sample {
        level: Some(Generator::just(1.5f64)),
        ..Default::default()
    }
    .generator();

    let Err(DrawError::Contract(violation)) = generator.draw(&mut runner()) else {
        panic!("expected a contract violation");
    };
    assert_eq!(violation.record, "test_msgs/Sample");
    assert_eq!(violation.violations.len(), 1);
    let level = violation.violation("level").expect("level violation");
    assert_eq!(level.value, Value::F64(1.5));
    assert_eq!(level.generator, "just(1.5)");
    assert_eq!(
        violation.to_string(),
        "contract violation in test_msgs/Sample: drew invalid level=1.5 from just(1.5): \
         u8 field: expected u8, found f64"
    );
}

#[test]
fn record_of_wrong_shape_is_rejected_for_nested_field() {
    let generator = Sample {
        stamp: Some(Generator::just(Value::record([Value::U32(1)]))),
        ..Default::default()
    }
    .generator();

    let Err(DrawError::Contract(violation)) = generator.draw(&mut runner()) else {
        panic!("expected a contract violation");
    };
    let stamp = violation.violation("stamp").expect("stamp violation");
    assert_eq!(
        stamp.detail,
        "struct field: expected struct with 2 fields, found struct with 1 fields"
    );
}

#[test]
fn violations_inside_nested_records_carry_full_path() {
    let generator = Sample {
        level: Some(Generator::just("loud")),
        stamp: Some(
            Time {
                nsecs: Some(Generator::just(-1i32)),
                ..Default::default()
            }
            .generator(),
        ),
        ..Default::default()
    }
    .generator();

    let Err(DrawError::Contract(violation)) = generator.draw(&mut runner()) else {
        panic!("expected a contract violation");
    };
    let paths: Vec<_> = violation.violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(paths, ["level", "stamp.nsecs"]);
}

#[test]
fn sometimes_wrong_override_is_caught_on_every_bad_draw() {
    use proptest::strategy::{Just, Strategy, Union};

    let flaky = Generator::from_strategy(
        "flaky",
        Union::new([
            Just(Value::U8(1)).sboxed(),
            Just(Value::string("1")).sboxed(),
        ]),
    );
    let generator = Sample {
        level: Some(flaky),
        ..Default::default()
    }
    .generator();

    let mut runner = runner();
    let mut failures = 0;
    for _ in 0..200 {
        match generator.draw(&mut runner) {
            Ok(value) => assert_eq!(value.try_fields().unwrap()[0], Value::U8(1)),
            Err(DrawError::Contract(violation)) => {
                assert_eq!(violation.violations[0].path, "level");
                assert_eq!(violation.violations[0].generator, "flaky");
                failures += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert!(failures > 0);
}

#[test]
fn defaults_are_built_per_call() {
    let before = COUNTED_DEFAULTS.load(Ordering::SeqCst);
    let _first = Counted::default().generator();
    let _second = Counted::default().generator();
    let _overridden = Counted {
        flag: Some(any::<bool>()),
    }
    .generator();
    let after = COUNTED_DEFAULTS.load(Ordering::SeqCst);
    assert_eq!(after - before, 2);
}

#[test]
fn generators_are_shareable_across_threads() -> Result<(), Box<dyn std::error::Error>> {
    let generator = Sample {
        level: Some(uint8(9..=9)?),
        ..Default::default()
    }
    .generator();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = generator.clone();
            std::thread::spawn(move || generator.draw(&mut TestRunner::deterministic()))
        })
        .collect();
    for handle in handles {
        let value = handle.join().expect("thread panicked")?;
        assert_eq!(value.try_fields()?[0], Value::U8(9));
    }
    Ok(())
}
