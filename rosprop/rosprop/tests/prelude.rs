use rosprop::prelude::*;

#[test]
fn prelude_covers_a_full_draw() -> Result<(), Box<dyn std::error::Error>> {
    let generator = time(Time {
        secs: Some(uint32(1..=1)?),
        nsecs: Some(uint32(2..=2)?),
    });
    let value = generator.draw(&mut TestRunner::deterministic())?;
    assert_eq!(value, Value::record([Value::U32(1), Value::U32(2)]));
    Ok(())
}

#[cfg(feature = "std_msgs")]
#[test]
fn catalog_is_reachable_through_the_facade() -> Result<(), Box<dyn std::error::Error>> {
    use rosprop::msgs::std_msgs::{Header, header};

    let generator = header(Header {
        seq: Some(uint32(0..=0)?),
        stamp: Some(time(Time {
            secs: Some(uint32(1..=1)?),
            nsecs: Some(uint32(2..=2)?),
        })),
        frame_id: Some(Generator::just("some_tf_frame_name")),
    });
    let value = generator.draw(&mut TestRunner::deterministic())?;
    assert_eq!(value.to_string(), r#"(0, (1, 2), "some_tf_frame_name")"#);
    Ok(())
}

#[cfg(feature = "geometry_msgs")]
mod properties {
    use rosprop::{
        msgs::geometry_msgs::{Point, point},
        prelude::*,
        proptest::prelude::*,
    };

    proptest! {
        #[test]
        fn bounded_points_stay_in_the_box(value in point(Point {
            x: Some(float64(-10.0..=10.0).unwrap()),
            y: Some(float64(-10.0..=10.0).unwrap()),
            z: Some(float64(0.0..=0.0).unwrap()),
        }).strategy()) {
            let fields = value.try_fields().unwrap();
            prop_assert!((-10.0..=10.0).contains(&fields[0].try_f64().unwrap()));
            prop_assert!((-10.0..=10.0).contains(&fields[1].try_f64().unwrap()));
            prop_assert_eq!(&fields[2], &Value::F64(0.0));
        }
    }
}
