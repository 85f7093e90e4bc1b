#![cfg(feature = "geometry_msgs")]

use proptest::test_runner::TestRunner;
use rosprop_core::{
    DataTypeDef, DrawError, Generator, Message, Value,
    fields::{any, bounded_array, fixed_array, float64, string_from, uint32},
};
use rosprop_msgs::{
    geometry_msgs::{
        POSE_COVARIANCE_LEN, Point, Point32, Pose, PoseStamped, PoseWithCovariance,
        PoseWithCovarianceStamped, Quaternion, Transform, TransformStamped, Twist, Vector3, point,
        point32, pose, pose_stamped, pose_with_covariance, pose_with_covariance_stamped,
        quaternion, transform, transform_stamped, twist, vector3,
    },
    std_msgs::Header,
};

fn runner() -> TestRunner {
    TestRunner::deterministic()
}

fn conforms<M: Message>(generator: &Generator) -> Result<(), Box<dyn std::error::Error>> {
    let shape = DataTypeDef::Struct(M::field_defs());
    for value in generator.draw_many(&mut runner(), 50)? {
        value.conforms_to(&shape)?;
    }
    Ok(())
}

#[test]
fn every_default_generator_matches_its_shape() -> Result<(), Box<dyn std::error::Error>> {
    conforms::<Point>(&point(Point::default()))?;
    conforms::<Point32>(&point32(Point32::default()))?;
    conforms::<Quaternion>(&quaternion(Quaternion::default()))?;
    conforms::<Pose>(&pose(Pose::default()))?;
    conforms::<PoseStamped>(&pose_stamped(PoseStamped::default()))?;
    conforms::<PoseWithCovariance>(&pose_with_covariance(PoseWithCovariance::default()))?;
    conforms::<PoseWithCovarianceStamped>(&pose_with_covariance_stamped(
        PoseWithCovarianceStamped::default(),
    ))?;
    conforms::<Vector3>(&vector3(Vector3::default()))?;
    conforms::<Transform>(&transform(Transform::default()))?;
    conforms::<TransformStamped>(&transform_stamped(TransformStamped::default()))?;
    conforms::<Twist>(&twist(Twist::default()))?;
    Ok(())
}

#[test]
fn point_fields_are_bounded_independently() -> Result<(), Box<dyn std::error::Error>> {
    let generator = point(Point {
        x: Some(float64(-1.0..=1.0)?),
        z: Some(float64(5.0..=5.0)?),
        ..Default::default()
    });
    for value in generator.draw_many(&mut runner(), 200)? {
        let fields = value.try_fields()?;
        assert!((-1.0..=1.0).contains(&fields[0].try_f64()?));
        fields[1].try_f64()?;
        assert_eq!(fields[2], Value::F64(5.0));
    }
    Ok(())
}

#[test]
fn pose_with_fixed_position_is_deterministic_in_that_subtree()
-> Result<(), Box<dyn std::error::Error>> {
    let origin = point(Point {
        x: Some(float64(0.0..=0.0)?),
        y: Some(float64(0.0..=0.0)?),
        z: Some(float64(0.0..=0.0)?),
    });
    let generator = pose(Pose {
        position: Some(origin),
        ..Default::default()
    });
    for value in generator.draw_many(&mut runner(), 100)? {
        let fields = value.try_fields()?;
        assert_eq!(
            fields[0],
            Value::record([Value::F64(0.0), Value::F64(0.0), Value::F64(0.0)])
        );
        assert_eq!(fields[1].try_fields()?.len(), 4);
    }
    Ok(())
}

#[test]
fn covariance_has_declared_length() -> Result<(), Box<dyn std::error::Error>> {
    let generator = pose_with_covariance(PoseWithCovariance {
        covariance: Some(fixed_array(float64(-1.0..=1.0)?, POSE_COVARIANCE_LEN)),
        ..Default::default()
    });
    for value in generator.draw_many(&mut runner(), 50)? {
        let covariance = value.try_fields()?[1].try_list()?;
        assert_eq!(covariance.len(), 36);
        for entry in covariance {
            assert!((-1.0..=1.0).contains(&entry.try_f64()?));
        }
    }
    Ok(())
}

#[test]
fn covariance_of_wrong_length_is_rejected() {
    let generator = pose_with_covariance(PoseWithCovariance {
        covariance: Some(fixed_array(any::<f64>(), 35)),
        ..Default::default()
    });

    let Err(DrawError::Contract(violation)) = generator.draw(&mut runner()) else {
        panic!("expected a contract violation");
    };
    assert_eq!(violation.record, "geometry_msgs/PoseWithCovariance");
    let covariance = violation.violation("covariance").expect("covariance violation");
    assert_eq!(covariance.generator, "array(float64(..), 35)");
    assert_eq!(
        covariance.detail,
        "array field: expected f64[36], found list of 35"
    );
}

#[test]
fn covariance_length_is_checked_on_every_draw() -> Result<(), Box<dyn std::error::Error>> {
    let generator = pose_with_covariance(PoseWithCovariance {
        covariance: Some(bounded_array(float64(0.0..=0.0)?, 35..=36)?),
        ..Default::default()
    });
    let mut runner = runner();
    for _ in 0..100 {
        match generator.draw(&mut runner) {
            Ok(value) => assert_eq!(value.try_fields()?[1].try_list()?.len(), 36),
            Err(DrawError::Contract(violation)) => {
                assert_eq!(violation.violations[0].path, "covariance");
            }
            Err(other) => return Err(other.into()),
        }
    }
    Ok(())
}

#[test]
fn transform_stamped_layout() {
    assert_eq!(
        TransformStamped::field_defs().names().collect::<Vec<_>>(),
        ["header", "child_frame_id", "transform"]
    );
    assert_eq!(
        Transform::layout(),
        "\
translation:
    type: struct
    fields:
        x: f64
        y: f64
        z: f64
rotation:
    type: struct
    fields:
        x: f64
        y: f64
        z: f64
        w: f64
"
    );
}

#[test]
fn transform_stamped_with_pinned_frames() -> Result<(), Box<dyn std::error::Error>> {
    let generator = transform_stamped(TransformStamped {
        header: Some(
            Header {
                frame_id: Some(Generator::just("odom")),
                ..Default::default()
            }
            .generator(),
        ),
        child_frame_id: Some(string_from("base_link", 1..=1)?),
        ..Default::default()
    });
    for value in generator.draw_many(&mut runner(), 50)? {
        let fields = value.try_fields()?;
        assert_eq!(fields[0].try_fields()?[2], Value::string("odom"));
        assert_eq!(fields[1].try_str()?.chars().count(), 1);
        assert_eq!(fields[2].try_fields()?.len(), 2);
    }
    Ok(())
}

#[test]
fn nested_violation_reports_the_full_path() -> Result<(), Box<dyn std::error::Error>> {
    let generator = pose_with_covariance_stamped(PoseWithCovarianceStamped {
        header: Some(
            Header {
                seq: Some(Generator::just(-1i64)),
                ..Default::default()
            }
            .generator(),
        ),
        pose: Some(
            PoseWithCovariance {
                pose: Some(
                    Pose {
                        orientation: Some(
                            Quaternion {
                                w: Some(uint32(1..=1)?),
                                ..Default::default()
                            }
                            .generator(),
                        ),
                        ..Default::default()
                    }
                    .generator(),
                ),
                ..Default::default()
            }
            .generator(),
        ),
    });

    let Err(DrawError::Contract(violation)) = generator.draw(&mut runner()) else {
        panic!("expected a contract violation");
    };
    assert_eq!(violation.record, "geometry_msgs/PoseWithCovarianceStamped");
    let paths: Vec<_> = violation.violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(paths, ["header.seq", "pose.pose.orientation.w"]);
    assert_eq!(violation.violations[1].generator, "uint32(1..=1)");
    Ok(())
}

#[test]
fn structurally_equal_records_are_interchangeable() -> Result<(), Box<dyn std::error::Error>> {
    let generator = twist(Twist {
        linear: Some(point(Point::default())),
        ..Default::default()
    });
    for value in generator.draw_many(&mut runner(), 20)? {
        assert_eq!(value.try_fields()?.len(), 2);
    }
    Ok(())
}
