//! `geometry_msgs` record types.
//!
//! Covariance matrices are fixed-size row-major `f64` arrays. Overrides for
//! them may reshape the element distribution but must keep the declared
//! length; anything else fails the draw.

use rosprop_core::{
    DataTypeDef, FieldSlot, Generator, Message,
    fields::{any, fixed_array},
};

use crate::std_msgs::Header;

/// Element count of a 6x6 pose covariance matrix.
pub const POSE_COVARIANCE_LEN: usize = 36;

fn pose_covariance() -> Generator {
    fixed_array(any::<f64>(), POSE_COVARIANCE_LEN)
}

/// `geometry_msgs/Point`.
///
/// Layout: `(x: f64, y: f64, z: f64)`.
#[derive(Debug, Clone, Default)]
pub struct Point {
    pub x: Option<Generator>,
    pub y: Option<Generator>,
    pub z: Option<Generator>,
}

impl Message for Point {
    const TYPE_NAME: &'static str = "geometry_msgs/Point";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("x", DataTypeDef::F64, self.x, any::<f64>),
            FieldSlot::new("y", DataTypeDef::F64, self.y, any::<f64>),
            FieldSlot::new("z", DataTypeDef::F64, self.z, any::<f64>),
        ]
    }
}

pub fn point(overrides: Point) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/Point32`.
///
/// Layout: `(x: f32, y: f32, z: f32)`.
#[derive(Debug, Clone, Default)]
pub struct Point32 {
    pub x: Option<Generator>,
    pub y: Option<Generator>,
    pub z: Option<Generator>,
}

impl Message for Point32 {
    const TYPE_NAME: &'static str = "geometry_msgs/Point32";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("x", DataTypeDef::F32, self.x, any::<f32>),
            FieldSlot::new("y", DataTypeDef::F32, self.y, any::<f32>),
            FieldSlot::new("z", DataTypeDef::F32, self.z, any::<f32>),
        ]
    }
}

pub fn point32(overrides: Point32) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/Quaternion`.
///
/// Layout: `(x: f64, y: f64, z: f64, w: f64)`. Components are not
/// normalized.
#[derive(Debug, Clone, Default)]
pub struct Quaternion {
    pub x: Option<Generator>,
    pub y: Option<Generator>,
    pub z: Option<Generator>,
    pub w: Option<Generator>,
}

impl Message for Quaternion {
    const TYPE_NAME: &'static str = "geometry_msgs/Quaternion";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("x", DataTypeDef::F64, self.x, any::<f64>),
            FieldSlot::new("y", DataTypeDef::F64, self.y, any::<f64>),
            FieldSlot::new("z", DataTypeDef::F64, self.z, any::<f64>),
            FieldSlot::new("w", DataTypeDef::F64, self.w, any::<f64>),
        ]
    }
}

pub fn quaternion(overrides: Quaternion) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/Pose`.
///
/// Layout: `(position: Point, orientation: Quaternion)`.
#[derive(Debug, Clone, Default)]
pub struct Pose {
    pub position: Option<Generator>,
    pub orientation: Option<Generator>,
}

impl Message for Pose {
    const TYPE_NAME: &'static str = "geometry_msgs/Pose";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Point>("position", self.position),
            FieldSlot::message::<Quaternion>("orientation", self.orientation),
        ]
    }
}

pub fn pose(overrides: Pose) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/PoseStamped`.
///
/// Layout: `(header: Header, pose: Pose)`.
#[derive(Debug, Clone, Default)]
pub struct PoseStamped {
    pub header: Option<Generator>,
    pub pose: Option<Generator>,
}

impl Message for PoseStamped {
    const TYPE_NAME: &'static str = "geometry_msgs/PoseStamped";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Header>("header", self.header),
            FieldSlot::message::<Pose>("pose", self.pose),
        ]
    }
}

pub fn pose_stamped(overrides: PoseStamped) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/PoseWithCovariance`.
///
/// Layout: `(pose: Pose, covariance: f64[36])`.
#[derive(Debug, Clone, Default)]
pub struct PoseWithCovariance {
    pub pose: Option<Generator>,
    /// Must draw exactly [`POSE_COVARIANCE_LEN`] `f64` elements.
    pub covariance: Option<Generator>,
}

impl Message for PoseWithCovariance {
    const TYPE_NAME: &'static str = "geometry_msgs/PoseWithCovariance";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Pose>("pose", self.pose),
            FieldSlot::new(
                "covariance",
                DataTypeDef::array(DataTypeDef::F64, POSE_COVARIANCE_LEN),
                self.covariance,
                pose_covariance,
            ),
        ]
    }
}

pub fn pose_with_covariance(overrides: PoseWithCovariance) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/PoseWithCovarianceStamped`.
///
/// Layout: `(header: Header, pose: PoseWithCovariance)`.
#[derive(Debug, Clone, Default)]
pub struct PoseWithCovarianceStamped {
    pub header: Option<Generator>,
    pub pose: Option<Generator>,
}

impl Message for PoseWithCovarianceStamped {
    const TYPE_NAME: &'static str = "geometry_msgs/PoseWithCovarianceStamped";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Header>("header", self.header),
            FieldSlot::message::<PoseWithCovariance>("pose", self.pose),
        ]
    }
}

pub fn pose_with_covariance_stamped(overrides: PoseWithCovarianceStamped) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/Vector3`.
///
/// Layout: `(x: f64, y: f64, z: f64)`.
#[derive(Debug, Clone, Default)]
pub struct Vector3 {
    pub x: Option<Generator>,
    pub y: Option<Generator>,
    pub z: Option<Generator>,
}

impl Message for Vector3 {
    const TYPE_NAME: &'static str = "geometry_msgs/Vector3";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("x", DataTypeDef::F64, self.x, any::<f64>),
            FieldSlot::new("y", DataTypeDef::F64, self.y, any::<f64>),
            FieldSlot::new("z", DataTypeDef::F64, self.z, any::<f64>),
        ]
    }
}

pub fn vector3(overrides: Vector3) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/Transform`.
///
/// Layout: `(translation: Vector3, rotation: Quaternion)`.
#[derive(Debug, Clone, Default)]
pub struct Transform {
    pub translation: Option<Generator>,
    pub rotation: Option<Generator>,
}

impl Message for Transform {
    const TYPE_NAME: &'static str = "geometry_msgs/Transform";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Vector3>("translation", self.translation),
            FieldSlot::message::<Quaternion>("rotation", self.rotation),
        ]
    }
}

pub fn transform(overrides: Transform) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/TransformStamped`.
///
/// Layout: `(header: Header, child_frame_id: string, transform: Transform)`.
#[derive(Debug, Clone, Default)]
pub struct TransformStamped {
    pub header: Option<Generator>,
    pub child_frame_id: Option<Generator>,
    pub transform: Option<Generator>,
}

impl Message for TransformStamped {
    const TYPE_NAME: &'static str = "geometry_msgs/TransformStamped";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Header>("header", self.header),
            FieldSlot::new(
                "child_frame_id",
                DataTypeDef::String,
                self.child_frame_id,
                any::<String>,
            ),
            FieldSlot::message::<Transform>("transform", self.transform),
        ]
    }
}

pub fn transform_stamped(overrides: TransformStamped) -> Generator {
    overrides.generator()
}

/// `geometry_msgs/Twist`.
///
/// Layout: `(linear: Vector3, angular: Vector3)`.
#[derive(Debug, Clone, Default)]
pub struct Twist {
    pub linear: Option<Generator>,
    pub angular: Option<Generator>,
}

impl Message for Twist {
    const TYPE_NAME: &'static str = "geometry_msgs/Twist";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Vector3>("linear", self.linear),
            FieldSlot::message::<Vector3>("angular", self.angular),
        ]
    }
}

pub fn twist(overrides: Twist) -> Generator {
    overrides.generator()
}
