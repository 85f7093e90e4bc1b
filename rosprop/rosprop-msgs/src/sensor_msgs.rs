//! `sensor_msgs` record types.

use rosprop_core::{
    DataTypeDef, FieldSlot, Generator, Message,
    fields::{any, array, fixed_array},
};

use crate::{
    geometry_msgs::{Quaternion, Vector3},
    std_msgs::Header,
};

/// Element count of the 3x3 covariance matrices in [`Imu`].
pub const IMU_COVARIANCE_LEN: usize = 9;

fn imu_covariance() -> Generator {
    fixed_array(any::<f64>(), IMU_COVARIANCE_LEN)
}

fn imu_covariance_type() -> DataTypeDef {
    DataTypeDef::array(DataTypeDef::F64, IMU_COVARIANCE_LEN)
}

fn byte_data() -> Generator {
    array(any::<u8>())
}

/// `sensor_msgs/RegionOfInterest`.
///
/// Layout: `(x_offset: u32, y_offset: u32, height: u32, width: u32,
/// do_rectify: bool)`.
#[derive(Debug, Clone, Default)]
pub struct RegionOfInterest {
    pub x_offset: Option<Generator>,
    pub y_offset: Option<Generator>,
    pub height: Option<Generator>,
    pub width: Option<Generator>,
    pub do_rectify: Option<Generator>,
}

impl Message for RegionOfInterest {
    const TYPE_NAME: &'static str = "sensor_msgs/RegionOfInterest";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("x_offset", DataTypeDef::U32, self.x_offset, any::<u32>),
            FieldSlot::new("y_offset", DataTypeDef::U32, self.y_offset, any::<u32>),
            FieldSlot::new("height", DataTypeDef::U32, self.height, any::<u32>),
            FieldSlot::new("width", DataTypeDef::U32, self.width, any::<u32>),
            FieldSlot::new("do_rectify", DataTypeDef::Bool, self.do_rectify, any::<bool>),
        ]
    }
}

pub fn region_of_interest(overrides: RegionOfInterest) -> Generator {
    overrides.generator()
}

/// `sensor_msgs/Imu`.
///
/// Layout: `(header: Header, orientation: Quaternion,
/// orientation_covariance: f64[9], angular_velocity: Vector3,
/// angular_velocity_covariance: f64[9], linear_acceleration: Vector3,
/// linear_acceleration_covariance: f64[9])`.
///
/// Covariance overrides must draw exactly [`IMU_COVARIANCE_LEN`] elements.
#[derive(Debug, Clone, Default)]
pub struct Imu {
    pub header: Option<Generator>,
    pub orientation: Option<Generator>,
    pub orientation_covariance: Option<Generator>,
    pub angular_velocity: Option<Generator>,
    pub angular_velocity_covariance: Option<Generator>,
    pub linear_acceleration: Option<Generator>,
    pub linear_acceleration_covariance: Option<Generator>,
}

impl Message for Imu {
    const TYPE_NAME: &'static str = "sensor_msgs/Imu";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Header>("header", self.header),
            FieldSlot::message::<Quaternion>("orientation", self.orientation),
            FieldSlot::new(
                "orientation_covariance",
                imu_covariance_type(),
                self.orientation_covariance,
                imu_covariance,
            ),
            FieldSlot::message::<Vector3>("angular_velocity", self.angular_velocity),
            FieldSlot::new(
                "angular_velocity_covariance",
                imu_covariance_type(),
                self.angular_velocity_covariance,
                imu_covariance,
            ),
            FieldSlot::message::<Vector3>("linear_acceleration", self.linear_acceleration),
            FieldSlot::new(
                "linear_acceleration_covariance",
                imu_covariance_type(),
                self.linear_acceleration_covariance,
                imu_covariance,
            ),
        ]
    }
}

pub fn imu(overrides: Imu) -> Generator {
    overrides.generator()
}

/// `sensor_msgs/CompressedImage`.
///
/// Layout: `(header: Header, format: string, data: u8[])`.
#[derive(Debug, Clone, Default)]
pub struct CompressedImage {
    pub header: Option<Generator>,
    pub format: Option<Generator>,
    pub data: Option<Generator>,
}

impl Message for CompressedImage {
    const TYPE_NAME: &'static str = "sensor_msgs/CompressedImage";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Header>("header", self.header),
            FieldSlot::new("format", DataTypeDef::String, self.format, any::<String>),
            FieldSlot::new(
                "data",
                DataTypeDef::list(DataTypeDef::U8),
                self.data,
                byte_data,
            ),
        ]
    }
}

pub fn compressed_image(overrides: CompressedImage) -> Generator {
    overrides.generator()
}

/// `sensor_msgs/Image`.
///
/// Layout: `(header: Header, height: u32, width: u32, encoding: string,
/// is_bigendian: u8, step: u32, data: u8[])`.
///
/// Fields are drawn independently; `step` and `data` are not derived from
/// the image dimensions.
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub header: Option<Generator>,
    pub height: Option<Generator>,
    pub width: Option<Generator>,
    pub encoding: Option<Generator>,
    pub is_bigendian: Option<Generator>,
    pub step: Option<Generator>,
    pub data: Option<Generator>,
}

impl Message for Image {
    const TYPE_NAME: &'static str = "sensor_msgs/Image";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Header>("header", self.header),
            FieldSlot::new("height", DataTypeDef::U32, self.height, any::<u32>),
            FieldSlot::new("width", DataTypeDef::U32, self.width, any::<u32>),
            FieldSlot::new("encoding", DataTypeDef::String, self.encoding, any::<String>),
            FieldSlot::new("is_bigendian", DataTypeDef::U8, self.is_bigendian, any::<u8>),
            FieldSlot::new("step", DataTypeDef::U32, self.step, any::<u32>),
            FieldSlot::new(
                "data",
                DataTypeDef::list(DataTypeDef::U8),
                self.data,
                byte_data,
            ),
        ]
    }
}

pub fn image(overrides: Image) -> Generator {
    overrides.generator()
}
