//! `std_msgs` record types.

use rosprop_core::{
    DataTypeDef, FieldSlot, Generator, Message,
    fields::{Time, any},
};

/// `std_msgs/Header`.
///
/// Layout: `(seq: u32, stamp: time, frame_id: string)`.
#[derive(Debug, Clone, Default)]
pub struct Header {
    pub seq: Option<Generator>,
    /// Any generator of `time`-shaped records, see [`Time`].
    pub stamp: Option<Generator>,
    pub frame_id: Option<Generator>,
}

impl Message for Header {
    const TYPE_NAME: &'static str = "std_msgs/Header";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("seq", DataTypeDef::U32, self.seq, any::<u32>),
            FieldSlot::message::<Time>("stamp", self.stamp),
            FieldSlot::new("frame_id", DataTypeDef::String, self.frame_id, any::<String>),
        ]
    }
}

pub fn header(overrides: Header) -> Generator {
    overrides.generator()
}

/// `std_msgs/ColorRGBA`.
///
/// Layout: `(r: f32, g: f32, b: f32, a: f32)`.
#[derive(Debug, Clone, Default)]
pub struct ColorRGBA {
    pub r: Option<Generator>,
    pub g: Option<Generator>,
    pub b: Option<Generator>,
    pub a: Option<Generator>,
}

impl Message for ColorRGBA {
    const TYPE_NAME: &'static str = "std_msgs/ColorRGBA";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("r", DataTypeDef::F32, self.r, any::<f32>),
            FieldSlot::new("g", DataTypeDef::F32, self.g, any::<f32>),
            FieldSlot::new("b", DataTypeDef::F32, self.b, any::<f32>),
            FieldSlot::new("a", DataTypeDef::F32, self.a, any::<f32>),
        ]
    }
}

pub fn color_rgba(overrides: ColorRGBA) -> Generator {
    overrides.generator()
}
