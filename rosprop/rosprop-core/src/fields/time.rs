//! ROS 1 `time` and `duration` built-ins.
//!
//! Both are two-field records built with the composite layer, so their
//! fields can be overridden like those of any other record type.

use super::any;
use crate::{
    composite::{FieldSlot, Message},
    generator::Generator,
    schema::DataTypeDef,
};

/// ROS 1 `time`: `(secs: u32, nsecs: u32)`.
#[derive(Debug, Clone, Default)]
pub struct Time {
    pub secs: Option<Generator>,
    pub nsecs: Option<Generator>,
}

impl Message for Time {
    const TYPE_NAME: &'static str = "time";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("secs", DataTypeDef::U32, self.secs, any::<u32>),
            FieldSlot::new("nsecs", DataTypeDef::U32, self.nsecs, any::<u32>),
        ]
    }
}

/// ROS 1 `duration`: `(secs: i32, nsecs: i32)`.
#[derive(Debug, Clone, Default)]
pub struct Duration {
    pub secs: Option<Generator>,
    pub nsecs: Option<Generator>,
}

impl Message for Duration {
    const TYPE_NAME: &'static str = "duration";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("secs", DataTypeDef::I32, self.secs, any::<i32>),
            FieldSlot::new("nsecs", DataTypeDef::I32, self.nsecs, any::<i32>),
        ]
    }
}

pub fn time(overrides: Time) -> Generator {
    overrides.generator()
}

pub fn duration(overrides: Duration) -> Generator {
    overrides.generator()
}
