//! `rosgraph_msgs` record types.

use rosprop_core::{
    DataTypeDef, FieldSlot, Generator, Message,
    fields::{Time, any, array},
};

use crate::std_msgs::Header;

fn topic_names() -> Generator {
    array(any::<String>())
}

/// `rosgraph_msgs/Log`.
///
/// Layout: `(header: Header, level: u8, name: string, msg: string,
/// file: string, function: string, line: u32, topics: string[])`.
///
/// The default `level` draws any byte, not only the named levels; pin it
/// with e.g. `Generator::just(Log::ERROR)`.
#[derive(Debug, Clone, Default)]
pub struct Log {
    pub header: Option<Generator>,
    pub level: Option<Generator>,
    pub name: Option<Generator>,
    pub msg: Option<Generator>,
    pub file: Option<Generator>,
    pub function: Option<Generator>,
    pub line: Option<Generator>,
    pub topics: Option<Generator>,
}

impl Log {
    pub const DEBUG: u8 = 1;
    pub const INFO: u8 = 2;
    pub const WARN: u8 = 4;
    pub const ERROR: u8 = 8;
    pub const FATAL: u8 = 16;
}

impl Message for Log {
    const TYPE_NAME: &'static str = "rosgraph_msgs/Log";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![
            FieldSlot::message::<Header>("header", self.header),
            FieldSlot::new("level", DataTypeDef::U8, self.level, any::<u8>),
            FieldSlot::new("name", DataTypeDef::String, self.name, any::<String>),
            FieldSlot::new("msg", DataTypeDef::String, self.msg, any::<String>),
            FieldSlot::new("file", DataTypeDef::String, self.file, any::<String>),
            FieldSlot::new("function", DataTypeDef::String, self.function, any::<String>),
            FieldSlot::new("line", DataTypeDef::U32, self.line, any::<u32>),
            FieldSlot::new(
                "topics",
                DataTypeDef::list(DataTypeDef::String),
                self.topics,
                topic_names,
            ),
        ]
    }
}

pub fn log(overrides: Log) -> Generator {
    overrides.generator()
}

/// `rosgraph_msgs/Clock`.
///
/// Layout: `(clock: time)`.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    pub clock: Option<Generator>,
}

impl Message for Clock {
    const TYPE_NAME: &'static str = "rosgraph_msgs/Clock";

    fn into_slots(self) -> Vec<FieldSlot> {
        vec![FieldSlot::message::<Time>("clock", self.clock)]
    }
}

pub fn clock(overrides: Clock) -> Generator {
    overrides.generator()
}
