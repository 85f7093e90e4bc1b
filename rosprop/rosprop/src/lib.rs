//! Property-based test fixtures for ROS 1 messages.
//!
//! Re-exports the generator core as [`core`], the message catalog as
//! [`msgs`] and the `proptest` version both are built against. Most callers
//! only need the [`prelude`].

pub use proptest;
pub use rosprop_core as core;
pub use rosprop_msgs as msgs;

pub mod prelude {
    pub use proptest::test_runner::TestRunner;
    pub use rosprop_core::{
        ConfigError, ContractViolation, DrawError, Generator, Message, Value,
        fields::{
            Duration, Time, array, boolean, bounded_array, duration, fixed_array, float32,
            float64, int8, int16, int32, int64, string, string_from, time, uint8, uint16, uint32,
            uint64,
        },
    };
}
