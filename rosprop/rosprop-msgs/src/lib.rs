//! ROS 1 message catalog for `rosprop` generators.
//!
//! Every record type is an override struct implementing
//! [`Message`](rosprop_core::Message), plus a free constructor named after the
//! type (`header`, `pose`, `imu`, ...). Leave a field as `None` to draw it
//! from its standard generator:
//!
//! ```rust
//! # #[cfg(feature = "std_msgs")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use proptest::test_runner::TestRunner;
//! use rosprop_core::{Generator, Value, fields::uint32};
//! use rosprop_msgs::std_msgs::{Header, header};
//!
//! let generator = header(Header {
//!     seq: Some(uint32(0..=0)?),
//!     frame_id: Some(Generator::just("map")),
//!     ..Default::default()
//! });
//!
//! let drawn = generator.draw(&mut TestRunner::deterministic())?;
//! let fields = drawn.try_fields()?;
//! assert_eq!(fields[0], Value::U32(0));
//! assert_eq!(fields[2], Value::string("map"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "std_msgs"))]
//! # fn main() {}
//! ```
//!
//! Each ROS package is gated by a cargo feature of the same name; all of them
//! are enabled by default.

#[cfg(feature = "geometry_msgs")]
pub mod geometry_msgs;
#[cfg(feature = "rosgraph_msgs")]
pub mod rosgraph_msgs;
#[cfg(feature = "sensor_msgs")]
pub mod sensor_msgs;
#[cfg(feature = "std_msgs")]
pub mod std_msgs;
