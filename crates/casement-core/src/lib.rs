#![forbid(unsafe_code)]

//! Core: device geometry, portable key codes, raw input, and errors.

pub mod error;
pub mod geometry;
pub mod input;
pub mod key;
pub mod logging;

pub use error::{Error, Result};
pub use geometry::Region;
pub use input::RawSource;
pub use key::Key;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
