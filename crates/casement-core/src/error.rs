#![forbid(unsafe_code)]

//! Error types.

use std::fmt;

use crate::geometry::Region;

/// Errors raised by the windowing core.
///
/// Key decoding and window registration never error by design: decoding
/// always yields some code, and registration refusal is reported with a
/// boolean. The only failure the core can hit is a blit rectangle that falls
/// outside the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A requested rectangle is not fully inside `[1..=rows] x [1..=cols]`.
    BadRegion {
        /// The offending rectangle.
        region: Region,
        /// Device height in rows.
        rows: u16,
        /// Device width in columns.
        cols: u16,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadRegion { region, rows, cols } => {
                write!(f, "region {region} outside {rows}x{cols} device")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_rectangle() {
        let err = Error::BadRegion {
            region: Region::new(2, 3, 90, 4),
            rows: 25,
            cols: 80,
        };
        assert_eq!(err.to_string(), "region 90x4 at (2,3) outside 25x80 device");
    }
}
