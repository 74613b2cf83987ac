#![forbid(unsafe_code)]

//! Display backend contract.
//!
//! The physical character-cell driver is an external collaborator; the core
//! only talks to it through this trait. Coordinates follow the device
//! convention from `casement-core`: 1-indexed, valid inside
//! `[1..=rows] x [1..=cols]`.

use casement_core::{Error, Region, Result};

use crate::cell::Cell;

/// A character-cell display device.
///
/// `read`/`write` blit rectangles of [`Cell`]s (the device's 2-byte-per-cell
/// encoding) in row-major order. Both must refuse rectangles that are not
/// fully inside the device with [`Error::BadRegion`]; callers that clamp
/// geometry first (the window manager does) never see that error.
pub trait Display {
    /// Bring the device up. Returns `false` if the device is unavailable.
    fn open(&mut self) -> bool;

    /// Release the device.
    fn close(&mut self);

    /// Device height in rows.
    fn rows(&self) -> u16;

    /// Device width in columns.
    fn columns(&self) -> u16;

    /// Read the cells under `region` into `buf` (row-major).
    ///
    /// `buf` must hold at least `region.area()` cells.
    fn read(&mut self, region: Region, buf: &mut [Cell]) -> Result<()>;

    /// Write `buf` (row-major) to the cells under `region`.
    ///
    /// `buf` must hold at least `region.area()` cells.
    fn write(&mut self, region: Region, buf: &[Cell]) -> Result<()>;

    /// Move the hardware cursor.
    fn set_cursor(&mut self, row: u16, col: u16);

    /// Make all writes since the last refresh visible.
    fn refresh(&mut self);

    /// Validate a region against the device bounds.
    fn check_region(&self, region: Region) -> Result<()> {
        if region.fits_within(self.rows(), self.columns()) {
            Ok(())
        } else {
            Err(Error::BadRegion {
                region,
                rows: self.rows(),
                cols: self.columns(),
            })
        }
    }
}
