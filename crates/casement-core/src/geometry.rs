#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! The device coordinate space is 1-indexed: the top-left character cell of
//! the display is `(1, 1)` and a region is valid when it lies entirely inside
//! `[1..=rows] x [1..=cols]`.

use std::fmt;

/// An absolute rectangle on the character-cell device.
///
/// `row`/`col` address the top-left cell; `width`/`height` are in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Top edge (1-indexed, inclusive).
    pub row: u16,
    /// Left edge (1-indexed, inclusive).
    pub col: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Region {
    /// Create a new region.
    #[inline]
    pub const fn new(row: u16, col: u16, width: u16, height: u16) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Right edge (inclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.col.saturating_add(self.width).saturating_sub(1)
    }

    /// Bottom edge (inclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.row.saturating_add(self.height).saturating_sub(1)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check whether the region lies entirely inside a `rows x cols` device.
    #[inline]
    pub const fn fits_within(&self, rows: u16, cols: u16) -> bool {
        self.row >= 1
            && self.col >= 1
            && self.width >= 1
            && self.height >= 1
            && self.bottom() <= rows
            && self.right() <= cols
    }

    /// Check if a device position is inside the region.
    #[inline]
    pub const fn contains(&self, row: u16, col: u16) -> bool {
        row >= self.row && row <= self.bottom() && col >= self.col && col <= self.right()
    }

    /// Clamp the region onto a `rows x cols` device.
    ///
    /// The result is at least 1x1, no larger than the device, and translated
    /// so it lies fully on screen. For any device with `rows >= 1` and
    /// `cols >= 1` the result satisfies [`Region::fits_within`].
    pub fn clamp_to(&self, rows: u16, cols: u16) -> Region {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let width = self.width.clamp(1, cols);
        let height = self.height.clamp(1, rows);
        // Largest legal top-left corner for this size.
        let max_row = rows - height + 1;
        let max_col = cols - width + 1;
        Region {
            row: self.row.clamp(1, max_row),
            col: self.col.clamp(1, max_col),
            width,
            height,
        }
    }

    /// Shrink the region by `n` cells on every side.
    ///
    /// Width and height saturate at zero; callers that need a non-empty
    /// interior must check before drawing into it.
    #[inline]
    pub const fn inset(&self, n: u16) -> Region {
        Region {
            row: self.row.saturating_add(n),
            col: self.col.saturating_add(n),
            width: self.width.saturating_sub(n.saturating_mul(2)),
            height: self.height.saturating_sub(n.saturating_mul(2)),
        }
    }

    /// Grow the region by `n` cells on every side.
    ///
    /// The top-left corner saturates at `(1, 1)`; the grown edges are not
    /// clamped to any device and may need [`Region::clamp_to`] afterwards.
    #[inline]
    pub const fn outset(&self, n: u16) -> Region {
        let row = if self.row > n { self.row - n } else { 1 };
        let col = if self.col > n { self.col - n } else { 1 };
        Region {
            row,
            col,
            width: self.width.saturating_add(n.saturating_mul(2)),
            height: self.height.saturating_add(n.saturating_mul(2)),
        }
    }

    /// Compute the intersection with another region.
    ///
    /// Returns `None` when the regions do not overlap.
    pub fn intersection(&self, other: &Region) -> Option<Region> {
        let row = self.row.max(other.row);
        let col = self.col.max(other.col);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        if row > bottom || col > right {
            return None;
        }
        Some(Region {
            row,
            col,
            width: right - col + 1,
            height: bottom - row + 1,
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({},{})",
            self.width, self.height, self.row, self.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_within_edges() {
        assert!(Region::new(1, 1, 80, 25).fits_within(25, 80));
        assert!(Region::new(25, 80, 1, 1).fits_within(25, 80));
        assert!(!Region::new(25, 80, 2, 1).fits_within(25, 80));
        assert!(!Region::new(0, 1, 1, 1).fits_within(25, 80));
        assert!(!Region::new(1, 1, 0, 1).fits_within(25, 80));
    }

    #[test]
    fn clamp_shrinks_and_translates() {
        let r = Region::new(20, 70, 30, 30).clamp_to(25, 80);
        assert!(r.fits_within(25, 80));
        assert_eq!((r.width, r.height), (30u16.min(80), 25));

        let r = Region::new(0, 0, 0, 0).clamp_to(25, 80);
        assert_eq!(r, Region::new(1, 1, 1, 1));
    }

    #[test]
    fn inset_outset_roundtrip() {
        let r = Region::new(5, 10, 20, 10);
        assert_eq!(r.inset(1), Region::new(6, 11, 18, 8));
        assert_eq!(r.inset(1).outset(1), r);
    }

    #[test]
    fn intersection_overlap() {
        let a = Region::new(1, 1, 10, 10);
        let b = Region::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Region::new(5, 5, 6, 6)));
        let c = Region::new(11, 11, 2, 2);
        assert_eq!(a.intersection(&c), None);
    }
}
