#![forbid(unsafe_code)]

//! Rectangular cell buffers.
//!
//! An [`ImageBuffer`] is an in-memory grid of [`Cell`]s. Windows render into
//! one, the manager composites them into a screen-sized one, and snapshot
//! save/restore moves them to and from the device.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = (row - 1) * width + (col - 1)`
//! with 1-indexed buffer-local coordinates, matching the device convention.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height` at all times (2 bytes per cell on the
//!    wire, since [`Cell`] is the device encoding).
//! 2. `width >= 1` and `height >= 1`; construction and resize clamp.

use casement_core::Region;
use casement_core::Result;

use crate::backend::Display;
use crate::cell::{Attr, Cell};

/// A 2D grid of character cells.
///
/// # Example
///
/// ```
/// use casement_render::{Attr, ImageBuffer};
///
/// let mut image = ImageBuffer::new(10, 3, Attr::DEFAULT, b' ');
/// image.copy_text(b"hello", 1, 1, 10, Attr::DEFAULT);
/// assert_eq!(image.get(1, 1).unwrap().ch, b'h');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl ImageBuffer {
    /// Create a buffer filled with `fill` in `attr`.
    ///
    /// Width and height are clamped to at least 1.
    pub fn new(width: u16, height: u16, attr: Attr, fill: u8) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let cells = vec![Cell::new(fill, attr); width as usize * height as usize];
        Self {
            width,
            height,
            cells,
        }
    }

    /// Create a blank buffer (spaces in the reset attribute).
    pub fn blank(width: u16, height: u16) -> Self {
        Self::new(width, height, Attr::DEFAULT, b' ')
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; buffers are at least 1x1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The buffer-local region covering every cell.
    #[inline]
    pub const fn bounds(&self) -> Region {
        Region::new(1, 1, self.width, self.height)
    }

    /// Row-major cell slice, the device blit encoding.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert 1-indexed (row, col) to a linear index.
    ///
    /// Returns `None` if the position is out of bounds.
    #[inline]
    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if row >= 1 && row <= self.height && col >= 1 && col <= self.width {
            Some((row as usize - 1) * self.width as usize + (col as usize - 1))
        } else {
            None
        }
    }

    /// Get the cell at a 1-indexed position.
    #[inline]
    pub fn get(&self, row: u16, col: u16) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Set the cell at a 1-indexed position. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, row: u16, col: u16, cell: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to `fill` in `attr`.
    pub fn clear(&mut self, attr: Attr, fill: u8) {
        self.cells.fill(Cell::new(fill, attr));
    }

    /// Write up to `extent` characters of `text` starting at (row, col).
    ///
    /// Writing stops at the end of `text`, at `extent`, or at the right edge
    /// of the row, whichever comes first; the overflow is silently dropped
    /// and no other cell is touched. A position outside the buffer writes
    /// nothing.
    pub fn copy_text(&mut self, text: &[u8], row: u16, col: u16, extent: u16, attr: Attr) {
        let Some(start) = self.index(row, col) else {
            return;
        };
        let room = (self.width - col + 1) as usize;
        let count = text.len().min(extent as usize).min(room);
        for (i, &ch) in text[..count].iter().enumerate() {
            self.cells[start + i] = Cell::new(ch, attr);
        }
    }

    /// Resize the buffer, preserving the overlapping top-left rectangle.
    ///
    /// Newly exposed cells are filled with `fill` in `attr`. Dimensions are
    /// clamped to at least 1.
    pub fn resize(&mut self, width: u16, height: u16, attr: Attr, fill: u8) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return;
        }
        let mut cells = vec![Cell::new(fill, attr); width as usize * height as usize];
        let keep_w = self.width.min(width) as usize;
        for row in 0..self.height.min(height) as usize {
            let old = row * self.width as usize;
            let new = row * width as usize;
            cells[new..new + keep_w].copy_from_slice(&self.cells[old..old + keep_w]);
        }
        self.width = width;
        self.height = height;
        self.cells = cells;
    }

    /// Copy `src` into this buffer with its top-left at (row, col).
    ///
    /// The copy is clipped to this buffer's bounds; a source that hangs over
    /// any edge is silently truncated.
    pub fn blit(&mut self, src: &ImageBuffer, row: u16, col: u16) {
        let dst_region = Region::new(row, col, src.width, src.height);
        let Some(visible) = self.bounds().intersection(&dst_region) else {
            return;
        };
        for r in 0..visible.height {
            let src_row = (visible.row - row + r) as usize;
            let src_col = (visible.col - col) as usize;
            let src_start = src_row * src.width as usize + src_col;
            let dst_start = (visible.row + r - 1) as usize * self.width as usize
                + (visible.col - 1) as usize;
            let w = visible.width as usize;
            self.cells[dst_start..dst_start + w]
                .copy_from_slice(&src.cells[src_start..src_start + w]);
        }
    }

    /// Blit this buffer to the device with its top-left at (row, col).
    ///
    /// Raises [`casement_core::Error::BadRegion`] if the rectangle falls
    /// outside the device.
    pub fn write_to(&self, display: &mut dyn Display, row: u16, col: u16) -> Result<()> {
        let region = Region::new(row, col, self.width, self.height);
        display.check_region(region)?;
        display.write(region, &self.cells)
    }

    /// Fill this buffer from the device cells under (row, col).
    ///
    /// Raises [`casement_core::Error::BadRegion`] if the rectangle falls
    /// outside the device.
    pub fn read_from(&mut self, display: &mut dyn Display, row: u16, col: u16) -> Result<()> {
        let region = Region::new(row, col, self.width, self.height);
        display.check_region(region)?;
        display.read(region, &mut self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_core::Error;

    /// Minimal in-memory display for blit tests.
    struct GridDisplay {
        rows: u16,
        cols: u16,
        cells: Vec<Cell>,
    }

    impl GridDisplay {
        fn new(rows: u16, cols: u16) -> Self {
            Self {
                rows,
                cols,
                cells: vec![Cell::BLANK; rows as usize * cols as usize],
            }
        }
    }

    impl Display for GridDisplay {
        fn open(&mut self) -> bool {
            true
        }
        fn close(&mut self) {}
        fn rows(&self) -> u16 {
            self.rows
        }
        fn columns(&self) -> u16 {
            self.cols
        }
        fn read(&mut self, region: Region, buf: &mut [Cell]) -> Result<()> {
            self.check_region(region)?;
            for r in 0..region.height {
                let start =
                    (region.row + r - 1) as usize * self.cols as usize + (region.col - 1) as usize;
                let out = r as usize * region.width as usize;
                buf[out..out + region.width as usize]
                    .copy_from_slice(&self.cells[start..start + region.width as usize]);
            }
            Ok(())
        }
        fn write(&mut self, region: Region, buf: &[Cell]) -> Result<()> {
            self.check_region(region)?;
            for r in 0..region.height {
                let start =
                    (region.row + r - 1) as usize * self.cols as usize + (region.col - 1) as usize;
                let src = r as usize * region.width as usize;
                self.cells[start..start + region.width as usize]
                    .copy_from_slice(&buf[src..src + region.width as usize]);
            }
            Ok(())
        }
        fn set_cursor(&mut self, _row: u16, _col: u16) {}
        fn refresh(&mut self) {}
    }

    #[test]
    fn construction_clamps_to_one() {
        let image = ImageBuffer::new(0, 0, Attr::DEFAULT, b'.');
        assert_eq!((image.width(), image.height()), (1, 1));
        assert_eq!(image.len(), 1);
    }

    #[test]
    fn copy_text_touches_exactly_the_written_cells() {
        let attr = Attr::DEFAULT.with_bright(true);
        let mut image = ImageBuffer::new(8, 3, Attr::DEFAULT, b'.');
        image.copy_text(b"hello", 2, 3, 10, attr);

        for row in 1..=3u16 {
            for col in 1..=8u16 {
                let cell = *image.get(row, col).unwrap();
                if row == 2 && (3..=7).contains(&col) {
                    assert_eq!(cell.ch, b"hello"[(col - 3) as usize]);
                    assert_eq!(cell.attr, attr);
                } else {
                    assert_eq!(cell, Cell::new(b'.', Attr::DEFAULT));
                }
            }
        }
    }

    #[test]
    fn copy_text_truncates_at_extent_and_edge() {
        let mut image = ImageBuffer::new(5, 1, Attr::DEFAULT, b'.');
        image.copy_text(b"abcdef", 1, 4, 2, Attr::DEFAULT);
        // Two cells of room at the edge, extent 2: exactly "ab".
        assert_eq!(image.get(1, 4).unwrap().ch, b'a');
        assert_eq!(image.get(1, 5).unwrap().ch, b'b');
        assert_eq!(image.get(1, 3).unwrap().ch, b'.');
    }

    #[test]
    fn copy_text_out_of_bounds_is_a_no_op() {
        let mut image = ImageBuffer::new(4, 2, Attr::DEFAULT, b'.');
        let before = image.clone();
        image.copy_text(b"xy", 3, 1, 2, Attr::DEFAULT);
        image.copy_text(b"xy", 1, 5, 2, Attr::DEFAULT);
        image.copy_text(b"xy", 0, 0, 2, Attr::DEFAULT);
        assert_eq!(image, before);
    }

    #[test]
    fn resize_preserves_top_left() {
        let mut image = ImageBuffer::new(4, 2, Attr::DEFAULT, b'.');
        image.copy_text(b"abcd", 1, 1, 4, Attr::DEFAULT);
        image.copy_text(b"efgh", 2, 1, 4, Attr::DEFAULT);

        image.resize(2, 3, Attr::DEFAULT, b'+');
        assert_eq!(image.get(1, 1).unwrap().ch, b'a');
        assert_eq!(image.get(1, 2).unwrap().ch, b'b');
        assert_eq!(image.get(2, 1).unwrap().ch, b'e');
        assert_eq!(image.get(3, 1).unwrap().ch, b'+');

        image.resize(3, 3, Attr::DEFAULT, b'+');
        assert_eq!(image.get(1, 3).unwrap().ch, b'+');
        assert_eq!(image.get(2, 2).unwrap().ch, b'f');
    }

    #[test]
    fn blit_clips_to_destination() {
        let mut frame = ImageBuffer::new(4, 4, Attr::DEFAULT, b'.');
        let mut src = ImageBuffer::new(3, 3, Attr::DEFAULT, b'#');
        src.set(1, 1, Cell::new(b'@', Attr::DEFAULT));

        frame.blit(&src, 3, 3);
        assert_eq!(frame.get(3, 3).unwrap().ch, b'@');
        assert_eq!(frame.get(4, 4).unwrap().ch, b'#');
        assert_eq!(frame.get(2, 2).unwrap().ch, b'.');

        // Fully off the right edge: nothing copied.
        let before = frame.clone();
        frame.blit(&src, 1, 5);
        assert_eq!(frame, before);
    }

    #[test]
    fn device_round_trip() {
        let mut display = GridDisplay::new(6, 10);
        let mut image = ImageBuffer::new(4, 2, Attr::DEFAULT, b'x');
        image.write_to(&mut display, 2, 3).unwrap();

        let mut back = ImageBuffer::blank(4, 2);
        back.read_from(&mut display, 2, 3).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn off_device_blit_raises_bad_region() {
        let mut display = GridDisplay::new(6, 10);
        let image = ImageBuffer::new(4, 2, Attr::DEFAULT, b'x');
        let err = image.write_to(&mut display, 6, 9).unwrap_err();
        assert!(matches!(err, Error::BadRegion { .. }));

        let mut target = ImageBuffer::blank(4, 2);
        assert!(target.read_from(&mut display, 0, 1).is_err());
    }
}
