#![forbid(unsafe_code)]

//! Border drawing on image buffers.
//!
//! Glyphs are bytes in the device character set; the presets use the classic
//! code-page box-drawing values plus an ASCII fallback.

use casement_core::Region;

use crate::cell::{Attr, Cell};
use crate::image::ImageBuffer;

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: u8,
    pub top_right: u8,
    pub bottom_left: u8,
    pub bottom_right: u8,
    pub horizontal: u8,
    pub vertical: u8,
}

impl BorderGlyphs {
    /// Single-line box drawing.
    pub const SINGLE: Self = Self {
        top_left: 0xDA,
        top_right: 0xBF,
        bottom_left: 0xC0,
        bottom_right: 0xD9,
        horizontal: 0xC4,
        vertical: 0xB3,
    };

    /// Double-line box drawing.
    pub const DOUBLE: Self = Self {
        top_left: 0xC9,
        top_right: 0xBB,
        bottom_left: 0xC8,
        bottom_right: 0xBC,
        horizontal: 0xCD,
        vertical: 0xBA,
    };

    /// ASCII-only fallback.
    pub const ASCII: Self = Self {
        top_left: b'+',
        top_right: b'+',
        bottom_left: b'+',
        bottom_right: b'+',
        horizontal: b'-',
        vertical: b'|',
    };
}

/// Extension trait for drawing on an [`ImageBuffer`].
///
/// All operations take buffer-local 1-indexed regions and clip at the buffer
/// edges via `ImageBuffer::set`.
pub trait Draw {
    /// Fill a rectangle with `fill` in `attr`.
    fn fill_region(&mut self, region: Region, attr: Attr, fill: u8);

    /// Draw a border on the outer ring of `region`.
    ///
    /// Regions thinner than 2 cells in either dimension get edges without a
    /// separate interior.
    fn draw_border(&mut self, region: Region, glyphs: BorderGlyphs, attr: Attr);
}

impl Draw for ImageBuffer {
    fn fill_region(&mut self, region: Region, attr: Attr, fill: u8) {
        let cell = Cell::new(fill, attr);
        for row in region.row..=region.bottom() {
            for col in region.col..=region.right() {
                self.set(row, col, cell);
            }
        }
    }

    fn draw_border(&mut self, region: Region, glyphs: BorderGlyphs, attr: Attr) {
        if region.width == 0 || region.height == 0 {
            return;
        }
        let (top, bottom) = (region.row, region.bottom());
        let (left, right) = (region.col, region.right());

        for col in left..=right {
            self.set(top, col, Cell::new(glyphs.horizontal, attr));
            self.set(bottom, col, Cell::new(glyphs.horizontal, attr));
        }
        for row in top..=bottom {
            self.set(row, left, Cell::new(glyphs.vertical, attr));
            self.set(row, right, Cell::new(glyphs.vertical, attr));
        }
        self.set(top, left, Cell::new(glyphs.top_left, attr));
        self.set(top, right, Cell::new(glyphs.top_right, attr));
        self.set(bottom, left, Cell::new(glyphs.bottom_left, attr));
        self.set(bottom, right, Cell::new(glyphs.bottom_right, attr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_ring_and_untouched_interior() {
        let mut image = ImageBuffer::new(6, 4, Attr::DEFAULT, b'.');
        image.draw_border(image.bounds(), BorderGlyphs::ASCII, Attr::DEFAULT);

        assert_eq!(image.get(1, 1).unwrap().ch, b'+');
        assert_eq!(image.get(1, 6).unwrap().ch, b'+');
        assert_eq!(image.get(4, 1).unwrap().ch, b'+');
        assert_eq!(image.get(4, 6).unwrap().ch, b'+');
        assert_eq!(image.get(1, 3).unwrap().ch, b'-');
        assert_eq!(image.get(2, 1).unwrap().ch, b'|');
        assert_eq!(image.get(2, 3).unwrap().ch, b'.');
    }

    #[test]
    fn border_clips_at_buffer_edges() {
        let mut image = ImageBuffer::new(4, 4, Attr::DEFAULT, b'.');
        // Ring partially hanging off every edge.
        image.draw_border(Region::new(2, 2, 10, 10), BorderGlyphs::ASCII, Attr::DEFAULT);
        assert_eq!(image.get(2, 2).unwrap().ch, b'+');
        assert_eq!(image.get(2, 4).unwrap().ch, b'-');
        assert_eq!(image.get(4, 2).unwrap().ch, b'|');
        assert_eq!(image.get(1, 1).unwrap().ch, b'.');
    }

    #[test]
    fn fill_region_is_bounded() {
        let mut image = ImageBuffer::new(4, 4, Attr::DEFAULT, b'.');
        image.fill_region(Region::new(2, 2, 2, 2), Attr::DEFAULT, b'#');
        assert_eq!(image.get(2, 2).unwrap().ch, b'#');
        assert_eq!(image.get(3, 3).unwrap().ch, b'#');
        assert_eq!(image.get(1, 1).unwrap().ch, b'.');
        assert_eq!(image.get(4, 4).unwrap().ch, b'.');
    }
}
