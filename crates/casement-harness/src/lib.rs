#![forbid(unsafe_code)]

//! In-memory display backend for tests.
//!
//! [`TestDisplay`] implements the full backend contract against a cell grid
//! held in memory, plus a scripted raw-input queue, so window and input-loop
//! behavior can be asserted without a real terminal.
//!
//! # Example
//!
//! ```
//! use casement_harness::TestDisplay;
//! use casement_render::{Attr, Display, ImageBuffer};
//!
//! let mut display = TestDisplay::new(5, 10);
//! let image = ImageBuffer::new(3, 1, Attr::DEFAULT, b'x');
//! image.write_to(&mut display, 2, 4).unwrap();
//! assert_eq!(display.row_text(2), "   xxx    ");
//! ```

use std::collections::VecDeque;

use casement_core::{RawSource, Region, Result};
use casement_render::{Cell, Display};

/// An in-memory `rows x cols` character-cell device with scripted input.
///
/// Once the input script runs dry, every further read yields the escape
/// byte, so input loops driven by a script always terminate.
#[derive(Debug, Clone)]
pub struct TestDisplay {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
    script: VecDeque<u16>,
    cursor: (u16, u16),
    refresh_count: u32,
    open: bool,
}

impl TestDisplay {
    /// Create a blank device.
    pub fn new(rows: u16, cols: u16) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![Cell::BLANK; rows as usize * cols as usize],
            script: VecDeque::new(),
            cursor: (1, 1),
            refresh_count: 0,
            open: false,
        }
    }

    /// Queue raw input units for [`RawSource::raw_key`].
    pub fn script<I: IntoIterator<Item = u16>>(&mut self, units: I) {
        self.script.extend(units);
    }

    /// Queue a raw byte string.
    pub fn script_bytes(&mut self, bytes: &[u8]) {
        self.script.extend(bytes.iter().map(|&b| b as u16));
    }

    /// The cell at a device position, if in bounds.
    pub fn cell(&self, row: u16, col: u16) -> Option<Cell> {
        if row >= 1 && row <= self.rows && col >= 1 && col <= self.cols {
            Some(self.cells[(row as usize - 1) * self.cols as usize + col as usize - 1])
        } else {
            None
        }
    }

    /// One device row rendered as text (attributes dropped, non-printable
    /// bytes shown as `?`), for golden-style assertions.
    pub fn row_text(&self, row: u16) -> String {
        (1..=self.cols)
            .map(|col| {
                let ch = self.cell(row, col).map(|c| c.ch).unwrap_or(b' ');
                if ch.is_ascii_graphic() || ch == b' ' {
                    ch as char
                } else {
                    '?'
                }
            })
            .collect()
    }

    /// Last position given to `set_cursor`.
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Number of `refresh` calls so far.
    pub fn refresh_count(&self) -> u32 {
        self.refresh_count
    }

    /// Whether `open` has been called without a matching `close`.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Unconsumed scripted input units.
    pub fn script_remaining(&self) -> usize {
        self.script.len()
    }

    fn row_span(&self, region: Region, r: u16) -> std::ops::Range<usize> {
        let start =
            (region.row + r - 1) as usize * self.cols as usize + (region.col - 1) as usize;
        start..start + region.width as usize
    }
}

impl Display for TestDisplay {
    fn open(&mut self) -> bool {
        self.open = true;
        true
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn rows(&self) -> u16 {
        self.rows
    }

    fn columns(&self) -> u16 {
        self.cols
    }

    fn read(&mut self, region: Region, buf: &mut [Cell]) -> Result<()> {
        self.check_region(region)?;
        for r in 0..region.height {
            let span = self.row_span(region, r);
            let out = r as usize * region.width as usize;
            buf[out..out + region.width as usize].copy_from_slice(&self.cells[span]);
        }
        Ok(())
    }

    fn write(&mut self, region: Region, buf: &[Cell]) -> Result<()> {
        self.check_region(region)?;
        for r in 0..region.height {
            let span = self.row_span(region, r);
            let src = r as usize * region.width as usize;
            self.cells[span].copy_from_slice(&buf[src..src + region.width as usize]);
        }
        Ok(())
    }

    fn set_cursor(&mut self, row: u16, col: u16) {
        self.cursor = (row, col);
    }

    fn refresh(&mut self) {
        self.refresh_count += 1;
    }
}

impl RawSource for TestDisplay {
    fn raw_key(&mut self) -> u16 {
        self.script.pop_front().unwrap_or(0x1B)
    }
}
