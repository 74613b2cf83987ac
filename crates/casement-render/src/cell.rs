#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! The `Cell` is the fundamental unit of the character-cell display. Each
//! cell occupies exactly **2 bytes** — the device's own wire encoding — so a
//! `&[Cell]` slice is directly usable as a backend blit buffer.
//!
//! # Layout (2 bytes, non-negotiable)
//!
//! ```text
//! Cell {
//!     ch:   u8,    // character in the device character set
//!     attr: Attr,  // packed attribute byte
//! }
//! ```
//!
//! # Attribute byte
//!
//! ```text
//! [7: blink][6-4: background (3 bits)][3: bright][2-0: foreground (3 bits)]
//! ```

/// The eight 3-bit device colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    White = 7,
}

impl Color {
    /// Reconstruct from the low 3 bits of a value.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Brown,
            _ => Color::White,
        }
    }
}

/// Packed attribute byte.
///
/// # Layout
///
/// ```text
/// [7: blink][6-4: background][3: bright][2-0: foreground]
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Attr(u8);

impl Attr {
    const BRIGHT_BIT: u8 = 0x08;
    const BLINK_BIT: u8 = 0x80;

    /// White on black, the device reset attribute.
    pub const DEFAULT: Attr = Attr(0x07);

    /// Create an attribute from foreground and background colors.
    #[inline]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Attr((fg as u8) | ((bg as u8) << 4))
    }

    /// Foreground color (bits 0-2).
    #[inline]
    pub const fn fg(self) -> Color {
        Color::from_bits(self.0)
    }

    /// Background color (bits 4-6).
    #[inline]
    pub const fn bg(self) -> Color {
        Color::from_bits(self.0 >> 4)
    }

    /// Bright/intensity bit (bit 3).
    #[inline]
    pub const fn is_bright(self) -> bool {
        self.0 & Self::BRIGHT_BIT != 0
    }

    /// Blink bit (bit 7).
    #[inline]
    pub const fn is_blink(self) -> bool {
        self.0 & Self::BLINK_BIT != 0
    }

    /// Replace the foreground color.
    #[inline]
    pub const fn with_fg(self, fg: Color) -> Self {
        Attr((self.0 & !0x07) | fg as u8)
    }

    /// Replace the background color.
    #[inline]
    pub const fn with_bg(self, bg: Color) -> Self {
        Attr((self.0 & !0x70) | ((bg as u8) << 4))
    }

    /// Set or clear the bright bit.
    #[inline]
    pub const fn with_bright(self, bright: bool) -> Self {
        if bright {
            Attr(self.0 | Self::BRIGHT_BIT)
        } else {
            Attr(self.0 & !Self::BRIGHT_BIT)
        }
    }

    /// Set or clear the blink bit.
    #[inline]
    pub const fn with_blink(self, blink: bool) -> Self {
        if blink {
            Attr(self.0 | Self::BLINK_BIT)
        } else {
            Attr(self.0 & !Self::BLINK_BIT)
        }
    }

    /// Raw attribute byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Reconstruct from a raw attribute byte.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Attr(raw)
    }
}

impl Default for Attr {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl core::fmt::Debug for Attr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Attr")
            .field("fg", &self.fg())
            .field("bg", &self.bg())
            .field("bright", &self.is_bright())
            .field("blink", &self.is_blink())
            .finish()
    }
}

/// One character position: a device character byte plus its attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Cell {
    /// Character in the device character set.
    pub ch: u8,
    /// Packed attribute byte.
    pub attr: Attr,
}

impl Cell {
    /// A blank cell with the reset attribute.
    pub const BLANK: Cell = Cell {
        ch: b' ',
        attr: Attr::DEFAULT,
    };

    /// Create a cell.
    #[inline]
    pub const fn new(ch: u8, attr: Attr) -> Self {
        Cell { ch, attr }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_bit_layout() {
        let attr = Attr::new(Color::Red, Color::Blue)
            .with_bright(true)
            .with_blink(true);
        // blink | bg=1 | bright | fg=4
        assert_eq!(attr.raw(), 0x80 | 0x10 | 0x08 | 0x04);
        assert_eq!(attr.fg(), Color::Red);
        assert_eq!(attr.bg(), Color::Blue);
        assert!(attr.is_bright());
        assert!(attr.is_blink());
    }

    #[test]
    fn attr_builders_only_touch_their_field() {
        let attr = Attr::new(Color::Green, Color::Cyan).with_bright(true);
        let changed = attr.with_fg(Color::White);
        assert_eq!(changed.bg(), Color::Cyan);
        assert!(changed.is_bright());
        assert_eq!(changed.with_bright(false).fg(), Color::White);
    }

    #[test]
    fn cell_is_two_bytes() {
        assert_eq!(core::mem::size_of::<Cell>(), 2);
        assert_eq!(core::mem::align_of::<Cell>(), 1);
    }

    #[test]
    fn default_cell_is_blank() {
        assert_eq!(Cell::default(), Cell::new(b' ', Attr::DEFAULT));
    }
}
