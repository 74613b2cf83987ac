#![forbid(unsafe_code)]

//! Portable key codes.
//!
//! A [`Key`] is the wire format between the key decoders and every window's
//! keystroke handler: a backend-independent integer where `0..=255` are
//! literal byte values (ordinary characters and control codes) and
//! `0x100..` is a fixed band of named keys (arrows, function keys,
//! navigation keys, and Ctrl/Alt/Shift combinations).
//!
//! # Band layout
//!
//! ```text
//! 0x000..=0x0FF   literal bytes
//! 0x100           unknown / unmapped sequence sentinel
//! 0x101..=0x10F   arrows, navigation, Shift-Tab, Ctrl-arrows
//! 0x110..=0x11B   F1..F12
//! 0x120..=0x139   Alt+a .. Alt+z
//! ```
//!
//! The integer representation (rather than an enum) is deliberate: window
//! content is allowed to rewrite a code in place before declining it, so the
//! code must round-trip through plain integer arithmetic.

/// One decoded keystroke.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Key(u16);

impl Key {
    /// First code of the extended (named-key) band.
    pub const EXTENDED_BASE: u16 = 0x100;

    /// First function-key code; `F1` is `FUNCTION_BASE`, `F12` is `+ 11`.
    pub const FUNCTION_BASE: u16 = 0x110;

    /// First Alt+letter code; `Alt+a` is `ALT_BASE`, `Alt+z` is `+ 25`.
    pub const ALT_BASE: u16 = 0x120;

    // Literal control bytes.
    pub const BACKSPACE: Key = Key(0x08);
    pub const TAB: Key = Key(0x09);
    pub const ENTER: Key = Key(0x0D);
    pub const ESC: Key = Key(0x1B);

    /// Sentinel for an unrecognized sequence; never a real keystroke.
    pub const UNKNOWN: Key = Key(0x100);

    pub const UP: Key = Key(0x101);
    pub const DOWN: Key = Key(0x102);
    pub const RIGHT: Key = Key(0x103);
    pub const LEFT: Key = Key(0x104);
    pub const HOME: Key = Key(0x105);
    pub const END: Key = Key(0x106);
    pub const PAGE_UP: Key = Key(0x107);
    pub const PAGE_DOWN: Key = Key(0x108);
    pub const INSERT: Key = Key(0x109);
    pub const DELETE: Key = Key(0x10A);
    pub const SHIFT_TAB: Key = Key(0x10B);
    pub const CTRL_UP: Key = Key(0x10C);
    pub const CTRL_DOWN: Key = Key(0x10D);
    pub const CTRL_RIGHT: Key = Key(0x10E);
    pub const CTRL_LEFT: Key = Key(0x10F);

    /// Key for a literal byte.
    #[inline]
    pub const fn byte(b: u8) -> Self {
        Key(b as u16)
    }

    /// Function key `F1..=F12`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `n` is outside `1..=12`.
    #[inline]
    pub const fn function(n: u8) -> Self {
        debug_assert!(n >= 1 && n <= 12, "function key out of range");
        Key(Self::FUNCTION_BASE + (n as u16 - 1))
    }

    /// Alt+letter for `a..=z` (case-insensitive).
    ///
    /// Letters outside `a..=z` map to [`Key::UNKNOWN`].
    #[inline]
    pub const fn alt(c: char) -> Self {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() {
            Key(Self::ALT_BASE + (c as u16 - 'a' as u16))
        } else {
            Key::UNKNOWN
        }
    }

    /// Reconstruct from a raw code.
    #[inline]
    pub const fn from_raw(code: u16) -> Self {
        Key(code)
    }

    /// Raw integer code.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check whether this code is in the extended (named-key) band.
    #[inline]
    pub const fn is_extended(self) -> bool {
        self.0 >= Self::EXTENDED_BASE
    }

    /// The literal byte value, if this is not an extended code.
    #[inline]
    pub const fn as_byte(self) -> Option<u8> {
        if self.is_extended() {
            None
        } else {
            Some(self.0 as u8)
        }
    }
}

impl core::fmt::Debug for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match *self {
            Key::UNKNOWN => Some("Unknown"),
            Key::UP => Some("Up"),
            Key::DOWN => Some("Down"),
            Key::RIGHT => Some("Right"),
            Key::LEFT => Some("Left"),
            Key::HOME => Some("Home"),
            Key::END => Some("End"),
            Key::PAGE_UP => Some("PageUp"),
            Key::PAGE_DOWN => Some("PageDown"),
            Key::INSERT => Some("Insert"),
            Key::DELETE => Some("Delete"),
            Key::SHIFT_TAB => Some("ShiftTab"),
            Key::CTRL_UP => Some("CtrlUp"),
            Key::CTRL_DOWN => Some("CtrlDown"),
            Key::CTRL_RIGHT => Some("CtrlRight"),
            Key::CTRL_LEFT => Some("CtrlLeft"),
            _ => None,
        };
        if let Some(name) = name {
            return write!(f, "Key({name})");
        }
        if (Self::FUNCTION_BASE..Self::FUNCTION_BASE + 12).contains(&self.0) {
            return write!(f, "Key(F{})", self.0 - Self::FUNCTION_BASE + 1);
        }
        if (Self::ALT_BASE..Self::ALT_BASE + 26).contains(&self.0) {
            let letter = (b'a' + (self.0 - Self::ALT_BASE) as u8) as char;
            return write!(f, "Key(Alt+{letter})");
        }
        match self.as_byte() {
            Some(b) if b.is_ascii_graphic() => write!(f, "Key({:?})", b as char),
            Some(b) => write!(f, "Key(0x{b:02X})"),
            None => write!(f, "Key(0x{:03X})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_band_round_trips() {
        for b in 0..=255u8 {
            let key = Key::byte(b);
            assert!(!key.is_extended());
            assert_eq!(key.as_byte(), Some(b));
        }
    }

    #[test]
    fn extended_band_has_no_byte() {
        assert!(Key::UP.is_extended());
        assert_eq!(Key::UP.as_byte(), None);
        assert!(Key::function(12).is_extended());
        assert!(Key::alt('z').is_extended());
    }

    #[test]
    fn function_and_alt_helpers() {
        assert_eq!(Key::function(1).raw(), Key::FUNCTION_BASE);
        assert_eq!(Key::function(12).raw(), Key::FUNCTION_BASE + 11);
        assert_eq!(Key::alt('a').raw(), Key::ALT_BASE);
        assert_eq!(Key::alt('Z'), Key::alt('z'));
        assert_eq!(Key::alt('1'), Key::UNKNOWN);
    }

    #[test]
    fn debug_names() {
        assert_eq!(format!("{:?}", Key::UP), "Key(Up)");
        assert_eq!(format!("{:?}", Key::function(5)), "Key(F5)");
        assert_eq!(format!("{:?}", Key::alt('x')), "Key(Alt+x)");
        assert_eq!(format!("{:?}", Key::byte(b'q')), "Key('q')");
        assert_eq!(format!("{:?}", Key::ESC), "Key(0x1B)");
    }
}
