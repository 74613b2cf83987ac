#![forbid(unsafe_code)]

//! Mapped-backend decoder.
//!
//! For backends whose raw primitive already emits symbolic codes for named
//! keys in a reserved numeric band (`0x100 + scan_code`). Codes in the band
//! are translated through the static table; everything else passes through
//! as a literal byte.

use casement_core::{Key, RawSource};

use crate::codes::MAPPED;

/// Table-lookup decoder for pre-translated raw input.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappedDecoder;

impl MappedDecoder {
    /// Create a mapped decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Translate one raw unit into a portable key.
    ///
    /// Reserved-band codes with no table entry come out as
    /// [`Key::UNKNOWN`]; translation never fails.
    pub fn translate(&self, raw: u16) -> Key {
        if raw < Key::EXTENDED_BASE {
            return Key::byte(raw as u8);
        }
        MAPPED
            .iter()
            .find(|(code, _)| *code == raw)
            .map(|(_, key)| *key)
            .unwrap_or(Key::UNKNOWN)
    }

    /// Block on `src` until one key is available.
    pub fn key_wait(&mut self, src: &mut dyn RawSource) -> Key {
        self.translate(src.raw_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_core::input::ScriptedSource;

    #[test]
    fn bytes_pass_through_unchanged() {
        let decoder = MappedDecoder::new();
        assert_eq!(decoder.translate(b'a' as u16), Key::byte(b'a'));
        assert_eq!(decoder.translate(0x1B), Key::ESC);
        assert_eq!(decoder.translate(0xFF), Key::byte(0xFF));
    }

    #[test]
    fn reserved_band_is_table_translated() {
        let decoder = MappedDecoder::new();
        assert_eq!(decoder.translate(0x148), Key::UP);
        assert_eq!(decoder.translate(0x13B), Key::function(1));
        assert_eq!(decoder.translate(0x110), Key::alt('q'));
        // Reserved code with no entry: sentinel, never an error.
        assert_eq!(decoder.translate(0x1FF), Key::UNKNOWN);
    }

    #[test]
    fn key_wait_reads_one_unit_per_key() {
        let mut decoder = MappedDecoder::new();
        let mut src = ScriptedSource::new([b'x' as u16, 0x150]);
        assert_eq!(decoder.key_wait(&mut src), Key::byte(b'x'));
        assert_eq!(decoder.key_wait(&mut src), Key::DOWN);
        assert_eq!(src.remaining(), 0);
    }
}
