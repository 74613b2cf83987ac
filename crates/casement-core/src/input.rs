#![forbid(unsafe_code)]

//! Raw input primitive.

/// A blocking source of raw input units from the display backend.
///
/// Byte-stream backends yield values in `0..=255` only; mapped backends may
/// additionally yield pre-translated symbolic codes in a reserved band at
/// `0x100` and above (conventionally `0x100 + scan_code`). The key decoders
/// in `casement-input` turn either stream into portable [`crate::Key`]
/// codes.
pub trait RawSource {
    /// Block until the next raw input unit is available and return it.
    fn raw_key(&mut self) -> u16;
}

/// Scripted raw input over a fixed sequence, for tests and replays.
///
/// Once the script is exhausted every further read yields the escape byte,
/// so a consumer driven by the script always sees a way to stop.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: std::collections::VecDeque<u16>,
}

impl ScriptedSource {
    /// Create a source that replays `script` in order.
    pub fn new<I: IntoIterator<Item = u16>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Create a source that replays a byte string.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().map(|&b| b as u16))
    }

    /// Append more raw units to the script.
    pub fn push<I: IntoIterator<Item = u16>>(&mut self, units: I) {
        self.script.extend(units);
    }

    /// Number of unconsumed units.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RawSource for ScriptedSource {
    fn raw_key(&mut self) -> u16 {
        self.script.pop_front().unwrap_or(0x1B)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_replays_in_order() {
        let mut src = ScriptedSource::from_bytes(b"ab");
        assert_eq!(src.raw_key(), b'a' as u16);
        assert_eq!(src.raw_key(), b'b' as u16);
        // Exhausted: escape forever.
        assert_eq!(src.raw_key(), 0x1B);
        assert_eq!(src.raw_key(), 0x1B);
    }
}
