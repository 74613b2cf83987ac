#![forbid(unsafe_code)]

//! Escape-sequence decoder state machine.
//!
//! Decodes a plain byte stream into portable [`Key`] codes. Ordinary bytes
//! pass straight through; an escape byte opens a pending buffer that is
//! matched against the ordered sequence table after every byte.
//!
//! # Match resolution
//!
//! - Exact table match: that entry's code is returned, having consumed
//!   exactly those bytes.
//! - Proper prefix of at least one entry: keep reading.
//! - Otherwise the match has failed. A failure right after the escape byte
//!   consults the two-stage follow-up tables (digit to function key, letter
//!   to Alt+letter; anything else is [`Key::UNKNOWN`]). Any longer failure
//!   returns the first buffered byte as a literal code and queues the rest
//!   for replay as literals on subsequent calls.
//!
//! No input byte is ever discarded, and no input can produce an error: the
//! worst outcome of an unmapped sequence is a code that looks like a
//! different key.

use std::collections::VecDeque;

use casement_core::{Key, RawSource};
use smallvec::SmallVec;

use crate::codes::{self, ESCAPE};

/// Decoder states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// Ordinary byte input.
    #[default]
    Idle,
    /// Accumulating bytes after an escape byte.
    InEscape,
}

/// Escape-sequence decoder.
///
/// A pure state object: [`EscapeDecoder::feed`] consumes one byte and yields
/// at most one key, so the decoder is testable without any live backend.
///
/// ```
/// use casement_core::Key;
/// use casement_input::EscapeDecoder;
///
/// let mut decoder = EscapeDecoder::new();
/// assert_eq!(decoder.feed(0x1B), None);
/// assert_eq!(decoder.feed(b'['), None);
/// assert_eq!(decoder.feed(b'A'), Some(Key::UP));
/// ```
#[derive(Debug, Default)]
pub struct EscapeDecoder {
    state: State,
    /// Bytes accumulated since the opening escape byte (inclusive).
    pending: SmallVec<[u8; 8]>,
    /// Bytes from a failed match, replayed as literal codes.
    replay: VecDeque<u8>,
}

impl EscapeDecoder {
    /// Create a decoder in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes queued for literal replay.
    pub fn replay_len(&self) -> usize {
        self.replay.len()
    }

    /// Pop the next queued literal, if any.
    ///
    /// Callers must drain the replay queue before reading new input so that
    /// failed-match bytes come out in their original order.
    pub fn next_replay(&mut self) -> Option<Key> {
        self.replay.pop_front().map(Key::byte)
    }

    /// Consume one byte, yielding at most one decoded key.
    ///
    /// A failed multi-byte match yields the first buffered byte and moves
    /// the rest to the replay queue; nothing is dropped.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            State::Idle => {
                if byte == ESCAPE {
                    self.state = State::InEscape;
                    self.pending.clear();
                    self.pending.push(byte);
                    None
                } else {
                    Some(Key::byte(byte))
                }
            }
            State::InEscape => {
                self.pending.push(byte);
                self.resolve()
            }
        }
    }

    /// Match the pending buffer against the sequence table.
    fn resolve(&mut self) -> Option<Key> {
        let pending = &self.pending[..];
        let mut is_prefix = false;
        for (seq, key) in codes::SEQUENCES {
            if *seq == pending {
                #[cfg(feature = "tracing")]
                tracing::trace!(bytes = pending.len(), code = key.raw(), "sequence decoded");
                self.state = State::Idle;
                return Some(*key);
            }
            if seq.len() > pending.len() && seq.starts_with(pending) {
                is_prefix = true;
            }
        }
        if is_prefix {
            return None;
        }
        self.state = State::Idle;

        // Two-stage prefix: exactly escape + one follow-up byte.
        if self.pending.len() == 2 {
            let follow = self.pending[1];
            let key = codes::digit_function(follow)
                .or_else(|| codes::alt_letter(follow))
                .unwrap_or(Key::UNKNOWN);
            return Some(key);
        }

        // Failed mid-sequence: first byte is literal, the rest replays.
        let first = self.pending[0];
        self.replay.extend(self.pending.iter().skip(1).copied());
        #[cfg(feature = "tracing")]
        tracing::trace!(
            replayed = self.replay.len(),
            "sequence match failed, replaying as literals"
        );
        Some(Key::byte(first))
    }

    /// Block on `src` until one key is decoded.
    ///
    /// Drains the replay queue first, then reads one byte at a time; the
    /// decoder never blocks beyond reading the next available byte.
    pub fn key_wait(&mut self, src: &mut dyn RawSource) -> Key {
        if let Some(key) = self.next_replay() {
            return key;
        }
        loop {
            let byte = (src.raw_key() & 0xFF) as u8;
            if let Some(key) = self.feed(byte) {
                return key;
            }
        }
    }
}
