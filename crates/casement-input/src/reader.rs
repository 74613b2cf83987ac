#![forbid(unsafe_code)]

//! Front-end over the two decode strategies.

use casement_core::{Key, RawSource};

use crate::escape::EscapeDecoder;
use crate::mapped::MappedDecoder;

/// The decode strategy a [`KeyReader`] runs.
#[derive(Debug)]
enum Strategy {
    Mapped(MappedDecoder),
    Escape(EscapeDecoder),
}

/// Blocking key reader over either decode strategy.
///
/// The window manager owns one of these and calls [`KeyReader::key_wait`]
/// from its input loop. Application code reading keys outside the loop uses
/// [`KeyReader::key`], which can force a display recompose before blocking
/// so the user always sees current state before being asked to act.
#[derive(Debug)]
pub struct KeyReader {
    strategy: Strategy,
    refresh_on_key: bool,
}

impl KeyReader {
    /// Reader for a plain byte-stream backend.
    #[must_use]
    pub fn escape() -> Self {
        Self {
            strategy: Strategy::Escape(EscapeDecoder::new()),
            refresh_on_key: true,
        }
    }

    /// Reader for a backend that emits pre-translated symbolic codes.
    #[must_use]
    pub fn mapped() -> Self {
        Self {
            strategy: Strategy::Mapped(MappedDecoder::new()),
            refresh_on_key: true,
        }
    }

    /// Control whether [`KeyReader::key`] recomposes the display first.
    pub fn refresh_on_key(&mut self, flag: bool) {
        self.refresh_on_key = flag;
    }

    /// Whether [`KeyReader::key`] will recompose before blocking.
    pub fn wants_refresh(&self) -> bool {
        self.refresh_on_key
    }

    /// Block until one decoded key is available.
    pub fn key_wait(&mut self, src: &mut dyn RawSource) -> Key {
        match &mut self.strategy {
            Strategy::Mapped(decoder) => decoder.key_wait(src),
            Strategy::Escape(decoder) => decoder.key_wait(src),
        }
    }

    /// Read one key, optionally recomposing the display first.
    pub fn key(&mut self, src: &mut dyn RawSource, recompose: impl FnOnce()) -> Key {
        if self.refresh_on_key {
            recompose();
        }
        self.key_wait(src)
    }
}
