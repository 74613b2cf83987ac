#![forbid(unsafe_code)]

//! Casement public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the member crates and offers a lightweight
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use casement_core::{Error, Key, RawSource, Region, Result};

// --- Render re-exports -----------------------------------------------------

pub use casement_render::{Attr, BorderGlyphs, Cell, Color, Display, Draw, ImageBuffer};

// --- Input re-exports ------------------------------------------------------

pub use casement_input::{EscapeDecoder, KeyReader, MappedDecoder};

// --- Window-management re-exports ------------------------------------------

pub use casement_wm::{
    BlankWindow, InputSink, Manager, Placeable, Renderable, SimpleWindow, Visibility, Window,
    WindowHandle, WindowRecord,
};

// --- Harness ---------------------------------------------------------------

#[cfg(feature = "harness")]
pub use casement_harness::TestDisplay;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Attr, Cell, Color, Display, Draw, Error, ImageBuffer, InputSink, Key, KeyReader, Manager,
        Placeable, Region, Renderable, Result, SimpleWindow, Window, WindowHandle,
    };

    pub use crate::{input, render, wm};
}

pub use casement_core as core;
pub use casement_input as input;
pub use casement_render as render;
pub use casement_wm as wm;
