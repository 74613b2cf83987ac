#![forbid(unsafe_code)]

//! Render: the 2-byte character cell, image buffers, border drawing, and
//! the display backend contract.

pub mod backend;
pub mod border;
pub mod cell;
pub mod image;

pub use backend::Display;
pub use border::{BorderGlyphs, Draw};
pub use cell::{Attr, Cell, Color};
pub use image::ImageBuffer;
