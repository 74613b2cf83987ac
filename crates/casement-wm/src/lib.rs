#![forbid(unsafe_code)]

//! Window management: the capability contract for managed windows, the
//! snapshot-based [`SimpleWindow`], and the [`Manager`] that owns the
//! registry, the compositor, and the input loop.

pub mod manager;
pub mod simple_window;
pub mod window;

pub use manager::{Manager, WindowRecord};
pub use simple_window::{SimpleWindow, Visibility};
pub use window::{BlankWindow, InputSink, Placeable, Renderable, Window, WindowHandle};
