#![forbid(unsafe_code)]

//! Input: decoders that turn raw backend input into portable [`Key`] codes.
//!
//! Two interchangeable strategies exist:
//!
//! - [`EscapeDecoder`] for backends that deliver a plain byte stream, where
//!   named keys arrive as multi-byte escape sequences;
//! - [`MappedDecoder`] for backends whose raw primitive already emits
//!   symbolic codes in a reserved numeric band.
//!
//! [`KeyReader`] wraps either strategy behind the blocking `key_wait`
//! interface the window manager consumes.
//!
//! [`Key`]: casement_core::Key

pub mod codes;
pub mod escape;
pub mod mapped;
pub mod reader;

pub use escape::EscapeDecoder;
pub use mapped::MappedDecoder;
pub use reader::KeyReader;
