#![forbid(unsafe_code)]

//! The managed-window contract.
//!
//! A managed window is polymorphic over three capabilities, each with a
//! usable default, and carries no shared base state: the manager tracks
//! geometry in its own [`crate::manager::WindowRecord`].
//!
//! Concrete content types implement the three traits; the umbrella
//! [`Window`] trait is blanket-implemented for anything that does.

use std::cell::RefCell;
use std::rc::Rc;

use casement_core::Key;
use casement_render::{Attr, ImageBuffer};

/// Content rendering capability.
pub trait Renderable {
    /// Render the window content at the given printable size.
    ///
    /// The default renders a blank area; concrete types override this to
    /// draw their own state. The manager calls this on every recomposite,
    /// so the image is rebuilt (or repainted) each frame.
    fn render(&mut self, width: u16, height: u16) -> ImageBuffer {
        ImageBuffer::new(width, height, Attr::DEFAULT, b' ')
    }
}

/// Keystroke handling capability.
pub trait InputSink {
    /// Handle one keystroke.
    ///
    /// Return `true` to consume the key. Return `false` to decline it, in
    /// which case the manager interprets `key` as a window-management
    /// command; a window may rewrite `key` before declining to deliberately
    /// hand the manager a different code. The default declines everything.
    fn process_key(&mut self, key: &mut Key) -> bool {
        let _ = key;
        false
    }
}

/// Geometry negotiation capability.
///
/// The manager must not apply a change the window refused, and after a
/// refusal the tracked geometry stays what the window last accepted.
pub trait Placeable {
    /// Consent to (or refuse) a new top-left position.
    fn reposition(&mut self, row: u16, col: u16) -> bool {
        let _ = (row, col);
        true
    }

    /// Consent to (or refuse) a new size, e.g. refuse below a minimum.
    fn resize(&mut self, width: u16, height: u16) -> bool {
        let _ = (width, height);
        true
    }

    /// 1-based hardware-cursor position inside the printable area.
    fn cursor(&self) -> (u16, u16) {
        (1, 1)
    }
}

/// A managed window: the combined capability set.
pub trait Window: Renderable + InputSink + Placeable {}

impl<T: Renderable + InputSink + Placeable> Window for T {}

/// Shared handle to a managed window.
///
/// The manager's registry holds clones of this handle; the application keeps
/// its own, so dropping the manager never destroys a window.
pub type WindowHandle = Rc<RefCell<dyn Window>>;

/// A content-less window: blank area, declines all keys, accepts any
/// geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankWindow;

impl Renderable for BlankWindow {}
impl InputSink for BlankWindow {}
impl Placeable for BlankWindow {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_blank_and_decline() {
        let mut w = BlankWindow;
        let image = w.render(4, 2);
        assert_eq!((image.width(), image.height()), (4, 2));
        assert_eq!(image.get(1, 1).unwrap().ch, b' ');

        let mut key = Key::byte(b'x');
        assert!(!w.process_key(&mut key));
        assert_eq!(key, Key::byte(b'x'));

        assert!(w.reposition(5, 5));
        assert!(w.resize(10, 10));
        assert_eq!(w.cursor(), (1, 1));
    }

    #[test]
    fn handle_coercion() {
        let handle: WindowHandle = Rc::new(RefCell::new(BlankWindow));
        let mut key = Key::ESC;
        assert!(!handle.borrow_mut().process_key(&mut key));
    }
}
