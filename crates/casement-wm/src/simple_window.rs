#![forbid(unsafe_code)]

//! Unmanaged bordered windows with snapshot save/restore.
//!
//! A [`SimpleWindow`] talks to the display directly, outside any manager.
//! Visibility is driven by two snapshot buffers: `save_data` holds the
//! screen content underneath the window, `hidden` holds the window's own
//! image while it is invisible. Both exist exactly while the window is
//! defined and are dropped on [`SimpleWindow::close`].
//!
//! # State machine
//!
//! ```text
//! Undefined -(open)-> Shown <-(hide/show)-> Hidden -(close)-> Undefined
//! ```

use casement_core::{Region, Result};
use casement_render::{Attr, BorderGlyphs, Display, Draw, ImageBuffer};

/// Visibility state of a [`SimpleWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Not open; no geometry, no snapshots.
    #[default]
    Undefined,
    /// On screen; `save_data` holds the covered background.
    Shown,
    /// Off screen; `hidden` holds the window image, the background is live.
    Hidden,
}

/// An unmanaged bordered rectangle with show/hide semantics.
///
/// ```
/// use casement_harness::TestDisplay;
/// use casement_render::{Attr, BorderGlyphs};
/// use casement_wm::SimpleWindow;
///
/// let mut screen = TestDisplay::new(10, 20);
/// let mut win = SimpleWindow::new();
/// win.open(&mut screen, 2, 2, 8, 4, Attr::DEFAULT, Some(BorderGlyphs::ASCII), Attr::DEFAULT)
///     .unwrap();
/// assert_eq!(screen.row_text(2), " +------+           ");
/// win.close(&mut screen).unwrap();
/// assert_eq!(screen.row_text(2), "                    ");
/// ```
#[derive(Debug)]
pub struct SimpleWindow {
    /// Total geometry, border included.
    region: Region,
    /// Interior geometry; inset by one cell per side when bordered.
    printable: Region,
    border: Option<BorderGlyphs>,
    attr: Attr,
    border_attr: Attr,
    state: Visibility,
    /// Screen content underneath the window. `Some` exactly while defined.
    save_data: Option<ImageBuffer>,
    /// The window's own image while hidden. `Some` exactly while defined.
    hidden: Option<ImageBuffer>,
}

impl Default for SimpleWindow {
    fn default() -> Self {
        Self {
            region: Region::new(1, 1, 1, 1),
            printable: Region::new(1, 1, 1, 1),
            border: None,
            attr: Attr::DEFAULT,
            border_attr: Attr::DEFAULT,
            state: Visibility::Undefined,
            save_data: None,
            hidden: None,
        }
    }
}

impl SimpleWindow {
    /// Create an undefined window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visibility state.
    pub fn visibility(&self) -> Visibility {
        self.state
    }

    /// Whether the window is open (shown or hidden).
    pub fn is_defined(&self) -> bool {
        self.state != Visibility::Undefined
    }

    /// Total geometry, border included. Meaningless while undefined.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Printable interior geometry. Meaningless while undefined.
    pub fn printable(&self) -> Region {
        self.printable
    }

    /// Open the window: snapshot the background, paint interior and border.
    ///
    /// Returns `Ok(false)` without side effects if the window is already
    /// defined. The open is transactional: both snapshot buffers are built
    /// and the background captured before anything is written, so a
    /// `BadRegion` failure leaves the window fully undefined.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        &mut self,
        screen: &mut dyn Display,
        row: u16,
        col: u16,
        width: u16,
        height: u16,
        attr: Attr,
        border: Option<BorderGlyphs>,
        border_attr: Attr,
    ) -> Result<bool> {
        if self.is_defined() {
            return Ok(false);
        }
        let region = Region::new(row, col, width.max(1), height.max(1));
        screen.check_region(region)?;

        // Both buffers exist before the first write reaches the screen.
        let mut save_data = ImageBuffer::blank(region.width, region.height);
        let hidden = ImageBuffer::blank(region.width, region.height);
        save_data.read_from(screen, region.row, region.col)?;

        self.region = region;
        self.printable = if border.is_some() {
            region.inset(1)
        } else {
            region
        };
        self.border = border;
        self.attr = attr;
        self.border_attr = border_attr;
        self.save_data = Some(save_data);
        self.hidden = Some(hidden);

        let image = self.compose_image();
        image.write_to(screen, region.row, region.col)?;
        self.state = Visibility::Shown;
        Ok(true)
    }

    /// The window's own image: cleared interior plus border ring.
    fn compose_image(&self) -> ImageBuffer {
        let mut image = ImageBuffer::new(self.region.width, self.region.height, self.attr, b' ');
        if let Some(glyphs) = self.border {
            image.draw_border(image.bounds(), glyphs, self.border_attr);
        }
        image
    }

    /// Take the window off screen, restoring the saved background.
    ///
    /// Idempotent: hiding a hidden (or undefined) window does nothing.
    pub fn hide(&mut self, screen: &mut dyn Display) -> Result<()> {
        if self.state != Visibility::Shown {
            return Ok(());
        }
        if let (Some(hidden), Some(save)) = (self.hidden.as_mut(), self.save_data.as_ref()) {
            hidden.read_from(screen, self.region.row, self.region.col)?;
            save.write_to(screen, self.region.row, self.region.col)?;
        }
        self.state = Visibility::Hidden;
        Ok(())
    }

    /// Put the window back on screen, re-capturing the background first.
    ///
    /// Idempotent: showing a shown (or undefined) window does nothing.
    pub fn show(&mut self, screen: &mut dyn Display) -> Result<()> {
        if self.state != Visibility::Hidden {
            return Ok(());
        }
        if let (Some(save), Some(hidden)) = (self.save_data.as_mut(), self.hidden.as_ref()) {
            save.read_from(screen, self.region.row, self.region.col)?;
            hidden.write_to(screen, self.region.row, self.region.col)?;
        }
        self.state = Visibility::Shown;
        Ok(())
    }

    /// Move the window so its top-left lands on (row, col).
    ///
    /// A shown window is hidden, moved, and shown again so the visible image
    /// follows; a hidden window just updates its stored coordinates. The
    /// target rectangle must fit the device or `BadRegion` is raised with
    /// nothing changed.
    pub fn move_to(&mut self, screen: &mut dyn Display, row: u16, col: u16) -> Result<()> {
        if !self.is_defined() {
            return Ok(());
        }
        let target = Region::new(row, col, self.region.width, self.region.height);
        screen.check_region(target)?;

        let was_shown = self.state == Visibility::Shown;
        if was_shown {
            self.hide(screen)?;
        }
        self.region = target;
        self.printable = if self.border.is_some() {
            target.inset(1)
        } else {
            target
        };
        if was_shown {
            self.show(screen)?;
        }
        Ok(())
    }

    /// Repaint the interior and redraw the border, preserving visibility.
    pub fn clear(&mut self, screen: &mut dyn Display) -> Result<()> {
        match self.state {
            Visibility::Undefined => Ok(()),
            Visibility::Shown => {
                let image = self.compose_image();
                image.write_to(screen, self.region.row, self.region.col)
            }
            Visibility::Hidden => {
                self.hidden = Some(self.compose_image());
                Ok(())
            }
        }
    }

    /// Change the border's style (and attribute).
    ///
    /// A border's presence is fixed at [`SimpleWindow::open`] because it
    /// determines the printable-area inset; this is a no-op when the window
    /// has no border or `style` is `None`.
    pub fn redraw_border(
        &mut self,
        screen: &mut dyn Display,
        style: Option<BorderGlyphs>,
        attr: Attr,
    ) -> Result<()> {
        let Some(style) = style else { return Ok(()) };
        if self.border.is_none() {
            return Ok(());
        }
        self.border = Some(style);
        self.border_attr = attr;
        match self.state {
            Visibility::Undefined => Ok(()),
            Visibility::Shown => {
                // Preserve the live interior: re-read, restyle the ring only.
                let mut current =
                    ImageBuffer::blank(self.region.width, self.region.height);
                current.read_from(screen, self.region.row, self.region.col)?;
                current.draw_border(current.bounds(), style, attr);
                current.write_to(screen, self.region.row, self.region.col)
            }
            Visibility::Hidden => {
                if let Some(hidden) = self.hidden.as_mut() {
                    let bounds = hidden.bounds();
                    hidden.draw_border(bounds, style, attr);
                }
                Ok(())
            }
        }
    }

    /// Close the window: restore the background and release both snapshots.
    pub fn close(&mut self, screen: &mut dyn Display) -> Result<()> {
        if !self.is_defined() {
            return Ok(());
        }
        self.hide(screen)?;
        self.save_data = None;
        self.hidden = None;
        self.state = Visibility::Undefined;
        Ok(())
    }
}
