#![forbid(unsafe_code)]

//! Window registry, compositor, and input loop.
//!
//! The [`Manager`] owns the backend and a z-ordered registry of window
//! handles; the last registry entry is the foreground window. Every frame is
//! composed back-to-front into one screen-sized buffer and written to the
//! device in a single blit, and the loop recomposes before every blocking
//! read, so the user always sees current state before being asked to act.
//!
//! Single-threaded and cooperative: the only suspension point is the
//! blocking key read inside the loop. The registry is mutated only here
//! (single writer), and the manager never exclusively owns a window — the
//! application keeps its own handle and drops it when it chooses.

use casement_core::{Key, RawSource, Region, Result};
use casement_input::KeyReader;
use casement_render::{Attr, BorderGlyphs, Cell, Display, ImageBuffer};
use std::rc::Rc;

use crate::window::WindowHandle;

/// Bookkeeping for one registered window.
///
/// The tracked region is the window's printable rectangle; its decorative
/// border ring sits just outside and is clipped at the screen edges. The
/// geometry always mirrors what the window last accepted.
pub struct WindowRecord {
    window: WindowHandle,
    region: Region,
}

impl WindowRecord {
    /// Handle to the window itself.
    pub fn window(&self) -> &WindowHandle {
        &self.window
    }

    /// The geometry the window last accepted.
    pub fn region(&self) -> Region {
        self.region
    }
}

/// Registered global hotkey.
struct Hotkey {
    key: Key,
    callback: Box<dyn FnMut()>,
}

/// The compositor and input-loop driver.
///
/// Construction opens the backend; [`Manager::input_loop`] is called exactly
/// once from the application entry point and returns when `ESC` is pressed
/// in manager-command context.
pub struct Manager<B: Display + RawSource> {
    backend: B,
    reader: KeyReader,
    registry: Vec<WindowRecord>,
    hotkeys: Vec<Hotkey>,
    system_mode: bool,
    mode_key: Key,
    background: Cell,
    frame: ImageBuffer,
}

impl<B: Display + RawSource> Manager<B> {
    /// Default key that toggles system mode.
    pub const DEFAULT_MODE_KEY: Key = Key::function(12);

    /// Open the backend and build an empty manager.
    ///
    /// Returns `None` when the backend reports it is unavailable.
    pub fn new(mut backend: B, reader: KeyReader) -> Option<Self> {
        if !backend.open() {
            return None;
        }
        let frame = ImageBuffer::blank(backend.columns(), backend.rows());
        #[cfg(feature = "tracing")]
        tracing::info!(
            rows = backend.rows(),
            cols = backend.columns(),
            "display opened"
        );
        Some(Self {
            backend,
            reader,
            registry: Vec::new(),
            hotkeys: Vec::new(),
            system_mode: false,
            mode_key: Self::DEFAULT_MODE_KEY,
            background: Cell::BLANK,
            frame,
        })
    }

    /// The backend, for direct drawing outside the managed registry.
    pub fn display(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Number of registered windows.
    pub fn window_count(&self) -> usize {
        self.registry.len()
    }

    /// The current foreground record, if any.
    pub fn foreground(&self) -> Option<&WindowRecord> {
        self.registry.last()
    }

    /// Whether the manager currently tracks this window.
    pub fn is_registered(&self, window: &WindowHandle) -> bool {
        self.registry
            .iter()
            .any(|rec| Rc::ptr_eq(&rec.window, window))
    }

    /// Whether keystrokes are being interpreted as manager commands.
    pub fn system_mode(&self) -> bool {
        self.system_mode
    }

    /// Force system mode on or off.
    pub fn set_system_mode(&mut self, on: bool) {
        self.system_mode = on;
    }

    /// Replace the key that toggles system mode.
    pub fn set_mode_key(&mut self, key: Key) {
        self.mode_key = key;
    }

    /// Replace the backdrop cell painted under all windows.
    pub fn set_background(&mut self, cell: Cell) {
        self.background = cell;
    }

    /// Register a callback invoked whenever `key` arrives, before any other
    /// dispatch. A second registration for the same key replaces the first.
    pub fn register_hotkey<F: FnMut() + 'static>(&mut self, key: Key, callback: F) {
        self.hotkeys.retain(|hk| hk.key != key);
        self.hotkeys.push(Hotkey {
            key,
            callback: Box::new(callback),
        });
    }

    /// Control whether [`Manager::key`] recomposes the frame first.
    pub fn refresh_on_key(&mut self, flag: bool) {
        self.reader.refresh_on_key(flag);
    }

    /// Track a window at the requested geometry.
    ///
    /// The rectangle is clamped to the device and to at least 1x1, then the
    /// window is asked to consent via `reposition` and `resize`. On consent
    /// the window joins the back of the registry as the new foreground and
    /// `true` is returned; on refusal (or an already-registered window)
    /// nothing is tracked and `false` is returned.
    pub fn register_window(
        &mut self,
        window: &WindowHandle,
        row: u16,
        col: u16,
        width: u16,
        height: u16,
    ) -> bool {
        if self.is_registered(window) {
            return false;
        }
        let region =
            Region::new(row, col, width, height).clamp_to(self.backend.rows(), self.backend.columns());
        let accepted = {
            let mut win = window.borrow_mut();
            win.reposition(region.row, region.col) && win.resize(region.width, region.height)
        };
        if !accepted {
            #[cfg(feature = "tracing")]
            tracing::debug!(%region, "window refused registration geometry");
            return false;
        }
        self.registry.push(WindowRecord {
            window: Rc::clone(window),
            region,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(%region, windows = self.registry.len(), "window registered");
        true
    }

    /// Stop tracking a window and recomposite.
    ///
    /// Silently does nothing for a window that was never accepted.
    pub fn deregister_window(&mut self, window: &WindowHandle) -> Result<()> {
        let before = self.registry.len();
        self.registry.retain(|rec| !Rc::ptr_eq(&rec.window, window));
        if self.registry.len() != before {
            self.update_display()?;
        }
        Ok(())
    }

    /// The tracked size of a window, or `None` if it is not registered.
    pub fn get_size(&self, window: &WindowHandle) -> Option<(u16, u16)> {
        self.registry
            .iter()
            .find(|rec| Rc::ptr_eq(&rec.window, window))
            .map(|rec| (rec.region.width, rec.region.height))
    }

    /// Rotate the foreground window to the bottom of the z-order; the next
    /// window becomes foreground. Callable equivalent of the `TAB` command.
    pub fn swap_top(&mut self) {
        if self.registry.len() > 1 {
            self.registry.rotate_right(1);
        }
    }

    /// Recomposite the whole screen.
    ///
    /// Clears the backdrop, renders every window back-to-front at its
    /// recorded position with a single-line border ring, restyles the
    /// foreground's ring double and bright, parks the hardware cursor over
    /// the foreground window's cursor position, and flushes the device.
    pub fn update_display(&mut self) -> Result<()> {
        self.frame.clear(self.background.attr, self.background.ch);
        let last = self.registry.len().saturating_sub(1);
        for (i, rec) in self.registry.iter().enumerate() {
            let image = rec
                .window
                .borrow_mut()
                .render(rec.region.width, rec.region.height);
            self.frame.blit(&image, rec.region.row, rec.region.col);
            let (glyphs, attr) = if i == last {
                (BorderGlyphs::DOUBLE, Attr::DEFAULT.with_bright(true))
            } else {
                (BorderGlyphs::SINGLE, Attr::DEFAULT)
            };
            draw_border_ring(&mut self.frame, rec.region, glyphs, attr);
        }

        match self.registry.last() {
            Some(rec) => {
                let (cursor_row, cursor_col) = rec.window.borrow().cursor();
                self.backend.set_cursor(
                    rec.region.row + cursor_row - 1,
                    rec.region.col + cursor_col - 1,
                );
            }
            None => self.backend.set_cursor(1, 1),
        }

        self.frame.write_to(&mut self.backend, 1, 1)?;
        self.backend.refresh();
        #[cfg(feature = "tracing")]
        tracing::trace!(windows = self.registry.len(), "frame composed");
        Ok(())
    }

    /// Read one decoded key, recomposing first when `refresh_on_key` is on.
    pub fn key(&mut self) -> Result<Key> {
        if self.reader.wants_refresh() {
            self.update_display()?;
        }
        Ok(self.reader.key_wait(&mut self.backend))
    }

    /// Run the interactive loop until `ESC` is received in manager-command
    /// context.
    ///
    /// Per keystroke, in order: global hotkeys, the system-mode toggle key,
    /// the foreground window's keystroke handler, and finally the manager
    /// commands (`ESC` exit, arrows move, Ctrl-arrows resize, `TAB` rotate).
    /// `ESC` also exits when no window is registered.
    pub fn input_loop(&mut self) -> Result<()> {
        loop {
            self.update_display()?;
            let key = self.reader.key_wait(&mut self.backend);

            if let Some(hotkey) = self.hotkeys.iter_mut().find(|hk| hk.key == key) {
                (hotkey.callback)();
                continue;
            }
            if key == self.mode_key {
                self.system_mode = !self.system_mode;
                continue;
            }

            let mut code = key;
            if !self.registry.is_empty() {
                let handle_key = self.system_mode || {
                    let fg = &self.registry[self.registry.len() - 1];
                    !fg.window.borrow_mut().process_key(&mut code)
                };
                if !handle_key {
                    continue;
                }
            }

            match code {
                Key::ESC => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("input loop exiting");
                    return Ok(());
                }
                Key::UP => self.move_foreground(-1, 0),
                Key::DOWN => self.move_foreground(1, 0),
                Key::LEFT => self.move_foreground(0, -1),
                Key::RIGHT => self.move_foreground(0, 1),
                Key::CTRL_UP => self.resize_foreground(0, -1),
                Key::CTRL_DOWN => self.resize_foreground(0, 1),
                Key::CTRL_LEFT => self.resize_foreground(-1, 0),
                Key::CTRL_RIGHT => self.resize_foreground(1, 0),
                Key::TAB => self.swap_top(),
                _ => {}
            }
        }
    }

    /// Move the foreground window by one cell, clamped to stay on screen,
    /// only if the window consents.
    fn move_foreground(&mut self, row_delta: i32, col_delta: i32) {
        let rows = self.backend.rows();
        let cols = self.backend.columns();
        let Some(rec) = self.registry.last_mut() else {
            return;
        };
        let new_row = shift_clamped(rec.region.row, row_delta, rows - rec.region.height + 1);
        let new_col = shift_clamped(rec.region.col, col_delta, cols - rec.region.width + 1);
        if (new_row, new_col) == (rec.region.row, rec.region.col) {
            return;
        }
        if rec.window.borrow_mut().reposition(new_row, new_col) {
            rec.region.row = new_row;
            rec.region.col = new_col;
        }
    }

    /// Grow or shrink the foreground window by one cell, clamped to the
    /// screen and to 1x1, only if the window consents.
    fn resize_foreground(&mut self, width_delta: i32, height_delta: i32) {
        let rows = self.backend.rows();
        let cols = self.backend.columns();
        let Some(rec) = self.registry.last_mut() else {
            return;
        };
        let new_width = shift_clamped(rec.region.width, width_delta, cols - rec.region.col + 1);
        let new_height = shift_clamped(rec.region.height, height_delta, rows - rec.region.row + 1);
        if (new_width, new_height) == (rec.region.width, rec.region.height) {
            return;
        }
        if rec.window.borrow_mut().resize(new_width, new_height) {
            rec.region.width = new_width;
            rec.region.height = new_height;
        }
    }

    /// Release every window handle and close the backend.
    pub fn close(&mut self) {
        self.registry.clear();
        self.backend.close();
        #[cfg(feature = "tracing")]
        tracing::info!("display closed");
    }
}

/// Apply a +/-1 style delta to a 1-based coordinate, clamped to `1..=max`.
fn shift_clamped(value: u16, delta: i32, max: u16) -> u16 {
    let shifted = value as i32 + delta;
    shifted.clamp(1, max.max(1) as i32) as u16
}

/// Draw a border ring just outside `region`, clipped at the frame edges
/// without ever overdrawing the region itself.
fn draw_border_ring(frame: &mut ImageBuffer, region: Region, glyphs: BorderGlyphs, attr: Attr) {
    // Row/col 0 never exists in 1-based space, so a ring edge that would
    // land there is silently clipped by `set`, as are edges past the frame.
    let top = region.row - 1;
    let bottom = region.bottom() + 1;
    let left = region.col - 1;
    let right = region.right() + 1;

    for col in region.col..=region.right() {
        frame.set(top, col, Cell::new(glyphs.horizontal, attr));
        frame.set(bottom, col, Cell::new(glyphs.horizontal, attr));
    }
    for row in region.row..=region.bottom() {
        frame.set(row, left, Cell::new(glyphs.vertical, attr));
        frame.set(row, right, Cell::new(glyphs.vertical, attr));
    }
    frame.set(top, left, Cell::new(glyphs.top_left, attr));
    frame.set(top, right, Cell::new(glyphs.top_right, attr));
    frame.set(bottom, left, Cell::new(glyphs.bottom_left, attr));
    frame.set(bottom, right, Cell::new(glyphs.bottom_right, attr));
}
