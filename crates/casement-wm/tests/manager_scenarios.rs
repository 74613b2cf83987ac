//! End-to-end input-loop scenarios against the scripted test display.
//!
//! Each scenario scripts raw input, runs the loop to completion, and checks
//! the composed screen and tracked geometry afterwards. The mapped-decoder
//! scenarios rely on the display yielding the escape byte once the script
//! is drained, which ends the loop; the escape-decoder scenario scripts the
//! byte sequences a terminal would send.

use std::cell::RefCell;
use std::rc::Rc;

use casement_core::Key;
use casement_harness::TestDisplay;
use casement_input::KeyReader;
use casement_render::{Attr, BorderGlyphs, ImageBuffer};
use casement_wm::{
    BlankWindow, InputSink, Manager, Placeable, Renderable, WindowHandle,
};

const RIGHT: u16 = 0x14D;
const TAB: u16 = 0x09;
const CTRL_RIGHT: u16 = 0x174;
const CTRL_UP: u16 = 0x18D;

fn mapped_manager(rows: u16, cols: u16) -> Manager<TestDisplay> {
    Manager::new(TestDisplay::new(rows, cols), KeyReader::mapped()).unwrap()
}

/// Window that paints a uniform fill character.
struct FillWindow {
    ch: u8,
    cursor: (u16, u16),
}

impl FillWindow {
    fn handle(ch: u8) -> WindowHandle {
        Rc::new(RefCell::new(FillWindow {
            ch,
            cursor: (1, 1),
        }))
    }
}

impl Renderable for FillWindow {
    fn render(&mut self, width: u16, height: u16) -> ImageBuffer {
        ImageBuffer::new(width, height, Attr::DEFAULT, self.ch)
    }
}
impl InputSink for FillWindow {}
impl Placeable for FillWindow {
    fn cursor(&self) -> (u16, u16) {
        self.cursor
    }
}

#[test]
fn declined_arrows_move_the_foreground_window() {
    let mut mgr = mapped_manager(25, 80);
    let win: WindowHandle = Rc::new(RefCell::new(BlankWindow));
    assert!(mgr.register_window(&win, 2, 2, 10, 5));

    mgr.display().script([RIGHT, RIGHT, RIGHT]);
    mgr.input_loop().unwrap();

    let rec = mgr.foreground().unwrap();
    assert_eq!((rec.region().row, rec.region().col), (2, 5));
    assert_eq!((rec.region().width, rec.region().height), (10, 5));

    // The composed screen shows the window at its new position: interior at
    // (2,5), double ring one cell outside it.
    let screen = mgr.display();
    assert_eq!(screen.cell(2, 5).unwrap().ch, b' ');
    assert_eq!(screen.cell(1, 4).unwrap().ch, BorderGlyphs::DOUBLE.top_left);
    assert_eq!(screen.cursor(), (2, 5));
}

#[test]
fn moves_stop_at_the_screen_edge() {
    let mut mgr = mapped_manager(25, 80);
    let win: WindowHandle = Rc::new(RefCell::new(BlankWindow));
    assert!(mgr.register_window(&win, 1, 75, 6, 3));

    // Far more right-arrows than there is room for.
    mgr.display().script([RIGHT; 20]);
    mgr.input_loop().unwrap();

    let rec = mgr.foreground().unwrap();
    assert_eq!(rec.region().col, 75);
    assert!(rec.region().fits_within(25, 80));
}

#[test]
fn tab_rotates_z_order_and_reparks_the_cursor() {
    let mut mgr = mapped_manager(25, 80);
    let a: WindowHandle = Rc::new(RefCell::new(FillWindow {
        ch: b'a',
        cursor: (2, 3),
    }));
    let b = FillWindow::handle(b'b');
    assert!(mgr.register_window(&a, 4, 4, 8, 4));
    assert!(mgr.register_window(&b, 6, 6, 8, 4));

    mgr.display().script([TAB]);
    mgr.input_loop().unwrap();

    // `a` is foreground again; the cursor sits at its (2,3), device (5,6).
    let rec = mgr.foreground().unwrap();
    assert!(Rc::ptr_eq(rec.window(), &a));
    assert_eq!(mgr.display().cursor(), (5, 6));
    // Foreground content overdraws the other window where they overlap.
    assert_eq!(mgr.display().cell(6, 6).unwrap().ch, b'a');
}

#[test]
fn overlap_composes_back_to_front() {
    let mut mgr = mapped_manager(25, 80);
    let back = FillWindow::handle(b'x');
    let front = FillWindow::handle(b'o');
    assert!(mgr.register_window(&back, 3, 3, 10, 5));
    assert!(mgr.register_window(&front, 5, 8, 10, 5));
    mgr.update_display().unwrap();

    let screen = mgr.display();
    assert_eq!(screen.cell(3, 3).unwrap().ch, b'x');
    assert_eq!(screen.cell(5, 8).unwrap().ch, b'o');
    // Overlapped area belongs to the foreground.
    assert_eq!(screen.cell(6, 9).unwrap().ch, b'o');
    // Foreground ring bright double, background ring plain single.
    assert!(screen.cell(4, 7).unwrap().attr.is_bright());
    assert_eq!(screen.cell(2, 2).unwrap().ch, BorderGlyphs::SINGLE.top_left);
    assert!(!screen.cell(2, 2).unwrap().attr.is_bright());
}

/// Window pinned to the size it was created with.
struct FixedSize {
    width: u16,
    height: u16,
}

impl Renderable for FixedSize {}
impl InputSink for FixedSize {}
impl Placeable for FixedSize {
    fn resize(&mut self, width: u16, height: u16) -> bool {
        width == self.width && height == self.height
    }
}

#[test]
fn refused_resize_leaves_tracked_geometry_alone() {
    let mut mgr = mapped_manager(25, 80);
    let win: WindowHandle = Rc::new(RefCell::new(FixedSize {
        width: 10,
        height: 5,
    }));
    assert!(mgr.register_window(&win, 2, 2, 10, 5));

    mgr.display().script([CTRL_RIGHT, CTRL_RIGHT, CTRL_UP]);
    mgr.input_loop().unwrap();

    assert_eq!(mgr.get_size(&win), Some((10, 5)));
    let rec = mgr.foreground().unwrap();
    assert_eq!((rec.region().row, rec.region().col), (2, 2));
}

/// Window that consumes letters and turns `q` into an exit request.
struct Rewriter {
    seen: Vec<Key>,
}

impl Renderable for Rewriter {}
impl Placeable for Rewriter {}
impl InputSink for Rewriter {
    fn process_key(&mut self, key: &mut Key) -> bool {
        if *key == Key::byte(b'q') {
            *key = Key::ESC;
            return false;
        }
        self.seen.push(*key);
        true
    }
}

#[test]
fn declining_with_a_rewritten_code_drives_the_manager() {
    let mut mgr = Manager::new(TestDisplay::new(25, 80), KeyReader::escape()).unwrap();
    let rewriter = Rc::new(RefCell::new(Rewriter { seen: Vec::new() }));
    let win: WindowHandle = rewriter.clone();
    assert!(mgr.register_window(&win, 2, 2, 10, 5));

    // Two letters consumed by the window, then `q` rewritten to the exit
    // code. The loop must end before the script runs dry.
    mgr.display().script_bytes(b"hiq");
    mgr.input_loop().unwrap();
    assert_eq!(mgr.display().script_remaining(), 0);
    assert_eq!(
        rewriter.borrow().seen,
        vec![Key::byte(b'h'), Key::byte(b'i')]
    );
}

#[test]
fn system_mode_bypasses_the_window() {
    let mut mgr = mapped_manager(25, 80);
    let win: WindowHandle = Rc::new(RefCell::new(Rewriter { seen: Vec::new() }));
    assert!(mgr.register_window(&win, 2, 2, 10, 5));
    mgr.set_system_mode(true);

    // In system mode the arrow is a manager command even though the window
    // consumes keys.
    mgr.display().script([RIGHT]);
    mgr.input_loop().unwrap();
    assert_eq!(mgr.foreground().unwrap().region().col, 3);
}

#[test]
fn deregistered_window_disappears_from_the_screen() {
    let mut mgr = mapped_manager(25, 80);
    let win = FillWindow::handle(b'#');
    assert!(mgr.register_window(&win, 3, 3, 6, 3));
    mgr.update_display().unwrap();
    assert_eq!(mgr.display().cell(3, 3).unwrap().ch, b'#');

    mgr.deregister_window(&win).unwrap();
    assert!(!mgr.is_registered(&win));
    assert_eq!(mgr.display().cell(3, 3).unwrap().ch, b' ');
    assert_eq!(mgr.display().cursor(), (1, 1));
}
