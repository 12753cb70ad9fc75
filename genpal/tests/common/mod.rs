#![allow(dead_code)]

use genpal::{Host, MapHandle, Plane, Port};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestMap {
    pub w: u16,
    pub h: u16,
}

impl MapHandle for TestMap {
    fn metatile_width(&self) -> u16 {
        self.w
    }

    fn metatile_height(&self) -> u16 {
        self.h
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TestSprite {
    pub x: i16,
    pub y: i16,
    pub moves: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ScrollMap(u32, u32),
    HScroll(Plane, i16),
    VScroll(Plane, i16),
    VBlank,
    Text(String, u16, u16),
    WindowRows(bool, u16),
    WindowText(String, u16, u16),
}

/// Records every hardware call in order and serves scripted pad words.
#[derive(Debug, Default)]
pub struct MockHost {
    pub pads: [u16; 2],
    pub calls: Vec<Call>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pads(&mut self, one: u16, two: u16) {
        self.pads = [one, two];
    }

    pub fn scrolls(&self) -> Vec<(u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::ScrollMap(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn vblanks(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::VBlank).count()
    }
}

impl Host for MockHost {
    type Map = TestMap;
    type Sprite = TestSprite;

    fn read_joypad(&mut self, port: Port) -> u16 {
        self.pads[port.index()]
    }

    fn scroll_map(&mut self, _map: &TestMap, x: u32, y: u32) {
        self.calls.push(Call::ScrollMap(x, y));
    }

    fn set_horizontal_scroll(&mut self, plane: Plane, value: i16) {
        self.calls.push(Call::HScroll(plane, value));
    }

    fn set_vertical_scroll(&mut self, plane: Plane, value: i16) {
        self.calls.push(Call::VScroll(plane, value));
    }

    fn set_sprite_position(&mut self, sprite: &mut TestSprite, x: i16, y: i16) {
        sprite.x = x;
        sprite.y = y;
        sprite.moves += 1;
    }

    fn wait_vblank(&mut self) {
        self.calls.push(Call::VBlank);
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16) {
        self.calls.push(Call::Text(text.to_owned(), x, y));
    }

    fn set_window_rows(&mut self, from_bottom: bool, rows: u16) {
        self.calls.push(Call::WindowRows(from_bottom, rows));
    }

    fn draw_window_text(&mut self, text: &str, x: u16, y: u16) {
        self.calls.push(Call::WindowText(text.to_owned(), x, y));
    }
}

/// 8×8 test level, 16 px tiles:
///
/// ```text
/// # # # # # # # #
/// # . . . . . . #
/// # . # # # # . #
/// # . # . . # . #
/// # . # . . # . #
/// # . # # # # . #
/// # . . . . . . #
/// # # # # # # # #
/// ```
pub const ROOMS: [u8; 64] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 1, 1, 1, 1, 0, 1,
    1, 0, 1, 0, 0, 1, 0, 1,
    1, 0, 1, 0, 0, 1, 0, 1,
    1, 0, 1, 1, 1, 1, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

/// 8×8 level with a solid border and an empty interior.
pub const BORDER: [u8; 64] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];
