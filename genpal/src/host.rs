//! # Host Services
//!
//! The console hardware as seen by this crate. Whatever drives the real
//! machine (SGDK bindings, an emulator frontend, a test double) implements
//! [`Host`], and every subsystem that touches the screen or the pads takes a
//! `&mut impl Host` for the duration of the call.
//!
//! ```ignore
//! impl Host for Sgdk {
//!     type Map = &'static sgdk::Map;
//!     type Sprite = sgdk::SpriteHandle;
//!
//!     fn read_joypad(&mut self, port: Port) -> u16 {
//!         unsafe { sgdk::JOY_readJoypad(port.index() as u16) }
//!     }
//!     // ...
//! }
//! ```

/// Controller port.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Port {
    One,
    Two,
}

impl Port {
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Port::One => 0,
            Port::Two => 1,
        }
    }
}

/// Background scroll plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Plane {
    A,
    B,
}

/// A tilemap the camera can scroll over.
///
/// Sizes are in metatile blocks; see [`metatiles_to_pixels`](crate::metatiles_to_pixels).
pub trait MapHandle {
    fn metatile_width(&self) -> u16;
    fn metatile_height(&self) -> u16;
}

impl<T: MapHandle + ?Sized> MapHandle for &T {
    #[inline(always)]
    fn metatile_width(&self) -> u16 {
        (**self).metatile_width()
    }

    #[inline(always)]
    fn metatile_height(&self) -> u16 {
        (**self).metatile_height()
    }
}

pub trait Host {
    type Map: MapHandle;
    type Sprite;

    /// Raw button word for `port`; see [`Buttons`](crate::Buttons) for the layout.
    fn read_joypad(&mut self, port: Port) -> u16;

    /// Scroll `map` so that pixel `(x, y)` is at the top-left of the screen.
    fn scroll_map(&mut self, map: &Self::Map, x: u32, y: u32);

    fn set_horizontal_scroll(&mut self, plane: Plane, value: i16);

    fn set_vertical_scroll(&mut self, plane: Plane, value: i16);

    /// Place a sprite at a screen position.
    fn set_sprite_position(&mut self, sprite: &mut Self::Sprite, x: i16, y: i16);

    /// Block until the next vertical blank has been processed.
    fn wait_vblank(&mut self);

    /// Draw text on the foreground plane at tile `(x, y)`.
    fn draw_text(&mut self, text: &str, x: u16, y: u16);

    /// Open the window plane `rows` tiles down from the top (or up from the
    /// bottom when `from_bottom`). Zero rows closes it.
    fn set_window_rows(&mut self, from_bottom: bool, rows: u16) {
        let _ = (from_bottom, rows);
    }

    /// Draw text on the window plane at tile `(x, y)`.
    fn draw_window_text(&mut self, text: &str, x: u16, y: u16) {
        self.draw_text(text, x, y);
    }
}
