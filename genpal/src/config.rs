use crate::{SCREEN_HEIGHT, SCREEN_WIDTH, host::Plane};

/// Runtime settings for a [`Console`](crate::Console).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub screen_width: u16,
    pub screen_height: u16,
    /// Upper bound on the vertical hardware scroll written by the camera, in tiles.
    pub max_vertical_scroll: u16,
    /// Background plane the camera scrolls.
    pub scroll_plane: Plane,
    /// Height of the window plane opened for debug text, in tile rows.
    pub debug_window_rows: u16,
    pub debug_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            max_vertical_scroll: 32,
            scroll_plane: Plane::B,
            debug_window_rows: 5,
            debug_enabled: true,
        }
    }
}
