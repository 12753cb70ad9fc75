//! # Debug Overlay
//!
//! A few rows of text on the window plane, drawn over the top of the game.
//! Enabled with the `debug-overlay` feature (on by default).
//!
//! ```ignore
//! if console.input.pressed(Port::One, Buttons::MODE) {
//!     console.debug.toggle();
//! }
//! console.debug.print_fmt(&mut host, format_args!("x:{} y:{}", player.x, player.y), 0, 0);
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::{config::Config, host::Host};

/// Characters in one row of 8 px tiles across a 320 px screen.
pub const DEBUG_LINE_LEN: usize = 40;

/// Text rows available to the overlay; anything printed below is dropped.
pub const DEBUG_MAX_ROW: u16 = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DebugOverlay {
    enabled: bool,
    window_rows: u16,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl DebugOverlay {
    pub fn new(config: &Config) -> Self {
        Self {
            enabled: config.debug_enabled,
            window_rows: config.debug_window_rows,
        }
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Draw `text` at tile `(x, y)` of the overlay.
    ///
    /// Rows past [`DEBUG_MAX_ROW`] are ignored. While disabled the window
    /// is closed instead.
    pub fn print<H: Host>(&self, host: &mut H, text: &str, x: u16, y: u16) {
        if y > DEBUG_MAX_ROW {
            return;
        }

        if self.enabled {
            host.set_window_rows(false, self.window_rows);
            host.draw_window_text(text, x, y);
        } else {
            host.set_window_rows(false, 0);
        }
    }

    /// [`print`](Self::print) formatted text, cut at [`DEBUG_LINE_LEN`] characters.
    pub fn print_fmt<H: Host>(&self, host: &mut H, args: fmt::Arguments<'_>, x: u16, y: u16) {
        let mut line = Line(String::new());
        // a full buffer only truncates the line
        let _ = line.write_fmt(args);
        self.print(host, &line.0, x, y);
    }
}

/// Fills up to the last character that fits, unlike `heapless::String`'s
/// own writer which drops a whole piece that doesn't.
struct Line(String<DEBUG_LINE_LEN>);

impl Write for Line {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.0.push(c).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
