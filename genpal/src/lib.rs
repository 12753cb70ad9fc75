//! # genpal
//!
//! Platform layer for 2D tile games on the Sega Genesis / Mega Drive.
//!
//! Three services sit between game logic and the console:
//!
//! - [`input`]: two-port pad polling with edge detection
//! - [`camera`]: map-bound camera follow, clamping and shake
//! - [`collision`]: tile collision against a level grid, cached per entity
//!
//! Everything the hardware does (reading pads, scrolling planes, moving
//! sprites, waiting for vblank) goes through the [`Host`] trait, and all
//! state lives in a [`Console`] owned by the game:
//!
//! ```ignore
//! let mut console: Console<&'static Map> = Console::new(Config::default());
//! console.camera.bind_map(Some(&LEVEL_1_MAP))?;
//!
//! loop {
//!     console.input.poll(&mut host);
//!
//!     if console.input.down(Port::One, Buttons::LEFT) {
//!         player.x -= 1;
//!         if console.collision.check(0, player.x, player.y, 16, 16, &LEVEL_1, Direction::Left)? {
//!             player.x += 1;
//!         }
//!     }
//!
//!     let target = console.camera.center_on(player.x.into(), player.y.into());
//!     console.camera.follow_target(&mut host, target);
//!     host.wait_vblank();
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod camera;
pub mod collision;
pub mod config;
pub mod console;
#[cfg(feature = "debug-overlay")]
pub mod debug;
pub mod error;
pub mod flags;
pub mod host;
pub mod input;

pub use camera::{Camera, CameraTarget};
pub use collision::{CollisionCache, Direction, Hitbox, LevelCollisionData};
pub use config::Config;
pub use console::Console;
pub use error::{Error, Result};
pub use flags::{Buttons, CollideFlags};
pub use host::{Host, MapHandle, Plane, Port};
pub use input::Input;

/// Visible screen width in pixels.
pub const SCREEN_WIDTH: u16 = 320;
/// Visible screen height in pixels.
pub const SCREEN_HEIGHT: u16 = 224;

/// Collision tiles are 16×16 pixels.
pub const TILE_SHIFT: u32 = 4;

/// Number of entities tracked by the collision cache by default.
pub const MAX_ENTITIES: usize = 2;

/// Each metatile is 16×16 pixels and maps are laid out in 128×128 pixel
/// blocks of 8×8 metatiles, so one map unit is 128 pixels.
#[inline(always)]
pub const fn metatiles_to_pixels(metatiles: u16) -> u32 {
    (metatiles as u32) << 7
}
