//! # Tile Collision
//!
//! Collision against a level's tile grid, plus plain box overlap.
//!
//! Queries are **post-move**: move the entity first, then ask whether the
//! new box hits anything in the direction it moved. A `true` answer means
//! undo that axis's movement.
//!
//! ```ignore
//! player.x += speed;
//! if console.collision.check(0, player.x, player.y, 16, 16, &level, Direction::Right)? {
//!     player.x -= speed;
//! }
//! ```
//!
//! ## Out-of-bounds policy
//!
//! Tile coordinates outside the grid resolve per axis:
//!
//! | Query      | Off the left/right edge | Above/below the grid |
//! |------------|-------------------------|----------------------|
//! | Left/Right | solid                   | passable             |
//! | Up/Down    | solid                   | solid                |
//!
//! So the sides of the world are walls, an entity can still walk
//! horizontally while partly above or below the grid, but nothing falls or
//! jumps out of it.

pub mod cache;
pub mod engine;
pub mod grid;
pub mod hitbox;

pub use cache::{CollisionCache, EntityCollisionRecord};
pub use engine::Direction;
pub use grid::{EMPTY_TILE, LevelCollisionData, SOLID_TILE};
pub use hitbox::Hitbox;
