use crate::{TILE_SHIFT, collision::grid::LevelCollisionData, error::Error, flags::CollideFlags};

/// Direction an entity just moved in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn flag(self) -> CollideFlags {
        match self {
            Direction::Up => CollideFlags::UP,
            Direction::Down => CollideFlags::DOWN,
            Direction::Left => CollideFlags::LEFT,
            Direction::Right => CollideFlags::RIGHT,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Test the two tiles under the leading edge of the box at `(x, y)`.
    pub(crate) fn probe(self, level: &LevelCollisionData<'_>, x: i16, y: i16, width: u16, height: u16) -> bool {
        let edges = TileEdges::of(x, y, width, height);

        // columns off the grid are always walls; rows off the grid only stop vertical moves
        let oob_y_solid = !self.is_horizontal();

        let solid = |tx, ty| level.is_tile_solid(tx, ty, true, oob_y_solid);

        match self {
            Direction::Left => solid(edges.left, edges.top) || solid(edges.left, edges.bottom),
            Direction::Right => solid(edges.right, edges.top) || solid(edges.right, edges.bottom),
            Direction::Up => solid(edges.left, edges.top) || solid(edges.right, edges.top),
            Direction::Down => solid(edges.left, edges.bottom) || solid(edges.right, edges.bottom),
        }
    }
}

/// Raw movement masks: UP = 1, DOWN = 2, LEFT = 4, RIGHT = 8.
impl TryFrom<u8> for Direction {
    type Error = Error;

    fn try_from(mask: u8) -> Result<Self, Self::Error> {
        match mask {
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Down),
            4 => Ok(Direction::Left),
            8 => Ok(Direction::Right),
            _ => Err(Error::InvalidDirection(mask)),
        }
    }
}

/// Tile coordinates of a pixel box's four edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct TileEdges {
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl TileEdges {
    fn of(x: i16, y: i16, width: u16, height: u16) -> Self {
        let (x, y) = (i32::from(x), i32::from(y));
        let (w, h) = (i32::from(width), i32::from(height));

        // arithmetic shift floors, so -1 lands in tile -1
        Self {
            left: x >> TILE_SHIFT,
            right: (x + w - 1) >> TILE_SHIFT,
            top: y >> TILE_SHIFT,
            bottom: (y + h - 1) >> TILE_SHIFT,
        }
    }
}
