/// Tile code for open space.
pub const EMPTY_TILE: u8 = 0;
/// Tile code for a wall.
pub const SOLID_TILE: u8 = 1;

/// A level's collision layer: one tile code per 16×16 tile, row-major.
///
/// `data_length` is stored rather than derived from the slice, and the row
/// count is `data_length / row_length` rounded down, so a trailing partial
/// row is never addressable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LevelCollisionData<'a> {
    pub row_length: u16,
    pub data_length: usize,
    pub collision_data: &'a [u8],
}

impl<'a> LevelCollisionData<'a> {
    pub const fn new(row_length: u16, collision_data: &'a [u8]) -> Self {
        Self {
            row_length,
            data_length: collision_data.len(),
            collision_data,
        }
    }

    /// Number of whole rows. Zero when `row_length` is zero.
    #[inline]
    pub const fn total_rows(&self) -> usize {
        match self.data_length.checked_div(self.row_length as usize) {
            Some(rows) => rows,
            None => 0,
        }
    }

    /// Whether tile `(tx, ty)` is solid.
    ///
    /// Columns outside the grid answer `oob_x_solid`, rows outside it answer
    /// `oob_y_solid`. The column test comes first, so a tile off both axes
    /// takes the column policy. If the index still lands past the data
    /// the tile counts as solid when either policy is.
    pub fn is_tile_solid(&self, tx: i32, ty: i32, oob_x_solid: bool, oob_y_solid: bool) -> bool {
        if tx < 0 || tx >= i32::from(self.row_length) {
            return oob_x_solid;
        }
        if ty < 0 || ty as usize >= self.total_rows() {
            return oob_y_solid;
        }

        let index = ty as usize * usize::from(self.row_length) + tx as usize;
        if index >= self.data_length {
            return oob_x_solid || oob_y_solid;
        }

        match self.collision_data.get(index) {
            Some(&tile) => tile == SOLID_TILE,
            None => oob_x_solid || oob_y_solid,
        }
    }

    /// [`is_tile_solid`](Self::is_tile_solid) with the same policy on both axes.
    #[inline]
    pub fn is_tile_solid_uniform(&self, tx: i32, ty: i32, oob_solid: bool) -> bool {
        self.is_tile_solid(tx, ty, oob_solid, oob_solid)
    }
}
