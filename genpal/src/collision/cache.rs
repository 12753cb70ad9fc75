use log::trace;

use crate::{
    MAX_ENTITIES,
    collision::{engine::Direction, grid::LevelCollisionData},
    error::{Error, Result},
    flags::CollideFlags,
};

/// What an entity's last collision query saw.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EntityCollisionRecord {
    pub last_x: i16,
    pub last_y: i16,
    pub collide_flags: CollideFlags,
}

impl EntityCollisionRecord {
    pub const fn new() -> Self {
        Self {
            last_x: 0,
            last_y: 0,
            collide_flags: CollideFlags::empty(),
        }
    }

    /// A collision in `direction` is already known at `(x, y)`.
    #[inline]
    pub fn is_cached_hit(&self, x: i16, y: i16, direction: Direction) -> bool {
        self.last_x == x && self.last_y == y && self.collide_flags.contains(direction.flag())
    }

    /// Store the outcome of a query in `direction` at `(x, y)`.
    ///
    /// Only the opposing flag on the same axis is cleared; the other axis
    /// keeps whatever it had.
    #[inline]
    pub fn store(&mut self, x: i16, y: i16, direction: Direction, hit: bool) {
        self.last_x = x;
        self.last_y = y;
        self.collide_flags.remove(direction.opposite().flag());
        self.collide_flags.set(direction.flag(), hit);
    }
}

/// Fixed table of collision records, one slot per entity id.
///
/// Ids run from `0` to `N - 1`. Every slot starts zeroed and lives as long
/// as the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionCache<const N: usize = MAX_ENTITIES> {
    records: [EntityCollisionRecord; N],
}

impl<const N: usize> Default for CollisionCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CollisionCache<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self {
            records: [EntityCollisionRecord::new(); N],
        }
    }

    /// Zero every record, e.g. on level change.
    pub fn reset(&mut self) {
        self.records = [EntityCollisionRecord::new(); N];
    }

    pub fn record(&self, entity: usize) -> Result<&EntityCollisionRecord> {
        self.records.get(entity).ok_or(Error::EntityOutOfRange { id: entity, capacity: N })
    }

    fn record_mut(&mut self, entity: usize) -> Result<&mut EntityCollisionRecord> {
        self.records.get_mut(entity).ok_or(Error::EntityOutOfRange { id: entity, capacity: N })
    }

    /// Post-move tile collision for `entity`.
    ///
    /// `(x, y)` is the top-left of the entity's box *after* it has moved in
    /// `direction`. Returns `Ok(true)` when the box overlaps a solid tile on
    /// its leading edge and the move should be undone.
    ///
    /// A repeat query at an unchanged position that already collided in the
    /// same direction is answered from the record without touching the grid.
    ///
    /// # Errors
    ///
    /// [`Error::EntityOutOfRange`] if `entity >= N`. The table is untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn check(
        &mut self,
        entity: usize,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        level: &LevelCollisionData<'_>,
        direction: Direction,
    ) -> Result<bool> {
        let record = self.record_mut(entity)?;

        if record.is_cached_hit(x, y, direction) {
            return Ok(true);
        }

        let hit = direction.probe(level, x, y, width, height);
        record.store(x, y, direction, hit);

        trace!("entity {} at ({}, {}) moving {:?}: hit = {}", entity, x, y, direction, hit);
        Ok(hit)
    }

    /// [`check`](Self::check) with a raw direction mask (UP=1, DOWN=2, LEFT=4, RIGHT=8).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDirection`] unless exactly one direction bit is set,
    /// otherwise as [`check`](Self::check).
    #[allow(clippy::too_many_arguments)]
    pub fn check_raw(
        &mut self,
        entity: usize,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        level: &LevelCollisionData<'_>,
        direction: u8,
    ) -> Result<bool> {
        let direction = Direction::try_from(direction)?;
        self.check(entity, x, y, width, height, level, direction)
    }
}
