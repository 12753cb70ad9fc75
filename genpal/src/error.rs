use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The camera was asked to bind without a map.
    #[error("no map to bind the camera to")]
    NoMap,
    /// A collision query named an entity the cache has no slot for.
    #[error("entity {id} is out of range for a collision cache of {capacity}")]
    EntityOutOfRange { id: usize, capacity: usize },
    /// A raw direction mask that isn't exactly one of UP, DOWN, LEFT or RIGHT.
    #[error("direction mask {0:#06b} is not a single direction")]
    InvalidDirection(u8),
}

pub type Result<T> = core::result::Result<T, Error>;
