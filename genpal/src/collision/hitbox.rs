/// Axis-aligned box in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Hitbox {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Hitbox {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Boxes that only share an edge don't overlap.
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        let (ax, ay, aw, ah) = (u32::from(self.x), u32::from(self.y), u32::from(self.w), u32::from(self.h));
        let (bx, by, bw, bh) = (u32::from(other.x), u32::from(other.y), u32::from(other.w), u32::from(other.h));

        ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
    }
}
