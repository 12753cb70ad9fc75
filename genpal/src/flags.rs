//! # Bit Flags
//!
//! Bitflag types shared across the crate.
//!
//! ## Buttons
//!
//! Pad state as returned by the joypad port, one bit per button:
//!
//! | Flag     | Bit      |
//! |----------|----------|
//! | `UP`     | `0x0001` |
//! | `DOWN`   | `0x0002` |
//! | `LEFT`   | `0x0004` |
//! | `RIGHT`  | `0x0008` |
//! | `B`      | `0x0010` |
//! | `C`      | `0x0020` |
//! | `A`      | `0x0040` |
//! | `START`  | `0x0080` |
//! | `Z`      | `0x0100` |
//! | `Y`      | `0x0200` |
//! | `X`      | `0x0400` |
//! | `MODE`   | `0x0800` |
//!
//! `X`, `Y`, `Z` and `MODE` only exist on six-button pads.
//!
//! ## CollideFlags
//!
//! Per-entity record of which directions collided the last time they were
//! queried at the cached position.

bitflags::bitflags! {
    /// Pad buttons, laid out the way the joypad read returns them.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u16 {
        const UP    = 0x0001;
        const DOWN  = 0x0002;
        const LEFT  = 0x0004;
        const RIGHT = 0x0008;
        const B     = 0x0010;
        const C     = 0x0020;
        const A     = 0x0040;
        const START = 0x0080;
        const Z     = 0x0100;
        const Y     = 0x0200;
        const X     = 0x0400;
        const MODE  = 0x0800;

        /// D-pad directions.
        const DPAD = Self::UP.bits() | Self::DOWN.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }

    /// Directions that collided on their last query.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct CollideFlags: u8 {
        const DOWN  = 0b0000_0001;
        const UP    = 0b0000_0010;
        const LEFT  = 0b0000_0100;
        const RIGHT = 0b0000_1000;
    }
}

impl Buttons {
    /// Interpret a raw joypad word. Bits above `MODE` are dropped.
    #[inline(always)]
    pub const fn from_raw(raw: u16) -> Self {
        Self::from_bits_truncate(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_pad_word_keeps_known_buttons_only() {
        let b = Buttons::from_raw(0xF041);
        assert_eq!(b, Buttons::A | Buttons::UP);
    }

    #[test]
    fn dpad_covers_all_four_directions() {
        assert!(Buttons::DPAD.contains(Buttons::UP | Buttons::DOWN | Buttons::LEFT | Buttons::RIGHT));
        assert!(!Buttons::DPAD.intersects(Buttons::A | Buttons::START));
    }
}
