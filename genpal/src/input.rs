use crate::{
    flags::Buttons,
    host::{Host, Port},
};

/// One controller's current and previous state.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Gamepad {
    pub buttons: Buttons,
    pub buttons_last: Buttons,
}

impl Gamepad {
    pub const fn new() -> Self {
        Self {
            buttons: Buttons::empty(),
            buttons_last: Buttons::empty(),
        }
    }

    /// Shift the current state into the previous slot and store `raw`.
    #[inline(always)]
    pub fn latch(&mut self, raw: u16) {
        self.buttons_last = self.buttons;
        self.buttons = Buttons::from_raw(raw);
    }

    /// Any button in `mask` is held.
    #[inline]
    pub fn is_pressed(&self, mask: Buttons) -> bool {
        self.buttons.intersects(mask)
    }

    /// Any button in `mask` was held on the previous poll.
    #[inline]
    pub fn was_pressed(&self, mask: Buttons) -> bool {
        self.buttons_last.intersects(mask)
    }

    /// Returns true only on the poll where `mask` went from fully up to any
    /// button down (edge-trigger).
    #[inline]
    pub fn just_pressed(&self, mask: Buttons) -> bool {
        self.is_pressed(mask) && !self.was_pressed(mask)
    }

    /// Returns true only on the poll where `mask` went from any button down
    /// to fully up (edge-trigger).
    #[inline]
    pub fn just_released(&self, mask: Buttons) -> bool {
        !self.is_pressed(mask) && self.was_pressed(mask)
    }
}

/// Both controller ports.
///
/// Call [`Input::poll`] once per frame, before any of the queries.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pads: [Gamepad; 2],
}

impl Input {
    pub const fn new() -> Self {
        Self {
            pads: [Gamepad::new(), Gamepad::new()],
        }
    }

    pub fn poll<H: Host>(&mut self, host: &mut H) {
        for port in [Port::One, Port::Two] {
            let raw = host.read_joypad(port);
            self.pads[port.index()].latch(raw);
        }
    }

    #[inline]
    pub fn pad(&self, port: Port) -> &Gamepad {
        &self.pads[port.index()]
    }

    /// `mask` was just pressed on `port`.
    #[inline]
    pub fn pressed(&self, port: Port, mask: Buttons) -> bool {
        self.pad(port).just_pressed(mask)
    }

    /// `mask` was just released on `port`.
    #[inline]
    pub fn released(&self, port: Port, mask: Buttons) -> bool {
        self.pad(port).just_released(mask)
    }

    /// `mask` is currently held on `port`.
    #[inline]
    pub fn down(&self, port: Port, mask: Buttons) -> bool {
        self.pad(port).is_pressed(mask)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
