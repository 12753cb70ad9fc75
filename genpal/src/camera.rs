//! # Camera
//!
//! A single scrolling camera over a bound tilemap.
//!
//! The camera is either **active** (following a target, clamped to the map)
//! or **inactive** (parked, moved only by [`Camera::update_position_directly`]).
//! Binding a map makes it active:
//!
//! ```ignore
//! console.camera.bind_map(Some(&LEVEL_MAP))?;
//!
//! loop {
//!     let target = console.camera.center_on(player.x, player.y).with_sprite(&mut player.sprite);
//!     console.camera.follow_target(&mut host, target);
//!     host.wait_vblank();
//! }
//! ```
//!
//! Positions are the top-left of the screen in map pixels and never go
//! negative.

use log::{debug, trace, warn};

use crate::{
    config::Config,
    error::{Error, Result},
    host::{Host, MapHandle, Plane},
    metatiles_to_pixels,
};

/// Where the camera should look this frame.
///
/// The camera's top-left becomes `world - offset` (before clamping). If a
/// sprite is attached it is moved to the target's screen position.
pub struct CameraTarget<'s, S> {
    pub world_x: i32,
    pub world_y: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub sprite: Option<&'s mut S>,
}

impl<'s, S> CameraTarget<'s, S> {
    pub fn new(world_x: i32, world_y: i32, offset_x: i32, offset_y: i32) -> Self {
        Self {
            world_x,
            world_y,
            offset_x,
            offset_y,
            sprite: None,
        }
    }

    pub fn with_sprite(mut self, sprite: &'s mut S) -> Self {
        self.sprite = Some(sprite);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Camera<M> {
    active: bool,
    map: Option<M>,
    map_width: u32,
    map_height: u32,
    current_x: u32,
    current_y: u32,
    /// in tiles
    max_vertical_scroll: u16,
    screen_width: u16,
    screen_height: u16,
    plane: Plane,
}

impl<M> Default for Camera<M> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl<M> Camera<M> {
    /// Inactive camera at `(0, 0)` with no map.
    pub fn new(config: &Config) -> Self {
        Self {
            active: false,
            map: None,
            map_width: 0,
            map_height: 0,
            current_x: 0,
            current_y: 0,
            max_vertical_scroll: config.max_vertical_scroll,
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            plane: config.scroll_plane,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Resume following targets.
    #[inline]
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stop following targets; direct position updates are accepted while inactive.
    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.current_x, self.current_y)
    }

    /// Bound map size in pixels, `(0, 0)` before the first bind.
    #[inline]
    pub fn map_size(&self) -> (u32, u32) {
        (self.map_width, self.map_height)
    }

    #[inline]
    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    /// Limit on the vertical hardware scroll, in tiles.
    #[inline]
    pub fn vertical_scroll_limit(&self) -> u16 {
        self.max_vertical_scroll
    }

    #[inline]
    pub fn set_vertical_scroll_limit(&mut self, limit: u16) {
        self.max_vertical_scroll = limit;
    }

    /// Furthest top-left the camera can reach. A map smaller than the
    /// screen pins that axis to 0.
    fn max_position(&self) -> (i32, i32) {
        let max_x = self.map_width as i32 - i32::from(self.screen_width);
        let max_y = self.map_height as i32 - i32::from(self.screen_height);
        (max_x.max(0), max_y.max(0))
    }

    /// Target at `(world_x, world_y)` with the offset at the middle of this
    /// camera's screen.
    pub fn center_on<'s, S>(&self, world_x: i32, world_y: i32) -> CameraTarget<'s, S> {
        CameraTarget::new(
            world_x,
            world_y,
            i32::from(self.screen_width / 2),
            i32::from(self.screen_height / 2),
        )
    }

    /// Clamp an entity's top-left so a `width`×`height` box stays on the map.
    pub fn clamp_to_map(&self, x: i32, y: i32, width: u16, height: u16) -> (i32, i32) {
        let max_x = (self.map_width as i32 - i32::from(width)).max(0);
        let max_y = (self.map_height as i32 - i32::from(height)).max(0);
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }
}

impl<M: MapHandle> Camera<M> {
    /// Bind the camera to `map` and activate it.
    ///
    /// The current position is kept; call [`update_position_directly`](Self::update_position_directly)
    /// before binding if the new level should start elsewhere.
    ///
    /// # Errors
    ///
    /// [`Error::NoMap`] when `map` is `None`. The camera is left as it was.
    pub fn bind_map(&mut self, map: Option<M>) -> Result<()> {
        let map = map.ok_or(Error::NoMap)?;

        self.map_width = metatiles_to_pixels(map.metatile_width());
        self.map_height = metatiles_to_pixels(map.metatile_height());
        self.map = Some(map);
        self.active = true;

        debug!("camera bound to {}x{} px map", self.map_width, self.map_height);
        Ok(())
    }

    /// Track `target`, clamped to the map. Does nothing while inactive.
    ///
    /// The background is only rescrolled when the clamped position changes;
    /// an attached sprite is repositioned every call.
    pub fn follow_target<H>(&mut self, host: &mut H, target: CameraTarget<'_, H::Sprite>)
    where
        H: Host<Map = M>,
    {
        if !self.active {
            return;
        }

        let (max_x, max_y) = self.max_position();
        let new_x = target.world_x.saturating_sub(target.offset_x).clamp(0, max_x) as u32;
        let new_y = target.world_y.saturating_sub(target.offset_y).clamp(0, max_y) as u32;

        if (new_x, new_y) != (self.current_x, self.current_y) {
            self.current_x = new_x;
            self.current_y = new_y;
            self.scroll_planes(host);
        }

        if let Some(sprite) = target.sprite {
            let screen_x = i64::from(target.world_x) - i64::from(self.current_x);
            let screen_y = i64::from(target.world_y) - i64::from(self.current_y);
            host.set_sprite_position(sprite, saturate_i16(screen_x), saturate_i16(screen_y));
        }
    }

    /// Move the camera without clamping. Ignored while active, since the
    /// camera is then owned by its target; returns whether it moved.
    pub fn update_position_directly<H>(&mut self, host: &mut H, x: u32, y: u32) -> bool
    where
        H: Host<Map = M>,
    {
        if self.active {
            warn!("direct camera update to ({}, {}) ignored while following", x, y);
            return false;
        }

        self.current_x = x;
        self.current_y = y;
        self.scroll_map(host);
        true
    }

    /// Jolt the camera sideways for `duration` frames, alternating
    /// `+intensity` and `-intensity` pixels around its current spot.
    ///
    /// Following is suspended for the shake and switched back on afterwards.
    /// Each step waits for one vblank.
    pub fn shake<H>(&mut self, host: &mut H, duration: u16, intensity: i16)
    where
        H: Host<Map = M>,
    {
        debug!("camera shake: {} frames, {} px", duration, intensity);

        self.deactivate();
        let (base_x, base_y) = (self.current_x, self.current_y);

        for frame in 0..duration {
            let offset = if frame % 2 == 0 { i32::from(intensity) } else { -i32::from(intensity) };
            self.update_position_directly(host, base_x.saturating_add_signed(offset), base_y);
            host.wait_vblank();
            self.current_x = base_x;
        }

        self.activate();
    }

    fn scroll_map<H>(&self, host: &mut H) -> bool
    where
        H: Host<Map = M>,
    {
        match &self.map {
            Some(map) => {
                host.scroll_map(map, self.current_x, self.current_y);
                true
            }
            None => {
                warn!("camera moved to ({}, {}) with no map bound", self.current_x, self.current_y);
                false
            }
        }
    }

    fn scroll_planes<H>(&self, host: &mut H)
    where
        H: Host<Map = M>,
    {
        if !self.scroll_map(host) {
            return;
        }

        // 8 px per hardware scroll unit; horizontal scroll runs opposite the camera
        let h_scroll = -i64::from(self.current_x) >> 3;
        let v_scroll = i64::from((self.current_y >> 3).min(u32::from(self.max_vertical_scroll)));

        trace!("camera at ({}, {}), plane scroll ({}, {})", self.current_x, self.current_y, h_scroll, v_scroll);

        host.set_horizontal_scroll(self.plane, saturate_i16(h_scroll));
        host.set_vertical_scroll(self.plane, saturate_i16(v_scroll));
    }
}

#[inline]
fn saturate_i16(value: i64) -> i16 {
    value.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16
}
