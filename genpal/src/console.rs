use log::error;

use crate::{
    MAX_ENTITIES,
    camera::Camera,
    collision::CollisionCache,
    config::Config,
    host::Host,
    input::Input,
};
#[cfg(feature = "debug-overlay")]
use crate::debug::DebugOverlay;

/// All platform state for one game.
///
/// `M` is the host's map handle type and `N` the number of entities the
/// collision cache tracks. The game owns the console and hands its host to
/// whichever subsystem needs the hardware.
#[derive(Debug, Clone)]
pub struct Console<M, const N: usize = MAX_ENTITIES> {
    pub config: Config,
    pub input: Input,
    pub camera: Camera<M>,
    pub collision: CollisionCache<N>,
    #[cfg(feature = "debug-overlay")]
    pub debug: DebugOverlay,
}

impl<M, const N: usize> Default for Console<M, N> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<M, const N: usize> Console<M, N> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            input: Input::new(),
            camera: Camera::new(&config),
            collision: CollisionCache::new(),
            #[cfg(feature = "debug-overlay")]
            debug: DebugOverlay::new(&config),
        }
    }

    /// Put every subsystem back to its startup state: pads released,
    /// camera inactive at `(0, 0)` with no map, collision records zeroed.
    pub fn init(&mut self) {
        *self = Self::new(self.config);
    }

    /// Show `text` in the top-left corner and stop. For errors the game
    /// can't recover from.
    pub fn halt<H: Host>(&self, host: &mut H, text: &str) -> ! {
        error!("halted: {}", text);
        host.draw_text(text, 0, 0);
        loop {
            core::hint::spin_loop();
        }
    }
}
