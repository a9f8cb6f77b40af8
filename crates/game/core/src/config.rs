use std::time::Duration;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause between two frames of a scripted animation.
    pub frame_delay: Duration,
    /// Pause after a transition rule fired, before the settled frame is drawn.
    pub settle_delay: Duration,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Visible columns of the world.
    pub const VIEWPORT_WIDTH: usize = 10;
    /// Visible rows of the world.
    pub const VIEWPORT_HEIGHT: usize = 4;
    pub const INVENTORY_SLOTS: usize = 10;
    /// Rows shown at once by a [`SelectionMenu`](crate::menu::SelectionMenu).
    pub const MENU_WINDOW: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FRAME_DELAY_MS: u64 = 200;
    pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

    pub fn new() -> Self {
        Self {
            frame_delay: Duration::from_millis(Self::DEFAULT_FRAME_DELAY_MS),
            settle_delay: Duration::from_millis(Self::DEFAULT_SETTLE_DELAY_MS),
        }
    }

    pub fn with_delays(frame_delay: Duration, settle_delay: Duration) -> Self {
        Self {
            frame_delay,
            settle_delay,
        }
    }

    /// Configuration without any pacing, used by tests and headless hosts.
    pub fn instant() -> Self {
        Self::with_delays(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
