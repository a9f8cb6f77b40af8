//! Terminal client configuration.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use game_core::GameConfig;

/// CLI configuration read from the environment.
///
/// Pacing values feed [`GameConfig`]; the rest only shapes the terminal UI.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub frame_delay: Duration,
    pub settle_delay: Duration,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    pub ui: UiConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            frame_delay: game.frame_delay,
            settle_delay: game.settle_delay,
            log_dir: None,
            ui: UiConfig::default(),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BOSHI_FRAME_DELAY_MS` - Animation frame delay (default: 200)
    /// - `BOSHI_SETTLE_DELAY_MS` - Pause after a location trigger (default: 100)
    /// - `BOSHI_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `CLI_MESSAGE_WIDTH` - Characters per message line (default: 36, min: 10)
    /// - `CLI_MESSAGE_CAPACITY` - Lines kept in the history (default: 50)
    /// - `CLI_HISTORY_HEIGHT` - History panel height in lines (default: 6, min: 3)
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("BOSHI_FRAME_DELAY_MS") {
            config.frame_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("BOSHI_SETTLE_DELAY_MS") {
            config.settle_delay = Duration::from_millis(ms);
        }
        if let Some(dir) = env::var_os("BOSHI_LOG_DIR").filter(|dir| !dir.is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(width) = read_env::<usize>("CLI_MESSAGE_WIDTH") {
            config.ui.message_width = width.max(10);
        }
        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }
        if let Some(height) = read_env::<u16>("CLI_HISTORY_HEIGHT") {
            config.ui.history_height = height.max(3);
        }

        config
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::with_delays(self.frame_delay, self.settle_delay)
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub message_width: usize,
    pub message_capacity: usize,
    /// Height of the history panel in lines (including borders).
    pub history_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_width: 36,
            message_capacity: 50,
            history_height: 6,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
