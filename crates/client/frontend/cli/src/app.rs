//! Glue code tying the engine, the content and the terminal UI together.
use anyhow::Result;
use game_core::{ExecuteError, Frame, GameEngine, GameEnv, GameState, Host};
use tracing::{error, info};

use crate::config::CliConfig;
use crate::host::TerminalHost;
use crate::presentation::terminal;
use crate::state::Status;

pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Plays one session until the ending, a quit key, or an engine failure.
    pub fn run(&self, env: &GameEnv<'_>) -> Result<()> {
        info!("CLI client starting...");

        let mut state = GameState::bootstrap(env)?;
        let game_config = self.config.game_config();

        let tui = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let mut host = TerminalHost::new(tui, self.config.ui.clone());
        host.set_status(Status::of(&state));
        host.render(&Frame::world(&state));

        let mut engine = GameEngine::new(&mut state, &game_config);
        loop {
            let input = host.read_input();
            if host.quit_requested() {
                info!("quit requested");
                break;
            }

            match engine.handle_input(env, &mut host, input) {
                Ok(outcome) => {
                    host.set_status(Status::of(engine.state()));
                    if outcome.ended {
                        info!(milestone = %engine.state().milestone(), "session finished");
                        break;
                    }
                }
                Err(ExecuteError::SessionEnded) => break,
                Err(error) => {
                    error!(%error, "engine failed");
                    return Err(error.into());
                }
            }

            if host.quit_requested() {
                info!("quit requested");
                break;
            }
        }

        info!("CLI client stopped");
        Ok(())
    }
}
