//! Generic runner for rule effects and scripted animations.

use tracing::{debug, info};

use super::{ExecuteError, GameEngine};
use crate::env::GameEnv;
use crate::frame::Frame;
use crate::host::Host;
use crate::rules::Effect;

impl GameEngine<'_> {
    /// Runs an effect list in order, then plays the ending if the story
    /// reached its terminal milestone.
    pub fn run_effects<H>(
        &mut self,
        env: &GameEnv<'_>,
        host: &mut H,
        effects: &[Effect],
    ) -> Result<(), ExecuteError>
    where
        H: Host + ?Sized,
    {
        self.run_steps(env, host, effects)?;
        self.finish_if_terminal(env, host)
    }

    fn run_steps<H>(
        &mut self,
        env: &GameEnv<'_>,
        host: &mut H,
        effects: &[Effect],
    ) -> Result<(), ExecuteError>
    where
        H: Host + ?Sized,
    {
        for effect in effects {
            self.apply_effect(env, host, effect)?;
        }
        Ok(())
    }

    fn apply_effect<H>(
        &mut self,
        env: &GameEnv<'_>,
        host: &mut H,
        effect: &Effect,
    ) -> Result<(), ExecuteError>
    where
        H: Host + ?Sized,
    {
        match *effect {
            Effect::Say(speaker, text) => host.show_message(speaker, text),
            Effect::SetCell(position, cell) => {
                let previous = self.state.world.set(position, cell)?;
                debug!(%position, ?previous, ?cell, "cell rewritten");
            }
            Effect::Reposition(camera) => self.state.reposition(camera)?,
            Effect::Nudge(direction) => {
                let (dx, dy) = direction.delta();
                self.state.actor.nudge(dx, dy);
            }
            Effect::Advance(milestone) => {
                let from = self.state.milestone();
                if self.state.narrative.advance(milestone)? {
                    info!(%from, to = %milestone, "story advanced");
                }
            }
            Effect::AddItem(item) => {
                let added = self.state.inventory.add(item, env.items()?);
                debug!(?item, added, "item picked up");
            }
            Effect::Exchange(old, new) => {
                let swapped = self.state.inventory.exchange(old, new, env.items()?);
                debug!(?old, ?new, swapped, "item exchanged");
            }
            Effect::Render(view) => host.render(&Frame::compose(self.state, &view)),
            Effect::Pause => host.pause(self.config.frame_delay),
            Effect::Play(script) => {
                debug!(script = script.name, "playing script");
                self.run_steps(env, host, script.steps)?;
            }
            Effect::SaveCamera => self.state.save_camera(),
            Effect::RestoreCamera => self.state.restore_camera()?,
        }
        Ok(())
    }

    fn finish_if_terminal<H>(&mut self, env: &GameEnv<'_>, host: &mut H) -> Result<(), ExecuteError>
    where
        H: Host + ?Sized,
    {
        let scenario = env.scenario()?;
        if self.state.is_ended() || self.state.milestone() < scenario.terminal_milestone() {
            return Ok(());
        }

        let ending = scenario.ending();
        info!(script = ending.name, "terminal milestone reached");
        self.run_steps(env, host, ending.steps)?;
        self.state.end();
        Ok(())
    }
}
