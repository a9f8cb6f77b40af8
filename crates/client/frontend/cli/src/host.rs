//! [`Host`] implementation backed by the terminal.
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use game_core::{CellId, Frame, Host, InputEvent, MenuView};
use tracing::{debug, error, warn};

use crate::config::UiConfig;
use crate::input;
use crate::message::{MessageLog, paginate};
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use crate::state::{Dialogue, MenuSnapshot, ScreenState, Status};

pub struct TerminalHost {
    terminal: Tui,
    screen: ScreenState,
    history: MessageLog,
    ui: UiConfig,
    quit: bool,
}

impl TerminalHost {
    pub fn new(terminal: Tui, ui: UiConfig) -> Self {
        Self {
            terminal,
            screen: ScreenState::default(),
            history: MessageLog::new(ui.message_capacity),
            ui,
            quit: false,
        }
    }

    pub fn set_status(&mut self, status: Status) {
        self.screen.status = status;
    }

    /// Set once the player pressed quit or the terminal stopped delivering input.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    fn redraw(&mut self) {
        let Self {
            terminal,
            screen,
            history,
            ui,
            ..
        } = self;
        let ctx = RenderContext {
            screen,
            history,
            history_height: ui.history_height,
        };
        if let Err(error) = ui::render(terminal, &ctx) {
            warn!(%error, "failed to draw frame");
        }
    }

    /// Next key press; `None` when input is gone.
    fn read_key(&mut self) -> Option<KeyEvent> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
                Ok(Event::Resize(..)) => self.redraw(),
                Ok(_) => {}
                Err(error) => {
                    error!(%error, "failed to read terminal input");
                    self.quit = true;
                    return None;
                }
            }
        }
    }
}

impl Host for TerminalHost {
    fn render(&mut self, frame: &Frame) {
        self.screen.frame = *frame;
        self.screen.menu = None;
        self.redraw();
    }

    fn show_message(&mut self, speaker: CellId, text: &str) {
        let pages = paginate(text, self.ui.message_width);
        let last = pages.len().saturating_sub(1);

        for (index, page) in pages.into_iter().enumerate() {
            self.screen.dialogue = Some(Dialogue {
                speaker,
                page,
                more: index < last,
            });
            self.redraw();

            if self.quit {
                break;
            }
            // Any key turns the page.
            match self.read_key() {
                Some(key) if input::decode(key) == Some(InputEvent::Quit) => {
                    self.quit = true;
                    break;
                }
                Some(_) => {}
                None => break,
            }
        }

        debug!(?speaker, text, "message shown");
        self.history.push(speaker, text);
        self.screen.dialogue = None;
        self.redraw();
    }

    fn show_menu(&mut self, menu: &MenuView<'_>) {
        self.screen.menu = Some(MenuSnapshot::from(menu));
        self.redraw();
    }

    fn read_input(&mut self) -> InputEvent {
        loop {
            if self.quit {
                return InputEvent::Quit;
            }
            let Some(key) = self.read_key() else {
                return InputEvent::Quit;
            };
            if let Some(input) = input::decode(key) {
                if input == InputEvent::Quit {
                    self.quit = true;
                }
                return input;
            }
        }
    }

    fn pause(&mut self, duration: Duration) {
        if !self.quit {
            thread::sleep(duration);
        }
    }
}
