//! Talk / Search / Use dispatch and the menus in front of it.

use tracing::debug;

use super::{ExecuteError, GameEngine, Interaction};
use crate::action::InteractionKind;
use crate::env::GameEnv;
use crate::frame::Frame;
use crate::host::{Host, MenuEntry, MenuView};
use crate::menu::{MenuOutcome, SelectionMenu};
use crate::rules::RuleContext;
use crate::state::Item;

impl GameEngine<'_> {
    /// Opens the action menu and runs the chosen interaction.
    pub(super) fn act<H>(
        &mut self,
        env: &GameEnv<'_>,
        host: &mut H,
    ) -> Result<Option<Interaction>, ExecuteError>
    where
        H: Host + ?Sized,
    {
        let labels = env.scenario()?.action_labels();
        let entries: Vec<MenuEntry<'_>> = labels
            .iter()
            .map(|&label| MenuEntry { label, icon: None })
            .collect();

        let Some(kind) = choose(host, "Action", &entries).and_then(InteractionKind::from_menu_index)
        else {
            return Ok(None);
        };
        host.render(&Frame::world(self.state));
        self.interact(env, host, kind)
    }

    /// Resolves one interaction at the actor's position.
    ///
    /// `Use` asks for an item first; backing out of that picker returns
    /// `Ok(None)` without touching anything.
    pub fn interact<H>(
        &mut self,
        env: &GameEnv<'_>,
        host: &mut H,
        kind: InteractionKind,
    ) -> Result<Option<Interaction>, ExecuteError>
    where
        H: Host + ?Sized,
    {
        let holding = match kind {
            InteractionKind::Use => {
                let items: Vec<Item> = self.state.inventory.list().to_vec();
                let entries: Vec<MenuEntry<'_>> = items
                    .iter()
                    .map(|item| MenuEntry {
                        label: item.name,
                        icon: Some(item.id),
                    })
                    .collect();
                match choose(host, "Items", &entries) {
                    Some(index) => {
                        host.render(&Frame::world(self.state));
                        Some(items[index].id)
                    }
                    None => return Ok(None),
                }
            }
            InteractionKind::Talk | InteractionKind::Search => None,
        };

        let table = env.scenario()?.interactions(kind);
        let mut context = RuleContext::new(self.state);
        if let Some(item) = holding {
            context = context.holding(item);
        }
        let resolution = table.resolve(&context);
        debug!(
            kind = kind.as_str(),
            branch = resolution.name(),
            position = %context.position,
            ?holding,
            "interaction resolved"
        );

        self.run_effects(env, host, resolution.effects())?;
        Ok(Some(Interaction {
            kind,
            branch: resolution.name(),
            holding,
        }))
    }
}

/// Runs a [`SelectionMenu`] against host input until confirm or cancel.
pub fn choose<H>(host: &mut H, title: &str, entries: &[MenuEntry<'_>]) -> Option<usize>
where
    H: Host + ?Sized,
{
    let mut menu = SelectionMenu::new(entries.len());
    loop {
        host.show_menu(&MenuView {
            title,
            entries,
            visible: menu.visible(),
            cursor: menu.cursor(),
        });
        let Some(input) = host.read_input().menu_input() else {
            continue;
        };
        match menu.handle(input) {
            MenuOutcome::Pending => {}
            MenuOutcome::Selected(index) => return Some(index),
            MenuOutcome::Cancelled => return None,
        }
    }
}
