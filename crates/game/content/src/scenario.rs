use game_core::{
    Bootstrap, CellId, Effect, Env, GameEnv, InteractionKind, InteractionTable, MapOracle,
    Milestone, Position, RuleTable, ScenarioOracle, Script,
};

use crate::items::ItemCatalog;
use crate::map::TownMap;
use crate::{ContentError, milestone, scripts, search, talk, transitions, use_item};

const STARTING_ITEMS: &[CellId] = &[CellId::Money, CellId::Cellphone];

static HELP: &[Effect] = &[
    Effect::Say(
        CellId::Blank,
        "Press Enter to open the menu, then pick Talk, Search or Use. Talk to people and look around carefully and you will find your way.",
    ),
    Effect::Say(
        CellId::Blank,
        "The characters and story are fiction. Any resemblance to real people is a coincidence.",
    ),
    Effect::Say(
        CellId::Blank,
        "Arrow keys walk, Esc backs out of a menu, q quits.",
    ),
];

/// The kidnapped-doctor story: map, items and every rule table.
#[derive(Clone, Copy, Debug, Default)]
pub struct Boshi {
    map: TownMap,
    items: ItemCatalog,
}

impl Boshi {
    pub const fn new() -> Self {
        Self {
            map: TownMap::new(),
            items: ItemCatalog,
        }
    }

    pub fn map(&self) -> &TownMap {
        &self.map
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    /// All three oracles bundled for the engine.
    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(&self.map, &self.items, self).into_game_env()
    }

    /// Checks the map data and that every table stays inside the world.
    pub fn validate(&self) -> Result<(), ContentError> {
        self.map.validate()?;
        let world = self.map.dimensions();

        transitions::TRANSITIONS
            .validate(world)
            .map_err(ContentError::table("transitions"))?;
        for kind in InteractionKind::ALL {
            self.interactions(kind)
                .validate(world)
                .map_err(ContentError::table(kind.as_str()))?;
        }
        for script in [
            &scripts::TRAIN_DEPARTURE,
            &scripts::TRAIN_ARRIVAL,
            &scripts::POLICE_LEAVE_DOOR,
            &scripts::GUARD_LEAVES,
            &scripts::ENDING,
        ] {
            script
                .validate(world)
                .map_err(ContentError::table(script.name))?;
        }
        Ok(())
    }
}

impl ScenarioOracle for Boshi {
    fn bootstrap(&self) -> Bootstrap {
        Bootstrap {
            viewport: Position::new(4, 0),
            actor: Position::new(7, 2),
            inventory: STARTING_ITEMS,
            milestone: milestone::START,
        }
    }

    fn transitions(&self) -> &RuleTable {
        &transitions::TRANSITIONS
    }

    fn interactions(&self, kind: InteractionKind) -> &InteractionTable {
        match kind {
            InteractionKind::Talk => &talk::TALK,
            InteractionKind::Search => &search::SEARCH,
            InteractionKind::Use => &use_item::USE,
        }
    }

    fn action_labels(&self) -> [&'static str; 3] {
        ["Talk", "Search", "Use"]
    }

    fn help(&self) -> &'static [Effect] {
        HELP
    }

    fn terminal_milestone(&self) -> Milestone {
        milestone::ESCAPED
    }

    fn ending(&self) -> &'static Script {
        &scripts::ENDING
    }
}
