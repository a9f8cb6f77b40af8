use std::collections::HashSet;

use game_content::{Boshi, SEARCH, TALK, TRANSITIONS, TownMap, USE};
use game_core::{Area, CellId, Effect, InteractionTable, MapOracle, Position};

#[test]
fn every_table_fits_the_world() {
    Boshi::new().validate().unwrap();
}

#[test]
fn rule_names_are_unique_per_table() {
    let tables: [(&str, Vec<&str>); 4] = [
        ("transitions", TRANSITIONS.rules().iter().map(|rule| rule.name).collect()),
        ("talk", names(&TALK)),
        ("search", names(&SEARCH)),
        ("use", names(&USE)),
    ];
    for (table, names) in tables {
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate rule name in {table}");
    }
}

#[test]
fn transition_order_is_stable() {
    let names: Vec<_> = TRANSITIONS.rules().iter().map(|rule| rule.name).collect();
    assert_eq!(names.len(), 20);
    assert_eq!(names.first(), Some(&"enter_station"));
    let position = |name| names.iter().position(|n| *n == name);
    assert!(position("abduction") < position("leave_lab"));
    assert!(position("leave_doctors_house") < position("doctors_house_exit_blocked"));
    assert!(position("sleep") < position("bed"));
}

#[test]
fn every_trigger_point_is_reachable() {
    let map = TownMap::new();
    let mut opened = HashSet::new();
    for rules in [TRANSITIONS.rules(), TALK.branches.rules(), USE.branches.rules()] {
        for rule in rules {
            collect_openings(rule.effects, &mut opened);
        }
    }

    for rule in TRANSITIONS.rules() {
        if let Area::Point(position) = rule.area {
            let cell = map.cell(position).unwrap();
            assert!(
                cell.is_walkable() || opened.contains(&position),
                "{} sits on {cell:?}",
                rule.name
            );
        }
    }
}

#[test]
fn actor_starts_on_open_ground() {
    let map = TownMap::new();
    assert_eq!(map.cell(Position::new(11, 2)), Some(CellId::Blank));
}

fn names(table: &InteractionTable) -> Vec<&'static str> {
    table.branches.rules().iter().map(|rule| rule.name).collect()
}

/// Cells some effect turns into walkable ground, following played scripts.
fn collect_openings(effects: &[Effect], opened: &mut HashSet<Position>) {
    for effect in effects {
        match *effect {
            Effect::SetCell(position, cell) if cell.is_walkable() => {
                opened.insert(position);
            }
            Effect::Play(script) => collect_openings(script.steps, opened),
            _ => {}
        }
    }
}
