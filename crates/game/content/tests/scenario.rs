mod common;

use game_content::{Boshi, TRANSITIONS, milestone};
use game_core::{
    CardinalDirection, CellId, ExecuteError, GameEngine, GameState, InputEvent, NarrativeState,
    Position, RuleContext,
};

use common::{RecordingHost, pick, pick_action, session, step, teleport};

const TALK: usize = 0;
const SEARCH: usize = 1;
const USE: usize = 2;

#[test]
fn entering_the_station_moves_the_camera_but_not_the_story() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    teleport(&mut state, (5, 5), (4, 2));
    let mut host = RecordingHost::default();
    let mut engine = GameEngine::new(&mut state, &config);

    let outcome = engine
        .handle_input(&env, &mut host, step(CardinalDirection::North))
        .unwrap();

    assert_eq!(outcome.transition, Some("enter_station"));
    let state = engine.state();
    assert_eq!(state.viewport.origin(), Position::new(0, 15));
    assert_eq!(state.actor_position(), Position::new(8, 16));
    assert_eq!(state.milestone(), milestone::START);
    assert_eq!(host.messages.len(), 1);
    assert_eq!(host.messages[0].0, CellId::Man);
}

#[test]
fn station_stays_shut_once_the_chemical_is_found() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    state.narrative = NarrativeState::new(milestone::CHEMICAL_FOUND);
    teleport(&mut state, (5, 5), (4, 2));
    let mut host = RecordingHost::default();
    let mut engine = GameEngine::new(&mut state, &config);

    let outcome = engine
        .handle_input(&env, &mut host, step(CardinalDirection::North))
        .unwrap();

    assert_eq!(outcome.transition, None);
    assert_eq!(engine.state().actor_position(), Position::new(9, 6));
    assert!(host.messages.is_empty());
}

#[test]
fn lab_exit_depends_on_the_story() {
    let boshi = Boshi::new();
    let (mut state, _) = session(&boshi);
    teleport(&mut state, (0, 25), (5, 3));
    assert_eq!(state.actor_position(), Position::new(5, 28));

    let name = |state: &GameState| TRANSITIONS.first_match(&RuleContext::new(state)).map(|rule| rule.name);
    assert_eq!(name(&state), Some("leave_lab"));

    state.narrative = NarrativeState::new(milestone::CHEMICAL_FOUND);
    for _ in 0..3 {
        assert_eq!(name(&state), Some("abduction"));
    }
}

#[test]
fn bedtime_only_moves_the_story_once() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    state.narrative = NarrativeState::new(milestone::MET_DOCTOR);
    teleport(&mut state, (11, 16), (7, 1));
    let mut host = RecordingHost::default();
    let mut engine = GameEngine::new(&mut state, &config);

    let outcome = engine
        .handle_input(&env, &mut host, step(CardinalDirection::East))
        .unwrap();
    assert_eq!(outcome.transition, Some("sleep"));
    assert_eq!(engine.state().milestone(), milestone::WOKE_UP);
    assert_eq!(engine.state().cell(Position::new(12, 18)), Some(CellId::Police));
    assert_eq!(engine.state().actor_position(), Position::new(18, 17));

    let outcome = engine
        .handle_input(&env, &mut host, step(CardinalDirection::East))
        .unwrap();
    assert_eq!(outcome.transition, Some("bed"));
    assert_eq!(engine.state().actor_position(), Position::new(18, 17));
    assert_eq!(engine.state().milestone(), milestone::WOKE_UP);
}

#[test]
fn ticket_opens_a_gate_that_closes_behind_the_actor() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    teleport(&mut state, (0, 15), (7, 1));
    assert_eq!(state.actor_position(), Position::new(7, 16));

    let mut host = RecordingHost::default();
    let mut engine = GameEngine::new(&mut state, &config);

    host.queue(pick_action(USE));
    host.queue(pick(0));
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("buy_ticket"));
    let items: Vec<_> = engine.state().inventory.iter().map(|item| item.id).collect();
    assert_eq!(items, [CellId::Ticket, CellId::Cellphone]);
    assert_eq!(engine.state().inventory.list()[0].name, "Train ticket");

    for _ in 0..2 {
        engine
            .handle_input(&env, &mut host, step(CardinalDirection::West))
            .unwrap();
    }
    assert_eq!(engine.state().actor_position(), Position::new(5, 16));

    host.queue(pick_action(USE));
    host.queue(pick(0));
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("open_upper_gate"));
    assert_eq!(engine.state().cell(Position::new(4, 16)), Some(CellId::DoorOpen));

    let outcome = engine
        .handle_input(&env, &mut host, step(CardinalDirection::West))
        .unwrap();
    assert_eq!(outcome.transition, Some("pass_upper_gate"));
    assert_eq!(engine.state().actor_position(), Position::new(4, 16));
    assert_eq!(engine.state().cell(Position::new(4, 16)), Some(CellId::DoorClose));
}

#[test]
fn backing_out_of_the_item_picker_changes_nothing() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    teleport(&mut state, (0, 15), (7, 1));
    let before = state.clone();

    let mut host = RecordingHost::with_inputs(pick_action(USE));
    host.queue([InputEvent::Cancel]);
    let mut engine = GameEngine::new(&mut state, &config);
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();

    assert_eq!(outcome.interaction, None);
    assert!(host.messages.is_empty());
    host.menus.dedup();
    assert_eq!(host.menus, ["Action", "Items"]);
    assert_eq!(engine.state().inventory, before.inventory);
    assert_eq!(engine.state().world, before.world);
}

#[test]
fn talking_to_nobody_gets_the_generic_line() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    let mut host = RecordingHost::with_inputs(pick_action(TALK));
    let mut engine = GameEngine::new(&mut state, &config);

    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("fallback"));
    assert!(host.said("no one to talk to"));
}

#[test]
fn toilet_flood_lures_the_guard_away() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    state.narrative = NarrativeState::new(milestone::CHEMICAL_FOUND);
    teleport(&mut state, (21, 20), (5, 2));
    assert_eq!(state.actor_position(), Position::new(26, 22));

    let mut host = RecordingHost::default();
    let mut engine = GameEngine::new(&mut state, &config);

    host.queue(pick_action(SEARCH));
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("toilet_cabinet"));
    assert!(engine.state().inventory.contains(CellId::ToiletPaper));

    host.queue(pick_action(SEARCH));
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("fallback"));
    assert_eq!(engine.state().inventory.len(), 3);

    host.queue(pick_action(USE));
    host.queue(pick(2));
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("jam_toilet"));
    assert_eq!(engine.state().milestone(), milestone::TOILET_JAMMED);
    assert_eq!(engine.state().cell(Position::new(25, 23)), Some(CellId::Water));

    drop(engine);
    teleport(&mut state, (21, 26), (7, 2));
    let mut engine = GameEngine::new(&mut state, &config);
    host.queue(pick_action(TALK));
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("captive_doctor_plan"));

    let state = engine.state();
    assert_eq!(state.milestone(), milestone::GUARD_LURED);
    assert_eq!(state.cell(Position::new(24, 27)), Some(CellId::Blank));
    assert_eq!(state.cell(Position::new(26, 22)), Some(CellId::BadManL));
    assert_eq!(state.actor_position(), Position::new(28, 28));
    assert_eq!(state.viewport.origin(), Position::new(21, 26));
}

#[test]
fn chemical_then_phone_opens_the_cell_and_ends_the_session() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    state.narrative = NarrativeState::new(milestone::GUARD_LURED);
    assert!(state.inventory.add(CellId::Chemical, boshi.items()));
    teleport(&mut state, (21, 25), (8, 2));
    assert_eq!(state.actor_position(), Position::new(29, 27));

    let mut host = RecordingHost::default();
    let mut engine = GameEngine::new(&mut state, &config);

    host.queue(pick_action(USE));
    host.queue(pick(2));
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("corrode_door"));
    assert_eq!(engine.state().milestone(), milestone::DOOR_CORRODED);
    assert!(!outcome.ended);
    assert!(outcome.step.is_none());
    assert_eq!(engine.state().actor_position(), Position::new(29, 27));
    assert_eq!(
        host.messages,
        [(
            CellId::Man,
            "I painted the solution on the lock. The current will let the germs eat through it."
                .to_owned()
        )]
    );
    host.clear();

    host.queue(pick_action(USE));
    host.queue(pick(1));
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
    assert_eq!(outcome.interaction.map(|i| i.branch), Some("short_the_lock"));
    assert!(outcome.ended);
    assert_eq!(engine.state().milestone(), milestone::ESCAPED);
    assert_eq!(engine.state().cell(Position::new(30, 27)), Some(CellId::Blank));
    assert_eq!(host.messages.last().map(|(_, text)| text.as_str()), Some("-The End-"));

    let after = engine.handle_input(&env, &mut host, step(CardinalDirection::East));
    assert!(matches!(after, Err(ExecuteError::SessionEnded)));
}

#[test]
fn chemical_is_useless_while_the_guard_watches() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    state.narrative = NarrativeState::new(milestone::CHEMICAL_FOUND);
    assert!(state.inventory.add(CellId::Chemical, boshi.items()));
    teleport(&mut state, (21, 25), (8, 2));

    let mut host = RecordingHost::with_inputs(pick_action(USE));
    host.queue(pick(2));
    let mut engine = GameEngine::new(&mut state, &config);
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();

    assert_eq!(outcome.interaction.map(|i| i.branch), Some("door_watched"));
    assert_eq!(engine.state().milestone(), milestone::CHEMICAL_FOUND);
}

#[test]
fn doctors_cabinet_still_holds_a_receipt_after_the_exchange() {
    let boshi = Boshi::new();
    let env = boshi.env();
    let (mut state, config) = session(&boshi);
    state.narrative = NarrativeState::new(milestone::QUESTIONED);
    assert!(state.inventory.add(CellId::Cc800, boshi.items()));
    teleport(&mut state, (11, 21), (8, 0));
    assert_eq!(state.actor_position(), Position::new(19, 21));

    let mut host = RecordingHost::with_inputs(pick_action(SEARCH));
    let mut engine = GameEngine::new(&mut state, &config);
    let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();

    assert_eq!(outcome.interaction.map(|i| i.branch), Some("doctors_cabinet"));
    let state = engine.state();
    assert!(state.inventory.contains(CellId::Invoice));
    assert!(state.inventory.contains(CellId::Cc800));
    assert_eq!(state.cell(Position::new(19, 20)), Some(CellId::CabinetOpen));
    assert!(host.said("repair receipt"));
}
