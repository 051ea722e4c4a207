//! End-to-end event sequences through the public API.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use stagegate::config::SecretCode;
use stagegate::gate::{
    EventOutcome, GateEvent, RevealStep, Slot, StageMachine, StagePhase, TileSet,
    PUZZLE_FEEDBACK_MESSAGE,
};
use stagegate::GateBuilder;

fn locked(seed: u64) -> StageMachine<SmallRng> {
    StageMachine::with_rng(SecretCode::default(), SmallRng::seed_from_u64(seed))
}

fn press(machine: &mut StageMachine<SmallRng>, digits: &str) {
    for c in digits.chars() {
        machine.dispatch(GateEvent::DigitPressed(c));
    }
}

fn solve(machine: &mut StageMachine<SmallRng>) {
    for target in Slot::all() {
        let source = machine
            .state()
            .tiles()
            .iter()
            .find(|(_, tile)| usize::from(*tile) == target.index())
            .map(|(slot, _)| slot)
            .unwrap();
        machine.dispatch(GateEvent::DragStart(source.index()));
        machine.dispatch(GateEvent::Drop(target.index()));
        machine.dispatch(GateEvent::DragEnd);
    }
}

fn solved(seed: u64) -> StageMachine<SmallRng> {
    let mut machine = locked(seed);
    press(&mut machine, "456838");
    solve(&mut machine);
    machine.dispatch(GateEvent::DonePressed);
    assert_eq!(machine.phase(), StagePhase::PuzzleSolved);
    machine
}

#[test]
fn correct_code_reaches_puzzle() {
    let mut machine = locked(1);

    press(&mut machine, "45683");
    assert_eq!(machine.phase(), StagePhase::Locked);
    assert_eq!(machine.snapshot().code_len, 5);

    press(&mut machine, "8");
    let snapshot = machine.snapshot();
    assert_eq!(snapshot.phase, StagePhase::PuzzleActive);
    assert!(!snapshot.has_password_error());
    assert_eq!(snapshot.code_len, 0);
}

#[test]
fn wrong_code_then_backspace() {
    let mut machine = locked(2);

    press(&mut machine, "111111");
    let snapshot = machine.snapshot();
    assert_eq!(snapshot.phase, StagePhase::Locked);
    assert!(snapshot.has_password_error());
    assert_eq!(snapshot.dots, [true; 6]);

    machine.dispatch(GateEvent::BackspacePressed);
    let snapshot = machine.snapshot();
    assert!(!snapshot.has_password_error());
    assert_eq!(snapshot.code_len, 5);
}

#[test]
fn off_by_one_digit_is_rejected() {
    let mut machine = locked(3);
    press(&mut machine, "456839");
    assert_eq!(machine.phase(), StagePhase::Locked);
    assert!(machine.snapshot().has_password_error());
}

#[test]
fn drop_swaps_exactly_two_slots() {
    let mut machine = locked(4);
    press(&mut machine, "456838");
    let before = *machine.state().tiles();

    machine.dispatch(GateEvent::DragStart(1));
    machine.dispatch(GateEvent::Drop(6));

    let after = machine.state().tiles();
    for slot in Slot::all() {
        let expected = match slot.index() {
            1 => before.tiles()[6],
            6 => before.tiles()[1],
            i => before.tiles()[i],
        };
        assert_eq!(after.tile_at(slot), expected);
    }
}

#[test]
fn done_rejects_unsolved_without_touching_tiles() {
    let mut machine = locked(5);
    press(&mut machine, "456838");
    solve(&mut machine);
    machine.dispatch(GateEvent::DragStart(7));
    machine.dispatch(GateEvent::Drop(8));
    let before = *machine.state().tiles();

    let outcome = machine.dispatch(GateEvent::DonePressed);

    assert!(matches!(outcome, EventOutcome::Rejected { .. }));
    let snapshot = machine.snapshot();
    assert_eq!(snapshot.phase, StagePhase::PuzzleActive);
    assert_eq!(snapshot.puzzle_feedback.as_deref(), Some(PUZZLE_FEEDBACK_MESSAGE));
    assert_eq!(snapshot.tiles, before);
}

#[test]
fn done_accepts_solved_arrangement() {
    let machine = solved(6);
    let snapshot = machine.snapshot();
    assert_eq!(snapshot.tiles, TileSet::identity());
    assert_eq!(snapshot.puzzle_feedback, None);
    assert_eq!(snapshot.reveal, RevealStep::Closed);
    assert_eq!(snapshot.reveal_prompt(), Some("Tap the envelope"));
}

#[test]
fn reveal_saturates_after_five_taps() {
    let mut machine = solved(7);
    for _ in 0..5 {
        machine.dispatch(GateEvent::AdvanceReveal);
    }
    assert_eq!(machine.snapshot().reveal.value(), 2);
    assert_eq!(machine.snapshot().reveal_prompt(), None);
}

#[test]
fn back_to_puzzle_resets_reveal() {
    let mut machine = solved(8);
    machine.dispatch(GateEvent::AdvanceReveal);
    machine.dispatch(GateEvent::AdvanceReveal);

    machine.dispatch(GateEvent::BackToPuzzle);

    let snapshot = machine.snapshot();
    assert_eq!(snapshot.phase, StagePhase::PuzzleActive);
    assert_eq!(snapshot.reveal, RevealStep::Closed);
    assert_eq!(snapshot.dragging, None);
}

#[test]
fn back_to_puzzle_reshuffles_each_time() {
    // One fresh shuffle could land on the identity; many in a row cannot.
    let mut machine = solved(9);
    let mut arrangements = Vec::new();
    for _ in 0..5 {
        machine.dispatch(GateEvent::BackToPuzzle);
        arrangements.push(*machine.state().tiles());
        solve(&mut machine);
        machine.dispatch(GateEvent::DonePressed);
    }

    assert!(arrangements.iter().any(|t| *t != TileSet::identity()));
}

#[test]
fn back_to_locked_requires_code_again() {
    let mut machine = locked(10);
    press(&mut machine, "456838");

    machine.dispatch(GateEvent::BackToLocked);
    assert_eq!(machine.phase(), StagePhase::Locked);
    assert_eq!(machine.snapshot().code_len, 0);

    press(&mut machine, "456838");
    assert_eq!(machine.phase(), StagePhase::PuzzleActive);
}

#[test]
fn builder_with_custom_secret() {
    let mut machine = GateBuilder::new().secret("000111").seed(11).build().unwrap();

    for c in "456838".chars() {
        machine.dispatch(GateEvent::DigitPressed(c));
    }
    assert_eq!(machine.phase(), StagePhase::Locked);

    for _ in 0..6 {
        machine.dispatch(GateEvent::BackspacePressed);
    }
    for c in "000111".chars() {
        machine.dispatch(GateEvent::DigitPressed(c));
    }
    assert_eq!(machine.phase(), StagePhase::PuzzleActive);
}

#[test]
fn full_session_history() {
    let mut machine = solved(12);
    machine.dispatch(GateEvent::BackToPuzzle);
    machine.dispatch(GateEvent::BackToLocked);

    let events: Vec<&str> = machine
        .history()
        .transitions()
        .iter()
        .map(|t| t.event.as_str())
        .collect();
    assert_eq!(
        events,
        vec!["digit_pressed", "done_pressed", "back_to_puzzle", "back_to_locked"]
    );
}
