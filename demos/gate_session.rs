//! Gate Session
//!
//! This example walks one session through all three stages.
//!
//! Key concepts:
//! - Every input is a `GateEvent`; the machine never errors on bad input
//! - A wrong code stays on screen until a backspace
//! - The puzzle is solved with drag/drop swaps, then checked with Done
//! - The reveal message appears only once the envelope is fully open
//!
//! Run with: cargo run --example gate_session

use stagegate::gate::{EventOutcome, GateEvent, GateSnapshot, Slot, StageMachine};
use stagegate::GateBuilder;

fn show(snapshot: &GateSnapshot) {
    let dots: String = snapshot
        .dots
        .iter()
        .map(|filled| if *filled { '●' } else { '○' })
        .collect();
    println!(
        "  phase={:?} code={} error={:?}",
        snapshot.phase, dots, snapshot.password_error
    );
}

fn type_code(machine: &mut StageMachine, code: &str) {
    for c in code.chars() {
        machine.dispatch(GateEvent::DigitPressed(c));
    }
    show(&machine.snapshot());
}

fn print_grid(machine: &StageMachine) {
    for row in machine.state().tiles().tiles().chunks(3) {
        println!("    {:?}", row);
    }
}

fn main() {
    println!("=== Gate Session Example ===\n");

    let mut machine = GateBuilder::new()
        .secret("456838")
        .seed(7)
        .reveal_message("Happy birthday!")
        .build()
        .expect("valid configuration");

    // Stage 1: passcode
    println!("Stage 1: Locked");
    println!("----------------------------------------");
    println!("Typing 111111:");
    type_code(&mut machine, "111111");

    println!("Clearing with backspace:");
    for _ in 0..6 {
        machine.dispatch(GateEvent::BackspacePressed);
    }
    show(&machine.snapshot());

    println!("Typing 456838:");
    type_code(&mut machine, "456838");
    println!();

    // Stage 2: puzzle
    println!("Stage 2: Puzzle");
    println!("----------------------------------------");
    println!("  Dealt arrangement:");
    print_grid(&machine);

    if let EventOutcome::Rejected { feedback } = machine.dispatch(GateEvent::DonePressed) {
        println!("  Done too early: {}", feedback);
    }

    let mut swaps = 0;
    for target in Slot::all() {
        let source = machine
            .state()
            .tiles()
            .iter()
            .find(|(_, tile)| usize::from(*tile) == target.index())
            .map(|(slot, _)| slot);
        if let Some(source) = source {
            if source != target {
                machine.dispatch(GateEvent::DragStart(source.index()));
                machine.dispatch(GateEvent::Drop(target.index()));
                machine.dispatch(GateEvent::DragEnd);
                swaps += 1;
            }
        }
    }
    println!("  Solved with {} swaps:", swaps);
    print_grid(&machine);

    let outcome = machine.dispatch(GateEvent::DonePressed);
    println!("  Done: {:?}", outcome);
    println!();

    // Stage 3: reveal
    println!("Stage 3: Reveal");
    println!("----------------------------------------");
    loop {
        let snapshot = machine.snapshot();
        match snapshot.reveal_prompt() {
            Some(prompt) => {
                println!("  {} (step {})", prompt, snapshot.reveal.value());
                machine.dispatch(GateEvent::AdvanceReveal);
            }
            None => {
                println!("  Message: {}", snapshot.message.unwrap_or_default());
                break;
            }
        }
    }

    println!("\nTransitions:");
    for transition in machine.history().transitions() {
        println!(
            "  {:?} -> {:?} on {}",
            transition.from, transition.to, transition.event
        );
    }

    println!("\n=== Example Complete ===");
}
