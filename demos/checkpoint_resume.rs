//! Checkpoint and Resume
//!
//! This example interrupts a session midway through the puzzle and picks it
//! up again from a saved checkpoint.
//!
//! Key concepts:
//! - Checkpoints carry state, history and metadata but never the secret
//! - JSON for readability, binary for compactness
//! - Atomic writes prevent corruption
//! - `resume` validates the checkpoint before trusting it
//!
//! Run with: cargo run --example checkpoint_resume

use stagegate::checkpoint::Checkpoint;
use stagegate::config::GateConfig;
use stagegate::gate::{GateEvent, StageMachine};
use stagegate::{CheckpointError, GateBuilder};
use std::fs;

const CHECKPOINT_DIR: &str = "/tmp/stagegate-checkpoints";

fn save(checkpoint: &Checkpoint) -> Result<String, Box<dyn std::error::Error>> {
    fs::create_dir_all(CHECKPOINT_DIR)?;
    let path = format!("{}/{}.json", CHECKPOINT_DIR, checkpoint.id);

    // Atomic write: write to temp file, then rename
    let temp_path = format!("{}.tmp", path);
    fs::write(&temp_path, checkpoint.to_json_pretty()?)?;
    fs::rename(&temp_path, &path)?;

    println!("  [Checkpoint] Saved to {}", path);
    Ok(path)
}

fn load(path: &str) -> Result<Checkpoint, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let checkpoint = Checkpoint::from_json(&json)?;
    println!("  [Checkpoint] Loaded from {}", path);
    Ok(checkpoint)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Checkpoint and Resume Example ===\n");

    let config = GateConfig {
        seed: Some(11),
        ..GateConfig::default()
    };

    // Run 1: unlock, make one move, then stop
    println!("Run 1: Starting new session");
    println!("----------------------------------------");
    let mut machine = GateBuilder::new().config(config.clone()).build()?;
    for c in "456838".chars() {
        machine.dispatch(GateEvent::DigitPressed(c));
    }
    machine.dispatch(GateEvent::DragStart(0));
    machine.dispatch(GateEvent::Drop(8));
    println!(
        "  phase={:?} tiles={:?}",
        machine.phase(),
        machine.state().tiles().tiles()
    );

    let checkpoint = machine.checkpoint();
    let path = save(&checkpoint)?;
    let binary = checkpoint.to_binary()?;
    println!("  Binary form is {} bytes", binary.len());
    println!("\n  [INTERRUPT] Session stopped.\n");

    // Run 2: resume from disk
    println!("Run 2: Resuming from checkpoint");
    println!("----------------------------------------");
    let restored = load(&path)?;
    let resumed = StageMachine::resume(restored, config.clone())?;
    println!(
        "  phase={:?} tiles={:?} events so far={}",
        resumed.phase(),
        resumed.state().tiles().tiles(),
        resumed.metadata().events_processed
    );

    // A checkpoint from a newer format is refused
    let mut future = resumed.checkpoint();
    future.version += 1;
    match StageMachine::resume(future, config) {
        Err(CheckpointError::UnsupportedVersion { found, supported }) => {
            println!("  Refused version {} (supported: {})", found, supported);
        }
        other => println!("  Unexpected: {:?}", other.map(|m| m.phase())),
    }

    // Cleanup
    fs::remove_dir_all(CHECKPOINT_DIR).ok();

    println!("\nKey Takeaways:");
    println!("- The secret comes from the config, not the checkpoint");
    println!("- Tiles survive a resume; later shuffles use the new RNG");
    println!("- Validation rejects states the machine could never reach");

    println!("\n=== Example Complete ===");
    Ok(())
}
