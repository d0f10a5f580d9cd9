//! Star Hopper entry point
//!
//! The playable build is the wasm library driven by the page script;
//! the native binary replays scripted sessions against the gameplay
//! controller and narrates the outcome.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Star Hopper (native) starting...");
    log::info!("Native mode has no scene - build the wasm library for the playable game");

    println!("\nReplaying scripted sessions...");
    demo_sessions();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point lives in the library, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_sessions() {
    use star_hopper::game::{Command, EntityKind, GamePhase, GameplayController};
    use star_hopper::records::PlayerRecords;
    use star_hopper::tuning::Tuning;

    let mut ctl = GameplayController::new(2024, Tuning::default());
    let mut records = PlayerRecords::new();

    ctl.on_scene_ready();
    let batch = ctl.on_name_entered(Some("demo"), &mut records);
    println!("session start: {} commands", batch.len());
    log::debug!("session start batch: {:?}", batch);

    // Grab every pickup as it spawns until the session ends
    let mut ticks = 0u32;
    while ctl.phase() == GamePhase::Playing && ticks < 400 {
        ticks += 1;
        let batch = ctl.on_spawn_tick();
        log::debug!("tick {} batch: {:?}", ticks, batch);
        for cmd in &batch {
            if let Command::Spawn { id, kind, .. } = cmd {
                match kind {
                    EntityKind::Star | EntityKind::RedCoin => {
                        ctl.on_player_overlap(*id, &mut records);
                    }
                    _ => {}
                }
            }
        }
    }
    println!("phase after {} spawn ticks: {:?}", ticks, ctl.phase());
    if let Some(session) = ctl.session() {
        println!(
            "{} finished at {} (best {})",
            session.player_name,
            session.score,
            records.highest(&session.player_name).unwrap_or(0)
        );
    }

    // Restart and lose to a hazard this time
    println!("\nRestarting for a losing run...");
    ctl.on_restart(&mut records);
    let mut hazard = None;
    for _ in 0..64 {
        let batch = ctl.on_spawn_tick();
        hazard = batch.iter().find_map(|cmd| match cmd {
            Command::Spawn {
                id,
                kind: EntityKind::Obstacle,
                ..
            } => Some(*id),
            _ => None,
        });
        if hazard.is_some() {
            break;
        }
    }
    if let Some(id) = hazard {
        for cmd in ctl.on_player_overlap(id, &mut records) {
            if let Command::ShowSummary(summary) = cmd {
                println!(
                    "{:?} for {} at {} (best {})",
                    summary.outcome, summary.player_name, summary.score, summary.best_score
                );
            }
        }
    }
}
