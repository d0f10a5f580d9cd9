//! Browser entry point
//!
//! Exposes the gameplay controller to the page script. The page owns
//! the scene (sprites, physics, timers, DOM) and forwards its events
//! here; each call returns a JSON array of commands for the page to
//! apply in order. Audio commands never cross back: they are routed
//! straight into [`AudioManager`].

use wasm_bindgen::prelude::*;

use crate::audio::AudioManager;
use crate::game::{Command, EntityId, FrameInput, GamePhase, GameplayController};
use crate::records::PlayerRecords;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Star Hopper module loaded");
}

/// One instance per page load
#[wasm_bindgen]
pub struct GameBridge {
    controller: GameplayController,
    records: PlayerRecords,
    audio: AudioManager,
}

#[wasm_bindgen]
impl GameBridge {
    /// `tuning_json` overrides individual tuning fields; pass nothing
    /// for the stock game.
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> Self {
        let tuning = match tuning_json {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!("Bad tuning JSON ({}), using defaults", err);
                Tuning::default()
            }),
            None => Tuning::default(),
        };
        let seed = js_sys::Date::now() as u64;
        Self {
            controller: GameplayController::new(seed, tuning),
            records: PlayerRecords::new(),
            audio: AudioManager::new(),
        }
    }

    pub fn scene_ready(&mut self) -> String {
        let batch = self.controller.on_scene_ready();
        self.dispatch(batch)
    }

    /// Answer to the name prompt; pass nothing when it was cancelled
    pub fn name_entered(&mut self, name: Option<String>) -> String {
        let batch = self
            .controller
            .on_name_entered(name.as_deref(), &mut self.records);
        self.dispatch(batch)
    }

    /// Per-frame world snapshot, serialized by the page
    pub fn frame(&mut self, frame_json: &str) -> String {
        match serde_json::from_str::<FrameInput>(frame_json) {
            Ok(frame) => {
                let batch = self.controller.on_frame(&frame, &mut self.records);
                self.dispatch(batch)
            }
            Err(err) => {
                log::warn!("Malformed frame input: {}", err);
                "[]".to_string()
            }
        }
    }

    pub fn spawn_tick(&mut self) -> String {
        let batch = self.controller.on_spawn_tick();
        self.dispatch(batch)
    }

    pub fn player_overlap(&mut self, id: u32) -> String {
        let batch = self
            .controller
            .on_player_overlap(EntityId(id), &mut self.records);
        self.dispatch(batch)
    }

    pub fn pointer_moved(&mut self, x: f32) -> String {
        let batch = self.controller.on_pointer_move(x);
        self.dispatch(batch)
    }

    pub fn pointer_pressed(&mut self, x: f32) -> String {
        // First user gesture unlocks the audio context
        self.audio.resume();
        let batch = self.controller.on_pointer_down(x);
        self.dispatch(batch)
    }

    pub fn pointer_released(&mut self) -> String {
        let batch = self.controller.on_pointer_up();
        self.dispatch(batch)
    }

    pub fn restart(&mut self) -> String {
        let batch = self.controller.on_restart(&mut self.records);
        self.dispatch(batch)
    }

    pub fn score(&self) -> u32 {
        self.controller.session().map(|s| s.score).unwrap_or(0)
    }

    /// Highest score on record for the current player
    pub fn best_score(&self) -> u32 {
        self.controller
            .player_name()
            .and_then(|name| self.records.highest(name))
            .unwrap_or(0)
    }

    pub fn phase_name(&self) -> String {
        match self.controller.phase() {
            GamePhase::AwaitingName => "awaiting_name",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
            GamePhase::Victory => "victory",
        }
        .to_string()
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.audio.set_master_volume(vol);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.audio.set_muted(muted);
    }

    /// Route audio commands to the mixer, serialize the rest for the page
    fn dispatch(&mut self, batch: Vec<Command>) -> String {
        let mut retained = Vec::with_capacity(batch.len());
        for cmd in batch {
            match cmd {
                Command::PlaySound(sound) => self.audio.play(sound),
                Command::StartMusic => self.audio.start_music(),
                Command::StopAllAudio => self.audio.stop_all(),
                other => retained.push(other),
            }
        }
        match serde_json::to_string(&retained) {
            Ok(json) => json,
            Err(err) => {
                log::error!("Failed to serialize commands: {}", err);
                "[]".to_string()
            }
        }
    }
}
