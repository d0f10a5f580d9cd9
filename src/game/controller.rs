//! The gameplay controller
//!
//! Owns per-session rule state and reacts to host events with command
//! batches. The host calls exactly one handler per event on its own
//! loop; handlers never run concurrently and never block. Player
//! records are injected per call so the application context keeps them
//! across sessions.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::command::{Command, Notice, PlayerAnim, Sound, Target};
use super::entity::{EntityId, EntityKind, EntityLedger};
use super::input::{ControlZone, FrameInput, PlayerView};
use super::session::{BackgroundTier, GamePhase, Outcome, Session, SessionSummary};
use crate::consts::*;
use crate::records::PlayerRecords;
use crate::tuning::Tuning;
use crate::{in_play_area, play_area_center};

/// Rule logic for one browser page: name capture, sessions, spawning,
/// scoring and input mapping.
#[derive(Debug)]
pub struct GameplayController {
    tuning: Tuning,
    rng: Pcg32,
    phase: GamePhase,
    session: Option<Session>,
    /// Captured once per page load; restarts reuse it
    player_name: Option<String>,
    name_requested: bool,
    entities: EntityLedger,
    /// Player body from the latest frame, for pointer-jump grounding
    last_player: Option<PlayerView>,
}

impl GameplayController {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("Gameplay controller ready (seed {})", seed);
        Self {
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::AwaitingName,
            session: None,
            player_name: None,
            name_requested: false,
            entities: EntityLedger::default(),
            last_player: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    /// Scene finished loading. The first call asks the page for a name;
    /// any further call while still unnamed repeats the blocking notice.
    pub fn on_scene_ready(&mut self) -> Vec<Command> {
        match self.phase {
            GamePhase::AwaitingName if !self.name_requested => {
                self.name_requested = true;
                vec![Command::RequestName]
            }
            GamePhase::AwaitingName => vec![Command::ShowNotice(Notice::NameRequired)],
            _ => Vec::new(),
        }
    }

    /// Name prompt answered; `None` means the player cancelled it.
    /// A usable name starts the session. The first captured name sticks
    /// for the rest of the page load.
    pub fn on_name_entered(
        &mut self,
        name: Option<&str>,
        records: &mut PlayerRecords,
    ) -> Vec<Command> {
        if self.phase != GamePhase::AwaitingName {
            return Vec::new();
        }
        match name {
            Some(entered) if !entered.is_empty() => {
                let name = self
                    .player_name
                    .get_or_insert_with(|| entered.to_string())
                    .clone();
                self.begin_session(&name, records)
            }
            _ => {
                log::info!("Name entry empty or cancelled, staying blocked");
                vec![Command::ShowNotice(Notice::NameRequired)]
            }
        }
    }

    /// Repeating spawn timer fired
    pub fn on_spawn_tick(&mut self) -> Vec<Command> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        let mut out = Vec::new();

        // One more platform every tick; the whole group keeps scrolling
        let platform = self.entities.spawn(EntityKind::Platform);
        out.push(Command::Spawn {
            id: platform,
            kind: EntityKind::Platform,
            pos: self.top_spawn_pos(),
        });
        out.push(Command::SetVelocityY {
            target: Target::Platforms,
            vy: self.tuning.scroll_speed(),
        });

        // Half the ticks also drop a pickup pair and a hazard, and
        // re-roll the shared drift directions
        if self.rng.random_bool(0.5) {
            let star = self.entities.spawn(EntityKind::Star);
            out.push(Command::Spawn {
                id: star,
                kind: EntityKind::Star,
                pos: self.top_spawn_pos(),
            });
            let coin = self.entities.spawn(EntityKind::RedCoin);
            out.push(Command::Spawn {
                id: coin,
                kind: EntityKind::RedCoin,
                pos: self.top_spawn_pos(),
            });
            let obstacle = self.entities.spawn(EntityKind::Obstacle);
            out.push(Command::Spawn {
                id: obstacle,
                kind: EntityKind::Obstacle,
                pos: self.top_spawn_pos(),
            });
            out.push(Command::SetVelocityY {
                target: Target::Collectibles,
                vy: self.tuning.fall_speed(),
            });
            out.push(Command::SetVelocityY {
                target: Target::Obstacles,
                vy: self.tuning.fall_speed(),
            });
            out.push(Command::SetVelocityX {
                target: Target::Entity(obstacle),
                vx: self.random_drift(),
            });
            out.push(Command::SetVelocityX {
                target: Target::Platforms,
                vx: self.random_drift(),
            });
        }
        out
    }

    /// Host physics reported the player touching an entity
    pub fn on_player_overlap(
        &mut self,
        id: EntityId,
        records: &mut PlayerRecords,
    ) -> Vec<Command> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        match self.entities.kind_of(id) {
            Some(EntityKind::Star) => self.collect(id, STAR_POINTS, records),
            Some(EntityKind::RedCoin) => self.collect(id, RED_COIN_POINTS, records),
            Some(EntityKind::Obstacle) => self.end_session(records),
            // Landing on a platform is the host's collision business
            Some(EntityKind::Platform) => Vec::new(),
            None => {
                log::warn!("Overlap with unknown entity {:?}", id);
                Vec::new()
            }
        }
    }

    /// World snapshot for this frame, keyboard sample included
    pub fn on_frame(&mut self, frame: &FrameInput, records: &mut PlayerRecords) -> Vec<Command> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        self.last_player = Some(frame.player);

        let mut out = Vec::new();

        // Background tier follows the score; recolor only on change
        if let Some(session) = self.session.as_mut() {
            let tier = BackgroundTier::for_score(session.score);
            if tier != session.tier {
                session.tier = tier;
                out.push(Command::SetBackground(tier));
            }
        }

        // Airborne pickups fall under player gravity
        for collectible in &frame.collectibles {
            if !collectible.resting {
                out.push(Command::SetGravityY {
                    target: Target::Entity(collectible.id),
                    gravity: self.tuning.gravity,
                });
            }
        }

        // Obstacles that reached the bottom band bounce off the sides
        for obstacle in &frame.obstacles {
            if obstacle.pos.y + obstacle.half_height >= PLAY_HEIGHT {
                if obstacle.vel_x > 0.0 && obstacle.pos.x >= PLAY_WIDTH {
                    out.push(Command::SetVelocityX {
                        target: Target::Entity(obstacle.id),
                        vx: -DRIFT_SPEED,
                    });
                } else if obstacle.vel_x < 0.0 && obstacle.pos.x <= 0.0 {
                    out.push(Command::SetVelocityX {
                        target: Target::Entity(obstacle.id),
                        vx: DRIFT_SPEED,
                    });
                }
            }
        }

        // Leaving the play area ends the session, outcome by score
        if !in_play_area(frame.player.pos) {
            out.extend(self.end_session(records));
            return out;
        }

        // Keyboard steering
        if frame.keys.left {
            out.push(Command::SetVelocityX {
                target: Target::Player,
                vx: -self.tuning.run_speed,
            });
            out.push(Command::PlayAnimation(PlayerAnim::Left));
            out.push(Command::PlaySound(Sound::Movement));
        } else if frame.keys.right {
            out.push(Command::SetVelocityX {
                target: Target::Player,
                vx: self.tuning.run_speed,
            });
            out.push(Command::PlayAnimation(PlayerAnim::Right));
            out.push(Command::PlaySound(Sound::Movement));
        } else {
            out.push(Command::SetVelocityX {
                target: Target::Player,
                vx: 0.0,
            });
            out.push(Command::PlayAnimation(PlayerAnim::Idle));
        }

        if frame.keys.up && frame.player.grounded {
            out.extend(self.jump());
        }

        out
    }

    /// Pointer moved: the play area's horizontal thirds steer the player
    pub fn on_pointer_move(&mut self, x: f32) -> Vec<Command> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        match ControlZone::at(x) {
            ControlZone::Left => vec![
                Command::SetVelocityX {
                    target: Target::Player,
                    vx: -self.tuning.pointer_speed(),
                },
                Command::PlaySound(Sound::Movement),
            ],
            ControlZone::Right => vec![
                Command::SetVelocityX {
                    target: Target::Player,
                    vx: self.tuning.pointer_speed(),
                },
                Command::PlaySound(Sound::Movement),
            ],
            ControlZone::Middle => vec![Command::SetVelocityX {
                target: Target::Player,
                vx: 0.0,
            }],
        }
    }

    /// Primary button pressed. A middle-zone press jumps when the player
    /// was grounded on the latest frame; side presses kill vertical
    /// motion while steering.
    pub fn on_pointer_down(&mut self, x: f32) -> Vec<Command> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        match ControlZone::at(x) {
            ControlZone::Middle => {
                let grounded = self.last_player.map(|p| p.grounded).unwrap_or(false);
                if grounded { self.jump() } else { Vec::new() }
            }
            _ => vec![Command::SetVelocityY {
                target: Target::Player,
                vy: 0.0,
            }],
        }
    }

    /// Pointer released: stop horizontal steering
    pub fn on_pointer_up(&mut self) -> Vec<Command> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        vec![Command::SetVelocityX {
            target: Target::Player,
            vx: 0.0,
        }]
    }

    /// Restart control activated on the summary screen
    pub fn on_restart(&mut self, records: &mut PlayerRecords) -> Vec<Command> {
        match self.phase {
            GamePhase::GameOver | GamePhase::Victory => {}
            _ => {
                log::debug!("Restart ignored in {:?}", self.phase);
                return Vec::new();
            }
        }
        let Some(name) = self.player_name.clone() else {
            // A session cannot end without a captured name, but if it
            // ever did, fall back to a fresh name request
            self.phase = GamePhase::AwaitingName;
            self.name_requested = false;
            return self.on_scene_ready();
        };
        let mut out = vec![Command::ClearScene];
        out.extend(self.begin_session(&name, records));
        out
    }

    /// Start a fresh session for the named player. Emits the scene
    /// setup batch in the order the host applies it.
    fn begin_session(&mut self, name: &str, records: &mut PlayerRecords) -> Vec<Command> {
        records.ensure(name);
        self.phase = GamePhase::Playing;
        self.session = Some(Session::new(name));
        self.entities.clear();
        self.last_player = None;
        log::info!("Session started for {}", name);

        let mut out = Vec::with_capacity(INITIAL_PLATFORM_COUNT + 8);
        out.push(Command::SetBackground(BackgroundTier::Default));
        for _ in 0..INITIAL_PLATFORM_COUNT {
            let pos = Vec2::new(
                self.rng.random_range(0.0..PLAY_WIDTH),
                self.rng.random_range(0.0..PLAY_HEIGHT),
            );
            let id = self.entities.spawn(EntityKind::Platform);
            out.push(Command::Spawn {
                id,
                kind: EntityKind::Platform,
                pos,
            });
        }
        out.push(Command::SpawnPlayer {
            pos: play_area_center(),
        });
        out.push(Command::SetGravityY {
            target: Target::Player,
            gravity: self.tuning.gravity,
        });
        out.push(Command::SetScoreText(0));
        out.push(Command::StartSpawnTimer {
            period_ms: self.tuning.spawn_period_ms,
        });
        out.push(Command::ShowTouchControls);
        out.push(Command::StartMusic);
        out
    }

    /// Despawn a collected pickup and bank its points; hitting the
    /// winning score ends the session on the spot.
    fn collect(&mut self, id: EntityId, points: u32, records: &mut PlayerRecords) -> Vec<Command> {
        self.entities.remove(id);
        let mut out = vec![Command::Despawn(id)];
        let Some(session) = self.session.as_mut() else {
            return out;
        };
        session.score += points;
        out.push(Command::SetScoreText(session.score));
        if session.score >= WIN_SCORE {
            out.extend(self.end_session(records));
        }
        out
    }

    /// Close the session: fold the score into the records, halt the
    /// scene and emit the summary.
    fn end_session(&mut self, records: &mut PlayerRecords) -> Vec<Command> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        session.alive = false;
        let outcome = session.outcome();
        self.phase = match outcome {
            Outcome::Victory => GamePhase::Victory,
            Outcome::GameOver => GamePhase::GameOver,
        };
        // Both outcomes update the record
        let best = records.record(&session.player_name, session.score);
        log::info!(
            "Session over for {}: {:?} at {} (best {})",
            session.player_name,
            outcome,
            session.score,
            best
        );
        vec![
            Command::StopAllAudio,
            Command::SetVelocityX {
                target: Target::Player,
                vx: 0.0,
            },
            Command::SetVelocityY {
                target: Target::Player,
                vy: 0.0,
            },
            Command::ShowSummary(SessionSummary {
                outcome,
                player_name: session.player_name.clone(),
                score: session.score,
                best_score: best,
            }),
        ]
    }

    fn jump(&self) -> Vec<Command> {
        vec![
            Command::SetVelocityY {
                target: Target::Player,
                vy: -self.tuning.jump_speed(),
            },
            Command::PlaySound(Sound::Jump),
        ]
    }

    fn top_spawn_pos(&mut self) -> Vec2 {
        Vec2::new(self.rng.random_range(0.0..PLAY_WIDTH), 0.0)
    }

    /// ±DRIFT_SPEED with equal probability
    fn random_drift(&mut self) -> f32 {
        if self.rng.random_bool(0.5) {
            -DRIFT_SPEED
        } else {
            DRIFT_SPEED
        }
    }
}
