//! Gameplay rules
//!
//! Pure rule logic only. No handler here touches the scene, schedules a
//! timer or reads a clock: the host engine delivers events (frames, spawn
//! ticks, overlaps, pointer input) and applies the returned `Command`
//! batches. All state a session needs lives in `GameplayController` plus
//! the injected `PlayerRecords`.

pub mod command;
pub mod controller;
pub mod entity;
pub mod input;
pub mod session;

pub use command::{Command, Notice, PlayerAnim, Sound, Target};
pub use controller::GameplayController;
pub use entity::{EntityId, EntityKind};
pub use input::{ControlZone, FrameInput, KeySample, PlayerView};
pub use session::{BackgroundTier, GamePhase, Outcome, Session, SessionSummary};
