//! Core engine types: RNG, errors, scheduled actions.
//!
//! This module contains the game-agnostic building blocks. Games configure
//! the engine via level tables rather than modifying the core.

pub mod error;
pub mod rng;
pub mod schedule;

pub use error::EngineError;
pub use rng::GameRng;
pub use schedule::{PendingAction, Scheduled, Scheduler};
