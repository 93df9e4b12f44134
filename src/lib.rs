//! # playkit
//!
//! A headless session engine for educational mini-games.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, no wall clock, no I/O. The caller
//!    forwards input events and drives virtual time with
//!    [`Session::advance`]; it reads state back as [`SessionView`]
//!    snapshots.
//!
//! 2. **Deterministic**: Every source of randomness flows through a
//!    seeded [`GameRng`]. Same game, same seed, same inputs — same
//!    session, byte for byte.
//!
//! 3. **Configuration Over Convention**: One state machine runs every
//!    game. Games are immutable [`GameSpec`] level tables; difficulty
//!    progression lives in the data, not in code paths.
//!
//! ## Modules
//!
//! - `core`: Errors, seeded RNG, the epoch-tagged action scheduler
//! - `content`: Static question banks, tile faces, match categories
//! - `levels`: Level tables, round parameters, advancement policies
//! - `rounds`: Generated round state and verification per game variant
//! - `session`: The session state machine, countdown, playback sequencing
//! - `games`: The built-in game catalog
//!
//! ## Example
//!
//! ```
//! use playkit::{games, Phase, Session};
//!
//! let mut session = Session::new(games::memory_cards(), 42)?;
//! session.start()?;
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! // Two seconds pass without input; untimed games just wait.
//! session.advance(2_000)?;
//! assert_eq!(session.phase(), Phase::Playing);
//! # Ok::<(), playkit::EngineError>(())
//! ```

pub mod content;
pub mod core;
pub mod games;
pub mod levels;
pub mod rounds;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng};
pub use crate::levels::{AdvancePolicy, GameSpec, LevelSpec, Op, RoundParams};
pub use crate::rounds::{Round, RoundView};
pub use crate::session::{Feedback, Phase, Session, SessionEffect, SessionView};
