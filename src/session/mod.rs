//! The session state machine.
//!
//! One parameterized machine drives every mini-game: a level table plus a
//! round variant per level, with score-gated advancement. All mutation
//! happens in response to discrete external events (input calls and
//! `advance` ticks) processed one at a time; the timer and the playback
//! sequencer are the only sources of delayed transitions, and both go
//! through the epoch-tagged scheduler so nothing stale ever fires.
//!
//! ## Phases
//!
//! ```text
//! Idle -> Playing -> {Feedback} -> (next round | LevelCleared | GameOver)
//!                                   -> (Playing[next level] | AllLevelsComplete)
//! ```
//!
//! `reset` returns to `Idle` from anywhere; `start` begins at level 0.

pub mod playback;
pub mod timer;

pub use playback::{playback_duration, PLAYBACK_GAP_MS};
pub use timer::Countdown;

use serde::Serialize;

use crate::core::{EngineError, GameRng, PendingAction, Scheduler};
use crate::levels::{AdvancePolicy, GameSpec, RoundParams};
use crate::rounds::{FlipOutcome, MatchAttempt, PatternProgress, Round, RoundView};

/// How long transient feedback stays up before the next transition, in ms.
pub const FEEDBACK_DELAY_MS: u64 = 1500;

/// How long a mismatched memory pair stays visible before flipping back.
pub const MISMATCH_SETTLE_MS: u64 = 1000;

/// The session state machine's current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Waiting for an explicit start.
    Idle,
    /// Accepting input; timer (if configured) running.
    Playing,
    /// Transient pause after a verification result.
    Feedback,
    /// A cleared round in a repeat-until-mastery level, before the next
    /// deck/pattern regenerates.
    LevelCleared,
    /// Terminal for the attempt.
    GameOver,
    /// Terminal celebratory state.
    AllLevelsComplete,
}

/// One-shot effects the presentation layer consumes exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionEffect {
    /// A failed match attempt (transient shake).
    Mismatch,
    /// The session advanced to the next level.
    LevelCleared,
    /// The final level's clear condition was satisfied (celebration).
    AllLevelsComplete,
}

/// Transient verification feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    /// Display text, as worded in the games.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct! Great job!",
            Feedback::Incorrect => "Oops! Try again!",
        }
    }
}

/// Read-only snapshot of the session after an event.
#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub level_index: usize,
    pub level_name: &'static str,
    pub score: u32,
    /// Score required to clear the current level.
    pub rounds_target: u32,
    /// Whole seconds left, `None` for untimed levels.
    pub time_remaining: Option<u64>,
    pub round: Option<RoundView>,
    pub feedback: Option<Feedback>,
    pub accepting_input: bool,
}

/// A single game attempt: level progression, scoring, timing.
///
/// The session exclusively owns its state; the presentation layer reads
/// [`Session::view`] snapshots, drains [`Session::take_effects`], and
/// forwards input events.
pub struct Session {
    spec: GameSpec,
    rng: GameRng,
    phase: Phase,
    level_index: usize,
    score: u32,
    round: Option<Round>,
    timer: Option<Countdown>,
    feedback: Option<Feedback>,
    /// Virtual clock in milliseconds, advanced by the caller.
    clock: u64,
    /// Bumped on every state-superseding transition; stale scheduled
    /// actions carry an older epoch and are skipped.
    epoch: u64,
    scheduler: Scheduler,
    effects: Vec<SessionEffect>,
    celebrated: bool,
}

impl Session {
    /// Create a session for a game. Fails on an empty level table.
    pub fn new(spec: GameSpec, seed: u64) -> Result<Self, EngineError> {
        if spec.levels.is_empty() {
            return Err(EngineError::EmptyLevelTable);
        }
        Ok(Self {
            spec,
            rng: GameRng::new(seed),
            phase: Phase::Idle,
            level_index: 0,
            score: 0,
            round: None,
            timer: None,
            feedback: None,
            clock: 0,
            epoch: 0,
            scheduler: Scheduler::new(),
            effects: Vec::new(),
            celebrated: false,
        })
    }

    // === Inbound events ===

    /// Begin (or restart) the attempt at level 0.
    ///
    /// Generation failure aborts the start: the session stays out of
    /// `Playing` and no state is mutated.
    pub fn start(&mut self) -> Result<(), EngineError> {
        match self.phase {
            Phase::Idle | Phase::GameOver | Phase::AllLevelsComplete => {
                self.celebrated = false;
                self.start_level(0)
            }
            _ => {
                log::debug!("start ignored in phase {:?}", self.phase);
                Ok(())
            }
        }
    }

    /// Submit a typed or chosen answer (arithmetic and quiz rounds).
    pub fn submit_answer(&mut self, input: &str) -> Result<(), EngineError> {
        if self.phase != Phase::Playing {
            log::debug!("submit_answer ignored in phase {:?}", self.phase);
            return Ok(());
        }
        enum Answered {
            Arithmetic(bool),
            Quiz(bool),
        }
        let answered = match &self.round {
            Some(Round::Arithmetic(r)) => Answered::Arithmetic(r.check(input)),
            Some(Round::Quiz(r)) => Answered::Quiz(r.check(input)),
            _ => {
                log::debug!("submit_answer ignored for this round variant");
                return Ok(());
            }
        };

        match answered {
            Answered::Arithmetic(true) => {
                self.score += 1;
                self.feedback = Some(Feedback::Correct);
                if self.score >= self.goal() {
                    self.clear_level()?;
                } else {
                    self.phase = Phase::Feedback;
                    self.schedule_in(FEEDBACK_DELAY_MS, PendingAction::NextRound);
                }
            }
            Answered::Arithmetic(false) => {
                // No penalty beyond elapsed time; the round stays up.
                self.feedback = Some(Feedback::Incorrect);
                self.schedule_in(FEEDBACK_DELAY_MS, PendingAction::ClearFeedback);
            }
            Answered::Quiz(correct) => {
                if correct {
                    self.score += 1;
                }
                self.feedback = Some(if correct {
                    Feedback::Correct
                } else {
                    Feedback::Incorrect
                });
                self.phase = Phase::Feedback;
                self.schedule_in(FEEDBACK_DELAY_MS, PendingAction::AdvanceQuestion);
            }
        }
        Ok(())
    }

    /// Arm an item for matching (select-and-match rounds).
    pub fn select_item(&mut self, id: u32) {
        if self.phase != Phase::Playing {
            return;
        }
        if let Some(Round::Matching(r)) = &mut self.round {
            r.select(id);
        }
    }

    /// Try to match the armed item against a target category.
    pub fn match_target(&mut self, category: &str) -> Result<(), EngineError> {
        if self.phase != Phase::Playing {
            return Ok(());
        }
        let attempt = match &mut self.round {
            Some(Round::Matching(r)) => r.attempt(category),
            _ => return Ok(()),
        };
        match attempt {
            MatchAttempt::NothingArmed => {}
            MatchAttempt::Matched { complete } => {
                self.score += 1;
                self.feedback = Some(Feedback::Correct);
                if complete {
                    self.round_concluded(Phase::Feedback)?;
                }
            }
            MatchAttempt::Mismatch => {
                self.effects.push(SessionEffect::Mismatch);
                self.feedback = Some(Feedback::Incorrect);
            }
        }
        Ok(())
    }

    /// Flip a memory tile.
    pub fn flip_tile(&mut self, id: u32) -> Result<(), EngineError> {
        if self.phase != Phase::Playing {
            return Ok(());
        }
        let outcome = match &mut self.round {
            Some(Round::Memory(r)) => r.flip(id),
            _ => return Ok(()),
        };
        match outcome {
            FlipOutcome::Ignored | FlipOutcome::FirstUp => {}
            FlipOutcome::Matched { complete } => {
                if complete {
                    // One cleared deck scores one point toward mastery.
                    self.score += 1;
                    self.round_concluded(Phase::LevelCleared)?;
                }
            }
            FlipOutcome::Mismatch { first, second } => {
                self.schedule_in(
                    MISMATCH_SETTLE_MS,
                    PendingAction::SettleMismatch { first, second },
                );
            }
        }
        Ok(())
    }

    /// Play an instrument symbol (pattern rounds).
    pub fn play_symbol(&mut self, symbol: &str) -> Result<(), EngineError> {
        if self.phase != Phase::Playing {
            return Ok(());
        }
        let progress = match &mut self.round {
            Some(Round::Pattern(r)) => r.push(symbol),
            _ => return Ok(()),
        };
        if let PatternProgress::Complete { correct } = progress {
            if correct {
                self.score += 1;
                self.feedback = Some(Feedback::Correct);
            } else {
                self.feedback = Some(Feedback::Incorrect);
            }
            self.round_concluded(Phase::Feedback)?;
        }
        Ok(())
    }

    /// Advance the virtual clock by `ms`, firing due transitions in order.
    ///
    /// The countdown burns only while `Playing`; scheduled actions fire in
    /// due order interleaved with expiry.
    pub fn advance(&mut self, ms: u64) -> Result<(), EngineError> {
        let mut remaining = ms;
        loop {
            self.flush_due()?;
            if remaining == 0 {
                break;
            }

            let mut step = remaining;
            if let Some(due) = self.scheduler.next_due() {
                step = step.min(due.saturating_sub(self.clock));
            }
            if self.phase == Phase::Playing {
                if let Some(timer) = &self.timer {
                    if !timer.is_expired() {
                        step = step.min(timer.remaining_ms());
                    }
                }
            }
            let step = step.clamp(1, remaining);

            self.clock += step;
            remaining -= step;

            if self.phase == Phase::Playing {
                let expired = match &mut self.timer {
                    Some(timer) => timer.advance(step),
                    None => false,
                };
                if expired {
                    // Expiry is terminal for the attempt, regardless of
                    // any pending input or scheduled transition.
                    self.finish();
                }
            }
        }
        Ok(())
    }

    /// Return to `Idle`, dropping the round, timer, and pending actions.
    pub fn reset(&mut self) {
        self.supersede();
        self.phase = Phase::Idle;
        self.level_index = 0;
        self.score = 0;
        self.round = None;
        self.timer = None;
        self.feedback = None;
        self.effects.clear();
        self.celebrated = false;
    }

    // === Outbound state ===

    /// Read-only snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let level = &self.spec.levels[self.level_index];
        SessionView {
            phase: self.phase,
            level_index: self.level_index,
            level_name: level.name,
            score: self.score,
            rounds_target: level.goal,
            time_remaining: self.timer.map(|t| t.remaining_secs()),
            round: self.round.as_ref().map(Round::view),
            feedback: self.feedback,
            accepting_input: self.phase == Phase::Playing
                && self.round.as_ref().is_some_and(Round::accepts_input),
        }
    }

    /// Drain one-shot effects. Each effect is observed at most once.
    pub fn take_effects(&mut self) -> Vec<SessionEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round, if one is active.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The game this session runs.
    #[must_use]
    pub fn game_name(&self) -> &'static str {
        self.spec.name
    }

    // === Transitions ===

    fn goal(&self) -> u32 {
        self.spec.levels[self.level_index].goal
    }

    /// Invalidate everything scheduled so far.
    fn supersede(&mut self) {
        self.epoch += 1;
        self.scheduler.clear();
    }

    fn schedule_in(&mut self, delay: u64, action: PendingAction) {
        self.scheduler
            .schedule(self.clock + delay, self.epoch, action);
    }

    /// Generate and enter a level. The round is built before any state is
    /// committed, so a pool-exhausted level leaves the session untouched.
    fn start_level(&mut self, index: usize) -> Result<(), EngineError> {
        let level = self.spec.level(index)?;
        let round = Round::generate(level, &mut self.rng)?;
        let timer = level.time_budget.map(Countdown::from_secs);

        self.supersede();
        self.level_index = index;
        self.score = 0;
        self.feedback = None;
        self.round = Some(round);
        self.timer = timer;
        self.phase = Phase::Playing;
        self.begin_playback()
    }

    /// Regenerate the round for the current level (next question, next
    /// deck, next pattern). Score and timer carry over.
    fn next_round(&mut self) -> Result<(), EngineError> {
        let level = &self.spec.levels[self.level_index];
        let round = Round::generate(level, &mut self.rng)?;

        self.supersede();
        self.feedback = None;
        self.round = Some(round);
        self.phase = Phase::Playing;
        self.begin_playback()
    }

    /// Queue the playback chain when the active round is a pattern.
    fn begin_playback(&mut self) -> Result<(), EngineError> {
        let (length, reveal_ms) = match (&self.round, &self.spec.levels[self.level_index].params) {
            (Some(Round::Pattern(r)), RoundParams::Pattern { reveal_ms, .. }) => {
                (r.len(), *reveal_ms)
            }
            _ => return Ok(()),
        };
        playback::schedule_playback(&mut self.scheduler, self.clock, self.epoch, length, reveal_ms);
        // The opening reveal is due immediately.
        self.flush_due()
    }

    /// A round ran out of content (questions exhausted, deck cleared,
    /// pattern compared, board emptied). Decide what happens next.
    fn round_concluded(&mut self, pause: Phase) -> Result<(), EngineError> {
        if self.score >= self.goal() {
            return self.clear_level();
        }
        match self.spec.advance {
            AdvancePolicy::SingleClear => {
                self.finish();
                Ok(())
            }
            AdvancePolicy::RepeatedClears => {
                self.phase = pause;
                self.schedule_in(FEEDBACK_DELAY_MS, PendingAction::NextRound);
                Ok(())
            }
        }
    }

    /// The level's clear condition is met: advance or celebrate.
    fn clear_level(&mut self) -> Result<(), EngineError> {
        if self.spec.is_last_level(self.level_index) {
            self.supersede();
            self.phase = Phase::AllLevelsComplete;
            if !self.celebrated {
                self.celebrated = true;
                self.effects.push(SessionEffect::AllLevelsComplete);
            }
            Ok(())
        } else {
            self.effects.push(SessionEffect::LevelCleared);
            self.start_level(self.level_index + 1)
        }
    }

    /// End the attempt.
    fn finish(&mut self) {
        self.supersede();
        self.phase = Phase::GameOver;
    }

    /// Fire every due scheduled action, skipping stale epochs.
    fn flush_due(&mut self) -> Result<(), EngineError> {
        while let Some(scheduled) = self.scheduler.pop_due(self.clock) {
            if scheduled.epoch != self.epoch {
                log::trace!("stale scheduled action {:?} skipped", scheduled.action);
                continue;
            }
            self.apply(scheduled.action)?;
        }
        Ok(())
    }

    fn apply(&mut self, action: PendingAction) -> Result<(), EngineError> {
        match action {
            PendingAction::ClearFeedback => {
                self.feedback = None;
                Ok(())
            }
            PendingAction::AdvanceQuestion => self.advance_question(),
            PendingAction::NextRound => self.next_round(),
            PendingAction::SettleMismatch { first, second } => {
                if let Some(Round::Memory(r)) = &mut self.round {
                    r.settle(first, second);
                }
                Ok(())
            }
            PendingAction::PlaybackReveal(i) => {
                if let Some(Round::Pattern(r)) = &mut self.round {
                    r.reveal(i);
                }
                Ok(())
            }
            PendingAction::PlaybackHide(_) => {
                if let Some(Round::Pattern(r)) = &mut self.round {
                    r.hide();
                }
                Ok(())
            }
            PendingAction::PlaybackDone => {
                if let Some(Round::Pattern(r)) = &mut self.round {
                    r.finish_playback();
                }
                Ok(())
            }
        }
    }

    fn advance_question(&mut self) -> Result<(), EngineError> {
        self.feedback = None;
        let more = match &mut self.round {
            Some(Round::Quiz(r)) => r.advance(),
            _ => return Ok(()),
        };
        if more {
            self.phase = Phase::Playing;
            Ok(())
        } else {
            self.round_concluded(Phase::Feedback)
        }
    }
}
