//! Pattern-replay rounds: ordered-sequence verification.
//!
//! The generated pattern is disclosed by the playback sequencer before any
//! replay input is accepted. Input is compared positionally against the
//! pattern only once its length equals the pattern's length; a wrong
//! prefix is not rejected early.

use serde::Serialize;
use smallvec::SmallVec;

use crate::content::INSTRUMENTS;
use crate::core::{EngineError, GameRng};

/// Progress of the player's replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternProgress {
    /// Input ignored (playback in flight or unknown symbol).
    Rejected,
    /// Symbol accepted; the sequence is not yet complete.
    Pending,
    /// Input reached full length and was compared.
    Complete { correct: bool },
}

/// A pattern round: the target sequence plus replay state.
#[derive(Clone, Debug)]
pub struct PatternRound {
    sequence: Vec<&'static str>,
    input: SmallVec<[&'static str; 8]>,
    /// Index of the element currently revealed by playback.
    revealed: Option<usize>,
    /// While true, playback owns the board and input is rejected.
    playing: bool,
}

impl PatternRound {
    /// Draw `length` symbols uniformly with replacement from the
    /// instrument set. The round starts in playback mode.
    pub fn generate(length: usize, rng: &mut GameRng) -> Result<Self, EngineError> {
        if INSTRUMENTS.is_empty() {
            return Err(EngineError::InsufficientPool {
                needed: 1,
                available: 0,
            });
        }
        let sequence = (0..length)
            .map(|_| INSTRUMENTS[rng.gen_range_usize(0..INSTRUMENTS.len())])
            .collect();

        Ok(Self {
            sequence,
            input: SmallVec::new(),
            revealed: None,
            playing: true,
        })
    }

    /// Record a played symbol and, at full length, verify the replay.
    pub fn push(&mut self, symbol: &str) -> PatternProgress {
        if self.playing {
            return PatternProgress::Rejected;
        }
        // Map onto the static instrument set; the board offers nothing else.
        let Some(&known) = INSTRUMENTS.iter().find(|i| **i == symbol) else {
            log::debug!("unknown instrument {symbol:?} ignored");
            return PatternProgress::Rejected;
        };
        if self.input.len() >= self.sequence.len() {
            return PatternProgress::Rejected;
        }

        self.input.push(known);
        if self.input.len() < self.sequence.len() {
            return PatternProgress::Pending;
        }

        PatternProgress::Complete {
            correct: self.input.as_slice() == self.sequence.as_slice(),
        }
    }

    // === Playback sequencer hooks ===

    /// Reveal element `i` of the sequence.
    pub fn reveal(&mut self, i: usize) {
        if i < self.sequence.len() {
            self.revealed = Some(i);
        }
    }

    /// Enter the blank gap between reveals.
    pub fn hide(&mut self) {
        self.revealed = None;
    }

    /// Playback finished; start accepting replay input.
    pub fn finish_playback(&mut self) {
        self.playing = false;
        self.revealed = None;
    }

    /// Whether playback still owns the board.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Pattern length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the pattern is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The target sequence, for tests that replay it.
    #[must_use]
    pub fn sequence(&self) -> &[&'static str] {
        &self.sequence
    }

    /// Symbols entered so far.
    #[must_use]
    pub fn entered(&self) -> usize {
        self.input.len()
    }

    /// Renderable snapshot. Only the currently revealed symbol is exposed,
    /// never the whole sequence.
    #[must_use]
    pub fn view(&self) -> PatternView {
        PatternView {
            length: self.sequence.len(),
            revealed: self.revealed.map(|i| self.sequence[i]),
            playing: self.playing,
            entered: self.input.len(),
        }
    }
}

/// Presentation snapshot of a pattern round.
#[derive(Clone, Debug, Serialize)]
pub struct PatternView {
    pub length: usize,
    pub revealed: Option<&'static str>,
    pub playing: bool,
    pub entered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay_ready(seed: u64, length: usize) -> PatternRound {
        let mut round = PatternRound::generate(length, &mut GameRng::new(seed)).unwrap();
        round.finish_playback();
        round
    }

    #[test]
    fn test_symbols_from_instrument_set() {
        let round = PatternRound::generate(7, &mut GameRng::new(42)).unwrap();
        for symbol in round.sequence() {
            assert!(INSTRUMENTS.contains(symbol));
        }
    }

    #[test]
    fn test_input_rejected_during_playback() {
        let mut round = PatternRound::generate(3, &mut GameRng::new(42)).unwrap();
        assert!(round.is_playing());
        assert_eq!(round.push(INSTRUMENTS[0]), PatternProgress::Rejected);
        assert_eq!(round.entered(), 0);
    }

    #[test]
    fn test_correct_replay() {
        let mut round = replay_ready(42, 3);
        let target: Vec<_> = round.sequence().to_vec();

        assert_eq!(round.push(target[0]), PatternProgress::Pending);
        assert_eq!(round.push(target[1]), PatternProgress::Pending);
        assert_eq!(
            round.push(target[2]),
            PatternProgress::Complete { correct: true }
        );
    }

    #[test]
    fn test_no_early_termination_on_wrong_prefix() {
        let mut round = replay_ready(42, 3);
        let target: Vec<_> = round.sequence().to_vec();
        let wrong = INSTRUMENTS.iter().find(|i| **i != target[0]).unwrap();

        // Wrong first symbol still reports Pending until full length.
        assert_eq!(round.push(wrong), PatternProgress::Pending);
        assert_eq!(round.push(target[1]), PatternProgress::Pending);
        assert_eq!(
            round.push(target[2]),
            PatternProgress::Complete { correct: false }
        );
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let mut round = replay_ready(42, 3);
        assert_eq!(round.push("🎻"), PatternProgress::Rejected);
        assert_eq!(round.entered(), 0);
    }

    #[test]
    fn test_playback_hooks_drive_view() {
        let mut round = PatternRound::generate(3, &mut GameRng::new(42)).unwrap();
        assert_eq!(round.view().revealed, None);

        round.reveal(0);
        assert_eq!(round.view().revealed, Some(round.sequence()[0]));

        round.hide();
        assert_eq!(round.view().revealed, None);

        round.finish_playback();
        assert!(!round.view().playing);
    }

    #[test]
    fn test_generation_deterministic() {
        let r1 = PatternRound::generate(5, &mut GameRng::new(8)).unwrap();
        let r2 = PatternRound::generate(5, &mut GameRng::new(8)).unwrap();
        assert_eq!(r1.sequence(), r2.sequence());
    }
}
