//! Memory tile rounds: tile-pair verification.
//!
//! At most two tiles are face-up pending comparison at any time; a third
//! flip while two are pending is ignored. A mismatched pair stays visible
//! until the session's settle delay elapses, then `settle` flips both back
//! face-down. `settle` re-checks that it still refers to the pending pair,
//! so a stale scheduled callback is inert.

use serde::Serialize;
use smallvec::SmallVec;

use crate::content::TILE_FACES;
use crate::core::{EngineError, GameRng};

/// One tile in the deck.
#[derive(Clone, Copy, Debug)]
struct Tile {
    face: &'static str,
    face_up: bool,
    matched: bool,
}

/// Result of a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Flip was ignored (pair pending, tile already up, or unknown id).
    Ignored,
    /// First tile of a pair is now face-up.
    FirstUp,
    /// Second tile matched the first; both are matched permanently.
    Matched {
        /// True when every pair is matched.
        complete: bool,
    },
    /// Second tile did not match; the pair stays up until settled.
    Mismatch { first: u32, second: u32 },
}

/// A memory deck round.
#[derive(Clone, Debug)]
pub struct MemoryRound {
    tiles: Vec<Tile>,
    pending: SmallVec<[u32; 2]>,
    moves: u32,
    matched_pairs: u32,
    pairs: u32,
}

impl MemoryRound {
    /// Sample `pairs` distinct faces, duplicate each, shuffle the deck.
    /// Every face appears exactly twice; all tiles start face-down.
    pub fn generate(pairs: usize, rng: &mut GameRng) -> Result<Self, EngineError> {
        let faces = rng.sample(TILE_FACES, pairs)?;

        let mut deck: Vec<&'static str> = Vec::with_capacity(pairs * 2);
        deck.extend(faces.iter().copied());
        deck.extend(faces.iter().copied());
        rng.shuffle(&mut deck);

        Ok(Self {
            tiles: deck
                .into_iter()
                .map(|face| Tile {
                    face,
                    face_up: false,
                    matched: false,
                })
                .collect(),
            pending: SmallVec::new(),
            moves: 0,
            matched_pairs: 0,
            pairs: pairs as u32,
        })
    }

    /// Flip a tile face-up and, on the second flip, compare the pair.
    ///
    /// The moves counter increments once per completed two-flip attempt,
    /// matched or not.
    pub fn flip(&mut self, id: u32) -> FlipOutcome {
        if self.pending.len() == 2 {
            return FlipOutcome::Ignored;
        }
        let Some(tile) = self.tiles.get(id as usize) else {
            log::debug!("flip ignored: no tile {id}");
            return FlipOutcome::Ignored;
        };
        if tile.face_up || tile.matched {
            return FlipOutcome::Ignored;
        }

        self.tiles[id as usize].face_up = true;
        self.pending.push(id);

        if self.pending.len() < 2 {
            return FlipOutcome::FirstUp;
        }

        self.moves += 1;
        let first = self.pending[0];
        let second = self.pending[1];

        if self.tiles[first as usize].face == self.tiles[second as usize].face {
            self.tiles[first as usize].matched = true;
            self.tiles[second as usize].matched = true;
            self.matched_pairs += 1;
            self.pending.clear();
            FlipOutcome::Matched {
                complete: self.matched_pairs == self.pairs,
            }
        } else {
            FlipOutcome::Mismatch { first, second }
        }
    }

    /// Flip a mismatched pair back face-down.
    ///
    /// No-op unless `(first, second)` is exactly the pending pair: a
    /// settle callback that outlived its pair must not touch newer state.
    pub fn settle(&mut self, first: u32, second: u32) {
        if self.pending.as_slice() != [first, second] {
            log::debug!("stale settle for pair ({first}, {second}) ignored");
            return;
        }
        self.tiles[first as usize].face_up = false;
        self.tiles[second as usize].face_up = false;
        self.pending.clear();
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    /// Total pairs in the deck.
    #[must_use]
    pub fn pairs(&self) -> u32 {
        self.pairs
    }

    /// Completed two-flip attempts.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether a mismatched pair is waiting for its settle delay.
    #[must_use]
    pub fn has_pending_pair(&self) -> bool {
        self.pending.len() == 2
    }

    /// Tile faces in deck order, for invariant checks.
    pub fn faces(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tiles.iter().map(|t| t.face)
    }

    /// Ids of unmatched tiles showing `face`. Test helper for driving a
    /// full game without peeking at internals elsewhere.
    #[must_use]
    pub fn unmatched_ids_for(&self, face: &str) -> Vec<u32> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.face == face && !t.matched)
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Renderable snapshot. Face-down tiles expose no face.
    #[must_use]
    pub fn view(&self) -> MemoryView {
        MemoryView {
            tiles: self
                .tiles
                .iter()
                .enumerate()
                .map(|(i, t)| TileView {
                    id: i as u32,
                    face: (t.face_up || t.matched).then_some(t.face),
                    matched: t.matched,
                })
                .collect(),
            moves: self.moves,
            matched_pairs: self.matched_pairs,
            pairs: self.pairs,
        }
    }
}

/// One tile as the presentation layer sees it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TileView {
    pub id: u32,
    /// `None` while face-down.
    pub face: Option<&'static str>,
    pub matched: bool,
}

/// Presentation snapshot of a memory round.
#[derive(Clone, Debug, Serialize)]
pub struct MemoryView {
    pub tiles: Vec<TileView>,
    pub moves: u32,
    pub matched_pairs: u32,
    pub pairs: u32,
}
