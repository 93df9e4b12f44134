//! Select-and-match rounds (emotion recognition, shape sorting).
//!
//! Two-phase verification: `select` arms an item, `attempt` compares the
//! armed item's category against a clicked target slot. The arm is cleared
//! after every attempt, hit or miss. A miss signals `Mismatch` (the view's
//! transient shake) without penalizing score or ending the round.

use serde::Serialize;

use crate::content::MatchCategory;
use crate::core::{EngineError, GameRng};

/// One draggable item still on the board.
#[derive(Clone, Copy, Debug)]
pub struct MatchItem {
    pub id: u32,
    pub category: &'static MatchCategory,
}

/// Result of a match attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchAttempt {
    /// No item was armed; the click is ignored.
    NothingArmed,
    /// Armed item matched the target and left the board.
    Matched {
        /// True when the board is now empty.
        complete: bool,
    },
    /// Armed item did not belong to the target.
    Mismatch,
}

/// A select-and-match round.
#[derive(Clone, Debug)]
pub struct MatchingRound {
    items: Vec<MatchItem>,
    slots: Vec<&'static MatchCategory>,
    armed: Option<u32>,
    matched: u32,
    initial: u32,
}

impl MatchingRound {
    /// Build one item per category plus an independently shuffled slot
    /// order. Items and slots always hold the same category multiset.
    pub fn generate(
        categories: &'static [MatchCategory],
        rng: &mut GameRng,
    ) -> Result<Self, EngineError> {
        if categories.is_empty() {
            return Err(EngineError::InsufficientPool {
                needed: 1,
                available: 0,
            });
        }

        let items = categories
            .iter()
            .enumerate()
            .map(|(i, category)| MatchItem {
                id: i as u32,
                category,
            })
            .collect();

        let mut slots: Vec<&'static MatchCategory> = categories.iter().collect();
        rng.shuffle(&mut slots);

        Ok(Self {
            items,
            slots,
            armed: None,
            matched: 0,
            initial: categories.len() as u32,
        })
    }

    /// Arm an item for the next target click. Re-selecting replaces any
    /// previous arm. Unknown ids are ignored.
    pub fn select(&mut self, id: u32) {
        if self.items.iter().any(|i| i.id == id) {
            self.armed = Some(id);
        } else {
            log::debug!("select ignored: item {id} not on the board");
        }
    }

    /// Compare the armed item against a target category.
    pub fn attempt(&mut self, target: &str) -> MatchAttempt {
        let Some(id) = self.armed.take() else {
            return MatchAttempt::NothingArmed;
        };

        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return MatchAttempt::NothingArmed;
        };

        if self.items[pos].category.name == target {
            self.items.remove(pos);
            self.matched += 1;
            MatchAttempt::Matched {
                complete: self.items.is_empty(),
            }
        } else {
            MatchAttempt::Mismatch
        }
    }

    /// Items still unmatched.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// Matches completed so far.
    #[must_use]
    pub fn matched(&self) -> u32 {
        self.matched
    }

    /// The starting item count.
    #[must_use]
    pub fn initial(&self) -> u32 {
        self.initial
    }

    /// Slot order, for multiset checks.
    #[must_use]
    pub fn slots(&self) -> &[&'static MatchCategory] {
        &self.slots
    }

    /// Remaining item categories, for multiset checks.
    pub fn item_categories(&self) -> impl Iterator<Item = &'static MatchCategory> + '_ {
        self.items.iter().map(|i| i.category)
    }

    /// Renderable snapshot.
    #[must_use]
    pub fn view(&self) -> MatchingView {
        MatchingView {
            items: self
                .items
                .iter()
                .map(|i| MatchItemView {
                    id: i.id,
                    glyph: i.category.glyph,
                })
                .collect(),
            slots: self.slots.iter().map(|c| c.name).collect(),
            armed: self.armed,
            matched: self.matched,
        }
    }
}

/// A visible item: id plus glyph, category name withheld.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MatchItemView {
    pub id: u32,
    pub glyph: &'static str,
}

/// Presentation snapshot of a matching round.
#[derive(Clone, Debug, Serialize)]
pub struct MatchingView {
    pub items: Vec<MatchItemView>,
    pub slots: Vec<&'static str>,
    pub armed: Option<u32>,
    pub matched: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SHAPES;

    fn round(seed: u64) -> MatchingRound {
        MatchingRound::generate(SHAPES, &mut GameRng::new(seed)).unwrap()
    }

    fn multiset(names: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
        let mut v: Vec<_> = names.collect();
        v.sort();
        v
    }

    #[test]
    fn test_items_and_slots_same_multiset() {
        for seed in 0..20 {
            let r = round(seed);
            assert_eq!(
                multiset(r.item_categories().map(|c| c.name)),
                multiset(r.slots().iter().map(|c| c.name)),
            );
        }
    }

    #[test]
    fn test_attempt_without_selection_ignored() {
        let mut r = round(1);
        assert_eq!(r.attempt("circle"), MatchAttempt::NothingArmed);
        assert_eq!(r.remaining(), 4);
    }

    #[test]
    fn test_correct_match_removes_item() {
        let mut r = round(1);
        r.select(0); // SHAPES[0] is the circle
        assert_eq!(r.attempt("circle"), MatchAttempt::Matched { complete: false });
        assert_eq!(r.remaining(), 3);
        assert_eq!(r.matched(), 1);
        // The arm is spent.
        assert_eq!(r.attempt("circle"), MatchAttempt::NothingArmed);
    }

    #[test]
    fn test_mismatch_keeps_pool_and_clears_arm() {
        let mut r = round(1);
        r.select(0);
        assert_eq!(r.attempt("square"), MatchAttempt::Mismatch);
        assert_eq!(r.remaining(), 4, "mismatch must not shrink the pool");
        assert_eq!(r.attempt("circle"), MatchAttempt::NothingArmed);
    }

    #[test]
    fn test_pool_strictly_shrinks_to_complete() {
        let mut r = round(3);
        for (i, expected_left) in (0u32..4).zip([3usize, 2, 1, 0]) {
            let name = SHAPES[i as usize].name;
            r.select(i);
            let attempt = r.attempt(name);
            assert_eq!(
                attempt,
                MatchAttempt::Matched {
                    complete: expected_left == 0
                }
            );
            assert_eq!(r.remaining(), expected_left);
            assert_eq!(r.remaining() as u32 + r.matched(), r.initial());
        }
    }

    #[test]
    fn test_select_unknown_item_ignored() {
        let mut r = round(1);
        r.select(99);
        assert_eq!(r.attempt("circle"), MatchAttempt::NothingArmed);
    }

    #[test]
    fn test_reselect_replaces_arm() {
        let mut r = round(1);
        r.select(0);
        r.select(1); // SHAPES[1] is the square
        assert_eq!(r.attempt("square"), MatchAttempt::Matched { complete: false });
    }
}
