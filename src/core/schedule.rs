//! Cancellable scheduled actions on a virtual clock.
//!
//! Every delayed transition in the engine (feedback clear, next-round
//! regeneration, mismatch settle, pattern playback steps) is a
//! [`Scheduled`] action tagged with the session epoch that created it.
//! The session bumps its epoch on any state-superseding event, so a stale
//! action that fires afterwards is skipped instead of mutating a newer
//! round's state.
//!
//! Time is virtual: the caller advances it explicitly, which keeps the
//! engine headless and the test suite free of real sleeps.

/// A delayed session transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    /// Clear transient feedback text.
    ClearFeedback,

    /// Move a multi-question round to its next question.
    AdvanceQuestion,

    /// Regenerate the round for the current level.
    NextRound,

    /// Flip a mismatched memory pair back face-down.
    SettleMismatch { first: u32, second: u32 },

    /// Reveal pattern element `i` during playback.
    PlaybackReveal(usize),

    /// Hide pattern element `i` (blank gap between reveals).
    PlaybackHide(usize),

    /// Playback finished; start accepting replay input.
    PlaybackDone,
}

/// An action queued for a future instant, stamped with its owning epoch.
#[derive(Clone, Copy, Debug)]
pub struct Scheduled {
    /// Virtual time (ms) at which the action fires.
    pub due: u64,
    /// Session epoch when the action was scheduled.
    pub epoch: u64,
    /// Insertion order, to break ties deterministically.
    seq: u64,
    /// The transition to apply.
    pub action: PendingAction,
}

/// Queue of pending actions ordered by due time, then insertion order.
///
/// The queue is tiny (a handful of entries at most, bounded by pattern
/// length), so a plain vector scan beats a heap here.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    queue: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to fire at virtual time `due`.
    pub fn schedule(&mut self, due: u64, epoch: u64, action: PendingAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled {
            due,
            epoch,
            seq,
            action,
        });
    }

    /// Earliest due time among queued actions, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.iter().map(|s| s.due).min()
    }

    /// Remove and return the earliest action with `due <= now`.
    ///
    /// Ties fire in insertion order, which keeps playback reveal/hide
    /// pairs deterministic.
    pub fn pop_due(&mut self, now: u64) -> Option<Scheduled> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= now)
            .min_by_key(|(_, s)| (s.due, s.seq))
            .map(|(i, _)| i)?;
        Some(self.queue.swap_remove(idx))
    }

    /// Drop every queued action.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Number of queued actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_due_ordering() {
        let mut sched = Scheduler::new();
        sched.schedule(200, 0, PendingAction::ClearFeedback);
        sched.schedule(100, 0, PendingAction::NextRound);
        sched.schedule(100, 0, PendingAction::PlaybackDone);

        // Nothing due yet.
        assert!(sched.pop_due(50).is_none());

        // Equal due times fire in insertion order.
        assert_eq!(sched.pop_due(100).unwrap().action, PendingAction::NextRound);
        assert_eq!(
            sched.pop_due(100).unwrap().action,
            PendingAction::PlaybackDone
        );
        assert!(sched.pop_due(100).is_none());

        assert_eq!(
            sched.pop_due(250).unwrap().action,
            PendingAction::ClearFeedback
        );
        assert!(sched.is_empty());
    }

    #[test]
    fn test_next_due() {
        let mut sched = Scheduler::new();
        assert_eq!(sched.next_due(), None);

        sched.schedule(500, 0, PendingAction::ClearFeedback);
        sched.schedule(300, 0, PendingAction::NextRound);
        assert_eq!(sched.next_due(), Some(300));
    }

    #[test]
    fn test_clear() {
        let mut sched = Scheduler::new();
        sched.schedule(100, 0, PendingAction::ClearFeedback);
        sched.clear();
        assert!(sched.is_empty());
        assert!(sched.pop_due(1000).is_none());
    }

    #[test]
    fn test_epoch_is_preserved() {
        let mut sched = Scheduler::new();
        sched.schedule(100, 7, PendingAction::NextRound);

        let fired = sched.pop_due(100).unwrap();
        assert_eq!(fired.epoch, 7);
    }
}
