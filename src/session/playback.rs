//! Pattern playback sequencing.
//!
//! Playback is a cooperative, cancellable chain of scheduled actions: each
//! element is revealed for the level's reveal duration, hidden for a fixed
//! blank gap, and a final action hands the board to the player. All steps
//! carry the scheduling epoch, so regenerating the round (which bumps the
//! epoch) cancels an in-flight playback wholesale.

use crate::core::{PendingAction, Scheduler};

/// Blank gap between revealed elements, in milliseconds.
pub const PLAYBACK_GAP_MS: u64 = 200;

/// Queue the full reveal/hide chain for a pattern of `length` elements.
///
/// The first reveal is due immediately at `now`; the caller flushes due
/// actions right after scheduling so the opening symbol shows without an
/// explicit time advance.
pub fn schedule_playback(
    scheduler: &mut Scheduler,
    now: u64,
    epoch: u64,
    length: usize,
    reveal_ms: u64,
) {
    let mut t = now;
    for i in 0..length {
        scheduler.schedule(t, epoch, PendingAction::PlaybackReveal(i));
        t += reveal_ms;
        scheduler.schedule(t, epoch, PendingAction::PlaybackHide(i));
        t += PLAYBACK_GAP_MS;
    }
    scheduler.schedule(t, epoch, PendingAction::PlaybackDone);
}

/// Total wall time of a playback run.
#[must_use]
pub fn playback_duration(length: usize, reveal_ms: u64) -> u64 {
    (reveal_ms + PLAYBACK_GAP_MS) * length as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_shape() {
        let mut scheduler = Scheduler::new();
        schedule_playback(&mut scheduler, 0, 1, 2, 1000);

        // reveal(0)@0 hide(0)@1000 reveal(1)@1200 hide(1)@2200 done@2400
        assert_eq!(scheduler.len(), 5);

        let expected = [
            (0, PendingAction::PlaybackReveal(0)),
            (1000, PendingAction::PlaybackHide(0)),
            (1200, PendingAction::PlaybackReveal(1)),
            (2200, PendingAction::PlaybackHide(1)),
            (2400, PendingAction::PlaybackDone),
        ];
        for (due, action) in expected {
            let fired = scheduler.pop_due(2400).unwrap();
            assert_eq!((fired.due, fired.action), (due, action));
        }
    }

    #[test]
    fn test_duration_matches_last_step() {
        let mut scheduler = Scheduler::new();
        schedule_playback(&mut scheduler, 500, 1, 3, 800);

        let total = playback_duration(3, 800);
        assert_eq!(total, 3000);

        let mut last = 0;
        while let Some(s) = scheduler.pop_due(u64::MAX) {
            last = last.max(s.due);
        }
        assert_eq!(last, 500 + total);
    }
}
