//! Frame-driven roll scheduling: per-die animation tasks joined by a
//! counted barrier.
//!
//! Each die's final outcome is selected up front; the remaining frames
//! only resample a preview outcome for visual cycling. On its last frame
//! a task commits the final outcome to the board and settles, emitting
//! `DieSettled` exactly once. The payout latch on the barrier can be
//! consumed exactly once, so the total is never applied twice.

use rand::rngs::StdRng;

use dm_core::{Board, RollOutcome};

use crate::error::GameResult;
use crate::event::GameEvent;

/// Animation state for a single die.
#[derive(Debug, Clone)]
struct DieRollTask {
    die: usize,
    frames_left: u32,
    final_outcome: RollOutcome,
    preview: RollOutcome,
    settled: bool,
}

/// All per-die roll tasks for one board roll, joined by a counted
/// barrier with a consume-once payout latch.
#[derive(Debug, Clone)]
pub struct RollInFlight {
    tasks: Vec<DieRollTask>,
    settled: usize,
    payout_taken: bool,
}

impl RollInFlight {
    /// Start a roll over every die on the board. Final outcomes are
    /// selected now; nothing is committed until a task's last frame.
    pub fn start(board: &Board, rng: &mut StdRng, frames: u32) -> Self {
        let frames = frames.max(1);
        let tasks = board
            .dice()
            .iter()
            .enumerate()
            .map(|(die, d)| {
                let final_outcome = d.outcome_for(d.select_slots(rng));
                let preview = d.outcome_for(d.select_slots(rng));
                DieRollTask {
                    die,
                    frames_left: frames,
                    final_outcome,
                    preview,
                    settled: false,
                }
            })
            .collect();
        Self {
            tasks,
            settled: 0,
            payout_taken: false,
        }
    }

    /// Advance every unsettled task by one frame. Tasks that reach their
    /// last frame commit their final outcome to the board and signal
    /// completion once; the rest resample a preview.
    pub fn tick(&mut self, board: &mut Board, rng: &mut StdRng) -> GameResult<Vec<GameEvent>> {
        let mut events = Vec::new();
        for task in &mut self.tasks {
            if task.settled {
                continue;
            }
            task.frames_left -= 1;
            if task.frames_left == 0 {
                board.die_mut(task.die)?.commit(task.final_outcome);
                task.settled = true;
                self.settled += 1;
                events.push(GameEvent::DieSettled { die: task.die });
            } else {
                let die = board.die(task.die)?;
                task.preview = die.outcome_for(die.select_slots(rng));
            }
        }
        Ok(events)
    }

    /// The outcome a die is currently showing mid-animation.
    pub fn preview(&self, die: usize) -> Option<RollOutcome> {
        self.tasks.iter().find(|t| t.die == die).map(|t| {
            if t.settled {
                t.final_outcome
            } else {
                t.preview
            }
        })
    }

    /// True once every die has settled.
    pub fn all_settled(&self) -> bool {
        self.settled == self.tasks.len()
    }

    /// Consume the payout latch. Returns true only the first time, and
    /// only after every die has settled.
    pub fn take_payout(&mut self) -> bool {
        if !self.all_settled() || self.payout_taken {
            return false;
        }
        self.payout_taken = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_core::FaceArena;
    use rand::SeedableRng;

    #[test]
    fn dice_settle_after_the_frame_budget() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(3, &mut arena);
        let mut rng = StdRng::seed_from_u64(4);
        let mut roll = RollInFlight::start(&board, &mut rng, 7);

        let mut settled_events = 0;
        for frame in 0..7 {
            assert!(!roll.all_settled(), "settled early at frame {frame}");
            let events = roll.tick(&mut board, &mut rng).unwrap();
            settled_events += events
                .iter()
                .filter(|e| matches!(e, GameEvent::DieSettled { .. }))
                .count();
        }
        assert!(roll.all_settled());
        assert_eq!(settled_events, 3);
        for die in board.dice() {
            assert!(die.outcome().is_some());
        }
    }

    #[test]
    fn nothing_commits_before_the_last_frame() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(1, &mut arena);
        let mut rng = StdRng::seed_from_u64(8);
        let mut roll = RollInFlight::start(&board, &mut rng, 5);

        for _ in 0..4 {
            roll.tick(&mut board, &mut rng).unwrap();
            assert!(board.die(0).unwrap().outcome().is_none());
        }
        roll.tick(&mut board, &mut rng).unwrap();
        assert!(board.die(0).unwrap().outcome().is_some());
    }

    #[test]
    fn committed_outcome_matches_the_upfront_selection() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(1, &mut arena);
        let mut rng = StdRng::seed_from_u64(12);
        let mut roll = RollInFlight::start(&board, &mut rng, 3);
        let expected = roll.tasks[0].final_outcome;

        while !roll.all_settled() {
            roll.tick(&mut board, &mut rng).unwrap();
        }
        assert_eq!(board.die(0).unwrap().outcome(), Some(expected));
        assert_eq!(roll.preview(0), Some(expected));
    }

    #[test]
    fn ticking_past_settle_emits_nothing_more() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(2, &mut arena);
        let mut rng = StdRng::seed_from_u64(2);
        let mut roll = RollInFlight::start(&board, &mut rng, 1);

        let first = roll.tick(&mut board, &mut rng).unwrap();
        assert_eq!(first.len(), 2);
        let second = roll.tick(&mut board, &mut rng).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn payout_latch_consumes_once() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(1, &mut arena);
        let mut rng = StdRng::seed_from_u64(6);
        let mut roll = RollInFlight::start(&board, &mut rng, 2);

        assert!(!roll.take_payout(), "latch open before settling");
        while !roll.all_settled() {
            roll.tick(&mut board, &mut rng).unwrap();
        }
        assert!(roll.take_payout());
        assert!(!roll.take_payout());
    }

    #[test]
    fn previews_are_geometrically_valid() {
        let mut arena = FaceArena::new();
        let mut board = Board::standard(1, &mut arena);
        let mut rng = StdRng::seed_from_u64(3);
        let mut roll = RollInFlight::start(&board, &mut rng, 10);

        let slots = *board.die(0).unwrap().slots();
        for _ in 0..9 {
            roll.tick(&mut board, &mut rng).unwrap();
            let preview = roll.preview(0).unwrap();
            // The previewed handles must all come from this die.
            for id in [preview.top, preview.left, preview.right] {
                assert!(slots.contains(&id));
            }
        }
    }
}
