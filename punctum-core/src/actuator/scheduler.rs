//! Settle-time scheduler for dot actuators
//!
//! Drive reversals stress the actuator coils, so a dot must dwell a
//! minimum settle time between them. Deferred targets are committed by a
//! full scan in [`DotScheduler::tick`]; the dot count is small and
//! bounded, so the scan stays cheap. Immediate commits exist for direct
//! single-dot interactive control.

use heapless::Vec;

use super::dot::{DotPosition, DotState};
use crate::config::MAX_DOTS;

/// Settle-time scheduler owning the state of every dot actuator
#[derive(Debug, Clone)]
pub struct DotScheduler {
    dots: Vec<DotState, MAX_DOTS>,
    settle_ms: u32,
}

impl DotScheduler {
    /// Create a scheduler for `dot_count` dots, all retracted and idle
    ///
    /// `dot_count` is clamped to [`MAX_DOTS`].
    pub fn new(dot_count: usize, settle_ms: u32) -> Self {
        let mut dots = Vec::new();
        for _ in 0..dot_count.min(MAX_DOTS) {
            let _ = dots.push(DotState::default());
        }
        Self { dots, settle_ms }
    }

    /// Number of dots under management
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// True when managing no dots
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Configured settle time in milliseconds
    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    /// Inspect one dot's state
    pub fn dot(&self, index: usize) -> Option<&DotState> {
        self.dots.get(index)
    }

    /// Set a dot's target position
    ///
    /// With `immediate` the current state changes synchronously and any
    /// pending action is cancelled; the caller is expected to re-serialize
    /// and refresh right away. Otherwise the commit is scheduled for
    /// `now_ms + settle_ms`; re-issuing a deferred target restarts that
    /// settle window, so a replaced target always waits the full interval
    /// from its last overwrite.
    ///
    /// Out-of-range indices are ignored: callers derive indices from
    /// validated cell/dot arguments, so this guard is purely defensive.
    /// Returns whether a commit happened now.
    pub fn set_target(
        &mut self,
        index: usize,
        target: DotPosition,
        immediate: bool,
        now_ms: u32,
    ) -> bool {
        let dot = match self.dots.get_mut(index) {
            Some(dot) => dot,
            None => return false,
        };

        dot.target = target;
        if immediate {
            dot.current = target;
            dot.action_at_ms = now_ms;
            dot.action_pending = false;
            true
        } else {
            dot.action_at_ms = now_ms.wrapping_add(self.settle_ms);
            dot.action_pending = true;
            false
        }
    }

    /// Commit every pending action whose settle window has elapsed
    ///
    /// Full scan over all dots. Returns whether anything committed, which
    /// signals the caller that re-serialization (and, if enabled, a
    /// physical refresh) is due.
    pub fn tick(&mut self, now_ms: u32) -> bool {
        let mut committed = false;
        for dot in self.dots.iter_mut() {
            if dot.action_pending && now_ms >= dot.action_at_ms {
                dot.current = dot.target;
                dot.action_pending = false;
                committed = true;
            }
        }
        committed
    }

    /// Commit pending actions in a dot range regardless of their due time
    ///
    /// Used for interactively-issued cell updates while the display is
    /// enabled, where responsiveness wins over the settle discipline.
    /// Returns whether anything committed.
    pub fn commit_range(&mut self, start: usize, count: usize) -> bool {
        let end = start.saturating_add(count).min(self.dots.len());
        let mut committed = false;
        for dot in self.dots[start.min(end)..end].iter_mut() {
            if dot.action_pending {
                dot.current = dot.target;
                dot.action_pending = false;
                committed = true;
            }
        }
        committed
    }

    /// Force a dot's current and target position, cancelling any pending action
    ///
    /// Bypasses the settle window entirely; only the mirrored-text path
    /// uses this.
    pub fn force_position(&mut self, index: usize, position: DotPosition) {
        if let Some(dot) = self.dots.get_mut(index) {
            dot.target = position;
            dot.current = position;
            dot.action_pending = false;
        }
    }

    /// Iterate the committed position of every dot, in index order
    pub fn positions(&self) -> impl Iterator<Item = DotPosition> + '_ {
        self.dots.iter().map(|dot| dot.current)
    }

    /// Number of dots with a commit still pending
    pub fn pending_count(&self) -> usize {
        self.dots.iter().filter(|dot| dot.action_pending).count()
    }
}
