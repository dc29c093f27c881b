use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::farming::SourceId;

#[derive(Debug, Clone, Copy)]
pub struct RecoveryEntry {
    pub source: SourceId,
    pub due: f32,
    order: usize,
}

impl PartialEq for RecoveryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RecoveryEntry {}

impl PartialOrd for RecoveryEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecoveryEntry {
    // reversed, binary heap pops the earliest due entry first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Pending source recoveries ordered by due time.
///
/// Polled at a fixed cadence, entries with equal due time recover in
/// scheduling order.
#[derive(Debug, Default)]
pub struct RecoveryScheduler {
    queue: BinaryHeap<RecoveryEntry>,
    scheduled: usize,
    tick: f32,
}

pub const RECOVERY_CHECK_INTERVAL: f32 = 1.0;

impl RecoveryScheduler {
    pub fn schedule(&mut self, source: SourceId, due: f32) {
        self.scheduled += 1;
        self.queue.push(RecoveryEntry {
            source,
            due,
            order: self.scheduled,
        });
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn is_scheduled(&self, source: SourceId) -> bool {
        self.queue.iter().any(|entry| entry.source == source)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drains entries due at `now`, stops at the first entry not yet due.
    pub fn take_due(&mut self, now: f32) -> Vec<SourceId> {
        let mut due = vec![];
        while let Some(entry) = self.queue.peek() {
            if entry.due > now {
                break;
            }
            due.push(entry.source);
            self.queue.pop();
        }
        due
    }

    /// Advances the poll clock and drains due entries once per check interval.
    pub fn poll(&mut self, time: f32, now: f32) -> Vec<SourceId> {
        if !self.is_waiting() {
            self.tick = 0.0;
            return vec![];
        }
        self.tick += time;
        if self.tick < RECOVERY_CHECK_INTERVAL {
            return vec![];
        }
        self.tick = 0.0;
        self.take_due(now)
    }
}
