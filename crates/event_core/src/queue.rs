use crate::{EventEnvelope, EventSourceTag};
use bb_core::{GameEvent, Transition};
use bevy::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub event: EventEnvelope,
    pub transition: Transition,
    pub frame_processed: u64,
}

/// FIFO of pending game events plus a bounded journal of processed ones.
///
/// Events stamped with the current frame (or earlier) go straight to `incoming`.
/// Events stamped with a later frame wait in `next_frame` until the reducer
/// promotes them at the end of its pass.
#[derive(Resource, Debug)]
pub struct EventQueue {
    incoming: VecDeque<EventEnvelope>,
    next_frame: VecDeque<EventEnvelope>,
    journal: VecDeque<JournalEntry>,
    pub(crate) journal_capacity: usize,
}

impl EventQueue {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            incoming: VecDeque::new(),
            next_frame: VecDeque::new(),
            journal: VecDeque::with_capacity(cap.min(4096)),
            journal_capacity: cap,
        }
    }

    pub fn journal_capacity(&self) -> usize {
        self.journal_capacity
    }

    pub fn set_journal_capacity(&mut self, cap: usize) {
        self.journal_capacity = cap;
        while self.journal.len() > cap {
            self.journal.pop_front();
        }
    }

    pub fn enqueue(&mut self, ev: EventEnvelope, current_frame: u64) {
        if ev.frame_enqueued <= current_frame {
            self.incoming.push_back(ev);
        } else {
            self.next_frame.push_back(ev);
        }
    }

    pub fn enqueue_game(&mut self, event: GameEvent, source: EventSourceTag, frame: u64) {
        self.enqueue(EventEnvelope::new(event, source, frame), frame);
    }

    pub fn drain_for_frame(&mut self) -> Vec<EventEnvelope> {
        self.incoming.drain(..).collect()
    }

    pub fn promote_next_frame(&mut self) {
        self.incoming.extend(self.next_frame.drain(..));
    }

    /// Events waiting for the next reducer pass, deferred ones included.
    pub fn pending(&self) -> usize {
        self.incoming.len() + self.next_frame.len()
    }

    pub fn push_journal(&mut self, entry: JournalEntry) {
        if self.journal_capacity == 0 {
            return;
        }
        if self.journal.len() == self.journal_capacity {
            self.journal.pop_front();
        }
        self.journal.push_back(entry);
    }

    pub fn journal(&self) -> impl DoubleEndedIterator<Item = &JournalEntry> {
        self.journal.iter()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_capacity(512)
    }
}
