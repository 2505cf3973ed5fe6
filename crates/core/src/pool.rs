//! Ordered bubble container with compaction of inert entries.
//!
//! Insertion order is the hit-test tie-break, so removal must never reorder
//! survivors. `compact` uses `Vec::retain`, which keeps relative order.

use bevy::math::Vec2;

use crate::bubble::Bubble;

#[derive(Debug, Clone, Default)]
pub struct BubblePool {
    bubbles: Vec<Bubble>,
    next_id: u64,
}

impl BubblePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bubble at the end of the insertion order and return its id.
    pub fn spawn(&mut self, pos: Vec2, radius: f32, speed: f32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.bubbles.push(Bubble::new(id, pos, radius, speed));
        id
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Total bubbles ever spawned into this pool.
    pub fn spawned_total(&self) -> u64 {
        self.next_id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Bubble> {
        self.bubbles.iter_mut()
    }

    pub fn get(&self, id: u64) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.bubbles.iter().filter(|b| b.active).count()
    }

    /// First active bubble (insertion order) containing `point`.
    pub fn first_hit_mut(&mut self, point: Vec2) -> Option<&mut Bubble> {
        self.bubbles
            .iter_mut()
            .find(|b| b.active && b.contains(point))
    }

    /// Drop inert bubbles. Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.bubbles.len();
        self.bubbles.retain(|b| !b.is_inert());
        before - self.bubbles.len()
    }

    /// Test and tooling hook: insert a fully specified bubble, keeping ids monotonic.
    pub fn push(&mut self, mut bubble: Bubble) -> u64 {
        bubble.id = self.next_id;
        self.next_id += 1;
        let id = bubble.id;
        self.bubbles.push(bubble);
        id
    }
}
