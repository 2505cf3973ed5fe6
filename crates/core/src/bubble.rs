//! Bubble entity model.

use bevy::math::Vec2;

/// Lifecycle phase derived from the `active` flag and the burst timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubblePhase {
    /// Falling and clickable.
    Falling,
    /// Clicked; dissolve animation still running.
    Bursting,
    /// Exited the screen or finished bursting. Removed on the next compaction.
    Inert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Spawn sequence number, strictly increasing in insertion order.
    pub id: u64,
    /// Center in logical coordinates (origin bottom-left).
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical distance covered per frame tick.
    pub speed: f32,
    pub active: bool,
    /// Seconds left in the burst animation; 0 when not bursting.
    pub burst_timer: f32,
}

impl Bubble {
    pub fn new(id: u64, pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            id,
            pos,
            radius,
            speed,
            active: true,
            burst_timer: 0.0,
        }
    }

    pub fn phase(&self) -> BubblePhase {
        if self.active {
            BubblePhase::Falling
        } else if self.burst_timer > 0.0 {
            BubblePhase::Bursting
        } else {
            BubblePhase::Inert
        }
    }

    pub fn is_bursting(&self) -> bool {
        self.phase() == BubblePhase::Bursting
    }

    pub fn is_inert(&self) -> bool {
        self.phase() == BubblePhase::Inert
    }

    /// Whether the bubble should be drawn this frame.
    pub fn is_visible(&self) -> bool {
        self.phase() != BubblePhase::Inert
    }

    /// Strict containment: a point exactly on the rim is a miss.
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }

    /// Start the dissolve animation. Caller guarantees the bubble was active.
    pub fn burst(&mut self, duration: f32) {
        self.active = false;
        self.burst_timer = duration;
    }

    /// Advance one frame tick. Returns true when this tick took the bubble off screen.
    pub fn step(&mut self, screen_height: f32, burst_decay: f32) -> bool {
        match self.phase() {
            BubblePhase::Falling => {
                self.pos.y += self.speed;
                if self.pos.y > screen_height + self.radius {
                    self.active = false;
                    return true;
                }
                false
            }
            BubblePhase::Bursting => {
                self.burst_timer = (self.burst_timer - burst_decay).max(0.0);
                false
            }
            BubblePhase::Inert => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bubble_is_falling() {
        let b = Bubble::new(0, Vec2::new(10.0, -50.0), 25.0, 2.0);
        assert_eq!(b.phase(), BubblePhase::Falling);
        assert_eq!(b.burst_timer, 0.0);
        assert!(b.is_visible());
    }

    #[test]
    fn contains_is_strict() {
        let b = Bubble::new(0, Vec2::new(100.0, 100.0), 30.0, 1.0);
        assert!(b.contains(Vec2::new(100.0, 100.0)));
        assert!(b.contains(Vec2::new(129.9, 100.0)));
        assert!(!b.contains(Vec2::new(130.0, 100.0)));
        assert!(!b.contains(Vec2::new(100.0, 131.0)));
    }

    #[test]
    fn exits_past_bottom_edge_plus_radius() {
        let mut b = Bubble::new(0, Vec2::new(100.0, 590.0), 30.0, 20.0);
        assert!(!b.step(600.0, 0.016));
        assert_eq!(b.pos.y, 610.0);
        assert!(b.active);
        // 630 is not strictly greater than 600 + 30
        assert!(!b.step(600.0, 0.016));
        assert!(b.active);
        assert!(b.step(600.0, 0.016));
        assert!(!b.active);
        assert!(b.is_inert(), "exit does not start a burst");
        let y = b.pos.y;
        assert!(!b.step(600.0, 0.016));
        assert_eq!(b.pos.y, y, "inert bubbles do not move");
    }

    #[test]
    fn burst_decays_to_exactly_zero() {
        let mut b = Bubble::new(0, Vec2::ZERO, 20.0, 1.0);
        b.burst(0.3);
        assert!(b.is_bursting());
        assert!(!b.active);
        let mut ticks = 0;
        while b.is_bursting() {
            b.step(600.0, 0.016);
            ticks += 1;
            assert!(ticks < 100, "burst never finished");
        }
        assert_eq!(b.burst_timer, 0.0);
        assert_eq!(ticks, 19); // ceil(0.3 / 0.016)
        assert_eq!(b.pos, Vec2::ZERO, "bursting bubbles do not fall");
    }
}
