use bb_core::GameEvent;

/// Where an event came from. Journaled alongside the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSourceTag {
    /// Fixed-cadence frame tick.
    FrameClock,
    /// One-second countdown timer.
    RoundClock,
    /// Mouse input.
    Input,
    Test,
}

/// Envelope adds metadata required for journaling.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEnvelope {
    pub event: GameEvent,
    pub source: EventSourceTag,
    pub frame_enqueued: u64,
}

impl EventEnvelope {
    pub fn new(event: GameEvent, source: EventSourceTag, frame: u64) -> Self {
        Self {
            event,
            source,
            frame_enqueued: frame,
        }
    }
}
