// Shared helpers for the event core integration tests.

use bb_core::GameEvent;
use bb_event_core::{EventQueue, EventSourceTag, FrameCounter};
use bevy::prelude::*;

pub trait EnqueueExt {
    /// Enqueue an event for the next reducer pass.
    fn enqueue_game_event(&mut self, event: GameEvent, source: EventSourceTag) -> &mut Self;
}

impl EnqueueExt for App {
    fn enqueue_game_event(&mut self, event: GameEvent, source: EventSourceTag) -> &mut Self {
        let frame = self.world().resource::<FrameCounter>().0;
        self.world_mut()
            .resource_mut::<EventQueue>()
            .enqueue_game(event, source, frame);
        self
    }
}
