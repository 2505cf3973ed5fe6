//! Timer-driven event sources: the fixed-cadence frame tick and the 1 Hz round clock.
//!
//! Both stop emitting once the round is over; anything already queued is
//! answered with `Transition::Ignored` by the reducer.

use bb_core::{GameEvent, GameState};
use bb_event_core::{EventQueue, EventSourceTag, FrameCounter};
use bevy::prelude::*;

/// Repeating one-second timer that drives `SecondElapsed`.
#[derive(Resource, Debug)]
pub struct RoundClock(pub Timer);

impl Default for RoundClock {
    fn default() -> Self {
        Self(Timer::from_seconds(1.0, TimerMode::Repeating))
    }
}

/// FixedUpdate system: one `Tick` per fixed step.
pub(crate) fn frame_tick_source(
    state: Res<GameState>,
    frame: Res<FrameCounter>,
    mut queue: ResMut<EventQueue>,
) {
    if state.is_over() {
        return;
    }
    queue.enqueue_game(GameEvent::Tick, EventSourceTag::FrameClock, frame.0);
}

/// Update system: one `SecondElapsed` per elapsed timer period.
pub(crate) fn round_clock_source(
    time: Res<Time>,
    state: Res<GameState>,
    frame: Res<FrameCounter>,
    mut clock: ResMut<RoundClock>,
    mut queue: ResMut<EventQueue>,
) {
    if state.is_over() {
        return;
    }
    clock.0.tick(time.delta());
    for _ in 0..clock.0.times_finished_this_tick() {
        queue.enqueue_game(GameEvent::SecondElapsed, EventSourceTag::RoundClock, frame.0);
    }
}
