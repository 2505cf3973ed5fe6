// Gameplay crate: the event sources feeding the reducer.
// Click collector (PreUpdate, EventFlowSet::Input), frame tick (FixedUpdate),
// round clock (Update, EventFlowSet::Collect). Clicks are queued ahead of the
// frame's ticks so they hit the positions that were on screen.

use bb_core::GameConfigRes;
use bb_event_core::EventFlowSet;
use bevy::input::InputSystem;
use bevy::prelude::*;
use std::time::Duration;

mod clock;
mod input;

pub use clock::RoundClock;
pub use input::window_to_playfield;

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        let interval_ms = app
            .world()
            .get_resource::<GameConfigRes>()
            .map(|c| c.0.round.frame_interval_ms)
            .unwrap_or(16)
            .max(1);
        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(
            interval_ms,
        )))
        .init_resource::<RoundClock>()
        .add_systems(FixedUpdate, clock::frame_tick_source)
        .add_systems(
            PreUpdate,
            input::collect_clicks
                .after(InputSystem)
                .in_set(EventFlowSet::Input),
        )
        .add_systems(
            Update,
            clock::round_clock_source.in_set(EventFlowSet::Collect),
        );
    }
}
