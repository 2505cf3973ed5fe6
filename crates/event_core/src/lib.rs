mod event;
mod queue;
mod reducer;

pub use event::*;
pub use queue::*;
pub use reducer::*;

use bevy::prelude::*;

/// `Input`: player input (PreUpdate, ahead of the fixed loop, so a click is tested against the
/// frame the player saw). `Collect`: timer sources (Update). `Present`: visuals read the reduced
/// state (PostUpdate, after [`reducer_system`]).
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum EventFlowSet {
    Input,
    Collect,
    Present,
}

pub struct EventCorePlugin {
    pub journal_capacity: usize,
}

impl Default for EventCorePlugin {
    fn default() -> Self {
        Self {
            journal_capacity: 512,
        }
    }
}

impl Plugin for EventCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameCounter>()
            .insert_resource(EventQueue::with_capacity(self.journal_capacity))
            .configure_sets(
                PreUpdate,
                EventFlowSet::Input.after(increment_frame_counter),
            )
            .configure_sets(Update, EventFlowSet::Collect)
            .configure_sets(PostUpdate, EventFlowSet::Present.after(reducer_system))
            .add_systems(PreUpdate, increment_frame_counter)
            .add_systems(PostUpdate, reducer_system);
    }
}

#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct FrameCounter(pub u64);
fn increment_frame_counter(mut fc: ResMut<FrameCounter>) {
    fc.0 += 1;
}
