use crate::queue::JournalEntry;
use crate::{EventEnvelope, EventQueue, FrameCounter};
use bb_core::{GameState, SpawnRng, Transition};
use bevy::prelude::*;

/// Exclusive system: drains the current frame's queue in FIFO order and applies each
/// event to [`GameState`] through its single transition function.
pub fn reducer_system(world: &mut World) {
    let frame_idx = world.resource::<FrameCounter>().0;
    // Drain events first (drop borrow afterwards)
    let events: Vec<EventEnvelope> = world.resource_mut::<EventQueue>().drain_for_frame();
    let applied: Vec<(EventEnvelope, Transition)> = if events.is_empty() {
        Vec::new()
    } else {
        world.resource_scope(|world, mut state: Mut<GameState>| {
            let mut rng = world.resource_mut::<SpawnRng>();
            events
                .into_iter()
                .map(|env| {
                    let transition = state.apply(&env.event, &mut rng.0);
                    log_transition(&env, &transition, frame_idx);
                    (env, transition)
                })
                .collect()
        })
    };
    let mut q = world.resource_mut::<EventQueue>();
    for (event, transition) in applied {
        q.push_journal(JournalEntry {
            event,
            transition,
            frame_processed: frame_idx,
        });
    }
    // Promote deferred events
    q.promote_next_frame();
}

fn log_transition(env: &EventEnvelope, transition: &Transition, frame: u64) {
    match transition {
        Transition::Hit { bubble, score } => {
            debug!(frame, bubble = *bubble, score = *score, "bubble burst");
        }
        Transition::RoundEnded { final_score } => {
            info!(final_score = *final_score, "round over");
        }
        Transition::Ignored => {
            trace!(frame, source = ?env.source, event = ?env.event, "event after round end ignored");
        }
        _ => {}
    }
}
