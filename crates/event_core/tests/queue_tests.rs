mod common;

use bb_core::{CorePlugin, GameConfigRes, GameEvent, GameState, Transition};
use bb_event_core::*;
use common::EnqueueExt;
use bevy::prelude::*;

fn test_app() -> App {
    let mut cfg = bb_config::GameConfig::default();
    cfg.spawn.chance = 0.0;
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(GameConfigRes(cfg))
        .add_plugins(CorePlugin)
        .add_plugins(EventCorePlugin::default());
    app
}

#[test]
fn fifo_order_and_journal_capacity() {
    let mut app = test_app();
    // shrink journal capacity for test
    app.world_mut()
        .resource_mut::<EventQueue>()
        .set_journal_capacity(3);
    app.enqueue_game_event(GameEvent::SecondElapsed, EventSourceTag::Test)
        .enqueue_game_event(GameEvent::Click { x: 1.0, y: 1.0 }, EventSourceTag::Test)
        .enqueue_game_event(GameEvent::Tick, EventSourceTag::Test);
    app.update();
    let journal: Vec<_> = app.world().resource::<EventQueue>().journal().cloned().collect();
    assert_eq!(journal.len(), 3);
    assert_eq!(journal[0].event.event, GameEvent::SecondElapsed);
    assert_eq!(journal[0].transition, Transition::ClockAdvanced { time_left: 59 });
    assert_eq!(journal[1].transition, Transition::Missed);
    assert!(matches!(journal[2].transition, Transition::Ticked { .. }));

    // Enqueue another so ring buffer pops oldest
    app.enqueue_game_event(GameEvent::SecondElapsed, EventSourceTag::Test);
    app.update();
    let journal: Vec<_> = app.world().resource::<EventQueue>().journal().cloned().collect();
    assert_eq!(journal.len(), 3);
    assert_eq!(journal[0].event.event, GameEvent::Click { x: 1.0, y: 1.0 });
    assert_eq!(journal[2].transition, Transition::ClockAdvanced { time_left: 58 });
}

#[test]
fn defers_events_enqueued_for_future_frame() {
    let mut app = test_app();
    let frame = app.world().resource::<FrameCounter>().0;
    app.world_mut()
        .resource_mut::<EventQueue>()
        .enqueue_game(GameEvent::SecondElapsed, EventSourceTag::Test, frame + 5);
    app.update();
    // Deferred events are promoted at the end of the reducer pass, applied on the next one.
    assert_eq!(app.world().resource::<GameState>().round.time_left, 60);
    assert_eq!(app.world().resource::<EventQueue>().pending(), 1);
    app.update();
    assert_eq!(app.world().resource::<GameState>().round.time_left, 59);
    assert_eq!(app.world().resource::<EventQueue>().pending(), 0);
}

#[test]
fn frame_counter_advances_each_update() {
    let mut app = test_app();
    let before = app.world().resource::<FrameCounter>().0;
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(app.world().resource::<FrameCounter>().0, before + 4);
}

#[test]
fn plugin_uses_configured_journal_capacity() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(CorePlugin)
        .add_plugins(EventCorePlugin {
            journal_capacity: 7,
        });
    assert_eq!(
        app.world().resource::<EventQueue>().journal_capacity(),
        7
    );
}
