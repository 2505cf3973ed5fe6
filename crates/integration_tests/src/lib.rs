// Integration tests crate: composes every plugin headlessly and plays real rounds
// through the same event sources the windowed build uses.

use bb_core::{CorePlugin, GameConfigRes, RngSeed};
use bb_event_core::EventCorePlugin;
use bb_gameplay::GameplayPlugin;
use bb_rendering::RenderingPlugin;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::PrimaryWindow;
use std::time::Duration;

/// Full game without a renderer or OS window. Each `update` advances time by `step`.
pub fn build_headless_app(cfg: bb_config::GameConfig, seed: u64, step: Duration) -> App {
    let journal_capacity = cfg.journal_capacity;
    let (w, h) = (cfg.window.width, cfg.window.height);
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    // InputPlugin -> ButtonInput<MouseButton> fed from MouseButtonInput events
    app.add_plugins(bevy::input::InputPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step))
        .insert_resource(GameConfigRes(cfg))
        .insert_resource(RngSeed(seed))
        .add_plugins(CorePlugin)
        .add_plugins(EventCorePlugin { journal_capacity })
        .add_plugins(GameplayPlugin)
        .add_plugins(RenderingPlugin);
    app.world_mut().spawn((
        Window {
            resolution: (w, h).into(),
            ..default()
        },
        PrimaryWindow,
    ));
    app
}

/// Move the cursor to `pos` (window coordinates, top-left origin) and press the left button.
/// The press is seen by the next `update`.
pub fn press_left_at(app: &mut App, pos: Vec2) {
    let world = app.world_mut();
    let mut q = world.query_filtered::<(Entity, &mut Window), With<PrimaryWindow>>();
    let Ok((entity, mut window)) = q.single_mut(world) else {
        return;
    };
    window.set_cursor_position(Some(pos));
    world.send_event(MouseButtonInput {
        button: MouseButton::Left,
        state: ButtonState::Pressed,
        window: entity,
    });
}

pub fn release_left(app: &mut App) {
    let world = app.world_mut();
    let mut q = world.query_filtered::<Entity, With<PrimaryWindow>>();
    let Ok(entity) = q.single(world) else {
        return;
    };
    world.send_event(MouseButtonInput {
        button: MouseButton::Left,
        state: ButtonState::Released,
        window: entity,
    });
}
