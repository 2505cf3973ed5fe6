// Rendering crate: camera, bubble circles and HUD.
// Everything here reads GameState after the reducer (EventFlowSet::Present); nothing writes it.

use bb_core::GameState;
use bb_event_core::EventFlowSet;
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

mod palette;
pub use palette::Palette;

pub mod circles;
pub mod draw_list;
pub mod hud;

pub use circles::{CircleTint, CircleVisual, VisualPool};
pub use draw_list::{build_draw_list, burst_progress, DrawCircle, DrawList};
pub use hud::{score_label, time_label, GameOverText, ScoreText, TimeText, GAME_OVER_LABEL};

pub struct RenderingPlugin;

#[derive(Component)]
pub struct GameCamera;

/// Orthographic camera showing exactly the playfield, origin bottom-left.
fn setup_camera(mut commands: Commands, state: Res<GameState>) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: state.params.width,
                height: state.params.height,
            },
            viewport_origin: Vec2::ZERO,
            ..OrthographicProjection::default_2d()
        }),
        GameCamera,
    ));
}

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Palette::BG))
            .init_resource::<DrawList>()
            .init_resource::<VisualPool>()
            .add_systems(Startup, (setup_camera, hud::spawn_hud))
            .add_systems(
                PostUpdate,
                (
                    (
                        draw_list::update_draw_list,
                        circles::grow_visual_pool,
                        circles::sync_circle_visuals,
                    )
                        .chain(),
                    hud::sync_hud,
                )
                    .in_set(EventFlowSet::Present),
            );
        #[cfg(not(any(test, feature = "headless")))]
        app.add_systems(Startup, circles::prepare_circle_mesh).add_systems(
            PostUpdate,
            circles::apply_tints
                .after(circles::sync_circle_visuals)
                .in_set(EventFlowSet::Present),
        );
    }
}
