// Score / countdown / game-over overlay, drawn above every bubble.

use bb_core::GameState;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::palette::Palette;

pub const HUD_Z: f32 = 100.0;
pub const HUD_FONT_SIZE: f32 = 18.0;
pub const GAME_OVER_LABEL: &str = "GAME OVER!";

#[derive(Component, Debug)]
pub struct ScoreText;

#[derive(Component, Debug)]
pub struct TimeText;

#[derive(Component, Debug)]
pub struct GameOverText;

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

pub fn time_label(time_left: u32) -> String {
    format!("Time left: {time_left}s")
}

pub(crate) fn spawn_hud(mut commands: Commands, state: Res<GameState>) {
    let (w, h) = (state.params.width, state.params.height);
    let font = TextFont {
        font_size: HUD_FONT_SIZE,
        ..default()
    };
    commands.spawn((
        Text2d::new(score_label(state.round.score)),
        font.clone(),
        TextColor(Palette::HUD_TEXT),
        Anchor::BottomLeft,
        Transform::from_xyz(10.0, h - 20.0, HUD_Z),
        ScoreText,
    ));
    commands.spawn((
        Text2d::new(time_label(state.round.time_left)),
        font.clone(),
        TextColor(Palette::HUD_TEXT),
        Anchor::BottomLeft,
        Transform::from_xyz(w - 150.0, h - 20.0, HUD_Z),
        TimeText,
    ));
    commands.spawn((
        Text2d::new(GAME_OVER_LABEL),
        font,
        TextColor(Palette::GAME_OVER),
        Anchor::Center,
        Transform::from_xyz(w / 2.0, h / 2.0, HUD_Z),
        Visibility::Hidden,
        GameOverText,
    ));
}

#[allow(clippy::type_complexity)]
pub(crate) fn sync_hud(
    state: Res<GameState>,
    mut score_q: Query<&mut Text2d, (With<ScoreText>, Without<TimeText>)>,
    mut time_q: Query<&mut Text2d, (With<TimeText>, Without<ScoreText>)>,
    mut over_q: Query<&mut Visibility, With<GameOverText>>,
) {
    let score = score_label(state.round.score);
    for mut text in &mut score_q {
        if text.0 != score {
            text.0.clone_from(&score);
        }
    }
    let time = time_label(state.round.time_left);
    for mut text in &mut time_q {
        if text.0 != time {
            text.0.clone_from(&time);
        }
    }
    let over = if state.is_over() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut vis in &mut over_q {
        vis.set_if_neq(over);
    }
}
