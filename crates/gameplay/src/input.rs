// Left-click collector. The reducer does the hit test; this only maps the cursor
// into playfield-sized window coordinates (top-left origin) and enqueues a Click.

use bb_core::{GameEvent, GameState};
use bb_event_core::{EventQueue, EventSourceTag, FrameCounter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Scale a cursor position from the actual window size to the playfield size.
/// Keeps the top-left origin; the reducer flips the vertical axis.
pub fn window_to_playfield(cursor: Vec2, window_size: Vec2, playfield: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(cursor * playfield / window_size)
}

pub(crate) fn collect_clicks(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    state: Res<GameState>,
    frame: Res<FrameCounter>,
    mut queue: ResMut<EventQueue>,
) {
    let Some(buttons) = buttons else { return };
    if !buttons.just_pressed(MouseButton::Left) || state.is_over() {
        return;
    }
    let Ok(window) = windows.single() else { return };
    // None when the cursor is outside the window
    let Some(cursor) = window.cursor_position() else { return };
    let playfield = Vec2::new(state.params.width, state.params.height);
    let Some(pos) = window_to_playfield(cursor, window.size(), playfield) else {
        return;
    };
    debug!(x = pos.x, y = pos.y, "click");
    queue.enqueue_game(
        GameEvent::Click { x: pos.x, y: pos.y },
        EventSourceTag::Input,
        frame.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_window_matches_playfield() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(
            window_to_playfield(Vec2::new(120.0, 45.0), size, size),
            Some(Vec2::new(120.0, 45.0))
        );
    }

    #[test]
    fn scales_from_larger_window() {
        let p = window_to_playfield(
            Vec2::new(800.0, 300.0),
            Vec2::new(1600.0, 1200.0),
            Vec2::new(800.0, 600.0),
        );
        assert_eq!(p, Some(Vec2::new(400.0, 150.0)));
    }

    #[test]
    fn zero_sized_window_has_no_mapping() {
        assert_eq!(
            window_to_playfield(Vec2::ONE, Vec2::new(0.0, 600.0), Vec2::new(800.0, 600.0)),
            None
        );
    }
}
