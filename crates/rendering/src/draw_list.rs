//! Pure translation from [`GameState`] to the circles drawn this frame.
//!
//! Items come out bubble by bubble in pool order, so later bubbles end up on top.
//! A normal bubble yields its body then its highlight; a bursting bubble yields one
//! expanding, fading circle. Inert bubbles yield nothing.

use bb_core::{Bubble, BubblePhase, GameState};
use bevy::prelude::*;

use crate::palette::Palette;

/// Highlight offset and size, as fractions of the bubble radius.
pub const HIGHLIGHT_OFFSET: f32 = 0.3;
pub const HIGHLIGHT_SCALE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCircle {
    /// Logical coordinates, origin bottom-left.
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Frame-local draw list, rebuilt from [`GameState`] after the reducer runs.
#[derive(Resource, Debug, Default, Clone)]
pub struct DrawList(pub Vec<DrawCircle>);

/// Burst animation progress in `[0, 1]`: 0 right after the hit, 1 when finished.
pub fn burst_progress(burst_timer: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((duration - burst_timer) / duration).clamp(0.0, 1.0)
}

pub fn push_bubble(out: &mut Vec<DrawCircle>, bubble: &Bubble, burst_duration: f32) {
    match bubble.phase() {
        BubblePhase::Falling => {
            out.push(DrawCircle {
                center: bubble.pos,
                radius: bubble.radius,
                color: Palette::BUBBLE,
            });
            out.push(DrawCircle {
                center: bubble.pos + Vec2::splat(HIGHLIGHT_OFFSET * bubble.radius),
                radius: HIGHLIGHT_SCALE * bubble.radius,
                color: Palette::HIGHLIGHT,
            });
        }
        BubblePhase::Bursting => {
            let p = burst_progress(bubble.burst_timer, burst_duration);
            out.push(DrawCircle {
                center: bubble.pos,
                radius: bubble.radius * (1.0 + p),
                color: Palette::BURST.with_alpha(1.0 - p),
            });
        }
        BubblePhase::Inert => {}
    }
}

pub fn build_draw_list(state: &GameState) -> Vec<DrawCircle> {
    let mut out = Vec::with_capacity(state.bubbles.len() * 2);
    for bubble in state.bubbles.iter() {
        push_bubble(&mut out, bubble, state.params.burst_duration);
    }
    out
}

pub(crate) fn update_draw_list(state: Res<GameState>, mut list: ResMut<DrawList>) {
    if !state.is_changed() && !list.is_added() {
        return;
    }
    list.0 = build_draw_list(&state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_core::GameParams;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn normal_bubble_draws_body_then_highlight() {
        let b = Bubble::new(0, Vec2::new(100.0, 200.0), 40.0, 1.0);
        let mut out = Vec::new();
        push_bubble(&mut out, &b, 0.3);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].center, b.pos);
        assert_eq!(out[0].radius, 40.0);
        assert_eq!(out[0].color, Palette::BUBBLE);
        assert_eq!(out[1].center, Vec2::new(112.0, 212.0));
        assert!(approx(out[1].radius, 8.0));
        assert_eq!(out[1].color.alpha(), 1.0);
    }

    #[test]
    fn burst_grows_and_fades() {
        let mut b = Bubble::new(0, Vec2::new(50.0, 50.0), 20.0, 1.0);
        b.burst(0.3);
        let mut out = Vec::new();
        push_bubble(&mut out, &b, 0.3);
        assert_eq!(out.len(), 1);
        assert!(approx(out[0].radius, 20.0));
        assert!(approx(out[0].color.alpha(), 1.0));

        b.burst_timer = 0.15;
        out.clear();
        push_bubble(&mut out, &b, 0.3);
        assert!(approx(out[0].radius, 30.0));
        assert!(approx(out[0].color.alpha(), 0.5));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(burst_progress(0.3, 0.3), 0.0);
        assert_eq!(burst_progress(0.0, 0.3), 1.0);
        assert_eq!(burst_progress(0.5, 0.3), 0.0);
        assert_eq!(burst_progress(0.1, 0.0), 1.0);
    }

    #[test]
    fn inert_bubbles_are_not_drawn() {
        let mut state = GameState::new(GameParams::default());
        state.bubbles.spawn(Vec2::new(10.0, 10.0), 20.0, 1.0);
        let gone = state.bubbles.spawn(Vec2::new(20.0, 10.0), 20.0, 1.0);
        let popping = state.bubbles.spawn(Vec2::new(30.0, 10.0), 20.0, 1.0);
        for b in state.bubbles.iter_mut() {
            if b.id == gone {
                b.active = false;
            } else if b.id == popping {
                b.burst(0.3);
            }
        }
        let list = build_draw_list(&state);
        // 2 for the falling bubble, 1 for the bursting one
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].center, Vec2::new(10.0, 10.0));
        assert_eq!(list[2].center, Vec2::new(30.0, 10.0));
    }
}
