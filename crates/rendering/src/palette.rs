//! Centralized color palette.
//! Keeps a single source of truth for bubble / highlight / HUD colors.

use bevy::prelude::*;

pub struct Palette;
impl Palette {
    /// Dark blue backdrop.
    pub const BG: Color = Color::srgb(0.0, 0.0, 0.1);
    /// Translucent bubble body.
    pub const BUBBLE: Color = Color::srgba(0.0, 0.5, 1.0, 0.5);
    pub const HIGHLIGHT: Color = Color::WHITE;
    /// Base color of a bursting bubble; alpha is replaced per frame.
    pub const BURST: Color = Color::WHITE;
    pub const HUD_TEXT: Color = Color::WHITE;
    pub const GAME_OVER: Color = Color::srgb(1.0, 0.0, 0.0);
}
