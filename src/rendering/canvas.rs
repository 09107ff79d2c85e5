//! Drawable-surface contract the balloon view paints through.
//! Coordinates are surface pixels, origin top-left, y down.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_px: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font_px: 48.0, color: Color::WHITE }
    }
}

/// 2D drawing primitives of a surface.
pub trait Canvas2d {
    fn clear_rect(&mut self, rect: Rect);
    /// Stretches `image` over `rect`. An image that is not loaded yet draws nothing.
    fn draw_image(&mut self, image: &Handle<Image>, rect: Rect);
    /// Draws `text` with its baseline-left corner at `at`.
    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle);
}

pub trait DrawSurface {
    fn size(&self) -> Vec2;
    /// `None` when the surface cannot do 2D drawing.
    fn context_2d(&mut self) -> Option<&mut dyn Canvas2d>;
}
