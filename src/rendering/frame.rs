use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::camera::surface_to_world;
use super::canvas::{Canvas2d, DrawSurface, TextStyle};
use super::view::BalloonView;
use crate::gameplay::model::BalloonModel;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Image { image: Handle<Image>, rect: Rect },
    Text { text: String, at: Vec2, style: TextStyle },
}

/// Bevy-backed drawing surface. Draw calls are recorded into a frame and later turned
/// into sprite / `Text2d` entities by [`apply_frame`].
#[derive(Resource, Debug, Clone)]
pub struct FrameCanvas {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl FrameCanvas {
    pub fn new(size: Vec2) -> Self {
        Self { size, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas2d for FrameCanvas {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn draw_image(&mut self, image: &Handle<Image>, rect: Rect) {
        self.commands.push(DrawCommand::Image { image: image.clone(), rect });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: style.clone() });
    }
}

impl DrawSurface for FrameCanvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn context_2d(&mut self) -> Option<&mut dyn Canvas2d> {
        Some(self as &mut dyn Canvas2d)
    }
}

/// Entity spawned for the current frame; everything tagged is dropped on the next clear.
#[derive(Component)]
pub struct FrameItem;

const IMAGE_Z: f32 = 1.0;
const TEXT_Z: f32 = 2.0;

/// Consumes the model's render request and records a fresh frame.
pub fn present_balloons(
    mut model: ResMut<BalloonModel>,
    view: Res<BalloonView>,
    mut canvas: ResMut<FrameCanvas>,
) {
    if !model.take_render_request() {
        return;
    }
    view.draw(&model, &mut *canvas);
}

/// Turns recorded draw commands into entities.
pub fn apply_frame(
    mut commands: Commands,
    mut canvas: ResMut<FrameCanvas>,
    q_items: Query<Entity, With<FrameItem>>,
) {
    let size = canvas.size();
    for command in canvas.take_commands() {
        match command {
            // the balloon pass always clears the whole surface
            DrawCommand::Clear(_) => {
                for entity in &q_items {
                    commands.entity(entity).despawn();
                }
            }
            DrawCommand::Image { image, rect } => {
                let center = surface_to_world(rect.center(), size);
                commands.spawn((
                    Sprite {
                        image,
                        custom_size: Some(rect.size()),
                        ..default()
                    },
                    Transform::from_xyz(center.x, center.y, IMAGE_Z),
                    FrameItem,
                ));
            }
            DrawCommand::Text { text, at, style } => {
                let at = surface_to_world(at, size);
                commands.spawn((
                    Text2d::new(text),
                    TextFont {
                        font_size: style.font_px,
                        ..default()
                    },
                    TextColor(style.color),
                    Anchor::BottomLeft,
                    Transform::from_xyz(at.x, at.y, TEXT_Z),
                    FrameItem,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_drains_commands() {
        let mut canvas = FrameCanvas::new(Vec2::new(10.0, 10.0));
        let ctx = canvas.context_2d().unwrap();
        ctx.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        ctx.fill_text("hi", Vec2::ONE, &TextStyle::default());
        assert_eq!(canvas.commands().len(), 2);
        let drained = canvas.take_commands();
        assert!(matches!(drained[1], DrawCommand::Text { ref text, .. } if text == "hi"));
        assert!(canvas.commands().is_empty());
    }
}
