use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::config::GameConfig;
use crate::gameplay::model::BalloonModel;
use crate::rendering::camera::{window_to_surface, world_to_surface};

/// Points pressed this frame, in window logical coordinates: every new touch plus the
/// cursor on a left click when `mouse_as_touch` is on.
fn pressed_points(
    window: &Window,
    touches: &Touches,
    buttons: &ButtonInput<MouseButton>,
    mouse_as_touch: bool,
) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = touches.iter_just_pressed().map(|t| t.position()).collect();
    if mouse_as_touch && buttons.just_pressed(MouseButton::Left) {
        points.extend(window.cursor_position());
    }
    points
}

/// Forwards this frame's presses to the model as surface points.
pub fn collect_pointer_points(
    touches: Res<Touches>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows_q: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    cfg: Res<GameConfig>,
    mut model: ResMut<BalloonModel>,
) {
    let Ok(window) = windows_q.single() else {
        return;
    };
    let points = pressed_points(window, &touches, &buttons, cfg.input.mouse_as_touch);
    if points.is_empty() {
        return;
    }
    let window_size = Vec2::new(window.width(), window.height());
    let surface = model.surface_size();
    let camera = camera_q.iter().next();
    let points: Vec<Vec2> = points
        .into_iter()
        .map(|p| {
            camera
                .and_then(|(camera, cam_tf)| camera.viewport_to_world_2d(cam_tf, p).ok())
                .map(|world| world_to_surface(world, surface))
                // no camera able to project yet (headless or first frame)
                .unwrap_or_else(|| window_to_surface(p, window_size, surface))
        })
        .collect();
    let flagged = model.on_touch(&points);
    debug!(target: "balloons", "pointer down at {points:?}: {flagged} balloon(s) flagged");
}
