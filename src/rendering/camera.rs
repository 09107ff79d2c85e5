use bevy::prelude::*;

/// Marker for the single 2D camera looking at the balloon surface.
#[derive(Component)]
pub struct SurfaceCamera;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, SurfaceCamera));
}

/// Surface pixel (top-left origin, y down) to world (centered origin, y up).
pub fn surface_to_world(point: Vec2, surface: Vec2) -> Vec2 {
    Vec2::new(point.x - surface.x * 0.5, surface.y * 0.5 - point.y)
}

/// Inverse of [`surface_to_world`].
pub fn world_to_surface(point: Vec2, surface: Vec2) -> Vec2 {
    Vec2::new(point.x + surface.x * 0.5, surface.y * 0.5 - point.y)
}

/// Window logical position to surface pixels for the default camera, which draws the
/// surface unscaled around the window center however the window is resized.
pub fn window_to_surface(point: Vec2, window: Vec2, surface: Vec2) -> Vec2 {
    world_to_surface(surface_to_world(point, window), surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_world_extents() {
        let s = Vec2::new(320.0, 480.0);
        assert_eq!(surface_to_world(Vec2::ZERO, s), Vec2::new(-160.0, 240.0));
        assert_eq!(surface_to_world(s, s), Vec2::new(160.0, -240.0));
        assert_eq!(surface_to_world(s * 0.5, s), Vec2::ZERO);
    }

    #[test]
    fn world_round_trips_to_surface() {
        let s = Vec2::new(320.0, 480.0);
        let p = Vec2::new(10.0, 470.0);
        assert_eq!(world_to_surface(surface_to_world(p, s), s), p);
    }

    #[test]
    fn resized_window_keeps_surface_centered() {
        let s = Vec2::new(320.0, 480.0);
        let w = Vec2::new(640.0, 960.0);
        // surface (10, 10) is drawn at window (170, 250) once the window doubles
        assert_eq!(window_to_surface(Vec2::new(170.0, 250.0), w, s), Vec2::new(10.0, 10.0));
        assert_eq!(window_to_surface(w * 0.5, w, s), s * 0.5);
        assert_eq!(window_to_surface(Vec2::new(3.0, 4.0), s, s), Vec2::new(3.0, 4.0));
    }
}
