use macroquad::prelude::*;

/// Widest the view can pull back relative to the full world.
const MIN_ZOOM: f32 = 0.2;
const MAX_ZOOM: f32 = 20.0;
/// Multiplicative zoom step per wheel notch.
const ZOOM_STEP: f32 = 0.1;

/// Pan/zoom camera over the simulation world. World coordinates match the
/// window pixels at zoom 1; the transform applies only to rendering, never
/// to simulation state.
pub struct WorldCamera {
    zoom: f32,
    pub world_size: Vec2,
    pub camera: Camera2D,
}

impl WorldCamera {
    pub fn new(world_size: Vec2) -> Self {
        let mut world_camera = Self {
            zoom: 1.0,
            world_size,
            camera: Camera2D {
                target: world_size / 2.0,
                ..Default::default()
            },
        };
        world_camera.apply_zoom();
        world_camera
    }

    /// Zoom in or out one step, keeping the world point under the cursor
    /// fixed on screen.
    pub fn adjust_zoom(&mut self, wheel_movement: f32) {
        let mouse_screen_pos = Vec2::from(mouse_position());
        let mouse_world_pos = self.camera.screen_to_world(mouse_screen_pos);

        let step = if wheel_movement > 0.0 {
            1.0 + ZOOM_STEP
        } else {
            1.0 - ZOOM_STEP
        };
        self.zoom = (self.zoom * step).clamp(MIN_ZOOM, MAX_ZOOM);
        self.apply_zoom();

        // Shift the target so the cursor still points at the same world spot.
        let new_mouse_world_pos = self.camera.screen_to_world(mouse_screen_pos);
        self.camera.target += mouse_world_pos - new_mouse_world_pos;
    }

    pub fn move_by(&mut self, movement: Vec2) {
        self.camera.target += movement;
    }

    /// Converts the current mouse screen position to world coordinates.
    pub fn mouse_world_pos(&self) -> Vec2 {
        self.camera.screen_to_world(Vec2::from(mouse_position()))
    }

    /// Track a new world size after a viewport resize; zoom and target are
    /// kept so the view does not jump.
    pub fn handle_resize(&mut self, world_size: Vec2) {
        self.world_size = world_size;
        self.apply_zoom();
    }

    fn apply_zoom(&mut self) {
        // Negative y keeps world y pointing down, screen-style.
        self.camera.zoom = vec2(
            2.0 * self.zoom / self.world_size.x,
            -2.0 * self.zoom / self.world_size.y,
        );
    }
}
