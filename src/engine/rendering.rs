use macroquad::prelude::*;

use super::{
    FOOD_COLOR, HOME_OUTLINE_COLOR, HOME_OUTLINE_WIDTH, OVERLAY_FONT_SIZE, PILE_CRUMB_RADIUS,
    WorldCamera,
};
use crate::simulation::{HOME_RADIUS, Simulation};

/// Enum representing possible camera actions like dragging or zooming.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CameraAction {
    Drag,
    Zoom,
    None,
}

/// Draws the simulation snapshot each frame. Reads entity state only; the
/// simulation is never mutated from here.
pub struct Renderer {
    pub camera: WorldCamera,
    is_dragging: bool,
    drag_start_world_pos: Vec2,
}

impl Renderer {
    pub fn new(world_size: Vec2) -> Self {
        Self {
            camera: WorldCamera::new(world_size),
            is_dragging: false,
            drag_start_world_pos: Vec2::ZERO,
        }
    }

    /// Processes mouse wheel input for zooming the camera.
    pub fn process_mouse_wheel_zoom(&mut self) -> CameraAction {
        let wheel_movement = mouse_wheel().1;
        if wheel_movement != 0.0 {
            self.camera.adjust_zoom(wheel_movement);
            return CameraAction::Zoom;
        }
        CameraAction::None
    }

    /// Processes mouse drag input for panning the camera.
    pub fn process_mouse_drag_pan(&mut self) -> CameraAction {
        let current_mouse_pos = Vec2::from(mouse_position());
        let mut drag_action_occurred = false;

        if is_mouse_button_pressed(MouseButton::Left) {
            self.is_dragging = true;
            self.drag_start_world_pos = self.camera.camera.screen_to_world(current_mouse_pos);
        }

        if self.is_dragging {
            if is_mouse_button_down(MouseButton::Left) {
                let current_world_pos = self.camera.camera.screen_to_world(current_mouse_pos);
                let world_offset_from_start = current_world_pos - self.drag_start_world_pos;

                const DRAG_MOVEMENT_THRESHOLD_SQ: f32 = 0.01;

                if world_offset_from_start.length_squared() > DRAG_MOVEMENT_THRESHOLD_SQ {
                    self.camera.move_by(-world_offset_from_start);
                    drag_action_occurred = true;
                }
            }

            if is_mouse_button_released(MouseButton::Left) {
                self.is_dragging = false;
            }
        }

        if drag_action_occurred {
            CameraAction::Drag
        } else {
            CameraAction::None
        }
    }

    pub fn handle_resize(&mut self, world_size: Vec2) {
        self.camera.handle_resize(world_size);
    }

    /// Draws the world under the pan/zoom transform.
    pub fn render(&mut self, simulation: &Simulation) {
        set_camera(&self.camera.camera);

        self.draw_food(simulation);
        self.draw_home(simulation);
        self.draw_pile(simulation);
        self.draw_ants(simulation);
        self.draw_predators(simulation);
    }

    /// Food sources shrink as their mass is carried away.
    fn draw_food(&self, simulation: &Simulation) {
        for source in &simulation.food.sources {
            draw_circle(source.pos.x, source.pos.y, source.draw_radius(), FOOD_COLOR);
        }
    }

    fn draw_home(&self, simulation: &Simulation) {
        draw_circle_lines(
            simulation.home.x,
            simulation.home.y,
            HOME_RADIUS,
            HOME_OUTLINE_WIDTH,
            HOME_OUTLINE_COLOR,
        );
    }

    fn draw_pile(&self, simulation: &Simulation) {
        for crumb in &simulation.food.pile {
            draw_circle(crumb.pos.x, crumb.pos.y, PILE_CRUMB_RADIUS, FOOD_COLOR);
        }
    }

    fn draw_ants(&self, simulation: &Simulation) {
        for (_, ant) in &simulation.ants {
            draw_circle(ant.pos.x, ant.pos.y, ant.radius, ant.color);
        }
    }

    fn draw_predators(&self, simulation: &Simulation) {
        for (_, predator) in &simulation.predators {
            draw_circle(predator.pos.x, predator.pos.y, predator.radius, predator.color());
        }
    }

    /// Screen-space scoreboard: live count per team plus the hatch cooldown.
    /// Caller switches to the default camera first.
    pub fn draw_overlay(&self, simulation: &Simulation) {
        let mut y = 30.0;
        for (team, count) in simulation.team_counts.iter() {
            draw_text(
                &format!("Team {}: {} ants", team.name(), count),
                20.0,
                y,
                OVERLAY_FONT_SIZE,
                WHITE,
            );
            y += 30.0;
        }
        draw_text(
            &format!("Hatch cooldown: {:.1}s", simulation.food.cooldown.max(0.0)),
            20.0,
            y + 30.0,
            OVERLAY_FONT_SIZE,
            WHITE,
        );
    }
}
