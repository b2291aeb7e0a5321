use macroquad::prelude::*;

use crate::config::SimulationConfig;
use crate::engine::{BACKGROUND_COLOR, CameraAction, Renderer};
use crate::simulation::Simulation;

/// Main application: owns the simulation and the renderer, drives both from
/// the frame loop.
pub struct App {
    renderer: Renderer,
    simulation: Simulation,
    show_score: bool,
    screen_size: Vec2,
    drag_occurred: bool,
}

impl App {
    pub fn new(config: SimulationConfig) -> Self {
        let screen_size = vec2(screen_width(), screen_height());
        Self {
            renderer: Renderer::new(screen_size),
            simulation: Simulation::new(config, screen_size),
            show_score: false,
            screen_size,
            drag_occurred: false,
        }
    }

    /// Runs the main application loop.
    pub async fn run(&mut self) {
        loop {
            let dt = get_frame_time();

            self.handle_resize();
            self.handle_input();
            self.simulation.update(dt);
            self.render();

            next_frame().await;
        }
    }

    /// Viewport resize is the only asynchronous interrupt: the simulation
    /// re-seeds food and relocates home, the camera tracks the new bounds.
    fn handle_resize(&mut self) {
        let size = vec2(screen_width(), screen_height());
        if size != self.screen_size {
            self.screen_size = size;
            self.simulation.handle_resize(size);
            self.renderer.handle_resize(size);
        }
    }

    /// Wheel zooms, drag pans, and a plain click (no drag in between)
    /// toggles the scoreboard.
    fn handle_input(&mut self) {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.drag_occurred = false;
        }

        self.renderer.process_mouse_wheel_zoom();
        if self.renderer.process_mouse_drag_pan() == CameraAction::Drag {
            self.drag_occurred = true;
        }

        if is_mouse_button_released(MouseButton::Left) && !self.drag_occurred {
            self.show_score = !self.show_score;
        }
    }

    fn render(&mut self) {
        clear_background(BACKGROUND_COLOR);

        self.renderer.render(&self.simulation);

        set_default_camera();
        if self.show_score {
            self.renderer.draw_overlay(&self.simulation);
        }
    }
}
