mod camera;
mod rendering;

pub use camera::WorldCamera;
pub use rendering::{CameraAction, Renderer};

use macroquad::prelude::Color;

// Rendering constants
pub const BACKGROUND_COLOR: Color = Color::new(0.094, 0.094, 0.125, 1.0);
pub const FOOD_COLOR: Color = Color::new(0.545, 0.271, 0.075, 1.0); // brown
pub const HOME_OUTLINE_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);
pub const HOME_OUTLINE_WIDTH: f32 = 5.0;
pub const PILE_CRUMB_RADIUS: f32 = 2.0;
pub const OVERLAY_FONT_SIZE: f32 = 20.0;
