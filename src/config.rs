use macroquad::prelude::Conf;
use serde::Deserialize;

// Window constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of mature ants spawned at startup.
    pub initial_ants: u32,
    /// Number of food sources kept alive on the map.
    pub initial_food_sources: u32,
    /// Seconds between enemy spawn attempts.
    pub enemy_spawn_interval: f32,
    /// Mature population required before a bug appears.
    pub bug_spawn_threshold: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_ants: 10,
            initial_food_sources: 5,
            enemy_spawn_interval: 10.0,
            bug_spawn_threshold: 200,
        }
    }
}

pub fn window_conf() -> Conf {
    Conf {
        window_title: "Antworld".to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH as i32,
        window_height: DEFAULT_WINDOW_HEIGHT as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}
