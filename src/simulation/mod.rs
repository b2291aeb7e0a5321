pub mod ant;
mod food;
mod predator;
mod sim;
mod team;
mod timer;

// Re-export key types for easier imports
pub use ant::{Ant, AntKey};
pub use food::{FoodEconomy, FoodSource, PileCrumb};
pub use predator::{Predator, PredatorKey, PredatorKind};
pub use sim::Simulation;
pub use team::{Team, TeamCounts};
pub use timer::Timer;

// Movement constants
pub const FRICTION: f32 = 0.98; // Per-tick velocity damping, all entity kinds
pub const WANDER_JITTER: f32 = 0.25; // Max random velocity kick per axis per tick
pub const STEER_GAIN: f32 = 0.05; // Velocity bias toward a steering target
pub const COMBAT_STEER_GAIN: f32 = 0.1;

// Ant constants
pub const ANT_RADIUS_MIN: f32 = 3.0;
pub const ANT_RADIUS_MAX: f32 = 6.0;
pub const ANT_VISION_RADIUS: f32 = 150.0;
pub const ANT_HEALTH: f32 = 100.0;
pub const CONTACT_DAMAGE: f32 = 1.0; // Dealt both ways per tick of predator contact
pub const IDLE_TICKS_BEFORE_RETURN: u32 = 500;
pub const FOOD_WORK_TICKS: u32 = 100; // Ticks at a source before a pickup
pub const PILE_EAT_TICKS: u32 = 100; // Ticks an immature ant chews on one crumb
pub const PILE_FOOD_TO_MATURE: u32 = 5;

// Food constants
/// Interaction radius at a source, and its draw radius at full mass.
pub const FOOD_RADIUS: f32 = 10.0;
pub const FOOD_SOURCE_MASS: f32 = 100.0;
pub const FOOD_EXTRACT_AMOUNT: f32 = 10.0;
pub const HOME_RADIUS: f32 = 50.0;

// Colony growth constants
pub const GROWTH_PILE_MIN: usize = 5; // With expired cooldown
pub const GROWTH_PILE_FORCE: usize = 50; // Unconditional
pub const GROWTH_PILE_COST: usize = 5;
pub const SPAWN_COOLDOWN_SECS: f32 = 5.0;

// Predator constants
pub const ENEMY_HEALTH: f32 = 1500.0;
pub const ENEMY_RADIUS: f32 = ANT_RADIUS_MAX;
pub const BUG_HEALTH: f32 = 3000.0;
pub const BUG_RADIUS: f32 = ANT_RADIUS_MAX * 2.0;
pub const BUG_FOOD_MASS: f32 = 500.0; // Mass of the source a dead bug leaves behind
pub const ENEMY_CAP_PER_ANTS: usize = 50; // One enemy allowed per this many mature ants
