use macroquad::prelude::*;
use macroquad::rand;
use slotmap::new_key_type;

use super::{BUG_HEALTH, BUG_RADIUS, ENEMY_HEALTH, ENEMY_RADIUS, FRICTION, WANDER_JITTER};

new_key_type! {
    /// Key for the predator slotmap.
    pub struct PredatorKey;
}

/// The two predator kinds share movement and shape but differ in stats and
/// in what their death leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredatorKind {
    /// Roaming hostile; vanishes on death.
    Enemy,
    /// Rare large predator; its corpse becomes a high-mass food source.
    Bug,
}

pub struct Predator {
    pub kind: PredatorKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub health: f32,
}

impl Predator {
    pub fn enemy(pos: Vec2) -> Self {
        Self::new(PredatorKind::Enemy, pos, ENEMY_RADIUS, ENEMY_HEALTH)
    }

    pub fn bug(pos: Vec2) -> Self {
        Self::new(PredatorKind::Bug, pos, BUG_RADIUS, BUG_HEALTH)
    }

    fn new(kind: PredatorKind, pos: Vec2, radius: f32, health: f32) -> Self {
        Self {
            kind,
            pos,
            vel: vec2(rand::gen_range(-1.0, 1.0), rand::gen_range(-1.0, 1.0)),
            radius,
            health,
        }
    }

    /// Pure random-walk steering, then the shared damping/integration rule.
    pub fn update(&mut self) {
        self.vel += vec2(
            rand::gen_range(-WANDER_JITTER, WANDER_JITTER),
            rand::gen_range(-WANDER_JITTER, WANDER_JITTER),
        );
        self.vel *= FRICTION;
        self.pos += self.vel;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn color(&self) -> Color {
        match self.kind {
            PredatorKind::Enemy => PURPLE,
            PredatorKind::Bug => BLACK,
        }
    }
}
