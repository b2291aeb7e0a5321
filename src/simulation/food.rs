use macroquad::prelude::*;
use macroquad::rand;

use super::{
    FOOD_RADIUS, FOOD_SOURCE_MASS, GROWTH_PILE_COST, GROWTH_PILE_FORCE, GROWTH_PILE_MIN,
    HOME_RADIUS, SPAWN_COOLDOWN_SECS,
};

/// A depletable food source on the map.
#[derive(Debug, Clone)]
pub struct FoodSource {
    pub pos: Vec2,
    pub mass: f32,
}

impl FoodSource {
    /// Fresh full-mass source at a random position within the world bounds.
    pub fn spawn(bounds: Vec2) -> Self {
        Self {
            pos: vec2(rand::gen_range(0.0, bounds.x), rand::gen_range(0.0, bounds.y)),
            mass: FOOD_SOURCE_MASS,
        }
    }

    pub fn with_mass(pos: Vec2, mass: f32) -> Self {
        Self { pos, mass }
    }

    /// Draw radius is linear in remaining mass, with the base radius at
    /// full mass. Renderers rely on this proportionality.
    pub fn draw_radius(&self) -> f32 {
        FOOD_RADIUS * self.mass / FOOD_SOURCE_MASS
    }
}

/// One deposited food marker inside the home disk.
#[derive(Debug, Clone)]
pub struct PileCrumb {
    pub pos: Vec2,
}

/// Shared food state: live sources, the home pile, and the colony-growth
/// cooldown gating how fast new ants hatch from the pile.
pub struct FoodEconomy {
    pub sources: Vec<FoodSource>,
    pub pile: Vec<PileCrumb>,
    pub cooldown: f32,
}

impl FoodEconomy {
    pub fn new(source_count: usize, bounds: Vec2) -> Self {
        let mut economy = Self {
            sources: Vec::new(),
            pile: Vec::new(),
            cooldown: SPAWN_COOLDOWN_SECS,
        };
        economy.respawn_sources(source_count, bounds);
        economy
    }

    /// Replace the whole source set with freshly spawned ones. The pile and
    /// cooldown are left alone; this is the viewport-resize path.
    pub fn respawn_sources(&mut self, source_count: usize, bounds: Vec2) {
        self.sources = (0..source_count).map(|_| FoodSource::spawn(bounds)).collect();
    }

    /// Index of the closest source within `radius` of `pos`, if any.
    pub fn closest_source_within(&self, pos: Vec2, radius: f32) -> Option<usize> {
        let mut closest: Option<(usize, f32)> = None;
        for (index, source) in self.sources.iter().enumerate() {
            let dist = pos.distance(source.pos);
            if dist < radius && closest.map_or(true, |(_, best)| dist < best) {
                closest = Some((index, dist));
            }
        }
        closest.map(|(index, _)| index)
    }

    /// Position of a uniformly random source, if any exist.
    pub fn random_source_pos(&self) -> Option<Vec2> {
        if self.sources.is_empty() {
            return None;
        }
        Some(self.sources[rand::gen_range(0, self.sources.len())].pos)
    }

    /// Take `amount` of mass out of a source, clamped at zero. A depleted
    /// source is replaced in place by a fresh one, so the live source count
    /// is invariant across depletion events.
    pub fn extract(&mut self, index: usize, amount: f32, bounds: Vec2) {
        let source = &mut self.sources[index];
        source.mass = (source.mass - amount).max(0.0);
        if source.mass <= 0.0 {
            *source = FoodSource::spawn(bounds);
        }
    }

    /// Deposit one crumb at a uniformly random point inside the home disk.
    pub fn drop_off_at(&mut self, home: Vec2) {
        let angle = rand::gen_range(0.0, std::f32::consts::TAU);
        let radius = rand::gen_range(0.0, HOME_RADIUS);
        let (sin, cos) = angle.sin_cos();
        self.pile.push(PileCrumb {
            pos: home + vec2(cos, sin) * radius,
        });
    }

    /// Colony growth check: enough crumbs with an expired cooldown, or an
    /// overflowing pile regardless of cooldown. On growth, exactly
    /// `GROWTH_PILE_COST` crumbs are consumed and the cooldown restarts.
    /// The caller spawns the new ant.
    pub fn try_grow_colony(&mut self) -> bool {
        let pile_len = self.pile.len();
        let ready = (pile_len >= GROWTH_PILE_MIN && self.cooldown <= 0.0)
            || pile_len >= GROWTH_PILE_FORCE;
        if !ready {
            return false;
        }
        self.pile.drain(..GROWTH_PILE_COST);
        self.cooldown = SPAWN_COOLDOWN_SECS;
        true
    }
}
