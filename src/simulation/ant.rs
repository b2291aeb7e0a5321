use macroquad::prelude::*;
use macroquad::rand;
use slotmap::{SlotMap, new_key_type};

use super::food::FoodEconomy;
use super::predator::{Predator, PredatorKey};
use super::sim::{Broadcast, TickEffects};
use super::team::{Team, TeamCounts};
use super::{
    ANT_HEALTH, ANT_RADIUS_MIN, ANT_RADIUS_MAX, ANT_VISION_RADIUS, COMBAT_STEER_GAIN,
    CONTACT_DAMAGE, FOOD_EXTRACT_AMOUNT, FOOD_RADIUS, FOOD_WORK_TICKS, FRICTION, HOME_RADIUS,
    IDLE_TICKS_BEFORE_RETURN, PILE_EAT_TICKS, PILE_FOOD_TO_MATURE, STEER_GAIN, WANDER_JITTER,
};

new_key_type! {
    /// Key for the ant slotmap.
    pub struct AntKey;
}

/// One ant. Immature ants have no team; `team` doubles as the maturity flag.
pub struct Ant {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub team: Option<Team>,
    pub color: Color,
    pub carrying_food: bool,
    /// Ticks spent extracting at a source. Accumulates across brief exits
    /// from the interaction radius while the ant orbits the source.
    pub working_ticks: u32,
    /// Plain remembered point, never a live source handle.
    pub remembered_food: Option<Vec2>,
    /// Pile crumbs eaten so far (immature only).
    pub food_eaten: u32,
    pub eating_ticks: u32,
    pub health: f32,
    /// Ticks wandering without a source in sight.
    pub ticks_since_food: u32,
}

impl Ant {
    /// Mature ant with a random team, used for the initial population.
    pub fn mature(pos: Vec2) -> Self {
        let team = Team::random();
        Self {
            radius: rand::gen_range(ANT_RADIUS_MIN, ANT_RADIUS_MAX),
            team: Some(team),
            color: team.jittered_color(),
            ..Self::immature(pos)
        }
    }

    /// Teamless newborn, confined near home until it has eaten enough.
    pub fn immature(pos: Vec2) -> Self {
        Self {
            pos,
            vel: vec2(rand::gen_range(-1.0, 1.0), rand::gen_range(-1.0, 1.0)),
            radius: ANT_RADIUS_MIN,
            team: None,
            color: WHITE,
            carrying_food: false,
            working_ticks: 0,
            remembered_food: None,
            food_eaten: 0,
            eating_ticks: 0,
            health: ANT_HEALTH,
            ticks_since_food: 0,
        }
    }

    pub fn is_immature(&self) -> bool {
        self.team.is_none()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// One behavior tick. The caller has already filtered out dead ants;
    /// deaths, births and food broadcasts triggered here are collected in
    /// `effects` and applied by the simulation after the full pass.
    pub fn update(
        &mut self,
        home: Vec2,
        bounds: Vec2,
        food: &mut FoodEconomy,
        predators: &mut SlotMap<PredatorKey, Predator>,
        team_counts: &mut TeamCounts,
        effects: &mut TickEffects,
    ) {
        if self.is_immature() {
            self.feed_from_pile(food, team_counts);
        } else if self.carrying_food {
            // Head home with the payload; no food search while carrying.
            self.steer_towards(home, STEER_GAIN);
        } else if let Some(target) = self.remembered_food {
            self.steer_towards(target, STEER_GAIN);
            if self.pos.distance(target) < FOOD_RADIUS {
                self.remembered_food = None;
            }
        } else {
            self.forage(home, bounds, food, effects);
        }

        self.vel *= FRICTION;
        self.pos += self.vel;

        if self.is_immature() {
            self.confine_to_home(home);
        }

        if self.carrying_food && self.pos.distance(home) < HOME_RADIUS {
            self.carrying_food = false;
            food.drop_off_at(home);
            if food.try_grow_colony() {
                effects.births.push(home);
            }
        }

        if !self.is_immature() {
            self.fight_predators(predators);
        }
    }

    /// Immature ants chew on the home pile until they have eaten enough
    /// crumbs to mature.
    fn feed_from_pile(&mut self, food: &mut FoodEconomy, team_counts: &mut TeamCounts) {
        if food.pile.is_empty() {
            return;
        }
        self.eating_ticks += 1;
        if self.eating_ticks > PILE_EAT_TICKS {
            food.pile.pop();
            self.eating_ticks = 0;
            self.food_eaten += 1;
            if self.food_eaten >= PILE_FOOD_TO_MATURE {
                self.mature_up(team_counts);
            }
        }
    }

    /// Maturity: gain a team, a shade of its color, a full-grown radius.
    fn mature_up(&mut self, team_counts: &mut TeamCounts) {
        let team = Team::random();
        self.team = Some(team);
        self.color = team.jittered_color();
        self.radius = rand::gen_range(ANT_RADIUS_MIN, ANT_RADIUS_MAX);
        team_counts.increment(team);
    }

    /// Empty-handed search: steer at the closest source in sight and work
    /// on it, otherwise wander and eventually give up and head home.
    fn forage(&mut self, home: Vec2, bounds: Vec2, food: &mut FoodEconomy, effects: &mut TickEffects) {
        if let Some(index) = food.closest_source_within(self.pos, ANT_VISION_RADIUS) {
            let target = food.sources[index].pos;
            self.steer_towards(target, STEER_GAIN);
            if self.pos.distance(target) < FOOD_RADIUS {
                self.working_ticks += 1;
                if self.working_ticks > FOOD_WORK_TICKS {
                    self.working_ticks = 0;
                    self.carrying_food = true;
                    food.extract(index, FOOD_EXTRACT_AMOUNT, bounds);
                    self.remembered_food = Some(target);
                    effects.broadcasts.push(Broadcast {
                        origin: self.pos,
                        source_pos: target,
                    });
                }
            }
        } else {
            self.vel += vec2(
                rand::gen_range(-WANDER_JITTER, WANDER_JITTER),
                rand::gen_range(-WANDER_JITTER, WANDER_JITTER),
            );
            self.ticks_since_food += 1;
            if self.ticks_since_food > IDLE_TICKS_BEFORE_RETURN {
                self.return_home(home, food);
            }
        }
    }

    /// Long-idle ants drift back home. Arriving resets the idle clock and
    /// re-seeds the food memory: the closest source in sight if any, else a
    /// coin flip on a random known source.
    fn return_home(&mut self, home: Vec2, food: &FoodEconomy) {
        self.steer_towards(home, STEER_GAIN);
        if self.pos.distance(home) < HOME_RADIUS {
            self.ticks_since_food = 0;
            if let Some(index) = food.closest_source_within(self.pos, ANT_VISION_RADIUS) {
                self.remembered_food = Some(food.sources[index].pos);
            } else if rand::gen_range(0.0, 1.0) < 0.5 {
                self.remembered_food = food.random_source_pos();
            }
        }
    }

    /// Mature ants charge any predator in sight and trade damage on contact.
    fn fight_predators(&mut self, predators: &mut SlotMap<PredatorKey, Predator>) {
        for (_, predator) in predators.iter_mut() {
            let dist = self.pos.distance(predator.pos);
            if dist < ANT_VISION_RADIUS {
                self.steer_towards(predator.pos, COMBAT_STEER_GAIN);
                if dist < self.radius + predator.radius {
                    predator.health -= CONTACT_DAMAGE;
                    self.health -= CONTACT_DAMAGE;
                }
            }
        }
    }

    /// Hard reposition onto the home disk rim; immature ants never leave it.
    fn confine_to_home(&mut self, home: Vec2) {
        let offset = self.pos - home;
        let dist = offset.length();
        if dist > HOME_RADIUS {
            self.pos = home + offset / dist * HOME_RADIUS;
        }
    }

    fn steer_towards(&mut self, target: Vec2, gain: f32) {
        let delta = target - self.pos;
        if delta.length_squared() > 0.0 {
            self.vel += delta.normalize() * gain;
        }
    }
}
