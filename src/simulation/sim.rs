use macroquad::prelude::*;
use macroquad::rand;
use slotmap::SlotMap;

use crate::config::SimulationConfig;

use super::ant::{Ant, AntKey};
use super::food::{FoodEconomy, FoodSource};
use super::predator::{Predator, PredatorKey, PredatorKind};
use super::team::TeamCounts;
use super::timer::Timer;
use super::{ANT_VISION_RADIUS, BUG_FOOD_MASS, ENEMY_CAP_PER_ANTS};

/// A food location shouted to nearby ants the moment a pickup succeeds.
/// Recipients store it as a plain point.
pub struct Broadcast {
    pub origin: Vec2,
    pub source_pos: Vec2,
}

/// Mutations produced during an ant pass that cannot be applied while the
/// ant collection is being iterated.
#[derive(Default)]
pub struct TickEffects {
    pub broadcasts: Vec<Broadcast>,
    pub births: Vec<Vec2>,
}

/// The whole simulation state, owned and passed explicitly; no globals.
pub struct Simulation {
    pub tick: u64,
    pub bounds: Vec2,
    pub home: Vec2,
    pub ants: SlotMap<AntKey, Ant>,
    pub predators: SlotMap<PredatorKey, Predator>,
    pub food: FoodEconomy,
    pub team_counts: TeamCounts,
    /// Declared for the scoreboard but not driven by any event yet.
    pub scores: TeamCounts,
    pub config: SimulationConfig,
    enemy_spawn_timer: Timer,
    second_timer: Timer,
}

impl Simulation {
    pub fn new(config: SimulationConfig, bounds: Vec2) -> Self {
        let mut sim = Self {
            tick: 0,
            bounds,
            home: random_point(bounds),
            ants: SlotMap::with_key(),
            predators: SlotMap::with_key(),
            food: FoodEconomy::new(config.initial_food_sources as usize, bounds),
            team_counts: TeamCounts::default(),
            scores: TeamCounts::default(),
            enemy_spawn_timer: Timer::new(config.enemy_spawn_interval),
            second_timer: Timer::new(1.0),
            config,
        };
        for _ in 0..sim.config.initial_ants {
            sim.spawn_mature_ant(random_point(bounds));
        }
        sim
    }

    /// Advance the coarse clocks by wall-clock dt and run one behavior tick.
    pub fn update(&mut self, dt: f32) {
        self.enemy_spawn_timer.update(dt);
        if self.enemy_spawn_timer.is_ready() {
            self.enemy_spawn_timer.wrap();
            self.try_spawn_enemy();
        }

        self.second_timer.update(dt);
        if self.second_timer.is_ready() {
            self.second_timer.wrap();
            self.second_tick();
        }

        self.tick();
    }

    /// One pass over all ants, then all predators. Removals and insertions
    /// are collected during iteration and applied afterwards.
    pub fn tick(&mut self) {
        self.tick += 1;

        let mut effects = TickEffects::default();
        let mut dead: Vec<AntKey> = Vec::new();

        for (key, ant) in self.ants.iter_mut() {
            if ant.is_dead() {
                dead.push(key);
                continue;
            }
            ant.update(
                self.home,
                self.bounds,
                &mut self.food,
                &mut self.predators,
                &mut self.team_counts,
                &mut effects,
            );
        }

        for key in dead {
            if let Some(ant) = self.ants.remove(key) {
                if let Some(team) = ant.team {
                    self.team_counts.decrement(team);
                }
            }
        }

        for pos in effects.births.drain(..) {
            self.ants.insert(Ant::immature(pos));
        }

        self.apply_broadcasts(&effects.broadcasts);
        self.tick_predators();
    }

    /// Deliver the tick's pickup shouts: every non-carrying ant within
    /// vision of the shouter learns the source location. The shouter itself
    /// is carrying by now and skips itself naturally.
    fn apply_broadcasts(&mut self, broadcasts: &[Broadcast]) {
        for broadcast in broadcasts {
            for (_, ant) in self.ants.iter_mut() {
                if !ant.carrying_food
                    && ant.pos.distance(broadcast.origin) < ANT_VISION_RADIUS
                {
                    ant.remembered_food = Some(broadcast.source_pos);
                }
            }
        }
    }

    fn tick_predators(&mut self) {
        let mut dead: Vec<PredatorKey> = Vec::new();
        for (key, predator) in self.predators.iter_mut() {
            if predator.is_dead() {
                dead.push(key);
                continue;
            }
            predator.update();
        }
        for key in dead {
            if let Some(predator) = self.predators.remove(key) {
                // A dead bug becomes a colony windfall.
                if predator.kind == PredatorKind::Bug {
                    self.food
                        .sources
                        .push(FoodSource::with_mass(predator.pos, BUG_FOOD_MASS));
                }
            }
        }
    }

    /// One-second bookkeeping: run down the hatch cooldown, check the bug
    /// spawn condition.
    fn second_tick(&mut self) {
        if self.food.cooldown > 0.0 {
            self.food.cooldown -= 1.0;
        }
        self.try_spawn_bug();
    }

    /// Population-proportional cap: one enemy allowed per 50 mature ants,
    /// counting the would-be newcomer.
    pub fn try_spawn_enemy(&mut self) {
        let enemy_count = self
            .predators
            .values()
            .filter(|p| p.kind == PredatorKind::Enemy)
            .count();
        if self.mature_population() > (enemy_count + 1) * ENEMY_CAP_PER_ANTS {
            self.predators.insert(Predator::enemy(random_point(self.bounds)));
        }
    }

    /// At most one bug at a time, and only once the colony is large.
    pub fn try_spawn_bug(&mut self) {
        let has_bug = self
            .predators
            .values()
            .any(|p| p.kind == PredatorKind::Bug);
        if !has_bug && self.mature_population() > self.config.bug_spawn_threshold as usize {
            self.predators.insert(Predator::bug(random_point(self.bounds)));
        }
    }

    pub fn mature_population(&self) -> usize {
        self.team_counts.total() as usize
    }

    pub fn spawn_mature_ant(&mut self, pos: Vec2) -> AntKey {
        let ant = Ant::mature(pos);
        if let Some(team) = ant.team {
            self.team_counts.increment(team);
        }
        self.ants.insert(ant)
    }

    /// Viewport resize: new world bounds, fresh food sources at the
    /// configured count, home relocated. Ants and predators stay where
    /// they are and self-correct their steering next tick.
    pub fn handle_resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        self.home = random_point(bounds);
        self.food
            .respawn_sources(self.config.initial_food_sources as usize, bounds);
    }
}

pub fn random_point(bounds: Vec2) -> Vec2 {
    vec2(rand::gen_range(0.0, bounds.x), rand::gen_range(0.0, bounds.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::food::PileCrumb;
    use crate::simulation::{
        BUG_FOOD_MASS, FOOD_EXTRACT_AMOUNT, FOOD_SOURCE_MASS, FOOD_WORK_TICKS, HOME_RADIUS,
        PILE_EAT_TICKS, PILE_FOOD_TO_MATURE, SPAWN_COOLDOWN_SECS,
    };

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    /// Simulation with no ants and no food sources, home pinned for
    /// deterministic geometry.
    fn empty_sim() -> Simulation {
        let config = SimulationConfig {
            initial_ants: 0,
            initial_food_sources: 0,
            ..Default::default()
        };
        let mut sim = Simulation::new(config, BOUNDS);
        sim.home = vec2(400.0, 300.0);
        sim
    }

    fn seed_pile(sim: &mut Simulation, count: usize) {
        for _ in 0..count {
            sim.food.pile.push(PileCrumb { pos: sim.home });
        }
    }

    #[test]
    fn test_dead_ant_removed_and_team_count_drops_once() {
        let mut sim = empty_sim();
        let key = sim.spawn_mature_ant(vec2(10.0, 10.0));
        let team = sim.ants[key].team.unwrap();
        assert_eq!(sim.team_counts.get(team), 1);

        sim.ants[key].health = 0.0;
        sim.tick();
        assert!(!sim.ants.contains_key(key), "Dead ant must be gone next tick");
        assert_eq!(sim.team_counts.get(team), 0);

        sim.tick();
        assert_eq!(sim.team_counts.get(team), 0, "No double decrement");
    }

    #[test]
    fn test_growth_event_consumes_five_and_hatches_one() {
        let mut sim = empty_sim();
        seed_pile(&mut sim, 5);
        sim.food.cooldown = 0.0;

        // A carrier standing inside the home disk drops off this tick.
        let key = sim.spawn_mature_ant(sim.home);
        sim.ants[key].carrying_food = true;
        sim.ants[key].vel = Vec2::ZERO;

        sim.tick();

        assert!(!sim.ants[key].carrying_food);
        // Deposit made it 6, growth drained exactly 5.
        assert_eq!(sim.food.pile.len(), 1);
        assert_eq!(sim.food.cooldown, SPAWN_COOLDOWN_SECS);
        let babies: Vec<_> = sim.ants.values().filter(|a| a.is_immature()).collect();
        assert_eq!(babies.len(), 1);
        assert_eq!(babies[0].pos, sim.home, "Newborn appears at the home point");
    }

    #[test]
    fn test_drop_off_without_growth_keeps_cooldown() {
        let mut sim = empty_sim();
        let key = sim.spawn_mature_ant(sim.home);
        sim.ants[key].carrying_food = true;
        sim.ants[key].vel = Vec2::ZERO;
        sim.food.cooldown = SPAWN_COOLDOWN_SECS;

        sim.tick();

        assert!(!sim.ants[key].carrying_food);
        assert_eq!(sim.food.pile.len(), 1);
        assert_eq!(sim.food.cooldown, SPAWN_COOLDOWN_SECS);
        assert_eq!(sim.ants.len(), 1, "No hatch below the pile threshold");
    }

    #[test]
    fn test_immature_ant_matures_exactly_once() {
        let mut sim = empty_sim();
        seed_pile(&mut sim, PILE_FOOD_TO_MATURE as usize);
        let key = sim.ants.insert(Ant::immature(sim.home));

        // Each crumb takes PILE_EAT_TICKS + 1 ticks to go down.
        let ticks_needed = (PILE_EAT_TICKS as usize + 1) * PILE_FOOD_TO_MATURE as usize;
        for _ in 0..ticks_needed {
            sim.tick();
        }

        let ant = &sim.ants[key];
        assert!(!ant.is_immature(), "Ant should have matured");
        assert!(ant.team.is_some());
        assert_eq!(sim.team_counts.total(), 1);
        assert!(sim.food.pile.is_empty());

        // More ticks must not mature it again.
        for _ in 0..(PILE_EAT_TICKS + 1) {
            sim.tick();
        }
        assert_eq!(sim.team_counts.total(), 1, "A second maturity never happens");
    }

    #[test]
    fn test_immature_ant_confined_to_home_disk() {
        let mut sim = empty_sim();
        let key = sim.ants.insert(Ant::immature(sim.home));
        sim.ants[key].vel = vec2(500.0, 0.0);
        sim.tick();
        let dist = sim.ants[key].pos.distance(sim.home);
        assert!(dist <= HOME_RADIUS + 1e-3, "Baby clamped to the home disk, got {dist}");
    }

    #[test]
    fn test_pickup_extracts_and_broadcasts() {
        let mut sim = empty_sim();
        let source_pos = vec2(100.0, 100.0);
        sim.food
            .sources
            .push(FoodSource::with_mass(source_pos, FOOD_SOURCE_MASS));

        let picker = sim.spawn_mature_ant(source_pos);
        sim.ants[picker].vel = Vec2::ZERO;
        sim.ants[picker].working_ticks = FOOD_WORK_TICKS; // one tick from pickup

        // A listener in vision range of the picker, and one far away.
        let near = sim.spawn_mature_ant(vec2(180.0, 100.0));
        sim.ants[near].vel = Vec2::ZERO;
        sim.ants[near].ticks_since_food = 0;
        let far = sim.spawn_mature_ant(vec2(700.0, 500.0));
        sim.ants[far].vel = Vec2::ZERO;

        sim.tick();

        let picker_ant = &sim.ants[picker];
        assert!(picker_ant.carrying_food);
        assert_eq!(picker_ant.working_ticks, 0);
        assert_eq!(picker_ant.remembered_food, Some(source_pos));
        assert_eq!(sim.food.sources[0].mass, FOOD_SOURCE_MASS - FOOD_EXTRACT_AMOUNT);

        assert_eq!(
            sim.ants[near].remembered_food,
            Some(source_pos),
            "Non-carrying ant in range hears the broadcast"
        );
        assert_eq!(sim.ants[far].remembered_food, None, "Out of vision range");
    }

    #[test]
    fn test_remembered_location_cleared_on_arrival() {
        let mut sim = empty_sim();
        let target = vec2(200.0, 200.0);
        let key = sim.spawn_mature_ant(target);
        sim.ants[key].vel = Vec2::ZERO;
        sim.ants[key].remembered_food = Some(target);
        sim.tick();
        assert_eq!(sim.ants[key].remembered_food, None);
    }

    #[test]
    fn test_idle_ant_returns_home_and_resets_counter() {
        let mut sim = empty_sim();
        let past_idle = crate::simulation::IDLE_TICKS_BEFORE_RETURN + 1;

        // No sources anywhere, so the ant is stuck in the wander branch.
        let key = sim.spawn_mature_ant(sim.home + vec2(250.0, 0.0));
        sim.ants[key].vel = Vec2::ZERO;
        sim.ants[key].ticks_since_food = past_idle;
        sim.tick();
        assert_eq!(
            sim.ants[key].ticks_since_food,
            past_idle + 1,
            "Idle counter keeps climbing away from home"
        );
        // Once inside the home disk, the next idle tick resets the counter;
        // with no known sources the memory stays empty.
        sim.ants[key].pos = sim.home;
        sim.ants[key].vel = Vec2::ZERO;
        sim.tick();
        assert_eq!(sim.ants[key].ticks_since_food, 0);
        assert_eq!(sim.ants[key].remembered_food, None);
    }

    #[test]
    fn test_combat_trades_damage_on_contact() {
        let mut sim = empty_sim();
        let key = sim.spawn_mature_ant(vec2(100.0, 100.0));
        sim.ants[key].vel = Vec2::ZERO;
        let radius = sim.ants[key].radius;
        let enemy_key = sim
            .predators
            .insert(Predator::enemy(vec2(100.0 + radius, 100.0)));
        sim.predators[enemy_key].vel = Vec2::ZERO;

        let health_before = sim.ants[key].health;
        sim.tick();

        assert_eq!(sim.ants[key].health, health_before - 1.0);
        assert_eq!(sim.predators[enemy_key].health, crate::simulation::ENEMY_HEALTH - 1.0);
    }

    #[test]
    fn test_bug_death_leaves_high_mass_source() {
        let mut sim = empty_sim();
        let pos = vec2(321.0, 123.0);
        let key = sim.predators.insert(Predator::bug(pos));
        sim.predators[key].health = 0.0;
        let sources_before = sim.food.sources.len();

        sim.tick();

        assert!(sim.predators.is_empty());
        assert_eq!(sim.food.sources.len(), sources_before + 1);
        let corpse = sim.food.sources.last().unwrap();
        assert_eq!(corpse.pos, pos);
        assert_eq!(corpse.mass, BUG_FOOD_MASS);
    }

    #[test]
    fn test_dead_enemy_leaves_nothing() {
        let mut sim = empty_sim();
        let key = sim.predators.insert(Predator::enemy(vec2(50.0, 50.0)));
        sim.predators[key].health = 0.0;
        sim.tick();
        assert!(sim.predators.is_empty());
        assert!(sim.food.sources.is_empty());
    }

    #[test]
    fn test_enemy_spawn_respects_population_cap() {
        let mut sim = empty_sim();
        for _ in 0..50 {
            sim.spawn_mature_ant(random_point(BOUNDS));
        }
        sim.try_spawn_enemy();
        assert!(sim.predators.is_empty(), "50 ants do not exceed 50 x (0 + 1)");

        sim.spawn_mature_ant(random_point(BOUNDS));
        sim.try_spawn_enemy();
        assert_eq!(sim.predators.len(), 1, "51 ants allow exactly one enemy");

        sim.try_spawn_enemy();
        assert_eq!(sim.predators.len(), 1, "A second enemy needs over 100 mature ants");
    }

    #[test]
    fn test_single_bug_at_a_time() {
        let mut sim = empty_sim();
        for _ in 0..(sim.config.bug_spawn_threshold + 1) {
            sim.spawn_mature_ant(random_point(BOUNDS));
        }
        sim.try_spawn_bug();
        let bugs = |sim: &Simulation| {
            sim.predators
                .values()
                .filter(|p| p.kind == PredatorKind::Bug)
                .count()
        };
        assert_eq!(bugs(&sim), 1);
        sim.try_spawn_bug();
        assert_eq!(bugs(&sim), 1, "Only one live bug is permitted");
    }

    #[test]
    fn test_resize_is_idempotent_in_count_and_keeps_entities() {
        let config = SimulationConfig {
            initial_ants: 4,
            ..Default::default()
        };
        let mut sim = Simulation::new(config, BOUNDS);
        sim.predators.insert(Predator::enemy(vec2(10.0, 10.0)));
        let ant_positions: Vec<Vec2> = sim.ants.values().map(|a| a.pos).collect();

        let new_bounds = vec2(1024.0, 768.0);
        sim.handle_resize(new_bounds);
        let count_first = sim.food.sources.len();
        sim.handle_resize(new_bounds);

        assert_eq!(sim.food.sources.len(), count_first);
        assert_eq!(count_first, sim.config.initial_food_sources as usize);
        assert_eq!(sim.predators.len(), 1);
        let positions_after: Vec<Vec2> = sim.ants.values().map(|a| a.pos).collect();
        assert_eq!(ant_positions, positions_after, "Resize never repositions ants");
    }

    #[test]
    fn test_update_drives_cooldown_down_once_per_second() {
        let mut sim = empty_sim();
        sim.food.cooldown = SPAWN_COOLDOWN_SECS;
        // 0.5 s: no decrement yet.
        sim.update(0.5);
        assert_eq!(sim.food.cooldown, SPAWN_COOLDOWN_SECS);
        // Crossing the 1 s boundary decrements once.
        sim.update(0.6);
        assert_eq!(sim.food.cooldown, SPAWN_COOLDOWN_SECS - 1.0);
    }
}
