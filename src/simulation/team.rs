use macroquad::prelude::*;
use macroquad::rand;

/// The fixed palette of ant teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Team {
    pub const ALL: [Team; 4] = [Team::Red, Team::Green, Team::Blue, Team::Yellow];

    /// Pick a team uniformly at random.
    pub fn random() -> Team {
        Self::ALL[rand::gen_range(0, Self::ALL.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Green => "green",
            Team::Blue => "blue",
            Team::Yellow => "yellow",
        }
    }

    pub fn base_rgb(self) -> (u8, u8, u8) {
        match self {
            Team::Red => (255, 0, 0),
            Team::Green => (0, 255, 0),
            Team::Blue => (0, 0, 255),
            Team::Yellow => (255, 255, 0),
        }
    }

    /// Team base color with an independent random offset per channel,
    /// clamped to the valid range. Gives each ant its own shade.
    pub fn jittered_color(self) -> Color {
        let (r, g, b) = self.base_rgb();
        let jitter = |base: u8| (base as i32 + rand::gen_range(-50, 50)).clamp(0, 255) as u8;
        Color::from_rgba(jitter(r), jitter(g), jitter(b), 255)
    }

    fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Green => 1,
            Team::Blue => 2,
            Team::Yellow => 3,
        }
    }
}

/// Live mature-ant count per team. Incremented when an ant matures (or is
/// spawned mature), decremented when it dies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamCounts {
    counts: [u32; Team::ALL.len()],
}

impl TeamCounts {
    pub fn get(&self, team: Team) -> u32 {
        self.counts[team.index()]
    }

    pub fn increment(&mut self, team: Team) {
        self.counts[team.index()] += 1;
    }

    pub fn decrement(&mut self, team: Team) {
        let slot = &mut self.counts[team.index()];
        *slot = slot.saturating_sub(1);
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Team, u32)> + '_ {
        Team::ALL.iter().map(|&team| (team, self.get(team)))
    }
}
