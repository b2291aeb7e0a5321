/// Count-up timer for coarse simulation clocks (enemy spawn interval,
/// the one-second bookkeeping tick).
#[derive(Debug, Clone)]
pub struct Timer {
    pub max_value: f32,
    pub value: f32,
}

impl Timer {
    pub fn new(max_value: f32) -> Self {
        Self {
            max_value,
            value: 0.0,
        }
    }

    /// Returns true once the timer has reached its max value.
    pub fn is_ready(&self) -> bool {
        self.value >= self.max_value
    }

    /// Advance the timer by dt seconds.
    pub fn update(&mut self, dt: f32) {
        self.value += dt;
    }

    /// Wraps the timer value back within bounds, keeping the overshoot.
    pub fn wrap(&mut self) {
        self.value %= self.max_value;
    }
}
