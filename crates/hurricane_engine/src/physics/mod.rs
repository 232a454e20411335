//! Physics stepping
//!
//! The loop hands the physics collaborator the frame's delta-time once per
//! iteration. There is no fixed sub-stepping: physics advances by exactly the
//! frame's delta-time, so the simulation rate follows the frame rate.

/// Physics collaborator driven by the game loop
pub trait PhysicsBackend {
    /// Advance the simulation by `delta_time` seconds
    fn fixed_update(&mut self, delta_time: f32);
}

/// Default physics system: tracks simulated time and step count
#[derive(Debug, Default)]
pub struct PhysicsSystem {
    steps: u64,
    simulated_time: f64,
}

impl PhysicsSystem {
    /// Create a new physics system
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps taken
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Total simulated time in seconds
    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }
}

impl PhysicsBackend for PhysicsSystem {
    fn fixed_update(&mut self, delta_time: f32) {
        self.steps += 1;
        self.simulated_time += f64::from(delta_time);
    }
}
