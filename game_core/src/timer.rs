/// Simulation-time stopwatch that becomes ready once `duration` has passed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    pub elapsed: f32,
    pub duration: f32,
}

impl Cooldown {
    /// A freshly started cooldown (not ready until `duration` passes)
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// A cooldown that is already ready
    pub fn expired(duration: f32) -> Self {
        Self {
            elapsed: duration + f32::EPSILON.max(duration * f32::EPSILON),
            duration,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn ready(&self) -> bool {
        self.elapsed > self.duration
    }

    /// Fraction of the duration that has passed, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}
