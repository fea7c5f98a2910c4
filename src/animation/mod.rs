mod animatable;
mod animator;
mod spring;
mod timing;

use std::time::Duration;

pub use animatable::Animatable;
pub use animator::{AnimatingPosition, AnimatorState, PropertyAnimator};
pub use spring::SpringConfig;
pub use timing::TimingFunction;

/// Configuration for how a transition between two values plays out
#[derive(Clone, Debug)]
pub struct Transition {
    /// Length of the full timeline, from fraction 0 to fraction 1
    pub duration: Duration,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }

    /// Create a spring-based transition settling within `duration`
    pub fn spring(duration: Duration, config: SpringConfig) -> Self {
        Self {
            duration,
            timing: TimingFunction::Spring(config),
        }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for Transition {
    /// Half a second on a critically damped spring
    fn default() -> Self {
        Self::spring(Duration::from_millis(500), SpringConfig::DEFAULT)
    }
}
