/// Configuration for a spring-shaped timing curve.
///
/// The curve is the closed-form step response of a damped harmonic
/// oscillator, scaled so that it settles by the end of the transition's
/// duration. Because it is a pure function of normalized time it can be
/// scrubbed to any fraction and resumed, which a stepped simulation can't.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Ratio of actual to critical damping. 1.0 never overshoots;
    /// lower values bounce, higher values creep in.
    pub damping_ratio: f32,
}

/// Natural frequency times damping ratio; e^-6.9 is about 0.001, so the
/// envelope has decayed to a tenth of a percent at t = 1.
const SETTLE_DECAY: f32 = 6.9;
const MIN_DAMPING_RATIO: f32 = 0.05;

impl SpringConfig {
    /// Critically damped: fastest approach with no overshoot
    pub const DEFAULT: Self = Self { damping_ratio: 1.0 };

    /// Bouncy spring with visible overshoot
    pub const BOUNCY: Self = Self { damping_ratio: 0.5 };

    /// Snappy spring with a slight overshoot
    pub const SNAPPY: Self = Self { damping_ratio: 0.8 };

    /// Gentle, overdamped approach
    pub const GENTLE: Self = Self { damping_ratio: 1.4 };

    pub const fn with_damping_ratio(damping_ratio: f32) -> Self {
        Self { damping_ratio }
    }

    /// Evaluate the curve at normalized time `t`.
    /// Returns exactly 0.0 at t <= 0 and exactly 1.0 at t >= 1.
    pub fn evaluate(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let zeta = self.damping_ratio.max(MIN_DAMPING_RATIO);
        let omega = SETTLE_DECAY / zeta.min(1.0);
        let end = step_response(1.0, zeta, omega);
        step_response(t, zeta, omega) / end
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Position of a unit spring released at rest from 0 toward 1.
fn step_response(t: f32, zeta: f32, omega: f32) -> f32 {
    if (zeta - 1.0).abs() < 1e-4 {
        1.0 - (-omega * t).exp() * (1.0 + omega * t)
    } else if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        1.0 - envelope * ((omega_d * t).cos() + zeta * omega / omega_d * (omega_d * t).sin())
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_endpoints_are_exact() {
        for config in [
            SpringConfig::DEFAULT,
            SpringConfig::BOUNCY,
            SpringConfig::SNAPPY,
            SpringConfig::GENTLE,
        ] {
            assert_eq!(config.evaluate(0.0), 0.0);
            assert_eq!(config.evaluate(1.0), 1.0);
            assert_eq!(config.evaluate(-0.5), 0.0);
            assert_eq!(config.evaluate(1.5), 1.0);
        }
    }

    #[test]
    fn test_critically_damped_is_monotonic() {
        let config = SpringConfig::DEFAULT;
        let mut prev = 0.0;
        for i in 1..=100 {
            let value = config.evaluate(i as f32 / 100.0);
            assert!(
                value >= prev - 1e-6,
                "critically damped spring went backwards at step {}: {} < {}",
                i,
                value,
                prev
            );
            assert!(value <= 1.0 + 1e-6);
            prev = value;
        }
    }

    #[test]
    fn test_bouncy_spring_overshoots() {
        let config = SpringConfig::BOUNCY;
        let max = (1..100)
            .map(|i| config.evaluate(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(max > 1.0, "Bouncy spring should overshoot, max was {}", max);
    }

    #[test]
    fn test_overdamped_spring_stays_in_range() {
        let config = SpringConfig::GENTLE;
        for i in 0..=20 {
            let value = config.evaluate(i as f32 / 20.0);
            assert!((0.0..=1.0 + 1e-5).contains(&value), "got {}", value);
        }
    }
}
