//! Declarative tweens evaluated as pure functions of elapsed time.
//!
//! A [`Tween`] describes one animated scalar: a progress curve from 0
//! toward 1 over a cycle, optionally delayed and repeated. There is no
//! scheduler; callers ask for the progress at a given number of seconds
//! since mount, so the same description serves rendering and tests.

/// Fraction of the initial displacement below which a spring counts as
/// settled.
const SPRING_SETTLE_EPSILON: f32 = 1e-3;

/// Easing curve applied over one cycle of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Underdamped unit-mass spring response toward the target. Progress
    /// overshoots 1.0 before settling; the wobble is the point.
    Spring { stiffness: f32, damping: f32 },
}

impl Easing {
    /// Evaluate the curve at normalized cycle position `u` in `[0, 1]`,
    /// where one cycle spans `cycle_secs` seconds of real time.
    fn apply(self, u: f32, cycle_secs: f32) -> f32 {
        match self {
            Easing::Linear => u,
            Easing::Spring { stiffness, damping } => {
                spring_response(u * cycle_secs, stiffness, damping)
            }
        }
    }

    /// Seconds one cycle naturally takes. Springs have no hard end, so
    /// their settling time stands in for a duration.
    fn natural_cycle_secs(self) -> Option<f32> {
        match self {
            Easing::Linear => None,
            Easing::Spring { damping, .. } => Some(spring_settling_secs(damping)),
        }
    }
}

/// Displacement-normalized position of a unit-mass spring released at 0
/// toward 1, `t` seconds after release.
fn spring_response(t: f32, stiffness: f32, damping: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    let decay = damping / 2.0;
    let omega_sq = stiffness - decay * decay;
    if omega_sq <= 0.0 {
        // Critically damped or overdamped: no oscillation, exponential approach.
        return 1.0 - (-decay * t).exp();
    }
    let omega = omega_sq.sqrt();
    let envelope = (-decay * t).exp();
    1.0 - envelope * ((omega * t).cos() + decay / omega * (omega * t).sin())
}

/// Time for the spring's decay envelope to fall below the settle threshold.
fn spring_settling_secs(damping: f32) -> f32 {
    let decay = (damping / 2.0).max(f32::EPSILON);
    -SPRING_SETTLE_EPSILON.ln() / decay
}

/// How a tween behaves after its first cycle completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Play once and hold the final value.
    #[default]
    Once,
    /// Replay the cycle forward from the start, forever.
    Loop,
    /// Play forward, then backward, forever.
    PingPong,
}

/// One animated scalar, stateless in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    delay: f32,
    duration: f32,
    easing: Easing,
    repeat: Repeat,
}

impl Tween {
    /// A linear tween over `duration` seconds.
    pub fn linear(duration: f32) -> Self {
        Self {
            delay: 0.0,
            duration: duration.max(f32::EPSILON),
            easing: Easing::Linear,
            repeat: Repeat::Once,
        }
    }

    /// A spring tween; its cycle is the spring's settling time.
    pub fn spring(stiffness: f32, damping: f32) -> Self {
        let easing = Easing::Spring { stiffness, damping };
        let duration = easing.natural_cycle_secs().unwrap_or(1.0);
        Self {
            delay: 0.0,
            duration,
            easing,
            repeat: Repeat::Once,
        }
    }

    /// Hold at zero progress for `delay` seconds before starting.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Replay forward forever.
    pub fn looping(mut self) -> Self {
        self.repeat = Repeat::Loop;
        self
    }

    /// Play forward and back forever.
    pub fn ping_pong(mut self) -> Self {
        self.repeat = Repeat::PingPong;
        self
    }

    /// Seconds the tween waits before its first cycle.
    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Eased progress at `elapsed` seconds since mount. Zero until the
    /// delay expires, then a pure function of the local cycle time.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            return 0.0;
        }
        let local = match self.repeat {
            Repeat::Once => t.min(self.duration),
            Repeat::Loop => t % self.duration,
            Repeat::PingPong => {
                let phase = t % (2.0 * self.duration);
                if phase <= self.duration {
                    phase
                } else {
                    2.0 * self.duration - phase
                }
            }
        };
        self.easing.apply(local / self.duration, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_ping_pong_endpoints() {
        let tween = Tween::linear(1.0).ping_pong();
        assert_eq!(tween.progress(0.0), 0.0);
        assert!((tween.progress(0.5) - 0.5).abs() < 1e-6);
        assert!((tween.progress(1.0) - 1.0).abs() < 1e-6);
        assert!((tween.progress(1.5) - 0.5).abs() < 1e-6);
        assert!(tween.progress(2.0).abs() < 1e-6);
    }

    #[test]
    fn test_progress_is_zero_before_delay() {
        let tween = Tween::linear(1.0).with_delay(0.4);
        assert_eq!(tween.progress(0.0), 0.0);
        assert_eq!(tween.progress(0.39), 0.0);
        assert!((tween.progress(0.9) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_once_holds_final_value() {
        let tween = Tween::linear(1.0);
        assert_eq!(tween.progress(5.0), 1.0);
    }

    #[test]
    fn test_spring_settles_near_target() {
        let tween = Tween::spring(50.0, 8.0);
        assert!((tween.progress(tween.duration) - 1.0).abs() < 5e-3);
    }

    #[test]
    fn test_spring_overshoots_target() {
        // First oscillation peak of the (50, 8) spring lands past 1.0.
        let tween = Tween::spring(50.0, 8.0);
        let peak = (0..200)
            .map(|step| tween.progress(step as f32 * 0.01))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_looping_spring_replays_from_zero() {
        let tween = Tween::spring(50.0, 8.0).looping();
        let just_after_cycle = tween.progress(tween.duration + 0.01);
        assert!(just_after_cycle < 0.1);
    }

    #[test]
    fn test_overdamped_spring_does_not_oscillate() {
        let tween = Tween::spring(4.0, 10.0);
        let mut last = 0.0;
        for step in 0..100 {
            let p = tween.progress(step as f32 * 0.05);
            assert!(p >= last - 1e-6);
            assert!(p <= 1.0 + 1e-6);
            last = p;
        }
    }
}
