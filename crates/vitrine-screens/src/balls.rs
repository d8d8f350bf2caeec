//! Bouncing balls inside a circular arena (stateful, mount-seeded).
//!
//! Each ball starts from a fixed quadrant offset and samples exactly one
//! random target per mount. The forever-bounce comes from a ping-pong
//! tween between start and target, not from periodic re-sampling; every
//! observed offset passes through the containment clamp.

use rand::Rng;
use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    widgets::canvas::{Canvas, Circle},
};
use vitrine_core::{Offset, Tween, clamp_to_disc, sample_offset_in_square};

/// Arena radius in virtual units.
pub const ARENA_RADIUS: f32 = 150.0;

/// Ball radius in virtual units.
pub const BALL_RADIUS: f32 = 20.0;

/// Farthest a ball center may sit from the arena center.
pub const MAX_CENTER_DISTANCE: f32 = ARENA_RADIUS - BALL_RADIUS;

/// Seconds for one forward leg of a bounce.
const BOUNCE_SECS: f32 = 1.0;

/// Fixed symmetric starting offsets, one per ball.
const START_OFFSETS: [Offset; 4] = [
    Offset::new(50.0, 50.0),
    Offset::new(-50.0, -50.0),
    Offset::new(30.0, -30.0),
    Offset::new(-30.0, 30.0),
];

/// One ball: where it starts, where it is heading, and how it moves.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    start: Offset,
    target: Offset,
    tween: Tween,
}

impl Ball {
    /// Offset at `elapsed` seconds since mount. The clamp runs on every
    /// observation, so the containment invariant holds for interpolated
    /// positions too (a no-op here, since the chord between two in-disc
    /// points stays in the disc).
    pub fn offset_at(&self, elapsed: f32) -> Offset {
        let progress = self.tween.progress(elapsed);
        clamp_to_disc(self.start.lerp(self.target, progress), MAX_CENTER_DISTANCE)
    }

    /// The once-per-mount sampled bounce target.
    pub fn target(&self) -> Offset {
        self.target
    }
}

/// Seed the four balls: fixed starts, one random in-bounds target each.
///
/// Sampling and correction are composed into a single step, so no
/// out-of-bounds target is ever observable.
pub fn seed_balls(rng: &mut impl Rng) -> [Ball; 4] {
    START_OFFSETS.map(|start| {
        let target = clamp_to_disc(
            sample_offset_in_square(rng, MAX_CENTER_DISTANCE),
            MAX_CENTER_DISTANCE,
        );
        Ball {
            start,
            target,
            tween: Tween::linear(BOUNCE_SECS).ping_pong(),
        }
    })
}

/// Render the red arena and its four blue balls.
pub fn render(frame: &mut Frame, area: Rect, balls: &[Ball], elapsed: f32) {
    let view = (ARENA_RADIUS + 10.0) as f64;
    let canvas = Canvas::default()
        .x_bounds([-view, view])
        .y_bounds([-view, view])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: ARENA_RADIUS as f64,
                color: Color::Red,
            });
            for ball in balls {
                let offset = ball.offset_at(elapsed);
                ctx.draw(&Circle {
                    x: offset.x as f64,
                    y: offset.y as f64,
                    radius: BALL_RADIUS as f64,
                    color: Color::Blue,
                });
            }
        });
    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_targets_stay_within_arena() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for ball in seed_balls(&mut rng) {
                assert!(ball.target().distance() <= MAX_CENTER_DISTANCE + 1e-3);
            }
        }
    }

    #[test]
    fn test_observed_offsets_stay_within_arena() {
        let mut rng = StdRng::seed_from_u64(3);
        let balls = seed_balls(&mut rng);
        for ball in &balls {
            for step in 0..200 {
                let elapsed = step as f32 * 0.05;
                assert!(ball.offset_at(elapsed).distance() <= MAX_CENTER_DISTANCE + 1e-3);
            }
        }
    }

    #[test]
    fn test_balls_start_from_fixed_quadrant_offsets() {
        let mut rng = StdRng::seed_from_u64(11);
        let balls = seed_balls(&mut rng);
        assert_eq!(balls[0].offset_at(0.0), Offset::new(50.0, 50.0));
        assert_eq!(balls[1].offset_at(0.0), Offset::new(-50.0, -50.0));
        assert_eq!(balls[2].offset_at(0.0), Offset::new(30.0, -30.0));
        assert_eq!(balls[3].offset_at(0.0), Offset::new(-30.0, 30.0));
    }

    #[test]
    fn test_bounce_reaches_target_and_returns() {
        let mut rng = StdRng::seed_from_u64(23);
        let balls = seed_balls(&mut rng);
        for ball in &balls {
            let at_target = ball.offset_at(1.0);
            assert!((at_target.x - ball.target().x).abs() < 1e-3);
            assert!((at_target.y - ball.target().y).abs() < 1e-3);
            let back_home = ball.offset_at(2.0);
            assert!((back_home.x - ball.offset_at(0.0).x).abs() < 1e-3);
            assert!((back_home.y - ball.offset_at(0.0).y).abs() < 1e-3);
        }
    }
}
