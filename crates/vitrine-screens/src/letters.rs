//! Staggered letter-drop animation (stateful, mount-seeded).
//!
//! All 26 letters fall from a sentinel offset above the viewport into a
//! randomized resting band, one after another. Column and resting target
//! are sampled once per mount; the looping spring tween replays the same
//! drop toward the same target each cycle.

use rand::Rng;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::canvas::Canvas,
};
use vitrine_core::{ALPHABET, Tween, is_vowel};

/// Virtual field width the letters scatter across.
pub const FIELD_WIDTH: f32 = 600.0;

/// Virtual field height; the resting band straddles its bottom edge.
pub const FIELD_HEIGHT: f32 = 400.0;

/// Vertical offset every letter starts from, above the viewport window.
pub const DROP_SENTINEL: f32 = -100.0;

/// Half-width of the random perturbation around the resting center.
pub const DROP_JITTER: f32 = 100.0;

/// Seconds between consecutive letters starting their drop.
pub const STAGGER_SECS: f32 = 0.2;

const SPRING_STIFFNESS: f32 = 50.0;
const SPRING_DAMPING: f32 = 8.0;

// Model-space window the canvas shows. The sentinel position
// (FIELD_HEIGHT / 2 + DROP_SENTINEL = 100) sits above VIEW_TOP, and the
// window extends past the field edge so the resting band and the spring
// overshoot stay visible.
const VIEW_TOP: f32 = 120.0;
const VIEW_BOTTOM: f32 = 580.0;

/// One glyph: fixed column, fixed resting target, staggered spring tween.
#[derive(Debug, Clone, Copy)]
pub struct Letter {
    glyph: char,
    x: f32,
    target_offset: f32,
    tween: Tween,
}

impl Letter {
    /// Vertical offset relative to the field's center line at `elapsed`
    /// seconds since mount.
    pub fn offset_at(&self, elapsed: f32) -> f32 {
        let progress = self.tween.progress(elapsed);
        DROP_SENTINEL + (self.target_offset - DROP_SENTINEL) * progress
    }

    /// Absolute vertical position within the field (grows downward).
    pub fn y_at(&self, elapsed: f32) -> f32 {
        FIELD_HEIGHT / 2.0 + self.offset_at(elapsed)
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    /// The once-per-mount sampled resting offset.
    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    /// Seconds this letter waits before its first drop.
    pub fn delay(&self) -> f32 {
        self.tween.delay()
    }

    /// Vowels take the accent color, consonants the plain one.
    pub fn color(&self) -> Color {
        if is_vowel(self.glyph) {
            Color::Blue
        } else {
            Color::White
        }
    }
}

/// Seed all 26 letters. Columns and resting targets are sampled exactly
/// once here and never re-sampled on later observation.
pub fn seed_letters(rng: &mut impl Rng) -> Vec<Letter> {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(index, &glyph)| Letter {
            glyph,
            x: rng.gen_range(0.0..=FIELD_WIDTH),
            target_offset: FIELD_HEIGHT / 2.0 + rng.gen_range(-DROP_JITTER..=DROP_JITTER),
            tween: Tween::spring(SPRING_STIFFNESS, SPRING_DAMPING)
                .looping()
                .with_delay(index as f32 * STAGGER_SECS),
        })
        .collect()
}

/// Render the letters onto a black canvas windowed over the drop path.
pub fn render(frame: &mut Frame, area: Rect, letters: &[Letter], elapsed: f32) {
    let canvas = Canvas::default()
        .background_color(Color::Black)
        .x_bounds([0.0, FIELD_WIDTH as f64])
        .y_bounds([0.0, (VIEW_BOTTOM - VIEW_TOP) as f64])
        .paint(|ctx| {
            for letter in letters {
                let y = letter.y_at(elapsed);
                if !(VIEW_TOP..=VIEW_BOTTOM).contains(&y) {
                    continue;
                }
                // Canvas y grows upward; the model's grows downward.
                let draw_y = (VIEW_BOTTOM - y) as f64;
                ctx.print(
                    letter.x() as f64,
                    draw_y,
                    Span::styled(letter.glyph().to_string(), Style::new().fg(letter.color())),
                );
            }
        });
    frame.render_widget(canvas, area);
}
