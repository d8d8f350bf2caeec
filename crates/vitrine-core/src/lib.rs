//! Pure model for the vitrine demo screens.
//!
//! Everything here is independent of the terminal: 2D offsets and the
//! circular containment clamp, tweens evaluated as pure functions of
//! elapsed time, and the fixed drop alphabet with its vowel rule.

mod alphabet;
mod geometry;
mod tween;

pub use alphabet::{ALPHABET, is_vowel};
pub use geometry::{Offset, clamp_to_disc, sample_offset_in_square};
pub use tween::{Easing, Repeat, Tween};
