//! Screen state and rendering for the vitrine demo.
//!
//! Four pages behind one dispatcher: a static typography showcase, the
//! bouncing-balls arena, the staggered letter drop, and a settings-style
//! form. The animated pages seed their random state on mount and are
//! re-seeded whenever the page is revisited.

pub mod balls;
pub mod form;
pub mod letters;
pub mod showcase;
mod state;

pub use state::{Page, Screens};
