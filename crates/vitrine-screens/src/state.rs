//! Page selection and per-screen state dispatch.

use crossterm::event::KeyCode;
use rand::Rng;
use ratatui::{Frame, layout::Rect};

use crate::{
    balls::{self, Ball},
    form::FormScreen,
    letters::{self, Letter},
    showcase::ShowcaseScreen,
};

/// The four demo pages, in swipe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Showcase,
    Balls,
    Letters,
    Form,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Showcase, Page::Balls, Page::Letters, Page::Form];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&page| page == self).unwrap_or(0)
    }

    /// The following page, stopping at the last one.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// The preceding page, stopping at the first one.
    pub fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Showcase => "Showcase",
            Page::Balls => "Balls",
            Page::Letters => "Letters",
            Page::Form => "Form",
        }
    }

    /// Page-specific key hints for the help bar.
    pub fn key_hint(self) -> &'static str {
        match self {
            Page::Showcase => "↑/↓ scroll",
            Page::Balls => "",
            Page::Letters => "",
            Page::Form => "↑/↓ focus  ←/→ adjust  space toggle  enter activate  r reset",
        }
    }
}

/// Mount-scoped state for the balls page.
#[derive(Debug)]
struct BallsMount {
    balls: [Ball; 4],
    mounted_ms: u64,
}

/// Mount-scoped state for the letters page.
#[derive(Debug)]
struct LettersMount {
    letters: Vec<Letter>,
    mounted_ms: u64,
}

/// All screen state. The animated pages are `None` while unmounted and
/// seed themselves on their first render after mounting; showcase and
/// form state live for the whole session.
#[derive(Debug, Default)]
pub struct Screens {
    showcase: ShowcaseScreen,
    balls: Option<BallsMount>,
    letters: Option<LettersMount>,
    form: FormScreen,
}

impl Screens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard a page's animation state. Pending staggered drops and
    /// bounces die with it; the next visit re-seeds from scratch.
    pub fn unmount(&mut self, page: Page) {
        match page {
            Page::Balls => self.balls = None,
            Page::Letters => self.letters = None,
            Page::Showcase | Page::Form => {}
        }
    }

    /// Render the active page. `elapsed_ms` is milliseconds since app
    /// start; animated pages capture it as their mount instant on first
    /// render.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        page: Page,
        elapsed_ms: u64,
        rng: &mut impl Rng,
    ) {
        match page {
            Page::Showcase => self.showcase.render(frame, area),
            Page::Balls => {
                let mount = self.balls.get_or_insert_with(|| BallsMount {
                    balls: balls::seed_balls(rng),
                    mounted_ms: elapsed_ms,
                });
                let secs = elapsed_ms.saturating_sub(mount.mounted_ms) as f32 / 1000.0;
                balls::render(frame, area, &mount.balls, secs);
            }
            Page::Letters => {
                let mount = self.letters.get_or_insert_with(|| LettersMount {
                    letters: letters::seed_letters(rng),
                    mounted_ms: elapsed_ms,
                });
                let secs = elapsed_ms.saturating_sub(mount.mounted_ms) as f32 / 1000.0;
                letters::render(frame, area, &mount.letters, secs);
            }
            Page::Form => self.form.render(frame, area, elapsed_ms as f32 / 1000.0),
        }
    }

    /// Route a key to the active page.
    pub fn on_key(&mut self, page: Page, key: KeyCode, elapsed_ms: u64) {
        match page {
            Page::Showcase => self.showcase.on_key(key),
            Page::Form => self.form.on_key(key, elapsed_ms as f32 / 1000.0),
            Page::Balls | Page::Letters => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_page_order_does_not_wrap() {
        assert_eq!(Page::Showcase.next(), Page::Balls);
        assert_eq!(Page::Balls.next(), Page::Letters);
        assert_eq!(Page::Letters.next(), Page::Form);
        assert_eq!(Page::Form.next(), Page::Form);
        assert_eq!(Page::Showcase.prev(), Page::Showcase);
        assert_eq!(Page::Form.prev(), Page::Letters);
    }

    #[test]
    fn test_unmount_discards_animation_state() {
        let mut screens = Screens::new();
        let mut rng = StdRng::seed_from_u64(9);
        screens.balls = Some(BallsMount {
            balls: balls::seed_balls(&mut rng),
            mounted_ms: 0,
        });
        screens.unmount(Page::Balls);
        assert!(screens.balls.is_none());
    }

    #[test]
    fn test_unmount_leaves_form_state_alone() {
        let mut screens = Screens::new();
        screens.form.on_key(KeyCode::Right, 0.0);
        screens.unmount(Page::Form);
        assert_eq!(screens.form.slider(), 51.0);
    }
}
