//! Typography showcase screen (static).
//!
//! The pangram repeated at nominal point sizes 8..37 between a blue top
//! bar and a red bottom bar. A terminal cannot scale glyphs, so sizes map
//! to style tiers instead. Scroll position is the only state.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

pub const PANGRAM: &str = "The quick brown fox jumped over the lazy dog";

/// Nominal point sizes the showcase ramps through.
const SIZES: std::ops::Range<u16> = 8..37;

#[derive(Debug, Default)]
pub struct ShowcaseScreen {
    scroll: u16,
}

impl ShowcaseScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key while the showcase page is active.
    pub fn on_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(SIZES.len() as u16 - 1);
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Blue top bar
            Constraint::Fill(1),   // Pangram ramp
            Constraint::Length(3), // Red bottom bar
        ])
        .split(area);

        frame.render_widget(
            Block::bordered()
                .border_style(Style::new().fg(Color::Black))
                .style(Style::new().bg(Color::Blue)),
            chunks[0],
        );

        let lines: Vec<Line> = SIZES
            .map(|size| Line::from(format!("{size}pt  {PANGRAM}")).style(size_style(size)))
            .collect();
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::new().fg(Color::Black).bg(Color::Yellow))
                .alignment(Alignment::Center)
                .scroll((self.scroll, 0)),
            chunks[1],
        );

        frame.render_widget(
            Block::bordered()
                .border_style(Style::new().fg(Color::White))
                .style(Style::new().bg(Color::Red)),
            chunks[2],
        );
    }
}

/// Map a nominal point size to a style tier.
fn size_style(size: u16) -> Style {
    match size {
        ..15 => Style::new().add_modifier(Modifier::DIM),
        15..23 => Style::new(),
        23..30 => Style::new().add_modifier(Modifier::BOLD),
        _ => Style::new().add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_stays_in_range() {
        let mut showcase = ShowcaseScreen::new();
        showcase.on_key(KeyCode::Up);
        assert_eq!(showcase.scroll, 0);
        for _ in 0..100 {
            showcase.on_key(KeyCode::Down);
        }
        assert_eq!(showcase.scroll, SIZES.len() as u16 - 1);
    }
}
