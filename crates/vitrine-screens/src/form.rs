//! Settings-style form screen.
//!
//! An integer slider with live value text, a toggle, a three-option
//! picker, a color choice, and Submit/Reset actions. The only contract
//! worth a test is Reset: all four values return to their defaults no
//! matter what came before.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
};

/// Seconds the "Form submitted" flash stays visible.
const FLASH_SECS: f32 = 2.0;

const SLIDER_DEFAULT: f64 = 50.0;
const SLIDER_MIN: f64 = 0.0;
const SLIDER_MAX: f64 = 100.0;

/// The three picker choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerOption {
    #[default]
    One,
    Two,
    Three,
}

impl PickerOption {
    pub fn label(self) -> &'static str {
        match self {
            PickerOption::One => "Option 1",
            PickerOption::Two => "Option 2",
            PickerOption::Three => "Option 3",
        }
    }

    /// Cycle to the next option.
    pub fn next(self) -> Self {
        match self {
            PickerOption::One => PickerOption::Two,
            PickerOption::Two => PickerOption::Three,
            PickerOption::Three => PickerOption::One,
        }
    }

    /// Cycle to the previous option.
    pub fn prev(self) -> Self {
        match self {
            PickerOption::One => PickerOption::Three,
            PickerOption::Two => PickerOption::One,
            PickerOption::Three => PickerOption::Two,
        }
    }
}

/// Selectable form colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormColor {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Magenta,
    Cyan,
}

impl FormColor {
    /// Cycle to the next color.
    pub fn next(self) -> Self {
        match self {
            FormColor::Blue => FormColor::Red,
            FormColor::Red => FormColor::Green,
            FormColor::Green => FormColor::Yellow,
            FormColor::Yellow => FormColor::Magenta,
            FormColor::Magenta => FormColor::Cyan,
            FormColor::Cyan => FormColor::Blue,
        }
    }

    /// Cycle to the previous color.
    pub fn prev(self) -> Self {
        match self {
            FormColor::Blue => FormColor::Cyan,
            FormColor::Red => FormColor::Blue,
            FormColor::Green => FormColor::Red,
            FormColor::Yellow => FormColor::Green,
            FormColor::Magenta => FormColor::Yellow,
            FormColor::Cyan => FormColor::Magenta,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormColor::Blue => "Blue",
            FormColor::Red => "Red",
            FormColor::Green => "Green",
            FormColor::Yellow => "Yellow",
            FormColor::Magenta => "Magenta",
            FormColor::Cyan => "Cyan",
        }
    }

    /// Convert to a Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            FormColor::Blue => Color::Blue,
            FormColor::Red => Color::Red,
            FormColor::Green => Color::Green,
            FormColor::Yellow => Color::Yellow,
            FormColor::Magenta => Color::Magenta,
            FormColor::Cyan => Color::Cyan,
        }
    }
}

/// Focusable rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormRow {
    #[default]
    Slider,
    Toggle,
    Picker,
    Color,
    Submit,
    Reset,
}

impl FormRow {
    const ALL: [FormRow; 6] = [
        FormRow::Slider,
        FormRow::Toggle,
        FormRow::Picker,
        FormRow::Color,
        FormRow::Submit,
        FormRow::Reset,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&row| row == self).unwrap_or(0)
    }

    /// Move focus down, stopping at the last row.
    fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Move focus up, stopping at the first row.
    fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// The form screen's state. Persists across page switches; only the
/// explicit Reset action restores defaults.
#[derive(Debug)]
pub struct FormScreen {
    slider: f64,
    toggle: bool,
    picker: PickerOption,
    color: FormColor,
    focus: FormRow,
    submitted_at: Option<f32>,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormScreen {
    pub fn new() -> Self {
        Self {
            slider: SLIDER_DEFAULT,
            toggle: false,
            picker: PickerOption::default(),
            color: FormColor::default(),
            focus: FormRow::default(),
            submitted_at: None,
        }
    }

    pub fn slider(&self) -> f64 {
        self.slider
    }

    pub fn toggle(&self) -> bool {
        self.toggle
    }

    pub fn picker(&self) -> PickerOption {
        self.picker
    }

    pub fn color(&self) -> FormColor {
        self.color
    }

    /// The live slider readout.
    pub fn slider_text(&self) -> String {
        format!("Slider Value: {}", self.slider as i64)
    }

    /// Restore the four control values to their defaults. Focus and the
    /// submit flash are presentation state and stay put.
    pub fn reset(&mut self) {
        self.slider = SLIDER_DEFAULT;
        self.toggle = false;
        self.picker = PickerOption::default();
        self.color = FormColor::default();
    }

    /// Handle a key while the form page is active. `elapsed` is seconds
    /// since app start, used to time the submit flash.
    pub fn on_key(&mut self, key: KeyCode, elapsed: f32) {
        match key {
            KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Left => self.adjust(-1.0),
            KeyCode::Right => self.adjust(1.0),
            KeyCode::Char(' ') => self.toggle = !self.toggle,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Enter => self.activate(elapsed),
            _ => {}
        }
    }

    /// Left/Right on the focused control.
    fn adjust(&mut self, direction: f64) {
        match self.focus {
            FormRow::Slider => {
                self.slider = (self.slider + direction).clamp(SLIDER_MIN, SLIDER_MAX);
            }
            FormRow::Picker => {
                self.picker = if direction < 0.0 {
                    self.picker.prev()
                } else {
                    self.picker.next()
                };
            }
            FormRow::Color => {
                self.color = if direction < 0.0 {
                    self.color.prev()
                } else {
                    self.color.next()
                };
            }
            _ => {}
        }
    }

    /// Enter on the focused row.
    fn activate(&mut self, elapsed: f32) {
        match self.focus {
            FormRow::Toggle => self.toggle = !self.toggle,
            FormRow::Submit => self.submitted_at = Some(elapsed),
            FormRow::Reset => self.reset(),
            _ => {}
        }
    }

    fn row_style(&self, row: FormRow) -> Style {
        if self.focus == row {
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::new()
        }
    }

    fn marker(&self, row: FormRow) -> &'static str {
        if self.focus == row { "▸ " } else { "  " }
    }

    /// Render the form. `elapsed` is seconds since app start.
    pub fn render(&self, frame: &mut Frame, area: Rect, elapsed: f32) {
        let block = Block::bordered().title(" Form Example ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Section header
            Constraint::Length(1), // Slider gauge
            Constraint::Length(1), // Slider readout
            Constraint::Length(1), // Toggle
            Constraint::Length(1), // Picker
            Constraint::Length(1), // Color
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Submit
            Constraint::Length(1), // Reset
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Flash
            Constraint::Fill(1),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from("Controls".bold().underlined())),
            chunks[0],
        );

        let gauge = Gauge::default()
            .ratio(self.slider / SLIDER_MAX)
            .label(format!("{}", self.slider as i64))
            .gauge_style(Style::new().fg(self.color.color()));
        let gauge_chunks =
            Layout::horizontal([Constraint::Length(2), Constraint::Fill(1)]).split(chunks[1]);
        frame.render_widget(
            Paragraph::new(self.marker(FormRow::Slider)).style(self.row_style(FormRow::Slider)),
            gauge_chunks[0],
        );
        frame.render_widget(gauge, gauge_chunks[1]);

        frame.render_widget(
            Paragraph::new(self.slider_text()).style(Style::new().dark_gray()),
            chunks[2],
        );

        let toggle_state = if self.toggle { "[on] " } else { "[off]" };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(self.marker(FormRow::Toggle)),
                Span::styled("Toggle Switch  ", self.row_style(FormRow::Toggle)),
                Span::raw(toggle_state),
            ])),
            chunks[3],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(self.marker(FormRow::Picker)),
                Span::styled("Pick an Option  ", self.row_style(FormRow::Picker)),
                Span::raw(self.picker.label()),
            ])),
            chunks[4],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(self.marker(FormRow::Color)),
                Span::styled("Pick a Color  ", self.row_style(FormRow::Color)),
                Span::styled("██ ", Style::new().fg(self.color.color())),
                Span::raw(self.color.label()),
            ])),
            chunks[5],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(self.marker(FormRow::Submit)),
                Span::styled("Submit", self.row_style(FormRow::Submit)),
            ])),
            chunks[7],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(self.marker(FormRow::Reset)),
                Span::styled("Reset", self.row_style(FormRow::Reset)),
            ])),
            chunks[8],
        );

        if let Some(at) = self.submitted_at {
            if elapsed - at < FLASH_SECS {
                frame.render_widget(
                    Paragraph::new("Form submitted")
                        .style(Style::new().fg(Color::Green))
                        .alignment(Alignment::Left),
                    chunks[10],
                );
            }
        }
    }
}
