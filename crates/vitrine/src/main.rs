use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::ThreadRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::{Line, Span},
};
use vitrine_config::{Config, StartPage};
use vitrine_screens::{Page, Screens};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Page currently shown.
    page: Page,
    /// State of all four screens.
    screens: Screens,
    /// Loaded configuration.
    config: Config,
    /// Instant the app started; animations are functions of time since then.
    started: Instant,
    /// Random source handed to screens when they mount.
    rng: ThreadRng,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let page = match config.start_page {
            StartPage::Showcase => Page::Showcase,
            StartPage::Balls => Page::Balls,
            StartPage::Letters => Page::Letters,
            StartPage::Form => Page::Form,
        };
        Self {
            running: false,
            page,
            screens: Screens::new(),
            config,
            started: Instant::now(),
            rng: rand::thread_rng(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Active screen
            Constraint::Length(1), // Page dots
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let elapsed_ms = self.elapsed_ms();
        self.screens
            .render(frame, chunks[0], self.page, elapsed_ms, &mut self.rng);

        if self.config.show_page_dots {
            let dots: Vec<Span> = Page::ALL
                .iter()
                .map(|&page| {
                    if page == self.page {
                        "● ".white()
                    } else {
                        "○ ".dark_gray()
                    }
                })
                .collect();
            frame.render_widget(Line::from(dots).centered(), chunks[1]);
        }

        let mut help = vec![
            self.page.title().bold(),
            "  ".dark_gray(),
            "tab".bold().cyan(),
            " next page  ".dark_gray(),
            "shift-tab".bold().cyan(),
            " previous  ".dark_gray(),
        ];
        let hint = self.page.key_hint();
        if !hint.is_empty() {
            help.push(hint.dark_gray());
            help.push("  ".dark_gray());
        }
        help.push("q".bold().cyan());
        help.push(" quit".dark_gray());
        frame.render_widget(Line::from(help).centered(), chunks[2]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a tick timeout so animations advance between keys.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab) => self.switch_page(self.page.next()),
            (_, KeyCode::BackTab) => self.switch_page(self.page.prev()),
            (_, KeyCode::Char(digit @ '1'..='4')) => {
                self.switch_page(Page::ALL[digit as usize - '1' as usize]);
            }
            (_, code) => self.screens.on_key(self.page, code, self.elapsed_ms()),
        }
    }

    /// Switch pages, discarding the outgoing page's animation state so the
    /// next visit re-seeds on its first render.
    fn switch_page(&mut self, next: Page) {
        if next != self.page {
            self.screens.unmount(self.page);
            self.page = next;
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
