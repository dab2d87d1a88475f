use super::{
    carousel_modal::render_carousel_modal, footer::render_footer, gallery::render_gallery,
    header::render_header, lightbox_modal::render_lightbox_modal,
};
use crate::events::{EventHandler, InputEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    prelude::{Constraint, CrosstermBackend, Direction, Layout, Rect, Terminal},
    widgets::{Block, Borders},
};
use std::collections::HashMap;
use std::io::Stdout;
use std::time::Duration;
use tracing::{info, warn};
use vitrine_core::{
    carousel::Carousel,
    loader::{DecodedImage, ImageLoader, LoadOutcome},
    portfolio::Portfolio,
    settings::Settings,
    theme::{Element, Theme},
};

/// Ticks a slide spends travelling in from its entry edge.
const TRANSITION_TICKS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Gallery,
    Carousel,
    Lightbox,
}

/// Click/hover targets captured during the last draw. Recomputed every
/// frame, so they always match what is on screen.
#[derive(Debug, Default, Clone)]
pub struct HitZones {
    pub slide: Rect,
    pub left_arrow: Rect,
    pub right_arrow: Rect,
    pub dots: Vec<Rect>,
    pub lightbox_picture: Rect,
}

pub fn zone_contains(zone: Rect, column: u16, row: u16) -> bool {
    column >= zone.x
        && column < zone.x.saturating_add(zone.width)
        && row >= zone.y
        && row < zone.y.saturating_add(zone.height)
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    portfolio: Portfolio,
    selected: usize,
    /// `None` is the closed state: while no session exists, the carousel
    /// keybindings and pointer zones simply cannot fire.
    carousel: Option<Carousel>,
    loader: ImageLoader,
    cache: HashMap<String, DecodedImage>,
    events: EventHandler,
    hit: HitZones,
    transition: u8,
    tick: u64,
}

impl App {
    pub fn new(settings: Settings, portfolio: Portfolio) -> Self {
        let theme = Theme::new(settings.theme);
        let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));
        Self {
            should_quit: false,
            theme,
            settings,
            portfolio,
            selected: 0,
            carousel: None,
            loader: ImageLoader::new(),
            cache: HashMap::new(),
            events,
            hit: HitZones::default(),
            transition: 0,
            tick: 0,
        }
    }

    pub fn mode(&self) -> AppMode {
        match &self.carousel {
            None => AppMode::Gallery,
            Some(carousel) if carousel.lightbox().is_some() => AppMode::Lightbox,
            Some(_) => AppMode::Carousel,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            self.drain_loader();
            self.draw(terminal)?;
            match self.events.next_event()? {
                InputEvent::Key(key) => self.handle_key(key),
                InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
                InputEvent::Resize(..) | InputEvent::Tick => {}
            }
            self.tick = self.tick.wrapping_add(1);
            self.transition = self.transition.saturating_sub(1);
        }
        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mode = self.mode();
        terminal.draw(|frame| {
            let area = frame.size();
            let backdrop = Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background));
            frame.render_widget(backdrop, area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            let viewing = self.carousel.as_ref().map(|c| c.title());
            render_header(
                frame,
                chunks[0],
                &self.theme,
                mode,
                viewing,
                self.portfolio.projects.len(),
            );
            render_gallery(frame, chunks[1], &self.theme, &self.portfolio, self.selected);
            render_footer(frame, chunks[2], &self.theme, mode);

            if let Some(carousel) = self.carousel.as_ref() {
                let picture = carousel.current_image().and_then(|path| self.cache.get(path));
                render_carousel_modal(
                    frame,
                    area,
                    carousel,
                    picture,
                    &self.theme,
                    self.transition,
                    self.tick,
                    &mut self.hit,
                );
                if let Some(lightbox) = carousel.lightbox() {
                    let picture = self.cache.get(lightbox.image());
                    render_lightbox_modal(frame, area, lightbox, picture, &self.theme, &mut self.hit);
                }
            } else {
                self.hit = HitZones::default();
            }
        })?;
        Ok(())
    }

    fn drain_loader(&mut self) {
        while let Some(outcome) = self.loader.try_next() {
            self.apply_outcome(outcome);
        }
    }

    /// Apply one finished decode. The cache keeps every success, but the
    /// loading flag only reacts when the outcome is for the slide the open
    /// session is actually showing. Anything else is stale: a slide the
    /// user already left, or a request from a session that no longer
    /// exists. Indices alone cannot tell those apart across sessions, so
    /// the displayed path has to match too.
    fn apply_outcome(&mut self, outcome: LoadOutcome) {
        let decoded = match outcome.result {
            Ok(image) => {
                self.cache.insert(outcome.path.clone(), image);
                true
            }
            Err(e) => {
                warn!("image decode failed: {}", e);
                false
            }
        };
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        if carousel.current_image() != Some(outcome.path.as_str()) {
            return;
        }
        if decoded {
            carousel.image_loaded(outcome.index);
        } else {
            carousel.image_failed(outcome.index);
        }
    }

    /// Kick off a decode for the displayed slide, or resolve it straight
    /// from the cache when we have been here before.
    fn request_current(&mut self) {
        let Some(carousel) = self.carousel.as_ref() else {
            return;
        };
        let Some(path) = carousel.current_image().map(str::to_owned) else {
            return;
        };
        let index = carousel.current_index();
        if self.cache.contains_key(&path) {
            if let Some(carousel) = self.carousel.as_mut() {
                carousel.image_loaded(index);
            }
        } else {
            self.loader.request(index, &path);
        }
    }

    fn open_selected_project(&mut self) {
        let Some(project) = self.portfolio.projects.get(self.selected) else {
            return;
        };
        info!(title = %project.title, "opening project carousel");
        self.carousel = Some(Carousel::open(project.images.clone(), project.title.clone()));
        self.transition = 0;
        self.request_current();
    }

    fn close_carousel(&mut self) {
        if let Some(mut carousel) = self.carousel.take() {
            carousel.close(); // cascades into the lightbox
        }
        self.transition = 0;
    }

    fn begin_transition(&mut self) {
        self.transition = TRANSITION_TICKS;
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.mode() {
            AppMode::Gallery => self.gallery_key(key),
            AppMode::Carousel | AppMode::Lightbox => self.carousel_key(key),
        }
    }

    fn gallery_key(&mut self, key: KeyEvent) {
        let count = self.portfolio.projects.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => {
                self.theme.toggle();
                self.settings.theme = self.theme.variant();
                self.settings.save().unwrap_or_default();
            }
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Enter => self.open_selected_project(),
            _ => {}
        }
    }

    fn carousel_key(&mut self, key: KeyEvent) {
        // Escape collapses the whole session in one action, lightbox included.
        if key.code == KeyCode::Esc {
            self.close_carousel();
            return;
        }
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let mut moved = false;
        match key.code {
            KeyCode::Left => {
                carousel.previous();
                moved = true;
            }
            KeyCode::Right => {
                carousel.next();
                moved = true;
            }
            KeyCode::Char(c @ '1'..='9') if carousel.lightbox().is_none() => {
                moved = carousel.jump_to(c as usize - '1' as usize);
            }
            KeyCode::Enter if carousel.lightbox().is_none() => carousel.open_lightbox(),
            KeyCode::Char('z') => {
                if let Some(lightbox) = carousel.lightbox_mut() {
                    lightbox.toggle_zoom();
                }
            }
            KeyCode::Char('x') => carousel.close_lightbox(),
            _ => {}
        }
        if moved {
            self.begin_transition();
            self.request_current();
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Pointer input with no open session is a no-op, not an error.
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Moved => {
                let zone = self.hit.lightbox_picture;
                if let Some(lightbox) = carousel.lightbox_mut() {
                    if zone_contains(zone, mouse.column, mouse.row) {
                        lightbox.pointer_move(
                            (mouse.column - zone.x) as f32 + 0.5,
                            (mouse.row - zone.y) as f32 + 0.5,
                            zone.width as f32,
                            zone.height as f32,
                        );
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let (column, row) = (mouse.column, mouse.row);
                if carousel.lightbox().is_some() {
                    if zone_contains(self.hit.lightbox_picture, column, row) {
                        if let Some(lightbox) = carousel.lightbox_mut() {
                            lightbox.toggle_zoom();
                        }
                    }
                    return; // the lightbox swallows every other click
                }
                if zone_contains(self.hit.left_arrow, column, row) {
                    carousel.previous();
                    self.begin_transition();
                    self.request_current();
                } else if zone_contains(self.hit.right_arrow, column, row) {
                    carousel.next();
                    self.begin_transition();
                    self.request_current();
                } else if let Some(i) = self
                    .hit
                    .dots
                    .iter()
                    .position(|zone| zone_contains(*zone, column, row))
                {
                    if carousel.jump_to(i) {
                        self.begin_transition();
                        self.request_current();
                    }
                } else if zone_contains(self.hit.slide, column, row) {
                    carousel.open_lightbox();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_hit_testing_is_edge_exclusive() {
        let zone = Rect::new(10, 5, 4, 2);
        assert!(zone_contains(zone, 10, 5));
        assert!(zone_contains(zone, 13, 6));
        assert!(!zone_contains(zone, 14, 5));
        assert!(!zone_contains(zone, 10, 7));
        assert!(!zone_contains(Rect::default(), 0, 0));
    }

    #[test]
    fn mode_tracks_session_nesting() {
        let mut app = App::new(Settings::default(), Portfolio::demo());
        assert_eq!(app.mode(), AppMode::Gallery);

        app.carousel = Some(Carousel::open(vec!["a.png".to_string()], "Demo"));
        assert_eq!(app.mode(), AppMode::Carousel);

        app.carousel.as_mut().unwrap().open_lightbox();
        assert_eq!(app.mode(), AppMode::Lightbox);

        app.close_carousel();
        assert_eq!(app.mode(), AppMode::Gallery);
    }

    #[test]
    fn escape_closes_carousel_and_lightbox_together() {
        let mut app = App::new(Settings::default(), Portfolio::demo());
        app.carousel = Some(Carousel::open(vec!["a.png".to_string()], "Demo"));
        app.carousel.as_mut().unwrap().open_lightbox();

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.mode(), AppMode::Gallery);
        assert!(app.carousel.is_none());
    }

    #[test]
    fn outcome_from_a_closed_session_is_ignored() {
        use vitrine_core::carousel::LoadState;

        let mut app = App::new(Settings::default(), Portfolio::demo());

        // A session starts a decode, then closes before it lands. The
        // session that replaces it shows a different image at the same index.
        app.carousel = Some(Carousel::open(vec!["first/cover.png".to_string()], "First"));
        app.close_carousel();
        app.carousel = Some(Carousel::open(vec!["second/cover.png".to_string()], "Second"));

        app.apply_outcome(LoadOutcome {
            index: 0,
            path: "first/cover.png".to_string(),
            result: Ok(DecodedImage::new(1, 1, vec![[0, 0, 0]])),
        });
        let state = app.carousel.as_ref().unwrap().load_state();
        assert_eq!(state, LoadState::Loading, "a dead session's decode flipped the new slide");

        // The new session's own decode still resolves normally.
        app.apply_outcome(LoadOutcome {
            index: 0,
            path: "second/cover.png".to_string(),
            result: Ok(DecodedImage::new(1, 1, vec![[0, 0, 0]])),
        });
        assert_eq!(app.carousel.as_ref().unwrap().load_state(), LoadState::Ready);
    }

    #[test]
    fn keyboard_is_inert_without_a_session() {
        let mut app = App::new(Settings::default(), Portfolio::demo());
        app.carousel_key(KeyEvent::from(KeyCode::Right));
        app.carousel_key(KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.mode(), AppMode::Gallery);
    }
}
