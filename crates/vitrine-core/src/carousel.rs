//! Carousel session state machine.
//!
//! One `Carousel` value is one open-to-close viewing session of a project's
//! image sequence. The host keeps it in an `Option`: `None` is the closed
//! state, so dropping the value tears down the whole session including any
//! nested lightbox. The slide list is fixed for the lifetime of a session.

use crate::lightbox::Lightbox;
use tracing::{debug, warn};

/// Travel direction of the most recent navigation step.
///
/// The renderer derives the slide-in edge from this tag alone, never from
/// comparing indices, so a wrap-around `next()` from the last slide still
/// animates forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

/// Loading state of the currently displayed slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// A decode has been requested and not yet completed.
    Loading,
    /// The image for the current index is ready to draw.
    Ready,
    /// The decode failed; show a notice instead of spinning forever.
    Failed,
}

/// An open carousel session: slide list, cursor, and the nested lightbox.
#[derive(Debug)]
pub struct Carousel {
    images: Vec<String>,
    title: String,
    current: usize,
    direction: Direction,
    load: LoadState,
    lightbox: Option<Lightbox>,
}

impl Carousel {
    /// Start a session over `images`. An empty list is accepted and yields
    /// an inert session: nothing to display, navigation is a no-op.
    pub fn open(images: Vec<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        debug!(slides = images.len(), %title, "carousel opened");
        Self {
            images,
            title,
            current: 0,
            direction: Direction::Still,
            load: LoadState::Loading,
            lightbox: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Image reference of the displayed slide, `None` for an empty session.
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.direction = Direction::Forward;
        self.current = (self.current + 1) % self.images.len();
        self.load = LoadState::Loading;
    }

    /// Step back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.direction = Direction::Backward;
        self.current = (self.current + self.images.len() - 1) % self.images.len();
        self.load = LoadState::Loading;
    }

    /// Jump straight to `index` (the dot-indicator path). Out-of-range
    /// indices are rejected without any state change; returns whether the
    /// jump happened.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            warn!(index, len = self.images.len(), "jump to out-of-range slide rejected");
            return false;
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        self.load = LoadState::Loading;
        true
    }

    /// Loader callback: the image for `index` finished decoding. Stale
    /// completions (the cursor moved on before the decode finished) are
    /// ignored.
    pub fn image_loaded(&mut self, index: usize) {
        if index == self.current {
            self.load = LoadState::Ready;
        } else {
            debug!(index, current = self.current, "stale load completion ignored");
        }
    }

    /// Loader callback: the decode for `index` failed. Same staleness rule
    /// as [`Carousel::image_loaded`].
    pub fn image_failed(&mut self, index: usize) {
        if index == self.current {
            self.load = LoadState::Failed;
        }
    }

    /// Open the lightbox over the displayed slide. No-op for an empty
    /// session; reopening replaces the previous lightbox.
    pub fn open_lightbox(&mut self) {
        if let Some(image) = self.current_image() {
            self.lightbox = Some(Lightbox::open(image.to_owned()));
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    pub fn lightbox_mut(&mut self) -> Option<&mut Lightbox> {
        self.lightbox.as_mut()
    }

    /// Cascade close: tears down the nested lightbox. The host drops the
    /// session itself right after.
    pub fn close(&mut self) {
        self.lightbox = None;
        debug!(title = %self.title, "carousel closed");
    }
}
