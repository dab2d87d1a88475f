//! Lightbox overlay state machine.
//!
//! The lightbox shows a single image from the open carousel, optionally
//! magnified around a pointer-tracked anchor. It is only constructible
//! through [`Carousel::open_lightbox`](crate::carousel::Carousel::open_lightbox),
//! which is what keeps its lifetime nested inside the carousel session.

/// Magnification factor applied while zoomed.
pub const ZOOM_SCALE: f32 = 2.0;

/// Anchor point of the magnification, in percent of the rendered image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOrigin {
    pub x: f32,
    pub y: f32,
}

impl Default for ZoomOrigin {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

/// The sub-rectangle of the source image visible while magnified, in
/// normalized `[0, 1]` coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindow {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// An open lightbox. Closed is represented by `None` in the parent
/// carousel, so the state machine here is only Open-Unzoomed ↔ Open-Zoomed.
#[derive(Debug)]
pub struct Lightbox {
    image: String,
    zoomed: bool,
    origin: ZoomOrigin,
}

impl Lightbox {
    pub(crate) fn open(image: String) -> Self {
        Self {
            image,
            zoomed: false,
            origin: ZoomOrigin::default(),
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn origin(&self) -> ZoomOrigin {
        self.origin
    }

    /// Flip between the unzoomed and zoomed views. The anchor is left
    /// untouched; it persists until the next pointer move.
    pub fn toggle_zoom(&mut self) {
        self.zoomed = !self.zoomed;
    }

    /// Track the pointer inside the rendered image bounds. Only meaningful
    /// while zoomed; the anchor becomes the pointer position in percent of
    /// the given extent, clamped to the image.
    pub fn pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if !self.zoomed || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.origin = ZoomOrigin {
            x: (x / width * 100.0).clamp(0.0, 100.0),
            y: (y / height * 100.0).clamp(0.0, 100.0),
        };
    }

    /// The source window the renderer samples when drawing at `scale`.
    ///
    /// Scaling around a transform origin keeps that point fixed, which is
    /// equivalent to sliding a `1/scale`-sized window across the image as
    /// the origin moves from 0% to 100%.
    pub fn zoom_window(&self, scale: f32) -> ZoomWindow {
        let frac = (1.0 / scale.max(1.0)).min(1.0);
        ZoomWindow {
            x: self.origin.x / 100.0 * (1.0 - frac),
            y: self.origin.y / 100.0 * (1.0 - frac),
            width: frac,
            height: frac,
        }
    }
}
