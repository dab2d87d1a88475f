//! Off-thread image decoding.
//!
//! The UI never decodes on the render thread: `request` spawns a blocking
//! tokio task that opens the file, downscales it to a terminal-friendly
//! size, and delivers the outcome on a channel the app drains each tick.
//! Completions carry the slide index they were requested for, so the
//! carousel can discard outcomes that arrive after the cursor moved on.

use image::GenericImageView;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Decoded images are capped at this bounding box. Terminal cells are
/// coarse; decoding more pixels than this only wastes memory.
pub const MAX_PICTURE_WIDTH: u32 = 480;
pub const MAX_PICTURE_HEIGHT: u32 = 320;

#[derive(Debug, Error)]
#[error("failed to decode image {path}")]
pub struct LoadError {
    pub path: String,
    #[source]
    pub source: image::ImageError,
}

/// An RGB image downscaled and ready to draw.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Pixel at `(x, y)`, clamped to the image bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        self.pixels[(y * self.width + x) as usize]
    }
}

/// One finished decode, successful or not.
#[derive(Debug)]
pub struct LoadOutcome {
    pub index: usize,
    pub path: String,
    pub result: Result<DecodedImage, LoadError>,
}

/// Handle for issuing decode requests and collecting their outcomes.
pub struct ImageLoader {
    tx: UnboundedSender<LoadOutcome>,
    rx: UnboundedReceiver<LoadOutcome>,
}

impl ImageLoader {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Begin decoding `path` for slide `index`. Never blocks; the outcome
    /// arrives later through [`ImageLoader::try_next`].
    pub fn request(&self, index: usize, path: &str) {
        let tx = self.tx.clone();
        let path = path.to_owned();
        tokio::task::spawn_blocking(move || {
            debug!(index, %path, "decoding image");
            let result = decode(&path);
            // The receiver half lives as long as the app; a send failure
            // only happens during shutdown.
            let _ = tx.send(LoadOutcome {
                index,
                path,
                result,
            });
        });
    }

    /// Next finished decode, if any. Non-blocking.
    pub fn try_next(&mut self) -> Option<LoadOutcome> {
        self.rx.try_recv().ok()
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(path: &str) -> Result<DecodedImage, LoadError> {
    let img = image::open(path).map_err(|source| LoadError {
        path: path.to_owned(),
        source,
    })?;
    let img = img.thumbnail(MAX_PICTURE_WIDTH, MAX_PICTURE_HEIGHT);
    let (width, height) = img.dimensions();
    let rgb = img.to_rgb8();
    let pixels = rgb.pixels().map(|p| p.0).collect();
    Ok(DecodedImage::new(width, height, pixels))
}
