//! Half-block picture rendering.
//!
//! Terminal cells are roughly twice as tall as they are wide, so drawing
//! the upper-half block with a distinct foreground and background gives two
//! square-ish pixels per cell. Images are sampled nearest-neighbour from an
//! optional zoom window.

use ratatui::{
    prelude::{Frame, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vitrine_core::{lightbox::ZoomWindow, loader::DecodedImage};

const HALF_BLOCK: &str = "▀";

const FULL_WINDOW: ZoomWindow = ZoomWindow {
    x: 0.0,
    y: 0.0,
    width: 1.0,
    height: 1.0,
};

/// Draw `image` centered in `area`, preserving aspect ratio. When `window`
/// is given only that sub-rectangle of the source is shown (the zoom path).
pub fn render_picture(frame: &mut Frame, area: Rect, image: &DecodedImage, window: Option<ZoomWindow>) {
    if area.width == 0 || area.height == 0 || image.width == 0 || image.height == 0 {
        return;
    }
    let window = window.unwrap_or(FULL_WINDOW);
    let src_w = window.width * image.width as f32;
    let src_h = window.height * image.height as f32;
    if src_w < 1.0 || src_h < 1.0 {
        return;
    }

    let (cols, rows) = fit_box(area.width, area.height, src_w, src_h);
    if cols == 0 || rows == 0 {
        return;
    }
    let target = Rect::new(
        area.x + (area.width - cols) / 2,
        area.y + (area.height - rows) / 2,
        cols,
        rows,
    );

    let px_rows = rows as u32 * 2;
    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows as u32 {
        let mut spans = Vec::with_capacity(cols as usize);
        for col in 0..cols as u32 {
            let top = sample(image, &window, col, row * 2, cols as u32, px_rows);
            let bottom = sample(image, &window, col, row * 2 + 1, cols as u32, px_rows);
            spans.push(Span::styled(
                HALF_BLOCK,
                Style::default().fg(rgb(top)).bg(rgb(bottom)),
            ));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), target);
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

/// Nearest-neighbour sample of the windowed source at a target pixel.
fn sample(
    image: &DecodedImage,
    window: &ZoomWindow,
    col: u32,
    row: u32,
    cols: u32,
    rows: u32,
) -> [u8; 3] {
    let u = (col as f32 + 0.5) / cols as f32;
    let v = (row as f32 + 0.5) / rows as f32;
    let x = (window.x + u * window.width) * image.width as f32;
    let y = (window.y + v * window.height) * image.height as f32;
    image.pixel(x as u32, y as u32)
}

/// Largest cell box inside the area that preserves the source aspect
/// ratio, counting each cell as one column by two pixel rows.
pub fn fit_box(avail_cols: u16, avail_rows: u16, src_w: f32, src_h: f32) -> (u16, u16) {
    if avail_cols == 0 || avail_rows == 0 {
        return (0, 0);
    }
    let px_w = avail_cols as f32;
    let px_h = avail_rows as f32 * 2.0;
    let scale = (px_w / src_w).min(px_h / src_h);
    let cols = ((src_w * scale).round() as u16).clamp(1, avail_cols);
    let rows = ((src_h * scale / 2.0).round() as u16).clamp(1, avail_rows);
    (cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_box_fills_width_for_wide_sources() {
        // A 2:1 source in a roomy area: width-bound, half-block rows.
        let (cols, rows) = fit_box(80, 40, 200.0, 100.0);
        assert_eq!(cols, 80);
        assert_eq!(rows, 20);
    }

    #[test]
    fn fit_box_fills_height_for_tall_sources() {
        let (cols, rows) = fit_box(80, 10, 100.0, 400.0);
        assert_eq!(rows, 10);
        assert!(cols <= 10);
    }

    #[test]
    fn fit_box_never_exceeds_the_area() {
        for (c, r) in [(1u16, 1u16), (7, 3), (80, 24), (200, 60)] {
            let (cols, rows) = fit_box(c, r, 333.0, 111.0);
            assert!(cols <= c && rows <= r);
            assert!(cols >= 1 && rows >= 1);
        }
    }

    #[test]
    fn empty_area_yields_no_box() {
        assert_eq!(fit_box(0, 10, 10.0, 10.0), (0, 0));
        assert_eq!(fit_box(10, 0, 10.0, 10.0), (0, 0));
    }
}
