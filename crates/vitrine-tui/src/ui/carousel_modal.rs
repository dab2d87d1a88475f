use super::app::HitZones;
use super::picture::render_picture;
use ratatui::{
    prelude::{Alignment, Constraint, Direction as LayoutDirection, Frame, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};
use vitrine_core::{
    carousel::{Carousel, Direction, LoadState},
    loader::DecodedImage,
    theme::{Element, Theme},
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
/// Columns the incoming slide is offset per remaining transition tick.
const TRANSITION_STEP: u16 = 6;

#[allow(clippy::too_many_arguments)]
pub fn render_carousel_modal(
    frame: &mut Frame,
    area: Rect,
    carousel: &Carousel,
    picture: Option<&DecodedImage>,
    theme: &Theme,
    transition: u8,
    tick: u64,
    hit: &mut HitZones,
) {
    // Modal size: 80% of the terminal, clamped to sane bounds.
    let modal_width = (((area.width as f32) * 0.8).round() as u16)
        .clamp(40.min(area.width), 120)
        .min(area.width);
    let modal_height = (((area.height as f32) * 0.8).round() as u16)
        .clamp(10.min(area.height), 40)
        .min(area.height);
    let modal_area = Rect::new(
        area.x + (area.width.saturating_sub(modal_width)) / 2,
        area.y + (area.height.saturating_sub(modal_height)) / 2,
        modal_width,
        modal_height,
    );
    frame.render_widget(Clear, modal_area);

    let block = Block::new()
        .title(format!(" {} ", carousel.title()))
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Text));
    let inner_area = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Min(0),    // Slide
            Constraint::Length(1), // Dot indicators
            Constraint::Length(1), // Key hints
        ])
        .split(inner_area);

    let slide_area = chunks[0];
    hit.slide = slide_area;
    hit.left_arrow = Rect::default();
    hit.right_arrow = Rect::default();
    hit.dots.clear();

    if carousel.is_empty() {
        let empty = Paragraph::new("This project has no images.")
            .alignment(Alignment::Center)
            .style(theme.inactive_style());
        frame.render_widget(empty, slide_area);
    } else {
        render_slide(frame, slide_area, carousel, picture, theme, transition, tick);
        render_arrows(frame, slide_area, theme, hit);
        render_dots(frame, chunks[1], carousel, theme, hit);
    }

    let hints = Paragraph::new("[←→] Navigate | [1-9] Jump | [ENTER] Lightbox | [ESC] Close")
        .alignment(Alignment::Center)
        .style(theme.inactive_style());
    frame.render_widget(hints, chunks[2]);
}

fn render_slide(
    frame: &mut Frame,
    area: Rect,
    carousel: &Carousel,
    picture: Option<&DecodedImage>,
    theme: &Theme,
    transition: u8,
    tick: u64,
) {
    match carousel.load_state() {
        LoadState::Loading => {
            let spinner = SPINNER_FRAMES[(tick / 2) as usize % SPINNER_FRAMES.len()];
            let loading = Paragraph::new(format!(
                "{} Loading image {} of {}",
                spinner,
                carousel.current_index() + 1,
                carousel.len()
            ))
            .alignment(Alignment::Center)
            .style(theme.inactive_style());
            frame.render_widget(loading, centered_line(area));
        }
        LoadState::Failed => {
            let failed = Paragraph::new(format!(
                "Could not load {}",
                carousel.current_image().unwrap_or_default()
            ))
            .alignment(Alignment::Center)
            .style(theme.warning_style());
            frame.render_widget(failed, centered_line(area));
        }
        LoadState::Ready => {
            if let Some(picture) = picture {
                let target = offset_for_transition(area, carousel.direction(), transition);
                render_picture(frame, target, picture, None);
            }
        }
    }
}

fn render_arrows(frame: &mut Frame, slide_area: Rect, theme: &Theme, hit: &mut HitZones) {
    if slide_area.width < 6 || slide_area.height < 3 {
        return;
    }
    let mid_y = slide_area.y + slide_area.height / 2;

    let left = Rect::new(slide_area.x + 1, mid_y, 1, 1);
    frame.render_widget(Paragraph::new("❮").style(theme.accent_style()), left);
    hit.left_arrow = Rect::new(slide_area.x, mid_y.saturating_sub(1), 3, 3);

    let right = Rect::new(slide_area.x + slide_area.width - 2, mid_y, 1, 1);
    frame.render_widget(Paragraph::new("❯").style(theme.accent_style()), right);
    hit.right_arrow = Rect::new(slide_area.x + slide_area.width - 3, mid_y.saturating_sub(1), 3, 3);
}

/// One clickable dot per slide, the active one widened like the original
/// indicator bar.
fn render_dots(frame: &mut Frame, area: Rect, carousel: &Carousel, theme: &Theme, hit: &mut HitZones) {
    let count = carousel.len() as u16;
    if count == 0 || area.width < 2 {
        return;
    }
    let total = count * 2 - 1;
    let start_x = if total <= area.width {
        area.x + (area.width - total) / 2
    } else {
        area.x
    };

    for i in 0..count as usize {
        let x = start_x + (i as u16) * 2;
        if x >= area.x + area.width {
            break;
        }
        let dot_area = Rect::new(x, area.y, 1, 1);
        let (glyph, style) = if i == carousel.current_index() {
            ("●", theme.accent_style())
        } else {
            ("○", theme.inactive_style())
        };
        frame.render_widget(Paragraph::new(Span::styled(glyph, style)), dot_area);
        hit.dots.push(dot_area);
    }
}

/// Horizontal slide-in driven purely by the stored travel direction. A
/// forward step enters from the right edge and settles left over the
/// remaining ticks; a backward step mirrors that.
fn offset_for_transition(area: Rect, direction: Direction, ticks: u8) -> Rect {
    if ticks == 0 {
        return area;
    }
    let shift = ((ticks as u16) * TRANSITION_STEP).min(area.width.saturating_sub(1));
    match direction {
        Direction::Forward => Rect::new(area.x + shift, area.y, area.width - shift, area.height),
        Direction::Backward => Rect::new(area.x, area.y, area.width - shift, area.height),
        Direction::Still => area,
    }
}

fn centered_line(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_enters_from_the_trailing_edge_going_forward() {
        let area = Rect::new(10, 0, 60, 20);
        let shifted = offset_for_transition(area, Direction::Forward, 2);
        assert_eq!(shifted.x, 10 + 2 * TRANSITION_STEP);
        assert_eq!(shifted.width, 60 - 2 * TRANSITION_STEP);
    }

    #[test]
    fn transition_enters_from_the_leading_edge_going_backward() {
        let area = Rect::new(10, 0, 60, 20);
        let shifted = offset_for_transition(area, Direction::Backward, 2);
        assert_eq!(shifted.x, 10);
        assert_eq!(shifted.width, 60 - 2 * TRANSITION_STEP);
    }

    #[test]
    fn settled_slide_fills_the_area() {
        let area = Rect::new(10, 0, 60, 20);
        assert_eq!(offset_for_transition(area, Direction::Forward, 0), area);
        assert_eq!(offset_for_transition(area, Direction::Still, 3), area);
    }

    #[test]
    fn transition_never_collapses_a_narrow_area() {
        let area = Rect::new(0, 0, 4, 20);
        let shifted = offset_for_transition(area, Direction::Forward, 5);
        assert!(shifted.width >= 1);
    }
}
