use super::app::HitZones;
use super::picture::render_picture;
use ratatui::{
    prelude::{Alignment, Constraint, Direction as LayoutDirection, Frame, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
};
use vitrine_core::{
    lightbox::{Lightbox, ZOOM_SCALE},
    loader::DecodedImage,
    theme::{Element, Theme},
};

/// The secondary overlay: one image, near fullscreen, optionally magnified
/// around the pointer-tracked anchor.
pub fn render_lightbox_modal(
    frame: &mut Frame,
    area: Rect,
    lightbox: &Lightbox,
    picture: Option<&DecodedImage>,
    theme: &Theme,
    hit: &mut HitZones,
) {
    if area.width < 4 || area.height < 4 {
        return;
    }
    let modal_area = Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2);
    frame.render_widget(Clear, modal_area);

    let file_name = lightbox.image().rsplit('/').next().unwrap_or_default();
    let title = if lightbox.is_zoomed() {
        format!(" {} [{}x] ", file_name, ZOOM_SCALE as u16)
    } else {
        format!(" {} ", file_name)
    };
    let block = Block::new()
        .title(title)
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Text));
    let inner_area = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner_area);

    let picture_area = chunks[0];
    hit.lightbox_picture = picture_area;

    match picture {
        Some(image) => {
            let window = lightbox
                .is_zoomed()
                .then(|| lightbox.zoom_window(ZOOM_SCALE));
            render_picture(frame, picture_area, image, window);
        }
        None => {
            let unavailable = Paragraph::new("Image unavailable")
                .alignment(Alignment::Center)
                .style(theme.warning_style());
            frame.render_widget(unavailable, picture_area);
        }
    }

    let hints = Paragraph::new("[Z]/[Click] Zoom | [Move] Anchor | [X] Close | [ESC] Close all")
        .alignment(Alignment::Center)
        .style(theme.inactive_style());
    frame.render_widget(hints, chunks[1]);
}
