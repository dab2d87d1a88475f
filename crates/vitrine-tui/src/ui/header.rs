use crate::ui::app::AppMode;
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::Span,
    widgets::{block::Title, Block, Borders, Paragraph},
};
use vitrine_core::theme::Theme;

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    mode: AppMode,
    viewing: Option<&str>,
    project_count: usize,
) {
    let title = Title::from(" Vitrine v0.1.0 ").alignment(Alignment::Left);

    let status_text = match (mode, viewing) {
        (AppMode::Carousel, Some(project)) => format!("Viewing :: {}", project),
        (AppMode::Lightbox, Some(project)) => format!("Lightbox :: {}", project),
        _ => format!("Portfolio :: {} projects", project_count),
    };
    let status_span = Span::styled(status_text, theme.accent_style());

    let header_paragraph = Paragraph::new(status_span)
        .style(theme.text_style())
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.text_style()),
        );

    frame.render_widget(header_paragraph, area);
}
