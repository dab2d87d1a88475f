use crate::ui::app::AppMode;
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use vitrine_core::theme::{Element, Theme};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, mode: AppMode) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(theme.border_style());

    let inner_area = footer_block.inner(area);

    let keys: &[(&str, &str)] = match mode {
        AppMode::Gallery => &[
            ("[↑↓]", " Select"),
            ("[ENTER]", " Open"),
            ("[T]", "heme"),
            ("[Q]", "uit"),
        ],
        AppMode::Carousel => &[
            ("[←→]", " Navigate"),
            ("[1-9]", " Jump"),
            ("[ENTER]", " Lightbox"),
            ("[ESC]", " Close"),
        ],
        AppMode::Lightbox => &[
            ("[Z]", "oom"),
            ("[X]", " Close lightbox"),
            ("[ESC]", " Close all"),
        ],
    };

    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, label)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::raw(*key));
        spans.push(Span::styled(*label, theme.ratatui_style(Element::Inactive)));
    }
    let content = Line::from(spans).alignment(Alignment::Center);

    let footer_paragraph = Paragraph::new(content).style(theme.text_style());

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}
