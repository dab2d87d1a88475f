use ratatui::{
    prelude::{Alignment, Frame, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use vitrine_core::{
    portfolio::Portfolio,
    theme::{Element, Theme},
};

/// The host "page": a navigable list of project cards.
pub fn render_gallery(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    portfolio: &Portfolio,
    selected: usize,
) {
    let block = Block::new()
        .title(" Projects ")
        .borders(Borders::ALL)
        .style(theme.ratatui_style(Element::Text));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if portfolio.projects.is_empty() {
        let empty = Paragraph::new("No projects in the portfolio yet.")
            .alignment(Alignment::Center)
            .style(theme.inactive_style());
        frame.render_widget(empty, inner_area);
        return;
    }

    let items: Vec<ListItem> = portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let style = if i == selected {
                theme.highlight_style()
            } else {
                theme.text_style()
            };

            let title_line = Line::from(vec![
                Span::styled(project.title.clone(), style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  ({} images)", project.images.len()),
                    theme.inactive_style(),
                ),
            ]);
            let tags_line = Line::from(Span::styled(project.tags.join(" · "), theme.accent_style()));
            let description_line = Line::from(Span::styled(project.description.clone(), style));

            ListItem::new(vec![title_line, tags_line, description_line, Line::from("")])
        })
        .collect();

    let list = List::new(items).style(theme.ratatui_style(Element::Text));
    frame.render_widget(list, inner_area);
}
