mod current;
mod helpers;
mod saved;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, Pane};

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_line = Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::Black).bg(theme.primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palettes",
            Style::default()
                .fg(theme.secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let header = Paragraph::new(Text::from(header_line))
        .alignment(Alignment::Left)
        .block(bordered_block(theme.secondary()));
    frame.render_widget(header, layout[0]);

    let current = Paragraph::new(build_pane_text(app, Pane::Current))
        .style(Style::default().fg(theme.text()))
        .alignment(Alignment::Left)
        .block(bordered_block(pane_border(app, Pane::Current)).title(" Current Palette "));
    frame.render_widget(current, layout[1]);

    let saved_list = Paragraph::new(build_pane_text(app, Pane::Saved))
        .style(Style::default().fg(theme.text()))
        .alignment(Alignment::Left)
        .block(bordered_block(pane_border(app, Pane::Saved)).title(" Saved Palettes "));
    frame.render_widget(saved_list, layout[2]);

    let footer = Paragraph::new(footer_line(app))
        .alignment(Alignment::Left)
        .block(bordered_block(theme.secondary()));
    frame.render_widget(footer, layout[3]);
}

fn build_pane_text(app: &App, pane: Pane) -> Text<'_> {
    match pane {
        Pane::Current => current::build_current_text(app),
        Pane::Saved => saved::build_saved_text(app),
    }
}

fn bordered_block(border: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border))
}

fn pane_border(app: &App, pane: Pane) -> Color {
    if app.pane == pane {
        app.theme.highlight()
    } else {
        app.theme.secondary()
    }
}

fn footer_line(app: &App) -> Line<'_> {
    let theme = app.theme;
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!(" {status}"),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(Span::styled(
        " g: Generate  s: Save  Enter: Copy/Load  d: Delete  Tab: Pane  t: Theme  q: Quit",
        Style::default().fg(theme.dim()),
    ))
}
