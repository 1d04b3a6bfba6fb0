//! The UI renders the application state into something visible and scrollable.
//!
//! The screen is split into the fixed header, a body with the sidebar on the left and the page
//! on the right, and a help bar. The header shows the compact or expanded chrome, the sidebar
//! highlights the entries the scroll spy marked active, and the page shows headings with their
//! hover link icons.

use crate::app_state::{AppState, Focus};
use crate::document::{Block as PageBlock, Inline};
use crate::header::Fade;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Rows not available to page content: header, help bar and the page border.
pub const CHROME_ROWS: u16 = 8;

/// Renders the whole screen and records the page pane area for pointer hit-testing.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Sidebar and page
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    draw_sidebar(f, app, body[0]);
    draw_page(f, app, body[1]);
    draw_help(f, app, chunks[2]);
}

fn shown(fade: Option<&Fade>) -> bool {
    fade.is_some_and(|fade| fade.visible)
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let chrome = &app.chrome;
    let mut spans = Vec::new();

    if shown(chrome.logo.as_ref()) {
        spans.push(Span::styled(
            app.logo.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    }
    if shown(chrome.description.as_ref()) {
        spans.push(Span::styled(
            app.description.clone(),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::raw("  "));
    }

    let (open, close) = if chrome.top_rounded {
        ("╭ ", " ╮")
    } else {
        ("[ ", " ]")
    };
    spans.push(Span::styled(
        format!("{open}{}{close}", app.document.title),
        Style::default().add_modifier(Modifier::REVERSED),
    ));

    let border_style = if chrome.with_shadow {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(if chrome.with_shadow {
            Borders::BOTTOM
        } else {
            Borders::NONE
        })
        .border_style(border_style);

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_sidebar(f: &mut Frame, app: &AppState, area: Rect) {
    let top_level: Vec<usize> = app.sidebar.entries.iter().map(|e| e.node).collect();

    let items: Vec<ListItem> = app
        .sidebar
        .links()
        .enumerate()
        .map(|(i, entry)| {
            let nested = !top_level.contains(&entry.node);
            let marker = if nested {
                "    "
            } else if app.folded.contains(&entry.node) {
                "▸ "
            } else {
                "▾ "
            };

            let mut style = if entry.active {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if i == app.selected && app.focus == Focus::Sidebar {
                style = style.add_modifier(Modifier::REVERSED);
            }

            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(entry.label.clone()),
            ]))
            .style(style)
        })
        .collect();

    let title = format!("Contents ({})", app.sidebar.entries.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn heading_line(content: &[Inline], level: u8, hovered: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{} ", "#".repeat(usize::from(level))),
        Style::default().fg(Color::DarkGray),
    )];
    for inline in content {
        match inline {
            Inline::Text(text) => spans.push(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Inline::Anchor { .. } => {}
            Inline::LinkIcon { href } => {
                spans.push(Span::styled(
                    format!(" 🔗 {href}"),
                    Style::default().fg(Color::Blue),
                ));
            }
        }
    }
    if hovered {
        Line::from(spans).style(Style::default().add_modifier(Modifier::UNDERLINED))
    } else {
        Line::from(spans)
    }
}

fn page_lines(app: &AppState) -> Vec<Line<'static>> {
    let layout = app.layout();
    let mut lines = Vec::with_capacity(layout.total_rows());

    for (node, block) in app.document.blocks.iter().enumerate() {
        if layout.span(node).is_none() {
            continue;
        }
        match block {
            PageBlock::Heading { level, content } => {
                lines.push(heading_line(content, *level, app.hovered == Some(node)));
            }
            PageBlock::Text { lines: text } => {
                lines.extend(text.iter().map(|line| Line::raw(line.clone())));
            }
            PageBlock::Rule => lines.push(Line::styled(
                "─".repeat(40),
                Style::default().fg(Color::DarkGray),
            )),
        }
        lines.push(Line::raw(""));
    }
    lines
}

fn draw_page(f: &mut Frame, app: &mut AppState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(if app.focus == Focus::Page {
        "Page *"
    } else {
        "Page"
    });
    let inner = block.inner(area);
    app.page_area = Some(inner);

    let scroll_row = u16::try_from(app.scroll_row()).unwrap_or(u16::MAX);
    let page = Paragraph::new(page_lines(app))
        .block(block)
        .scroll((scroll_row, 0));
    f.render_widget(page, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.focus == Focus::Sidebar {
        "↑/↓: Select | Enter: Go to | Space: Fold | Tab: Page | q: Quit".to_string()
    } else {
        "↑/↓: Scroll | PgUp/PgDn: Page | Home/End: Top/Bottom | Tab: Contents | q: Quit"
            .to_string()
    };

    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}
