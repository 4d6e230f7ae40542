//! List and detail screen rendering.

use super::{detail::fragment_lines, ThemeColors};
use crate::app::App;
use crate::view::{DetailView, ListEntry, RenderPlan, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Label of the header back button.
pub(super) const BACK_LABEL: &str = " ‹ Back ";

/// Split the frame into header, content, status bar and key map bar.
pub(super) fn layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Draw the browser UI.
pub(super) fn draw_browser(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let plan = app.plan();
    let [header, content, status, keymap] = layout(f.area());

    draw_header(f, &plan, header, &colors);

    match &plan.screen {
        Screen::List(entries) => draw_list(f, app, entries, &plan.header, content, &colors),
        Screen::Detail(detail) => {
            let area = slide_area(content, app.slide_progress());
            draw_detail(f, app, detail, area, &colors);
        },
    }

    draw_status(f, app, status, &colors);
    draw_keymap(f, plan.back_visible, keymap, &colors);
}

fn draw_header(f: &mut Frame<'_>, plan: &RenderPlan, area: Rect, colors: &ThemeColors) {
    let mut spans = Vec::new();
    if plan.back_visible {
        spans.push(Span::styled(
            BACK_LABEL,
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        format!(" {} ", plan.header),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn draw_list(
    f: &mut Frame<'_>,
    app: &mut App,
    entries: &[ListEntry],
    title: &str,
    area: Rect,
    colors: &ThemeColors,
) {
    if entries.is_empty() {
        draw_empty(f, app, title, area, colors);
        return;
    }

    // Adjust scroll to keep cursor visible (subtract 2 for borders)
    let viewport_height = area.height.saturating_sub(2) as usize;
    app.list.adjust_scroll(viewport_height);
    let cursor = app.list.cursor();

    let items: Vec<ListItem<'_>> = entries
        .iter()
        .enumerate()
        .skip(app.list.scroll_offset())
        .take(viewport_height)
        .map(|(idx, entry)| {
            let style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(format!(" {}", entry.label))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(list, area);
}

fn draw_empty(f: &mut Frame<'_>, app: &App, title: &str, area: Rect, colors: &ThemeColors) {
    let lines = match &app.error_message {
        Some(message) => vec![
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Source: {}", app.source.display())),
        ],
        None => vec![
            Line::from("No recipes found"),
            Line::from(""),
            Line::from("Recipes start with a line like: === Pancakes"),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn draw_detail(
    f: &mut Frame<'_>,
    app: &App,
    detail: &DetailView,
    area: Rect,
    colors: &ThemeColors,
) {
    if area.width == 0 {
        return;
    }

    let lines = fragment_lines(&detail.fragments, colors);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", detail.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: false })
        .scroll((app.list.detail_scroll, 0));

    f.render_widget(paragraph, area);
}

/// Shift the detail pane right while it slides out.
fn slide_area(area: Rect, progress: Option<f64>) -> Rect {
    let Some(progress) = progress else {
        return area;
    };

    let offset = (f64::from(area.width) * progress.clamp(0.0, 1.0)).round() as u16;
    Rect {
        x: area.x.saturating_add(offset),
        width: area.width.saturating_sub(offset),
        ..area
    }
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let fg = if app.error_message.is_some() {
        colors.error
    } else {
        colors.status_fg
    };

    let paragraph =
        Paragraph::new(app.status.as_str()).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, in_detail: bool, area: Rect, colors: &ThemeColors) {
    let keymap_text = if in_detail {
        "h/Esc:back | L:forward | jk:scroll | y:copy | T:theme | q:quit | swipe right:back"
    } else {
        "jk/↑↓:nav | Enter/l:open | L:forward | g/G:first/last | T:theme | q:quit"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
