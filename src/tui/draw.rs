//! All drawing / rendering functions.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};

use crate::notify::Severity;

use super::app::{App, PendingAction, Tab};

pub fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let accent = accent_color(app);

    let outer = Block::default()
        .title(" aptsrc ")
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tab row
            Constraint::Min(5),    // active tab body
            Constraint::Length(1), // status line
            Constraint::Length(1), // controls bar
        ])
        .split(inner);

    draw_tabs(frame, app, chunks[0]);
    match app.active_tab {
        Tab::Download => draw_download_tab(frame, app, chunks[1]),
        Tab::Compile => draw_placeholder_tab(frame, chunks[1], "Compile tab content will go here."),
        Tab::Export => draw_placeholder_tab(frame, chunks[1], "Export tab content will go here."),
    }
    draw_status_line(frame, app, chunks[2]);
    draw_controls(frame, app, chunks[3]);
}

fn accent_color(app: &App) -> Color {
    if app.dark { Color::Cyan } else { Color::Blue }
}

fn draw_tabs(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(accent_color(app))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_download_tab(frame: &mut ratatui::Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Min(3),    // results list
        ])
        .split(area);

    // --- Search bar ---
    let input_style = if app.busy() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let search_bar = Paragraph::new(app.search_input.as_str())
        .block(
            Block::default()
                .title(" Search packages: ")
                .borders(Borders::ALL)
                .border_style(input_style),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(search_bar, chunks[0]);

    // --- Results list ---
    let items: Vec<ListItem> = if app.session.candidates.is_empty() {
        app.placeholder
            .iter()
            .map(|text| ListItem::new(*text).style(Style::default().fg(Color::DarkGray)))
            .collect()
    } else {
        app.session
            .candidates
            .iter()
            .map(|candidate| {
                let selected = app.session.selection.contains(&candidate.name);
                let marker = if selected { "[x] " } else { "[ ] " };
                let style = if selected {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(candidate.name.clone(), style),
                ]))
            })
            .collect()
    };

    let title = format!(
        " Packages ({} found, {} selected) ",
        app.session.candidates.len(),
        app.session.selection.len()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent_color(app))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], &mut app.results_state);
}

fn draw_placeholder_tab(frame: &mut ratatui::Frame, area: Rect, text: &str) {
    let body = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

fn draw_status_line(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    match app.pending {
        Some(PendingAction::Search) => spans.push(Span::styled(
            " Searching...",
            Style::default().fg(Color::Yellow),
        )),
        Some(PendingAction::Download) => spans.push(Span::styled(
            " Downloading...",
            Style::default().fg(Color::Yellow),
        )),
        None => {}
    }

    if let Some(toast) = app.active_toast() {
        if !spans.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            toast.notification.message.as_str(),
            Style::default().fg(severity_color(toast.notification.severity)),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Information => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
        Severity::Success => Color::Green,
    }
}

fn draw_controls(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let controls = match app.active_tab {
        Tab::Download => {
            "enter:search  up/down:move  space:toggle  ctrl-d:download  tab:next tab  ctrl-t:theme  esc:quit"
        }
        Tab::Compile | Tab::Export => "tab:next tab  ctrl-t:theme  q:quit",
    };
    let bar = Paragraph::new(controls)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(bar, area);
}
