//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::game::RootWordSource;
use crate::output::formatters::{length_badge, score_line};
use crate::rules::DictionaryOracle;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: RootWordSource, D: DictionaryOracle>(f: &mut Frame, app: &App<S, D>) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Length(3), // Score
            Constraint::Min(6),    // Used words + messages
            Constraint::Length(1), // Help
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_score(f, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);

    render_used_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_help(f, chunks[4]);

    if app.alert.is_some() {
        render_alert(f, app, area);
    }
}

fn render_header<S: RootWordSource, D: DictionaryOracle>(
    f: &mut Frame,
    app: &App<S, D>,
    area: Rect,
) {
    let root = app.session.root_word().unwrap_or("—");
    let header = Paragraph::new(Line::from(vec![Span::styled(
        root.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Word Scramble ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_input<S: RootWordSource, D: DictionaryOracle>(
    f: &mut Frame,
    app: &App<S, D>,
    area: Rect,
) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_score<S: RootWordSource, D: DictionaryOracle>(
    f: &mut Frame,
    app: &App<S, D>,
    area: Rect,
) {
    let score = Paragraph::new(score_line(app.session.score()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, area);
}

fn render_used_words<S: RootWordSource, D: DictionaryOracle>(
    f: &mut Frame,
    app: &App<S, D>,
    area: Rect,
) {
    let items: Vec<ListItem> = app
        .session
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", length_badge(word)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let title = format!(" Your words ({}) ", app.session.used_words().len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages<S: RootWordSource, D: DictionaryOracle>(
    f: &mut Frame,
    app: &App<S, D>,
    area: Rect,
) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl+R: Restart | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert<S: RootWordSource, D: DictionaryOracle>(
    f: &mut Frame,
    app: &App<S, D>,
    area: Rect,
) {
    let Some(alert) = &app.alert else {
        return;
    };

    let popup = centered_rect(50, 7, area);
    let content = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
