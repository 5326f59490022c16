//! TUI rendering with ratatui
//!
//! Widgets for the word game interface.

use super::app::{App, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::formatters::format_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Letters and score
            Constraint::Percentage(60), // Found words and messages
        ])
        .split(chunks[1]);

    render_letters_panel(f, app, main_chunks[0]);
    render_progress_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_letters_panel<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let round = app.session.round();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_letters(round.shuffled_letters()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                round.score().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
    ];

    if round.key_word_found() {
        content.push(Line::from(""));
        content.push(
            Line::from(Span::styled(
                "★ key word found ★",
                Style::default().fg(Color::Green),
            ))
            .alignment(Alignment::Center),
        );
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_progress_panel<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_found_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_found_words<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let round = app.session.round();
    let root = round.root().text();

    let items: Vec<ListItem> = round
        .used_words()
        .iter()
        .map(|word| {
            // The key word stands out from ordinary finds
            let style = if word == root {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2} ", word.len()), Style::default().fg(Color::DarkGray)),
                Span::styled(word.clone(), style),
            ]))
        })
        .collect();

    let title = format!(" Found ({}) ", round.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_messages<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
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

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let rounds_text = format!("Round: {}", app.stats.rounds_played);
    let rounds = Paragraph::new(rounds_text).alignment(Alignment::Center);
    f.render_widget(rounds, chunks[0]);

    let words_text = format!("Words found: {}", app.stats.words_found);
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let best_text = format!("Best score: {}", app.stats.best_score);
    let best = Paragraph::new(best_text).alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Round | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
