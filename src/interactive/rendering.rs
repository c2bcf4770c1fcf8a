//! TUI rendering with ratatui
//!
//! Guess history, current ranking and progress for the watch mode.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::solver::GuessStep;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Guesses
            Constraint::Percentage(45), // Ranking + info
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app.target().map_or_else(
        || "🎯 WORDLE OVERLAP GUESSER".to_string(),
        |target| {
            format!(
                "🎯 WORDLE OVERLAP GUESSER - secret: {}",
                target.text().to_uppercase()
            )
        },
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Exact => Color::Green,
        Mark::Misplaced => Color::Yellow,
        Mark::Absent | Mark::Unset => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn guess_line(step: &GuessStep) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{:3}. ", step.number))];
    for (&letter, &mark) in step.feedback.letters().iter().zip(step.feedback.marks()) {
        spans.push(Span::styled(
            format!(" {} ", char::from(letter.to_ascii_uppercase())),
            tile_style(mark),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!(" {} → {}", step.viable_before, step.viable_after),
        Style::default().fg(Color::Cyan),
    ));
    Line::from(spans)
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    // Keep the latest guesses in view
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = app.history.len().saturating_sub(visible);
    let items: Vec<ListItem> = app
        .history
        .iter()
        .skip(skip)
        .map(|step| ListItem::new(guess_line(step)))
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Ranking
            Constraint::Length(3), // Elimination gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_ranking(f, app, chunks[0]);
    render_elimination(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_ranking(f: &mut Frame, app: &App, area: Rect) {
    let limit = usize::from(area.height.saturating_sub(2));
    let ranking = app.ranking(limit);

    let lines: Vec<Line> = if ranking.is_empty() {
        vec![Line::from("No ranking yet")]
    } else {
        ranking
            .into_iter()
            .enumerate()
            .map(|(i, (word, score))| {
                Line::from(vec![
                    Span::raw(format!("{:3}. ", i + 1)),
                    Span::styled(
                        word.to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {score}"), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Ranking ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_elimination(f: &mut Frame, app: &App, area: Rect) {
    let total = app.dictionary_size.max(1);
    let viable = app.viable_count();
    let eliminated = total.saturating_sub(viable);
    let percent = ((eliminated * 100) / total).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{viable} of {} candidates viable", app.dictionary_size));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Target => (
            " Secret word (Enter to start, empty or 'r' for random) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Stepping => (
            " Space/Enter: next guess | a: run to end | n: new word ",
            "",
            Color::Cyan,
        ),
        InputMode::Finished => (" Round over | n: new word | q: quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Opener: {} | Rounds: {} | Found: {} | Avg guesses: {:.2} | Not found: {}",
        app.opener.text().to_uppercase(),
        app.stats.rounds,
        app.stats.found,
        app.stats.average_guesses(),
        app.stats.exhausted
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
