//! UI rendering using ratatui
//!
//! Two screens:
//! - Round: prompt, three flag cards, result banner, counters
//! - GameOver: final score plus lifetime stats, restart hint

use crate::app::{App, Phase};
use crate::game::MAX_ATTEMPTS;
use crate::stats::LifetimeStats;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::flags;

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, app: &App) {
    match app.phase {
        Phase::GameOver => render_game_over(frame, app),
        _ => render_round(frame, app),
    }
}

/// Render an in-progress round (guessing or showing a result)
fn render_round(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                             // Title
            Constraint::Length(3),                             // Prompt
            Constraint::Length(flags::FLAG_HEIGHT as u16 + 2), // Flag cards
            Constraint::Length(2),                             // Result banner
            Constraint::Length(2),                             // Counters
            Constraint::Min(0),                                // Spacer
            Constraint::Length(1),                             // Footer
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new("F L A G T A P")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let prompt = Text::from(vec![
        Line::styled("Tap the flag of", Style::default().fg(Color::DarkGray)),
        Line::styled(
            app.quiz.round().correct_country(),
            Style::default().fg(Color::White).bold(),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(prompt).alignment(Alignment::Center),
        layout[1],
    );

    render_flag_cards(frame, app, layout[2]);

    let banner = match &app.phase {
        Phase::Showing { result, .. } if result.correct => Paragraph::new("Correct!")
            .style(Style::default().fg(Color::Green).bold()),
        Phase::Showing { result, .. } => Paragraph::new(format!(
            "Wrong! The answer was {}",
            result.correct_country
        ))
        .style(Style::default().fg(Color::Red).bold()),
        _ => Paragraph::new("Press 1, 2 or 3").style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(banner.alignment(Alignment::Center), layout[3]);

    let counters = Paragraph::new(format!(
        "Score: {}   Attempts: {}/{}",
        app.quiz.score(),
        app.quiz.attempts(),
        MAX_ATTEMPTS
    ))
    .style(Style::default().fg(Color::White))
    .alignment(Alignment::Center);
    frame.render_widget(counters, layout[4]);

    let hint = match app.phase {
        Phase::Guessing => "1-3 Tap flag  Esc Quit",
        _ => "Enter Continue  Esc Quit",
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[6]);
}

/// Render the three flag cards side by side
fn render_flag_cards(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (i, country) in app.quiz.round().options().iter().enumerate() {
        // After a guess, reveal the answer in green and a wrong tap in red
        let border_style = match &app.phase {
            Phase::Showing { result, guessed } => {
                if i == app.quiz.round().correct_index() {
                    Style::default().fg(Color::Green)
                } else if i == *guessed && !result.correct {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                }
            }
            _ => Style::default().fg(Color::White),
        };

        let card = Paragraph::new(flag_art(country))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", i + 1)),
            );
        frame.render_widget(card, columns[i]);
    }
}

/// Build the colored cell grid for one flag
fn flag_art(country: &str) -> Text<'static> {
    let rows = flags::rows(country).unwrap_or_default();
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let cells: Vec<Span> = row
                .chars()
                .map(|code| Span::styled(" ", Style::default().bg(flags::cell_color(code))))
                .collect();
            Line::from(cells)
        })
        .collect();
    Text::from(lines)
}

/// Render the game-over screen with lifetime stats
fn render_game_over(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Final score
            Constraint::Length(6), // Lifetime stats
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Footer
        ])
        .margin(2)
        .split(area);

    let title = Paragraph::new("GAME OVER")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let final_score = Paragraph::new(format!(
        "Final score: {}/{}",
        app.quiz.score(),
        MAX_ATTEMPTS
    ))
    .style(Style::default().fg(Color::White).bold())
    .alignment(Alignment::Center);
    frame.render_widget(final_score, layout[1]);

    let stats_text = match &app.lifetime {
        Some(stats) => lifetime_lines(stats),
        None => Text::from("Lifetime stats unavailable"),
    };
    let stats_widget = Paragraph::new(stats_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title(" Lifetime ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(stats_widget, layout[2]);

    let footer = Paragraph::new("Enter Restart  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

fn lifetime_lines(stats: &LifetimeStats) -> Text<'static> {
    Text::from(vec![
        Line::from(format!("Sessions played: {}", stats.sessions_played)),
        Line::from(format!("Best score: {}/{}", stats.best_score, MAX_ATTEMPTS)),
        Line::from(format!("Average score: {:.1}", stats.average_score())),
        Line::from(format!("Accuracy: {:.0}%", stats.accuracy() * 100.0)),
    ])
}
