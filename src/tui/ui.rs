//! Stateless UI rendering for the quiz.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use strictly_quiz::{GameState, ROUND_SECONDS};

use super::app::Hud;

/// Renders the screen for the current view model.
pub fn draw(frame: &mut Frame, hud: &Hud) {
    match hud.game_state {
        GameState::Home => draw_home(frame, hud),
        GameState::Playing => draw_game(frame, hud),
        GameState::Ended => {
            draw_game(frame, hud);
            draw_game_over(frame, hud);
        }
    }
}

fn draw_home(frame: &mut Frame, hud: &Hud) {
    let area = center_rect(frame.area(), 60, 11);

    let text = vec![
        Line::from(Span::styled(
            "Arithmetic Game",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "You will have {} seconds to answer as many arithmetic questions as you can. \
             Good luck!",
            ROUND_SECONDS
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Best Score: {}", hud.best_score),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start, q to quit",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_game(frame: &mut Frame, hud: &Hud) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score bar
            Constraint::Min(3),    // Problem
            Constraint::Length(3), // Answer
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    draw_score_bar(frame, chunks[0], hud);

    let problem = Paragraph::new(Line::from(Span::styled(
        hud.problem.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default());
    frame.render_widget(problem, center_rect(chunks[1], 30, 1));

    let answer = Paragraph::new(hud.answer.as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Your Answer").borders(Borders::ALL));
    frame.render_widget(answer, center_rect(chunks[2], 30, 3));

    let help = Paragraph::new("r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_score_bar(frame: &mut Frame, area: Rect, hud: &Hud) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let time_color = if hud.time_remaining <= 10 {
        Color::Red
    } else {
        Color::White
    };

    let score = Paragraph::new(format!("Score: {}", hud.score))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    let time = Paragraph::new(format!("Time: {}", hud.time_remaining))
        .style(Style::default().fg(time_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    let best = Paragraph::new(format!("Best Score: {}", hud.best_score))
        .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(score, cols[0]);
    frame.render_widget(time, cols[1]);
    frame.render_widget(best, cols[2]);
}

fn draw_game_over(frame: &mut Frame, hud: &Hud) {
    let area = center_rect(frame.area(), 36, 7);

    let text = vec![
        Line::from(format!("Your final score is {}", hud.score)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Play Again",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let popup = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title("Game Over")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
