//! Main UI renderer.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::QuizState;
use crate::models::ViewMode;
use crate::tui::app::App;

use super::{form, list};

/// Render the whole screen for the current snapshot.
pub fn render(frame: &mut Frame, app: &App, state: &QuizState) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header with tabs
        Constraint::Min(6),    // Screen
        Constraint::Length(1), // Status
        Constraint::Length(1), // Controls
    ])
    .split(area);

    render_header(frame, chunks[0], state.view);
    match state.view {
        ViewMode::List => list::render(frame, chunks[1], app, state),
        ViewMode::Form => form::render(frame, chunks[1], app, state),
    }
    render_status(frame, chunks[2], state);
    render_controls(frame, chunks[3], state.view);
}

fn render_header(frame: &mut Frame, area: Rect, view: ViewMode) {
    let tab = |mode: ViewMode| {
        let style = if mode == view {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", mode.title()), style)
    };

    let line = Line::from(vec![
        Span::styled(" QUIZ APP ", Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        tab(ViewMode::List),
        Span::raw(" "),
        tab(ViewMode::Form),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &QuizState) {
    let line = if let Some(err) = &state.last_error {
        Line::from(Span::styled(
            format!(" {}", err),
            Style::default().fg(Color::Red),
        ))
    } else if state.loading {
        Line::from(Span::styled(
            " Loading questions...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {} questions", state.questions.len()),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_controls(frame: &mut Frame, area: Rect, view: ViewMode) {
    let hints = match view {
        ViewMode::List => "j/k select  ·  1/2 correct answer  ·  d delete  ·  n new  ·  q quit",
        ViewMode::Form => "tab next field  ·  enter add question  ·  esc back  ·  ctrl-c quit",
    };
    let widget = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
