//! New question form.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::controller::QuizState;
use crate::models::{CorrectAnswer, DraftField, DraftQuestion};
use crate::tui::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, state: &QuizState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" New Question ")
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::new(2, 2, 1, 1));

    let mut lines = Vec::with_capacity(DraftField::ALL.len() * 2 + 1);
    for field in DraftField::ALL {
        lines.push(field_line(&state.draft, field, field == app.focus));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "[Enter] Add Question",
        Style::default().fg(Color::Green).bold(),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(draft: &DraftQuestion, field: DraftField, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let label = Span::styled(format!("{:<16}", format!("{}:", field.label())), label_style);

    if field == DraftField::CorrectAnswer {
        let choice = |which: CorrectAnswer| {
            let selected = draft.correct_answer == which;
            let style = match (selected, focused) {
                (true, true) => Style::default().fg(Color::Yellow).bold(),
                (true, false) => Style::default().fg(Color::Green),
                (false, _) => Style::default().fg(Color::DarkGray),
            };
            let mark = if selected { "(•)" } else { "( )" };
            Span::styled(format!("{} Answer {}  ", mark, which), style)
        };
        return Line::from(vec![label, choice(CorrectAnswer::One), choice(CorrectAnswer::Two)]);
    }

    let value = draft.field(field);
    let mut spans = vec![label];
    if value.is_empty() && !focused {
        if let Some(placeholder) = field.placeholder() {
            spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        }
    } else {
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(value.to_string(), style));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}
