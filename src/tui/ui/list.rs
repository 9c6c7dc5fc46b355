//! Question list screen.

use ratatui::prelude::*;
use std::borrow::Cow;

use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::controller::QuizState;
use crate::models::{CorrectAnswer, Question};
use crate::tui::app::App;

/// Lines each question takes: prompt, answers, spacer.
///
/// Rows are cut to the list width instead of wrapping, so this holds for any
/// prompt length.
const ROW_HEIGHT: usize = 3;
/// Borders plus horizontal padding.
const FRAME_WIDTH: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App, state: &QuizState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Questions ")
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if state.questions.is_empty() {
        let text = if state.loading {
            "Loading..."
        } else {
            "No questions yet. Press [N] to write one."
        };
        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .fg(Color::DarkGray)
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    // Scroll so the selected question stays visible.
    let visible_rows = (area.height.saturating_sub(2) as usize / ROW_HEIGHT).max(1);
    let first = app.selected.saturating_sub(visible_rows - 1);

    let width = (area.width as usize).saturating_sub(FRAME_WIDTH);
    let lines: Vec<Line> = state
        .questions
        .iter()
        .enumerate()
        .skip(first)
        .take(visible_rows)
        .flat_map(|(i, q)| question_lines(q, i == app.selected, width))
        .collect();

    let widget = Paragraph::new(lines).block(block);
    frame.render_widget(widget, area);
}

fn question_lines(question: &Question, is_selected: bool, width: usize) -> Vec<Line<'_>> {
    let prompt_style = if is_selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if is_selected { "> " } else { "  " };

    vec![
        Line::from(vec![
            Span::styled(marker, prompt_style),
            Span::styled(
                truncate(&question.prompt, width.saturating_sub(marker.len())),
                prompt_style,
            ),
        ]),
        fit_line(
            Line::from(vec![
                Span::raw("    "),
                answer_span(CorrectAnswer::One, &question.answer1, question.correct_answer),
                Span::raw("   "),
                answer_span(CorrectAnswer::Two, &question.answer2, question.correct_answer),
            ]),
            width,
        ),
        Line::from(""),
    ]
}

fn answer_span(which: CorrectAnswer, text: &str, correct: CorrectAnswer) -> Span<'static> {
    if which == correct {
        Span::styled(
            format!("[{}] {} ✓", which, text),
            Style::default().fg(Color::Green).bold(),
        )
    } else {
        Span::styled(
            format!(" {}  {}", which, text),
            Style::default().fg(Color::Gray),
        )
    }
}

/// Cut `text` to at most `max` characters, ending in `…` when shortened.
fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    if text.chars().count() <= max {
        return Cow::Borrowed(text);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    Cow::Owned(cut)
}

/// Cut a styled line to `width` characters, keeping each span's style.
fn fit_line(line: Line<'_>, width: usize) -> Line<'_> {
    let mut left = width;
    let mut spans = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        if left == 0 {
            break;
        }
        let len = span.content.chars().count();
        if len <= left {
            left -= len;
            spans.push(span);
        } else {
            spans.push(Span::styled(truncate(&span.content, left).into_owned(), span.style));
            left = 0;
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::models::QuestionId;

    fn long_question(id: i64) -> Question {
        Question {
            id: QuestionId::Number(id),
            prompt: format!("{id} {}", "very long prompt ".repeat(20)),
            answer1: "first answer ".repeat(10),
            answer2: "second answer ".repeat(10),
            correct_answer: CorrectAnswer::One,
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_truncate_marks_cut_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("too long here", 5), "too …");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_rows_fit_width() {
        let question = long_question(1);
        let lines = question_lines(&question, true, 30);

        assert_eq!(lines.len(), ROW_HEIGHT);
        for line in &lines {
            assert!(line_text(line).chars().count() <= 30, "{:?}", line_text(line));
        }
        assert!(line_text(&lines[0]).starts_with("> 1 very long"));
        assert!(line_text(&lines[0]).ends_with('…'));
    }

    #[test]
    fn test_selected_long_question_stays_on_screen() {
        let questions: Vec<Question> = (1..=6).map(long_question).collect();
        let state = QuizState {
            questions,
            ..QuizState::default()
        };
        let mut app = App::new();
        app.selected = 5;

        let mut terminal = Terminal::new(TestBackend::new(40, 11)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &app, &state);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(screen.contains("> 6 very long"), "{screen}");
    }
}
