//! UI-local state and key handling.
//!
//! Keys are translated into [`Action`]s against the current snapshot; the
//! runner forwards them to the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::QuizState;
use crate::models::{CorrectAnswer, DraftEdit, DraftField, QuestionId, ViewMode};

/// What a key press asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SetView(ViewMode),
    SetCorrectAnswer(QuestionId, CorrectAnswer),
    Delete(QuestionId),
    Edit(DraftEdit),
    Submit,
}

/// State that only the terminal UI cares about.
#[derive(Debug, Clone)]
pub struct App {
    /// Highlighted row in the list.
    pub selected: usize,
    /// Focused field in the form.
    pub focus: DraftField,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            selected: 0,
            focus: DraftField::Prompt,
        }
    }

    /// Keep the selection inside a list of `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent, state: &QuizState) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match state.view {
            ViewMode::List => self.handle_list_key(key.code, state),
            ViewMode::Form => self.handle_form_key(key.code, state),
        }
    }

    fn handle_list_key(&mut self, key: KeyCode, state: &QuizState) -> Option<Action> {
        let selected = state.questions.get(self.selected);

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Tab => {
                Some(Action::SetView(ViewMode::Form))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(state.questions.len());
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Char('1') => {
                selected.map(|q| Action::SetCorrectAnswer(q.id.clone(), CorrectAnswer::One))
            }
            KeyCode::Char('2') => {
                selected.map(|q| Action::SetCorrectAnswer(q.id.clone(), CorrectAnswer::Two))
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => selected
                .map(|q| Action::SetCorrectAnswer(q.id.clone(), q.correct_answer.toggled())),
            KeyCode::Char('d') | KeyCode::Delete => selected.map(|q| Action::Delete(q.id.clone())),
            _ => None,
        }
    }

    fn handle_form_key(&mut self, key: KeyCode, state: &QuizState) -> Option<Action> {
        let draft = &state.draft;

        match key {
            KeyCode::Esc => Some(Action::SetView(ViewMode::List)),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                None
            }
            _ if self.focus == DraftField::CorrectAnswer => {
                let value = match key {
                    KeyCode::Char('1') => CorrectAnswer::One,
                    KeyCode::Char('2') => CorrectAnswer::Two,
                    KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                        draft.correct_answer.toggled()
                    }
                    _ => return None,
                };
                Some(Action::Edit(DraftEdit::CorrectAnswer(value)))
            }
            KeyCode::Char(c) => {
                let mut text = draft.field(self.focus).to_string();
                text.push(c);
                text_edit(self.focus, text)
            }
            KeyCode::Backspace => {
                let mut text = draft.field(self.focus).to_string();
                text.pop()?;
                text_edit(self.focus, text)
            }
            _ => None,
        }
    }
}

fn text_edit(field: DraftField, text: String) -> Option<Action> {
    let edit = match field {
        DraftField::Prompt => DraftEdit::Prompt(text),
        DraftField::Answer1 => DraftEdit::Answer1(text),
        DraftField::Answer2 => DraftEdit::Answer2(text),
        DraftField::CorrectAnswer => return None,
    };
    Some(Action::Edit(edit))
}
