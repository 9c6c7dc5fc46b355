//! Client state and its transitions.
//!
//! Every operation of the controller ends in exactly one of these transitions,
//! applied under the state lock after any remote call has completed.

use tracing::warn;

use crate::models::{CorrectAnswer, DraftEdit, DraftQuestion, Question, QuestionId, ViewMode};

/// Everything a rendering layer needs to draw the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    /// Local copy of the remote collection, in server order.
    pub questions: Vec<Question>,
    /// The new question being written.
    pub draft: DraftQuestion,
    pub view: ViewMode,
    /// Set while the initial fetch is in flight.
    pub loading: bool,
    /// Last remote failure, cleared by the next success.
    pub last_error: Option<String>,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.position(id).is_some()
    }

    /// Initial fetch succeeded.
    pub fn replace_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.loading = false;
        self.last_error = None;
    }

    /// Initial fetch failed: the list stays as it was.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Creation succeeded: append, clear the draft, go back to the list.
    pub fn append_created(&mut self, question: Question) {
        match self.position(&question.id) {
            Some(index) => {
                warn!(id = %question.id, "server returned an id already in the list");
                self.questions[index] = question;
            }
            None => self.questions.push(question),
        }
        self.draft = DraftQuestion::default();
        self.view = ViewMode::List;
        self.last_error = None;
    }

    /// Deletion succeeded. Returns whether anything was removed.
    pub fn remove_question(&mut self, id: &QuestionId) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| &q.id != id);
        self.last_error = None;
        self.questions.len() != before
    }

    /// Returns whether a question with `id` was found.
    pub fn set_correct_answer(&mut self, id: &QuestionId, value: CorrectAnswer) -> bool {
        match self.questions.iter_mut().find(|q| &q.id == id) {
            Some(question) => {
                question.correct_answer = value;
                true
            }
            None => false,
        }
    }

    pub fn apply_draft_edit(&mut self, edit: DraftEdit) {
        self.draft.apply(edit);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// A remote call failed; nothing else changes.
    pub fn record_failure(&mut self, message: String) {
        self.last_error = Some(message);
    }
}
