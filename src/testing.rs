//! In-memory [`QuestionsApi`] for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::QuestionsApi;
use crate::error::{RemoteError, RemoteOperation};
use crate::models::{CorrectAnswer, DraftQuestion, Question, QuestionId};

pub fn question(id: i64, prompt: &str) -> Question {
    Question {
        id: QuestionId::Number(id),
        prompt: prompt.to_string(),
        answer1: "yes".to_string(),
        answer2: "no".to_string(),
        correct_answer: CorrectAnswer::One,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calls {
    pub list: usize,
    pub create: usize,
    pub delete: usize,
}

#[derive(Default)]
struct Inner {
    stored: Vec<Question>,
    next_id: i64,
    calls: Calls,
    created: Vec<DraftQuestion>,
    deleted: Vec<QuestionId>,
    fail_list: Option<StatusCode>,
    fail_create: Option<StatusCode>,
    fail_delete: Option<StatusCode>,
}

pub struct FakeApi {
    inner: Mutex<Inner>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self::with_questions(Vec::new())
    }
}

impl FakeApi {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let next_id = questions
            .iter()
            .filter_map(|q| match q.id {
                QuestionId::Number(n) => Some(n),
                QuestionId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Mutex::new(Inner {
                stored: questions,
                next_id,
                ..Inner::default()
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub fn fail_list(&self, status: StatusCode) {
        self.lock().fail_list = Some(status);
    }

    pub fn fail_create(&self, status: StatusCode) {
        self.lock().fail_create = Some(status);
    }

    pub fn fail_delete(&self, status: StatusCode) {
        self.lock().fail_delete = Some(status);
    }

    pub fn recover(&self) {
        let mut inner = self.lock();
        inner.fail_list = None;
        inner.fail_create = None;
        inner.fail_delete = None;
    }

    pub fn calls(&self) -> Calls {
        self.lock().calls
    }

    pub fn stored(&self) -> Vec<Question> {
        self.lock().stored.clone()
    }

    pub fn created_drafts(&self) -> Vec<DraftQuestion> {
        self.lock().created.clone()
    }

    pub fn deleted_ids(&self) -> Vec<QuestionId> {
        self.lock().deleted.clone()
    }
}

#[async_trait]
impl QuestionsApi for FakeApi {
    async fn list_questions(&self) -> Result<Vec<Question>, RemoteError> {
        let mut inner = self.lock();
        inner.calls.list += 1;
        if let Some(status) = inner.fail_list {
            return Err(RemoteError::status(RemoteOperation::ListQuestions, status));
        }
        Ok(inner.stored.clone())
    }

    async fn create_question(&self, draft: &DraftQuestion) -> Result<Question, RemoteError> {
        let mut inner = self.lock();
        inner.calls.create += 1;
        if let Some(status) = inner.fail_create {
            return Err(RemoteError::status(RemoteOperation::CreateQuestion, status));
        }
        let id = inner.next_id;
        inner.next_id += 1;
        let created = Question {
            id: QuestionId::Number(id),
            prompt: draft.prompt.clone(),
            answer1: draft.answer1.clone(),
            answer2: draft.answer2.clone(),
            correct_answer: draft.correct_answer,
        };
        inner.created.push(draft.clone());
        inner.stored.push(created.clone());
        Ok(created)
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), RemoteError> {
        let mut inner = self.lock();
        inner.calls.delete += 1;
        if let Some(status) = inner.fail_delete {
            return Err(RemoteError::status(RemoteOperation::DeleteQuestion, status));
        }
        inner.stored.retain(|q| &q.id != id);
        inner.deleted.push(id.clone());
        Ok(())
    }
}
