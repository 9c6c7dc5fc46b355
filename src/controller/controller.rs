//! Controller implementation over a [`QuestionsApi`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::api::QuestionsApi;
use crate::error::RemoteError;
use crate::models::{CorrectAnswer, DraftEdit, QuestionId, ViewMode};

use super::QuizAuthoring;
use super::state::QuizState;

/// Shared client state wrapped in Arc<Mutex> for async access.
type SharedState = Arc<Mutex<QuizState>>;

/// Single point of mutation for the question list, the draft and the view.
///
/// Cloning is cheap and every clone drives the same state. The state lock is
/// never held across a remote call: a request that completes late applies its
/// result to whatever the state is at that moment.
pub struct QuestionListController<A> {
    api: Arc<A>,
    state: SharedState,
    initialized: Arc<AtomicBool>,
}

impl<A> Clone for QuestionListController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
            initialized: Arc::clone(&self.initialized),
        }
    }
}

impl<A: QuestionsApi> QuestionListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(Mutex::new(QuizState::new())),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    async fn fail(&self, err: RemoteError) -> RemoteError {
        error!(operation = %err.operation, error = %err, "remote operation failed");
        self.state.lock().await.record_failure(err.to_string());
        err
    }
}

#[async_trait]
impl<A: QuestionsApi + 'static> QuizAuthoring for QuestionListController<A> {
    async fn initialize(&self) -> Result<(), RemoteError> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            warn!("question list already initialized, ignoring");
            return Ok(());
        }

        self.state.lock().await.loading = true;
        match self.api.list_questions().await {
            Ok(questions) => {
                info!(count = questions.len(), "loaded questions");
                self.state.lock().await.replace_questions(questions);
                Ok(())
            }
            Err(err) => {
                self.state.lock().await.finish_loading();
                Err(self.fail(err).await)
            }
        }
    }

    async fn submit_draft(&self) -> Result<(), RemoteError> {
        let draft = self.state.lock().await.draft.clone();

        match self.api.create_question(&draft).await {
            Ok(created) => {
                info!(id = %created.id, "created question");
                self.state.lock().await.append_created(created);
                Ok(())
            }
            Err(err) => Err(self.fail(err).await),
        }
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), RemoteError> {
        if !self.state.lock().await.contains(id) {
            debug!(%id, "delete requested for unknown question, ignoring");
            return Ok(());
        }

        match self.api.delete_question(id).await {
            Ok(()) => {
                let removed = self.state.lock().await.remove_question(id);
                info!(%id, removed, "deleted question");
                Ok(())
            }
            Err(err) => Err(self.fail(err).await),
        }
    }

    async fn set_correct_answer(&self, id: &QuestionId, value: CorrectAnswer) {
        let found = self.state.lock().await.set_correct_answer(id, value);
        if found {
            debug!(%id, %value, "changed correct answer locally");
        } else {
            debug!(%id, "correct answer change for unknown question, ignoring");
        }
    }

    async fn update_draft_field(&self, edit: DraftEdit) {
        self.state.lock().await.apply_draft_edit(edit);
    }

    async fn set_view_mode(&self, mode: ViewMode) {
        self.state.lock().await.set_view(mode);
    }

    async fn snapshot(&self) -> QuizState {
        self.state.lock().await.clone()
    }
}
