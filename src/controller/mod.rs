//! Question list controller.
//!
//! Owns the local question list, the draft and the view mode, and keeps the
//! list in step with the remote resource.

mod controller;
mod state;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::models::{CorrectAnswer, DraftEdit, QuestionId, ViewMode};

pub use controller::QuestionListController;
pub use state::QuizState;

/// Everything a rendering layer can ask of the client.
///
/// The terminal UI, the headless commands and the tests all drive the client
/// through this trait.
#[async_trait]
pub trait QuizAuthoring: Send + Sync {
    /// Load the question list. Only the first call does anything.
    async fn initialize(&self) -> Result<(), RemoteError>;

    /// Send the draft to the server and append the created question.
    async fn submit_draft(&self) -> Result<(), RemoteError>;

    /// Delete on the server, then locally. Unknown ids are ignored.
    async fn delete_question(&self, id: &QuestionId) -> Result<(), RemoteError>;

    /// Local only; the server is not told.
    async fn set_correct_answer(&self, id: &QuestionId, value: CorrectAnswer);

    async fn update_draft_field(&self, edit: DraftEdit);

    async fn set_view_mode(&self, mode: ViewMode);

    /// Copy of the current state for rendering.
    async fn snapshot(&self) -> QuizState;
}
