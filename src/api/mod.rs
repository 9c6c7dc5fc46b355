//! Port to the remote `/api/questions` resource.

mod http;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::models::{DraftQuestion, Question, QuestionId};

pub use http::HttpQuestionsApi;

#[async_trait]
pub trait QuestionsApi: Send + Sync {
    /// Fetch the full collection in server order.
    async fn list_questions(&self) -> Result<Vec<Question>, RemoteError>;

    /// Create a question from the draft; returns the stored entity with its id.
    async fn create_question(&self, draft: &DraftQuestion) -> Result<Question, RemoteError>;

    async fn delete_question(&self, id: &QuestionId) -> Result<(), RemoteError>;
}
