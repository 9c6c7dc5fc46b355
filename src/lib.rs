//! # quiz-author
//!
//! A client for authoring quiz questions stored behind a `/api/questions`
//! REST resource.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_author::{HttpQuestionsApi, QuestionListController, QuizAuthoring};
//! use url::Url;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpQuestionsApi::new(Url::parse("http://127.0.0.1:3000")?, None)?;
//! let controller = QuestionListController::new(api);
//!
//! // Load the list once, then read it back.
//! controller.initialize().await?;
//! for question in controller.snapshot().await.questions {
//!     println!("{}: {}", question.id, question.prompt);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod headless;
mod models;
pub mod terminal;
pub mod tui;

#[cfg(test)]
mod testing;

pub use api::{HttpQuestionsApi, QuestionsApi};
pub use config::{Cli, Command, Settings};
pub use controller::{QuestionListController, QuizAuthoring, QuizState};
pub use error::{AppError, ConfigError, RemoteError, RemoteFailure, RemoteOperation};
pub use models::{
    CorrectAnswer, DraftEdit, DraftField, DraftQuestion, InvalidCorrectAnswer, Question,
    QuestionId, ViewMode,
};
