//! Interactive terminal client.
//!
//! Two screens, the question list and the new question form, drawn with
//! ratatui and driven through [`QuizAuthoring`](crate::controller::QuizAuthoring).

mod app;
mod runner;
mod ui;

pub use app::{Action, App};
pub use runner::run;
