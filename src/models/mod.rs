mod question;
mod view;

pub use question::{
    CorrectAnswer, DraftEdit, DraftField, DraftQuestion, InvalidCorrectAnswer, Question,
    QuestionId,
};
pub use view::ViewMode;
