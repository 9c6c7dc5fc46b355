use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote resource.
///
/// The server decides the representation, so both JSON numbers and strings are
/// accepted and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(value: i64) -> Self {
        QuestionId::Number(value)
    }
}

impl QuestionId {
    /// Whether `raw` is how this id is written on a command line.
    ///
    /// `7` matches both `Number(7)` and `Text("7")`, so the server's own
    /// representation decides which one is sent back.
    pub fn matches_text(&self, raw: &str) -> bool {
        self.to_string() == raw.trim()
    }
}

/// Which of the two answers is correct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCorrectAnswer", into = "String")]
pub enum CorrectAnswer {
    #[default]
    One,
    Two,
}

impl CorrectAnswer {
    pub fn as_str(self) -> &'static str {
        match self {
            CorrectAnswer::One => "1",
            CorrectAnswer::Two => "2",
        }
    }

    /// The other answer.
    pub fn toggled(self) -> Self {
        match self {
            CorrectAnswer::One => CorrectAnswer::Two,
            CorrectAnswer::Two => CorrectAnswer::One,
        }
    }
}

impl fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CorrectAnswer> for String {
    fn from(value: CorrectAnswer) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("correct answer must be 1 or 2, got {0:?}")]
pub struct InvalidCorrectAnswer(pub String);

impl FromStr for CorrectAnswer {
    type Err = InvalidCorrectAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(CorrectAnswer::One),
            "2" => Ok(CorrectAnswer::Two),
            other => Err(InvalidCorrectAnswer(other.to_string())),
        }
    }
}

/// Wire form of `correctAnswer`: the string the form sends, or a bare integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCorrectAnswer {
    Text(String),
    Number(i64),
}

impl TryFrom<RawCorrectAnswer> for CorrectAnswer {
    type Error = InvalidCorrectAnswer;

    fn try_from(raw: RawCorrectAnswer) -> Result<Self, Self::Error> {
        match raw {
            RawCorrectAnswer::Text(s) => s.parse(),
            RawCorrectAnswer::Number(1) => Ok(CorrectAnswer::One),
            RawCorrectAnswer::Number(2) => Ok(CorrectAnswer::Two),
            RawCorrectAnswer::Number(n) => Err(InvalidCorrectAnswer(n.to_string())),
        }
    }
}

/// A question as stored by the remote resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub answer1: String,
    pub answer2: String,
    pub correct_answer: CorrectAnswer,
}

impl Question {
    /// Text of the answer currently marked correct.
    pub fn correct_text(&self) -> &str {
        match self.correct_answer {
            CorrectAnswer::One => &self.answer1,
            CorrectAnswer::Two => &self.answer2,
        }
    }
}

/// The not-yet-submitted new question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftQuestion {
    pub prompt: String,
    pub answer1: String,
    pub answer2: String,
    pub correct_answer: CorrectAnswer,
}

/// Names one field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Prompt,
    Answer1,
    Answer2,
    CorrectAnswer,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Prompt,
        DraftField::Answer1,
        DraftField::Answer2,
        DraftField::CorrectAnswer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Prompt => "Prompt",
            DraftField::Answer1 => "Answer 1",
            DraftField::Answer2 => "Answer 2",
            DraftField::CorrectAnswer => "Correct Answer",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            DraftField::Prompt => Some("Enter prompt"),
            DraftField::Answer1 => Some("Enter answer 1"),
            DraftField::Answer2 => Some("Enter answer 2"),
            DraftField::CorrectAnswer => None,
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A new value for one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Prompt(String),
    Answer1(String),
    Answer2(String),
    CorrectAnswer(CorrectAnswer),
}

impl DraftEdit {
    pub fn field(&self) -> DraftField {
        match self {
            DraftEdit::Prompt(_) => DraftField::Prompt,
            DraftEdit::Answer1(_) => DraftField::Answer1,
            DraftEdit::Answer2(_) => DraftField::Answer2,
            DraftEdit::CorrectAnswer(_) => DraftField::CorrectAnswer,
        }
    }
}

impl DraftQuestion {
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Prompt(v) => self.prompt = v,
            DraftEdit::Answer1(v) => self.answer1 = v,
            DraftEdit::Answer2(v) => self.answer2 = v,
            DraftEdit::CorrectAnswer(v) => self.correct_answer = v,
        }
    }

    /// Text form of a field, as the form displays it.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Prompt => &self.prompt,
            DraftField::Answer1 => &self.answer1,
            DraftField::Answer2 => &self.answer2,
            DraftField::CorrectAnswer => self.correct_answer.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == DraftQuestion::default()
    }
}
