//! Non-interactive commands.
//!
//! Each command drives the controller exactly like the terminal UI would,
//! then prints the outcome to stdout.

use std::io::Write;

use crate::controller::QuizAuthoring;
use crate::error::AppError;
use crate::models::{CorrectAnswer, DraftEdit, Question, ViewMode};

/// Print every question.
pub async fn list<C: QuizAuthoring>(controller: &C, out: &mut impl Write) -> Result<(), AppError> {
    controller.initialize().await?;
    let state = controller.snapshot().await;

    if state.questions.is_empty() {
        writeln!(out, "No questions.")?;
    }
    for question in &state.questions {
        write_question(out, question)?;
    }
    Ok(())
}

/// Fill the draft, submit it, print what the server stored.
pub async fn add<C: QuizAuthoring>(
    controller: &C,
    prompt: String,
    answer1: String,
    answer2: String,
    correct: CorrectAnswer,
    out: &mut impl Write,
) -> Result<(), AppError> {
    controller.set_view_mode(ViewMode::Form).await;
    for edit in [
        DraftEdit::Prompt(prompt),
        DraftEdit::Answer1(answer1),
        DraftEdit::Answer2(answer2),
        DraftEdit::CorrectAnswer(correct),
    ] {
        controller.update_draft_field(edit).await;
    }

    controller.submit_draft().await?;

    if let Some(created) = controller.snapshot().await.questions.last() {
        writeln!(out, "Added:")?;
        write_question(out, created)?;
    }
    Ok(())
}

/// Delete one question by id.
///
/// `raw` is matched against the text form of the loaded ids, and the server's
/// own id is what gets sent back.
pub async fn delete<C: QuizAuthoring>(
    controller: &C,
    raw: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    controller.initialize().await?;

    let found = controller
        .snapshot()
        .await
        .questions
        .into_iter()
        .find(|q| q.id.matches_text(raw));
    let Some(question) = found else {
        writeln!(out, "No question with id {}.", raw.trim())?;
        return Ok(());
    };

    controller.delete_question(&question.id).await?;
    writeln!(out, "Deleted question {}.", question.id)?;
    Ok(())
}

fn write_question(out: &mut impl Write, question: &Question) -> std::io::Result<()> {
    let mark = |which: CorrectAnswer| {
        if question.correct_answer == which {
            "*"
        } else {
            " "
        }
    };
    writeln!(out, "[{}] {}", question.id, question.prompt)?;
    writeln!(out, "    {}1) {}", mark(CorrectAnswer::One), question.answer1)?;
    writeln!(out, "    {}2) {}", mark(CorrectAnswer::Two), question.answer2)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use reqwest::StatusCode;

    use super::*;
    use crate::config::{Cli, Command};
    use crate::controller::QuestionListController;
    use crate::models::QuestionId;
    use crate::testing::{FakeApi, question};

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn list_marks_correct_answer() {
        let controller =
            QuestionListController::new(FakeApi::with_questions(vec![question(1, "Sky blue?")]));
        let mut out = Vec::new();

        list(&controller, &mut out).await.unwrap();

        assert_eq!(
            output(out),
            "[1] Sky blue?\n    *1) yes\n     2) no\n"
        );
    }

    #[tokio::test]
    async fn list_reports_fetch_failure() {
        let controller = QuestionListController::new(FakeApi::default());
        controller.api().fail_list(StatusCode::BAD_GATEWAY);
        let mut out = Vec::new();

        let err = list(&controller, &mut out).await.unwrap_err();
        assert!(matches!(err, AppError::Remote(_)));
    }

    #[tokio::test]
    async fn add_prints_created_question() {
        let controller = QuestionListController::new(FakeApi::default());
        let mut out = Vec::new();

        add(
            &controller,
            "2+2?".to_string(),
            "3".to_string(),
            "4".to_string(),
            CorrectAnswer::Two,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(output(out), "Added:\n[1] 2+2?\n     1) 3\n    *2) 4\n");
        let state = controller.snapshot().await;
        assert_eq!(state.view, ViewMode::List);
        assert!(state.draft.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_does_not_call_server() {
        let controller =
            QuestionListController::new(FakeApi::with_questions(vec![question(1, "a")]));
        let mut out = Vec::new();

        delete(&controller, "5", &mut out).await.unwrap();

        assert_eq!(output(out), "No question with id 5.\n");
        assert_eq!(controller.api().calls().delete, 0);
    }

    #[tokio::test]
    async fn delete_numeric_id_from_command_line() {
        let controller = QuestionListController::new(FakeApi::with_questions(vec![
            question(7, "a"),
            question(8, "b"),
        ]));
        let cli = Cli::try_parse_from(["quiz-author", "delete", "7"]).unwrap();
        let Command::Delete { id } = cli.command() else {
            panic!("expected delete command");
        };
        let mut out = Vec::new();

        delete(&controller, &id, &mut out).await.unwrap();

        assert_eq!(output(out), "Deleted question 7.\n");
        assert_eq!(controller.api().deleted_ids(), vec![QuestionId::Number(7)]);
        assert_eq!(controller.snapshot().await.questions, vec![question(8, "b")]);
    }

    #[tokio::test]
    async fn delete_text_id_from_command_line() {
        let mut stored = question(1, "a");
        stored.id = QuestionId::Text("65a1f".to_string());
        let controller = QuestionListController::new(FakeApi::with_questions(vec![stored]));
        let mut out = Vec::new();

        delete(&controller, "65a1f", &mut out).await.unwrap();

        assert_eq!(
            controller.api().deleted_ids(),
            vec![QuestionId::Text("65a1f".to_string())]
        );
        assert!(controller.snapshot().await.questions.is_empty());
    }
}
