//! Terminal event loop.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::controller::QuizAuthoring;
use crate::error::AppError;
use crate::terminal::{AuthorTerminal, TerminalSession};

use super::app::{Action, App};
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the interactive client until the user quits.
///
/// The initial fetch starts in the background, so the list screen shows up
/// immediately and fills in when the server answers.
pub async fn run<C>(controller: C) -> Result<(), AppError>
where
    C: QuizAuthoring + Clone + 'static,
{
    let init = controller.clone();
    tokio::spawn(async move {
        // Failures are logged and shown in the status line by the controller.
        let _ = init.initialize().await;
    });

    let mut session = TerminalSession::open()?;
    let result = run_tui(session.terminal(), &controller).await;
    session.close()?;
    info!("terminal client closed");
    result
}

async fn run_tui<C>(terminal: &mut AuthorTerminal, controller: &C) -> Result<(), AppError>
where
    C: QuizAuthoring + Clone + 'static,
{
    let mut app = App::new();

    loop {
        let state = controller.snapshot().await;
        app.clamp_selection(state.questions.len());
        terminal.draw(|frame| ui::render(frame, &app, &state))?;

        // Handle input with timeout so finished requests get drawn
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key, &state) {
            Some(Action::Quit) => break,
            Some(action) => dispatch(controller, action).await,
            None => {}
        }
    }

    Ok(())
}

/// Apply local actions right away; remote ones run on their own task.
async fn dispatch<C>(controller: &C, action: Action)
where
    C: QuizAuthoring + Clone + 'static,
{
    match action {
        Action::Quit => {}
        Action::SetView(mode) => controller.set_view_mode(mode).await,
        Action::SetCorrectAnswer(id, value) => controller.set_correct_answer(&id, value).await,
        Action::Edit(edit) => controller.update_draft_field(edit).await,
        Action::Submit => {
            let controller = controller.clone();
            tokio::spawn(async move {
                let _ = controller.submit_draft().await;
            });
        }
        Action::Delete(id) => {
            let controller = controller.clone();
            tokio::spawn(async move {
                let _ = controller.delete_question(&id).await;
            });
        }
    }
}
