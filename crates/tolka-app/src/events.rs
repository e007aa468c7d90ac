use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use tolka_types::AppEvent;

use crate::session::SessionState;
use crate::state::AppState;

pub mod list_languages;
pub mod select_language;
pub mod text_input;
pub mod translate;

use list_languages::handle_language_listing;
use select_language::handle_language_selection;
use text_input::handle_text_input;
use translate::handle_translate;

/// Shell's main loop. Owns the session, one event at a time.
pub async fn event_loop(
    state: Arc<AppState>,
    mut session: SessionState,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::debug!("[EVENT_LOOP] Starting, target {}", session.target.display_name);

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
            event = input_rx.recv() => event?,
        };

        if !handle_events(&state, &mut session, &app_to_ui_tx, event).await? {
            break;
        }
    }

    cancel.cancel();
    Ok(())
}

/// Returns false once the shell should stop
pub async fn handle_events(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::TextInput(text) => {
            handle_text_input(state, session, text, app_to_ui_tx).await?;
        }
        AppEvent::Translate => {
            handle_translate(state, session, app_to_ui_tx).await?;
        }
        AppEvent::SelectLanguage(query) => {
            handle_language_selection(state, session, &query, app_to_ui_tx).await?;
        }
        AppEvent::ListLanguages(filter) => {
            handle_language_listing(state, session, filter.as_deref(), app_to_ui_tx).await?;
        }
        AppEvent::Clear => {
            session.clear();
            app_to_ui_tx
                .send(AppEvent::Status("Cleared.".to_string()))
                .await?;
        }
        AppEvent::ShowStats => {
            app_to_ui_tx
                .send(AppEvent::Status(format!(
                    "Translations this session: {}",
                    session.translation_count
                )))
                .await?;
        }
        AppEvent::Status(message) => {
            app_to_ui_tx.send(AppEvent::Status(message)).await?;
        }
        AppEvent::Quit => {
            tracing::debug!("[EVENT_LOOP] Quit");
            if session.has_pending_input() {
                handle_translate(state, session, app_to_ui_tx).await?;
            }
            app_to_ui_tx.send(AppEvent::Quit).await?;
            return Ok(false);
        }
        AppEvent::InputBuffered { .. }
        | AppEvent::ShowTranslation { .. }
        | AppEvent::ShowLanguages { .. } => {
            // Output-only events
        }
    }

    Ok(true)
}
