use kanal::AsyncSender;
use tolka_types::AppEvent;

use crate::events::translate::handle_translate;
use crate::session::SessionState;
use crate::state::AppState;

pub async fn handle_text_input(
    state: &AppState,
    session: &mut SessionState,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let auto_translate = state.config.read().await.ui.auto_translate;

    if auto_translate {
        session.replace_input(&text);
        tracing::debug!("Auto-translating {} chars", text.len());
        handle_translate(state, session, app_to_ui_tx).await
    } else {
        session.push_line(&text);
        tracing::debug!("Input buffer now {} chars", session.input.len());
        app_to_ui_tx
            .send(AppEvent::InputBuffered {
                characters: session.input_metrics().characters,
            })
            .await?;
        Ok(())
    }
}
