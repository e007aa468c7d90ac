use kanal::AsyncSender;
use tolka_core::TextMetrics;
use tolka_types::{AppEvent, TranslationStatus};

use crate::session::SessionState;
use crate::state::AppState;

pub async fn handle_translate(
    state: &AppState,
    session: &mut SessionState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let metrics = session.input_metrics();
    let limit = state.config.read().await.ui.long_text_warning_chars;

    if metrics.exceeds(limit) {
        app_to_ui_tx
            .send(AppEvent::Status(format!(
                "Warning: input is {} characters, long texts may translate slowly or be cut off.",
                metrics.characters
            )))
            .await?;
    }

    let result = state
        .gateway
        .translate(&session.input, &session.target.code)
        .await;

    if result.status == TranslationStatus::EmptyInput {
        app_to_ui_tx.send(AppEvent::Status(result.text.clone())).await?;
        session.record(result);
        return Ok(());
    }

    let input = TextMetrics::of(session.input.trim());
    session.record(result.clone());

    app_to_ui_tx
        .send(AppEvent::ShowTranslation {
            result,
            source: state.gateway.source().clone(),
            target: session.target.clone(),
            input_chars: input.characters,
            input_words: input.words,
            translation_count: session.translation_count,
        })
        .await?;

    Ok(())
}
