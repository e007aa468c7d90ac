use kanal::AsyncSender;
use tolka_types::AppEvent;

use crate::session::SessionState;
use crate::state::AppState;

pub async fn handle_language_selection(
    state: &AppState,
    session: &mut SessionState,
    query: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let message = match session.select(&state.catalog, query) {
        Some(entry) => format!("Target: {} ({})", entry.display_name, entry.code),
        None => format!("Unknown language '{query}', try :langs {query}"),
    };

    app_to_ui_tx.send(AppEvent::Status(message)).await?;
    Ok(())
}
