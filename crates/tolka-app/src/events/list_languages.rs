use kanal::AsyncSender;
use tolka_types::AppEvent;

use crate::session::SessionState;
use crate::state::AppState;

pub async fn handle_language_listing(
    state: &AppState,
    session: &SessionState,
    filter: Option<&str>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries = state
        .catalog
        .filter(filter.unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();

    app_to_ui_tx
        .send(AppEvent::ShowLanguages {
            entries,
            selected: session.target.display_name.clone(),
        })
        .await?;

    Ok(())
}
