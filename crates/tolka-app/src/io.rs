use std::io::BufRead;

use kanal::{AsyncSender, Sender};
use tokio_util::sync::CancellationToken;
use tolka_types::AppEvent;

/// Feed stdin lines to the event loop until EOF, `:quit` or cancellation.
///
/// Reading happens on a plain thread: a blocked stdin read must not keep
/// the runtime from shutting down.
pub async fn watch_input(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let tx = event_tx.to_sync();
    let reader_cancel = cancel.clone();

    std::thread::Builder::new()
        .name("tolka-stdin".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            if let Err(e) = read_lines(stdin.lock(), &tx, &reader_cancel) {
                tracing::error!("stdin reader stopped: {e}");
            }
        })?;

    cancel.cancelled().await;
    tracing::debug!("Input watcher stopping");
    Ok(())
}

/// Parse and forward lines. Sends `Quit` on EOF.
pub fn read_lines<R: BufRead>(
    reader: R,
    tx: &Sender<AppEvent>,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        if cancel.is_cancelled() {
            return Ok(());
        }

        let event = parse_line(&line?);
        let quit = matches!(event, AppEvent::Quit);
        tx.send(event)?;

        if quit {
            return Ok(());
        }
    }

    tracing::debug!("stdin closed");
    tx.send(AppEvent::Quit)?;
    Ok(())
}

/// Map one shell line to an event
pub fn parse_line(line: &str) -> AppEvent {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return AppEvent::Translate;
    }

    // "::" escapes text that starts with a colon
    if let Some(text) = line.trim_start().strip_prefix("::") {
        return AppEvent::TextInput(format!(":{text}"));
    }

    let Some(command) = trimmed.strip_prefix(':') else {
        return AppEvent::TextInput(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (command, None),
    };

    match (name, arg) {
        ("q" | "quit" | "exit", _) => AppEvent::Quit,
        ("t" | "translate", _) => AppEvent::Translate,
        ("clear", _) => AppEvent::Clear,
        ("stats", _) => AppEvent::ShowStats,
        ("lang", Some(query)) => AppEvent::SelectLanguage(query.to_string()),
        ("lang", None) => AppEvent::Status("Usage: :lang <name or code>".to_string()),
        ("langs", filter) => AppEvent::ListLanguages(filter.map(str::to_string)),
        _ => AppEvent::Status(format!(
            "Unknown command ':{name}'. Commands: :t :lang :langs :clear :stats :quit"
        )),
    }
}
