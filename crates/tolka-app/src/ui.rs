use std::io::Write;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use tolka_types::{AppEvent, SourceLanguage, TranslationStatus};

/// Print app events until `Quit` or cancellation. The prompt comes back
/// after every event, including ones that print nothing.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    interactive: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if interactive {
        prompt()?;
    }

    loop {
        let event = tokio::select! {
            biased;
            event = app_to_ui_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        if matches!(event, AppEvent::Quit) {
            break;
        }

        if let Some(text) = render(&event) {
            println!("{text}");
        }

        if interactive {
            prompt()?;
        }
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

/// Text for an output event, `None` for events the renderer ignores
pub fn render(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowTranslation {
            result,
            source,
            target,
            input_chars,
            input_words,
            translation_count,
        } => {
            let source = match source {
                SourceLanguage::Auto => "auto-detected".to_string(),
                SourceLanguage::Fixed(code) => code.clone(),
            };

            let mut out = String::new();
            out.push_str(&result.text);
            out.push('\n');

            if result.status != TranslationStatus::Translated {
                out.push_str(&format!("[{}]\n", status_label(result.status)));
            }

            out.push_str(&format!(
                "Source: {source} | Target: {} ({})\n",
                target.display_name, target.code
            ));
            out.push_str(&format!(
                "Input: {input_chars} characters, {input_words} words | Output: {} characters | Translations this session: {translation_count}",
                result.text.chars().count()
            ));
            Some(out)
        }
        AppEvent::ShowLanguages { entries, selected } => {
            if entries.is_empty() {
                return Some("No matching languages.".to_string());
            }

            let lines: Vec<String> = entries
                .iter()
                .map(|e| {
                    let marker = if &e.display_name == selected { "*" } else { " " };
                    format!("{marker} {:<28}{}", e.display_name, e.code)
                })
                .collect();
            Some(lines.join("\n"))
        }
        AppEvent::Status(message) => Some(message.clone()),
        _ => None,
    }
}

fn status_label(status: TranslationStatus) -> &'static str {
    match status {
        TranslationStatus::Translated => "translated",
        TranslationStatus::EmptyInput => "empty input",
        TranslationStatus::EmptyResult => "empty result",
        TranslationStatus::Failed(tolka_types::FaultKind::UnsupportedTarget) => {
            "unsupported target language"
        }
        TranslationStatus::Failed(tolka_types::FaultKind::Connectivity) => "connectivity",
        TranslationStatus::Failed(tolka_types::FaultKind::Generic) => "failed",
    }
}
