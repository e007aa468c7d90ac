use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tolka_core::TextMetrics;
use tolka_types::{SourceLanguage, TranslationRequest};
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod provider;
pub mod session;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "tolka", version, about = "Translate text from the terminal")]
struct Cli {
    /// Config file (JSON), replaces the profile
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile name under $TOLKA_HOME/profiles
    #[arg(long, global = true, default_value = "main")]
    profile: String,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Translate text once and print the result
    Translate {
        #[arg(required = true)]
        text: Vec<String>,
        /// Target language name or code
        #[arg(long, short)]
        to: Option<String>,
        /// Source language code, disables auto-detect
        #[arg(long, short)]
        from: Option<String>,
    },
    /// List available target languages
    Languages {
        #[arg(long, short)]
        filter: Option<String>,
        /// Skip the provider and use the built-in list
        #[arg(long)]
        builtin: bool,
    },
    /// Interactive shell (default)
    Shell {
        /// Translate every input line right away
        #[arg(long)]
        auto: bool,
    },
    /// Manage config profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Write the main profile if it does not exist
    Init,
    /// Copy the main profile under a new name
    Add { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = match &cli.config {
        Some(path) => profile::load_config_file(path)?,
        None => profile::load_user_profile(&cli.profile)?,
    };

    match cli.command.unwrap_or(Command::Shell { auto: false }) {
        Command::Translate { text, to, from } => {
            let state = AppState::new(config).await?;
            translate_once(&state, &text.join(" "), to.as_deref(), from).await
        }
        Command::Languages { filter, builtin } => {
            let mut config = config;
            if builtin {
                config.translator.dynamic_catalog = false;
            }
            let state = AppState::new(config).await?;
            list_languages(&state, filter.as_deref()).await
        }
        Command::Shell { auto } => {
            let mut config = config;
            config.ui.auto_translate |= auto;
            let state = Arc::new(AppState::new(config).await?);
            run_shell(state).await
        }
        Command::Profile { action } => {
            let path = match action {
                ProfileAction::Init => profile::init_user_config()?,
                ProfileAction::Add { name } => profile::add_profile_from_default(&name)?,
            };
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn translate_once(
    state: &AppState,
    text: &str,
    to: Option<&str>,
    from: Option<String>,
) -> anyhow::Result<()> {
    let target = match to {
        Some(query) => state
            .catalog
            .resolve(query)
            .cloned()
            .with_context(|| format!("Unknown target language: {query}"))?,
        None => state.initial_target().await?,
    };

    let source = from
        .map(SourceLanguage::Fixed)
        .unwrap_or_else(|| state.gateway.source().clone());

    let request = TranslationRequest::new(text, target.code.clone()).with_source(source);
    let result = state.gateway.translate_request(&request).await;

    let input = TextMetrics::of(text);
    let output = TextMetrics::of(&result.text);
    tracing::info!(
        "{} -> {}: {} chars in, {} chars out ({:?})",
        request.source_language.code(),
        target.display_name,
        input.characters,
        output.characters,
        result.status
    );

    println!("{}", result.text);
    Ok(())
}

async fn list_languages(state: &AppState, filter: Option<&str>) -> anyhow::Result<()> {
    let selected = state.initial_target().await?;

    for entry in state.catalog.filter(filter.unwrap_or_default()) {
        let marker = if entry.display_name == selected.display_name {
            " *"
        } else {
            ""
        };
        println!("{}\t{}{}", entry.display_name, entry.code, marker);
    }

    Ok(())
}

pub async fn run_shell(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state).await;
    let mut tasks = controller.spawn_tasks().await?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
                break;
            }
            result = tasks.join_next() => {
                match result {
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("task exited with error: {e}");
                        controller.shutdown();
                        tasks.abort_all();
                    }
                    Some(Err(e)) if e.is_cancelled() => {}
                    Some(Err(e)) => {
                        tracing::error!("task panicked: {e}");
                        controller.shutdown();
                        tasks.abort_all();
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}
