use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tolka_types::AppEvent;

use crate::events::event_loop;
use crate::io::watch_input;
use crate::session::SessionState;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            input_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Shell controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(state: Arc<AppState>) -> Self {
        let capacity = state.config.read().await.ui.channel_capacity.max(1);

        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks(&self) -> anyhow::Result<JoinSet<anyhow::Result<()>>> {
        let target = self.state.initial_target().await?;
        let interactive = atty::is(atty::Stream::Stdin);

        if interactive {
            println!(
                "tolka: translating to {} with {}. Type text, an empty line translates, :quit exits.",
                target.display_name,
                self.state.gateway.provider_name()
            );
        }

        let session = SessionState::new(target);
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            session,
            self.channels.input_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        ));

        // Renderer
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            interactive,
            self.cancel_token.child_token(),
        ));

        // Stdin
        tasks.spawn(watch_input(
            self.channels.input_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        Ok(tasks)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
