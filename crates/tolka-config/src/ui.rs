use serde::{Deserialize, Serialize};

fn default_long_text_warning_chars() -> usize {
    5000
}

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Inputs longer than this get a warning, they are still translated
    #[serde(default = "default_long_text_warning_chars")]
    pub long_text_warning_chars: usize,
    /// Translate on every input line instead of on explicit request
    #[serde(default)]
    pub auto_translate: bool,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            long_text_warning_chars: default_long_text_warning_chars(),
            auto_translate: false,
            channel_capacity: default_channel_capacity(),
        }
    }
}
