use std::env;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod network;
pub mod translator;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub network: NetworkConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Apply environment overrides. A `.env` file in the working directory
    /// is loaded first if present.
    pub fn with_env(mut self) -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("no .env file loaded: {e}");
        }

        if let Ok(provider) = env::var("TOLKA_PROVIDER") {
            self.translator.provider = provider;
        }

        if let Ok(api_url) = env::var("TOLKA_API_URL") {
            self.translator.api_url = Some(api_url);
        }

        if let Ok(api_key) = env::var("TOLKA_API_KEY") {
            self.translator.api_key = api_key;
        }

        if let Ok(to_lang) = env::var("TOLKA_TO_LANG") {
            self.translator.to_lang = Some(to_lang);
        }

        if let Some(timeout) = env::var("TOLKA_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.network.timeout_seconds = timeout;
        }

        if let Some(auto) = env::var("TOLKA_AUTO_TRANSLATE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.ui.auto_translate = auto;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{ "translator": { "provider": "libre" }, "ui": { "auto_translate": true } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.translator.provider, "libre");
        assert!(config.translator.auto_detect);
        assert_eq!(
            config.translator.default_languages,
            vec!["English".to_string(), "Spanish".to_string()]
        );
        assert!(config.ui.auto_translate);
        assert_eq!(config.ui.long_text_warning_chars, 5000);
        assert_eq!(config.network.timeout_seconds, 10);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.translator.provider, "google");
        assert!(config.translator.dynamic_catalog);
        assert!(config.translator.to_lang.is_none());
        assert_eq!(config.network.timeout().as_secs(), 10);
    }
}
