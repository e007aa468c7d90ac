use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "google".to_string()
}

fn default_auto_detect() -> bool {
    true
}

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["English".to_string(), "Spanish".to_string()]
}

fn default_dynamic_catalog() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// "google" or "libre"
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Overrides the provider's default endpoint
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_key: String,
    /// When false, `from_lang` is sent as the source language
    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    /// Initial target code, takes precedence over `default_languages`
    #[serde(default)]
    pub to_lang: Option<String>,
    /// Display names tried in order for the initial target
    #[serde(default = "default_languages")]
    pub default_languages: Vec<String>,
    /// Ask the provider for its language list instead of the built-in one
    #[serde(default = "default_dynamic_catalog")]
    pub dynamic_catalog: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: None,
            api_key: String::new(),
            auto_detect: default_auto_detect(),
            from_lang: default_from_lang(),
            to_lang: None,
            default_languages: default_languages(),
            dynamic_catalog: default_dynamic_catalog(),
        }
    }
}
