use std::sync::Arc;

use anyhow::Context;
use tolka_config::Config;
use tolka_core::{LanguageCatalog, TranslationGateway, build_catalog};
use tolka_types::{LanguageEntry, SourceLanguage};
use tokio::sync::RwLock;

use crate::provider::build_translator;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Built once at startup, read-only afterwards
    pub catalog: Arc<LanguageCatalog>,
    pub gateway: TranslationGateway,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let translator = build_translator(&config)?;

        let catalog = if config.translator.dynamic_catalog {
            build_catalog(Some(translator.as_ref())).await
        } else {
            build_catalog(None).await
        };

        let gateway = gateway_for(&config, TranslationGateway::new(translator));

        Ok(Self::with_parts(config, catalog, gateway))
    }

    pub fn with_parts(config: Config, catalog: LanguageCatalog, gateway: TranslationGateway) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            catalog: Arc::new(catalog),
            gateway,
        }
    }

    /// Configured target code if the catalog has it, else the default selection
    pub async fn initial_target(&self) -> anyhow::Result<LanguageEntry> {
        let config = self.config.read().await;

        if let Some(code) = &config.translator.to_lang {
            match self.catalog.find_by_code(code) {
                Some(entry) => return Ok(entry.clone()),
                None => tracing::warn!("Configured target '{code}' is not in the catalog"),
            }
        }

        self.catalog
            .default_selection(&config.translator.default_languages)
            .cloned()
            .context("Language catalog is empty")
    }
}

/// Apply the config's network and source settings to a gateway
pub fn gateway_for(config: &Config, gateway: TranslationGateway) -> TranslationGateway {
    let source = if config.translator.auto_detect {
        SourceLanguage::Auto
    } else {
        SourceLanguage::Fixed(config.translator.from_lang.clone())
    };

    gateway
        .with_timeout(config.network.timeout())
        .with_source(source)
        .with_long_text_warning(config.ui.long_text_warning_chars)
}
