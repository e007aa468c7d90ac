use std::sync::Arc;

use tolka_config::Config;
use tolka_provider_google::GoogleTranslator;
use tolka_provider_libre::LibreTranslator;
use tolka_translator::Translator;

/// Provider named in the config
pub fn build_translator(config: &Config) -> anyhow::Result<Arc<dyn Translator>> {
    let translator = &config.translator;
    let network = &config.network;

    let provider: Arc<dyn Translator> = match translator.provider.to_lowercase().as_str() {
        "google" => Arc::new(GoogleTranslator::new(
            translator.api_url.clone(),
            network.timeout(),
            &network.user_agent,
        )?),
        "libre" | "libretranslate" => Arc::new(LibreTranslator::new(
            translator.api_url.clone(),
            Some(translator.api_key.clone()),
            network.timeout(),
            &network.user_agent,
        )?),
        other => anyhow::bail!("Unknown translation provider: {other}"),
    };

    tracing::debug!("Using {} provider", provider.metadata().name);
    Ok(provider)
}
