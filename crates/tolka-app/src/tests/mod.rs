mod session_tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tolka_config::Config;
use tolka_core::{TranslationGateway, fallback_catalog};
use tolka_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

use crate::state::{AppState, gateway_for};

/// Echoes `"<to>:<text>"`, or fails with the given message
pub struct EchoTranslator {
    fault: Option<String>,
    pub calls: AtomicUsize,
}

impl EchoTranslator {
    pub fn new() -> Self {
        Self {
            fault: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fault: Some(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.fault {
            return Err(TranslateError::ApiError(message.clone()));
        }

        Ok(Translation {
            text: format!("{to}:{text}"),
            from,
            to,
            provider: "echo".to_string(),
            detected_from: None,
        })
    }

    async fn supported_languages(&self) -> Result<Vec<(String, LanguageCode)>, TranslateError> {
        Err(TranslateError::ApiError("listing disabled".to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

pub fn test_state(translator: Arc<EchoTranslator>, config: Config) -> Arc<AppState> {
    let gateway = gateway_for(&config, TranslationGateway::new(translator));
    Arc::new(AppState::with_parts(config, fallback_catalog(), gateway))
}
