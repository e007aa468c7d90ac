use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tolka_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

pub enum Reply {
    Text(String),
    Fault(String),
    Unsupported,
    Slow(Duration),
}

/// Provider stand-in that records how often it was called
pub struct MockTranslator {
    reply: Reply,
    languages: Result<Vec<(String, String)>, String>,
    pub calls: AtomicUsize,
    pub last_text: Mutex<Option<String>>,
    pub last_from: Mutex<Option<String>>,
}

impl MockTranslator {
    pub fn replying(reply: Reply) -> Self {
        Self {
            reply,
            languages: Ok(vec![]),
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
            last_from: Mutex::new(None),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::replying(Reply::Text(text.to_string()))
    }

    pub fn fault(message: &str) -> Self {
        Self::replying(Reply::Fault(message.to_string()))
    }

    pub fn with_languages<N: Into<String>, C: Into<String>>(languages: Vec<(N, C)>) -> Self {
        Self {
            languages: Ok(languages
                .into_iter()
                .map(|(n, c)| (n.into(), c.into()))
                .collect()),
            ..Self::text("")
        }
    }

    pub fn failing_listing(message: &str) -> Self {
        Self {
            languages: Err(message.to_string()),
            ..Self::text("")
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        *self.last_from.lock().unwrap() = Some(from.clone());

        let text = match &self.reply {
            Reply::Text(text) => text.clone(),
            Reply::Fault(message) => return Err(TranslateError::ApiError(message.clone())),
            Reply::Unsupported => return Err(TranslateError::UnsupportedLanguage { to }),
            Reply::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                "late".to_string()
            }
        };

        Ok(Translation {
            text,
            from,
            to,
            provider: "mock".to_string(),
            detected_from: None,
        })
    }

    async fn supported_languages(&self) -> Result<Vec<(String, LanguageCode)>, TranslateError> {
        self.languages
            .clone()
            .map_err(TranslateError::ApiError)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "mock".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
