use std::sync::Arc;
use std::time::Duration;

use tolka_translator::Translator;
use tolka_types::{SourceLanguage, TranslationRequest, TranslationResult, TranslationStatus};

use crate::fault::{classify_fault, fault_message};
use crate::metrics::TextMetrics;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to translate.";
pub const EMPTY_RESULT_MESSAGE: &str = "Translation failed. Please try again.";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_LONG_TEXT_CHARS: usize = 5000;

/// Single-call wrapper around the remote provider.
///
/// Every outcome, including provider faults and timeouts, comes back as a
/// displayable `TranslationResult`. The gateway holds no mutable state.
#[derive(Clone)]
pub struct TranslationGateway {
    translator: Arc<dyn Translator>,
    timeout: Duration,
    source: SourceLanguage,
    long_text_chars: usize,
}

impl TranslationGateway {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            timeout: DEFAULT_TIMEOUT,
            source: SourceLanguage::Auto,
            long_text_chars: DEFAULT_LONG_TEXT_CHARS,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_source(mut self, source: SourceLanguage) -> Self {
        self.source = source;
        self
    }

    pub fn with_long_text_warning(mut self, chars: usize) -> Self {
        self.long_text_chars = chars;
        self
    }

    pub fn source(&self) -> &SourceLanguage {
        &self.source
    }

    pub fn provider_name(&self) -> String {
        self.translator.metadata().name
    }

    /// Translate with the gateway's source language setting
    pub async fn translate(&self, source_text: &str, target_code: &str) -> TranslationResult {
        let request =
            TranslationRequest::new(source_text, target_code).with_source(self.source.clone());
        self.translate_request(&request).await
    }

    pub async fn translate_request(&self, request: &TranslationRequest) -> TranslationResult {
        let text = request.source_text.trim();

        if text.is_empty() {
            tracing::debug!("Empty input, nothing to translate");
            return TranslationResult::status_message(
                EMPTY_INPUT_MESSAGE,
                TranslationStatus::EmptyInput,
            );
        }

        let metrics = TextMetrics::of(text);
        if metrics.exceeds(self.long_text_chars) {
            tracing::warn!(
                "Input is {} characters, above the recommended {}",
                metrics.characters,
                self.long_text_chars
            );
        }

        tracing::debug!(
            "Dispatching {} chars to {} ({} -> {})",
            metrics.characters,
            self.provider_name(),
            request.source_language.code(),
            request.target_code
        );

        let call = self.translator.translate(
            text,
            request.source_language.code().to_string(),
            request.target_code.clone(),
        );

        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(translation)) if translation.text.trim().is_empty() => {
                tracing::warn!("Provider returned an empty translation");
                TranslationResult::status_message(
                    EMPTY_RESULT_MESSAGE,
                    TranslationStatus::EmptyResult,
                )
            }
            Ok(Ok(translation)) => TranslationResult::translated(translation.text),
            Ok(Err(e)) => Self::fault(&e),
            Err(_) => Self::fault(&format!("request timed out after {:?}", self.timeout)),
        }
    }

    fn fault(error: &dyn std::fmt::Display) -> TranslationResult {
        let raw = error.to_string();
        let kind = classify_fault(&raw);
        tracing::warn!("Translation failed ({kind:?}): {raw}");

        TranslationResult::failed(fault_message(kind, &raw), kind, raw)
    }
}
