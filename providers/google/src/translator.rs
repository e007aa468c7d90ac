use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tolka_translator::{
    AUTO_DETECT, LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
};

pub const DEFAULT_API_URL: &str = "https://translate.googleapis.com/translate_a";

#[derive(Debug, Deserialize)]
struct Sentence {
    #[serde(default)]
    trans: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    sentences: Vec<Sentence>,
    #[serde(default)]
    src: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    /// Target languages, code -> name
    tl: BTreeMap<String, String>,
}

/// Free Google Translate web endpoint, no API key
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(
        api_url: Option<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let params = [("sl", from.as_str()), ("tl", to.as_str()), ("q", text)];

        let response = self
            .client
            .post(format!("{}/single?client=gtx&dt=t&dj=1", self.api_url))
            .form(&params)
            .send()
            .await?;

        check_status(response.status(), &to)?;

        let body = response.text().await?;
        let (text, detected_from) = parse_translation(&body)?;
        tracing::debug!("Google translated {} chars to '{}'", text.len(), to);

        Ok(Translation {
            text,
            from,
            to,
            provider: "google".to_string(),
            detected_from,
        })
    }

    async fn supported_languages(&self) -> Result<Vec<(String, LanguageCode)>, TranslateError> {
        let response = self
            .client
            .get(format!("{}/l?client=gtx&hl=en", self.api_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_languages(&body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Map a translate response status to the provider error it stands for
pub fn check_status(status: StatusCode, to: &str) -> Result<(), TranslateError> {
    if status == StatusCode::BAD_REQUEST {
        return Err(TranslateError::UnsupportedLanguage { to: to.to_string() });
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslateError::RateLimitExceeded);
    }

    if !status.is_success() {
        return Err(TranslateError::ApiError(format!("HTTP {status}")));
    }

    Ok(())
}

/// Joined sentence translations plus the detected source language.
/// A response without sentences yields an empty string.
pub fn parse_translation(body: &str) -> Result<(String, Option<LanguageCode>), TranslateError> {
    let response: TranslateResponse = serde_json::from_str(body)?;

    let text = response
        .sentences
        .into_iter()
        .filter_map(|s| s.trans)
        .collect::<String>();

    Ok((text, response.src))
}

/// (name, code) pairs of target languages, without the auto-detect entry
pub fn parse_languages(body: &str) -> Result<Vec<(String, LanguageCode)>, TranslateError> {
    let response: LanguagesResponse = serde_json::from_str(body)?;

    Ok(response
        .tl
        .into_iter()
        .filter(|(code, _)| code != AUTO_DETECT)
        .map(|(code, name)| (name, code))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_mapping() {
        assert!(check_status(StatusCode::OK, "fr").is_ok());

        let err = check_status(StatusCode::BAD_REQUEST, "xx").unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedLanguage { to } if to == "xx"));

        let err = check_status(StatusCode::TOO_MANY_REQUESTS, "fr").unwrap_err();
        assert!(matches!(err, TranslateError::RateLimitExceeded));

        let err = check_status(StatusCode::SERVICE_UNAVAILABLE, "fr").unwrap_err();
        assert_eq!(err.to_string(), "API error: HTTP 503 Service Unavailable");
    }

    #[test]
    fn test_parse_translation_joins_sentences() {
        let body = r#"{
            "sentences": [
                {"trans": "Bonjour le monde. ", "orig": "Hello world. "},
                {"trans": "Comment ça va ?", "orig": "How are you?"},
                {"translit": "..."}
            ],
            "src": "en"
        }"#;

        let (text, src) = parse_translation(body).unwrap();
        assert_eq!(text, "Bonjour le monde. Comment ça va ?");
        assert_eq!(src.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_translation_without_sentences_is_empty() {
        let (text, src) = parse_translation("{}").unwrap();
        assert!(text.is_empty());
        assert!(src.is_none());
    }

    #[test]
    fn test_parse_translation_rejects_garbage() {
        let err = parse_translation("<html>").unwrap_err();
        assert!(matches!(err, TranslateError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_languages_skips_auto() {
        let body = r#"{
            "sl": {"auto": "Detect language", "en": "English"},
            "tl": {"fr": "French", "zh-CN": "Chinese (Simplified)", "auto": "Detect language"}
        }"#;

        let languages = parse_languages(body).unwrap();
        assert_eq!(
            languages,
            vec![
                ("French".to_string(), "fr".to_string()),
                ("Chinese (Simplified)".to_string(), "zh-CN".to_string()),
            ]
        );
    }
}
