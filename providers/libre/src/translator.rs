use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tolka_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

pub const DEFAULT_API_URL: &str = "https://libretranslate.com";

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    #[serde(rename = "detectedLanguage")]
    detected_language: Option<DetectedLanguage>,
}

#[derive(Debug, Deserialize)]
struct DetectedLanguage {
    language: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
struct LanguageInfo {
    code: String,
    name: String,
}

/// LibreTranslate compatible server
#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl LibreTranslator {
    pub fn new(
        api_url: Option<String>,
        api_key: Option<String>,
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
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let request = TranslateRequest {
            q: text,
            source: &from,
            target: &to,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.api_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        check_status(status, &body, &to)?;

        let (text, detected_from) = parse_translation(&body)?;

        Ok(Translation {
            text,
            from,
            to,
            provider: "libre".to_string(),
            detected_from,
        })
    }

    async fn supported_languages(&self) -> Result<Vec<(String, LanguageCode)>, TranslateError> {
        let response = self
            .client
            .get(format!("{}/languages", self.api_url))
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
            name: "LibreTranslate".to_string(),
            requires_api_key: self.api_key.is_some(),
            free_tier_available: true,
        }
    }
}

pub fn parse_translation(body: &str) -> Result<(String, Option<LanguageCode>), TranslateError> {
    let response: TranslateResponse = serde_json::from_str(body)?;

    Ok((
        response.translated_text.unwrap_or_default(),
        response.detected_language.map(|d| d.language),
    ))
}

/// Map a translate response to the provider error it stands for, reading
/// the error body when the server sent one
pub fn check_status(status: StatusCode, body: &str, to: &str) -> Result<(), TranslateError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslateError::RateLimitExceeded);
    }

    if status == StatusCode::FORBIDDEN {
        return Err(TranslateError::AuthenticationError);
    }

    if !status.is_success() {
        return Err(parse_error(body, to)
            .unwrap_or_else(|| TranslateError::ApiError(format!("HTTP {status}"))));
    }

    Ok(())
}

/// Error body of a failed request, if it has one
pub fn parse_error(body: &str, to: &str) -> Option<TranslateError> {
    let response: ErrorResponse = serde_json::from_str(body).ok()?;
    tracing::debug!("LibreTranslate error: {}", response.error);

    if response.error.to_lowercase().contains("not supported") {
        Some(TranslateError::UnsupportedLanguage { to: to.to_string() })
    } else {
        Some(TranslateError::ApiError(response.error))
    }
}

pub fn parse_languages(body: &str) -> Result<Vec<(String, LanguageCode)>, TranslateError> {
    let languages: Vec<LanguageInfo> = serde_json::from_str(body)?;

    Ok(languages.into_iter().map(|l| (l.name, l.code)).collect())
}
