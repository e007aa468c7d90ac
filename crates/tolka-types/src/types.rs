use serde::{Deserialize, Serialize};

/// A selectable target language: what the user sees and what the provider expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub display_name: String,
    pub code: String,
}

impl LanguageEntry {
    pub fn new(display_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            code: code.into(),
        }
    }
}

/// Source language sent along with a translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLanguage {
    /// Let the provider detect the input language
    #[default]
    Auto,
    Fixed(String),
}

impl SourceLanguage {
    /// Value passed to the provider
    pub fn code(&self) -> &str {
        match self {
            SourceLanguage::Auto => "auto",
            SourceLanguage::Fixed(code) => code,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLanguage::Auto)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_code: String,
    pub source_language: SourceLanguage,
}

impl TranslationRequest {
    pub fn new(source_text: impl Into<String>, target_code: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_code: target_code.into(),
            source_language: SourceLanguage::Auto,
        }
    }

    pub fn with_source(mut self, source_language: SourceLanguage) -> Self {
        self.source_language = source_language;
        self
    }
}

/// Advisory failure class, only used to pick the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    UnsupportedTarget,
    Connectivity,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationStatus {
    Translated,
    EmptyInput,
    EmptyResult,
    Failed(FaultKind),
}

/// Outcome of one translate action. `text` is always displayable,
/// whether it holds the translation or a status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
    pub status: TranslationStatus,
    /// Raw fault description, kept next to the classification
    pub fault: Option<String>,
}

impl TranslationResult {
    pub fn translated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: TranslationStatus::Translated,
            fault: None,
        }
    }

    pub fn status_message(text: impl Into<String>, status: TranslationStatus) -> Self {
        Self {
            text: text.into(),
            status,
            fault: None,
        }
    }

    pub fn failed(text: impl Into<String>, kind: FaultKind, fault: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: TranslationStatus::Failed(kind),
            fault: Some(fault.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TranslationStatus::Translated
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A line typed into the shell
    TextInput(String),
    /// Explicit translate action
    Translate,
    SelectLanguage(String),
    /// Input line stored for the next explicit translate
    InputBuffered {
        characters: usize,
    },
    ListLanguages(Option<String>),
    Clear,
    ShowStats,
    ShowTranslation {
        result: TranslationResult,
        source: SourceLanguage,
        target: LanguageEntry,
        input_chars: usize,
        input_words: usize,
        translation_count: u64,
    },
    ShowLanguages {
        entries: Vec<LanguageEntry>,
        selected: String,
    },
    Status(String),
    Quit,
}
