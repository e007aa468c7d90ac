pub mod types;

pub use types::{
    AppEvent, FaultKind, LanguageEntry, SourceLanguage, TranslationRequest, TranslationResult,
    TranslationStatus,
};
