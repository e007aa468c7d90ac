use tolka_translator::TranslateError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Language not found: {0}")]
    NotFound(String),

    #[error("Failed to list provider languages: {0}")]
    Provider(#[from] TranslateError),

    #[error("Provider returned no usable languages")]
    Empty,
}
