pub mod catalog;
pub mod error;
pub mod fallback;
pub mod fault;
pub mod gateway;
pub mod metrics;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{LanguageCatalog, build_catalog, fetch_catalog};
pub use error::CatalogError;
pub use fallback::fallback_catalog;
pub use fault::{FAILURE_MARKER, classify_fault, fault_message};
pub use gateway::{EMPTY_INPUT_MESSAGE, EMPTY_RESULT_MESSAGE, TranslationGateway};
pub use metrics::TextMetrics;
