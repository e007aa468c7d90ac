pub mod translator;

pub use translator::LibreTranslator;
