use std::collections::HashSet;

use tolka_translator::Translator;
use tolka_types::LanguageEntry;
use unicode_normalization::UnicodeNormalization;

use crate::error::CatalogError;
use crate::fallback::fallback_catalog;

/// Target languages offered to the user, sorted by display name.
///
/// Sorting uses `Ord` for `String`, i.e. code point order. Names are
/// title-cased before sorting, so ASCII names come out alphabetical,
/// `"Chinese (Simplified)"` precedes `"Corsican"`, and names starting with
/// a non-ASCII letter sort after every ASCII name.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

impl LanguageCatalog {
    /// Build from display-ready entries. Entries with an empty name or code
    /// are dropped, the first entry wins on duplicate names.
    pub fn from_entries(entries: impl IntoIterator<Item = LanguageEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut entries: Vec<LanguageEntry> = entries
            .into_iter()
            .filter(|e| !e.display_name.is_empty() && !e.code.is_empty())
            .filter(|e| {
                let fresh = seen.insert(e.display_name.clone());
                if !fresh {
                    tracing::debug!("Duplicate language name dropped: {} ({})", e.display_name, e.code);
                }
                fresh
            })
            .collect();

        entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));

        Self { entries }
    }

    /// Build from raw provider (name, code) pairs, normalizing names first
    pub fn from_pairs<N, C>(pairs: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: AsRef<str>,
        C: AsRef<str>,
    {
        Self::from_entries(pairs.into_iter().map(|(name, code)| {
            LanguageEntry::new(display_name(name.as_ref()), code.as_ref().trim())
        }))
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.get(display_name).is_some()
    }

    pub fn get(&self, display_name: &str) -> Option<&LanguageEntry> {
        self.entries
            .binary_search_by(|e| e.display_name.as_str().cmp(display_name))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Provider code for a display name
    pub fn lookup(&self, display_name: &str) -> Result<&str, CatalogError> {
        self.get(display_name)
            .map(|e| e.code.as_str())
            .ok_or_else(|| CatalogError::NotFound(display_name.to_string()))
    }

    pub fn find_by_code(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
    }

    /// Free-text selection: exact name, then name ignoring case, then code
    pub fn resolve(&self, query: &str) -> Option<&LanguageEntry> {
        let query = query.trim();
        self.get(query)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.display_name.eq_ignore_ascii_case(query))
            })
            .or_else(|| self.find_by_code(query))
    }

    /// First of `preferred` present in the catalog, else the first entry
    pub fn default_selection<S: AsRef<str>>(&self, preferred: &[S]) -> Option<&LanguageEntry> {
        preferred
            .iter()
            .find_map(|name| self.get(name.as_ref()))
            .or_else(|| self.entries.first())
    }

    /// Entries whose name or code contains `query`, ignoring case
    pub fn filter(&self, query: &str) -> Vec<&LanguageEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.entries.iter().collect();
        }

        self.entries
            .iter()
            .filter(|e| {
                e.display_name.to_lowercase().contains(&query)
                    || e.code.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// Ask the provider for its language list
pub async fn fetch_catalog(translator: &dyn Translator) -> Result<LanguageCatalog, CatalogError> {
    let pairs = translator.supported_languages().await?;
    tracing::debug!("Provider listed {} languages", pairs.len());

    let catalog = LanguageCatalog::from_pairs(pairs);
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(catalog)
}

/// Provider list when available, built-in list otherwise. Never empty.
pub async fn build_catalog(translator: Option<&dyn Translator>) -> LanguageCatalog {
    let Some(translator) = translator else {
        return fallback_catalog();
    };

    match fetch_catalog(translator).await {
        Ok(catalog) => {
            tracing::info!(
                "Loaded {} languages from {}",
                catalog.len(),
                translator.metadata().name
            );
            catalog
        }
        Err(e) => {
            tracing::warn!("Using built-in language list: {e}");
            fallback_catalog()
        }
    }
}

/// NFC, trimmed, title-cased name
fn display_name(raw: &str) -> String {
    let normalized: String = raw.trim().nfc().collect();
    title_case(&normalized)
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTranslator;

    fn names(catalog: &LanguageCatalog) -> Vec<&str> {
        catalog.iter().map(|e| e.display_name.as_str()).collect()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chinese (simplified)"), "Chinese (Simplified)");
        assert_eq!(title_case("HAITIAN creole"), "Haitian Creole");
        assert_eq!(title_case("íslenska"), "Íslenska");
        assert_eq!(title_case("english"), "English");
    }

    #[test]
    fn test_from_pairs_sorts_any_input_order() {
        let pairs = vec![
            ("zulu", "zu"),
            ("chinese (traditional)", "zh-tw"),
            ("english", "en"),
            ("corsican", "co"),
            ("chinese (simplified)", "zh-cn"),
            ("afrikaans", "af"),
        ];
        let forward = LanguageCatalog::from_pairs(pairs.clone());
        let backward = LanguageCatalog::from_pairs(pairs.into_iter().rev());

        let expected = vec![
            "Afrikaans",
            "Chinese (Simplified)",
            "Chinese (Traditional)",
            "Corsican",
            "English",
            "Zulu",
        ];
        assert_eq!(names(&forward), expected);
        assert_eq!(names(&backward), expected);
    }

    #[test]
    fn test_from_pairs_drops_blank_and_duplicate_entries() {
        let catalog = LanguageCatalog::from_pairs(vec![
            ("french", "fr"),
            ("  ", "xx"),
            ("german", ""),
            ("FRENCH", "fr-ca"),
        ]);

        assert_eq!(names(&catalog), vec!["French"]);
        assert_eq!(catalog.lookup("French").unwrap(), "fr");
    }

    #[test]
    fn test_lookup_not_found() {
        let catalog = fallback_catalog();
        let err = catalog.lookup("Klingon").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(name) if name == "Klingon"));
    }

    #[test]
    fn test_find_by_code() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.find_by_code("FR").unwrap().display_name, "French");
        assert!(catalog.find_by_code("xx").is_none());
    }

    #[test]
    fn test_resolve_free_text() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.resolve("French").unwrap().code, "fr");
        assert_eq!(catalog.resolve(" haitian creole ").unwrap().code, "ht");
        assert_eq!(catalog.resolve("zh-TW").unwrap().display_name, "Chinese (Traditional)");
        assert!(catalog.resolve("Klingon").is_none());
    }

    #[test]
    fn test_default_selection_prefers_english() {
        let catalog = fallback_catalog();
        let selected = catalog.default_selection(&["English", "Spanish"]).unwrap();
        assert_eq!(selected.display_name, "English");
    }

    #[test]
    fn test_default_selection_falls_back_to_spanish_then_first() {
        let catalog = LanguageCatalog::from_pairs(vec![("spanish", "es"), ("basque", "eu")]);
        let selected = catalog.default_selection(&["English", "Spanish"]).unwrap();
        assert_eq!(selected.display_name, "Spanish");

        let catalog = LanguageCatalog::from_pairs(vec![("welsh", "cy"), ("basque", "eu")]);
        let selected = catalog.default_selection(&["English", "Spanish"]).unwrap();
        assert_eq!(selected.display_name, "Basque");
    }

    #[test]
    fn test_filter_is_subset_and_resolvable() {
        let catalog = fallback_catalog();

        let hits = catalog.filter("chin");
        assert_eq!(hits.len(), 2);
        for entry in &hits {
            assert_eq!(catalog.lookup(&entry.display_name).unwrap(), entry.code);
        }

        assert_eq!(catalog.filter("").len(), catalog.len());
        assert!(catalog.filter("zz-nothing").is_empty());
        assert_eq!(catalog.filter("ZH-TW")[0].display_name, "Chinese (Traditional)");
    }

    #[tokio::test]
    async fn test_fetch_catalog_normalizes_provider_list() {
        let mock = MockTranslator::with_languages(vec![("german", "de"), ("english", "en")]);
        let catalog = fetch_catalog(&mock).await.unwrap();

        assert_eq!(names(&catalog), vec!["English", "German"]);
    }

    #[tokio::test]
    async fn test_build_catalog_falls_back_on_provider_error() {
        let mock = MockTranslator::failing_listing("connection refused");
        let catalog = build_catalog(Some(&mock as &dyn Translator)).await;

        assert!(!catalog.is_empty());
        assert!(catalog.contains("English"));
    }

    #[tokio::test]
    async fn test_build_catalog_falls_back_on_empty_listing() {
        let mock = MockTranslator::with_languages(Vec::<(&str, &str)>::new());
        assert!(matches!(fetch_catalog(&mock).await, Err(CatalogError::Empty)));

        let catalog = build_catalog(Some(&mock as &dyn Translator)).await;
        assert!(catalog.contains("Spanish"));
    }

    #[tokio::test]
    async fn test_build_catalog_without_provider() {
        let catalog = build_catalog(None).await;
        assert_eq!(catalog.len(), crate::fallback::FALLBACK_LANGUAGES.len());
    }
}
