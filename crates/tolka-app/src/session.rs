use tolka_core::{LanguageCatalog, TextMetrics};
use tolka_types::{LanguageEntry, TranslationResult, TranslationStatus};

/// Per-shell state. Lives only as long as the shell, nothing is persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub input: String,
    pub target: LanguageEntry,
    pub last_input: Option<String>,
    pub last_result: Option<TranslationResult>,
    pub translation_count: u64,
    /// Next typed line starts a new input
    submitted: bool,
}

impl SessionState {
    pub fn new(target: LanguageEntry) -> Self {
        Self {
            input: String::new(),
            target,
            last_input: None,
            last_result: None,
            translation_count: 0,
            submitted: false,
        }
    }

    /// Append a line to the pending input
    pub fn push_line(&mut self, line: &str) {
        if self.submitted {
            self.input.clear();
            self.submitted = false;
        }

        if !self.input.is_empty() {
            self.input.push('\n');
        }
        self.input.push_str(line);
    }

    pub fn replace_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.submitted = false;
    }

    /// Pick a target by name or code. Unknown names leave the selection as is.
    pub fn select(&mut self, catalog: &LanguageCatalog, query: &str) -> Option<&LanguageEntry> {
        let entry = catalog.resolve(query)?.clone();
        self.target = entry;
        Some(&self.target)
    }

    /// Typed text that no translate has picked up yet
    pub fn has_pending_input(&self) -> bool {
        !self.submitted && !self.input.trim().is_empty()
    }

    /// Store an outcome. Blank input is not counted as a translation.
    pub fn record(&mut self, result: TranslationResult) {
        if result.status != TranslationStatus::EmptyInput {
            self.translation_count += 1;
            self.last_input = Some(self.input.clone());
            self.submitted = true;
        }
        self.last_result = Some(result);
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.last_input = None;
        self.last_result = None;
        self.submitted = false;
    }

    pub fn input_metrics(&self) -> TextMetrics {
        TextMetrics::of(&self.input)
    }
}
