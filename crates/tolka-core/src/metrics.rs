/// Character and word counts shown next to input and output text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub characters: usize,
    pub words: usize,
}

impl TextMetrics {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }

    pub fn exceeds(&self, limit: usize) -> bool {
        self.characters > limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_chars_not_bytes() {
        let metrics = TextMetrics::of("héllo  wörld\n");
        assert_eq!(metrics.characters, 13);
        assert_eq!(metrics.words, 2);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(TextMetrics::of("   "), TextMetrics { characters: 3, words: 0 });
        assert!(!TextMetrics::of("").exceeds(0));
    }
}
