//! Word frequency summary for plain text.

use std::collections::HashMap;
use std::fmt::Write as _;

/// Word counts over a text, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordFrequencyReport {
    /// Number of whitespace-delimited tokens.
    pub total_words: usize,
    /// Each distinct token with its count, in order of first appearance.
    pub frequencies: Vec<(String, usize)>,
}

impl WordFrequencyReport {
    /// Number of distinct tokens.
    #[must_use]
    pub fn unique_words(&self) -> usize {
        self.frequencies.len()
    }

    /// Count for `word`, if it occurs.
    #[must_use]
    pub fn count_of(&self, word: &str) -> Option<usize> {
        self.frequencies
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }

    /// Renders the report file body.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total words: {}", self.total_words);
        let _ = writeln!(out, "Unique words: {}", self.unique_words());
        out.push_str("Word frequencies:\n");
        for (word, count) in &self.frequencies {
            let _ = writeln!(out, "{word}: {count}");
        }
        out
    }
}

/// Counts whitespace-delimited tokens in `text`.
///
/// Tokens are compared byte-for-byte: no case folding, no punctuation stripping.
#[must_use]
pub fn summarize_text(text: &str) -> WordFrequencyReport {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut frequencies: Vec<(String, usize)> = Vec::new();
    let mut total_words = 0;

    for word in text.split_whitespace() {
        total_words += 1;
        match index.get(word) {
            Some(&slot) => frequencies[slot].1 += 1,
            None => {
                index.insert(word, frequencies.len());
                frequencies.push((word.to_string(), 1));
            }
        }
    }

    WordFrequencyReport {
        total_words,
        frequencies,
    }
}
