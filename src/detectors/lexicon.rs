//! Lexicon matching
//!
//! Case-insensitive whole-word / fixed-phrase counting over a small word
//! list. Alternatives are tried longest first so that "i'm" wins over "i"
//! and "it depends" wins over "it".

use regex::Regex;

#[derive(Debug, Clone)]
pub struct Lexicon {
    pattern: Regex,
}

impl Lexicon {
    pub fn new(terms: &[&str]) -> Self {
        let mut sorted: Vec<&str> = terms.to_vec();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = sorted
            .iter()
            .map(|t| regex::escape(t).replace(' ', r"\s+"))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
            .expect("lexicon terms are escaped literals");
        Self { pattern }
    }

    /// A raw regular expression, for markers that are not plain word lists.
    pub fn from_pattern(pattern: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("lexicon pattern must be valid"),
        }
    }

    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Folds typographic apostrophes so contractions match the word lists.
pub fn normalize(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'")
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
