//! Query script classification.
//!
//! Decides which dictionary field a query should be matched against
//! by looking at the Unicode code points it contains. Classification
//! is purely lexical and never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Script category of a query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Contains at least one CJK ideograph
    Kanji,
    /// Only hiragana and katakana
    Kana,
    /// Only ASCII letters and whitespace
    English,
    /// Anything else (digits, punctuation, full-width Latin, ...)
    Mixed,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Kanji => "kanji",
            Category::Kana => "kana",
            Category::English => "english",
            Category::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CJK Unified Ideographs block
fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Hiragana and Katakana blocks. The katakana range includes the
/// prolonged sound mark (U+30FC).
fn is_kana(c: char) -> bool {
    ('\u{3040}'..='\u{30FF}').contains(&c)
}

fn is_latin_or_space(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace()
}

/// Classify a query string.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. any kanji anywhere → `Kanji`
/// 2. non-empty and all kana → `Kana`
/// 3. non-empty and all ASCII letters / whitespace → `English`
/// 4. otherwise → `Mixed`
///
/// # Examples
///
/// ```
/// use kotoba::core::script::{classify, Category};
///
/// assert_eq!(classify("食べる123"), Category::Kanji);
/// assert_eq!(classify("たべる"), Category::Kana);
/// assert_eq!(classify("to eat"), Category::English);
/// assert_eq!(classify("eat!"), Category::Mixed);
/// ```
pub fn classify(query: &str) -> Category {
    if query.chars().any(is_kanji) {
        return Category::Kanji;
    }

    if query.is_empty() {
        return Category::Mixed;
    }

    if query.chars().all(is_kana) {
        Category::Kana
    } else if query.chars().all(is_latin_or_space) {
        Category::English
    } else {
        Category::Mixed
    }
}
