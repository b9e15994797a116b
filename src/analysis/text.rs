//! Corpus text normalization shared by the keyword and sentiment engines

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

static NON_HANGUL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^가-힣\s]").expect("hangul pattern is valid"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static HANGUL_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[가-힣]{2,}").expect("word pattern is valid"));

/// Strips tags, blanks out everything except Hangul syllables and whitespace,
/// then collapses and trims whitespace
pub fn normalize(text: &str) -> String {
    let text = TAG.replace_all(text, "");
    let text = NON_HANGUL.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Maximal runs of two or more Hangul syllables, in order
pub fn hangul_words(text: &str) -> impl Iterator<Item = &str> {
    HANGUL_WORD.find_iter(text).map(|m| m.as_str())
}
