//! Comment text normalization.
//!
//! Cleaning lowercases, strips URLs, drops everything that is not an ASCII
//! letter or whitespace, collapses runs of whitespace, and removes English
//! stop words. The output contains only lowercase words separated by single
//! spaces, which makes the transform idempotent.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

/// English stop words, apostrophes collapsed the way punctuation removal
/// collapses them ("don't" → "dont"). Must stay sorted: lookup is a binary
/// search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "arent", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "couldn", "couldnt", "d", "did", "didn", "didnt", "do",
    "does", "doesn", "doesnt", "doing", "don", "dont", "down", "during", "each", "few", "for",
    "from", "further", "had", "hadn", "hadnt", "has", "hasn", "hasnt", "have", "haven", "havent",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if",
    "in", "into", "is", "isn", "isnt", "it", "its", "itself", "just", "ll", "m", "ma", "me",
    "mightn", "mightnt", "more", "most", "mustn", "mustnt", "my", "myself", "needn", "neednt",
    "no", "nor", "not", "now", "o", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "re", "s", "same", "shan", "shant", "she", "shes",
    "should", "shouldn", "shouldnt", "shouldve", "so", "some", "such", "t", "than", "that",
    "thatll", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "ve", "very", "was", "wasn",
    "wasnt", "we", "were", "weren", "werent", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "won", "wont", "wouldn", "wouldnt", "y", "you", "youd",
    "youll", "your", "youre", "yours", "yourself", "yourselves", "youve",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

/// Clean a raw comment for scoring and word-frequency aggregation.
///
/// Steps, in order: lowercase, strip `http(s)://…` runs, drop every char
/// that is not an ASCII lowercase letter or whitespace, split on whitespace,
/// drop stop words, re-join with single spaces.
///
/// Cleaning already-clean text returns it unchanged.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = URL_RE.replace_all(&lowered, "");
    let letters: String = stripped
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    letters
        .split_whitespace()
        .filter(|w| !is_stop_word(w))
        .collect::<Vec<_>>()
        .join(" ")
}
