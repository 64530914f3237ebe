//! Lexicon polarity scorer for free-form comments.

/// General-purpose word weights.
///
/// Keys are lowercase single words, sorted so lookup can binary-search.
/// Values in `(0.0, 1.0]` are positive, in `[-1.0, 0.0)` are negative. The
/// final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    ("amazing", 0.7),
    ("angry", -0.6),
    ("annoyed", -0.5),
    ("annoying", -0.5),
    ("appalling", -0.8),
    ("appreciate", 0.4),
    ("average", -0.2),
    ("awesome", 0.7),
    ("awful", -0.8),
    ("bad", -0.5),
    ("beautiful", 0.6),
    ("best", 0.6),
    ("better", 0.3),
    ("brilliant", 0.7),
    ("broken", -0.6),
    ("buggy", -0.6),
    ("cheap", -0.3),
    ("clean", 0.3),
    ("comfortable", 0.4),
    ("complaint", -0.4),
    ("confusing", -0.4),
    ("convenient", 0.4),
    ("crap", -0.7),
    ("crash", -0.6),
    ("crashed", -0.6),
    ("defective", -0.7),
    ("delicious", 0.6),
    ("delight", 0.6),
    ("delighted", 0.7),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("disaster", -0.8),
    ("disgusting", -0.8),
    ("dreadful", -0.8),
    ("easy", 0.4),
    ("effective", 0.4),
    ("efficient", 0.4),
    ("enjoy", 0.5),
    ("enjoyed", 0.5),
    ("excellent", 0.8),
    ("exceptional", 0.7),
    ("excited", 0.5),
    ("expensive", -0.3),
    ("fail", -0.6),
    ("failed", -0.6),
    ("failure", -0.6),
    ("fantastic", 0.8),
    ("fast", 0.3),
    ("faulty", -0.6),
    ("favorite", 0.5),
    ("fine", 0.2),
    ("flawless", 0.7),
    ("fresh", 0.3),
    ("friendly", 0.5),
    ("frustrated", -0.6),
    ("frustrating", -0.6),
    ("fun", 0.5),
    ("garbage", -0.7),
    ("glad", 0.4),
    ("good", 0.5),
    ("gorgeous", 0.7),
    ("great", 0.6),
    ("happy", 0.6),
    ("hate", -0.7),
    ("hated", -0.7),
    ("helpful", 0.5),
    ("horrible", -0.8),
    ("impressed", 0.6),
    ("impressive", 0.6),
    ("incredible", 0.8),
    ("issue", -0.3),
    ("issues", -0.3),
    ("junk", -0.6),
    ("lacking", -0.4),
    ("lag", -0.4),
    ("laggy", -0.5),
    ("late", -0.3),
    ("love", 0.7),
    ("loved", 0.7),
    ("lovely", 0.6),
    ("mediocre", -0.4),
    ("mess", -0.5),
    ("missing", -0.3),
    ("nasty", -0.6),
    ("nice", 0.4),
    ("noisy", -0.3),
    ("outstanding", 0.8),
    ("pathetic", -0.7),
    ("perfect", 0.8),
    ("pleasant", 0.5),
    ("pleased", 0.5),
    ("poor", -0.5),
    ("problem", -0.4),
    ("problems", -0.4),
    ("quality", 0.3),
    ("quick", 0.3),
    ("recommend", 0.5),
    ("recommended", 0.5),
    ("refund", -0.4),
    ("regret", -0.6),
    ("reliable", 0.5),
    ("rude", -0.6),
    ("sad", -0.4),
    ("satisfied", 0.5),
    ("scam", -0.8),
    ("slow", -0.4),
    ("smooth", 0.4),
    ("solid", 0.3),
    ("stunning", 0.7),
    ("sucks", -0.7),
    ("superb", 0.8),
    ("sweet", 0.4),
    ("terrible", -0.8),
    ("terrific", 0.7),
    ("thanks", 0.3),
    ("thrilled", 0.7),
    ("trash", -0.7),
    ("ugly", -0.5),
    ("unacceptable", -0.7),
    ("unhappy", -0.6),
    ("unreliable", -0.6),
    ("unusable", -0.7),
    ("upset", -0.5),
    ("useful", 0.4),
    ("useless", -0.7),
    ("value", 0.3),
    ("waste", -0.6),
    ("wasted", -0.6),
    ("win", 0.4),
    ("wonderful", 0.8),
    ("works", 0.3),
    ("worse", -0.5),
    ("worst", -0.8),
    ("worth", 0.4),
    ("wow", 0.6),
    ("wrong", -0.4),
];

/// Score a text string against the lexicon.
///
/// Splits text into whitespace-delimited words, trims non-alphabetic edges,
/// lowercases, sums matching weights, and clamps the result to
/// `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn polarity_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Ok(idx) = LEXICON.binary_search_by_key(&w.as_str(), |&(word, _)| word) {
            score += LEXICON[idx].1;
        }
    }
    score.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_is_sorted_for_binary_search() {
        assert!(
            LEXICON.windows(2).all(|pair| pair[0].0 < pair[1].0),
            "LEXICON must be sorted and deduplicated by word"
        );
    }

    #[test]
    fn lexicon_weights_are_in_range() {
        assert!(LEXICON
            .iter()
            .all(|&(_, w)| (-1.0..=1.0).contains(&w) && w != 0.0));
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(polarity_score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(polarity_score("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(polarity_score("the brown fox jumps over fences"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = polarity_score("delivery was great");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = polarity_score("app keeps crashing and crashed again");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn mixed_text_returns_intermediate() {
        let score = polarity_score("great product but terrible support");
        // great (+0.6) + terrible (-0.8) = -0.2
        assert!(
            score > -1.0 && score < 1.0,
            "expected intermediate score, got {score}"
        );
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let text = "amazing excellent fantastic perfect wonderful superb outstanding incredible";
        assert_eq!(polarity_score(text), 1.0);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let text = "awful terrible horrible disaster worst disgusting appalling dreadful";
        assert_eq!(polarity_score(text), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let score = polarity_score("great!");
        assert!(
            score > 0.0,
            "expected positive score for 'great!', got {score}"
        );
    }

    #[test]
    fn uppercase_words_match() {
        assert!(polarity_score("GREAT") > 0.0);
    }
}
