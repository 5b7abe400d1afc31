// src/poetry/semantic.rs

//! The semantic spacing analyzer.
//!
//! Scores each word of a line with a weight in `[0, 1]`, boosted for a
//! small emphasis vocabulary and for long words, plus a pause magnitude
//! derived from trailing punctuation. Concrete mode uses the weight to size
//! words and the pause to push the arrangement radius outward.

use bitflags::bitflags;

/// Vocabulary that earns a word the high emphasis weight.
pub const EMPHASIS_VOCABULARY: &[&str] = &[
    "love", "death", "life", "soul", "heart", "dream", "pain", "joy", "hope", "fear",
];

/// Pause markers from strongest to weakest, checked in this order.
const PAUSE_MARKERS: &[(&str, f32)] = &[
    (".", 3.0),
    (",", 2.0),
    (";", 2.0),
    (":", 1.5),
    ("!", 3.0),
    ("?", 3.0),
    ("--", 1.0),
    ("\u{2014}", 1.0),
];

const BASE_WEIGHT: f32 = 0.3;
const VOCABULARY_WEIGHT: f32 = 0.8;
const LONG_WORD_BONUS: f32 = 0.2;

bitflags! {
    /// Why a word reads as emphasized.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EmphasisFlags: u8 {
        const ALL_CAPS    = 1 << 0;
        const EXCLAMATION = 1 << 1;
        const VOCABULARY  = 1 << 2;
        const LONG_WORD   = 1 << 3;
    }
}

/// One analyzed word of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct WordAnalysis {
    pub word: String,
    /// Importance score in `[0, 1]`.
    pub semantic_weight: f32,
    /// Pause magnitude after this word; 0 means none.
    pub pause_after: f32,
    pub flags: EmphasisFlags,
}

impl WordAnalysis {
    /// Visual emphasis: shouting or exclaiming, not mere vocabulary.
    pub fn emphasized(&self) -> bool {
        self.flags
            .intersects(EmphasisFlags::ALL_CAPS | EmphasisFlags::EXCLAMATION)
    }
}

/// Analyzes the words of one line. Whitespace-only fragments are dropped.
pub fn analyze(line: &str) -> Vec<WordAnalysis> {
    line.split_whitespace().map(analyze_word).collect()
}

fn analyze_word(word: &str) -> WordAnalysis {
    let clean: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    let mut flags = EmphasisFlags::empty();
    let mut weight = BASE_WEIGHT;
    if EMPHASIS_VOCABULARY.contains(&clean.as_str()) {
        weight = VOCABULARY_WEIGHT;
        flags |= EmphasisFlags::VOCABULARY;
    }
    if clean.chars().count() > 6 {
        weight += LONG_WORD_BONUS;
        flags |= EmphasisFlags::LONG_WORD;
    }

    if word == word.to_uppercase() {
        flags |= EmphasisFlags::ALL_CAPS;
    }
    if word.contains('!') {
        flags |= EmphasisFlags::EXCLAMATION;
    }

    // Later markers override earlier ones when several are present.
    let mut pause_after = 0.0;
    for &(marker, magnitude) in PAUSE_MARKERS {
        if word.contains(marker) {
            pause_after = magnitude;
        }
    }

    WordAnalysis {
        word: word.to_string(),
        semantic_weight: weight.min(1.0),
        pause_after,
        flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_outweighs_ordinary_words() {
        let analysis = analyze("I feel love.");
        assert_eq!(analysis.len(), 3);
        let love = &analysis[2];
        assert!(love.semantic_weight > analysis[0].semantic_weight);
        assert!(love.semantic_weight > analysis[1].semantic_weight);
        assert!(love.flags.contains(EmphasisFlags::VOCABULARY));
    }

    #[test]
    fn sentence_ending_pause_is_recorded() {
        let analysis = analyze("I feel love.");
        assert_eq!(analysis[2].pause_after, 3.0);
        assert_eq!(analysis[0].pause_after, 0.0);
        assert_eq!(analysis[1].pause_after, 0.0);
    }

    #[test]
    fn pause_tiers_follow_punctuation_strength() {
        let comma = analyze_word("then,");
        let colon = analyze_word("thus:");
        let stop = analyze_word("end.");
        assert!(stop.pause_after > comma.pause_after);
        assert!(comma.pause_after > colon.pause_after);
        assert_eq!(analyze_word("plain").pause_after, 0.0);
    }

    #[test]
    fn long_words_gain_the_length_bonus() {
        let long = analyze_word("unending");
        assert!(long.flags.contains(EmphasisFlags::LONG_WORD));
        assert!((long.semantic_weight - 0.5).abs() < 1e-6);
    }

    #[test]
    fn shouted_words_read_as_emphasized() {
        assert!(analyze_word("STOP").emphasized());
        assert!(analyze_word("now!").emphasized());
        assert!(!analyze_word("quiet").emphasized());
    }

    #[test]
    fn weights_stay_in_unit_interval() {
        for word in ["love.", "HEARTBREAKING!", "a", "...", "unquestionably"] {
            let weight = analyze_word(word).semantic_weight;
            assert!((0.0..=1.0).contains(&weight), "'{}' scored {}", word, weight);
        }
    }
}
