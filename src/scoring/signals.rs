use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sentiment::{Sentiment, SentimentAnalyzer};
use crate::text::Tokenizer;

/// Keywords that mark time-sensitive framing. Matched by substring
/// containment in the lower-cased text, so "now" also fires inside
/// "nowhere"; each keyword counts at most once.
pub const URGENT_WORDS: [&str; 6] = ["breaking", "urgent", "alert", "now", "today", "exclusive"];

/// The six sub-scores behind a popularity score, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signals {
    pub emotion: f64,
    pub urgency: f64,
    pub lexical_richness: f64,
    pub readability: f64,
    pub length_balance: f64,
    pub subjectivity: f64,
}

impl Signals {
    /// Named entries in the fixed display order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("Emotion", self.emotion),
            ("Urgency", self.urgency),
            ("Lexical Richness", self.lexical_richness),
            ("Readability", self.readability),
            ("Length Balance", self.length_balance),
            ("Subjectivity", self.subjectivity),
        ]
    }
}

/// Magnitude of sentiment polarity, direction ignored. [0, 1].
pub fn emotion_intensity(sentiment: &Sentiment) -> f64 {
    sentiment.polarity.abs()
}

/// Degree of opinionated language. [0, 1].
pub fn subjectivity_score(sentiment: &Sentiment) -> f64 {
    sentiment.subjectivity
}

/// Number of distinct urgency keywords present. [0, 6].
pub fn urgency_score(text: &str) -> f64 {
    let lowercase = text.to_lowercase();
    URGENT_WORDS
        .iter()
        .filter(|word| lowercase.contains(*word))
        .count() as f64
}

/// Distinct case-folded word tokens over total tokens plus one. The +1 in
/// the denominator keeps the empty case at zero and the ratio strictly
/// below one.
pub fn lexical_richness(tokenizer: &Tokenizer, text: &str) -> f64 {
    let words = tokenizer.words(text);
    let distinct: HashSet<String> = words.iter().map(|word| word.to_lowercase()).collect();
    distinct.len() as f64 / (words.len() as f64 + 1.0)
}

/// Inverse of mean word length: shorter words read easier. Zero when the
/// text has no word tokens at all.
pub fn readability_score(tokenizer: &Tokenizer, text: &str) -> f64 {
    let words = tokenizer.words(text);
    if words.is_empty() {
        return 0.0;
    }
    let total_chars: usize = words.iter().map(|word| word.chars().count()).sum();
    let mean_len = total_chars as f64 / words.len() as f64;
    1.0 / (mean_len + 1.0)
}

/// Step function on character count: headlines under 50 chars are too thin,
/// over 500 chars too heavy, the band between reads best.
pub fn length_balance(text: &str) -> f64 {
    let chars = text.chars().count();
    if chars < 50 {
        0.2
    } else if chars > 500 {
        0.5
    } else {
        1.0
    }
}

/// Computes all six signals over the full text.
pub fn extract_signals(tokenizer: &Tokenizer, analyzer: &SentimentAnalyzer, text: &str) -> Signals {
    let sentiment = analyzer.analyze(text);
    Signals {
        emotion: emotion_intensity(&sentiment),
        urgency: urgency_score(text),
        lexical_richness: lexical_richness(tokenizer, text),
        readability: readability_score(tokenizer, text),
        length_balance: length_balance(text),
        subjectivity: subjectivity_score(&sentiment),
    }
}
