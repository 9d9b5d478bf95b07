use aho_corasick::AhoCorasick;

/// Polarity and subjectivity for a piece of text.
///
/// Polarity is signed sentiment strength in [-1, 1]; subjectivity is the
/// degree of opinionated language in [0, 1]. Empty or neutral text yields
/// zero for both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

const POSITIVE_WORDS: [&str; 20] = [
    "good",
    "great",
    "excellent",
    "love",
    "amazing",
    "wonderful",
    "happy",
    "fantastic",
    "awesome",
    "best",
    "win",
    "success",
    "breakthrough",
    "hope",
    "triumph",
    "celebrated",
    "soar",
    "remarkable",
    "historic",
    "thrilled",
];

const NEGATIVE_WORDS: [&str; 20] = [
    "bad",
    "terrible",
    "awful",
    "hate",
    "horrible",
    "worst",
    "sad",
    "angry",
    "disappointed",
    "poor",
    "crisis",
    "fear",
    "death",
    "disaster",
    "collapse",
    "scandal",
    "threat",
    "tragic",
    "failure",
    "outrage",
];

const SUBJECTIVE_WORDS: [&str; 20] = [
    "believe",
    "think",
    "feel",
    "seems",
    "appears",
    "likely",
    "probably",
    "perhaps",
    "maybe",
    "should",
    "could",
    "might",
    "opinion",
    "argue",
    "claim",
    "suggest",
    "insist",
    "reportedly",
    "allegedly",
    "absolutely",
];

/// Lexicon-based sentiment analyzer.
///
/// Stateless after construction and CPU-bound, so a single instance can be
/// shared across concurrent callers.
pub struct SentimentAnalyzer {
    positive: AhoCorasick,
    negative: AhoCorasick,
    subjective: AhoCorasick,
}

impl SentimentAnalyzer {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            positive: build_matcher(&POSITIVE_WORDS, "positive")?,
            negative: build_matcher(&NEGATIVE_WORDS, "negative")?,
            subjective: build_matcher(&SUBJECTIVE_WORDS, "subjective")?,
        })
    }

    pub fn analyze(&self, text: &str) -> Sentiment {
        let positive = self.positive.find_iter(text).count() as f64;
        let negative = self.negative.find_iter(text).count() as f64;
        let subjective = self.subjective.find_iter(text).count() as f64;

        // Laplace smoothing keeps polarity off the +/-1 rails and makes the
        // zero-hit case well defined.
        let polarity = (positive - negative) / (positive + negative + 1.0);

        let opinionated = positive + negative + subjective;
        let subjectivity = opinionated / (opinionated + 2.0);

        Sentiment {
            polarity,
            subjectivity,
        }
    }
}

fn build_matcher(words: &[&str], label: &str) -> Result<AhoCorasick, String> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(words)
        .map_err(|err| format!("failed to build {} sentiment matcher: {}", label, err))
}
