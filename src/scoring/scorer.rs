use crate::config::ScoringConfig;
use crate::scoring::{extract_signals, SignalWeights};
use crate::sentiment::SentimentAnalyzer;
use crate::text::Tokenizer;
use crate::{PopularityOutput, PopularityTier};

/// Aggregates the six text signals into a single popularity score.
///
/// Holds the compiled tokenizer and sentiment lexicons; scoring itself is a
/// pure function of the input text, so one scorer can serve any number of
/// concurrent callers.
pub struct PopularityScorer {
    tokenizer: Tokenizer,
    analyzer: SentimentAnalyzer,
    weights: SignalWeights,
}

impl PopularityScorer {
    pub fn new(weights: SignalWeights) -> Result<Self, String> {
        weights.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            analyzer: SentimentAnalyzer::new()?,
            weights,
        })
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self, String> {
        Self::new(config.weights.clone())
    }

    pub fn weights(&self) -> &SignalWeights {
        &self.weights
    }

    /// Scores the full article text (title and description joined by the
    /// caller). Returns the scalar plus the per-signal breakdown.
    pub fn score(&self, text: &str) -> PopularityOutput {
        let signals = extract_signals(&self.tokenizer, &self.analyzer, text);
        let score = self.weights.combine(&signals);
        PopularityOutput {
            score,
            tier: PopularityTier::from_score(score),
            signals,
        }
    }
}
