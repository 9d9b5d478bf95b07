pub mod config;
pub mod encoder;
pub mod scoring;
pub mod sentiment;
pub mod text;

pub use scoring::{PopularityScorer, SignalWeights, Signals};

/// Separator the caller places between title and description. A readable
/// delimiter only; nothing downstream parses it back out.
pub const TEXT_SEPARATOR: &str = " [SEP] ";

/// A news article as supplied by the caller: title and description as two
/// separate strings, joined for scoring.
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub title: String,
    pub description: String,
}

impl ArticleInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn full_text(&self) -> String {
        format!("{}{}{}", self.title, TEXT_SEPARATOR, self.description)
    }
}

/// Coarse label for a score, for human-readable output only. The scalar is
/// relative, not a calibrated probability, so the bands are editorial.
#[derive(Debug, Clone, Copy)]
pub enum PopularityTier {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl PopularityTier {
    pub fn from_score(score: f64) -> Self {
        if score < 0.25 {
            PopularityTier::Low
        } else if score < 0.45 {
            PopularityTier::Moderate
        } else if score < 0.70 {
            PopularityTier::High
        } else {
            PopularityTier::VeryHigh
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PopularityTier::Low => "Low",
            PopularityTier::Moderate => "Moderate",
            PopularityTier::High => "High",
            PopularityTier::VeryHigh => "Very High",
        }
    }
}

/// Score plus the per-signal breakdown. Created fresh per call and owned by
/// the caller; there is no shared state between invocations.
#[derive(Debug, Clone)]
pub struct PopularityOutput {
    pub score: f64,
    pub tier: PopularityTier,
    pub signals: Signals,
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
