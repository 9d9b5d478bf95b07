use serde::{Deserialize, Serialize};

use crate::scoring::Signals;

/// Weights applied to the six signals. The defaults are the production
/// weights and sum to exactly 1.0; `validate` enforces the same invariant
/// for configured overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub emotion: f64,
    pub urgency: f64,
    pub lexical_richness: f64,
    pub readability: f64,
    pub length_balance: f64,
    pub subjectivity: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            emotion: 0.25,
            urgency: 0.20,
            lexical_richness: 0.20,
            readability: 0.15,
            length_balance: 0.10,
            subjectivity: 0.10,
        }
    }
}

impl SignalWeights {
    pub fn sum(&self) -> f64 {
        self.emotion
            + self.urgency
            + self.lexical_richness
            + self.readability
            + self.length_balance
            + self.subjectivity
    }

    pub fn validate(&self) -> Result<(), String> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(format!("signal weights must sum to 1.0, got {}", sum));
        }
        Ok(())
    }

    /// Weighted sum of the signals. No rounding here; display rounding is
    /// the caller's concern.
    pub fn combine(&self, signals: &Signals) -> f64 {
        self.emotion * signals.emotion
            + self.urgency * signals.urgency
            + self.lexical_richness * signals.lexical_richness
            + self.readability * signals.readability
            + self.length_balance * signals.length_balance
            + self.subjectivity * signals.subjectivity
    }
}
