pub mod scorer;
pub mod signals;
pub mod weights;

pub use scorer::PopularityScorer;
pub use signals::{extract_signals, Signals, URGENT_WORDS};
pub use weights::SignalWeights;
