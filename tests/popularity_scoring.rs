use popularity_sim::scoring::signals;
use popularity_sim::scoring::{PopularityScorer, SignalWeights, Signals};
use popularity_sim::sentiment::SentimentAnalyzer;
use popularity_sim::text::Tokenizer;
use popularity_sim::{ArticleInput, TEXT_SEPARATOR};

fn scorer() -> PopularityScorer {
    PopularityScorer::new(SignalWeights::default()).expect("scorer construction")
}

#[test]
fn default_weights_sum_to_one() {
    let weights = SignalWeights::default();
    assert!((weights.sum() - 1.0).abs() < 1e-12);
    assert!(weights.validate().is_ok());
}

#[test]
fn unbalanced_weights_are_rejected() {
    let mut weights = SignalWeights::default();
    weights.emotion = 0.5;
    assert!(weights.validate().is_err());
    assert!(PopularityScorer::new(weights).is_err());
}

#[test]
fn scorer_holds_validated_weights() {
    let scorer = scorer();
    assert!((scorer.weights().sum() - 1.0).abs() < 1e-12);
    assert_eq!(*scorer.weights(), SignalWeights::default());
}

#[test]
fn signals_serialize_in_display_order() {
    let signals = Signals {
        emotion: 0.1,
        urgency: 2.0,
        lexical_richness: 0.3,
        readability: 0.4,
        length_balance: 1.0,
        subjectivity: 0.5,
    };

    let payload = serde_json::to_string(&signals).expect("serialize signals");
    let keys = [
        "emotion",
        "urgency",
        "lexical_richness",
        "readability",
        "length_balance",
        "subjectivity",
    ];

    let mut last = 0;
    for key in keys {
        let position = payload
            .find(&format!("\"{}\"", key))
            .expect("signal key present");
        assert!(position >= last);
        last = position;
    }
}

#[test]
fn empty_text_scores_length_floor_only() {
    let output = scorer().score("");

    assert!((output.signals.emotion - 0.0).abs() < 1e-12);
    assert!((output.signals.urgency - 0.0).abs() < 1e-12);
    assert!((output.signals.lexical_richness - 0.0).abs() < 1e-12);
    assert!((output.signals.readability - 0.0).abs() < 1e-12);
    assert!((output.signals.length_balance - 0.2).abs() < 1e-12);
    assert!((output.signals.subjectivity - 0.0).abs() < 1e-12);
    assert!((output.score - 0.02).abs() < 1e-9);
}

#[test]
fn repeated_calls_are_deterministic() {
    let scorer = scorer();
    let text = "Breaking news today: markets soar on exclusive report";

    let first = scorer.score(text);
    let second = scorer.score(text);

    assert!((first.score - second.score).abs() < 1e-15);
    assert_eq!(first.signals, second.signals);
}

#[test]
fn urgency_counts_every_keyword() {
    let count = signals::urgency_score("Breaking: urgent alert now, today exclusive!");
    assert!((count - 6.0).abs() < 1e-12);
}

#[test]
fn urgency_matches_substrings_not_whole_words() {
    // "now" fires inside "Nowhere"; keyword matching is containment.
    let count = signals::urgency_score("Nowhere to go today");
    assert!((count - 2.0).abs() < 1e-12);
}

#[test]
fn length_balance_boundaries() {
    assert!((signals::length_balance(&"a".repeat(49)) - 0.2).abs() < 1e-12);
    assert!((signals::length_balance(&"a".repeat(50)) - 1.0).abs() < 1e-12);
    assert!((signals::length_balance(&"a".repeat(500)) - 1.0).abs() < 1e-12);
    assert!((signals::length_balance(&"a".repeat(501)) - 0.5).abs() < 1e-12);
}

#[test]
fn lexical_richness_stays_below_one() {
    let tokenizer = Tokenizer::new().expect("tokenizer");

    for text in [
        "",
        "one two three",
        "go go go",
        "a b c d e f g h i j k l m n o p",
        "word",
    ] {
        let richness = signals::lexical_richness(&tokenizer, text);
        assert!(richness >= 0.0);
        assert!(richness < 1.0);
    }

    let richness = signals::lexical_richness(&tokenizer, "one two three");
    assert!((richness - 0.75).abs() < 1e-12);
}

#[test]
fn lexical_richness_folds_case() {
    let tokenizer = Tokenizer::new().expect("tokenizer");
    let richness = signals::lexical_richness(&tokenizer, "The the THE");
    assert!((richness - 0.25).abs() < 1e-12);
}

#[test]
fn readability_guards_empty_token_sets() {
    let tokenizer = Tokenizer::new().expect("tokenizer");

    assert!((signals::readability_score(&tokenizer, "!!! ??? ...") - 0.0).abs() < 1e-12);
    assert!((signals::readability_score(&tokenizer, "") - 0.0).abs() < 1e-12);

    // Two two-char tokens: 1 / (2 + 1).
    let score = signals::readability_score(&tokenizer, "aa aa");
    assert!((score - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn readability_stays_within_unit_interval() {
    let tokenizer = Tokenizer::new().expect("tokenizer");

    for text in ["a", "short words here", "antidisestablishmentarianism", "x y"] {
        let score = signals::readability_score(&tokenizer, text);
        assert!(score > 0.0);
        assert!(score <= 1.0);
    }
}

#[test]
fn weighted_combine_matches_formula() {
    let weights = SignalWeights::default();
    let fixed = Signals {
        emotion: 0.5,
        urgency: 2.0,
        lexical_richness: 0.8,
        readability: 0.4,
        length_balance: 1.0,
        subjectivity: 0.6,
    };

    let expected = 0.25 * 0.5 + 0.20 * 2.0 + 0.20 * 0.8 + 0.15 * 0.4 + 0.10 * 1.0 + 0.10 * 0.6;
    assert!((weights.combine(&fixed) - expected).abs() < 1e-12);
}

#[test]
fn score_composes_signals_end_to_end() {
    // A single 60-char token: no sentiment, no urgency, one distinct word.
    let text = "a".repeat(60);
    let output = scorer().score(&text);

    let expected = 0.20 * 0.5 + 0.15 * (1.0 / 61.0) + 0.10 * 1.0;
    assert!((output.score - expected).abs() < 1e-9);
}

#[test]
fn sentiment_ranges_hold() {
    let analyzer = SentimentAnalyzer::new().expect("analyzer");

    let positive = analyzer.analyze("This is a great and wonderful day");
    assert!(positive.polarity > 0.0);
    assert!(positive.polarity <= 1.0);

    let negative = analyzer.analyze("A terrible, awful, horrible failure");
    assert!(negative.polarity < 0.0);
    assert!(negative.polarity >= -1.0);

    for sentiment in [positive, negative, analyzer.analyze("")] {
        assert!(sentiment.subjectivity >= 0.0);
        assert!(sentiment.subjectivity <= 1.0);
    }

    let empty = analyzer.analyze("");
    assert!((empty.polarity - 0.0).abs() < 1e-12);
    assert!((empty.subjectivity - 0.0).abs() < 1e-12);
}

#[test]
fn emotion_ignores_polarity_sign() {
    let output = scorer().score("A terrible, awful, horrible failure");
    assert!(output.signals.emotion > 0.0);
    assert!(output.signals.emotion <= 1.0);
}

#[test]
fn tokenizer_extracts_word_runs() {
    let tokenizer = Tokenizer::new().expect("tokenizer");
    let words = tokenizer.words("Hello, world! re_entry 42");
    assert_eq!(words, vec!["Hello", "world", "re_entry", "42"]);
}

#[test]
fn article_input_joins_with_separator() {
    let input = ArticleInput::new("Title", "Description");
    assert_eq!(input.full_text(), format!("Title{}Description", TEXT_SEPARATOR));
    assert_eq!(input.full_text(), "Title [SEP] Description");
}
