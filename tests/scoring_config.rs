use popularity_sim::config::ScoringConfig;
use popularity_sim::scoring::SignalWeights;
use std::fs;
use std::path::PathBuf;

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("popularity-sim-{}-{}.toml", name, std::process::id()))
}

#[test]
fn load_writes_default_config_when_missing() {
    let path = temp_config_path("defaults");
    let _ = fs::remove_file(&path);

    let (config, resolved) = ScoringConfig::load(Some(path.clone())).expect("load defaults");
    assert_eq!(resolved, Some(path.clone()));
    assert_eq!(config.weights, SignalWeights::default());
    assert!(path.exists());

    let contents = fs::read_to_string(&path).expect("read generated config");
    let written: ScoringConfig = toml::from_str(&contents).expect("parse generated config");
    assert_eq!(written.weights, SignalWeights::default());

    let (reloaded, _) = ScoringConfig::load(Some(path.clone())).expect("reload");
    assert_eq!(reloaded.weights, SignalWeights::default());

    let _ = fs::remove_file(&path);
}

#[test]
fn load_rejects_unbalanced_weights() {
    let path = temp_config_path("unbalanced");
    let payload = r#"
[weights]
emotion = 0.50
urgency = 0.20
lexical_richness = 0.20
readability = 0.15
length_balance = 0.10
subjectivity = 0.10

[encoder]
enabled = false
endpoint = "http://localhost:8090"
model = "distilbert-base-uncased"
timeout_ms = 5000
"#;
    fs::write(&path, payload).expect("write config");

    assert!(ScoringConfig::load(Some(path.clone())).is_err());

    let _ = fs::remove_file(&path);
}
