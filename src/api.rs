use popularity_sim::{ArticleInput, PopularityOutput, Signals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiScoreRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Pre-joined full text; overrides title/description when present.
    pub text: Option<String>,
}

impl ApiScoreRequest {
    pub fn into_text(self) -> Result<String, String> {
        if let Some(text) = self.text {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }

        // Title and description are joined as supplied; only the pre-joined
        // text field is trimmed.
        let title = self.title.unwrap_or_default();
        let description = self.description.unwrap_or_default();
        if title.is_empty() && description.is_empty() {
            return Err("title or description is required".to_string());
        }
        Ok(ArticleInput::new(title, description).full_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ApiScoreResponse {
    pub score: f64,
    pub tier: String,
    pub signals: Signals,
    pub encoder_used: bool,
    pub warnings: Vec<String>,
}

impl ApiScoreResponse {
    pub fn from_output(output: PopularityOutput, encoder_used: bool, warnings: Vec<String>) -> Self {
        Self {
            score: output.score,
            tier: output.tier.label().to_string(),
            signals: output.signals,
            encoder_used,
            warnings,
        }
    }
}
