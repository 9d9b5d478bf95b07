use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{ApiScoreRequest, ApiScoreResponse};
use popularity_sim::config::ScoringConfig;
use popularity_sim::encoder::EncoderClient;
use popularity_sim::PopularityScorer;

#[derive(Clone)]
struct AppState {
    scorer: Arc<PopularityScorer>,
    encoder: Option<EncoderClient>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, _) = ScoringConfig::load(None)?;
    let scorer = Arc::new(PopularityScorer::from_config(&config)?);
    let encoder = EncoderClient::from_config(&config)?;
    match &encoder {
        Some(client) => tracing::info!(
            model = client.model(),
            "semantic encoder configured; embeddings are not consulted by the scoring formula"
        ),
        None => tracing::info!("semantic encoder disabled"),
    }

    let state = AppState { scorer, encoder };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/score", post(score_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "popularity scorer listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn score_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiScoreRequest>,
) -> Result<Json<ApiScoreResponse>, (StatusCode, String)> {
    let text = request
        .into_text()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let output = state.scorer.score(&text);

    let mut warnings = Vec::new();
    if state.encoder.is_some() {
        warnings
            .push("semantic encoder is loaded but the scoring formula does not use it".to_string());
    }

    Ok(Json(ApiScoreResponse::from_output(output, false, warnings)))
}
