use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use anglo_i18n::{Direction, Translation, Translator};

const NO_MATCH_MESSAGE: &str = "Everything looks good to me!";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub locale: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub text: String,
    pub translation: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
}

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub data_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("ANGLO_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            data_dir: std::env::var("ANGLO_DATA_DIR").ok().map(PathBuf::from),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = ServerConfig::from_env();

    let translator = match &config.data_dir {
        Some(dir) => {
            info!("Loading dictionaries from {}", dir.display());
            Translator::from_dir(dir)
                .map_err(|e| format!("Failed to load dictionaries: {}", e))?
        }
        None => Translator::builtin().clone(),
    };
    let state = AppState {
        translator: Arc::new(translator),
    };

    info!("Starting anglo-i18n web server");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running at http://{}", config.bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/translate", post(translate_text))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

fn bad_request(error: &str) -> (StatusCode, Json<ErrorResponse>) {
    warn!("Rejected translation request: {}", error);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (Some(text), Some(locale)) = (request.text, request.locale) else {
        return Err(bad_request("Required field(s) missing"));
    };

    if text.is_empty() {
        return Err(bad_request("No text to translate"));
    }

    // Only the two direction names are accepted here, not locale tags
    let direction = match locale.as_str() {
        "american-to-british" | "british-to-american" => locale
            .parse::<Direction>()
            .map_err(|_| bad_request("Invalid value for locale field"))?,
        _ => return Err(bad_request("Invalid value for locale field")),
    };

    info!("Translating {} characters ({})", text.len(), direction);

    let translation = state.translator.translate(&text, direction).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Translation failed: {}", e),
            }),
        )
    })?;

    let translation = match translation {
        Translation::NoMatch => NO_MATCH_MESSAGE.to_string(),
        Translation::Translated { highlighted, .. } => highlighted,
    };

    Ok(Json(TranslateResponse { text, translation }))
}
