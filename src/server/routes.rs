use crate::common::{BankSource, RateScraperError, RateSnapshot};
use crate::server::{ApiError, AppState};
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

const BANNER: &str = "Scrap Kurs";

#[derive(Debug, Serialize)]
struct Banner {
    code: u16,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct NotFound {
    code: u16,
    message: &'static str,
    path: String,
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new().route("/", get(index));

    for source in BankSource::ALL {
        router = router.route(
            &source.path(),
            get(move |State(state): State<Arc<AppState>>| get_rates(state, source)),
        );
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Json<Banner> {
    info!("GET: /");
    Json(Banner {
        code: 200,
        message: BANNER,
    })
}

async fn not_found(uri: Uri) -> (StatusCode, Json<NotFound>) {
    let path = escape_html(&decode_path(uri.path()));
    info!("GET: {}", path);
    (
        StatusCode::NOT_FOUND,
        Json(NotFound {
            code: 404,
            message: "Page Not Found",
            path,
        }),
    )
}

async fn get_rates(state: Arc<AppState>, source: BankSource) -> Result<Json<RateSnapshot>, ApiError> {
    info!("GET: {}", source.path());
    let snapshot = tokio::time::timeout(state.request_timeout(), state.bank(source).fetch_snapshot())
        .await
        .map_err(|_| {
            ApiError::new(
                source,
                RateScraperError::Timeout {
                    bank: source.to_string(),
                },
            )
        })?
        .map_err(|e| ApiError::new(source, e))?;
    Ok(Json(snapshot))
}

fn decode_path(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Escape the five HTML-significant characters before echoing client input.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
