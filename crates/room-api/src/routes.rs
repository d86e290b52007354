use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use room_db::Database;
use room_types::api::CONCIERGE_MII_NODE;
use room_types::xml;

use crate::concierge::fetch_concierge_mii;
use crate::error::{ApiError, blocking};
use crate::mii::fetch_mii;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// Where the routes are mounted and which optional ones are enabled.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Path prefix for the Mii and voice routes, e.g. `/url1`. Empty mounts at the root.
    pub prefix: String,
    /// Directory served under `/voice`. Development only; `None` disables the route.
    pub voice_dir: Option<PathBuf>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prefix: "/url1".into(),
            voice_dir: None,
        }
    }
}

pub fn router(state: AppState, config: &RouterConfig) -> Router {
    let mut content = Router::new().route("/mii/{file}", get(get_mii_file));

    // ServeDir refuses paths that escape the directory.
    if let Some(dir) = &config.voice_dir {
        info!("Serving voice clips from {}", dir.display());
        content = content.nest_service("/voice", ServeDir::new(dir));
    }

    let content = content.with_state(state);

    let prefix = config.prefix.trim_matches('/');
    let app = if prefix.is_empty() {
        content
    } else {
        Router::new().nest(&format!("/{}", prefix), content)
    };

    app.route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

// ── Request parsing ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiiFileKind {
    /// `{id}.mii`: the raw payload.
    Data,
    /// `{id}.met`: the concierge document.
    Metadata,
}

/// Split `"{id}.mii"` / `"{id}.met"` into a positive id and its kind.
pub fn parse_mii_file(file: &str) -> Option<(i64, MiiFileKind)> {
    let (id, kind) = if let Some(id) = file.strip_suffix(".mii") {
        (id, MiiFileKind::Data)
    } else if let Some(id) = file.strip_suffix(".met") {
        (id, MiiFileKind::Metadata)
    } else {
        return None;
    };

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let id: i64 = id.parse().ok()?;
    (id > 0).then_some((id, kind))
}

// ── Handlers ────────────────────────────────────────────────────────────

/// GET /mii/{id}.mii and GET /mii/{id}.met
pub async fn get_mii_file(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, ApiError> {
    let (mii_id, kind) = parse_mii_file(&file).ok_or(ApiError::NotFound)?;

    match kind {
        MiiFileKind::Data => {
            let data = blocking(move || fetch_mii(&state.db, mii_id)).await?;
            Ok(([(header::CONTENT_TYPE, "application/octet-stream")], data).into_response())
        }
        MiiFileKind::Metadata => {
            let mii = blocking(move || fetch_concierge_mii(&state.db, mii_id)).await?;
            let doc = xml::to_document(CONCIERGE_MII_NODE, &mii).map_err(ApiError::internal)?;
            Ok(([(header::CONTENT_TYPE, "application/xml")], doc).into_response())
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_kinds() {
        assert_eq!(parse_mii_file("12.mii"), Some((12, MiiFileKind::Data)));
        assert_eq!(parse_mii_file("12.met"), Some((12, MiiFileKind::Metadata)));
    }

    #[test]
    fn rejects_bad_names() {
        for file in ["", ".mii", "0.mii", "-1.met", "+3.mii", "abc.met", "12.txt", "12", "1.5.mii", "99999999999999999999.mii"] {
            assert_eq!(parse_mii_file(file), None, "{file}");
        }
    }
}
