//! HTTP surface for the collection store.
//!
//! Two routes: an open read endpoint the redemption client polls, and a
//! write endpoint restricted to one trusted origin.

use std::sync::Arc;

use alloy_primitives::Address;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use mintpass_core::{CollectionConfig, ContentCid};

use crate::traits::CollectionStore;

type SharedStore = Arc<dyn CollectionStore>;

/// Build the router. `allowed_origin` gates the import endpoint only;
/// the read endpoint is open.
pub fn router(store: SharedStore, allowed_origin: HeaderValue) -> Router {
    let read = Router::new()
        .route("/current-collection", get(current_collection))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any));

    let write = Router::new()
        .route("/import-collection", post(import_collection))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        );

    read.merge(write).with_state(store)
}

#[derive(Deserialize)]
struct ImportRequest {
    address: Option<String>,
    cid: Option<String>,
}

#[derive(Serialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Returns the active collection, or `{}` when none has been imported.
/// Always 200: absence is a state, not a failure, and read errors are
/// logged and reported as absence.
async fn current_collection(State(store): State<SharedStore>) -> Json<serde_json::Value> {
    match store.current().await {
        Ok(Some(config)) => Json(
            serde_json::to_value(&config).unwrap_or_else(|_| serde_json::Value::Object(Default::default())),
        ),
        Ok(None) => Json(serde_json::Value::Object(Default::default())),
        Err(err) => {
            warn!(error = %err, "collection read failed");
            Json(serde_json::Value::Object(Default::default()))
        }
    }
}

async fn import_collection(
    State(store): State<SharedStore>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<OkResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (address, cid) = match (req.address, req.cid) {
        (Some(address), Some(cid))
            if !address.trim().is_empty() && !cid.trim().is_empty() =>
        {
            (address, cid)
        }
        _ => return Err(bad_request("address or cid missing".to_string())),
    };

    let address: Address = address
        .trim()
        .parse()
        .map_err(|e| bad_request(format!("invalid address: {e}")))?;
    let cid = ContentCid::new(cid).map_err(|e| bad_request(e.to_string()))?;

    store
        .import(&CollectionConfig { address, cid })
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    Ok(Json(OkResponse { ok: true }))
}

fn bad_request(msg: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg }))
}

fn internal_error(msg: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: msg }),
    )
}
