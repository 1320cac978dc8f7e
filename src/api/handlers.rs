//! API Handlers
//!
//! HTTP request handlers for each password endpoint. Range validation of
//! generation parameters happens here; the service trusts its inputs.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::cache::CacheStats;
use crate::config::Config;
use crate::error::{PasswordError, Result};
use crate::generator::Complexity;
use crate::models::{
    GenerateQuery, GenerateResponse, HealthResponse, PasswordPayload, PasswordRecord, TagQuery,
};
use crate::service::PasswordService;
use crate::store::MemoryRepository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Password service, owning the cache
    pub service: Arc<PasswordService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: PasswordService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Backs the service with the in-memory repository.
    pub fn from_config(config: &Config) -> Result<Self> {
        let service = PasswordService::from_config(config, Arc::new(MemoryRepository::new()))?;
        Ok(Self::new(service))
    }
}

/// Handler for GET /api/passwords/generate
///
/// Generates a password, stores its hash for `owner` and returns the plaintext.
pub async fn generate_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Json<GenerateResponse>> {
    let Query(query) = query?;
    if let Some(error_msg) = query.validate() {
        return Err(PasswordError::InvalidRequest(error_msg));
    }
    let complexity = Complexity::try_from(query.complexity)?;

    let (password, record) = state
        .service
        .generate_and_store(query.length, complexity, query.owner.clone())
        .await?;

    Ok(Json(GenerateResponse::new(
        query.owner,
        password,
        query.length,
        complexity,
        record.id,
    )))
}

/// Handler for GET /api/passwords
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<PasswordRecord>>> {
    Ok(Json(state.service.find_all().await?))
}

/// Handler for GET /api/passwords/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PasswordRecord>> {
    state
        .service
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| PasswordError::NotFound(id.to_string()))
}

/// Handler for POST /api/passwords
pub async fn create_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PasswordPayload>, JsonRejection>,
) -> Result<Json<PasswordRecord>> {
    let Json(payload) = payload?;
    if let Some(error_msg) = payload.validate() {
        return Err(PasswordError::InvalidRequest(error_msg));
    }

    let saved = state.service.create(payload.into_record()).await?;
    Ok(Json(saved))
}

/// Handler for PUT /api/passwords/:id
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: std::result::Result<Json<PasswordPayload>, JsonRejection>,
) -> Result<Json<PasswordRecord>> {
    let Json(payload) = payload?;
    if let Some(error_msg) = payload.validate() {
        return Err(PasswordError::InvalidRequest(error_msg));
    }

    let mut record = payload.into_record();
    record.id = Some(id);
    Ok(Json(state.service.update(record).await?))
}

/// Handler for DELETE /api/passwords/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/passwords/by-tag
pub async fn by_tag_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<TagQuery>, QueryRejection>,
) -> Result<Json<Vec<PasswordRecord>>> {
    let Query(query) = query?;
    Ok(Json(
        state
            .service
            .find_passwords_by_tag_name(&query.tag_name)
            .await?,
    ))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.service.cache_stats().await)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
