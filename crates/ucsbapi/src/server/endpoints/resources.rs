//! CRUD handlers shared by every resource.
//!
//! Each handler is generic over the [`Entity`] it serves and is instantiated
//! once per resource in [`crate::server::create_router`]. Role checks happen
//! in route layers before these run.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::db::Repository;
use crate::entities::Entity;
use crate::server::types::{ApiError, Message};
use crate::types::AppState;

/// The `?id=` query parameter used by single-record endpoints.
#[derive(Debug, Deserialize)]
pub struct IdParam<K> {
    pub id: K,
}

fn fetch<E: Entity>(s: &AppState, id: &E::Key) -> Result<E, ApiError> {
    match Repository::<E>::find_by_id(&s.db, id)? {
        Some(entity) => Ok(entity),
        None => {
            warn!("{} with id {} not found", E::NAME, id);
            Err(ApiError::not_found(E::NAME, id))
        }
    }
}

/// GET <base>/all
/// Returns every stored record
pub async fn list_all<E: Entity>(State(s): State<Arc<AppState>>) -> Result<Json<Vec<E>>, ApiError> {
    info!("GET {} (all)", E::NAME);

    let all = Repository::<E>::find_all(&s.db)?;
    Ok(Json(all))
}

/// GET <base>?id=
pub async fn get_by_id<E: Entity>(
    State(s): State<Arc<AppState>>,
    query: Result<Query<IdParam<E::Key>>, QueryRejection>,
) -> Result<Json<E>, ApiError> {
    let Query(IdParam { id }) = query?;
    info!("GET {} id={}", E::NAME, id);

    Ok(Json(fetch::<E>(&s, &id)?))
}

/// POST <base>/post?<fields>
/// Creates a record from query-string fields and returns it as stored
pub async fn create<E: Entity>(
    State(s): State<Arc<AppState>>,
    query: Result<Query<E::Draft>, QueryRejection>,
) -> Result<Json<E>, ApiError> {
    let Query(draft) = query?;
    info!("POST {}", E::NAME);

    let saved = Repository::<E>::save(&s.db, E::from_draft(draft))?;
    if let Some(id) = saved.key() {
        info!("Created {} with id {}", E::NAME, id);
    }

    Ok(Json(saved))
}

/// DELETE <base>?id=
pub async fn delete_by_id<E: Entity>(
    State(s): State<Arc<AppState>>,
    query: Result<Query<IdParam<E::Key>>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(IdParam { id }) = query?;
    info!("DELETE {} id={}", E::NAME, id);

    fetch::<E>(&s, &id)?;
    Repository::<E>::delete_by_id(&s.db, &id)?;

    Ok(Json(Message {
        message: format!("{} with id {} deleted", E::NAME, id),
    }))
}

/// PUT <base>?id=
/// Replaces every mutable field with the JSON body
pub async fn update<E: Entity>(
    State(s): State<Arc<AppState>>,
    query: Result<Query<IdParam<E::Key>>, QueryRejection>,
    body: Result<Json<E::Draft>, JsonRejection>,
) -> Result<Json<E>, ApiError> {
    let Query(IdParam { id }) = query?;
    let Json(draft) = body?;
    info!("PUT {} id={}", E::NAME, id);

    let mut entity = fetch::<E>(&s, &id)?;
    entity.apply(draft);

    Ok(Json(Repository::<E>::save(&s.db, entity)?))
}
