use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{middleware as mw, Router};
use tower_http::trace::TraceLayer;

use crate::entities::{Article, Entity, HelpRequest, MenuItem, Organization, RecommendationRequest};
use crate::server::endpoints::{resources, status};
use crate::server::middleware::*;
use crate::types::{AppState, Role};

mod endpoints;
mod middleware;
pub mod types;

pub use middleware::role_validator::hash_token;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(status::get_health))
        .merge(resource_router::<MenuItem>("/api/ucsbdiningcommonsmenuitem"))
        .merge(resource_router::<Organization>("/api/ucsborganization"))
        .merge(resource_router::<RecommendationRequest>("/api/recommendationRequest"))
        .merge(resource_router::<HelpRequest>("/api/helprequest"))
        .merge(resource_router::<Article>("/api/articles"))
        .layer(mw::from_fn_with_state(
            app_state.clone(),
            role_validator::identify_caller,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Routes for one resource under `base`. Reads need USER, writes need ADMIN.
fn resource_router<E: Entity>(base: &str) -> Router<Arc<AppState>> {
    let user = || mw::from_fn_with_state(Role::User, role_validator::require_role);
    let admin = || mw::from_fn_with_state(Role::Admin, role_validator::require_role);

    Router::new()
        .route(
            &format!("{base}/all"),
            get(resources::list_all::<E>).route_layer(user()),
        )
        .route(
            &format!("{base}/post"),
            post(resources::create::<E>).route_layer(admin()),
        )
        .route(
            base,
            get(resources::get_by_id::<E>).route_layer(user()).merge(
                put(resources::update::<E>)
                    .delete(resources::delete_by_id::<E>)
                    .route_layer(admin()),
            ),
        )
}
