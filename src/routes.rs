// routes.rs
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::templates::Templates;

/// Mount point of the `polls` namespace.
pub const PREFIX: &str = "/polls";

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(pool: SqlitePool, templates: Templates) -> Self {
        Self {
            pool,
            templates: Arc::new(templates),
        }
    }
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(&index_url(), get(handlers::index))
        .route(&format!("{PREFIX}/specifics/{{question_id}}/"), get(handlers::detail))
        .route(&format!("{PREFIX}/{{question_id}}/results"), get(handlers::results))
        .route(&format!("{PREFIX}/{{question_id}}/vote"), post(handlers::vote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn index_url() -> String {
    format!("{PREFIX}/")
}

pub fn detail_url(question_id: i64) -> String {
    format!("{PREFIX}/specifics/{question_id}/")
}

pub fn results_url(question_id: i64) -> String {
    format!("{PREFIX}/{question_id}/results")
}

pub fn vote_url(question_id: i64) -> String {
    format!("{PREFIX}/{question_id}/vote")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_reverse_to_route_paths() {
        assert_eq!(index_url(), "/polls/");
        assert_eq!(detail_url(5), "/polls/specifics/5/");
        assert_eq!(results_url(5), "/polls/5/results");
        assert_eq!(vote_url(5), "/polls/5/vote");
    }
}
