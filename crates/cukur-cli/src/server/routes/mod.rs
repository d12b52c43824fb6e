mod health;
mod orders;
mod web;

use std::path::Path;

use axum::Router;

use crate::server::{static_files::serve_static, AppState};

pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(web::router())
        .merge(orders::router())
        .merge(health::router())
        .with_state(state)
        .nest_service("/static", serve_static(static_dir))
}
