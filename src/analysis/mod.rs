use crate::state::AppState;
use axum::Router;

pub mod engine;
pub mod handlers;
pub mod rules;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
