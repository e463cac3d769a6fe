use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::analysis::{engine, rules};
use crate::auth::AuthUser;
use crate::diary::repo::{FoodEntry, SymptomEntry};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/analysis/triggers", get(flag_triggers))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// GET /analysis/triggers: scan the caller's full history against the
/// built-in rule table and return every flagged candidate trigger.
#[instrument(skip(state))]
pub async fn flag_triggers(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<engine::FlaggedIssue>>, (StatusCode, String)> {
    let food = FoodEntry::list_all(&state.db, user_id)
        .await
        .map_err(internal)?;
    let symptoms = SymptomEntry::list_all(&state.db, user_id)
        .await
        .map_err(internal)?;

    let issues = engine::analyze(&food, &symptoms, rules::DEFAULT_RULES);

    info!(
        %user_id,
        food_entries = food.len(),
        symptom_entries = symptoms.len(),
        flagged = issues.len(),
        "correlation scan complete"
    );
    Ok(Json(issues))
}
