use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::{macros::format_description, Date};
use tracing::{error, info, instrument};

use crate::auth::AuthUser;
use crate::diary::dto::{
    CreateFoodEntryRequest, CreateSymptomEntryRequest, DailyLogQuery, DailyLogResponse,
    FoodEntryResponse, Pagination, SymptomEntryResponse,
};
use crate::diary::repo::{FoodEntry, SymptomEntry};
use crate::diary::{services, vocab};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries/food", post(create_food).get(list_food))
        .route("/entries/symptoms", post(create_symptom).get(list_symptoms))
        .route("/log/daily", get(daily_log))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[instrument(skip(state, payload))]
pub async fn create_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateFoodEntryRequest>,
) -> Result<(StatusCode, Json<FoodEntryResponse>), (StatusCode, String)> {
    if payload.food_item_name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "food_item_name is required".into()));
    }
    if !payload.portion_size.is_finite() || payload.portion_size <= 0.0 {
        return Err((StatusCode::BAD_REQUEST, "portion_size must be positive".into()));
    }
    if !vocab::is_known_category(&payload.food_category) {
        return Err((StatusCode::BAD_REQUEST, "unknown food_category".into()));
    }

    let entry = services::create_food_entry(&state, user_id, &payload)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "create food entry failed");
            internal(e)
        })?;

    info!(%user_id, entry_id = %entry.id, category = %entry.food_category, "food entry logged");
    Ok((StatusCode::CREATED, Json(FoodEntryResponse::from(entry))))
}

#[instrument(skip(state, payload))]
pub async fn create_symptom(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateSymptomEntryRequest>,
) -> Result<(StatusCode, Json<SymptomEntryResponse>), (StatusCode, String)> {
    if !vocab::is_known_symptom(&payload.symptom_type) {
        return Err((StatusCode::BAD_REQUEST, "unknown symptom_type".into()));
    }

    let entry = services::create_symptom_entry(&state, user_id, &payload)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "create symptom entry failed");
            internal(e)
        })?;

    info!(%user_id, entry_id = %entry.id, symptom = %entry.symptom_type, "symptom entry logged");
    Ok((
        StatusCode::CREATED,
        Json(services::present_symptom(state.notes.as_ref(), entry)),
    ))
}

#[instrument(skip(state))]
pub async fn list_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<FoodEntryResponse>>, (StatusCode, String)> {
    let entries = FoodEntry::list_by_user(&state.db, user_id, p.limit, p.offset)
        .await
        .map_err(internal)?;
    Ok(Json(entries.into_iter().map(FoodEntryResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn list_symptoms(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<SymptomEntryResponse>>, (StatusCode, String)> {
    let entries = SymptomEntry::list_by_user(&state.db, user_id, p.limit, p.offset)
        .await
        .map_err(internal)?;
    let items = entries
        .into_iter()
        .map(|e| services::present_symptom(state.notes.as_ref(), e))
        .collect();
    Ok(Json(items))
}

/// GET /log/daily?date=YYYY-MM-DD: both entry kinds for one UTC day.
#[instrument(skip(state))]
pub async fn daily_log(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<DailyLogQuery>,
) -> Result<Json<DailyLogResponse>, (StatusCode, String)> {
    let date = Date::parse(&q.date, format_description!("[year]-[month]-[day]")).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "invalid date, expected YYYY-MM-DD".to_string(),
        )
    })?;
    let (start, end) = services::day_bounds(date);

    let food = FoodEntry::list_between(&state.db, user_id, start, end)
        .await
        .map_err(internal)?;
    let symptoms = SymptomEntry::list_between(&state.db, user_id, start, end)
        .await
        .map_err(internal)?;

    Ok(Json(DailyLogResponse {
        date: q.date,
        food: food.into_iter().map(FoodEntryResponse::from).collect(),
        symptoms: symptoms
            .into_iter()
            .map(|e| services::present_symptom(state.notes.as_ref(), e))
            .collect(),
    }))
}
