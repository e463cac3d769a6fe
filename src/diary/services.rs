use time::{Date, Duration, OffsetDateTime};
use tracing::warn;
use uuid::Uuid;

use crate::diary::dto::{
    CreateFoodEntryRequest, CreateSymptomEntryRequest, SymptomEntryResponse,
};
use crate::diary::repo::{FoodEntry, NewFoodEntry, NewSymptomEntry, SymptomEntry};
use crate::notes::NotesCodec;
use crate::state::AppState;

/// Persist a food entry. A user-chosen onset time wins over the store clock;
/// the store clock is only the fallback.
pub async fn create_food_entry(
    state: &AppState,
    user_id: Uuid,
    req: &CreateFoodEntryRequest,
) -> anyhow::Result<FoodEntry> {
    let occurred_at = req.occurred_at.unwrap_or_else(OffsetDateTime::now_utc);
    FoodEntry::insert(
        &state.db,
        user_id,
        NewFoodEntry {
            food_item_name: req.food_item_name.trim(),
            meal_type: req.meal_type.as_str(),
            portion_size: req.portion_size,
            notes: req.notes.as_deref(),
            food_category: &req.food_category,
            occurred_at,
        },
    )
    .await
}

/// Persist a symptom entry, sealing notes through the codec first.
pub async fn create_symptom_entry(
    state: &AppState,
    user_id: Uuid,
    req: &CreateSymptomEntryRequest,
) -> anyhow::Result<SymptomEntry> {
    let occurred_at = req.occurred_at.unwrap_or_else(OffsetDateTime::now_utc);
    let sealed = req.notes.as_deref().map(|n| state.notes.seal(n));
    SymptomEntry::insert(
        &state.db,
        user_id,
        NewSymptomEntry {
            symptom_type: &req.symptom_type,
            severity: req.severity.as_str(),
            sealed_notes: sealed.as_deref(),
            occurred_at,
        },
    )
    .await
}

/// Row → response, reversing the notes codec. A note that no longer opens is
/// dropped from the response rather than failing the whole request.
pub fn present_symptom(codec: &dyn NotesCodec, e: SymptomEntry) -> SymptomEntryResponse {
    let notes = e.notes.as_deref().and_then(|sealed| match codec.open(sealed) {
        Ok(plain) => Some(plain),
        Err(err) => {
            warn!(error = %err, entry_id = %e.id, "failed to open symptom notes");
            None
        }
    });
    SymptomEntryResponse {
        id: e.id,
        symptom_type: e.symptom_type,
        severity: e.severity,
        notes,
        occurred_at: e.occurred_at,
        created_at: e.created_at,
    }
}

/// UTC half-open interval [midnight, next midnight) for a calendar day.
pub fn day_bounds(date: Date) -> (OffsetDateTime, OffsetDateTime) {
    let start = date.midnight().assume_utc();
    (start, start + Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::{Base64NotesCodec, NotesCodec};
    use time::macros::{date, datetime};

    #[test]
    fn day_bounds_cover_exactly_one_day() {
        let (start, end) = day_bounds(date!(2025 - 03 - 01));
        assert_eq!(start, datetime!(2025-03-01 00:00 UTC));
        assert_eq!(end, datetime!(2025-03-02 00:00 UTC));
        assert_eq!(end - start, Duration::days(1));
    }

    #[test]
    fn day_bounds_handle_month_rollover() {
        let (start, end) = day_bounds(date!(2024 - 02 - 29));
        assert_eq!(start, datetime!(2024-02-29 00:00 UTC));
        assert_eq!(end, datetime!(2024-03-01 00:00 UTC));
    }

    #[test]
    fn present_symptom_opens_sealed_notes() {
        let codec = Base64NotesCodec;
        let entry = SymptomEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            symptom_type: "Bloating".into(),
            severity: "Mild".into(),
            notes: Some(codec.seal("started an hour after dinner")),
            occurred_at: Some(datetime!(2025-03-01 19:00 UTC)),
            created_at: datetime!(2025-03-01 19:05 UTC),
        };
        let resp = present_symptom(&codec, entry);
        assert_eq!(resp.notes.as_deref(), Some("started an hour after dinner"));
    }

    #[test]
    fn present_symptom_drops_unreadable_notes() {
        let codec = Base64NotesCodec;
        let entry = SymptomEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            symptom_type: "Gas".into(),
            severity: "Moderate".into(),
            notes: Some("!!corrupted!!".into()),
            occurred_at: None,
            created_at: datetime!(2025-03-01 19:05 UTC),
        };
        let resp = present_symptom(&codec, entry);
        assert!(resp.notes.is_none());
    }
}
