use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Logged meal. Immutable once written; `occurred_at` is nullable so rows
/// imported without a resolved time still load, and the analysis engine skips
/// them instead of choking.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_item_name: String,
    pub meal_type: String,
    pub portion_size: f64,
    pub notes: Option<String>,
    pub food_category: String,
    pub occurred_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// Logged symptom. `notes` holds the sealed form produced by the notes codec.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SymptomEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub symptom_type: String,
    pub severity: String,
    pub notes: Option<String>,
    pub occurred_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

pub struct NewFoodEntry<'a> {
    pub food_item_name: &'a str,
    pub meal_type: &'a str,
    pub portion_size: f64,
    pub notes: Option<&'a str>,
    pub food_category: &'a str,
    pub occurred_at: OffsetDateTime,
}

pub struct NewSymptomEntry<'a> {
    pub symptom_type: &'a str,
    pub severity: &'a str,
    pub sealed_notes: Option<&'a str>,
    pub occurred_at: OffsetDateTime,
}

impl FoodEntry {
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        new: NewFoodEntry<'_>,
    ) -> anyhow::Result<FoodEntry> {
        let row = sqlx::query_as::<_, FoodEntry>(
            r#"
            INSERT INTO food_entries
                (user_id, food_item_name, meal_type, portion_size, notes, food_category, occurred_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, food_item_name, meal_type, portion_size, notes,
                      food_category, occurred_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(new.food_item_name)
        .bind(new.meal_type)
        .bind(new.portion_size)
        .bind(new.notes)
        .bind(new.food_category)
        .bind(new.occurred_at)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn list_by_user(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<FoodEntry>> {
        let rows = sqlx::query_as::<_, FoodEntry>(
            r#"
            SELECT id, user_id, food_item_name, meal_type, portion_size, notes,
                   food_category, occurred_at, created_at
            FROM food_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Full history for one user, oldest first. The analysis engine wants the
    /// complete snapshot, not a page.
    pub async fn list_all(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<FoodEntry>> {
        let rows = sqlx::query_as::<_, FoodEntry>(
            r#"
            SELECT id, user_id, food_item_name, meal_type, portion_size, notes,
                   food_category, occurred_at, created_at
            FROM food_entries
            WHERE user_id = $1
            ORDER BY occurred_at ASC NULLS LAST
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_between(
        db: &PgPool,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<FoodEntry>> {
        let rows = sqlx::query_as::<_, FoodEntry>(
            r#"
            SELECT id, user_id, food_item_name, meal_type, portion_size, notes,
                   food_category, occurred_at, created_at
            FROM food_entries
            WHERE user_id = $1 AND occurred_at >= $2 AND occurred_at < $3
            ORDER BY occurred_at ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

impl SymptomEntry {
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        new: NewSymptomEntry<'_>,
    ) -> anyhow::Result<SymptomEntry> {
        let row = sqlx::query_as::<_, SymptomEntry>(
            r#"
            INSERT INTO symptom_entries
                (user_id, symptom_type, severity, notes, occurred_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, symptom_type, severity, notes, occurred_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(new.symptom_type)
        .bind(new.severity)
        .bind(new.sealed_notes)
        .bind(new.occurred_at)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn list_by_user(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<SymptomEntry>> {
        let rows = sqlx::query_as::<_, SymptomEntry>(
            r#"
            SELECT id, user_id, symptom_type, severity, notes, occurred_at, created_at
            FROM symptom_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_all(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<SymptomEntry>> {
        let rows = sqlx::query_as::<_, SymptomEntry>(
            r#"
            SELECT id, user_id, symptom_type, severity, notes, occurred_at, created_at
            FROM symptom_entries
            WHERE user_id = $1
            ORDER BY occurred_at ASC NULLS LAST
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_between(
        db: &PgPool,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> anyhow::Result<Vec<SymptomEntry>> {
        let rows = sqlx::query_as::<_, SymptomEntry>(
            r#"
            SELECT id, user_id, symptom_type, severity, notes, occurred_at, created_at
            FROM symptom_entries
            WHERE user_id = $1 AND occurred_at >= $2 AND occurred_at < $3
            ORDER BY occurred_at ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
