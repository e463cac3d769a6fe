use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::diary::repo::FoodEntry;

/// Meal slot a food entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

/// Reported severity of a symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

/// Request body for logging a meal. `occurred_at` lets the user backdate the
/// entry to the actual time of consumption; when absent the store assigns its
/// write time.
#[derive(Debug, Deserialize)]
pub struct CreateFoodEntryRequest {
    pub food_item_name: String,
    pub meal_type: MealType,
    pub portion_size: f64,
    #[serde(default)]
    pub notes: Option<String>,
    pub food_category: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub occurred_at: Option<OffsetDateTime>,
}

/// Request body for logging a symptom.
#[derive(Debug, Deserialize)]
pub struct CreateSymptomEntryRequest {
    pub symptom_type: String,
    pub severity: Severity,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub occurred_at: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
pub struct FoodEntryResponse {
    pub id: Uuid,
    pub food_item_name: String,
    pub meal_type: String,
    pub portion_size: f64,
    pub notes: Option<String>,
    pub food_category: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub occurred_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<FoodEntry> for FoodEntryResponse {
    fn from(e: FoodEntry) -> Self {
        Self {
            id: e.id,
            food_item_name: e.food_item_name,
            meal_type: e.meal_type,
            portion_size: e.portion_size,
            notes: e.notes,
            food_category: e.food_category,
            occurred_at: e.occurred_at,
            created_at: e.created_at,
        }
    }
}

/// Symptom entry as presented to the client; `notes` is plaintext, already
/// run back through the notes codec.
#[derive(Debug, Serialize)]
pub struct SymptomEntryResponse {
    pub id: Uuid,
    pub symptom_type: String,
    pub severity: String,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub occurred_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct DailyLogResponse {
    pub date: String,
    pub food: Vec<FoodEntryResponse>,
    pub symptoms: Vec<SymptomEntryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct DailyLogQuery {
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_type_roundtrips_through_serde() {
        let parsed: MealType = serde_json::from_str(r#""Breakfast""#).unwrap();
        assert_eq!(parsed, MealType::Breakfast);
        assert_eq!(serde_json::to_string(&MealType::Snack).unwrap(), r#""Snack""#);
        assert!(serde_json::from_str::<MealType>(r#""brunch""#).is_err());
    }

    #[test]
    fn meal_type_matches_form_vocabulary() {
        for m in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            assert!(crate::diary::vocab::MEAL_TYPES.contains(&m.as_str()));
        }
    }

    #[test]
    fn severity_matches_form_vocabulary() {
        for (s, expected) in [
            (Severity::Mild, "Mild"),
            (Severity::Moderate, "Moderate"),
            (Severity::Severe, "Severe"),
        ] {
            assert_eq!(s.as_str(), expected);
            assert!(crate::diary::vocab::SEVERITIES.contains(&s.as_str()));
        }
    }

    #[test]
    fn create_food_request_accepts_missing_optional_fields() {
        let req: CreateFoodEntryRequest = serde_json::from_str(
            r#"{
                "food_item_name": "Cheddar omelette",
                "meal_type": "Breakfast",
                "portion_size": 1.5,
                "food_category": "Dairy"
            }"#,
        )
        .unwrap();
        assert_eq!(req.food_item_name, "Cheddar omelette");
        assert!(req.notes.is_none());
        assert!(req.occurred_at.is_none());
    }

    #[test]
    fn create_symptom_request_parses_rfc3339_onset() {
        let req: CreateSymptomEntryRequest = serde_json::from_str(
            r#"{
                "symptom_type": "Bloating",
                "severity": "Moderate",
                "occurred_at": "2025-03-01T18:30:00Z"
            }"#,
        )
        .unwrap();
        let at = req.occurred_at.expect("onset should parse");
        assert_eq!(at.unix_timestamp(), 1740853800);
    }
}
