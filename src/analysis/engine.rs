//! Correlation scan over the full entry history. Pure: snapshot in, flagged
//! issues out. No clock, no I/O, inputs never mutated.

use serde::Serialize;
use time::Duration;

use super::rules::TriggerRule;
use crate::diary::repo::{FoodEntry, SymptomEntry};

/// A rule whose observed correlation met its threshold on sufficient data.
/// Derived on every scan, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedIssue {
    pub food_category: String,
    pub symptom_type: String,
    pub correlation_strength: f64,
    pub message: String,
    pub details: String,
}

/// Evaluate every rule against the entry history.
///
/// Per rule: food entries matching the rule's category form the sample. Below
/// `min_incidents_for_analysis` the rule is skipped outright. Each sampled
/// entry with a resolved timestamp counts toward the denominator; it also
/// counts toward the numerator when at least one matching symptom falls in
/// `(occurred_at, occurred_at + window]`, open at the meal and closed at the
/// window end. Entries without a timestamp are invisible to both counts.
/// The issue is emitted when numerator/denominator reaches the rule's
/// threshold (inclusive). Output order follows the rule table.
pub fn analyze(
    food_entries: &[FoodEntry],
    symptom_entries: &[SymptomEntry],
    rules: &[TriggerRule],
) -> Vec<FlaggedIssue> {
    let mut flagged = Vec::new();

    for rule in rules {
        let relevant_food: Vec<&FoodEntry> = food_entries
            .iter()
            .filter(|e| e.food_category == rule.trigger_food_category)
            .collect();
        if relevant_food.len() < rule.min_incidents_for_analysis {
            continue;
        }

        let relevant_symptoms: Vec<&SymptomEntry> = symptom_entries
            .iter()
            .filter(|e| e.symptom_type == rule.associated_symptom)
            .collect();

        let mut instances_with_symptom = 0usize;
        let mut instances = 0usize;

        for entry in &relevant_food {
            let Some(eaten_at) = entry.occurred_at else {
                continue;
            };
            let window_end =
                eaten_at + Duration::seconds_f64(rule.cooccurrence_window_hours * 3600.0);

            let symptom_in_window = relevant_symptoms.iter().any(|s| {
                s.occurred_at
                    .map(|at| at > eaten_at && at <= window_end)
                    .unwrap_or(false)
            });

            if symptom_in_window {
                instances_with_symptom += 1;
            }
            instances += 1;
        }

        if instances == 0 {
            continue;
        }

        let strength = instances_with_symptom as f64 / instances as f64;
        if strength >= rule.cooccurrence_threshold {
            flagged.push(FlaggedIssue {
                food_category: rule.trigger_food_category.to_string(),
                symptom_type: rule.associated_symptom.to_string(),
                correlation_strength: strength,
                message: rule.flag_message.to_string(),
                details: format!(
                    "Occurred in {} out of {} instances of {} consumption.",
                    instances_with_symptom, instances, rule.trigger_food_category
                ),
            });
        }
    }

    flagged
}
