/// Hand-authored trigger rule: a food category paired with the symptom it may
/// provoke, plus the thresholds the correlation scan applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRule {
    pub id: &'static str,
    pub trigger_food_category: &'static str,
    pub associated_symptom: &'static str,
    /// Hours after a meal during which a symptom counts as co-occurring.
    pub cooccurrence_window_hours: f64,
    /// Fewer relevant food entries than this and the rule is not evaluated.
    pub min_incidents_for_analysis: usize,
    /// Fraction of food instances that must be followed by the symptom, in (0, 1].
    pub cooccurrence_threshold: f64,
    pub flag_message: &'static str,
}

/// Built-in rule table. Compiled into the engine, not configuration-loaded.
pub const DEFAULT_RULES: &[TriggerRule] = &[
    TriggerRule {
        id: "R001",
        trigger_food_category: "Dairy",
        associated_symptom: "Bloating",
        cooccurrence_window_hours: 6.0,
        min_incidents_for_analysis: 5,
        cooccurrence_threshold: 0.7,
        flag_message: "Possible Lactose Sensitivity (Bloating)",
    },
    TriggerRule {
        id: "R002",
        trigger_food_category: "Dairy",
        associated_symptom: "Gas",
        cooccurrence_window_hours: 6.0,
        min_incidents_for_analysis: 5,
        cooccurrence_threshold: 0.7,
        flag_message: "Possible Lactose Sensitivity (Gas)",
    },
    TriggerRule {
        id: "R003",
        trigger_food_category: "Gluten",
        associated_symptom: "Abdominal Pain",
        cooccurrence_window_hours: 12.0,
        min_incidents_for_analysis: 7,
        cooccurrence_threshold: 0.6,
        flag_message: "Potential Gluten Trigger (Abdominal Pain)",
    },
    TriggerRule {
        id: "R004",
        trigger_food_category: "Spicy Foods",
        associated_symptom: "Heartburn",
        cooccurrence_window_hours: 4.0,
        min_incidents_for_analysis: 5,
        cooccurrence_threshold: 0.75,
        flag_message: "Possible Spicy Food Sensitivity (Heartburn)",
    },
    TriggerRule {
        id: "R005",
        trigger_food_category: "High-FODMAP",
        associated_symptom: "Bloating",
        cooccurrence_window_hours: 8.0,
        min_incidents_for_analysis: 10,
        cooccurrence_threshold: 0.65,
        flag_message: "Potential FODMAP Trigger (Bloating)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_table_has_five_well_formed_rules() {
        assert_eq!(DEFAULT_RULES.len(), 5);
        for rule in DEFAULT_RULES {
            assert!(rule.cooccurrence_window_hours > 0.0, "{}", rule.id);
            assert!(rule.min_incidents_for_analysis > 0, "{}", rule.id);
            assert!(
                rule.cooccurrence_threshold > 0.0 && rule.cooccurrence_threshold <= 1.0,
                "{}",
                rule.id
            );
            assert!(!rule.flag_message.is_empty(), "{}", rule.id);
        }
    }

    #[test]
    fn rule_ids_are_unique() {
        let ids: HashSet<_> = DEFAULT_RULES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), DEFAULT_RULES.len());
    }

    #[test]
    fn dairy_is_covered_by_two_distinct_rules() {
        let dairy: Vec<_> = DEFAULT_RULES
            .iter()
            .filter(|r| r.trigger_food_category == "Dairy")
            .collect();
        assert_eq!(dairy.len(), 2);
        assert_ne!(dairy[0].associated_symptom, dairy[1].associated_symptom);
    }
}
