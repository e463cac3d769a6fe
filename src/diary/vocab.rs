//! Closed choice sets offered by entry forms. The analysis rules match
//! against these same strings, case-sensitively, so additions here must stay
//! in sync with `analysis::rules`.

pub const MEAL_TYPES: &[&str] = &["Breakfast", "Lunch", "Dinner", "Snack"];

pub const SEVERITIES: &[&str] = &["Mild", "Moderate", "Severe"];

pub const SYMPTOM_TYPES: &[&str] = &[
    "Bloating",
    "Gas",
    "Stomach Ache",
    "Abdominal Pain",
    "Heartburn",
    "Headache",
    "Nausea",
    "Diarrhea",
    "Constipation",
    "Fatigue",
    "Skin Rash",
    "Other",
];

pub const FOOD_CATEGORIES: &[&str] = &[
    "Dairy",
    "Gluten",
    "Spicy Foods",
    "High-FODMAP",
    "Caffeine",
    "Alcohol",
    "Eggs",
    "Nuts",
    "Shellfish",
    "Uncategorized",
];

pub fn is_known_symptom(symptom_type: &str) -> bool {
    SYMPTOM_TYPES.contains(&symptom_type)
}

pub fn is_known_category(food_category: &str) -> bool {
    FOOD_CATEGORIES.contains(&food_category)
}
