use super::types::Label;

/// Keywords that mark a label as food-related.
pub const FOOD_KEYWORDS: &[&str] = &[
    "food",
    "dish",
    "meal",
    "cuisine",
    "ingredient",
    "fruit",
    "vegetable",
    "meat",
    "salad",
    "noodle",
    "rice",
    "bread",
    "soup",
    "chicken",
    "beef",
    "pork",
    "fish",
    "egg",
];

/// Keeps the labels whose lower-cased description contains any keyword as a
/// substring, preserving input order. Duplicates are kept as-is.
pub fn filter_labels(raw: &[Label], keywords: &[&str]) -> Vec<String> {
    raw.iter()
        .filter(|label| {
            let text = label.description.to_lowercase();
            keywords.iter().any(|keyword| text.contains(keyword))
        })
        .map(|label| label.description.clone())
        .collect()
}

/// [`filter_labels`] with the fixed food vocabulary.
pub fn filter_food_labels(raw: &[Label]) -> Vec<String> {
    filter_labels(raw, FOOD_KEYWORDS)
}
