use std::collections::BTreeMap;

/// Daily intake targets the food score measures against. Fixed for the
/// single-user deployment; passed into the score call so the engine itself
/// stays pure.
pub fn nutrient_targets() -> BTreeMap<String, f64> {
    [
        ("calories", 2400.0),
        ("protein", 175.0),
        ("carbs", 300.0),
        ("fiber", 22.0),
        ("sugar", 75.0),
        ("fat", 205.0),
        ("salt", 4000.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}
