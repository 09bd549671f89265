use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One day's record. The collection key and the `date` field always agree
/// after a write; `scores` is recomputed on every write and never taken from
/// the client.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub nutrition: BTreeMap<String, f64>,
    #[serde(default)]
    pub sleep_hours: f64,
    #[serde(default)]
    pub scores: Scores,
}

impl DailyRecord {
    /// Zero-valued record for a date that has never been written.
    pub fn empty(date: &str) -> Self {
        Self {
            date: date.to_string(),
            ..Default::default()
        }
    }
}

/// One time block of the day's training. Only the exercises' sets feed the
/// fitness score.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default)]
    pub name: String,
    /// Completed flag per set. Clients may send any truthy/falsy JSON values
    /// here; they are normalized to bools on the way in.
    #[serde(default, deserialize_with = "de_set_flags")]
    pub sets: Vec<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// The four derived percentages. `sleep` may exceed 100 (oversleep is not
/// clamped); the others stay in 0..=100 by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(default)]
    pub fitness: u32,
    #[serde(default)]
    pub tasks: u32,
    #[serde(default)]
    pub food: u32,
    #[serde(default)]
    pub sleep: u32,
}

/// Anything that is not an array degrades to "no sets" rather than failing
/// the whole record.
fn de_set_flags<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<bool>, D::Error> {
    let raw = serde_json::Value::deserialize(de)?;
    Ok(match raw {
        serde_json::Value::Array(items) => items.iter().map(truthy).collect(),
        _ => Vec::new(),
    })
}

fn truthy(v: &serde_json::Value) -> bool {
    match v {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|x| x != 0.0).unwrap_or(false),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(a) => !a.is_empty(),
        serde_json::Value::Object(o) => !o.is_empty(),
    }
}
