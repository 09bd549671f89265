use std::collections::BTreeMap;

use axum::Json;

use daycore::{nutrient_targets, Exercise, Workout};

/// The default plan the frontend seeds a fresh day with. Static data, never
/// derived from stored records.
pub async fn get_workout_template() -> Json<Vec<Workout>> {
    Json(workout_template())
}

pub async fn get_nutrition_targets() -> Json<BTreeMap<String, f64>> {
    Json(nutrient_targets())
}

fn workout_template() -> Vec<Workout> {
    vec![
        Workout {
            time: "5AM".to_string(),
            name: "σθενος".to_string(),
            exercises: vec![exercise("[0*][10] - barbell press", 8, None)],
        },
        Workout {
            time: "6AM".to_string(),
            name: String::new(),
            exercises: vec![
                exercise("[30*][10] - dumbell curl", 8, None),
                exercise("[8] wide", 1, Some(95)),
            ],
        },
        Workout {
            time: "7AM".to_string(),
            name: String::new(),
            exercises: vec![exercise("machine row", 8, None)],
        },
    ]
}

fn exercise(name: &str, sets: usize, reps: Option<u32>) -> Exercise {
    Exercise {
        name: name.to_string(),
        sets: vec![false; sets],
        reps,
    }
}
