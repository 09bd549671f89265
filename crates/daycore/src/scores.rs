//! The four domain scores.
//!
//! Each function is pure and total: empty or zero input yields 0, never an
//! error. Rounding differs by domain (fitness/tasks truncate, sleep rounds)
//! and is load-bearing for golden-output compatibility.

use std::collections::BTreeMap;

use crate::model::{DailyRecord, Scores, Task, Workout};

/// Share of all sets completed across every exercise of every workout,
/// truncated to a whole percent. 0 when no sets exist at all.
pub fn fitness_score(workouts: &[Workout]) -> u32 {
    let mut total = 0u32;
    let mut completed = 0u32;
    for workout in workouts {
        for exercise in &workout.exercises {
            total += exercise.sets.len() as u32;
            completed += exercise.sets.iter().filter(|done| **done).count() as u32;
        }
    }
    if total == 0 {
        0
    } else {
        completed * 100 / total
    }
}

/// Share of tasks flagged completed, truncated. 0 for an empty list.
pub fn tasks_score(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.completed).count() as u32;
    completed * 100 / tasks.len() as u32
}

/// Starts at 100 and docks a flat 10 for every consumed nutrient more than
/// 20% off its target, clamped at 0. Nutrients without a positive target are
/// skipped. An empty intake map scores 0, not 100.
pub fn food_score(nutrition: &BTreeMap<String, f64>, targets: &BTreeMap<String, f64>) -> u32 {
    if nutrition.is_empty() {
        return 0;
    }
    let mut score: i32 = 100;
    for (nutrient, value) in nutrition {
        let Some(&target) = targets.get(nutrient) else {
            continue;
        };
        if target <= 0.0 {
            continue;
        }
        if (value - target).abs() / target > 0.2 {
            score -= 10;
        }
    }
    score.max(0) as u32
}

/// Percentage of an 8 hour midpoint target, standard rounding. Uncapped:
/// oversleeping scores above 100.
pub fn sleep_score(hours: f64) -> u32 {
    if hours <= 0.0 {
        return 0;
    }
    (hours / 8.0 * 100.0).round() as u32
}

impl Scores {
    /// Evaluate all four domains for one record.
    pub fn compute(record: &DailyRecord, targets: &BTreeMap<String, f64>) -> Self {
        Self {
            fitness: fitness_score(&record.workouts),
            tasks: tasks_score(&record.tasks),
            food: food_score(&record.nutrition, targets),
            sleep: sleep_score(record.sleep_hours),
        }
    }
}
