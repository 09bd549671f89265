use daycore::{
    DailyRecord, DailyStore, JsonFileCollection, MemoryCollection, Scores, StoreError,
};
use serde_json::json;

fn file_store(dir: &tempfile::TempDir) -> DailyStore<JsonFileCollection> {
    DailyStore::new(JsonFileCollection::new(dir.path().join("data.json")))
}

fn sample_payload() -> DailyRecord {
    serde_json::from_value(json!({
        "workouts": [{"exercises": [{"sets": [true, true, false, false]}]}],
        "tasks": [{"completed": true}, {"completed": false}],
        "nutrition": {"calories": 2400, "protein": 175},
        "sleep_hours": 8
    }))
    .unwrap()
}

#[test]
fn test_get_missing_date_returns_default_without_persisting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let store = DailyStore::new(JsonFileCollection::new(&path));

    let rec = store.get("2099-01-01").unwrap();
    assert_eq!(rec.date, "2099-01-01");
    assert!(rec.workouts.is_empty());
    assert!(rec.tasks.is_empty());
    assert!(rec.nutrition.is_empty());
    assert_eq!(rec.sleep_hours, 0.0);
    assert_eq!(rec.scores, Scores::default());

    // the read must not bootstrap the file
    assert!(!path.exists());
}

#[test]
fn test_upsert_computes_scores_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let rec = store.upsert("2024-06-01", sample_payload()).unwrap();
    assert_eq!(rec.scores.fitness, 50);
    assert_eq!(rec.scores.tasks, 50);
    assert_eq!(rec.scores.food, 100);
    assert_eq!(rec.scores.sleep, 100);
    assert_eq!(rec.date, "2024-06-01");
}

#[test]
fn test_round_trip_overrides_client_date_and_scores() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let mut payload = sample_payload();
    payload.date = "1999-12-31".to_string();
    payload.scores = Scores {
        fitness: 99,
        tasks: 99,
        food: 99,
        sleep: 99,
    };

    store.upsert("2024-06-01", payload).unwrap();
    let rec = store.get("2024-06-01").unwrap();

    assert_eq!(rec.date, "2024-06-01");
    assert_eq!(rec.scores.fitness, 50);
    assert_eq!(rec.tasks.len(), 2);
    assert_eq!(rec.nutrition["calories"], 2400.0);
    assert_eq!(rec.sleep_hours, 8.0);
}

#[test]
fn test_upsert_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let first = store.upsert("2024-06-01", sample_payload()).unwrap();
    let second = store.upsert("2024-06-01", sample_payload()).unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_upsert_replaces_whole_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    store.upsert("2024-06-01", sample_payload()).unwrap();

    // a later write without workouts drops the old workouts entirely
    let slim: DailyRecord =
        serde_json::from_value(json!({"tasks": [{"completed": true}]})).unwrap();
    store.upsert("2024-06-01", slim).unwrap();

    let rec = store.get("2024-06-01").unwrap();
    assert!(rec.workouts.is_empty());
    assert!(rec.nutrition.is_empty());
    assert_eq!(rec.scores.tasks, 100);
    assert_eq!(rec.scores.fitness, 0);
}

#[test]
fn test_writes_to_different_dates_coexist() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    store.upsert("2024-06-01", sample_payload()).unwrap();
    store
        .upsert(
            "2024-06-02",
            serde_json::from_value(json!({"sleep_hours": 4})).unwrap(),
        )
        .unwrap();

    assert_eq!(store.get("2024-06-01").unwrap().scores.sleep, 100);
    assert_eq!(store.get("2024-06-02").unwrap().scores.sleep, 50);
}

#[test]
fn test_persisted_document_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    DailyStore::new(JsonFileCollection::new(&path))
        .upsert("2024-06-01", sample_payload())
        .unwrap();

    // a fresh store over the same file sees the record
    let store = DailyStore::new(JsonFileCollection::new(&path));
    let rec = store.get("2024-06-01").unwrap();
    assert_eq!(rec.scores.fitness, 50);
}

#[test]
fn test_corrupt_document_is_an_error_not_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = DailyStore::new(JsonFileCollection::new(&path));
    match store.get("2024-06-01") {
        Err(StoreError::Corrupt(_)) => {}
        other => panic!("expected corrupt-store error, got {other:?}"),
    }
    match store.upsert("2024-06-01", sample_payload()) {
        Err(StoreError::Corrupt(_)) => {}
        other => panic!("expected corrupt-store error, got {other:?}"),
    }
}

#[test]
fn test_memory_backend_round_trip() {
    let store = DailyStore::new(MemoryCollection::new());

    store.upsert("2024-06-01", sample_payload()).unwrap();
    let rec = store.get("2024-06-01").unwrap();
    assert_eq!(rec.scores.fitness, 50);

    // misses still default
    assert_eq!(store.get("2024-06-02").unwrap().scores, Scores::default());
}
