use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;

use kcal_core::{
    ActivityLevel, Gender, JsonFileStore, KcalError, Ledger, MealInput, Profile, ProfileLoad,
    Store,
};

fn sample_profile() -> Profile {
    Profile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity: ActivityLevel::Moderate,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_missing_files_default_to_empty_state() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());

    assert!(store.load_ledger().unwrap().is_empty());
    assert_eq!(store.load_profile().unwrap(), ProfileLoad::Missing);
}

#[test]
fn test_ledger_round_trip() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());

    let mut ledger = Ledger::new();
    ledger
        .add_meal(
            date(2024, 6, 3),
            &MealInput::new("Eggs", 200).with_protein(13.0),
        )
        .unwrap();
    ledger
        .add_meal(date(2024, 6, 4), &MealInput::new("Rice", 250))
        .unwrap();

    store.save_ledger(&ledger).unwrap();
    assert_eq!(store.load_ledger().unwrap(), ledger);

    // Stored under the documented file name
    assert!(dir.path().join("calorie_data.json").exists());
}

#[test]
fn test_profile_round_trip() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());

    let profile = sample_profile();
    store.save_profile(&profile).unwrap();

    assert_eq!(
        store.load_profile().unwrap(),
        ProfileLoad::Loaded(profile)
    );
    assert!(dir.path().join("user_data.json").exists());
}

#[test]
fn test_save_creates_data_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = JsonFileStore::new(&nested);

    store.save_ledger(&Ledger::new()).unwrap();
    assert!(nested.join("calorie_data.json").exists());
}

#[test]
fn test_corrupt_profile_is_cleared_and_discarded() {
    let dir = tempdir().unwrap();
    let profile_path = dir.path().join("user_data.json");
    fs::write(&profile_path, "{definitely not json").unwrap();

    let mut store = JsonFileStore::new(dir.path());
    assert_eq!(store.load_profile().unwrap(), ProfileLoad::Discarded);
    assert!(!profile_path.exists());
    assert_eq!(store.load_profile().unwrap(), ProfileLoad::Missing);
}

#[test]
fn test_type_invalid_profile_is_cleared() {
    let dir = tempdir().unwrap();
    let profile_path = dir.path().join("user_data.json");
    // Syntactically valid JSON, but weight has the wrong type
    fs::write(
        &profile_path,
        r#"{"weight_kg":"seventy","height_cm":175.0,"age":30,"gender":"male","activity":"moderate"}"#,
    )
    .unwrap();

    let mut store = JsonFileStore::new(dir.path());
    assert_eq!(store.load_profile().unwrap(), ProfileLoad::Discarded);
    assert!(!profile_path.exists());
}

#[test]
fn test_corrupt_ledger_fails_loud() {
    let dir = tempdir().unwrap();
    let ledger_path = dir.path().join("calorie_data.json");
    fs::write(&ledger_path, "{broken").unwrap();

    let store = JsonFileStore::new(dir.path());
    let result = store.load_ledger();
    assert!(matches!(result, Err(KcalError::Corrupt(_))));

    // Fail loud means the file is left in place for inspection
    assert!(ledger_path.exists());
}

#[test]
fn test_save_overwrites_previous_state() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());

    let mut ledger = Ledger::new();
    ledger
        .add_meal(date(2024, 6, 3), &MealInput::new("Eggs", 200))
        .unwrap();
    store.save_ledger(&ledger).unwrap();

    ledger.delete_meal(date(2024, 6, 3), 0).unwrap();
    store.save_ledger(&ledger).unwrap();

    let reloaded = store.load_ledger().unwrap();
    let day = reloaded.day(date(2024, 6, 3)).unwrap();
    assert!(day.meals.is_empty());
    assert_eq!(day.total, 0);
}
