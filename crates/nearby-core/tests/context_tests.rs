// Rust guideline compliant 2026-10-19

//! Unit tests for the session context load/save boundary.

use chrono::{TimeZone, Utc};
use nearby_core::{ContextStore, Coordinate, SessionContext, SortKey};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_default_context() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = ContextStore::new(temp_dir.path().join("session.json"));

    let context = store.load().expect("Failed to load context");
    assert_eq!(context, SessionContext::default());
    assert!(context.first_time_user);
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = ContextStore::new(temp_dir.path().join("session.json"));

    let mut context = SessionContext::default();
    context.complete_onboarding();
    context.preferred_radius_km = Some(5.0);
    context.preferred_sort = Some(SortKey::Price);
    let captured_at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    context
        .record_fix(Coordinate::new(17.4940, 78.4595).unwrap(), captured_at)
        .expect("valid fix");

    store.save(&context).expect("Failed to save context");
    let loaded = store.load().expect("Failed to load context");

    assert_eq!(loaded, context);
    assert!(!loaded.first_time_user);
    assert_eq!(loaded.last_known.map(|fix| fix.captured_at), Some(captured_at));
}

#[test]
fn test_corrupt_file_is_invalid_context() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("session.json");
    fs::write(&path, "{ first_time_user: ").expect("Failed to write file");

    let err = ContextStore::new(path).load().expect_err("corrupt context");
    assert!(err.to_string().starts_with("Invalid context"));
}

#[test]
fn test_save_rejects_non_positive_radius() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("session.json");
    let store = ContextStore::new(path.clone());

    let context = SessionContext {
        preferred_radius_km: Some(0.0),
        ..SessionContext::default()
    };
    assert!(store.save(&context).is_err());
    assert!(!path.exists());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("session.json");
    fs::write(&path, r#"{"preferred_sort":"rating"}"#).expect("Failed to write file");

    let context = ContextStore::new(path).load().expect("Failed to load context");
    assert!(context.first_time_user);
    assert_eq!(context.preferred_sort, Some(SortKey::Rating));
}
