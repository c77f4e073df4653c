//! End-to-end tests for the records API over a sled-backed store

use chrono::NaiveDate;
use daybook::api::RecordsApi;
use daybook::error::ErrorCode;
use daybook::notify::Severity;
use daybook::records::{DiaryDraft, Rating, RestaurantDraft};
use daybook::store::SledDocumentStore;
use std::sync::Arc;
use tempfile::TempDir;

fn create_test_api() -> (RecordsApi, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(SledDocumentStore::new(temp_dir.path().join("store")).unwrap());
    (RecordsApi::new(store), temp_dir)
}

fn diary_draft(day: u32, content: &str) -> DiaryDraft {
    DiaryDraft {
        date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        content: content.to_string(),
    }
}

fn restaurant_draft(name: &str) -> RestaurantDraft {
    RestaurantDraft {
        name: name.to_string(),
        review: "Worth a detour".to_string(),
        rating: Rating::new(4),
        lat: 37.5665,
        lng: 126.978,
        detail: None,
    }
}

#[tokio::test]
async fn diary_create_assigns_id_and_toasts() {
    let (api, _temp_dir) = create_test_api();

    let entry = api.create_diary(diary_draft(1, "First entry")).await.unwrap();
    assert!(!entry.id.is_empty());
    assert_eq!(entry.content, "First entry");

    let notes = api.notifications().entries();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Success);
    assert_eq!(notes[0].message, "Entry saved.");
    assert!(api.errors().is_empty());
    assert!(!api.is_loading());
}

#[tokio::test]
async fn diary_list_returns_newest_first() {
    let (api, _temp_dir) = create_test_api();

    let first = api.create_diary(diary_draft(1, "older")).await.unwrap();
    let second = api.create_diary(diary_draft(2, "newer")).await.unwrap();

    let entries = api.list_diary().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, second.id);
    assert_eq!(entries[1].id, first.id);
}

#[tokio::test]
async fn diary_update_rewrites_date_and_content() {
    let (api, _temp_dir) = create_test_api();

    let entry = api.create_diary(diary_draft(1, "draft")).await.unwrap();
    api.update_diary(&entry.id, diary_draft(5, "revised"))
        .await
        .unwrap();

    let entries = api.list_diary().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "revised");
    assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    // created_at survives the update
    assert_eq!(entries[0].created_at, entry.created_at);
}

#[tokio::test]
async fn diary_update_of_missing_id_rejects_and_logs() {
    let (api, _temp_dir) = create_test_api();

    let err = api
        .update_diary("no-such-id", diary_draft(1, "lost"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(err.context, "diary.update");

    let records = api.errors().errors();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, err.log_id);

    // One error notification, no success toast
    let notes = api.notifications().entries();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Error);
}

#[tokio::test]
async fn diary_delete_removes_the_entry() {
    let (api, _temp_dir) = create_test_api();

    let entry = api.create_diary(diary_draft(1, "short-lived")).await.unwrap();
    api.delete_diary(&entry.id).await.unwrap();
    assert!(api.list_diary().await.unwrap().is_empty());

    // Deleting again is accepted by the store boundary
    api.delete_diary(&entry.id).await.unwrap();
}

#[tokio::test]
async fn restaurant_crud_round_trip() {
    let (api, _temp_dir) = create_test_api();

    let saved = api
        .create_restaurant(restaurant_draft("Noodle Bar"))
        .await
        .unwrap();
    assert!(!saved.id.is_empty());
    assert_eq!(saved.rating.value(), 4);

    let mut revised = restaurant_draft("Noodle Bar");
    revised.review = "Even better on a second visit".to_string();
    revised.rating = Rating::new(5);
    revised.detail = Some("Closed Mondays".to_string());
    api.update_restaurant(&saved.id, revised).await.unwrap();

    let listed = api.list_restaurants().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].rating.value(), 5);
    assert_eq!(listed[0].detail.as_deref(), Some("Closed Mondays"));

    api.delete_restaurant(&saved.id).await.unwrap();
    assert!(api.list_restaurants().await.unwrap().is_empty());
}

#[tokio::test]
async fn restaurant_update_can_clear_detail() {
    let (api, _temp_dir) = create_test_api();

    let mut draft = restaurant_draft("Corner Cafe");
    draft.detail = Some("Cash only".to_string());
    let saved = api.create_restaurant(draft).await.unwrap();

    api.update_restaurant(&saved.id, restaurant_draft("Corner Cafe"))
        .await
        .unwrap();

    let listed = api.list_restaurants().await.unwrap();
    assert_eq!(listed[0].detail, None);
}

#[tokio::test]
async fn restaurants_list_returns_newest_first() {
    let (api, _temp_dir) = create_test_api();

    let first = api.create_restaurant(restaurant_draft("First")).await.unwrap();
    let second = api
        .create_restaurant(restaurant_draft("Second"))
        .await
        .unwrap();

    let listed = api.list_restaurants().await.unwrap();
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn each_write_produces_its_own_toast() {
    let (api, _temp_dir) = create_test_api();

    api.create_diary(diary_draft(1, "a")).await.unwrap();
    api.create_restaurant(restaurant_draft("b")).await.unwrap();

    let messages: Vec<_> = api
        .notifications()
        .entries()
        .iter()
        .map(|n| n.message.clone())
        .collect();
    assert_eq!(messages, vec!["Entry saved.", "Restaurant saved."]);
}
