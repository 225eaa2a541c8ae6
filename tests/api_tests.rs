use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;

use summoner_api::api::{create_router, AppState};
use summoner_api::db::MemoryStore;
use summoner_api::models::Champion;

fn champion(id: i32, name: &str, class: &str, style: i32) -> Champion {
    Champion {
        id,
        name: name.to_string(),
        class: class.to_string(),
        style,
        difficulty: 4,
        damage_type: "Physical".to_string(),
        damage: 5,
        sturdiness: 5,
        crowd_control: 3,
        mobility: 3,
        functionality: 3,
    }
}

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.add_champion(champion(1, "Garen", "Warrior", 0)).await;
    store.add_champion(champion(2, "Darius", "Warrior", 0)).await;
    store.add_champion(champion(3, "Lux", "Mage", 1)).await;
    store.add_champion(champion(4, "Riven", "Warrior", 0)).await;
    store
}

fn create_test_server(store: MemoryStore) -> TestServer {
    let state = AppState::new(Arc::new(store));
    TestServer::new(create_router(state)).unwrap()
}

async fn register_user(server: &TestServer, username: &str, email: &str) -> String {
    let response = server
        .post("/api/users/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": "hunter2"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let user: serde_json::Value = response.json();
    user["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(MemoryStore::new());
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_champions_uses_dataset_field_names() {
    let server = create_test_server(seeded_store().await);

    let response = server.get("/api/champions").await;
    response.assert_status_ok();

    let champions: Vec<serde_json::Value> = response.json();
    assert_eq!(champions.len(), 4);
    assert_eq!(champions[0]["Id"], 1);
    assert_eq!(champions[0]["Name"], "Garen");
    assert_eq!(champions[0]["Class"], "Warrior");
}

#[tokio::test]
async fn test_register_and_login() {
    let server = create_test_server(MemoryStore::new());
    register_user(&server, "teemo", "teemo@example.com").await;

    let response = server
        .post("/api/users/login")
        .json(&json!({
            "email": "teemo@example.com",
            "password": "hunter2"
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["username"], "teemo");
    assert!(body["user_id"].as_str().is_some());
}

#[tokio::test]
async fn test_login_rejects_bad_password() {
    let server = create_test_server(MemoryStore::new());
    register_user(&server, "teemo", "teemo@example.com").await;

    let response = server
        .post("/api/users/login")
        .json(&json!({
            "email": "teemo@example.com",
            "password": "wrong"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_is_not_found() {
    let server = create_test_server(MemoryStore::new());

    let response = server
        .post("/api/users/login")
        .json(&json!({
            "email": "ghost@example.com",
            "password": "hunter2"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let server = create_test_server(MemoryStore::new());
    register_user(&server, "teemo", "teemo@example.com").await;

    let response = server
        .post("/api/users/register")
        .json(&json!({
            "username": "other",
            "email": "teemo@example.com",
            "password": "hunter2"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let server = create_test_server(MemoryStore::new());

    let response = server
        .post("/api/users/register")
        .json(&json!({
            "username": "",
            "email": "teemo@example.com",
            "password": "hunter2"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let server = create_test_server(MemoryStore::new());
    let response = server
        .get("/api/users/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_preferences_and_fetch_favorites() {
    let server = create_test_server(seeded_store().await);
    let user_id = register_user(&server, "teemo", "teemo@example.com").await;

    let response = server
        .post(&format!("/api/users/{user_id}/preferences"))
        .json(&json!({ "preferences": [1, 3] }))
        .await;
    response.assert_status_ok();

    let response = server.get(&format!("/api/users/{user_id}/favorites")).await;
    response.assert_status_ok();
    let favorites: Vec<serde_json::Value> = response.json();
    let names: Vec<&str> = favorites.iter().map(|c| c["Name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Garen", "Lux"]);
}

#[tokio::test]
async fn test_save_preferences_replaces_the_whole_set() {
    let server = create_test_server(seeded_store().await);
    let user_id = register_user(&server, "teemo", "teemo@example.com").await;

    server
        .post(&format!("/api/users/{user_id}/preferences"))
        .json(&json!({ "preferences": [1, 2, 3] }))
        .await
        .assert_status_ok();
    server
        .post(&format!("/api/users/{user_id}/preferences"))
        .json(&json!({ "preferences": [4] }))
        .await
        .assert_status_ok();

    let favorites: Vec<serde_json::Value> =
        server.get(&format!("/api/users/{user_id}/favorites")).await.json();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["Id"], 4);
}

#[tokio::test]
async fn test_save_preferences_rejects_unknown_champion_ids() {
    let server = create_test_server(seeded_store().await);
    let user_id = register_user(&server, "teemo", "teemo@example.com").await;

    let response = server
        .post(&format!("/api/users/{user_id}/preferences"))
        .json(&json!({ "preferences": [1, 999] }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "One or more invalid champion IDs provided.");
}

#[tokio::test]
async fn test_save_preferences_for_unknown_user_is_not_found() {
    let server = create_test_server(seeded_store().await);

    let response = server
        .post("/api/users/00000000-0000-0000-0000-000000000000/preferences")
        .json(&json!({ "preferences": [1] }))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommendations_scenario() {
    // User A likes Garen; user B likes the other two Warriors; user C likes
    // nothing. Both strategies should surface Darius and Riven for A.
    let server = create_test_server(seeded_store().await);
    let user_a = register_user(&server, "a", "a@example.com").await;
    let user_b = register_user(&server, "b", "b@example.com").await;
    register_user(&server, "c", "c@example.com").await;

    server
        .post(&format!("/api/users/{user_a}/preferences"))
        .json(&json!({ "preferences": [1] }))
        .await
        .assert_status_ok();
    server
        .post(&format!("/api/users/{user_b}/preferences"))
        .json(&json!({ "preferences": [2, 4] }))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/api/recommendations/{user_a}")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let content_ids: Vec<i64> = body["contentBased"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["Id"].as_i64().unwrap())
        .collect();
    let collab_ids: Vec<i64> = body["collaborative"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["Id"].as_i64().unwrap())
        .collect();

    assert_eq!(content_ids, vec![2, 4]);
    assert_eq!(collab_ids, vec![2, 4]);
}

#[tokio::test]
async fn test_recommendations_empty_preferences_yield_empty_lists() {
    let server = create_test_server(seeded_store().await);
    let user_id = register_user(&server, "teemo", "teemo@example.com").await;

    let response = server.get(&format!("/api/recommendations/{user_id}")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["contentBased"].as_array().unwrap().len(), 0);
    assert_eq!(body["collaborative"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_recommendations_unknown_user_is_not_found() {
    let server = create_test_server(seeded_store().await);
    let response = server
        .get("/api/recommendations/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let server = create_test_server(MemoryStore::new());
    let response = server.get("/health").await;
    assert!(response.maybe_header("x-request-id").is_some());
}
