//! Integration tests for hero routes.

mod common;

use common::TestHarness;
use serde_json::{json, Value};

#[tokio::test]
async fn create_hero_assigns_id_and_nulls() {
    let h = TestHarness::with_server().await;
    let hero = h
        .create_hero(json!({ "name": "Deadpond", "secret_name": "Dive Wilson" }))
        .await;

    assert_eq!(hero["id"], 1);
    assert_eq!(hero["name"], "Deadpond");
    assert_eq!(hero["secret_name"], "Dive Wilson");
    assert!(hero["age"].is_null());
    assert!(hero["team_id"].is_null());
}

#[tokio::test]
async fn create_hero_ignores_client_id() {
    let h = TestHarness::with_server().await;
    let hero = h
        .create_hero(json!({ "id": 42, "name": "Spider-Boy", "secret_name": "Pedro Parqueador" }))
        .await;
    assert_eq!(hero["id"], 1);

    let resp = h.get("/heroes/42").await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn create_hero_missing_field_is_422() {
    let h = TestHarness::with_server().await;
    let resp = h.post("/heroes/", json!({ "name": "Deadpond" })).await;
    assert_eq!(resp.status(), 422);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("secret_name"));
}

#[tokio::test]
async fn create_hero_wrong_type_is_422() {
    let h = TestHarness::with_server().await;
    let resp = h
        .post(
            "/heroes/",
            json!({ "name": "Deadpond", "secret_name": "Dive Wilson", "age": "old" }),
        )
        .await;
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn create_hero_with_unknown_team_is_server_error() {
    let h = TestHarness::with_server().await;
    let resp = h
        .post(
            "/heroes/",
            json!({ "name": "Deadpond", "secret_name": "Dive Wilson", "team_id": 99 }),
        )
        .await;
    assert_eq!(resp.status(), 500);

    let heroes: Vec<Value> = h.get("/heroes/").await.json().await.unwrap();
    assert!(heroes.is_empty());
}

#[tokio::test]
async fn get_hero_embeds_null_team() {
    let h = TestHarness::with_server().await;
    h.create_hero(json!({ "name": "Deadpond", "secret_name": "Dive Wilson" }))
        .await;

    let resp = h.get("/heroes/1").await;
    assert_eq!(resp.status(), 200);
    let hero: Value = resp.json().await.unwrap();
    assert_eq!(hero["name"], "Deadpond");
    assert!(hero.get("team").is_some());
    assert!(hero["team"].is_null());
}

#[tokio::test]
async fn get_hero_embeds_team() {
    let h = TestHarness::with_server().await;
    let team = h.create_team("Preventers", "Sharp Tower").await;
    h.create_hero(json!({
        "name": "Rusty-Man",
        "secret_name": "Tommy Sharp",
        "age": 48,
        "team_id": team["id"],
    }))
    .await;

    let hero: Value = h.get("/heroes/1").await.json().await.unwrap();
    assert_eq!(hero["team_id"], team["id"]);
    assert_eq!(hero["team"]["name"], "Preventers");
    assert_eq!(hero["team"]["headquarters"], "Sharp Tower");
}

#[tokio::test]
async fn get_missing_hero_is_404() {
    let h = TestHarness::with_server().await;
    let resp = h.get("/heroes/999").await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Not found" }));
}

#[tokio::test]
async fn list_heroes_pagination() {
    let h = TestHarness::with_server().await;
    for i in 0..5 {
        h.create_hero(json!({ "name": format!("Hero {i}"), "secret_name": "Secret" }))
            .await;
    }

    let all: Vec<Value> = h.get("/heroes/").await.json().await.unwrap();
    assert_eq!(all.len(), 5);
    let ids: Vec<i64> = all.iter().map(|h| h["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);

    let page: Vec<Value> = h
        .get("/heroes/?offset=3&limit=3")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["name"], "Hero 3");

    let page: Vec<Value> = h.get("/heroes/?limit=2").await.json().await.unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn list_heroes_default_limit_is_100() {
    let h = TestHarness::with_server().await;
    {
        let conn = h.conn();
        for i in 0..105 {
            conn.execute(
                "INSERT INTO heroes (name, secret_name) VALUES (?1, 'Secret')",
                [format!("Hero {i}")],
            )
            .unwrap();
        }
    }

    let all: Vec<Value> = h.get("/heroes/").await.json().await.unwrap();
    assert_eq!(all.len(), 100);

    let rest: Vec<Value> = h.get("/heroes/?offset=100").await.json().await.unwrap();
    assert_eq!(rest.len(), 5);
}

#[tokio::test]
async fn list_heroes_rejects_limit_over_cap() {
    let h = TestHarness::with_server().await;
    assert_eq!(h.get("/heroes/?limit=101").await.status(), 422);
    assert_eq!(h.get("/heroes/?offset=-1").await.status(), 422);
    assert_eq!(h.get("/heroes/?limit=lots").await.status(), 422);
    assert_eq!(h.get("/heroes/?limit=100").await.status(), 200);
}

#[tokio::test]
async fn patch_hero_only_touches_given_fields() {
    let h = TestHarness::with_server().await;
    h.create_hero(json!({ "name": "Deadpond", "secret_name": "Dive Wilson" }))
        .await;

    let resp = h.patch("/heroes/1", json!({ "age": 30 })).await;
    assert_eq!(resp.status(), 200);
    let hero: Value = resp.json().await.unwrap();
    assert_eq!(hero["age"], 30);
    assert_eq!(hero["name"], "Deadpond");
    assert_eq!(hero["secret_name"], "Dive Wilson");

    let stored: Value = h.get("/heroes/1").await.json().await.unwrap();
    assert_eq!(stored["age"], 30);
}

#[tokio::test]
async fn patch_hero_empty_body_is_no_op() {
    let h = TestHarness::with_server().await;
    let team = h.create_team("Z-Force", "Sister Margaret's Bar").await;
    let before = h
        .create_hero(json!({
            "name": "Deadpond",
            "secret_name": "Dive Wilson",
            "age": 48,
            "team_id": team["id"],
        }))
        .await;

    let after: Value = h.patch("/heroes/1", json!({})).await.json().await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn patch_hero_null_clears_nullable_fields() {
    let h = TestHarness::with_server().await;
    let team = h.create_team("Z-Force", "Sister Margaret's Bar").await;
    h.create_hero(json!({
        "name": "Deadpond",
        "secret_name": "Dive Wilson",
        "age": 48,
        "team_id": team["id"],
    }))
    .await;

    let hero: Value = h
        .patch("/heroes/1", json!({ "age": null, "team_id": null }))
        .await
        .json()
        .await
        .unwrap();
    assert!(hero["age"].is_null());
    assert!(hero["team_id"].is_null());
    assert_eq!(hero["name"], "Deadpond");
}

#[tokio::test]
async fn patch_hero_null_name_is_ignored() {
    let h = TestHarness::with_server().await;
    h.create_hero(json!({ "name": "Deadpond", "secret_name": "Dive Wilson", "age": 48 }))
        .await;

    let resp = h
        .patch("/heroes/1", json!({ "name": null, "secret_name": null, "age": 49 }))
        .await;
    assert_eq!(resp.status(), 200);
    let hero: Value = resp.json().await.unwrap();
    assert_eq!(hero["name"], "Deadpond");
    assert_eq!(hero["secret_name"], "Dive Wilson");
    assert_eq!(hero["age"], 49);

    let stored: Value = h.get("/heroes/1").await.json().await.unwrap();
    assert_eq!(stored["name"], "Deadpond");
}

#[tokio::test]
async fn patch_hero_moves_between_teams() {
    let h = TestHarness::with_server().await;
    let first = h.create_team("Preventers", "Sharp Tower").await;
    let second = h.create_team("Z-Force", "Sister Margaret's Bar").await;
    h.create_hero(json!({
        "name": "Spider-Boy",
        "secret_name": "Pedro Parqueador",
        "team_id": first["id"],
    }))
    .await;

    h.patch("/heroes/1", json!({ "team_id": second["id"] })).await;

    let hero: Value = h.get("/heroes/1").await.json().await.unwrap();
    assert_eq!(hero["team"]["name"], "Z-Force");
}

#[tokio::test]
async fn patch_missing_hero_is_404() {
    let h = TestHarness::with_server().await;
    let resp = h.patch("/heroes/7", json!({ "age": 30 })).await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Hero not found");
}

#[tokio::test]
async fn delete_hero_then_get_is_404() {
    let h = TestHarness::with_server().await;
    h.create_hero(json!({ "name": "Deadpond", "secret_name": "Dive Wilson" }))
        .await;

    let resp = h.delete("/heroes/1").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "OK": true }));

    assert_eq!(h.get("/heroes/1").await.status(), 404);
}

#[tokio::test]
async fn delete_missing_hero_is_404() {
    let h = TestHarness::with_server().await;
    let resp = h.delete("/heroes/1").await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Hero not found. No Hero deleted.");
}

#[tokio::test]
async fn collection_without_trailing_slash() {
    let h = TestHarness::with_server().await;
    let resp = h
        .post("/heroes", json!({ "name": "Deadpond", "secret_name": "Dive Wilson" }))
        .await;
    assert_eq!(resp.status(), 200);
    let all: Vec<Value> = h.get("/heroes").await.json().await.unwrap();
    assert_eq!(all.len(), 1);
}
