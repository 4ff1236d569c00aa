use std::time::Duration;

use serde_json::{Value, json};
use typedex_client::{CatalogClient, ClientConfig, FetchError, PLACEHOLDER_SPRITE, RetryPolicy};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn creature_json(id: u32, name: &str, types: &[&str]) -> Value {
    let slots: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "types": slots,
        "sprites": { "front_default": format!("https://example.test/{id}.png") }
    })
}

fn type_json(id: u32, name: &str, double_damage_to: &[&str]) -> Value {
    let targets: Vec<Value> = double_damage_to
        .iter()
        .map(|t| json!({ "name": t, "url": "" }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "damage_relations": {
            "double_damage_to": targets,
            "double_damage_from": [],
            "half_damage_to": [],
            "half_damage_from": [],
            "no_damage_to": [],
            "no_damage_from": []
        }
    })
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn config(server: &MockServer, creatures: u32, types: u32) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(server.uri())
        .with_creature_count(creatures)
        .with_type_count(types)
        .with_retry_policy(RetryPolicy::none())
}

fn fast_retry(max_attempts: usize) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        backoff_multiplier: 2.0,
    }
}

#[tokio::test]
async fn test_fetch_single_creature() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/1", creature_json(1, "bulbasaur", &["grass", "poison"])).await;

    let client = CatalogClient::with_config(config(&server, 1, 0)).unwrap();
    let creature = client.creature(1).await.unwrap();

    assert_eq!(creature.id, 1);
    assert_eq!(creature.name, "bulbasaur");
    assert_eq!(creature.types, vec!["grass", "poison"]);
    assert_eq!(creature.sprite, "https://example.test/1.png");
}

#[tokio::test]
async fn test_creature_defaults_applied() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/pokemon/1",
        json!({
            "id": 1, "name": "bulbasaur", "height": 7, "weight": 69,
            "base_experience": null,
            "types": [],
            "sprites": { "front_default": null }
        }),
    )
    .await;

    let client = CatalogClient::with_config(config(&server, 1, 0)).unwrap();
    let creature = client.creature(1).await.unwrap();

    assert_eq!(creature.base_experience, 0);
    assert_eq!(creature.sprite, PLACEHOLDER_SPRITE);
}

#[tokio::test]
async fn test_partial_failure_drops_records() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/1", creature_json(1, "bulbasaur", &["grass", "poison"])).await;
    mount_json(&server, "/pokemon/3", creature_json(3, "venusaur", &["grass", "poison"])).await;
    Mock::given(method("GET"))
        .and(path("/pokemon/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    // /pokemon/5 is not mounted and answers 404

    let mut client = CatalogClient::with_config(config(&server, 5, 0)).unwrap();
    let creatures = client.creatures().await.unwrap();
    let ids: Vec<u32> = creatures.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_total_failure_is_batch_error() {
    let server = MockServer::start().await;

    let mut client = CatalogClient::with_config(config(&server, 3, 0)).unwrap();
    let err = client.creatures().await.unwrap_err();

    match err {
        FetchError::BatchFailed {
            resource,
            attempted,
            last_error,
        } => {
            assert_eq!(resource, "pokemon");
            assert_eq!(attempted, 3);
            assert!(matches!(*last_error, FetchError::Status { status: 404, .. }));
        }
        other => panic!("expected BatchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_batch_is_not_an_error() {
    let server = MockServer::start().await;

    let mut client = CatalogClient::with_config(config(&server, 0, 0)).unwrap();
    let snapshot = client.snapshot().await.unwrap();

    assert!(snapshot.creatures.is_empty());
    assert!(snapshot.types.is_empty());
}

#[tokio::test]
async fn test_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/type/1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "/type/1", type_json(1, "normal", &[])).await;

    let config = config(&server, 0, 1).with_retry_policy(fast_retry(3));
    let client = CatalogClient::with_config(config).unwrap();
    let record = client.type_record(1).await.unwrap();

    assert_eq!(record.name, "normal");
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/type/7"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server, 0, 7).with_retry_policy(fast_retry(3));
    let client = CatalogClient::with_config(config).unwrap();
    let err = client.type_record(7).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_gives_up_after_max_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let config = config(&server, 1, 0).with_retry_policy(fast_retry(2));
    let client = CatalogClient::with_config(config).unwrap();

    assert!(client.creature(1).await.is_err());
}

#[tokio::test]
async fn test_snapshot_is_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(creature_json(1, "bulbasaur", &["grass"])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/type/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_json(1, "normal", &[])))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = CatalogClient::with_config(config(&server, 1, 1)).unwrap();
    let first = client.snapshot().await.unwrap();
    let second = client.snapshot().await.unwrap();

    assert_eq!(first.creatures.len(), 1);
    assert_eq!(first.types.len(), 1);
    assert_eq!(first.creatures, second.creatures);
}

#[tokio::test]
async fn test_invalidate_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/type/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_json(1, "normal", &[])))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = CatalogClient::with_config(config(&server, 0, 1)).unwrap();
    client.types().await.unwrap();
    client.types().await.unwrap();
    client.invalidate();
    client.types().await.unwrap();
}

#[tokio::test]
async fn test_expired_cache_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/type/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_json(1, "normal", &[])))
        .expect(2)
        .mount(&server)
        .await;

    let config = config(&server, 0, 1).with_cache_ttl(Duration::ZERO);
    let mut client = CatalogClient::with_config(config).unwrap();
    client.types().await.unwrap();
    client.types().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_keeps_successful_half() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/type/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(type_json(10, "fire", &["grass"])))
        .expect(1)
        .mount(&server)
        .await;
    // every /pokemon request answers 404

    let mut client = CatalogClient::with_config(config(&server, 2, 1)).unwrap();

    assert!(matches!(
        client.snapshot().await,
        Err(FetchError::BatchFailed { resource: "pokemon", .. })
    ));

    // types come from cache; the mock expects exactly one hit
    let types = client.types().await.unwrap();
    assert_eq!(types[0].name, "fire");
    assert!(types[0].damage_relations.double_damage_to.contains("grass"));
}
