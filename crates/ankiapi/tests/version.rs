//! Every request carries the protocol version the client was built with.

mod common;

use ankiapi::{AnkiClient, Flashcard};
use common::{mock_anki_response, setup_mock_server};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer};

async fn expect_action(server: &MockServer, action: &str, version: u8, result: serde_json::Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": action,
            "version": version
        })))
        .respond_with(mock_anki_response(result))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_custom_version_is_sent_for_every_action() {
    let server = setup_mock_server().await;
    expect_action(&server, "ping", 5, serde_json::Value::Null).await;
    expect_action(&server, "createDeck", 5, serde_json::json!(1)).await;
    expect_action(&server, "addNote", 5, serde_json::json!(2)).await;

    let client = AnkiClient::builder()
        .url(server.uri())
        .version(5)
        .connect()
        .await
        .unwrap();
    client.create_deck("Versioned").await.unwrap();
    client
        .add_flashcard(&Flashcard::new("Versioned", "front", "back"))
        .await
        .unwrap();

    assert_eq!(client.version(), 5);
}

#[tokio::test]
async fn test_default_version_is_six() {
    let server = setup_mock_server().await;
    expect_action(&server, "ping", 6, serde_json::Value::Null).await;
    expect_action(&server, "createDeck", 6, serde_json::json!(1)).await;

    let client = AnkiClient::builder().url(server.uri()).connect().await.unwrap();
    client.create_deck("Default").await.unwrap();

    assert_eq!(client.version(), 6);
}
