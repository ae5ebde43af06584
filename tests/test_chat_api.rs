//! End-to-end chatbot API tests.

use inmomax_api::transport::http::create_router;
use inmomax_api::{AppState, PropertyStore};
use serde_json::json;

async fn spawn_server() -> Result<String, Box<dyn std::error::Error>> {
    // Fixed RNG seed keeps template selection reproducible.
    let state = AppState::new(PropertyStore::seeded(), Some(42));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://127.0.0.1:{}", port))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_greeting_classifies_with_high_confidence() -> Result<(), Box<dyn std::error::Error>>
{
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/chat/message", base_url))
        .json(&json!({"message": "Hola, buenos días"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    assert_eq!(resp["confidence"], 0.9);
    // All greeting templates open the same way.
    assert!(resp["reply"].as_str().unwrap().starts_with("¡Hola!"));
    assert_eq!(resp["suggestions"].as_array().unwrap().len(), 3);
    assert!(resp["timestamp"].is_string());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unmatched_text_gets_default_confidence() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/chat/message", base_url))
        .json(&json!({"message": "xyz123"}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    assert_eq!(resp["confidence"], 0.3);
    assert!(!resp["reply"].as_str().unwrap().is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_classification_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let resp = client
            .post(format!("{}/api/chat/message", base_url))
            .json(&json!({"message": "necesito una tasación urgente"}))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;
        assert_eq!(resp["confidence"], 0.9);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_empty_message_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/chat/message", base_url))
        .json(&json!({"message": "   "}))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body = resp.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_oversized_message_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/chat/message", base_url))
        .json(&json!({"message": "a".repeat(501)}))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_suggestions_lists_example_questions() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/chat/suggestions", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let questions = resp.as_array().unwrap();
    assert_eq!(questions.len(), 8);
    assert!(questions.iter().all(|q| !q.as_str().unwrap().is_empty()));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_chat_stats_count_processed_messages() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    for message in ["Hola!", "buenos días", "xyz123"] {
        client
            .post(format!("{}/api/chat/message", base_url))
            .json(&json!({"message": message}))
            .send()
            .await?;
    }

    let stats = client
        .get(format!("{}/api/chat/stats", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(stats["messages_processed"], 3);
    let top = stats["top_intents"].as_array().unwrap();
    assert_eq!(top[0]["intent"], "greeting");
    assert_eq!(top[0]["count"], 2);
    Ok(())
}
