//! Request-shape tests for model lifecycle bindings.

use cortex_client::{CortexClient, StatusCode};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> CortexClient {
    CortexClient::builder()
        .base_url(server.url())
        .build()
        .expect("failed to build client")
}

#[tokio::test]
async fn models_extracts_data_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/models")
        .with_status(200)
        .with_body(r#"{"object":"list","data":[{"id":"tinyllama"},{"id":"mistral"}]}"#)
        .create_async()
        .await;

    let models = client_for(&server).models().await.unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["id"], "tinyllama");
    mock.assert_async().await;
}

#[tokio::test]
async fn models_returns_empty_list_when_data_is_absent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/models")
        .with_status(200)
        .with_body(r#"{"object":"list"}"#)
        .create_async()
        .await;

    let models = client_for(&server).models().await.unwrap();
    assert!(models.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn start_model_posts_request_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/models/start")
        .match_body(Matcher::Json(json!({"model": "tinyllama", "ctx_len": 4096})))
        .with_status(200)
        .with_body(r#"{"message":"Started successfully!"}"#)
        .create_async()
        .await;

    let (status, text) = client_for(&server)
        .start_model(&json!({"model": "tinyllama", "ctx_len": 4096}))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, r#"{"message":"Started successfully!"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn stop_model_wraps_id_and_passes_status_and_text_through() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/models/stop")
        .match_body(Matcher::Json(json!({"model": "m1"})))
        .with_status(409)
        .with_body(r#"{"message":"Model is not running"}"#)
        .create_async()
        .await;

    let (status, text) = client_for(&server).stop_model("m1").await.unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(text, r#"{"message":"Model is not running"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn model_returns_error_body_for_non_2xx() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/models/missing")
        .with_status(404)
        .with_body(r#"{"message":"Model not found"}"#)
        .create_async()
        .await;

    // Pass-through contract: the decoded error body is the return value.
    let body = client_for(&server).model("missing").await.unwrap();
    assert_eq!(body["message"], "Model not found");
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_model_issues_delete_on_model_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/models/tinyllama")
        .with_status(200)
        .with_body(r#"{"deleted":true,"id":"tinyllama"}"#)
        .create_async()
        .await;

    let body = client_for(&server).delete_model("tinyllama").await.unwrap();
    assert_eq!(body["deleted"], true);
    mock.assert_async().await;
}

#[tokio::test]
async fn update_model_patches_descriptor() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/v1/models/tinyllama")
        .match_body(Matcher::Json(json!({"ngl": 32})))
        .with_status(200)
        .with_body(r#"{"id":"tinyllama","ngl":32}"#)
        .create_async()
        .await;

    let body = client_for(&server)
        .update_model("tinyllama", &json!({"ngl": 32}))
        .await
        .unwrap();
    assert_eq!(body["ngl"], 32);
    mock.assert_async().await;
}

#[tokio::test]
async fn pull_model_posts_and_abort_deletes_with_task_id() {
    let mut server = mockito::Server::new_async().await;
    let pull = server
        .mock("POST", "/v1/models/pull")
        .match_body(Matcher::Json(json!({"model": "tinyllama:1b"})))
        .with_status(200)
        .with_body(r#"{"message":"Model is being pulled","task":{"id":"task-1"}}"#)
        .create_async()
        .await;
    let abort = server
        .mock("DELETE", "/v1/models/pull")
        .match_body(Matcher::Json(json!({"taskId": "task-1"})))
        .with_status(200)
        .with_body(r#"{"message":"Pull aborted","taskId":"task-1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let pulled = client.pull_model(&json!({"model": "tinyllama:1b"})).await.unwrap();
    assert_eq!(pulled["task"]["id"], "task-1");
    let aborted = client.abort_model_pull("task-1").await.unwrap();
    assert_eq!(aborted["taskId"], "task-1");
    pull.assert_async().await;
    abort.assert_async().await;
}

#[tokio::test]
async fn model_sources_are_added_and_removed() {
    let mut server = mockito::Server::new_async().await;
    let add = server
        .mock("POST", "/v1/models/sources")
        .match_body(Matcher::Json(json!({"source": "huggingface.co/cortexso/tinyllama"})))
        .with_status(200)
        .with_body(r#"{"message":"Source added"}"#)
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/v1/models/sources")
        .match_body(Matcher::Json(json!({"source": "huggingface.co/cortexso/tinyllama"})))
        .with_status(200)
        .with_body(r#"{"message":"Source removed"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .add_model_source("huggingface.co/cortexso/tinyllama")
        .await
        .unwrap();
    client
        .remove_model_source(&json!({"source": "huggingface.co/cortexso/tinyllama"}))
        .await
        .unwrap();
    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn import_and_add_remote_model_post_payloads() {
    let mut server = mockito::Server::new_async().await;
    let import = server
        .mock("POST", "/v1/models/import")
        .match_body(Matcher::Json(
            json!({"model": "local", "modelPath": "/tmp/model.gguf"}),
        ))
        .with_status(200)
        .with_body(r#"{"message":"Model imported"}"#)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/v1/models/add")
        .match_body(Matcher::Json(json!({"model": "openai/gpt-4o", "engine": "openai"})))
        .with_status(200)
        .with_body(r#"{"message":"Model added"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .import_model(&json!({"model": "local", "modelPath": "/tmp/model.gguf"}))
        .await
        .unwrap();
    client
        .add_remote_model(&json!({"model": "openai/gpt-4o", "engine": "openai"}))
        .await
        .unwrap();
    import.assert_async().await;
    add.assert_async().await;
}
