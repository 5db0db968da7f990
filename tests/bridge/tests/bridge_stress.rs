//! Large bodies, long edit sequences, and big seed tables.

use std::time::Instant;

use doc_store::DocumentStore;
use doc_store_mcp::types::{JsonRpcMessage, JsonRpcNotification, JsonRpcRequest};
use doc_store_mcp::{share, ProtocolHandler};
use serde_json::json;

async fn init_handler(handler: &ProtocolHandler) {
    let init_req = JsonRpcRequest::new(
        0,
        "initialize",
        Some(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "test", "version": "1.0"}
        })),
    );
    handler
        .handle_message(JsonRpcMessage::Request(init_req))
        .await;
    handler
        .handle_message(JsonRpcMessage::Notification(JsonRpcNotification::new(
            "initialized",
            None,
        )))
        .await;
}

async fn send(
    handler: &ProtocolHandler,
    id: i64,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let req = JsonRpcRequest::new(id, method, Some(params));
    handler
        .handle_message(JsonRpcMessage::Request(req))
        .await
        .unwrap()
}

/// Replace-all over a large body touches every occurrence
#[tokio::test]
async fn test_large_document_replace_all() {
    let body = "lorem ipsum ".repeat(50_000);
    let handler = ProtocolHandler::new(share(DocumentStore::from_documents([(
        "big.md",
        body.as_str(),
    )])));
    init_handler(&handler).await;

    let start = Instant::now();
    let response = send(
        &handler,
        1,
        "tools/call",
        json!({
            "name": "edit_document",
            "arguments": {"doc_id": "big.md", "old_str": "ipsum", "new_str": "dolor"}
        }),
    )
    .await;
    println!("Replaced 50K occurrences in {:?}", start.elapsed());
    assert!(response["result"].get("isError").is_none());

    let response = send(
        &handler,
        2,
        "resources/read",
        json!({"uri": "resource://docs/big.md"}),
    )
    .await;
    let text = response["result"]["contents"][0]["text"].as_str().unwrap();
    assert_eq!(text.len(), body.len());
    assert!(!text.contains("ipsum"));
    assert_eq!(text.matches("dolor").count(), 50_000);
}

/// Many small edits in sequence, interleaved with prompt rendering
#[tokio::test]
async fn test_many_sequential_edits() {
    let handler = ProtocolHandler::new(share(DocumentStore::from_documents([(
        "counter.txt",
        "count=0",
    )])));
    init_handler(&handler).await;

    let start = Instant::now();
    for i in 0..1_000i64 {
        send(
            &handler,
            i,
            "tools/call",
            json!({
                "name": "edit_document",
                "arguments": {
                    "doc_id": "counter.txt",
                    "old_str": format!("count={i}"),
                    "new_str": format!("count={}", i + 1)
                }
            }),
        )
        .await;
    }
    println!("1K edits in {:?}", start.elapsed());

    let response = send(
        &handler,
        1_001,
        "prompts/get",
        json!({"name": "summarize_doc", "arguments": {"doc_id": "counter.txt"}}),
    )
    .await;
    let text = response["result"]["messages"][1]["content"]["text"]
        .as_str()
        .unwrap();
    assert!(text.ends_with("Content:\ncount=1000"));
}

/// Listing stays sorted for a large seed table
#[tokio::test]
async fn test_large_seed_listing() {
    let docs: Vec<(String, String)> = (0..5_000)
        .rev()
        .map(|i| (format!("doc-{i:05}.txt"), format!("body {i}")))
        .collect();
    let handler = ProtocolHandler::new(share(DocumentStore::from_documents(docs)));
    init_handler(&handler).await;

    let response = send(
        &handler,
        1,
        "tools/call",
        json!({"name": "get_all_ids", "arguments": {}}),
    )
    .await;
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    let ids: Vec<String> = serde_json::from_str(text).unwrap();

    assert_eq!(ids.len(), 5_000);
    assert_eq!(ids[0], "doc-00000.txt");
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}
