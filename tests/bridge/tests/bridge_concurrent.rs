//! Several clients driving one shared document table.

use std::sync::Arc;

use doc_store::DocumentStore;
use doc_store_mcp::types::JsonRpcMessage;
use doc_store_mcp::{share, ProtocolHandler, SharedStore};
use serde_json::{json, Value};
use tokio::sync::Barrier;

/// Feed one raw JSON-RPC line to the handler, as the stdio transport would.
async fn send(handler: &ProtocolHandler, line: Value) -> Option<Value> {
    let msg: JsonRpcMessage = serde_json::from_value(line).unwrap();
    handler.handle_message(msg).await
}

async fn connect(store: SharedStore) -> ProtocolHandler {
    let handler = ProtocolHandler::new(store);
    send(
        &handler,
        json!({
            "jsonrpc": "2.0", "id": "init", "method": "initialize",
            "params": {"protocolVersion": "2024-11-05", "clientInfo": {"name": "bridge", "version": "0"}}
        }),
    )
    .await
    .unwrap();
    assert!(send(&handler, json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
        .await
        .is_none());
    handler
}

async fn tool(handler: &ProtocolHandler, name: &str, arguments: Value) -> Value {
    send(
        handler,
        json!({"jsonrpc": "2.0", "id": 7, "method": "tools/call",
               "params": {"name": name, "arguments": arguments}}),
    )
    .await
    .unwrap()["result"]
        .clone()
}

fn text(result: &Value) -> &str {
    result["content"][0]["text"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn parallel_readers_see_the_same_table() {
    let handler = Arc::new(connect(share(DocumentStore::seeded())).await);
    let barrier = Arc::new(Barrier::new(4));

    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let handler = handler.clone();
            let barrier = barrier.clone();
            tokio::spawn(async move {
                barrier.wait().await;
                let listed: Vec<String> =
                    serde_json::from_str(text(&tool(&handler, "get_all_ids", json!({})).await))
                        .unwrap();
                let mut bodies = Vec::new();
                for id in &listed {
                    let result = tool(&handler, "read_doc_contents", json!({"doc_id": id})).await;
                    assert!(result.get("isError").is_none(), "{id} should be readable");
                    bodies.push(text(&result).to_string());
                }
                (listed, bodies)
            })
        })
        .collect();

    let mut seen = Vec::new();
    for task in tasks {
        seen.push(task.await.unwrap());
    }
    assert_eq!(seen[0].0.len(), 6);
    assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn writers_on_distinct_documents_do_not_interfere() {
    let ids: Vec<String> = (0..8).map(|n| format!("note-{n}.md")).collect();
    let store = share(DocumentStore::from_documents(
        ids.iter().map(|id| (id.clone(), "draft".to_string())),
    ));
    let handler = Arc::new(connect(store.clone()).await);

    let tasks: Vec<_> = ids
        .iter()
        .cloned()
        .map(|id| {
            let handler = handler.clone();
            tokio::spawn(async move {
                let new_str = format!("final {id}");
                tool(
                    &handler,
                    "edit_document",
                    json!({"doc_id": id, "old_str": "draft", "new_str": new_str}),
                )
                .await;
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let store = store.lock().await;
    for id in &ids {
        assert_eq!(store.get(id).unwrap(), format!("final {id}"));
    }
}

#[tokio::test]
async fn edits_hand_off_between_sessions() {
    let store = share(DocumentStore::from_documents([("relay.txt", "lap-0")]));

    for lap in 0..10 {
        let handler = connect(store.clone()).await;
        let resource = send(
            &handler,
            json!({"jsonrpc": "2.0", "id": lap, "method": "resources/read",
                   "params": {"uri": "resource://docs/relay.txt"}}),
        )
        .await
        .unwrap();
        assert_eq!(resource["result"]["contents"][0]["text"], format!("lap-{lap}"));

        tool(
            &handler,
            "edit_document",
            json!({"doc_id": "relay.txt", "old_str": format!("lap-{lap}"), "new_str": format!("lap-{}", lap + 1)}),
        )
        .await;
    }

    assert_eq!(store.lock().await.get("relay.txt").unwrap(), "lap-10");
}
