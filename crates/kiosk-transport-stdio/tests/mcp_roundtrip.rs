//! End-to-end session over the stdio server.
//!
//! initialize → initialized → tools/list → tools/call (ok, failing)
//! → resources/read → prompts/get, all in one input stream.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use kiosk_config::KioskConfig;
use kiosk_mcp::{builtin_registry, ImageGenerator, InferenceError};
use kiosk_protocol::mcp::{methods, PROTOCOL_VERSION};
use kiosk_protocol::{JsonRpcNotification, JsonRpcRequest, RequestId};
use kiosk_transport_stdio::{McpHandler, McpServer, StdioTransport};

struct OnePixel;

#[async_trait]
impl ImageGenerator for OnePixel {
    async fn generate(&self, _: &str) -> Result<Vec<u8>, InferenceError> {
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

fn rpc(id: i64, method: &str, params: Option<Value>) -> String {
    serde_json::to_string(&JsonRpcRequest::new(RequestId::Number(id), method, params))
        .expect("ser")
}

#[tokio::test]
async fn full_session_replies_in_order() {
    let mut config = KioskConfig::default();
    config.server.name = "kiosk-test".into();
    let registry = builtin_registry(&config, Arc::new(OnePixel)).expect("registry");
    let handler = McpHandler::new(Arc::new(registry), &config.server);

    let lines = [
        rpc(
            1,
            methods::INITIALIZE,
            Some(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {},
                "clientInfo": { "name": "test", "version": "0.1" }
            })),
        ),
        serde_json::to_string(&JsonRpcNotification::new(
            methods::NOTIFICATIONS_INITIALIZED,
            None,
        ))
        .expect("ser"),
        rpc(2, methods::TOOLS_LIST, None),
        rpc(
            3,
            methods::TOOLS_CALL,
            Some(json!({"name": "calc", "arguments": {"num1": 6, "num2": 3, "operator": "/"}})),
        ),
        rpc(
            4,
            methods::TOOLS_CALL,
            Some(json!({"name": "calc", "arguments": {"num1": 5, "num2": 0, "operator": "/"}})),
        ),
        rpc(
            5,
            methods::TOOLS_CALL,
            Some(json!({"name": "generate-image", "arguments": {"prompt": "dot"}})),
        ),
        rpc(6, methods::RESOURCES_READ, Some(json!({"uri": "server://info"}))),
        rpc(
            7,
            methods::PROMPTS_GET,
            Some(json!({"name": "code-review", "arguments": {"code": "let x = 1;"}})),
        ),
    ];
    let input = lines.join("\n") + "\n";

    let reader = tokio::io::BufReader::new(input.as_bytes());
    let mut output = Vec::new();
    let transport = StdioTransport::new(reader, &mut output);
    McpServer::new(transport, handler)
        .run()
        .await
        .expect("run");

    let out: Vec<Value> = String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("json"))
        .collect();

    // One reply per request; the notification gets none.
    let ids: Vec<i64> = out.iter().filter_map(|r| r["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(out[0]["result"]["serverInfo"]["name"], "kiosk-test");
    assert_eq!(out[1]["result"]["tools"].as_array().expect("tools").len(), 4);

    assert_eq!(out[2]["result"]["content"][0]["text"], "6 / 3 = 2");
    assert_eq!(out[2]["result"]["isError"], false);
    assert_eq!(out[3]["result"]["isError"], true);

    assert_eq!(out[4]["result"]["content"][0]["data"], "iVBORw==");

    let doc: Value = serde_json::from_str(
        out[5]["result"]["contents"][0]["text"]
            .as_str()
            .expect("text"),
    )
    .expect("doc");
    assert_eq!(doc["name"], "kiosk-test");

    assert_eq!(out[6]["result"]["messages"][0]["role"], "user");
}
