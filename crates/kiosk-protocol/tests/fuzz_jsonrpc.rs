//! Property-based tests for JSON-RPC deserialization.

use kiosk_protocol::jsonrpc::JsonRpcRequest;
use proptest::prelude::*;

proptest! {
    /// Arbitrary strings never cause a panic.
    #[test]
    fn no_panic_on_arbitrary_json(input in "\\PC{0,256}") {
        let _ = serde_json::from_str::<JsonRpcRequest>(&input);
    }

    /// Well-formed requests are accepted whatever the method name.
    #[test]
    fn valid_request_parses(method in "[a-z/]{1,32}", id in any::<i64>()) {
        let json = serde_json::json!({"jsonrpc": "2.0", "id": id, "method": method});
        let parsed: Result<JsonRpcRequest, _> = serde_json::from_value(json);
        prop_assert!(parsed.is_ok(), "rejected valid request");
    }

    /// Any version other than "2.0" is rejected.
    #[test]
    fn wrong_version_fails(version in "[0-9]\\.[0-9]", id in any::<i64>()) {
        prop_assume!(version != "2.0");
        let json = serde_json::json!({"jsonrpc": version, "id": id, "method": "ping"});
        prop_assert!(serde_json::from_value::<JsonRpcRequest>(json).is_err());
    }

    /// Missing "method" field causes parse failure.
    #[test]
    fn missing_method_field_fails(id in 1i64..1000) {
        let json = format!(r#"{{"jsonrpc":"2.0","id":{id}}}"#);
        prop_assert!(serde_json::from_str::<JsonRpcRequest>(&json).is_err());
    }
}
