// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_request.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Request ID
    pub id: Value,

    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Method name
    pub method: String,

    /// Method parameters
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Creates a new RPC request
    pub fn new(id: Value, method: String, params: Vec<Value>) -> Self {
        Self {
            id,
            json_rpc: "2.0".to_string(),
            method,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rpc_request_serializes_envelope() {
        let request = RpcRequest::new(
            json!(1),
            "invokefunction".to_string(),
            vec![
                json!("0x0102030405060708090a0b0c0d0e0f1011121314"),
                json!("setGateway"),
                json!(["0x14131211100f0e0d0c0b0a090807060504030201"]),
            ],
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 1);
        assert_eq!(value["method"], "invokefunction");
        assert_eq!(value["params"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn rpc_request_roundtrip() {
        let request = RpcRequest::new(json!(7), "getversion".to_string(), vec![]);
        let text = serde_json::to_string(&request).unwrap();
        let parsed: RpcRequest = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.id, json!(7));
        assert_eq!(parsed.json_rpc, request.json_rpc);
        assert_eq!(parsed.method, request.method);
        assert!(parsed.params.is_empty());
    }
}
