// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_response.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Request ID the response answers
    #[serde(default)]
    pub id: Value,

    /// JSON-RPC version
    #[serde(rename = "jsonrpc", default)]
    pub json_rpc: String,

    /// Error object, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcResponseError>,

    /// Result payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Raw response body as received from the server
    #[serde(skip)]
    pub raw_response: Option<String>,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponseError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Optional structured error data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
