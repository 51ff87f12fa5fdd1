// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{RpcRequest, RpcResponse};
use crate::rpc_exception::RpcException;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::debug;

/// The RPC client used to reach a remote Neo node.
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
}

impl RpcClient {
    /// Creates a new RPC client
    pub fn new(url: Url) -> Self {
        Self {
            base_address: url,
            http_client: Client::new(),
        }
    }

    /// Creates a new RPC client with an existing HTTP client
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
        }
    }

    /// Creates an RPC request
    fn as_rpc_request(method: &str, params: Vec<Value>) -> RpcRequest {
        RpcRequest::new(json!(1), method.to_string(), params)
    }

    /// Processes an RPC response body
    fn as_rpc_response(content: &str, throw_on_error: bool) -> Result<RpcResponse, RpcException> {
        let mut response: RpcResponse = serde_json::from_str(content)
            .map_err(|e| RpcException::new(-32700, format!("Parse error: {}", e)))?;

        response.raw_response = Some(content.to_string());

        if let Some(ref error) = response.error {
            if throw_on_error {
                return Err(RpcException::new(error.code, error.message.clone()));
            }
        }

        Ok(response)
    }

    /// Sends an RPC request and returns the decoded response envelope.
    pub async fn send_async(
        &self,
        request: RpcRequest,
        throw_on_error: bool,
    ) -> Result<RpcResponse, RpcException> {
        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcException::new(-32603, format!("HTTP error: {}", e)))?;

        let content = response
            .text()
            .await
            .map_err(|e| RpcException::new(-32603, format!("Failed to read response: {}", e)))?;

        Self::as_rpc_response(&content, throw_on_error)
    }

    /// Sends an RPC request and returns the result
    pub async fn rpc_send_async(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, RpcException> {
        let request = Self::as_rpc_request(method, params);
        let response = self.send_async(request, true).await?;
        response
            .result
            .ok_or_else(|| RpcException::new(-32603, "No result returned".to_string()))
    }

    /// Invokes a deployed contract method without signing or broadcasting a
    /// transaction. The raw `invokefunction` result is returned
    /// uninterpreted.
    pub async fn invoke_function(
        &self,
        script_hash: &str,
        operation: &str,
        args: Vec<Value>,
    ) -> Result<Value, RpcException> {
        debug!(
            contract = script_hash,
            method = operation,
            "sending invokefunction request"
        );

        let params = vec![json!(script_hash), json!(operation), Value::Array(args)];
        self.rpc_send_async("invokefunction", params).await
    }
}
