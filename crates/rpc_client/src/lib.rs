// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Service Layer RPC Client Library
//!
//! A minimal JSON-RPC client used by the initializer on remote network
//! profiles. Invocations are informational only: `invokefunction` requests
//! are sent without signing or fee submission, and the decoded result is
//! returned uninterpreted.

pub mod models;
mod rpc_client;
mod rpc_exception;

pub use rpc_client::RpcClient;
pub use rpc_exception::RpcException;

// Re-export commonly used types
pub use models::{RpcRequest, RpcResponse, RpcResponseError};
