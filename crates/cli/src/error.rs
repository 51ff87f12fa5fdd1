//! Error types for the initializer.

use service_layer_core::CoreError;
use service_layer_rpc_client::RpcException;
use thiserror::Error;

/// Initializer errors.
///
/// Per-step invocation failures are caught at the phase level and logged;
/// only missing prerequisites and identifier validation errors travel
/// upwards.
#[derive(Error, Debug)]
pub enum InitError {
    /// The neoxp binary could not be resolved.
    #[error(
        "neoxp not found. Install with `dotnet tool install -g Neo.Express` \
         and ensure `$HOME/.dotnet/tools` is on PATH"
    )]
    NeoxpNotFound,

    /// A neoxp subcommand exited with a nonzero status.
    #[error("neoxp {command} failed: {output}")]
    ToolFailed { command: String, output: String },

    /// Token transfers are only available on a local Neo Express network.
    #[error("token transfers require a local Neo Express network")]
    TransferUnsupported,

    /// Core validation or registry error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON-RPC transport error.
    #[error(transparent)]
    Rpc(#[from] RpcException),

    /// Invalid RPC endpoint.
    #[error("Invalid RPC URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO error propagated from the standard library.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation/deserialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
