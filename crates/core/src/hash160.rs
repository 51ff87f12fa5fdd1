//! Byte-order normalization for Hash160 invocation arguments.
//!
//! Neo tooling is inconsistent about endianness: deployment output and RPC
//! display use one byte order, while Hash160 arguments handed to
//! `neoxp contract run` are interpreted in the opposite order. Every
//! Hash160-valued argument fed into an invocation call must pass through
//! [`reverse_hash160`] exactly once.

use crate::error::{CoreError, CoreResult};
use service_layer_config::ADDRESS_SIZE;

/// Reverses a Hash160 hex string by bytes.
///
/// The input may carry a `0x`/`0X` prefix; the output is always
/// `0x`-prefixed lowercase hex. An empty input is treated as "absent" and
/// maps to an empty output.
///
/// # Errors
///
/// Returns [`CoreError::Hash160Length`] if the decoded value is not exactly
/// 20 bytes, or [`CoreError::Hex`] if the string is not valid hex.
pub fn reverse_hash160(value: &str) -> CoreResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let hex_value = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    let mut raw = hex::decode(hex_value)?;
    if raw.len() != ADDRESS_SIZE {
        return Err(CoreError::Hash160Length {
            expected: ADDRESS_SIZE,
            actual: raw.len(),
        });
    }

    raw.reverse();
    Ok(format!("0x{}", hex::encode(raw)))
}
