//! Service Layer Devpack SDK
//!
//! Lightweight helpers to emit action payloads matching the Service Layer
//! Devpack contract. This is a thin data model, not an HTTP client; the
//! runtime is expected to collect these actions from the function
//! environment and resolve action references into final values.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Parameter mapping attached to an action.
pub type Params = HashMap<String, Value>;

pub const ACTION_GASBANK_ENSURE: &str = "gasbank.ensureAccount";
pub const ACTION_GASBANK_WITHDRAW: &str = "gasbank.withdraw";
pub const ACTION_GASBANK_BALANCE: &str = "gasbank.balance";
pub const ACTION_GASBANK_LIST: &str = "gasbank.listTransactions";
pub const ACTION_ORACLE_CREATE: &str = "oracle.createRequest";
pub const ACTION_PRICEFEED_SNAPSHOT: &str = "pricefeed.recordSnapshot";
pub const ACTION_RANDOM_GENERATE: &str = "random.generate";
pub const ACTION_DATAFEED_SUBMIT: &str = "datafeeds.submitUpdate";
pub const ACTION_DATASTREAM_PUBLISH: &str = "datastreams.publishFrame";
pub const ACTION_DATALINK_CREATE: &str = "datalink.createDelivery";
pub const ACTION_TRIGGERS_REGISTER: &str = "triggers.register";
pub const ACTION_AUTOMATION_SCHEDULE: &str = "automation.schedule";

/// A named, parameterized request resolved later by the runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Identifier assigned by the runtime once the action is collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Action type tag.
    #[serde(rename = "type")]
    pub action_type: String,

    /// Caller-supplied parameters.
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub params: Params,
}

impl Action {
    /// Renders the action as an opaque reference placeholder for embedding
    /// in a result payload before the runtime resolves it.
    pub fn as_result(&self, meta: Option<Params>) -> ActionRef {
        ActionRef {
            devpack_ref: true,
            id: self.id.clone().unwrap_or_default(),
            action_type: self.action_type.clone(),
            meta,
        }
    }
}

/// Reference placeholder pointing at a pending action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRef {
    /// Reference marker recognised by the runtime.
    #[serde(rename = "__devpack_ref__")]
    pub devpack_ref: bool,

    /// Action id, empty until assigned.
    pub id: String,

    /// Action type tag.
    #[serde(rename = "type")]
    pub action_type: String,

    /// Optional metadata carried alongside the reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Params>,
}

/// Uniform result envelope returned by Service Layer functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

fn action(action_type: &str, params: Option<Params>) -> Action {
    Action {
        id: None,
        action_type: action_type.to_string(),
        params: params.unwrap_or_default(),
    }
}

pub fn ensure_gas_account(params: Option<Params>) -> Action {
    action(ACTION_GASBANK_ENSURE, params)
}

pub fn withdraw_gas(params: Params) -> Action {
    action(ACTION_GASBANK_WITHDRAW, Some(params))
}

pub fn balance_gas_account(params: Option<Params>) -> Action {
    action(ACTION_GASBANK_BALANCE, params)
}

pub fn list_gas_transactions(params: Params) -> Action {
    action(ACTION_GASBANK_LIST, Some(params))
}

pub fn create_oracle_request(params: Params) -> Action {
    action(ACTION_ORACLE_CREATE, Some(params))
}

pub fn record_price_snapshot(params: Params) -> Action {
    action(ACTION_PRICEFEED_SNAPSHOT, Some(params))
}

/// Requests random bytes from the VRF service. The byte length defaults to
/// 32 when the caller does not supply one.
pub fn generate_random(params: Option<Params>) -> Action {
    let mut params = params.unwrap_or_default();
    params
        .entry("length".to_string())
        .or_insert_with(|| json!(32));
    action(ACTION_RANDOM_GENERATE, Some(params))
}

pub fn submit_datafeed_update(params: Params) -> Action {
    action(ACTION_DATAFEED_SUBMIT, Some(params))
}

pub fn publish_datastream_frame(params: Params) -> Action {
    action(ACTION_DATASTREAM_PUBLISH, Some(params))
}

pub fn create_datalink_delivery(params: Params) -> Action {
    action(ACTION_DATALINK_CREATE, Some(params))
}

pub fn register_trigger(params: Params) -> Action {
    action(ACTION_TRIGGERS_REGISTER, Some(params))
}

pub fn schedule_automation(params: Params) -> Action {
    action(ACTION_AUTOMATION_SCHEDULE, Some(params))
}

/// Wraps a successful result in the uniform envelope.
pub fn success(data: Option<Value>, meta: Option<Value>) -> Response {
    Response {
        success: true,
        data,
        error: None,
        meta,
    }
}

/// Wraps an error in the uniform envelope.
pub fn failure(error: Option<Value>, meta: Option<Value>) -> Response {
    Response {
        success: false,
        data: None,
        error,
        meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_defaults_length() {
        let action = generate_random(None);
        assert_eq!(action.action_type, ACTION_RANDOM_GENERATE);
        assert_eq!(action.params.get("length"), Some(&json!(32)));
    }

    #[test]
    fn generate_random_preserves_caller_length() {
        let params: Params = [("length".to_string(), json!(8))].into_iter().collect();
        let action = generate_random(Some(params));
        assert_eq!(action.params.get("length"), Some(&json!(8)));
    }

    #[test]
    fn as_result_carries_marker_id_and_type() {
        let action = Action {
            id: None,
            action_type: "x".to_string(),
            params: Params::new(),
        };

        let reference = serde_json::to_value(action.as_result(None)).unwrap();
        assert_eq!(reference["__devpack_ref__"], true);
        assert_eq!(reference["id"], "");
        assert_eq!(reference["type"], "x");
        assert!(reference.get("meta").is_none());
    }

    #[test]
    fn as_result_adds_meta_when_supplied() {
        let mut action = create_oracle_request(Params::new());
        action.id = Some("req-1".to_string());

        let meta: Params = [("source".to_string(), json!("test"))].into_iter().collect();
        let reference = serde_json::to_value(action.as_result(Some(meta))).unwrap();
        assert_eq!(reference["id"], "req-1");
        assert_eq!(reference["meta"]["source"], "test");
    }

    #[test]
    fn action_serializes_with_type_tag() {
        let params: Params = [("url".to_string(), json!("https://example.com"))]
            .into_iter()
            .collect();
        let value = serde_json::to_value(create_oracle_request(params)).unwrap();
        assert_eq!(value["type"], ACTION_ORACLE_CREATE);
        assert_eq!(value["params"]["url"], "https://example.com");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn empty_params_are_omitted_from_the_wire_form() {
        let value = serde_json::to_value(ensure_gas_account(None)).unwrap();
        assert!(value.get("params").is_none());
    }

    #[test]
    fn envelopes_keep_success_flag_and_omit_absent_fields() {
        let ok = serde_json::to_value(success(Some(json!({"value": 7})), None)).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["data"]["value"], 7);
        assert!(ok.get("error").is_none());
        assert!(ok.get("meta").is_none());

        let err = serde_json::to_value(failure(Some(json!("boom")), Some(json!({"attempt": 1}))))
            .unwrap();
        assert_eq!(err["success"], false);
        assert_eq!(err["error"], "boom");
        assert_eq!(err["meta"]["attempt"], 1);
        assert!(err.get("data").is_none());
    }
}
