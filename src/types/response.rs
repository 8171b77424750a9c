//! The Bot API response envelope.

use serde::Deserialize;
use serde_json::Value;

/// Every Bot API response is this envelope. `result` is meaningful only
/// when `ok` is true; otherwise `description` carries the server's error
/// text. Both default so an `ok:false` body without a `result` key still
/// decodes.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_decodes() {
        let envelope: ApiResponse =
            serde_json::from_str(r#"{"ok":true,"result":{"id":7},"description":""}"#).unwrap();
        assert!(envelope.ok);
        assert_eq!(envelope.result["id"], 7);
    }

    #[test]
    fn failure_envelope_decodes_without_result() {
        let envelope: ApiResponse =
            serde_json::from_str(r#"{"ok":false,"description":"bad request"}"#).unwrap();
        assert!(!envelope.ok);
        assert!(envelope.result.is_null());
        assert_eq!(envelope.description, "bad request");
    }

    #[test]
    fn null_result_decodes() {
        let envelope: ApiResponse =
            serde_json::from_str(r#"{"ok":false,"result":null,"description":"nope"}"#).unwrap();
        assert!(envelope.result.is_null());
    }
}
