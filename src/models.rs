//! Frontend Models
//!
//! Data exchanged with the venue endpoint.

use serde::Deserialize;
use serde_json::Value;

/// Opaque venue identifier, taken verbatim from the trigger's dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueId(String);

impl VenueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw reply from `DELETE /venues/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct VenueReply {
    pub status: u16,
    pub body: String,
}

impl VenueReply {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shape the endpoint answers with: `{"status": true}`
#[derive(Debug, Deserialize)]
struct DeleteVenueBody {
    #[serde(default)]
    status: Value,
}

/// Parsed outcome of a delete request
#[derive(Debug, Clone, PartialEq)]
pub enum DeletionResult {
    Deleted,
    /// Object body whose `status` is anything but boolean `true`
    Refused { status: Value },
    Malformed { reason: String },
}

impl DeletionResult {
    pub fn from_body(body: &str) -> Self {
        let value: Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(e) => return Self::Malformed { reason: e.to_string() },
        };
        if !value.is_object() {
            return Self::Malformed {
                reason: format!("expected a JSON object, got {}", value),
            };
        }
        match serde_json::from_value::<DeleteVenueBody>(value) {
            // Strict: only the JSON boolean `true` counts.
            Ok(DeleteVenueBody { status: Value::Bool(true) }) => Self::Deleted,
            Ok(DeleteVenueBody { status }) => Self::Refused { status },
            Err(e) => Self::Malformed { reason: e.to_string() },
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Status value for diagnostics (`null` when there was none)
    pub fn raw_status(&self) -> Value {
        match self {
            Self::Deleted => Value::Bool(true),
            Self::Refused { status } => status.clone(),
            Self::Malformed { .. } => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_true_is_deleted() {
        assert_eq!(DeletionResult::from_body(r#"{"status": true}"#), DeletionResult::Deleted);
    }

    #[test]
    fn test_status_false_is_refused() {
        assert_eq!(
            DeletionResult::from_body(r#"{"status": false}"#),
            DeletionResult::Refused { status: json!(false) }
        );
    }

    #[test]
    fn test_truthy_non_booleans_are_refused() {
        for body in [r#"{"status": "true"}"#, r#"{"status": 1}"#, r#"{"status": null}"#, r#"{}"#] {
            let result = DeletionResult::from_body(body);
            assert!(matches!(result, DeletionResult::Refused { .. }), "{} -> {:?}", body, result);
        }
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let result = DeletionResult::from_body(r#"{"status": true, "message": "bye"}"#);
        assert!(result.is_deleted());
    }

    #[test]
    fn test_non_object_bodies_are_malformed() {
        for body in ["<html>500</html>", "", "true", "[true]"] {
            let result = DeletionResult::from_body(body);
            assert!(matches!(result, DeletionResult::Malformed { .. }), "{} -> {:?}", body, result);
            assert_eq!(result.raw_status(), Value::Null);
        }
    }

    #[test]
    fn test_reply_success_range() {
        assert!(VenueReply { status: 200, body: String::new() }.is_ok());
        assert!(VenueReply { status: 204, body: String::new() }.is_ok());
        assert!(!VenueReply { status: 404, body: String::new() }.is_ok());
        assert!(!VenueReply { status: 500, body: String::new() }.is_ok());
    }
}
