use std::time::SystemTime;

use serde::Serialize;

use crate::dto::format_system_time;

/// Uniform wrapper around every API response.
///
/// Success carries `data`, failure carries `error`; the other key is
/// omitted entirely rather than serialized as null.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    /// Whether the request was handled.
    pub success: bool,
    /// Payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure message, present on error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// RFC 3339 stamp of when the response was produced.
    pub timestamp: String,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: format_system_time(SystemTime::now()),
        }
    }

    /// Wrap a failure message in an error envelope.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: format_system_time(SystemTime::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_the_error_key() {
        let value = serde_json::to_value(Envelope::success(7)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], 7);
        assert!(value.get("error").is_none());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn error_envelope_omits_the_data_key() {
        let value = serde_json::to_value(Envelope::<()>::failure("nope")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "nope");
        assert!(value.get("data").is_none());
    }
}
