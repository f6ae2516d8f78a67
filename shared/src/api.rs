use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Field name -> validation messages reported by the server
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Status used for failures that never reached the server
pub const NETWORK_ERROR_STATUS: u16 = 0;

/// Keys whose value is a top-level message rather than a field error
const MESSAGE_KEYS: [&str; 5] = ["detail", "error", "error_description", "message", "non_field_errors"];

/// Keys that describe the response itself and carry no message
const META_KEYS: [&str; 4] = ["code", "status", "status_code", "success"];

/// Uniform outcome of one API call.
///
/// Either the decoded payload or an error message with optional field
/// errors; never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success {
        status: u16,
        data: T,
    },
    Failure {
        status: u16,
        message: String,
        field_errors: FieldErrors,
    },
}

impl<T> ApiResult<T> {
    /// A failure that happened before any response arrived
    pub fn network_error(message: impl Into<String>) -> Self {
        ApiResult::Failure {
            status: NETWORK_ERROR_STATUS,
            message: message.into(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiResult::Success { status, .. } | ApiResult::Failure { status, .. } => *status,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == 401
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success { data, .. } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { message, .. } => Some(message),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { field_errors, .. } => Some(field_errors),
        }
    }

    /// First message reported for a form field
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .and_then(|errors| errors.get(field))
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success { status, data } => ApiResult::Success { status, data: f(data) },
            ApiResult::Failure { status, message, field_errors } => ApiResult::Failure { status, message, field_errors },
        }
    }

    /// Collapse into a plain `Result`, keeping only the message on failure
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResult::Success { data, .. } => Ok(data),
            ApiResult::Failure { message, .. } => Err(message),
        }
    }
}

impl<T: DeserializeOwned> ApiResult<T> {
    /// Normalize a status code and raw body into an `ApiResult`
    pub fn from_response(status: u16, body: &str) -> Self {
        if (200..300).contains(&status) {
            let body = if body.trim().is_empty() { "null" } else { body };
            match serde_json::from_str::<T>(body) {
                Ok(data) => ApiResult::Success { status, data },
                Err(e) => {
                    tracing::warn!(status, error = %e, "response body did not match the expected shape");
                    ApiResult::Failure {
                        status,
                        message: format!("Failed to parse response: {}", e),
                        field_errors: FieldErrors::new(),
                    }
                }
            }
        } else {
            let (message, field_errors) = normalize_error_body(status, body);
            ApiResult::Failure { status, message, field_errors }
        }
    }
}

/// Extract a top-level message and per-field messages from an error body
pub fn normalize_error_body(status: u16, body: &str) -> (String, FieldErrors) {
    let mut message = None;
    let mut field_errors = FieldErrors::new();

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            for (key, value) in &map {
                if MESSAGE_KEYS.contains(&key.as_str()) {
                    if message.is_none() {
                        message = texts_of(value).into_iter().next();
                    }
                } else if key == "errors" {
                    match value {
                        Value::Object(inner) => collect_field_errors(inner, &mut field_errors),
                        other => {
                            if message.is_none() {
                                message = texts_of(other).into_iter().next();
                            }
                        }
                    }
                } else if !META_KEYS.contains(&key.as_str()) {
                    let texts = texts_of(value);
                    if !texts.is_empty() {
                        field_errors.insert(key.clone(), texts);
                    }
                }
            }
        }
        Ok(other @ (Value::String(_) | Value::Array(_))) => {
            message = texts_of(&other).into_iter().next();
        }
        Ok(_) => {}
        Err(_) => {
            let text = body.trim();
            // Skip HTML error pages from proxies
            if !text.is_empty() && !text.starts_with('<') {
                message = Some(text.to_string());
            } else if !text.is_empty() {
                tracing::debug!(status, "ignoring non-JSON error body");
            }
        }
    }

    let message = message.unwrap_or_else(|| {
        if field_errors.is_empty() {
            fallback_message(status)
        } else {
            "Please correct the highlighted fields".to_string()
        }
    });

    (message, field_errors)
}

fn collect_field_errors(map: &Map<String, Value>, field_errors: &mut FieldErrors) {
    for (key, value) in map {
        let texts = texts_of(value);
        if !texts.is_empty() {
            field_errors.entry(key.clone()).or_default().extend(texts);
        }
    }
}

/// Flatten a string or (nested) array of strings
fn texts_of(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => vec![s.clone()],
        Value::Array(items) => items.iter().flat_map(texts_of).collect(),
        _ => Vec::new(),
    }
}

/// Message used when the server gave none
pub fn fallback_message(status: u16) -> String {
    match status {
        NETWORK_ERROR_STATUS => "Could not reach the server".to_string(),
        400 => "The request was rejected".to_string(),
        401 => "Your session has expired, please sign in again".to_string(),
        403 => "You do not have permission for this action".to_string(),
        404 => "The requested item was not found".to_string(),
        500..=599 => format!("Server error ({})", status),
        _ => format!("Request failed with status {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: u64,
        name: String,
    }

    #[test]
    fn test_success_decodes_payload() {
        let result = ApiResult::<Item>::from_response(200, r#"{"id": 7, "name": "Cement"}"#);
        assert!(result.is_success());
        assert_eq!(result.status(), 200);
        assert_eq!(result.data(), Some(&Item { id: 7, name: "Cement".to_string() }));
        assert_eq!(result.message(), None);
        assert_eq!(result.field_errors(), None);
    }

    #[test]
    fn test_empty_success_body_decodes_as_unit() {
        let result = ApiResult::<()>::from_response(204, "");
        assert!(result.is_success());
    }

    #[test]
    fn test_undecodable_success_is_failure() {
        let result = ApiResult::<Item>::from_response(200, r#"{"unexpected": true}"#);
        assert!(!result.is_success());
        assert!(result.message().unwrap().starts_with("Failed to parse response"));
        assert_eq!(result.data(), None);
    }

    #[test]
    fn test_detail_message() {
        let result = ApiResult::<Item>::from_response(403, r#"{"detail": "Not allowed"}"#);
        assert_eq!(result.message(), Some("Not allowed"));
        assert!(result.field_errors().unwrap().is_empty());
    }

    #[test]
    fn test_field_error_map() {
        let body = r#"{"phone": ["Enter a valid phone number."], "salary": ["Required.", "Must be positive."]}"#;
        let result = ApiResult::<Item>::from_response(400, body);

        assert_eq!(result.status(), 400);
        assert_eq!(result.message(), Some("Please correct the highlighted fields"));
        assert_eq!(result.field_error("phone"), Some("Enter a valid phone number."));
        assert_eq!(result.field_errors().unwrap()["salary"].len(), 2);
    }

    #[test]
    fn test_nested_errors_object() {
        let body = r#"{"message": "Validation failed", "status": 422, "errors": {"hire_date": "Invalid date"}}"#;
        let result = ApiResult::<Item>::from_response(422, body);

        assert_eq!(result.message(), Some("Validation failed"));
        assert_eq!(result.field_error("hire_date"), Some("Invalid date"));
        assert!(result.field_errors().unwrap().get("status").is_none());
    }

    #[test]
    fn test_non_field_errors_become_message() {
        let body = r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#;
        let result = ApiResult::<Item>::from_response(400, body);
        assert_eq!(result.message(), Some("Unable to log in with provided credentials."));
    }

    #[test]
    fn test_plain_text_and_html_bodies() {
        let text = ApiResult::<Item>::from_response(502, "Bad gateway");
        assert_eq!(text.message(), Some("Bad gateway"));

        let html = ApiResult::<Item>::from_response(500, "<html><body>Oops</body></html>");
        assert_eq!(html.message(), Some("Server error (500)"));

        let empty = ApiResult::<Item>::from_response(404, "");
        assert_eq!(empty.message(), Some("The requested item was not found"));
    }

    #[test]
    fn test_network_error() {
        let result = ApiResult::<Item>::network_error("connection refused");
        assert_eq!(result.status(), NETWORK_ERROR_STATUS);
        assert_eq!(result.message(), Some("connection refused"));
        assert!(!result.is_unauthorized());
    }

    #[test]
    fn test_map_and_into_result() {
        let result = ApiResult::<Item>::from_response(200, r#"{"id": 1, "name": "Brick"}"#);
        assert_eq!(result.map(|item| item.name).into_result(), Ok("Brick".to_string()));

        let failure = ApiResult::<Item>::from_response(401, "{}");
        assert!(failure.is_unauthorized());
        assert_eq!(
            failure.into_result(),
            Err("Your session has expired, please sign in again".to_string())
        );
    }
}
