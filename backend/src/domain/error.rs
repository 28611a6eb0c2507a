//! Transport-agnostic error payload for the authors API.
//!
//! Inbound adapters map these errors to HTTP status codes; the payload shape
//! (an `error` key naming the kind, plus per-field messages for validation
//! failures) is the documented wire contract and must stay stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::middleware::trace::TraceId;

/// Field name → message list mapping reported on validation failures.
pub type FieldMessages = BTreeMap<String, Vec<String>>;

/// Stable error kind named by the `error` key of every failure body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
pub enum ErrorKind {
    /// One or more request fields failed validation.
    #[serde(rename = "ValidationError")]
    Validation,
    /// No author exists with the requested id.
    #[serde(rename = "AuthorNotFoundError")]
    NotFound,
    /// The caller is not authorised to access this resource.
    #[serde(rename = "ForbiddenAccessError")]
    Forbidden,
    /// The resource exists but does not support the request method.
    #[serde(rename = "MethodNotAllowedError")]
    MethodNotAllowed,
    /// Storage could not be reached.
    #[serde(rename = "ServiceUnavailableError")]
    ServiceUnavailable,
    /// An unexpected failure occurred; details are logged, never returned.
    #[serde(rename = "InternalServerError")]
    Internal,
}

impl ErrorKind {
    /// Wire name of the kind, as serialised under the `error` key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::NotFound => "AuthorNotFoundError",
            Self::Forbidden => "ForbiddenAccessError",
            Self::MethodNotAllowed => "MethodNotAllowedError",
            Self::ServiceUnavailable => "ServiceUnavailableError",
            Self::Internal => "InternalServerError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API error payload.
///
/// # Examples
/// ```
/// use authors_backend::domain::{Error, ErrorKind};
///
/// let err = Error::not_found();
/// assert_eq!(err.kind, ErrorKind::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Error {
    /// Error kind named in the response body.
    #[serde(rename = "error")]
    #[schema(example = "AuthorNotFoundError")]
    pub kind: ErrorKind,
    /// Per-field validation messages; present only for [`ErrorKind::Validation`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldMessages>,
    /// Correlation identifier for tracing this failure across systems.
    #[serde(rename = "traceId", skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl Error {
    /// Create an error of the given kind.
    ///
    /// Captures the current trace identifier if one is in scope so the
    /// payload is correlated automatically.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            fields: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Validation failure carrying one message list per invalid field.
    #[must_use]
    pub fn validation(fields: FieldMessages) -> Self {
        let mut error = Self::new(ErrorKind::Validation);
        error.fields = Some(fields);
        error
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Convenience constructor for [`ErrorKind::Forbidden`].
    #[must_use]
    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Forbidden)
    }

    /// Convenience constructor for [`ErrorKind::MethodNotAllowed`].
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorKind::MethodNotAllowed)
    }

    /// Convenience constructor for [`ErrorKind::ServiceUnavailable`].
    #[must_use]
    pub fn service_unavailable() -> Self {
        Self::new(ErrorKind::ServiceUnavailable)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some(fields) = &self.fields {
            let names: Vec<&str> = fields.keys().map(String::as_str).collect();
            write!(f, " ({})", names.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::trace::TraceId;
    use serde_json::{json, Value};

    fn messages(field: &str, message: &str) -> FieldMessages {
        let mut fields = FieldMessages::new();
        fields.insert(field.to_owned(), vec![message.to_owned()]);
        fields
    }

    #[test]
    fn not_found_serialises_to_documented_body() {
        let body = serde_json::to_value(Error::not_found()).expect("error JSON");
        assert_eq!(body, json!({ "error": "AuthorNotFoundError" }));
    }

    #[test]
    fn validation_carries_field_messages() {
        let err = Error::validation(messages("name", "name is required"));
        let body = serde_json::to_value(&err).expect("error JSON");
        assert_eq!(body.get("error"), Some(&Value::from("ValidationError")));
        assert_eq!(
            body.pointer("/fields/name/0"),
            Some(&Value::from("name is required"))
        );
    }

    #[test]
    fn display_names_the_kind_and_invalid_fields() {
        let err = Error::validation(messages("email", "email is required"));
        assert_eq!(err.to_string(), "ValidationError (email)");
        assert_eq!(Error::forbidden().to_string(), "ForbiddenAccessError");
    }

    #[tokio::test]
    async fn new_captures_trace_id_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid UUID");
        let expected = trace_id.to_string();
        let error = TraceId::scope(trace_id, async move { Error::internal() }).await;
        assert_eq!(error.trace_id.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn new_leaves_trace_id_unset_out_of_scope() {
        assert!(Error::internal().trace_id.is_none());
    }
}
