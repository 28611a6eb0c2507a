//! Author record and input validation.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::{Error, FieldMessages};

/// Stable author identifier assigned by storage on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct AuthorId(i32);

impl AuthorId {
    /// Wrap a raw storage identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value as stored.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<i32> for AuthorId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted author record.
///
/// ## Invariants
/// - `id` never changes after creation.
/// - `created_at` is set exactly once, by storage, at creation.
/// - `updated_at` is monotonically non-decreasing and refreshed on every
///   successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    /// Storage-assigned identifier.
    #[schema(example = 4)]
    pub id: AuthorId,
    /// Display name.
    #[schema(example = "John Doe")]
    pub name: String,
    /// Contact e-mail address.
    #[schema(example = "john.doe@email.com")]
    pub email: String,
    /// GitHub profile link.
    #[schema(example = "github.com/john")]
    pub github: Option<String>,
    /// Twitter handle.
    #[schema(example = "johndoe")]
    pub twitter: Option<String>,
    /// Home location, alphabetic characters only.
    #[schema(example = "NewYork")]
    pub location: String,
    /// Title of the author's most recent article.
    pub latest_article_published: Option<String>,
    /// Record creation timestamp, set by storage.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp, refreshed by storage.
    pub updated_at: DateTime<Utc>,
}

/// Allow-listed author fields accepted from clients.
///
/// This is the only shape request bodies deserialise into: unknown keys are
/// dropped, so `id`, `created_at`, and `updated_at` can never be supplied.
/// Create treats absent required fields as validation failures; update
/// retains the stored value for every absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorFields {
    /// Display name. Required on create.
    pub name: Option<String>,
    /// Contact e-mail address. Required on create.
    pub email: Option<String>,
    /// GitHub profile link.
    pub github: Option<String>,
    /// Twitter handle.
    pub twitter: Option<String>,
    /// Home location. Required on create; alphabetic characters only.
    pub location: Option<String>,
    /// Title of the author's most recent article.
    pub latest_article_published: Option<String>,
}

/// Validated author draft, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    /// Display name, non-empty.
    pub name: String,
    /// Syntactically valid e-mail address.
    pub email: String,
    /// GitHub profile link.
    pub github: Option<String>,
    /// Twitter handle.
    pub twitter: Option<String>,
    /// Home location, alphabetic characters only.
    pub location: String,
    /// Title of the author's most recent article.
    pub latest_article_published: Option<String>,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static LOCATION_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Syntactic check only; deliverability is not this service's concern.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn location_regex() -> &'static Regex {
    LOCATION_RE.get_or_init(|| {
        let pattern = r"^\p{Alphabetic}+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("location regex failed to compile: {error}"))
    })
}

fn push_failure(failures: &mut FieldMessages, field: &str, message: &str) {
    failures
        .entry(field.to_owned())
        .or_default()
        .push(message.to_owned());
}

fn require_name(value: Option<String>, failures: &mut FieldMessages) -> Option<String> {
    match value {
        Some(name) if !name.trim().is_empty() => Some(name),
        _ => {
            push_failure(failures, "name", "name is required");
            None
        }
    }
}

fn require_email(value: Option<String>, failures: &mut FieldMessages) -> Option<String> {
    match value {
        Some(email) if email.trim().is_empty() => {
            push_failure(failures, "email", "email is required");
            None
        }
        Some(email) => {
            if email_regex().is_match(&email) {
                Some(email)
            } else {
                push_failure(failures, "email", "email must be a valid email address");
                None
            }
        }
        None => {
            push_failure(failures, "email", "email is required");
            None
        }
    }
}

fn require_location(value: Option<String>, failures: &mut FieldMessages) -> Option<String> {
    match value {
        Some(location) if location.trim().is_empty() => {
            push_failure(failures, "location", "location is required");
            None
        }
        Some(location) => {
            if location_regex().is_match(&location) {
                Some(location)
            } else {
                push_failure(failures, "location", "location may only contain letters");
                None
            }
        }
        None => {
            push_failure(failures, "location", "location is required");
            None
        }
    }
}

impl NewAuthor {
    /// Validate create input, collecting one message list per invalid field.
    ///
    /// # Errors
    /// Returns [`Error::validation`] naming every invalid field when `name`
    /// is missing or empty, `email` is missing or syntactically invalid, or
    /// `location` is missing or contains non-alphabetic characters.
    pub fn try_from_fields(fields: AuthorFields) -> Result<Self, Error> {
        let AuthorFields {
            name,
            email,
            github,
            twitter,
            location,
            latest_article_published,
        } = fields;

        let mut failures = FieldMessages::new();
        let name = require_name(name, &mut failures);
        let email = require_email(email, &mut failures);
        let location = require_location(location, &mut failures);

        match (name, email, location) {
            (Some(name), Some(email), Some(location)) => Ok(Self {
                name,
                email,
                github,
                twitter,
                location,
                latest_article_published,
            }),
            _ => Err(Error::validation(failures)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;
    use rstest::rstest;

    fn full_fields() -> AuthorFields {
        AuthorFields {
            name: Some("John Doe".into()),
            email: Some("john.doe@email.com".into()),
            github: Some("github.com/john".into()),
            twitter: Some("johndoe".into()),
            location: Some("NewYork".into()),
            latest_article_published: Some("How to make an API documentation".into()),
        }
    }

    fn invalid_fields(fields: AuthorFields) -> Vec<String> {
        let err = NewAuthor::try_from_fields(fields).expect_err("validation failure");
        assert_eq!(err.kind, ErrorKind::Validation);
        err.fields
            .expect("field messages present")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn accepts_complete_input() {
        let author = NewAuthor::try_from_fields(full_fields()).expect("valid draft");
        assert_eq!(author.name, "John Doe");
        assert_eq!(author.twitter.as_deref(), Some("johndoe"));
    }

    #[test]
    fn accepts_minimal_input_without_optional_fields() {
        let fields = AuthorFields {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            location: Some("London".into()),
            ..AuthorFields::default()
        };
        let author = NewAuthor::try_from_fields(fields).expect("valid draft");
        assert!(author.github.is_none());
        assert!(author.latest_article_published.is_none());
    }

    #[rstest]
    #[case::missing_name(AuthorFields { name: None, ..full_fields() }, "name")]
    #[case::blank_name(AuthorFields { name: Some("   ".into()), ..full_fields() }, "name")]
    #[case::missing_email(AuthorFields { email: None, ..full_fields() }, "email")]
    #[case::malformed_email(AuthorFields { email: Some("not-an-email".into()), ..full_fields() }, "email")]
    #[case::missing_location(AuthorFields { location: None, ..full_fields() }, "location")]
    #[case::numeric_location(AuthorFields { location: Some("NYC123".into()), ..full_fields() }, "location")]
    #[case::spaced_location(AuthorFields { location: Some("New York".into()), ..full_fields() }, "location")]
    fn rejects_single_invalid_field(#[case] fields: AuthorFields, #[case] expected: &str) {
        assert_eq!(invalid_fields(fields), vec![expected.to_owned()]);
    }

    #[test]
    fn lists_every_invalid_field() {
        let invalid = invalid_fields(AuthorFields::default());
        assert_eq!(invalid, vec!["email", "location", "name"]);
    }

    #[test]
    fn required_messages_match_the_documented_wording() {
        let err = NewAuthor::try_from_fields(AuthorFields::default()).expect_err("failure");
        let fields = err.fields.expect("field messages present");
        assert_eq!(
            fields.get("name").map(Vec::as_slice),
            Some(&["name is required".to_owned()][..])
        );
        assert_eq!(
            fields.get("email").map(Vec::as_slice),
            Some(&["email is required".to_owned()][..])
        );
    }

    #[test]
    fn location_accepts_unicode_letters() {
        let fields = AuthorFields {
            location: Some("Zürich".into()),
            ..full_fields()
        };
        assert!(NewAuthor::try_from_fields(fields).is_ok());
    }

    #[rstest]
    #[case("plain@example.com", true)]
    #[case("dotted.name@sub.example.co", true)]
    #[case("missing-at.example.com", false)]
    #[case("no-domain@", false)]
    #[case("no-tld@example", false)]
    #[case("spaces in@example.com", false)]
    fn email_syntax_cases(#[case] email: &str, #[case] valid: bool) {
        let fields = AuthorFields {
            email: Some(email.into()),
            ..full_fields()
        };
        assert_eq!(NewAuthor::try_from_fields(fields).is_ok(), valid);
    }
}
