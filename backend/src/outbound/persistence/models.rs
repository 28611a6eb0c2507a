//! Diesel row types bridging the authors table and the domain model.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::outbound::persistence::schema::authors;

/// Queryable row for authors.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = authors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AuthorRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub location: String,
    pub latest_article_published: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable row for a validated author draft.
///
/// Id and both timestamps are omitted so the database assigns them.
#[derive(Debug, Insertable)]
#[diesel(table_name = authors)]
pub(crate) struct NewAuthorRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub github: Option<&'a str>,
    pub twitter: Option<&'a str>,
    pub location: &'a str,
    pub latest_article_published: Option<&'a str>,
}

/// Changeset for partial updates.
///
/// `None` fields are skipped by Diesel, so stored values are retained;
/// `updated_at` is always refreshed.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = authors)]
pub(crate) struct AuthorChangeset<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub github: Option<&'a str>,
    pub twitter: Option<&'a str>,
    pub location: Option<&'a str>,
    pub latest_article_published: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}
