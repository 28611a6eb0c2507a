//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation; regenerate with `diesel print-schema` after a migration
//! changes the table.

diesel::table! {
    /// Authors table.
    ///
    /// One row per directory entry. The `id` column is a serial primary key
    /// assigned by the database; both timestamp columns default to `now()`.
    authors (id) {
        /// Primary key: serial identifier.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Contact e-mail address.
        email -> Varchar,
        /// GitHub profile link.
        github -> Nullable<Varchar>,
        /// Twitter handle.
        twitter -> Nullable<Varchar>,
        /// Home location.
        location -> Varchar,
        /// Title of the author's most recent article.
        latest_article_published -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
