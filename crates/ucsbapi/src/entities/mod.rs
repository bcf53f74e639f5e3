//! Record types for the API's resources.
//!
//! Each resource maps one-to-one onto a table in `sql/init_schema.sql`. The
//! [`Entity`] trait carries everything the generic repository and handlers
//! need to know about a resource: its display name, where it lives, how it
//! is keyed, and how a client-supplied [`Entity::Draft`] turns into a record.

mod article;
mod help_request;
mod menu_item;
mod organization;
mod recommendation_request;

pub use article::Article;
pub use help_request::HelpRequest;
pub use menu_item::MenuItem;
pub use organization::Organization;
pub use recommendation_request::RecommendationRequest;

use rusqlite::types::{FromSql, ToSql};
use rusqlite::Row;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

/// A primary key type usable in queries and URLs.
pub trait EntityKey:
    ToSql + FromSql + DeserializeOwned + Serialize + Display + Clone + Send + Sync + 'static
{
}

impl EntityKey for i64 {}

impl EntityKey for String {}

/// A record stored in exactly one table.
pub trait Entity: Serialize + Clone + Send + Sync + 'static {
    type Key: EntityKey;

    /// Client-supplied mutable fields, used for both create and update.
    type Draft: DeserializeOwned + Send + 'static;

    /// Name used in not-found and deletion messages.
    const NAME: &'static str;
    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;
    /// Non-key columns, in the same order as [`Entity::values`].
    const COLUMNS: &'static [&'static str];

    /// Returns the key, or `None` if the store has yet to assign one.
    fn key(&self) -> Option<Self::Key>;

    /// Stores the rowid SQLite assigned when a keyless record was inserted.
    /// Only called when [`Entity::key`] returned `None`, so records with
    /// natural keys keep the default.
    fn assign_rowid(&mut self, _rowid: i64) {}

    /// Reads a record from a row selected with the key column and all of
    /// [`Entity::COLUMNS`].
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Parameters for [`Entity::COLUMNS`], in order.
    fn values(&self) -> Vec<&dyn ToSql>;

    fn from_draft(draft: Self::Draft) -> Self;

    /// Overwrites every mutable field. The key is never changed.
    fn apply(&mut self, draft: Self::Draft);
}

/// Maps the `0` placeholder used by unsaved auto-increment records to `None`.
fn assigned_id(id: i64) -> Option<i64> {
    (id != 0).then_some(id)
}
