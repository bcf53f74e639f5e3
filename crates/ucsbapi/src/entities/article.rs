use chrono::NaiveDateTime;
use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{assigned_id, Entity};

/// A link shared with the class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl Entity for Article {
    type Key = i64;
    type Draft = ArticleDraft;

    const NAME: &'static str = "Articles";
    const TABLE: &'static str = "articles";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["title", "url", "explanation", "email", "date_added"];

    fn key(&self) -> Option<i64> {
        assigned_id(self.id)
    }

    fn assign_rowid(&mut self, rowid: i64) {
        self.id = rowid;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Article {
            id: row.get("id")?,
            title: row.get("title")?,
            url: row.get("url")?,
            explanation: row.get("explanation")?,
            email: row.get("email")?,
            date_added: row.get("date_added")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.title,
            &self.url,
            &self.explanation,
            &self.email,
            &self.date_added,
        ]
    }

    fn from_draft(draft: ArticleDraft) -> Self {
        Article {
            id: 0,
            title: draft.title,
            url: draft.url,
            explanation: draft.explanation,
            email: draft.email,
            date_added: draft.date_added,
        }
    }

    fn apply(&mut self, draft: ArticleDraft) {
        self.title = draft.title;
        self.url = draft.url;
        self.explanation = draft.explanation;
        self.email = draft.email;
        self.date_added = draft.date_added;
    }
}
