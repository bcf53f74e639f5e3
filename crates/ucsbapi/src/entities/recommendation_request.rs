use chrono::NaiveDateTime;
use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{assigned_id, Entity};

/// A student's request for a letter of recommendation from a professor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestDraft {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Entity for RecommendationRequest {
    type Key = i64;
    type Draft = RecommendationRequestDraft;

    const NAME: &'static str = "UCSBRecommendationRequest";
    const TABLE: &'static str = "ucsbrecommendationrequests";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "professor_email",
        "explanation",
        "date_requested",
        "date_needed",
        "done",
    ];

    fn key(&self) -> Option<i64> {
        assigned_id(self.id)
    }

    fn assign_rowid(&mut self, rowid: i64) {
        self.id = rowid;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(RecommendationRequest {
            id: row.get("id")?,
            requester_email: row.get("requester_email")?,
            professor_email: row.get("professor_email")?,
            explanation: row.get("explanation")?,
            date_requested: row.get("date_requested")?,
            date_needed: row.get("date_needed")?,
            done: row.get("done")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.requester_email,
            &self.professor_email,
            &self.explanation,
            &self.date_requested,
            &self.date_needed,
            &self.done,
        ]
    }

    fn from_draft(draft: RecommendationRequestDraft) -> Self {
        RecommendationRequest {
            id: 0,
            requester_email: draft.requester_email,
            professor_email: draft.professor_email,
            explanation: draft.explanation,
            date_requested: draft.date_requested,
            date_needed: draft.date_needed,
            done: draft.done,
        }
    }

    fn apply(&mut self, draft: RecommendationRequestDraft) {
        self.requester_email = draft.requester_email;
        self.professor_email = draft.professor_email;
        self.explanation = draft.explanation;
        self.date_requested = draft.date_requested;
        self.date_needed = draft.date_needed;
        self.done = draft.done;
    }
}
