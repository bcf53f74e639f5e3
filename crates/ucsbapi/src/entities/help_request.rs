use chrono::NaiveDateTime;
use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{assigned_id, Entity};

/// A team's request for help during a lab section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: i64,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub explanation: String,
    pub solved: bool,
    pub request_time: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestDraft {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub explanation: String,
    pub solved: bool,
    pub request_time: NaiveDateTime,
}

impl Entity for HelpRequest {
    type Key = i64;
    type Draft = HelpRequestDraft;

    const NAME: &'static str = "HelpRequest";
    const TABLE: &'static str = "helprequest";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "team_id",
        "table_or_breakout_room",
        "explanation",
        "solved",
        "request_time",
    ];

    fn key(&self) -> Option<i64> {
        assigned_id(self.id)
    }

    fn assign_rowid(&mut self, rowid: i64) {
        self.id = rowid;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(HelpRequest {
            id: row.get("id")?,
            requester_email: row.get("requester_email")?,
            team_id: row.get("team_id")?,
            table_or_breakout_room: row.get("table_or_breakout_room")?,
            explanation: row.get("explanation")?,
            solved: row.get("solved")?,
            request_time: row.get("request_time")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.requester_email,
            &self.team_id,
            &self.table_or_breakout_room,
            &self.explanation,
            &self.solved,
            &self.request_time,
        ]
    }

    fn from_draft(draft: HelpRequestDraft) -> Self {
        HelpRequest {
            id: 0,
            requester_email: draft.requester_email,
            team_id: draft.team_id,
            table_or_breakout_room: draft.table_or_breakout_room,
            explanation: draft.explanation,
            solved: draft.solved,
            request_time: draft.request_time,
        }
    }

    fn apply(&mut self, draft: HelpRequestDraft) {
        self.requester_email = draft.requester_email;
        self.team_id = draft.team_id;
        self.table_or_breakout_room = draft.table_or_breakout_room;
        self.explanation = draft.explanation;
        self.solved = draft.solved;
        self.request_time = draft.request_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_time_format() {
        let request = HelpRequest::from_draft(HelpRequestDraft {
            requester_email: "ttnguyen@ucsb.edu".to_string(),
            team_id: "F24-16".to_string(),
            table_or_breakout_room: "Table 16".to_string(),
            explanation: "Needs help with jpa03".to_string(),
            solved: true,
            request_time: "2024-10-02T00:00:00".parse().unwrap(),
        });

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["requestTime"], "2024-10-02T00:00:00");
        assert_eq!(json["tableOrBreakoutRoom"], "Table 16");
        assert_eq!(json["id"], 0);
    }
}
