use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::Entity;

/// A student organization, keyed by its natural org code (e.g. "ZPR").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// Fields for creating or updating an organization. `org_code` is ignored on
/// update; a record cannot move to a different key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDraft {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Entity for Organization {
    type Key = String;
    type Draft = OrganizationDraft;

    const NAME: &'static str = "UCSBOrganization";
    const TABLE: &'static str = "ucsborganization";
    const KEY_COLUMN: &'static str = "org_code";
    const COLUMNS: &'static [&'static str] =
        &["org_translation_short", "org_translation", "inactive"];

    fn key(&self) -> Option<String> {
        Some(self.org_code.clone())
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Organization {
            org_code: row.get("org_code")?,
            org_translation_short: row.get("org_translation_short")?,
            org_translation: row.get("org_translation")?,
            inactive: row.get("inactive")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.org_translation_short,
            &self.org_translation,
            &self.inactive,
        ]
    }

    fn from_draft(draft: OrganizationDraft) -> Self {
        Organization {
            org_code: draft.org_code,
            org_translation_short: draft.org_translation_short,
            org_translation: draft.org_translation,
            inactive: draft.inactive,
        }
    }

    fn apply(&mut self, draft: OrganizationDraft) {
        self.org_translation_short = draft.org_translation_short;
        self.org_translation = draft.org_translation;
        self.inactive = draft.inactive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_ignores_org_code() {
        let mut org = Organization::from_draft(OrganizationDraft {
            org_code: "ZPR".to_string(),
            org_translation_short: "ZETA PHI RHO".to_string(),
            org_translation: "ZETA PHI RHO".to_string(),
            inactive: false,
        });

        org.apply(OrganizationDraft {
            org_code: "SKY".to_string(),
            org_translation_short: "SKYDIVING CLUB".to_string(),
            org_translation: "SKYDIVING CLUB AT UCSB".to_string(),
            inactive: true,
        });

        assert_eq!(org.key().as_deref(), Some("ZPR"));
        assert_eq!(org.org_translation, "SKYDIVING CLUB AT UCSB");
        assert!(org.inactive);
    }

    #[test]
    fn test_rowid_never_replaces_org_code() {
        let mut org = Organization::from_draft(OrganizationDraft {
            org_code: "SKY".to_string(),
            org_translation_short: "SKYDIVING CLUB".to_string(),
            org_translation: "SKYDIVING CLUB AT UCSB".to_string(),
            inactive: false,
        });

        org.assign_rowid(42);

        assert_eq!(org.key().as_deref(), Some("SKY"));
    }
}
