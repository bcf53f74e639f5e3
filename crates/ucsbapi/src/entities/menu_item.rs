use rusqlite::types::ToSql;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{assigned_id, Entity};

/// An item served at one of the dining commons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Entity for MenuItem {
    type Key = i64;
    type Draft = MenuItemDraft;

    const NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const TABLE: &'static str = "ucsbdiningcommonsmenuitem";
    const KEY_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["dining_commons_code", "name", "station"];

    fn key(&self) -> Option<i64> {
        assigned_id(self.id)
    }

    fn assign_rowid(&mut self, rowid: i64) {
        self.id = rowid;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(MenuItem {
            id: row.get("id")?,
            dining_commons_code: row.get("dining_commons_code")?,
            name: row.get("name")?,
            station: row.get("station")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![&self.dining_commons_code, &self.name, &self.station]
    }

    fn from_draft(draft: MenuItemDraft) -> Self {
        MenuItem {
            id: 0,
            dining_commons_code: draft.dining_commons_code,
            name: draft.name,
            station: draft.station,
        }
    }

    fn apply(&mut self, draft: MenuItemDraft) {
        self.dining_commons_code = draft.dining_commons_code;
        self.name = draft.name;
        self.station = draft.station;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let item = MenuItem {
            id: 7,
            dining_commons_code: "ortega".to_string(),
            name: "Baked Pesto Pasta with Chicken".to_string(),
            station: "Entree Specials".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"id":7,"diningCommonsCode":"ortega","name":"Baked Pesto Pasta with Chicken","station":"Entree Specials"}"#
        );
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut item = MenuItem::from_draft(MenuItemDraft {
            dining_commons_code: "ortega".to_string(),
            name: "Tofu Banh Mi Sandwich (v)".to_string(),
            station: "Entree Specials".to_string(),
        });
        assert_eq!(item.key(), None);

        item.assign_rowid(3);
        item.apply(MenuItemDraft {
            dining_commons_code: "portola".to_string(),
            name: "Cream of Broccoli Soup (v)".to_string(),
            station: "Greens & Grains".to_string(),
        });

        assert_eq!(item.id, 3);
        assert_eq!(item.dining_commons_code, "portola");
        assert_eq!(item.station, "Greens & Grains");
    }
}
