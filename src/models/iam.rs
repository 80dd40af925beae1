use crate::models::parse_row_uuid;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Name the main entity falls back to when client settings carry no name.
pub const MAIN_ENTITY_DEFAULT_NAME: &str = "Main entity";

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
}

impl FromRow<'_, sqlx::mysql::MySqlRow> for User {
    fn from_row(row: &sqlx::mysql::MySqlRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let id_str: String = row.try_get("id")?;
        let id = parse_row_uuid(&id_str)?;

        Ok(Self {
            id,
            email: row.try_get("email")?,
            is_active: row.try_get("is_active")?,
        })
    }
}

/// Domain tree node. The root folder has no parent and anchors
/// global-scope role assignments.
#[derive(Debug, Clone)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
}

impl FromRow<'_, sqlx::mysql::MySqlRow> for Folder {
    fn from_row(row: &sqlx::mysql::MySqlRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let id_str: String = row.try_get("id")?;
        let id = parse_row_uuid(&id_str)?;

        let parent_str: Option<String> = row.try_get("parent_id")?;
        let parent_id = match parent_str {
            Some(s) => Some(parse_row_uuid(&s)?),
            None => None,
        };

        Ok(Self {
            id,
            name: row.try_get("name")?,
            parent_id,
        })
    }
}

/// Organization the deployment models. The one flagged `is_main`
/// mirrors the client settings name.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: Uuid,
    pub name: String,
    pub is_main: bool,
    pub folder_id: Uuid,
}

impl FromRow<'_, sqlx::mysql::MySqlRow> for Entity {
    fn from_row(row: &sqlx::mysql::MySqlRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let id_str: String = row.try_get("id")?;
        let id = parse_row_uuid(&id_str)?;

        let folder_str: String = row.try_get("folder_id")?;
        let folder_id = parse_row_uuid(&folder_str)?;

        Ok(Self {
            id,
            name: row.try_get("name")?,
            is_main: row.try_get("is_main")?,
            folder_id,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    DomainManager,
    Analyst,
    Reader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::DomainManager => "domain_manager",
            Role::Analyst => "analyst",
            Role::Reader => "reader",
        }
    }

    /// Roles that consume a license seat. Readers do not.
    pub fn editor_roles() -> &'static [Role] {
        &[Role::Administrator, Role::DomainManager, Role::Analyst]
    }
}
