use crate::models::{parse_row_uuid, uuid_as_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A risk study: the top-level container a risk team works inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Study {
    #[serde(with = "uuid_as_string")]
    pub id: Uuid,
    pub ref_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub status: StudyStatus,
    #[serde(with = "uuid_as_string")]
    pub folder_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Custom FromRow implementation for database compatibility
impl FromRow<'_, sqlx::mysql::MySqlRow> for Study {
    fn from_row(row: &sqlx::mysql::MySqlRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let id_str: String = row.try_get("id")?;
        let id = parse_row_uuid(&id_str)?;

        let folder_str: String = row.try_get("folder_id")?;
        let folder_id = parse_row_uuid(&folder_str)?;

        let status_str: String = row.try_get("status")?;
        let status = StudyStatus::parse(&status_str)
            .ok_or_else(|| sqlx::Error::Decode(format!("Invalid status: {}", status_str).into()))?;

        Ok(Self {
            id,
            ref_id: row.try_get("ref_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            version: row.try_get("version")?,
            status,
            folder_id,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyStatus {
    Planned,
    InProgress,
    InReview,
    Done,
    Deprecated,
}

impl StudyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyStatus::Planned => "planned",
            StudyStatus::InProgress => "in_progress",
            StudyStatus::InReview => "in_review",
            StudyStatus::Done => "done",
            StudyStatus::Deprecated => "deprecated",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(StudyStatus::Planned),
            "in_progress" => Some(StudyStatus::InProgress),
            "in_review" => Some(StudyStatus::InReview),
            "done" => Some(StudyStatus::Done),
            "deprecated" => Some(StudyStatus::Deprecated),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateStudyRequest {
    pub name: String,
    pub ref_id: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub status: Option<StudyStatus>,
    pub folder_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStudyRequest {
    pub name: Option<String>,
    pub ref_id: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub status: Option<StudyStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudyResponse {
    #[serde(with = "uuid_as_string")]
    pub id: Uuid,
    pub ref_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub status: StudyStatus,
    #[serde(with = "uuid_as_string")]
    pub folder_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedStudiesResponse {
    pub studies: Vec<StudyResponse>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct StudyQueryParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl From<Study> for StudyResponse {
    fn from(study: Study) -> Self {
        Self {
            id: study.id,
            ref_id: study.ref_id,
            name: study.name,
            description: study.description,
            version: study.version,
            status: study.status,
            folder_id: study.folder_id,
            created_at: study.created_at,
            updated_at: study.updated_at,
        }
    }
}
