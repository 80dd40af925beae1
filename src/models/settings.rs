use crate::models::{parse_row_uuid, uuid_as_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-deployment branding and contact record. Exactly one row exists,
/// provisioned at startup in the root folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(with = "uuid_as_string")]
    pub id: Uuid,
    pub name: String,
    pub about: Option<String>,
    pub contact: Option<String>,
    pub logo: Option<String>,
    pub logo_mime_type: Option<String>,
    pub favicon: Option<String>,
    pub favicon_mime_type: Option<String>,
    #[serde(with = "uuid_as_string")]
    pub folder_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClientSettings {
    pub fn image_key(&self, kind: BrandingKind) -> Option<&str> {
        match kind {
            BrandingKind::Logo => self.logo.as_deref(),
            BrandingKind::Favicon => self.favicon.as_deref(),
        }
    }

    pub fn image_mime_type(&self, kind: BrandingKind) -> Option<&str> {
        match kind {
            BrandingKind::Logo => self.logo_mime_type.as_deref(),
            BrandingKind::Favicon => self.favicon_mime_type.as_deref(),
        }
    }
}

// Custom FromRow implementation for database compatibility
impl FromRow<'_, sqlx::mysql::MySqlRow> for ClientSettings {
    fn from_row(row: &sqlx::mysql::MySqlRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let id_str: String = row.try_get("id")?;
        let id = parse_row_uuid(&id_str)?;

        let folder_str: String = row.try_get("folder_id")?;
        let folder_id = parse_row_uuid(&folder_str)?;

        Ok(Self {
            id,
            name: row.try_get("name")?,
            about: row.try_get("about")?,
            contact: row.try_get("contact")?,
            logo: row.try_get("logo")?,
            logo_mime_type: row.try_get("logo_mime_type")?,
            favicon: row.try_get("favicon")?,
            favicon_mime_type: row.try_get("favicon_mime_type")?,
            folder_id,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Which of the two branding slots an upload or delete targets. The
/// wire name doubles as the error key for rejected files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrandingKind {
    Logo,
    Favicon,
}

impl BrandingKind {
    pub fn field_name(&self) -> &'static str {
        match self {
            BrandingKind::Logo => "logo",
            BrandingKind::Favicon => "favicon",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateClientSettingsRequest {
    pub name: Option<String>,
    pub about: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientSettingsResponse {
    #[serde(with = "uuid_as_string")]
    pub id: Uuid,
    pub name: String,
    pub about: Option<String>,
    pub contact: Option<String>,
    pub logo: Option<String>,
    pub logo_mime_type: Option<String>,
    pub favicon: Option<String>,
    pub favicon_mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Branding image returned to browsers: raw bytes as base64 plus the
/// MIME type recorded at upload time.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImagePayload {
    pub data: String,
    pub mime_type: String,
}

impl From<ClientSettings> for ClientSettingsResponse {
    fn from(settings: ClientSettings) -> Self {
        Self {
            id: settings.id,
            name: settings.name,
            about: settings.about,
            contact: settings.contact,
            logo: settings.logo,
            logo_mime_type: settings.logo_mime_type,
            favicon: settings.favicon,
            favicon_mime_type: settings.favicon_mime_type,
            created_at: settings.created_at,
            updated_at: settings.updated_at,
        }
    }
}
