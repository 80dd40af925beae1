pub mod build;
pub mod database;
pub mod iam;
pub mod settings;
pub mod study;

pub use build::*;
pub use database::*;
pub use iam::*;
pub use settings::*;
pub use study::*;

// Custom UUID serialization for database compatibility
pub(crate) mod uuid_as_string {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S>(uuid: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&uuid.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uuid::parse_str(&s).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn parse_row_uuid(value: &str) -> Result<uuid::Uuid, sqlx::Error> {
    uuid::Uuid::parse_str(value)
        .map_err(|e| sqlx::Error::Decode(format!("Invalid UUID format: {}", e).into()))
}
