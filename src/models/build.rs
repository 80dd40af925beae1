use crate::config::BuildConfig;
use serde::{Deserialize, Serialize};

/// Deployment metadata plus live seat usage.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    pub build: String,
    pub license_seats: i64,
    pub available_seats: i64,
    pub license_expiration: String,
}

impl BuildInfo {
    /// Seats left can go negative when a deployment is over-provisioned.
    pub fn compute(config: &BuildConfig, editor_count: i64) -> Self {
        Self {
            version: config.version.clone(),
            build: config.build.clone(),
            license_seats: config.license_seats,
            available_seats: config.license_seats - editor_count,
            license_expiration: config.license_expiration.clone(),
        }
    }
}
