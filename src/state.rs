use crate::config::BuildConfig;
use crate::services::{IamService, SettingsService, StudyService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<StudyService>,
    pub settings_service: Arc<SettingsService>,
    pub iam_service: Arc<IamService>,
    pub build: BuildConfig,
}

impl AppState {
    pub fn new(
        study_service: Arc<StudyService>,
        settings_service: Arc<SettingsService>,
        iam_service: Arc<IamService>,
        build: BuildConfig,
    ) -> Self {
        Self {
            study_service,
            settings_service,
            iam_service,
            build,
        }
    }
}
