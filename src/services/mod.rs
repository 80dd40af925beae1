pub mod iam_service;
pub mod settings_service;
pub mod startup_service;
pub mod study_service;

pub use iam_service::*;
pub use settings_service::*;
pub use startup_service::*;
pub use study_service::*;
