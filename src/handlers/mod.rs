pub mod build_handler;
pub mod health_handler;
pub mod settings_handler;
pub mod study_handler;

pub use build_handler::*;
pub use health_handler::*;
pub use settings_handler::*;
pub use study_handler::*;
