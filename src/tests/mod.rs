mod build_api_test;
mod settings_api_test;
mod study_api_test;
