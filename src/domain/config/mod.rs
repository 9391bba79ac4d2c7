//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, DEFAULT_HOST, DEFAULT_LANGUAGE, DEFAULT_MODEL};
