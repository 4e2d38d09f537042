pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::LocalStorage;
pub use crate::config::CliConfig;
pub use crate::core::{Report, ReportDraft, ReportService, ReportStore, Storage};
pub use crate::utils::error::{RelatoError, Result};
