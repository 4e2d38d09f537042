pub mod geo;
pub mod service;
pub mod store;

pub use crate::domain::model::{Report, ReportDraft};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
pub use self::service::ReportService;
pub use self::store::ReportStore;
