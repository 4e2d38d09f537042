use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 49;
pub const MAX_EMAIL_LEN: usize = 49;
pub const MAX_TYPE_LEN: usize = 29;
pub const MAX_DESCRIPTION_LEN: usize = 99;

/// One disaster observation record. Identity is positional; once stored a
/// report is never mutated, only reordered by a whole-collection sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    pub email: String,
    pub disaster_type: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw candidate input for a report, prior to validation.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub name: String,
    pub email: String,
    pub disaster_type: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}
