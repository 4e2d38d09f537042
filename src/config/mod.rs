use crate::utils::error::{RelatoError, Result};
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "relatos")]
#[command(about = "Console tool for registering and querying disaster reports")]
pub struct CliConfig {
    /// Data file holding the registered reports
    #[arg(long, default_value = "relatos.txt")]
    pub data_file: String,

    /// Search radius in km used by the proximity query
    #[arg(long, default_value = "10")]
    pub radius_km: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(RelatoError::ConfigError {
                field: "data_file".to_string(),
                reason: "path cannot be empty".to_string(),
            });
        }
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(RelatoError::ConfigError {
                field: "radius_km".to_string(),
                reason: "radius must be a positive number".to_string(),
            });
        }
        Ok(())
    }
}
