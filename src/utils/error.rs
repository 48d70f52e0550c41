use crate::stats::OutlierError;
use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<OutlierError> for AppError {
    fn from(err: OutlierError) -> Self {
        AppError::Parse(err.to_string())
    }
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::Network(msg) => {
            println!("🌐 {}", OutputStyle::error(&format!("Network: {}", msg)));
        }
        AppError::Parse(msg) => {
            println!("⚠️  {}", OutputStyle::warning(&format!("Parse: {}", msg)));
        }
        AppError::Chart(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Chart: {}", msg)));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(e));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}
