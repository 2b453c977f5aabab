//! Error types for the multilang terminal UI
//!
//! Wraps core errors and terminal/IO errors for unified handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] libmultilang::MultilangError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

impl AppError {
    /// Process exit code, following the core's conventions
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Core(e) => e.exit_code(),
            AppError::Terminal(_) | AppError::Application(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
