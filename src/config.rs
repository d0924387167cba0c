//! Configuration captured once at process start.
//!
//! All runtime configuration comes from the environment (a `.env` file is
//! loaded by the binary before this runs). Components receive the resulting
//! `Settings` value instead of reading variables at call sites.

use std::path::PathBuf;

use thiserror::Error;

/// Default Gemini API base URL.
pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Filename of the reusable summary report, overwritten on each download.
pub const REPORT_FILENAME: &str = "summary_report.pdf";

/// Errors raised while resolving startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set. Get an API key from https://ai.google.dev/")]
    MissingApiKey,

    #[error("failed to create upload directory {path}: {source}")]
    UploadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Process-wide settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Gemini API key. Required; the service cannot start without it.
    pub api_key: String,
    /// Gemini API base URL.
    pub api_endpoint: String,
    /// Directory for file uploads, created at startup if absent.
    pub upload_dir: PathBuf,
    /// Append-only contact log CSV.
    pub contact_log: PathBuf,
    /// Output path of the generated summary report.
    pub report_path: PathBuf,
}

impl Settings {
    /// Resolve settings from the environment.
    ///
    /// Fails when the API key is missing or the upload directory cannot be
    /// created; both are fatal startup dependencies.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_endpoint =
            std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        let upload_dir = PathBuf::from(
            std::env::var("LEXBRIEF_UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
        );
        let contact_log = PathBuf::from(
            std::env::var("LEXBRIEF_CONTACT_LOG").unwrap_or_else(|_| "contacts.csv".into()),
        );
        let report_path = PathBuf::from(
            std::env::var("LEXBRIEF_REPORT_PATH").unwrap_or_else(|_| REPORT_FILENAME.into()),
        );

        let settings = Self {
            api_key,
            api_endpoint,
            upload_dir,
            contact_log,
            report_path,
        };
        settings.ensure_dirs()?;
        Ok(settings)
    }

    /// Create the upload directory if it does not exist.
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.upload_dir).map_err(|source| ConfigError::UploadDir {
            path: self.upload_dir.clone(),
            source,
        })
    }
}
