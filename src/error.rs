use thiserror::Error;

/// Error types for the embed module.
///
/// Only a missing video source is a domain failure. Invalid dimensions are
/// corrected by the validator and never become an error value.

/// Represents all possible errors that can occur while preparing an embed.
///
/// # Error Categories
///
/// - Source: no video id, playlist or video list was configured
/// - Parsing: host payload decoding and URL parsing
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No video_id, playlist, or video_list provided")]
    MissingVideoSource,

    #[error("Config decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, AppError>;
