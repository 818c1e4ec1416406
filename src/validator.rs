use crate::config::{Config, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{AppError, Result};
use crate::logging::ModuleLog;

/// Outcome of a successful validation.
///
/// # Fields
/// * `config` - Config to render with, dimensions already corrected
/// * `corrected` - Whether default dimensions were substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub config: Config,
    pub corrected: bool,
}

/// Validates a config before it is handed to the URL builder.
///
/// The input is never modified; a corrected copy is returned. Each call is
/// independent, so a correction made for one render does not carry over to
/// the next.
///
/// # Arguments
/// * `config` - Config as supplied by the host
/// * `log` - Sink for the error and warning messages
///
/// # Returns
/// * `Result<Validation>` - The config to render with
///
/// # Errors
/// * `AppError::MissingVideoSource` - none of video id, playlist or a
///   non-empty video list is set. The caller shows an error state and must
///   not build a URL.
///
/// # Examples
///
/// ```
/// use embed_youtube::{validator, Config, TracingLog};
///
/// let config = Config::default().with_video_id("x").with_size(0, -5);
/// let validation = validator::validate(&config, &TracingLog).unwrap();
/// assert_eq!((validation.config.width, validation.config.height), (560, 315));
/// ```
pub fn validate(config: &Config, log: &impl ModuleLog) -> Result<Validation> {
    if !config.has_video_source() {
        let err = AppError::MissingVideoSource;
        log.error(&err.to_string());
        return Err(err);
    }

    let mut config = config.clone();
    let corrected = !config.has_valid_size();
    if corrected {
        log.warn("Invalid width or height, using defaults");
        config.width = DEFAULT_WIDTH;
        config.height = DEFAULT_HEIGHT;
    }

    Ok(Validation { config, corrected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::tests::RecordingLog;

    #[test]
    fn missing_source_fails_and_logs_error() {
        let log = RecordingLog::default();
        let result = validate(&Config::default(), &log);

        assert!(matches!(result, Err(AppError::MissingVideoSource)));
        assert_eq!(
            *log.errors.borrow(),
            vec!["No video_id, playlist, or video_list provided"]
        );
        assert!(log.warnings.borrow().is_empty());
    }

    #[test]
    fn empty_video_list_is_not_a_source() {
        let log = RecordingLog::default();
        let config = Config::default().with_video_list(Vec::<String>::new());
        assert!(validate(&config, &log).is_err());
    }

    #[test]
    fn invalid_dimensions_replaced_with_defaults() {
        let log = RecordingLog::default();
        let config = Config::default().with_video_id("x").with_size(0, -5);

        let validation = validate(&config, &log).unwrap();

        assert!(validation.corrected);
        assert_eq!(validation.config.width, 560);
        assert_eq!(validation.config.height, 315);
        assert_eq!(
            *log.warnings.borrow(),
            vec!["Invalid width or height, using defaults"]
        );
        assert!(log.errors.borrow().is_empty());
    }

    #[test]
    fn one_bad_dimension_resets_both() {
        let log = RecordingLog::default();
        let config = Config::default().with_playlist("PL").with_size(800, 0);

        let validation = validate(&config, &log).unwrap();
        assert_eq!((validation.config.width, validation.config.height), (560, 315));
    }

    #[test]
    fn valid_config_passes_through_untouched() {
        let log = RecordingLog::default();
        let config = Config::default().with_video_list(["a"]).with_size(640, 360);

        let validation = validate(&config, &log).unwrap();

        assert!(!validation.corrected);
        assert_eq!(validation.config, config);
        assert!(log.warnings.borrow().is_empty());
    }

    #[test]
    fn input_config_is_not_mutated() {
        let log = RecordingLog::default();
        let config = Config::default().with_video_id("x").with_size(-1, -1);

        let _ = validate(&config, &log).unwrap();
        assert_eq!((config.width, config.height), (-1, -1));

        // a second validation corrects again rather than relying on the first
        let second = validate(&config, &log).unwrap();
        assert!(second.corrected);
        assert_eq!(log.warnings.borrow().len(), 2);
    }
}
