/// YouTube embed widget for a dashboard host.
///
/// This library turns a player configuration into a YouTube embed URL and
/// the iframe markup that displays it. Everything is synchronous and pure
/// apart from the log messages emitted during validation.
///
/// # Architecture
///
/// The library is structured into several key components:
/// - `Config`: Player options with host-compatible defaults
/// - `embed`: Embed URL derivation
/// - `validator`: Source check and dimension correction
/// - `Renderer`: Wrapper markup, iframe and error state
/// - `ModuleLog`: Logging capability used by validator and renderer
///
/// # Example
/// ```
/// use embed_youtube::{Config, Renderer, TracingLog};
///
/// let config = Config::from_json(r#"{ "video_id": "abc123", "loop": true }"#).unwrap();
/// let markup = Renderer::new(TracingLog).render(&config);
/// assert!(markup.contains("playlist=abc123&amp;loop=1"));
/// ```
pub mod config;
pub mod embed;
pub mod error;
pub mod logging;
pub mod render;
pub mod validator;

/// Name the host registers the module under; prefixes log messages.
pub const MODULE_NAME: &str = "MMM-EmbedYoutube";

// Re-export commonly used items
pub use config::Config;
pub use error::AppError;
pub use logging::{ModuleLog, TracingLog};
pub use render::{styles, Renderer};
pub use validator::Validation;
