//! Markup production for the hosting dashboard.
//!
//! The host calls [`Renderer::render`] once per render cycle and places the
//! returned markup in the module's slot. It also loads the stylesheets
//! listed by [`styles`].

use crate::config::Config;
use crate::embed;
use crate::logging::{ModuleLog, TracingLog};
use crate::validator;
use std::fmt::{self, Display, Formatter};
use tracing::instrument;

pub const WRAPPER_CLASS: &str = "MMM-EmbedYoutube-wrapper";
pub const STYLESHEET: &str = "MMM-EmbedYoutube.css";
pub const PLAYER_TITLE: &str = "YouTube video player";
pub const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";
pub const PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
pub const CONFIG_ERROR_MESSAGE: &str =
    "YouTube module configuration error. Please check logs.";

/// Stylesheet resources the host should load for this module.
pub fn styles() -> &'static [&'static str] {
    &[STYLESHEET]
}

/// Turns a config into wrapper markup.
///
/// # Examples
///
/// ```
/// use embed_youtube::{Config, Renderer};
///
/// let renderer: Renderer = Renderer::default();
/// let markup = renderer.render(&Config::default().with_video_id("abc123"));
/// assert!(markup.contains("src=\"https://www.youtube.com/embed/abc123?version=3?autoplay=0&amp;"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer<L = TracingLog> {
    log: L,
}

impl<L: ModuleLog> Renderer<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }

    /// Renders the module content for one cycle.
    ///
    /// # Returns
    /// * `String` - The wrapper div holding either the player iframe or, when
    ///   no video source is configured, a dimmed error message
    #[instrument(level = "debug", skip_all)]
    pub fn render(&self, config: &Config) -> String {
        let body = match validator::validate(config, &self.log) {
            Ok(validation) => Iframe::for_config(&validation.config).to_string(),
            Err(_) => ConfigError.to_string(),
        };
        format!("<div class=\"{}\">{}</div>", WRAPPER_CLASS, body)
    }
}

/// The player frame for an already validated config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iframe {
    pub width: i64,
    pub height: i64,
    pub src: String,
}

impl Iframe {
    pub fn for_config(config: &Config) -> Self {
        Self {
            width: config.width,
            height: config.height,
            src: embed::build(config),
        }
    }
}

impl Display for Iframe {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "<iframe width=\"{}\" height=\"{}\" src=\"{}\" frameborder=\"0\" \
             referrerpolicy=\"{}\" allow=\"{}\" title=\"{}\" allowfullscreen></iframe>",
            self.width,
            self.height,
            escaper::encode_minimal(&self.src),
            REFERRER_POLICY,
            PERMISSIONS,
            PLAYER_TITLE,
        )
    }
}

struct ConfigError;

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "<div class=\"dimmed light small\">{}</div>", CONFIG_ERROR_MESSAGE)
    }
}
