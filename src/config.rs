use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Configuration for a single embedded player.
///
/// Every field the host leaves out falls back to its default, so a host
/// payload is effectively the defaults merged with the user's overrides.
/// Field names on the wire follow the module's public option names
/// (`video_id`, `disablekb`, `fs`, ...).
///
/// # Examples
///
/// ```
/// use embed_youtube::Config;
///
/// let config = Config::from_json(r#"{ "video_id": "abc123", "loop": true }"#).unwrap();
/// assert_eq!(config.width, 560);
/// assert!(config.looping);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub video_id: String,
    pub playlist: String,
    pub video_list: Vec<String>,
    pub width: i64,
    pub height: i64,
    pub autoplay: bool,
    pub cc_load_policy: bool,
    pub controls: bool,
    #[serde(rename = "disablekb")]
    pub disable_keyboard: bool,
    #[serde(rename = "fs")]
    pub fullscreen: bool,
    #[serde(rename = "modestbranding")]
    pub modest_branding: bool,
    pub rel: bool,
    #[serde(rename = "showinfo")]
    pub show_info: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub color: String,
}

pub const DEFAULT_WIDTH: i64 = 560;
pub const DEFAULT_HEIGHT: i64 = 315;
pub const DEFAULT_COLOR: &str = "red";

impl Default for Config {
    fn default() -> Self {
        Self {
            video_id: String::new(),
            playlist: String::new(),
            video_list: Vec::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            autoplay: false,
            cc_load_policy: false,
            controls: true,
            disable_keyboard: false,
            fullscreen: true,
            modest_branding: false,
            rel: false,
            show_info: false,
            looping: false,
            color: String::from(DEFAULT_COLOR),
        }
    }
}

impl Config {
    /// Decodes a host-supplied JSON payload on top of the defaults.
    ///
    /// # Errors
    /// * If the payload is not valid JSON or a field has the wrong type
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn with_video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = video_id.into();
        self
    }

    pub fn with_playlist(mut self, playlist: impl Into<String>) -> Self {
        self.playlist = playlist.into();
        self
    }

    pub fn with_video_list<I, S>(mut self, videos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.video_list = videos.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// True when at least one of video id, playlist or a non-empty video list is set.
    pub fn has_video_source(&self) -> bool {
        !self.video_id.is_empty() || !self.playlist.is_empty() || !self.video_list.is_empty()
    }

    pub fn has_valid_size(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
