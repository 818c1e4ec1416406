//! Embed URL derivation.
//!
//! A pure function of the config: no validation, no logging, no I/O.
//! Callers validate first (see `validator::validate`); a config without any
//! video source still yields a well-formed but meaningless URL.

use crate::config::{Config, DEFAULT_COLOR};
use crate::error::Result;
use url::Url;

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Builds the YouTube embed URL for a validated config.
///
/// # Arguments
/// * `config` - Validated player configuration
///
/// # Returns
/// * `String` - `https://www.youtube.com/embed/<path>?<params>`
///
/// # Examples
///
/// ```
/// use embed_youtube::{embed, Config};
///
/// let config = Config::default().with_video_id("abc123");
/// assert_eq!(
///     embed::build(&config),
///     "https://www.youtube.com/embed/abc123?version=3?autoplay=0&cc_load_policy=0&controls=1&rel=0&showinfo=0&playlist=abc123"
/// );
/// ```
pub fn build(config: &Config) -> String {
    format!("{}{}?{}", EMBED_BASE, video_path(config), params(config).join("&"))
}

/// Same as [`build`], parsed into a [`Url`] for hosts that want structured access.
///
/// # Errors
/// * If the assembled string is rejected by the URL parser
pub fn build_url(config: &Config) -> Result<Url> {
    Ok(Url::parse(&build(config))?)
}

/// Playlist takes priority over the single video id.
fn video_path(config: &Config) -> String {
    if !config.playlist.is_empty() {
        return format!("playlist?list={}", config.playlist);
    }
    format!("{}?version=3", config.video_id)
}

fn params(config: &Config) -> Vec<String> {
    let mut params = vec![
        format!("autoplay={}", flag(config.autoplay)),
        format!("cc_load_policy={}", flag(config.cc_load_policy)),
        format!("controls={}", flag(config.controls)),
        format!("rel={}", flag(config.rel)),
        format!("showinfo={}", flag(config.show_info)),
    ];

    if !config.color.is_empty() && config.color != DEFAULT_COLOR {
        params.push(format!("color={}", config.color));
    }
    if config.disable_keyboard {
        params.push("disablekb=1".to_string());
    }
    // fs=1 is the player default and never emitted
    if !config.fullscreen {
        params.push("fs=0".to_string());
    }
    if config.modest_branding {
        params.push("modestbranding=1".to_string());
    }
    if let Some(playlist) = loop_playlist(config) {
        params.push(format!("playlist={}", playlist));
    }
    if config.looping {
        params.push("loop=1".to_string());
    }

    params
}

/// The `playlist` parameter the player needs for looping.
///
/// An explicit video list wins. Otherwise a lone video id stands in as a
/// one-entry playlist, unless a real playlist is already in the path.
fn loop_playlist(config: &Config) -> Option<String> {
    if !config.video_list.is_empty() {
        return Some(config.video_list.join(","));
    }
    if config.playlist.is_empty() && !config.video_id.is_empty() {
        return Some(config.video_id.clone());
    }
    None
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}
