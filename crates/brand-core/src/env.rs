//! Seams between the core logic and the browser.
//!
//! The web frontend implements these over `web-sys`; tests implement them
//! with in-memory fakes. Every method may fail when the page restricts the
//! underlying API, and callers in this crate treat any failure as "feature
//! unavailable".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("scrolling is restricted: {0}")]
    ScrollRestricted(String),
    #[error("dom access failed: {0}")]
    Dom(String),
    #[error("playback rejected: {0}")]
    PlaybackBlocked(String),
}

/// Element whose presentation follows the scroll position.
pub trait RenderTarget {
    fn set_custom_property(&mut self, name: &str, value: &str) -> Result<(), EnvError>;
    fn set_class_active(&mut self, name: &str, active: bool) -> Result<(), EnvError>;
}

/// Window scroll metrics and the ability to move the scroll position.
pub trait Viewport {
    fn inner_height(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn scroll_y(&self) -> f64;
    fn scroll_to(&mut self, y: f64) -> Result<(), EnvError>;
}

/// Mutable state of a media element. `play()` itself is asynchronous in the
/// browser, so the outcome is reported back to [`crate::AudioController`].
pub trait MediaElement {
    fn set_muted(&mut self, muted: bool) -> Result<(), EnvError>;
    fn set_volume(&mut self, volume: f64) -> Result<(), EnvError>;
}

/// Owner of the manual play button.
pub trait PlayButtonHost {
    fn has_play_button(&self) -> bool;
    fn insert_play_button(&mut self) -> Result<(), EnvError>;
    fn remove_play_button(&mut self) -> Result<(), EnvError>;
}
