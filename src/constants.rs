// DOM hooks the page must provide.

/// Heading whose spacing/stretch follow the scroll position.
pub const BRAND_SELECTOR: &str = ".brand";

/// `<audio>` element carrying the background track.
pub const AUDIO_ELEMENT_ID: &str = "bg-audio";
