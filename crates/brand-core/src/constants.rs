// Tuning constants shared by the core logic and the web frontend.

// Entrance glide
pub const INITIAL_SCROLL_FRACTION: f64 = 0.45; // fraction of viewport height to start at
pub const INITIAL_DELAY_MS: i32 = 50; // pause at the start position before gliding up
pub const INITIAL_SCROLL_DURATION_MS: f64 = 1500.0; // duration of the glide to the top

// Style interpolation range (px of scroll over which spacing/stretch settle)
pub const STYLE_RANGE_VIEWPORT_FRACTION: f64 = 0.9;
pub const STYLE_RANGE_MIN_PX: f64 = 200.0;

// Panorama reveal threshold
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.6;
pub const REVEAL_MIN_PX: f64 = 120.0;

// Fallback style bounds when the custom properties are absent or unusable
pub const DEFAULT_SPACING_START: f64 = 0.28;
pub const DEFAULT_SPACING_END: f64 = 0.02;
pub const DEFAULT_STRETCH_START: f64 = 1.15;
pub const DEFAULT_STRETCH_END: f64 = 1.0;

// Custom property names
pub const PROP_SPACING_START: &str = "--spacing-start";
pub const PROP_SPACING_END: &str = "--spacing-end";
pub const PROP_STRETCH_START: &str = "--stretch-start";
pub const PROP_STRETCH_END: &str = "--stretch-end";
pub const PROP_SPACING: &str = "--spacing";
pub const PROP_STRETCH: &str = "--stretch";

// Body class toggled once the reveal threshold is passed
pub const REVEAL_CLASS: &str = "reveal-panorama";

// Background audio
pub const AUDIO_VOLUME: f64 = 0.9;
pub const PLAY_BUTTON_CLASS: &str = "audio-play-btn";
pub const PLAY_BUTTON_LABEL: &str = "Play background music";
pub const PLAY_BUTTON_TEXT: &str = "Play Music";
