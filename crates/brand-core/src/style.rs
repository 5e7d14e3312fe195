//! Scroll-reactive heading style.
//!
//! [`ScrollStyler`] owns the last observed scroll offset and the per-frame
//! debounce flag. Scroll and resize events feed [`ScrollStyler::observe_scroll`];
//! the caller requests an animation frame whenever that returns `true` and
//! runs [`ScrollStyler::update`] inside it.

use crate::constants::*;
use crate::env::RenderTarget;
use crate::math::{clamp, lerp, number_or};

/// Interpolation endpoints read once from the heading's computed style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleBounds {
    pub spacing_start: f64,
    pub spacing_end: f64,
    pub stretch_start: f64,
    pub stretch_end: f64,
}

impl Default for StyleBounds {
    fn default() -> Self {
        Self {
            spacing_start: DEFAULT_SPACING_START,
            spacing_end: DEFAULT_SPACING_END,
            stretch_start: DEFAULT_STRETCH_START,
            stretch_end: DEFAULT_STRETCH_END,
        }
    }
}

impl StyleBounds {
    /// Build bounds from a custom-property lookup, falling back per value.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut read = |name: &str, fallback: f64| number_or(lookup(name).as_deref(), fallback);
        Self {
            spacing_start: read(PROP_SPACING_START, DEFAULT_SPACING_START),
            spacing_end: read(PROP_SPACING_END, DEFAULT_SPACING_END),
            stretch_start: read(PROP_STRETCH_START, DEFAULT_STRETCH_START),
            stretch_end: read(PROP_STRETCH_END, DEFAULT_STRETCH_END),
        }
    }
}

/// Values written by one update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleFrame {
    pub spacing: f64,
    pub stretch: f64,
    pub reveal: bool,
}

#[inline]
pub fn max_scroll_range(viewport_height: f64) -> f64 {
    (viewport_height * STYLE_RANGE_VIEWPORT_FRACTION).max(STYLE_RANGE_MIN_PX)
}

#[inline]
pub fn reveal_threshold(viewport_height: f64) -> f64 {
    (viewport_height * REVEAL_VIEWPORT_FRACTION).max(REVEAL_MIN_PX)
}

/// Pure mapping from a scroll offset to the heading style.
pub fn style_at(bounds: &StyleBounds, scroll: f64, viewport_height: f64) -> StyleFrame {
    let t = clamp(scroll / max_scroll_range(viewport_height), 0.0, 1.0);
    StyleFrame {
        spacing: lerp(bounds.spacing_start, bounds.spacing_end, t),
        stretch: lerp(bounds.stretch_start, bounds.stretch_end, t),
        reveal: scroll > reveal_threshold(viewport_height),
    }
}

#[derive(Debug)]
pub struct ScrollStyler {
    bounds: StyleBounds,
    latest_scroll: f64,
    ticking: bool,
}

impl ScrollStyler {
    pub fn new(bounds: StyleBounds) -> Self {
        Self {
            bounds,
            latest_scroll: 0.0,
            ticking: false,
        }
    }

    pub fn bounds(&self) -> &StyleBounds {
        &self.bounds
    }

    pub fn latest_scroll(&self) -> f64 {
        self.latest_scroll
    }

    /// Whether an update is already queued for the next frame.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Record a scroll offset without scheduling anything.
    pub fn set_latest_scroll(&mut self, scroll: f64) {
        self.latest_scroll = scroll.max(0.0);
    }

    /// Record a scroll/resize observation. Returns `true` when the caller must
    /// request an animation frame; subsequent calls return `false` until
    /// that frame's [`update`](Self::update) has run.
    pub fn observe_scroll(&mut self, scroll: f64) -> bool {
        self.set_latest_scroll(scroll);
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Recompute and write the heading style. Target failures are ignored.
    pub fn update<T: RenderTarget + ?Sized>(&mut self, target: &mut T, viewport_height: f64) -> StyleFrame {
        self.ticking = false;
        let frame = style_at(&self.bounds, self.latest_scroll, viewport_height);

        if let Err(e) = target.set_custom_property(PROP_SPACING, &frame.spacing.to_string()) {
            log::debug!("[style] {PROP_SPACING} not written: {e}");
        }
        if let Err(e) = target.set_custom_property(PROP_STRETCH, &frame.stretch.to_string()) {
            log::debug!("[style] {PROP_STRETCH} not written: {e}");
        }
        if let Err(e) = target.set_class_active(REVEAL_CLASS, frame.reveal) {
            log::debug!("[style] {REVEAL_CLASS} not toggled: {e}");
        }
        frame
    }
}
