//! One-shot entrance glide: jump part-way down the page, then ease back to
//! the top.
//!
//! The animator does no scheduling of its own; [`crate::run_entrance`] calls
//! [`EntranceAnimator::jump`], [`EntranceAnimator::sync_styles`] on the next
//! frame, [`EntranceAnimator::begin_glide`] after one more frame plus
//! [`EntranceConfig::delay_ms`], and then feeds animation-frame timestamps to
//! [`EntranceAnimator::tick`] until it returns `false`.

use crate::constants::{INITIAL_DELAY_MS, INITIAL_SCROLL_DURATION_MS, INITIAL_SCROLL_FRACTION};
use crate::env::{RenderTarget, Viewport};
use crate::math::ease_in_out;
use crate::style::{ScrollStyler, StyleFrame};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceConfig {
    /// Start offset as a fraction of the viewport height.
    pub fraction: f64,
    pub delay_ms: i32,
    pub duration_ms: f64,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            fraction: INITIAL_SCROLL_FRACTION,
            delay_ms: INITIAL_DELAY_MS,
            duration_ms: INITIAL_SCROLL_DURATION_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePhase {
    Idle,
    Jumped,
    Animating,
    Settled,
}

#[derive(Clone, Copy, Debug)]
struct Glide {
    start_y: f64,
    distance: f64,
    start_time: Option<f64>,
}

/// Offset the page starts at: a fraction of the viewport, capped by how far
/// the document can actually scroll.
#[inline]
pub fn entrance_start_offset(inner_height: f64, scroll_height: f64, fraction: f64) -> f64 {
    let max_start = (scroll_height - inner_height).max(0.0);
    (inner_height * fraction).min(max_start)
}

#[derive(Debug)]
pub struct EntranceAnimator {
    config: EntranceConfig,
    phase: EntrancePhase,
    glide: Option<Glide>,
    synced: bool,
}

impl Default for EntranceAnimator {
    fn default() -> Self {
        Self::new(EntranceConfig::default())
    }
}

impl EntranceAnimator {
    pub fn new(config: EntranceConfig) -> Self {
        Self {
            config,
            phase: EntrancePhase::Idle,
            glide: None,
            synced: false,
        }
    }

    pub fn config(&self) -> &EntranceConfig {
        &self.config
    }

    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == EntrancePhase::Settled
    }

    /// Jump to the start offset. Returns the offset jumped to, or `None` if
    /// the animator already ran or the viewport refused to scroll (in which
    /// case it settles).
    pub fn jump<V: Viewport + ?Sized>(&mut self, viewport: &mut V) -> Option<f64> {
        if self.phase != EntrancePhase::Idle {
            return None;
        }
        let start_y = entrance_start_offset(
            viewport.inner_height(),
            viewport.scroll_height(),
            self.config.fraction,
        );
        match viewport.scroll_to(start_y) {
            Ok(()) => {
                log::debug!("[entrance] jumped to {start_y:.1}");
                self.phase = EntrancePhase::Jumped;
                Some(start_y)
            }
            Err(e) => {
                log::debug!("[entrance] skipped: {e}");
                self.phase = EntrancePhase::Settled;
                None
            }
        }
    }

    /// Bring the heading in line with the jumped-to offset. Runs the styler
    /// at most once per entrance, and only between the jump and the glide.
    pub fn sync_styles<T: RenderTarget + ?Sized>(
        &mut self,
        styler: &mut ScrollStyler,
        target: &mut T,
        viewport_height: f64,
    ) -> Option<StyleFrame> {
        if self.phase != EntrancePhase::Jumped || self.synced {
            return None;
        }
        self.synced = true;
        Some(styler.update(target, viewport_height))
    }

    /// Give up on the glide: return to the top (if the page was moved) and
    /// settle. Used when the browser stops handing out frames or timers.
    pub fn abandon<V: Viewport + ?Sized>(&mut self, viewport: &mut V) {
        match self.phase {
            EntrancePhase::Settled => return,
            EntrancePhase::Idle => {}
            EntrancePhase::Jumped | EntrancePhase::Animating => {
                if let Err(e) = viewport.scroll_to(0.0) {
                    log::debug!("[entrance] return to top refused: {e}");
                }
            }
        }
        self.settle();
    }

    /// Start gliding from the current offset back to the top. Returns `true`
    /// when frames must be fed to [`tick`](Self::tick); a zero-length glide
    /// jumps straight to the top and settles.
    pub fn begin_glide<V: Viewport + ?Sized>(&mut self, viewport: &mut V) -> bool {
        if self.phase != EntrancePhase::Jumped {
            return false;
        }
        let start_y = viewport.scroll_y();
        let distance = 0.0 - start_y;
        if distance == 0.0 || self.config.duration_ms <= 0.0 {
            if let Err(e) = viewport.scroll_to(0.0) {
                log::debug!("[entrance] final jump refused: {e}");
            }
            self.settle();
            return false;
        }
        self.glide = Some(Glide {
            start_y,
            distance,
            start_time: None,
        });
        self.phase = EntrancePhase::Animating;
        true
    }

    /// Advance the glide to `now_ms` (an animation-frame timestamp). Returns
    /// `true` while another frame is needed.
    pub fn tick<V: Viewport + ?Sized>(&mut self, viewport: &mut V, now_ms: f64) -> bool {
        if self.phase != EntrancePhase::Animating {
            return false;
        }
        let Some(glide) = self.glide.as_mut() else {
            self.settle();
            return false;
        };
        let start_time = *glide.start_time.get_or_insert(now_ms);
        let elapsed = now_ms - start_time;
        let t = (elapsed / self.config.duration_ms).min(1.0);
        let y = (glide.start_y + glide.distance * ease_in_out(t)).round();

        if let Err(e) = viewport.scroll_to(y) {
            log::debug!("[entrance] glide interrupted: {e}");
            self.settle();
            return false;
        }
        if t < 1.0 {
            return true;
        }
        self.settle();
        false
    }

    fn settle(&mut self) {
        self.glide = None;
        self.phase = EntrancePhase::Settled;
        log::debug!("[entrance] settled");
    }
}
