//! Frame and timer sequencing for the scroll effects.
//!
//! The browser hands out animation frames and timers; tests hand out a
//! queue they pump by hand. Either way the order of operations lives here:
//! one style update per frame for scroll events, and the entrance
//! jump → sync → frame → delay → glide chain. When a frame or timer cannot
//! be had, the work runs right away (style updates, glide start) or the
//! glide is abandoned at the top, so nothing is left half-done.

use crate::entrance::EntranceAnimator;
use crate::env::{EnvError, RenderTarget, Viewport};
use crate::style::ScrollStyler;
use std::cell::RefCell;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce(f64)>;
pub type TimerCallback = Box<dyn FnOnce()>;

/// Source of animation frames and one-shot timers.
pub trait Scheduler: Clone + 'static {
    fn request_frame(&self, f: FrameCallback) -> Result<(), EnvError>;
    fn set_timeout(&self, delay_ms: i32, f: TimerCallback) -> Result<(), EnvError>;
}

/// Run `f` on the next frame, or now if no frame is available.
fn on_next_frame<S: Scheduler>(scheduler: &S, f: impl FnOnce() + 'static) {
    let slot = Rc::new(RefCell::new(Some(f)));
    let slot_frame = slot.clone();
    let requested = scheduler.request_frame(Box::new(move |_: f64| {
        let f = slot_frame.borrow_mut().take();
        if let Some(f) = f {
            f();
        }
    }));
    if let Err(e) = requested {
        log::warn!("[schedule] no animation frame ({e}); running now");
        let f = slot.borrow_mut().take();
        if let Some(f) = f {
            f();
        }
    }
}

/// Run `f` after `delay_ms`, or now if no timer is available.
fn after_delay<S: Scheduler>(scheduler: &S, delay_ms: i32, f: impl FnOnce() + 'static) {
    let slot = Rc::new(RefCell::new(Some(f)));
    let slot_timer = slot.clone();
    let armed = scheduler.set_timeout(
        delay_ms,
        Box::new(move || {
            let f = slot_timer.borrow_mut().take();
            if let Some(f) = f {
                f();
            }
        }),
    );
    if let Err(e) = armed {
        log::warn!("[schedule] no timer ({e}); running now");
        let f = slot.borrow_mut().take();
        if let Some(f) = f {
            f();
        }
    }
}

/// Handle one scroll or resize event: record the offset and, if no update
/// is pending, queue one for the next frame.
pub fn observe_scroll_event<S, T, V>(
    scheduler: &S,
    styler: &Rc<RefCell<ScrollStyler>>,
    target: &T,
    viewport: &V,
) where
    S: Scheduler,
    T: RenderTarget + Clone + 'static,
    V: Viewport + Clone + 'static,
{
    let needs_frame = styler.borrow_mut().observe_scroll(viewport.scroll_y());
    if !needs_frame {
        return;
    }
    let styler = styler.clone();
    let mut target = target.clone();
    let viewport = viewport.clone();
    on_next_frame(scheduler, move || {
        styler
            .borrow_mut()
            .update(&mut target, viewport.inner_height());
    });
}

/// Run the entrance: jump, sync the heading on the next frame, wait one more
/// frame plus the configured delay, then glide to the top.
pub fn run_entrance<S, T, V>(
    scheduler: &S,
    animator: EntranceAnimator,
    styler: Rc<RefCell<ScrollStyler>>,
    mut target: T,
    mut viewport: V,
) -> Rc<RefCell<EntranceAnimator>>
where
    S: Scheduler,
    T: RenderTarget + 'static,
    V: Viewport + Clone + 'static,
{
    let animator = Rc::new(RefCell::new(animator));
    let jumped = animator.borrow_mut().jump(&mut viewport);
    let Some(start_y) = jumped else {
        return animator;
    };
    styler.borrow_mut().set_latest_scroll(start_y);
    log::info!("[entrance] starting at {start_y:.0}px");

    let delay_ms = animator.borrow().config().delay_ms;
    let sched = scheduler.clone();
    let anim = animator.clone();
    on_next_frame(scheduler, move || {
        anim.borrow_mut()
            .sync_styles(&mut styler.borrow_mut(), &mut target, viewport.inner_height());
        let sched_inner = sched.clone();
        on_next_frame(&sched, move || {
            let sched_timer = sched_inner.clone();
            after_delay(&sched_inner, delay_ms, move || {
                let mut viewport = viewport;
                let gliding = anim.borrow_mut().begin_glide(&mut viewport);
                if gliding {
                    glide_frame(&sched_timer, anim, viewport);
                }
            });
        });
    });
    animator
}

fn glide_frame<S, V>(scheduler: &S, animator: Rc<RefCell<EntranceAnimator>>, mut viewport: V)
where
    S: Scheduler,
    V: Viewport + Clone + 'static,
{
    let sched = scheduler.clone();
    let anim = animator.clone();
    let mut frame_viewport = viewport.clone();
    let requested = scheduler.request_frame(Box::new(move |ts: f64| {
        let more = anim.borrow_mut().tick(&mut frame_viewport, ts);
        if more {
            glide_frame(&sched, anim, frame_viewport);
        }
    }));
    if let Err(e) = requested {
        log::warn!("[entrance] no animation frame ({e}); jumping to top");
        animator.borrow_mut().abandon(&mut viewport);
    }
}
