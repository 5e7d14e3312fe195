// Host-side tests for the entrance glide, driven by a simulated frame clock.

use brand_core::*;

const FRAME_MS: f64 = 1000.0 / 60.0;

struct FakeViewport {
    inner_height: f64,
    scroll_height: f64,
    y: f64,
    history: Vec<f64>,
    restricted: bool,
}

impl FakeViewport {
    fn new(inner_height: f64, scroll_height: f64) -> Self {
        Self {
            inner_height,
            scroll_height,
            y: 0.0,
            history: Vec::new(),
            restricted: false,
        }
    }
}

impl Viewport for FakeViewport {
    fn inner_height(&self) -> f64 {
        self.inner_height
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn scroll_y(&self) -> f64 {
        self.y
    }

    fn scroll_to(&mut self, y: f64) -> Result<(), EnvError> {
        if self.restricted {
            return Err(EnvError::ScrollRestricted("sandboxed".into()));
        }
        // browsers clamp to the scrollable range
        self.y = y.clamp(0.0, (self.scroll_height - self.inner_height).max(0.0));
        self.history.push(self.y);
        Ok(())
    }
}

/// Feed frames starting at `t0` until the animator settles. Returns the
/// timestamp of the last frame.
fn run_frames(animator: &mut EntranceAnimator, viewport: &mut FakeViewport, t0: f64) -> f64 {
    let mut now = t0;
    let mut frames = 0;
    while animator.tick(viewport, now) {
        now += FRAME_MS;
        frames += 1;
        assert!(frames < 10_000, "glide never settled");
    }
    now
}

#[test]
fn start_offset_is_capped_by_scrollable_height() {
    assert_eq!(entrance_start_offset(1000.0, 5000.0, 0.45), 450.0);
    assert_eq!(entrance_start_offset(1000.0, 1200.0, 0.45), 200.0);
    assert_eq!(entrance_start_offset(1000.0, 800.0, 0.45), 0.0);
}

#[test]
fn jumps_then_glides_back_to_top_within_duration() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::default();
    assert_eq!(animator.phase(), EntrancePhase::Idle);

    assert_eq!(animator.jump(&mut viewport), Some(450.0));
    assert_eq!(viewport.y, 450.0);
    assert_eq!(animator.phase(), EntrancePhase::Jumped);

    assert!(animator.begin_glide(&mut viewport));
    assert_eq!(animator.phase(), EntrancePhase::Animating);

    let t0 = 10_000.0;
    let last = run_frames(&mut animator, &mut viewport, t0);

    assert_eq!(viewport.y, 0.0);
    assert!(animator.is_settled());
    // the settling frame is the first at or past the duration
    assert!(last - t0 >= INITIAL_SCROLL_DURATION_MS);
    assert!(last - t0 < INITIAL_SCROLL_DURATION_MS + 1.5 * FRAME_MS);

    // every written position is a whole pixel and never moves back down
    let glide = &viewport.history[1..];
    assert_eq!(glide[0], 450.0);
    for pair in glide.windows(2) {
        assert!(pair[1] <= pair[0]);
        assert_eq!(pair[1], pair[1].round());
    }
}

#[test]
fn midpoint_of_glide_is_halfway() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::default();
    animator.jump(&mut viewport);
    animator.begin_glide(&mut viewport);

    assert!(animator.tick(&mut viewport, 0.0));
    assert!(animator.tick(&mut viewport, INITIAL_SCROLL_DURATION_MS / 2.0));
    assert_eq!(viewport.y, 225.0);
}

#[test]
fn glide_starts_from_where_the_user_left_it() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::default();
    animator.jump(&mut viewport);

    viewport.y = 300.0;
    assert!(animator.begin_glide(&mut viewport));
    assert!(animator.tick(&mut viewport, 0.0));
    assert_eq!(viewport.y, 300.0);

    run_frames(&mut animator, &mut viewport, FRAME_MS);
    assert_eq!(viewport.y, 0.0);
}

#[test]
fn short_page_jumps_to_what_it_can() {
    let mut viewport = FakeViewport::new(1000.0, 1200.0);
    let mut animator = EntranceAnimator::default();
    assert_eq!(animator.jump(&mut viewport), Some(200.0));
    assert!(animator.begin_glide(&mut viewport));
    run_frames(&mut animator, &mut viewport, 0.0);
    assert_eq!(viewport.y, 0.0);
}

#[test]
fn unscrollable_page_settles_without_frames() {
    let mut viewport = FakeViewport::new(1000.0, 700.0);
    let mut animator = EntranceAnimator::default();

    assert_eq!(animator.jump(&mut viewport), Some(0.0));
    assert!(!animator.begin_glide(&mut viewport));
    assert!(animator.is_settled());
    assert_eq!(viewport.y, 0.0);
    assert!(!animator.tick(&mut viewport, 0.0));
}

#[test]
fn zero_duration_jumps_straight_to_top() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::new(EntranceConfig {
        duration_ms: 0.0,
        ..EntranceConfig::default()
    });
    animator.jump(&mut viewport);
    assert!(!animator.begin_glide(&mut viewport));
    assert_eq!(viewport.y, 0.0);
    assert!(animator.is_settled());
}

#[test]
fn custom_fraction_changes_start() {
    let mut viewport = FakeViewport::new(800.0, 5000.0);
    let mut animator = EntranceAnimator::new(EntranceConfig {
        fraction: 0.25,
        ..EntranceConfig::default()
    });
    assert_eq!(animator.jump(&mut viewport), Some(200.0));
}

#[test]
fn restricted_scrolling_is_swallowed() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    viewport.restricted = true;
    let mut animator = EntranceAnimator::default();

    assert_eq!(animator.jump(&mut viewport), None);
    assert!(animator.is_settled());
    assert!(!animator.begin_glide(&mut viewport));
    assert!(viewport.history.is_empty());
}

#[test]
fn restriction_mid_glide_settles() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::default();
    animator.jump(&mut viewport);
    animator.begin_glide(&mut viewport);
    assert!(animator.tick(&mut viewport, 0.0));

    viewport.restricted = true;
    assert!(!animator.tick(&mut viewport, FRAME_MS));
    assert!(animator.is_settled());
}

#[test]
fn runs_only_once() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::default();
    animator.jump(&mut viewport);
    animator.begin_glide(&mut viewport);
    run_frames(&mut animator, &mut viewport, 0.0);

    let writes = viewport.history.len();
    assert_eq!(animator.jump(&mut viewport), None);
    assert!(!animator.begin_glide(&mut viewport));
    assert!(!animator.tick(&mut viewport, 99_999.0));
    assert_eq!(viewport.history.len(), writes);
}

#[derive(Default)]
struct RecordingTarget {
    spacing_writes: Vec<String>,
}

impl RenderTarget for RecordingTarget {
    fn set_custom_property(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name == PROP_SPACING {
            self.spacing_writes.push(value.to_string());
        }
        Ok(())
    }

    fn set_class_active(&mut self, _name: &str, _active: bool) -> Result<(), EnvError> {
        Ok(())
    }
}

#[test]
fn sync_after_jump_writes_start_offset_styles_once() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::default();
    let mut styler = ScrollStyler::new(StyleBounds::default());
    let mut target = RecordingTarget::default();

    let start = animator.jump(&mut viewport).unwrap();
    styler.set_latest_scroll(start);
    let frame = animator
        .sync_styles(&mut styler, &mut target, viewport.inner_height())
        .unwrap();

    // 450 of a 900px range: halfway between the bounds, not yet revealed
    assert!((frame.spacing - 0.15).abs() < 1e-12);
    assert!(!frame.reveal);
    assert_eq!(target.spacing_writes, vec![frame.spacing.to_string()]);

    assert!(animator
        .sync_styles(&mut styler, &mut target, viewport.inner_height())
        .is_none());
    assert_eq!(target.spacing_writes.len(), 1);
}

#[test]
fn sync_is_refused_outside_the_jumped_phase() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::default();
    let mut styler = ScrollStyler::new(StyleBounds::default());
    let mut target = RecordingTarget::default();

    assert!(animator.sync_styles(&mut styler, &mut target, 1000.0).is_none());

    animator.jump(&mut viewport);
    animator.begin_glide(&mut viewport);
    assert!(animator.sync_styles(&mut styler, &mut target, 1000.0).is_none());
    assert!(target.spacing_writes.is_empty());
}

#[test]
fn abandoning_mid_glide_returns_to_top() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    let mut animator = EntranceAnimator::default();
    animator.jump(&mut viewport);
    animator.begin_glide(&mut viewport);
    animator.tick(&mut viewport, 0.0);
    animator.tick(&mut viewport, 400.0);
    assert!(viewport.y > 0.0);

    animator.abandon(&mut viewport);

    assert_eq!(viewport.y, 0.0);
    assert!(animator.is_settled());
}

#[test]
fn abandoning_before_the_jump_leaves_the_page_alone() {
    let mut viewport = FakeViewport::new(1000.0, 5000.0);
    viewport.y = 320.0;
    let mut animator = EntranceAnimator::default();

    animator.abandon(&mut viewport);

    assert_eq!(viewport.y, 320.0);
    assert!(viewport.history.is_empty());
    assert!(animator.is_settled());
    assert_eq!(animator.jump(&mut viewport), None);
}
