use std::time::Instant;

use tagmark_engine::anim::{AnimationRun, Easing};
use tagmark_engine::coords::Rect;
use tagmark_engine::path::Path;

use super::reveal::{CheckPath, PathRevealAnimator};
use super::style::TagStyle;

/// Where a tag is in its checked/unchecked cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPhase {
    Unchecked,
    Checked,
    TransitioningToChecked,
    TransitioningToUnchecked,
}

/// Render parameters of a tag sampled at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagState {
    pub is_checked: bool,
    pub current_text_offset: f32,
    pub current_reveal_length: f32,
}

/// Turns a checked flag into a label slide plus a checkmark reveal.
///
/// Both animations share one duration. Flipping the flag mid-transition
/// supersedes the running slide with a new one that starts from the label's
/// current position, so the label never jumps. The checkmark is only
/// revealed when checking; when unchecking it simply stops being drawn.
///
/// Offsets are absolute x coordinates of the label's center.
#[derive(Debug, Clone)]
pub struct TagTransitionController {
    style: TagStyle,
    density: f32,
    is_checked: bool,
    bounds: Option<Rect>,
    text_run: Option<AnimationRun>,
    reveal: PathRevealAnimator,
}

impl TagTransitionController {
    pub fn new(checked: bool, density: f32, style: TagStyle) -> Self {
        let mut reveal = PathRevealAnimator::new();
        if checked {
            reveal.complete();
        }
        Self {
            style,
            density,
            is_checked: checked,
            bounds: None,
            text_run: None,
            reveal,
        }
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }

    #[inline]
    pub fn style(&self) -> &TagStyle {
        &self.style
    }

    /// Applies a new layout rect and rebuilds the checkmark path.
    ///
    /// Resting positions depend on the bounds, so an in-flight transition is
    /// settled at its end state rather than finishing toward stale targets.
    /// Same bounds as before: no-op.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds == Some(bounds) {
            return;
        }
        self.bounds = Some(bounds);
        self.text_run = None;

        if self.has_usable_bounds() {
            let check = CheckPath::for_tag(bounds, &self.style, self.density);
            self.reveal.configure(check.path());
        } else {
            log::warn!("tag bounds {bounds:?} are degenerate; transitions will not animate");
            self.reveal.configure(&Path::new());
        }
        if self.is_checked {
            self.reveal.complete();
        }
    }

    fn has_usable_bounds(&self) -> bool {
        self.bounds.is_some_and(|b| b.is_finite() && !b.is_empty()) && self.density > 0.0
    }

    /// Label center when unchecked. 0 before any bounds are known.
    pub fn resting_offset(&self) -> f32 {
        self.bounds.map_or(0.0, |b| b.center().x)
    }

    /// Label center when checked.
    pub fn checked_offset(&self) -> f32 {
        match self.bounds {
            Some(_) => self.resting_offset() + self.style.slide_distance * self.density,
            None => self.resting_offset(),
        }
    }

    fn target_offset(&self, checked: bool) -> f32 {
        if checked { self.checked_offset() } else { self.resting_offset() }
    }

    /// Flips the checked flag at `now`, starting the transition toward it.
    ///
    /// Returns `false` (and leaves any running transition alone) when the
    /// flag already has that value. Without usable bounds the flag flips but
    /// nothing animates.
    pub fn set_checked(&mut self, checked: bool, now: Instant) -> bool {
        if checked == self.is_checked {
            return false;
        }

        let from = self.current_text_offset(now);
        self.is_checked = checked;

        if !self.has_usable_bounds() {
            self.text_run = None;
            if checked {
                self.reveal.complete();
            } else {
                self.reveal.reset();
            }
            log::debug!("tag checked={checked} applied without animation (no usable bounds)");
            return true;
        }

        let to = self.target_offset(checked);
        let duration = self.style.transition;
        self.text_run = Some(AnimationRun::new(from, to, duration, now, Easing::DECELERATE));
        if checked {
            self.reveal.start(duration, now);
        }
        log::debug!("tag transition to checked={checked}: text {from:.2} -> {to:.2} over {duration:?}");
        true
    }

    /// Label center at `now`.
    pub fn current_text_offset(&self, now: Instant) -> f32 {
        match &self.text_run {
            Some(run) => run.value_at(now),
            None => self.target_offset(self.is_checked),
        }
    }

    /// The checkmark is drawn whenever the tag is checked.
    #[inline]
    pub fn should_draw_checkmark(&self) -> bool {
        self.is_checked
    }

    /// Revealed part of the checkmark at `now`. Only meaningful while
    /// [`should_draw_checkmark`](Self::should_draw_checkmark) holds.
    pub fn current_reveal_sub_path(&self, now: Instant) -> Path {
        self.reveal.current_sub_path(now)
    }

    pub fn current_reveal_length(&self, now: Instant) -> f32 {
        self.reveal.tick(now)
    }

    /// Length of the whole checkmark for the current bounds.
    pub fn full_reveal_length(&self) -> f32 {
        self.reveal.total_length()
    }

    /// `true` while either animation is still in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.text_run.as_ref().is_some_and(|run| !run.is_finished(now))
            || (self.is_checked && self.reveal.is_running(now))
    }

    pub fn phase(&self, now: Instant) -> TagPhase {
        match (self.is_checked, self.is_animating(now)) {
            (true, true) => TagPhase::TransitioningToChecked,
            (true, false) => TagPhase::Checked,
            (false, true) => TagPhase::TransitioningToUnchecked,
            (false, false) => TagPhase::Unchecked,
        }
    }

    pub fn state(&self, now: Instant) -> TagState {
        TagState {
            is_checked: self.is_checked,
            current_text_offset: self.current_text_offset(now),
            current_reveal_length: self.current_reveal_length(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const EPS: f32 = 1e-3;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// density 2.0, bounds (0, 0, 100, 40), 100 ms transitions.
    fn laid_out(checked: bool) -> TagTransitionController {
        let mut c = TagTransitionController::new(checked, 2.0, TagStyle::default());
        c.set_bounds(Rect::from_ltrb(0.0, 0.0, 100.0, 40.0));
        c
    }

    // ── resting geometry ──────────────────────────────────────────────────

    #[test]
    fn offsets_follow_bounds_and_density() {
        let c = laid_out(false);
        assert_eq!(c.resting_offset(), 50.0);
        assert_eq!(c.checked_offset(), 66.0);
    }

    #[test]
    fn initial_state_follows_flag() {
        let now = Instant::now();
        let off = laid_out(false);
        assert_eq!(off.phase(now), TagPhase::Unchecked);
        assert_eq!(off.current_text_offset(now), 50.0);
        assert!(!off.should_draw_checkmark());

        let on = laid_out(true);
        assert_eq!(on.phase(now), TagPhase::Checked);
        assert_eq!(on.current_text_offset(now), 66.0);
        assert_eq!(on.current_reveal_length(now), on.full_reveal_length());
        assert!(!on.is_animating(now));
    }

    #[test]
    fn queries_before_layout_are_well_defined() {
        let c = TagTransitionController::new(false, 2.0, TagStyle::default());
        let now = Instant::now();
        assert_eq!(c.current_text_offset(now), 0.0);
        assert!(c.current_reveal_sub_path(now).is_empty());
        assert_eq!(c.full_reveal_length(), 0.0);
    }

    // ── checking ──────────────────────────────────────────────────────────

    #[test]
    fn checking_animates_text_and_reveal_together() {
        let mut c = laid_out(false);
        let t0 = Instant::now();
        assert!(c.set_checked(true, t0));

        let mid = t0 + ms(50);
        let offset = c.current_text_offset(mid);
        assert!(offset > 50.0 && offset < 66.0, "offset {offset}");
        assert!(c.should_draw_checkmark());
        let revealed = c.current_reveal_sub_path(mid).length();
        assert!(revealed > 0.0 && revealed < c.full_reveal_length(), "revealed {revealed}");
        assert_eq!(c.phase(mid), TagPhase::TransitioningToChecked);

        let end = t0 + ms(100);
        assert_eq!(c.current_text_offset(end), 66.0);
        assert!((c.current_reveal_sub_path(end).length() - c.full_reveal_length()).abs() < EPS);
        assert_eq!(c.current_reveal_length(end), c.full_reveal_length());
        assert_eq!(c.phase(end), TagPhase::Checked);
        assert!(!c.is_animating(end));
    }

    #[test]
    fn text_slide_decelerates() {
        let mut c = laid_out(false);
        let t0 = Instant::now();
        c.set_checked(true, t0);
        // Quadratic ease-out: 75 % of the distance after half the time.
        assert!((c.current_text_offset(t0 + ms(50)) - 62.0).abs() < EPS);
        // Linear reveal: half the length after half the time.
        assert!((c.current_reveal_length(t0 + ms(50)) - c.full_reveal_length() * 0.5).abs() < EPS);
    }

    // ── unchecking ────────────────────────────────────────────────────────

    #[test]
    fn unchecking_slides_back_without_drawing_the_mark() {
        let mut c = laid_out(true);
        let t0 = Instant::now();
        assert!(c.set_checked(false, t0));

        for step in 1..100 {
            let t = t0 + ms(step);
            assert!(!c.should_draw_checkmark());
            let offset = c.current_text_offset(t);
            assert!(offset < 66.0 && offset > 50.0, "offset {offset} at {step} ms");
            assert_eq!(c.phase(t), TagPhase::TransitioningToUnchecked);
        }
        assert_eq!(c.current_text_offset(t0 + ms(100)), 50.0);
        assert_eq!(c.phase(t0 + ms(100)), TagPhase::Unchecked);
    }

    // ── re-trigger ────────────────────────────────────────────────────────

    #[test]
    fn retrigger_continues_from_current_offset() {
        let mut c = laid_out(false);
        let t0 = Instant::now();
        c.set_checked(true, t0);

        let t1 = t0 + ms(40);
        let before = c.current_text_offset(t1);
        c.set_checked(false, t1);
        let after = c.current_text_offset(t1);
        assert_eq!(before, after);

        // Heads back to rest from there and lands exactly one duration later.
        assert!(c.current_text_offset(t1 + ms(50)) < before);
        assert_eq!(c.current_text_offset(t1 + ms(100)), 50.0);
        assert!(c.is_animating(t1 + ms(99)));
        assert!(!c.is_animating(t1 + ms(100)));
    }

    #[test]
    fn rapid_toggling_never_jumps() {
        let mut c = laid_out(false);
        let t0 = Instant::now();
        let mut checked = false;
        for i in 0..20 {
            let t = t0 + ms(i * 13);
            let before = c.current_text_offset(t);
            checked = !checked;
            c.set_checked(checked, t);
            assert_eq!(c.current_text_offset(t), before, "jump at toggle {i}");
            assert!((50.0..=66.0).contains(&before));
        }
    }

    #[test]
    fn recheck_restarts_reveal_from_empty() {
        let mut c = laid_out(false);
        let t0 = Instant::now();
        c.set_checked(true, t0);
        c.set_checked(false, t0 + ms(60));
        c.set_checked(true, t0 + ms(70));
        assert_eq!(c.current_reveal_length(t0 + ms(70)), 0.0);
        assert!(c.current_reveal_sub_path(t0 + ms(70)).is_empty());
        assert_eq!(c.current_reveal_length(t0 + ms(170)), c.full_reveal_length());
    }

    // ── no-op ─────────────────────────────────────────────────────────────

    #[test]
    fn same_value_in_steady_state_is_noop() {
        let mut c = laid_out(true);
        let t0 = Instant::now();
        let before: Vec<_> = (0..5).map(|i| c.state(t0 + ms(i * 25))).collect();
        assert!(!c.set_checked(true, t0));
        let after: Vec<_> = (0..5).map(|i| c.state(t0 + ms(i * 25))).collect();
        assert_eq!(before, after);
        assert!(!c.is_animating(t0));
    }

    #[test]
    fn same_value_mid_flight_keeps_running_transition() {
        let mut c = laid_out(false);
        let t0 = Instant::now();
        c.set_checked(true, t0);
        let before: Vec<_> = (0..=10).map(|i| c.state(t0 + ms(i * 10))).collect();
        assert!(!c.set_checked(true, t0 + ms(30)));
        let after: Vec<_> = (0..=10).map(|i| c.state(t0 + ms(i * 10))).collect();
        assert_eq!(before, after);
    }

    // ── layout changes & degenerate geometry ──────────────────────────────

    #[test]
    fn relayout_settles_in_flight_transition() {
        let mut c = laid_out(false);
        let t0 = Instant::now();
        c.set_checked(true, t0);
        c.set_bounds(Rect::new(0.0, 0.0, 200.0, 40.0));
        let t = t0 + ms(20);
        assert_eq!(c.current_text_offset(t), 116.0);
        assert_eq!(c.current_reveal_length(t), c.full_reveal_length());
        assert_eq!(c.phase(t), TagPhase::Checked);
    }

    #[test]
    fn same_bounds_do_not_interrupt() {
        let mut c = laid_out(false);
        let t0 = Instant::now();
        c.set_checked(true, t0);
        c.set_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert!(c.is_animating(t0 + ms(50)));
    }

    #[test]
    fn zero_size_bounds_snap_without_animation() {
        let mut c = TagTransitionController::new(false, 2.0, TagStyle::default());
        c.set_bounds(Rect::new(0.0, 0.0, 0.0, 0.0));
        let t0 = Instant::now();
        assert!(c.set_checked(true, t0));
        assert!(c.is_checked());
        assert!(!c.is_animating(t0));
        assert_eq!(c.phase(t0), TagPhase::Checked);
        assert!(c.current_reveal_sub_path(t0).is_empty());
        assert_eq!(c.current_reveal_length(t0), c.full_reveal_length());
    }

    #[test]
    fn toggling_before_layout_snaps() {
        let mut c = TagTransitionController::new(false, 2.0, TagStyle::default());
        let t0 = Instant::now();
        c.set_checked(true, t0);
        assert_eq!(c.phase(t0), TagPhase::Checked);
        c.set_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(c.current_text_offset(t0), 66.0);
        assert_eq!(c.current_reveal_length(t0), c.full_reveal_length());
        assert!(c.full_reveal_length() > 0.0);
    }
}
