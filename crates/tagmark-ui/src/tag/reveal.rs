use std::time::{Duration, Instant};

use tagmark_engine::anim::{AnimationRun, Easing};
use tagmark_engine::coords::{Rect, Vec2};
use tagmark_engine::path::{Path, PathMeasure};

use super::style::TagStyle;

// ── CheckPath ─────────────────────────────────────────────────────────────

/// Checkmark vertices in density-independent units, relative to the
/// top-left of the check box: short down-stroke, then the long up-stroke.
const CHECK_VERTICES: [(f32, f32); 3] = [(0.0, 4.0), (3.0, 8.0), (10.0, 0.0)];

/// The fixed checkmark polyline for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckPath {
    bounds: Rect,
    path: Path,
}

impl CheckPath {
    /// Checkmark placed inside the box `bounds`.
    pub fn new(bounds: Rect, density: f32) -> Self {
        let [start, elbow, tip] =
            CHECK_VERTICES.map(|(x, y)| bounds.origin + Vec2::new(x, y) * density);
        let mut path = Path::new();
        path.move_to(start).line_to(elbow).line_to(tip);
        Self { bounds, path }
    }

    /// Checkmark for a tag laid out in `tag`: inset from the left edge by
    /// `style.check_inset` and vertically centered.
    pub fn for_tag(tag: Rect, style: &TagStyle, density: f32) -> Self {
        let size = style.check_size * density;
        let center_y = tag.top() + tag.height() * 0.5;
        let bounds = Rect::new(
            tag.left() + style.check_inset * density,
            center_y - size.y * 0.5,
            size.x,
            size.y,
        );
        Self::new(bounds, density)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ── PathRevealAnimator ────────────────────────────────────────────────────

/// Progressively reveals a fixed path from its start, driven by time.
///
/// Progress is a length in `[0, total_length]`, evaluated on demand from the
/// active run and the sampled instant. The animator knows nothing about
/// checked/unchecked semantics.
#[derive(Debug, Clone, Default)]
pub struct PathRevealAnimator {
    measure: PathMeasure,
    run: Option<AnimationRun>,
    /// Fully revealed without a run (see [`complete`](Self::complete)).
    revealed: bool,
}

impl PathRevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures `path` and discards any in-flight run; progress resets to 0.
    ///
    /// Paths with fewer than two vertices measure as zero length, which makes
    /// every later run complete immediately.
    pub fn configure(&mut self, path: &Path) {
        self.measure.set_path(path);
        self.run = None;
        self.revealed = false;
        if path.len() < 2 || self.measure.length() <= 0.0 {
            log::debug!("reveal path is degenerate ({} vertices); reveal disabled", path.len());
        }
    }

    /// Starts a linear reveal from 0 to the full length over `duration`,
    /// replacing any active run.
    pub fn start(&mut self, duration: Duration, now: Instant) {
        self.run = Some(AnimationRun::new(
            0.0,
            self.measure.length(),
            duration,
            now,
            Easing::Linear,
        ));
        self.revealed = false;
    }

    /// Jumps to the fully revealed state without animating.
    pub fn complete(&mut self) {
        self.run = None;
        self.revealed = true;
    }

    /// Drops any run and hides the path again.
    pub fn reset(&mut self) {
        self.run = None;
        self.revealed = false;
    }

    #[inline]
    pub fn total_length(&self) -> f32 {
        self.measure.length()
    }

    /// Revealed length at `now`. Pure: sampling never advances state.
    pub fn tick(&self, now: Instant) -> f32 {
        let total = self.total_length();
        match &self.run {
            Some(run) => run.value_at(now).clamp(0.0, total),
            None if self.revealed => total,
            None => 0.0,
        }
    }

    /// `true` while a run is still in flight at `now`. Never `true` for a
    /// zero-length path, which has nothing left to reveal.
    pub fn is_running(&self, now: Instant) -> bool {
        self.total_length() > 0.0 && self.run.as_ref().is_some_and(|run| !run.is_finished(now))
    }

    /// `true` once the revealed length has reached the total length.
    /// Zero-length paths are always complete.
    pub fn is_complete(&self, now: Instant) -> bool {
        self.tick(now) >= self.total_length()
    }

    /// The prefix of the path revealed at `now`: empty at 0, whole when complete.
    pub fn current_sub_path(&self, now: Instant) -> Path {
        self.measure.segment(0.0, self.tick(now))
    }
}
