use crate::coords::Vec2;

use super::Path;

/// Arc-length parametrisation of a [`Path`].
///
/// `cumulative[i]` is the distance travelled from the first vertex to vertex
/// `i`, so it is non-decreasing and `cumulative[0] == 0`. Zero-length
/// segments (repeated vertices) are allowed and simply contribute nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathMeasure {
    points: Vec<Vec2>,
    cumulative: Vec<f32>,
}

impl PathMeasure {
    pub fn new(path: &Path) -> Self {
        let mut m = Self::default();
        m.set_path(path);
        m
    }

    /// Re-measures `path`, replacing the previous contents.
    pub fn set_path(&mut self, path: &Path) {
        self.points.clear();
        self.cumulative.clear();
        self.points.extend_from_slice(path.points());

        let mut total = 0.0f32;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                total += self.points[i - 1].distance(*p);
            }
            self.cumulative.push(total);
        }
    }

    /// Total length of the measured contour.
    #[inline]
    pub fn length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Position at `distance` along the contour, clamped to its ends.
    ///
    /// Returns `None` only for an empty path.
    pub fn position_at(&self, distance: f32) -> Option<Vec2> {
        let first = *self.points.first()?;
        if !(distance > 0.0) {
            return Some(first);
        }
        if distance >= self.length() {
            return self.points.last().copied();
        }

        // First vertex whose cumulative distance reaches `distance`.
        let idx = self.cumulative.partition_point(|&c| c < distance);
        if idx >= self.points.len() {
            return self.points.last().copied();
        }

        let seg_start = self.cumulative[idx - 1];
        let seg_len = self.cumulative[idx] - seg_start;
        if seg_len <= 0.0 {
            return Some(self.points[idx]);
        }
        let t = (distance - seg_start) / seg_len;
        Some(self.points[idx - 1].lerp(self.points[idx], t))
    }

    /// Extracts the part of the contour between `start` and `stop` distances.
    ///
    /// Both distances are clamped to `[0, length]`. An empty path is returned
    /// when the clamped range is empty, which includes every query against a
    /// zero-length contour.
    pub fn segment(&self, start: f32, stop: f32) -> Path {
        let len = self.length();
        let start = start.clamp(0.0, len);
        let stop = stop.clamp(0.0, len);
        if !(stop > start) {
            return Path::new();
        }

        let mut out = Vec::with_capacity(self.points.len() + 1);
        if let Some(p) = self.position_at(start) {
            out.push(p);
        }
        out.extend(
            self.points
                .iter()
                .zip(&self.cumulative)
                .filter(|&(_, &c)| c > start && c < stop)
                .map(|(&p, _)| p),
        );
        if let Some(p) = self.position_at(stop) {
            out.push(p);
        }
        Path::from_points(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn elbow() -> Path {
        // 3-4-5 leg followed by a 6 long vertical leg: total 11.
        Path::from_points([
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(3.0, 10.0),
        ])
    }

    // ── length ────────────────────────────────────────────────────────────

    #[test]
    fn length_matches_path_length() {
        let path = elbow();
        assert_eq!(PathMeasure::new(&path).length(), path.length());
    }

    #[test]
    fn empty_path_measures_zero() {
        let m = PathMeasure::new(&Path::new());
        assert_eq!(m.length(), 0.0);
        assert_eq!(m.position_at(1.0), None);
        assert!(m.segment(0.0, 1.0).is_empty());
    }

    // ── position_at ───────────────────────────────────────────────────────

    #[test]
    fn position_interpolates_within_segment() {
        let m = PathMeasure::new(&elbow());
        let p = m.position_at(2.5).unwrap();
        assert!((p.x - 1.5).abs() < EPS);
        assert!((p.y - 2.0).abs() < EPS);
    }

    #[test]
    fn position_clamps_past_the_end() {
        let m = PathMeasure::new(&elbow());
        assert_eq!(m.position_at(100.0), Some(Vec2::new(3.0, 10.0)));
        assert_eq!(m.position_at(-3.0), Some(Vec2::new(0.0, 0.0)));
    }

    // ── segment ───────────────────────────────────────────────────────────

    #[test]
    fn full_segment_reproduces_the_contour() {
        let path = elbow();
        let m = PathMeasure::new(&path);
        assert_eq!(m.segment(0.0, m.length()), path);
    }

    #[test]
    fn prefix_crossing_a_vertex_keeps_the_vertex() {
        let m = PathMeasure::new(&elbow());
        let prefix = m.segment(0.0, 8.0);
        assert_eq!(prefix.len(), 3);
        assert_eq!(prefix.points()[1], Vec2::new(3.0, 4.0));
        assert!((prefix.length() - 8.0).abs() < EPS);
    }

    #[test]
    fn prefix_inside_first_segment_is_a_single_line() {
        let m = PathMeasure::new(&elbow());
        let prefix = m.segment(0.0, 2.5);
        assert_eq!(prefix.len(), 2);
        assert!((prefix.length() - 2.5).abs() < EPS);
    }

    #[test]
    fn zero_range_is_empty() {
        let m = PathMeasure::new(&elbow());
        assert!(m.segment(0.0, 0.0).is_empty());
        assert!(m.segment(5.0, 2.0).is_empty());
    }

    #[test]
    fn degenerate_contour_yields_empty_segments() {
        let p = Vec2::new(7.0, 7.0);
        let m = PathMeasure::new(&Path::from_points([p, p, p]));
        assert_eq!(m.length(), 0.0);
        assert!(m.segment(0.0, 10.0).is_empty());
    }

    #[test]
    fn repeated_vertices_do_not_break_lookup() {
        let m = PathMeasure::new(&Path::from_points([
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
        ]));
        assert_eq!(m.position_at(2.0), Some(Vec2::new(2.0, 0.0)));
        assert!((m.segment(0.0, 4.0).length() - 4.0).abs() < EPS);
    }
}
