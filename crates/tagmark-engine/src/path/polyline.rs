use crate::coords::Vec2;

/// A single open polyline contour in logical pixels.
///
/// `move_to` restarts the contour; `line_to` appends a vertex. Calling
/// `line_to` on an empty path starts the contour at that point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self { points: points.into_iter().collect() }
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.points.clear();
        self.points.push(p);
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.points.push(p);
        self
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// `true` when the path has no vertices at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Sum of segment lengths. Paths with fewer than two vertices have length 0.
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}
