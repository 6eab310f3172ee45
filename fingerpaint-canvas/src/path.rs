//! Path building for strokes.

use crate::geometry::Point;
use tiny_skia::PathBuilder;

/// Extension trait for PathBuilder with stroke-oriented helpers.
pub trait PathBuilderExt {
    /// Add an open polyline through `points`.
    fn polyline(&mut self, points: &[Point]);
}

impl PathBuilderExt for PathBuilder {
    fn polyline(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
    }
}
