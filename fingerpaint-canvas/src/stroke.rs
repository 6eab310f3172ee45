//! Freehand strokes.

use crate::brush::{validate_width, BrushState};
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::Point;
use crate::path::PathBuilderExt;
use crate::style::{LineCap, LineJoin};
use tiny_skia::Color;

/// An ordered run of points drawn with one color and width.
///
/// Style is fixed when the stroke is created. While the stroke is being
/// drawn the surface appends points to it; once committed to a
/// [`StrokeHistory`](crate::StrokeHistory) it is only reachable through
/// shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
    width: f32,
    line_cap: LineCap,
    line_join: LineJoin,
}

impl Stroke {
    /// Build a complete stroke from its points.
    ///
    /// Consecutive duplicate points are collapsed. Fails with
    /// [`CanvasError::EmptyStroke`] if no points are given and
    /// [`CanvasError::InvalidBrushSize`] for a bad width.
    pub fn from_points<I>(color: Color, width: f32, points: I) -> CanvasResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        validate_width(width)?;
        let mut points = points.into_iter();
        let first = points.next().ok_or(CanvasError::EmptyStroke)?;
        let mut stroke = Self::start(first, color, width);
        for p in points {
            stroke.push(p);
        }
        Ok(stroke)
    }

    /// Start an in-progress stroke at `origin` using the current brush.
    pub(crate) fn begin(origin: Point, brush: &BrushState) -> Self {
        Self::start(origin, brush.color(), brush.width())
    }

    fn start(origin: Point, color: Color, width: f32) -> Self {
        Self {
            points: vec![origin],
            color,
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
        }
    }

    /// Append a point. Returns false if it repeats the last point.
    pub(crate) fn push(&mut self, point: Point) -> bool {
        if self.points.last() == Some(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Close out an in-progress stroke. Strokes without a segment (a tap)
    /// are rejected with [`CanvasError::EmptyStroke`].
    pub(crate) fn finish(self) -> CanvasResult<Self> {
        if self.segment_count() == 0 {
            return Err(CanvasError::EmptyStroke);
        }
        Ok(self)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }

    /// Number of line segments between consecutive points.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Polyline path through the points, or None for a single point.
    pub(crate) fn to_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = tiny_skia::PathBuilder::new();
        pb.polyline(&self.points);
        pb.finish()
    }

    pub(crate) fn to_skia_stroke(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.width,
            line_cap: self.line_cap.into(),
            line_join: self.line_join.into(),
            ..Default::default()
        }
    }
}
