//! Pointer gesture handling.

use super::DrawingSurface;
use crate::error::CanvasResult;
use crate::geometry::{Point, PointerEvent};
use crate::stroke::Stroke;

impl DrawingSurface {
    /// Dispatch a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> CanvasResult<()> {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up(p) => self.pointer_up(p),
            PointerEvent::Cancel => self.pointer_cancel(),
        }
    }

    /// Start a new stroke at `point` with the current brush.
    ///
    /// A second pointer-down without an up in between abandons the earlier
    /// stroke.
    pub fn pointer_down(&mut self, point: Point) -> CanvasResult<()> {
        self.ensure_ready()?;
        if !point.is_finite() {
            log::debug!(target: "surface", "ignoring non-finite pointer down");
            return Ok(());
        }
        if self.in_progress.is_some() {
            log::debug!(target: "surface", "pointer down while drawing; dropping previous stroke");
        }
        log::trace!(target: "surface", "pointer down {} {}", point.x, point.y);
        self.in_progress = Some(Stroke::begin(point, &self.brush));
        self.redraw_requested = true;
        Ok(())
    }

    /// Extend the in-progress stroke. Ignored when no gesture is active.
    pub fn pointer_move(&mut self, point: Point) -> CanvasResult<()> {
        self.ensure_ready()?;
        let Some(stroke) = self.in_progress.as_mut() else {
            return Ok(());
        };
        if point.is_finite() && stroke.push(point) {
            self.redraw_requested = true;
        }
        Ok(())
    }

    /// Finish the gesture at `point`, committing the stroke if it has at
    /// least one segment.
    pub fn pointer_up(&mut self, point: Point) -> CanvasResult<()> {
        self.ensure_ready()?;
        if let Some(stroke) = self.in_progress.as_mut() {
            if point.is_finite() {
                stroke.push(point);
            }
        }
        self.end_stroke();
        Ok(())
    }

    /// Finish the gesture without a final point. Same commit rule as
    /// [`pointer_up`](Self::pointer_up).
    pub fn pointer_cancel(&mut self) -> CanvasResult<()> {
        self.ensure_ready()?;
        self.end_stroke();
        Ok(())
    }

    fn end_stroke(&mut self) {
        let Some(stroke) = self.in_progress.take() else {
            return;
        };
        match stroke.finish() {
            Ok(stroke) => {
                self.history.commit(stroke);
                self.regenerate();
            }
            Err(err) => {
                // A tap: nothing to keep, just drop the overlay.
                log::debug!(target: "surface", "discarding stroke: {}", err);
                self.redraw_requested = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CanvasError;
    use crate::geometry::{Point, PointerEvent};
    use crate::surface::DrawingSurface;

    fn ready_surface() -> DrawingSurface {
        DrawingSurface::builder().size(64, 64).build().unwrap()
    }

    #[test]
    fn test_pointer_requires_raster() {
        let mut surface = DrawingSurface::new();
        assert!(matches!(
            surface.pointer_down(Point::new(1.0, 1.0)),
            Err(CanvasError::SurfaceNotReady)
        ));
        assert!(matches!(
            surface.handle_pointer(PointerEvent::Cancel),
            Err(CanvasError::SurfaceNotReady)
        ));
        assert!(!surface.is_drawing());
    }

    #[test]
    fn test_down_cancel_commits_nothing() {
        let mut surface = ready_surface();
        surface.handle_pointer(PointerEvent::Down(Point::new(5.0, 5.0))).unwrap();
        assert!(surface.is_drawing());
        surface.handle_pointer(PointerEvent::Cancel).unwrap();
        assert!(!surface.is_drawing());
        assert_eq!(surface.history().committed_len(), 0);
    }

    #[test]
    fn test_tap_commits_nothing() {
        let mut surface = ready_surface();
        surface.pointer_down(Point::new(5.0, 5.0)).unwrap();
        surface.pointer_move(Point::new(5.0, 5.0)).unwrap();
        surface.pointer_up(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(surface.history().committed_len(), 0);
    }

    #[test]
    fn test_drag_commits_stroke() {
        let mut surface = ready_surface();
        surface.handle_pointer(PointerEvent::Down(Point::new(1.0, 1.0))).unwrap();
        surface.handle_pointer(PointerEvent::Move(Point::new(10.0, 1.0))).unwrap();
        surface.handle_pointer(PointerEvent::Move(Point::new(10.0, 10.0))).unwrap();
        assert_eq!(surface.in_progress().unwrap().points().len(), 3);
        surface.handle_pointer(PointerEvent::Up(Point::new(20.0, 10.0))).unwrap();

        let strokes: Vec<_> = surface.history().snapshot().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(
            strokes[0].points(),
            &[
                Point::new(1.0, 1.0),
                Point::new(10.0, 1.0),
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0)
            ]
        );
    }

    #[test]
    fn test_up_point_alone_makes_a_segment() {
        let mut surface = ready_surface();
        surface.pointer_down(Point::new(1.0, 1.0)).unwrap();
        surface.pointer_up(Point::new(30.0, 1.0)).unwrap();
        assert_eq!(surface.history().committed_len(), 1);
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut surface = ready_surface();
        surface.render_frame().unwrap();
        surface.pointer_move(Point::new(3.0, 3.0)).unwrap();
        surface.pointer_up(Point::new(4.0, 4.0)).unwrap();
        surface.pointer_cancel().unwrap();
        assert_eq!(surface.history().committed_len(), 0);
        assert!(!surface.needs_redraw());
    }

    #[test]
    fn test_second_down_abandons_first_stroke() {
        let mut surface = ready_surface();
        surface.pointer_down(Point::new(1.0, 1.0)).unwrap();
        surface.pointer_move(Point::new(9.0, 9.0)).unwrap();
        surface.pointer_down(Point::new(40.0, 40.0)).unwrap();
        surface.pointer_up(Point::new(50.0, 40.0)).unwrap();

        let strokes: Vec<_> = surface.history().snapshot().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points()[0], Point::new(40.0, 40.0));
    }

    #[test]
    fn test_non_finite_points_ignored() {
        let mut surface = ready_surface();
        surface.pointer_down(Point::new(f32::NAN, 1.0)).unwrap();
        assert!(!surface.is_drawing());

        surface.pointer_down(Point::new(1.0, 1.0)).unwrap();
        surface.pointer_move(Point::new(f32::INFINITY, 1.0)).unwrap();
        assert_eq!(surface.in_progress().unwrap().points().len(), 1);
    }

    #[test]
    fn test_commit_after_undo_clears_redo() {
        let mut surface = ready_surface();
        for y in [10.0, 20.0] {
            surface.pointer_down(Point::new(1.0, y)).unwrap();
            surface.pointer_up(Point::new(50.0, y)).unwrap();
        }
        assert!(surface.undo());
        assert_eq!(surface.history().undone_len(), 1);

        surface.pointer_down(Point::new(1.0, 30.0)).unwrap();
        surface.pointer_up(Point::new(50.0, 30.0)).unwrap();
        assert_eq!(surface.history().undone_len(), 0);
        assert!(!surface.redo());
        assert_eq!(surface.history().committed_len(), 2);
    }
}
