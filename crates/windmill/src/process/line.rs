use crate::error::WindmillError;
use crate::plane::{DirectionalSegments, Line, Plane, Point, Segment};

/// Vertical line through `pivot` spanning the plane's full y-extent.
///
/// The extent is taken over every point, the pivot included, so the result is
/// `[(pivot.x, min_y), (pivot.x, max_y)]` whichever points realise the extremes.
/// Other orientations would project onto a different axis here.
pub fn line_through_pivot(plane: &Plane, pivot: Point) -> Result<Line, WindmillError> {
    let (lo, hi) = plane
        .y_extent()
        .ok_or_else(|| WindmillError::invalid("cannot build a line over an empty plane"))?;
    Ok(Line::new(Point::new(pivot.x, lo), Point::new(pivot.x, hi)))
}

/// Split `line` at `pivot` into `front = pivot → far` and `back = pivot → near`.
#[inline]
pub fn directional_segments(pivot: Point, line: &Line) -> DirectionalSegments {
    DirectionalSegments {
        front: Segment {
            start: pivot,
            end: line.far,
        },
        back: Segment {
            start: pivot,
            end: line.near,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_line_uses_pivot_x() {
        let plane: Plane = [Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)]
            .into_iter()
            .collect();
        let line = line_through_pivot(&plane, Point::new(3, 4)).unwrap();
        assert_eq!(line, Line::new(Point::new(3, 2), Point::new(3, 6)));
    }

    #[test]
    fn extent_includes_the_pivot() {
        let plane: Plane = [Point::new(0, 9), Point::new(4, 1), Point::new(2, 5)]
            .into_iter()
            .collect();
        let line = line_through_pivot(&plane, Point::new(0, 9)).unwrap();
        assert_eq!(line.near, Point::new(0, 1));
        assert_eq!(line.far, Point::new(0, 9));
    }

    #[test]
    fn empty_plane_is_rejected() {
        assert!(matches!(
            line_through_pivot(&Plane::new(), Point::new(0, 0)),
            Err(WindmillError::InvalidInput { .. })
        ));
    }

    #[test]
    fn segments_start_at_pivot() {
        let pivot = Point::new(3, 4);
        let line = Line::new(Point::new(2, 2), Point::new(6, 6));
        let segs = directional_segments(pivot, &line);
        assert_eq!(segs.front.start, pivot);
        assert_eq!(segs.front.end, Point::new(6, 6));
        assert_eq!(segs.back.start, pivot);
        assert_eq!(segs.back.end, Point::new(2, 2));
    }
}
