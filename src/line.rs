//! Infinite tilted lines and their intersections with the frame

use crate::errors::LayoutError;
use crate::float_types::{Real, is_close};
use crate::frame::Frame;
use nalgebra::Point2;

/// An infinite line tilted at a fixed angle, positioned by the signed
/// x-coordinate where it crosses `y = 0`.
///
/// Stored in slope/intercept form `y = slope * x + intercept`, so a vertical
/// tilt (infinite `tan`) is unsupported; [`crate::layout::Layout`] rejects the
/// degenerate angles before any line is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltedLine {
    slope: Real,
    intercept: Real,
}

impl TiltedLine {
    /// Line at `angle` radians passing through `(offset, 0)`.
    pub fn new(angle: Real, offset: Real) -> Self {
        let slope = angle.tan();
        Self {
            slope,
            intercept: -slope * offset,
        }
    }

    #[inline]
    pub const fn slope(&self) -> Real {
        self.slope
    }

    #[inline]
    pub const fn intercept(&self) -> Real {
        self.intercept
    }

    /// Height of the line above the x-axis at the given `x`.
    #[inline]
    pub fn y_at(&self, x: Real) -> Real {
        self.slope * x + self.intercept
    }

    /// Intersection with an axis-aligned segment, or `None` when the crossing
    /// falls outside the segment's extent (bounds are inclusive).
    ///
    /// Orientation is detected with [`is_close`] so frame coordinates produced
    /// by floating-point arithmetic still register as axis-aligned. A segment
    /// that is neither horizontal nor vertical violates the frame contract and
    /// yields [`LayoutError::UnsupportedGeometry`].
    pub fn intersect_segment(
        &self,
        start: Point2<Real>,
        end: Point2<Real>,
    ) -> Result<Option<Point2<Real>>, LayoutError> {
        if is_close(start.x, end.x) {
            let x = start.x;
            let y = self.y_at(x);
            if y >= start.y.min(end.y) && y <= start.y.max(end.y) {
                Ok(Some(Point2::new(x, y)))
            } else {
                Ok(None)
            }
        } else if is_close(start.y, end.y) {
            let y = start.y;
            let x = (y - self.intercept) / self.slope;
            if x >= start.x.min(end.x) && x <= start.x.max(end.x) {
                Ok(Some(Point2::new(x, y)))
            } else {
                Ok(None)
            }
        } else {
            Err(LayoutError::UnsupportedGeometry { start, end })
        }
    }

    /// Intersections with the frame boundary, one per side that yields a hit,
    /// in side order. 0 to 4 points; a crossing exactly on a shared corner is
    /// reported once per adjacent side, so callers must tolerate duplicates.
    pub fn intersect_frame(&self, frame: &Frame) -> Result<Vec<Point2<Real>>, LayoutError> {
        let mut hits = Vec::with_capacity(4);
        for (start, end) in frame.edges() {
            if let Some(point) = self.intersect_segment(start, end)? {
                hits.push(point);
            }
        }
        Ok(hits)
    }

    /// Whether `point` lies in the closed strip between this line and `other`,
    /// comparing the two lines' heights at the point's x.
    pub fn is_point_between(&self, point: Point2<Real>, other: &TiltedLine) -> bool {
        let y1 = self.y_at(point.x);
        let y2 = other.y_at(point.x);
        point.y >= y1.min(y2) && point.y <= y1.max(y2)
    }
}
