//! Axis-aligned rectangular frame that boards are clipped against

use crate::float_types::Real;
use geo::{LineString, Polygon as GeoPolygon, line_string};
use nalgebra::Point2;

/// Rectangle centered at the origin with axis-aligned sides.
///
/// Corners are stored in a fixed winding order: bottom-left, bottom-right,
/// top-right, top-left. All clipping code relies on the sides being
/// axis-aligned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    corners: [Point2<Real>; 4],
    half_width: Real,
    half_height: Real,
}

impl Frame {
    /// Frame of the given outer dimensions, centered at the origin.
    pub fn centered(width: Real, height: Real) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            corners: [
                Point2::new(-hw, -hh),
                Point2::new(hw, -hh),
                Point2::new(hw, hh),
                Point2::new(-hw, hh),
            ],
            half_width: hw,
            half_height: hh,
        }
    }

    #[inline]
    pub const fn corners(&self) -> &[Point2<Real>; 4] {
        &self.corners
    }

    #[inline]
    pub const fn half_width(&self) -> Real {
        self.half_width
    }

    #[inline]
    pub const fn half_height(&self) -> Real {
        self.half_height
    }

    #[inline]
    pub fn width(&self) -> Real {
        self.half_width * 2.0
    }

    #[inline]
    pub fn height(&self) -> Real {
        self.half_height * 2.0
    }

    /// The four sides in corner order, each as `(start, end)`, wrapping from
    /// the last corner back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
        (0..4).map(|i| (self.corners[i], self.corners[(i + 1) % 4]))
    }

    /// The frame outline as a closed `geo` polygon, for renderers working in
    /// `geo` types.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        let hw = self.half_width;
        let hh = self.half_height;
        let outer: LineString<Real> = line_string![
            (x: -hw, y: -hh),
            (x: hw,  y: -hh),
            (x: hw,  y: hh),
            (x: -hw, y: hh),
            (x: -hw, y: -hh), // close explicitly
        ];
        GeoPolygon::new(outer, vec![])
    }
}
