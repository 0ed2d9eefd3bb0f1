//! Board polygons produced by the layout

use crate::float_types::Real;
use geo::{Coord, LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// One clipped strip of the layout: a simple polygon whose vertices are
/// ordered by angle around the board center `(center_offset, 0)`.
///
/// The first and last vertices are connected implicitly to close the polygon.
/// Depending on how many frame corners fall inside the strip, a board has
/// anywhere from 3 to 6 distinct vertices (plus possible duplicates where a
/// line crossing coincides with a corner).
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    center_offset: Real,
    vertices: Vec<Point2<Real>>,
}

impl Board {
    /// Build a board from an unordered point collection by sorting the points
    /// by `atan2` angle around `(center_offset, 0)`. The ascending angular
    /// order yields a simple (non-self-intersecting) boundary.
    pub(crate) fn from_unordered(center_offset: Real, mut points: Vec<Point2<Real>>) -> Self {
        points.sort_by(|a, b| {
            let angle_a = a.y.atan2(a.x - center_offset);
            let angle_b = b.y.atan2(b.x - center_offset);
            angle_a.total_cmp(&angle_b)
        });
        Self {
            center_offset,
            vertices: points,
        }
    }

    /// Signed x-offset of the board center at `y = 0`.
    #[inline]
    pub const fn center_offset(&self) -> Real {
        self.center_offset
    }

    /// Vertices in angular order around the board center.
    #[inline]
    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The board rotated 180° about the frame origin.
    ///
    /// A tilted line through `(o, 0)` maps to the line with the same slope
    /// through `(-o, 0)` under this rotation, so layouts expand in congruent
    /// rotated pairs; this helper exists for symmetry checks and labeling.
    pub fn rotated_180(&self) -> Self {
        let points = self
            .vertices
            .iter()
            .map(|p| Point2::new(-p.x, -p.y))
            .collect();
        Self::from_unordered(-self.center_offset, points)
    }

    /// The board as a closed `geo` polygon, for renderers working in `geo`
    /// types.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        let mut ring: Vec<Coord<Real>> = self
            .vertices
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        if let Some(first) = ring.first().copied() {
            ring.push(first); // close explicitly
        }
        GeoPolygon::new(LineString::new(ring), vec![])
    }
}
