//! Layout validation errors

use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt::Display;

/// All the ways a layout request can be rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// (InvalidConfiguration) A constructor parameter is outside its valid range,
    /// e.g. a non-positive dimension or a tilt angle whose sine is zero
    InvalidConfiguration(String),
    /// (UnsupportedGeometry) An intersection was requested against a segment that
    /// is neither horizontal nor vertical
    UnsupportedGeometry {
        start: Point2<Real>,
        end: Point2<Real>,
    },
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidConfiguration(reason) => {
                write!(f, "(InvalidConfiguration) {}", reason)
            },
            LayoutError::UnsupportedGeometry { start, end } => write!(
                f,
                "(UnsupportedGeometry) Segment from {} to {} is not axis-aligned",
                start, end
            ),
        }
    }
}
