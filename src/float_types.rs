// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used by every approximate comparison in the crate: axis-alignment
/// detection, frame-edge membership, and the zero-sine configuration check.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used by every approximate comparison in the crate: axis-alignment
/// detection, frame-edge membership, and the zero-sine configuration check.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-9;

/// Approximate equality: `|a - b| <= EPSILON * max(1, |a|, |b|)`.
///
/// Relative for large magnitudes, absolute (`EPSILON`) near zero, so the same
/// constant works for millimetre-scale and metre-scale frames.
#[inline]
pub fn is_close(a: Real, b: Real) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const INCH: Real = 25.4;
pub const FOOT: Real = 25.4 * 12.0;
pub const MM: Real = 1.0;
pub const CM: Real = 10.0;
pub const METER: Real = 1000.0;
