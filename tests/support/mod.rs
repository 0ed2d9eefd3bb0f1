//! Test support library
//! Provides various helper functions & utilities for tests.

use tiltboard::Board;
use tiltboard::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// True if some vertex of `board` is within `eps` of `(x, y)` per coordinate.
pub fn has_vertex(board: &Board, x: Real, y: Real, eps: Real) -> bool {
    board
        .vertices()
        .iter()
        .any(|v| approx_eq(v.x, x, eps) && approx_eq(v.y, y, eps))
}

/// True if the two boards carry the same vertex multiset within `eps`.
pub fn same_vertex_set(a: &Board, b: &Board, eps: Real) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut matched = vec![false; b.len()];
    for va in a.vertices() {
        let found = b.vertices().iter().enumerate().find(|(i, vb)| {
            !matched[*i] && approx_eq(va.x, vb.x, eps) && approx_eq(va.y, vb.y, eps)
        });
        match found {
            Some((i, _)) => matched[i] = true,
            None => return false,
        }
    }
    true
}
