use tiltboard::float_types::Real;
use tiltboard::{ComputedLayout, Layout, LayoutError, Parity};

mod support;

use crate::support::{approx_eq, has_vertex, same_vertex_set};

const SQRT_2: Real = std::f64::consts::SQRT_2 as Real;

/// The reference scenario: 600 x 400 frame, 140 boards at 45° with 4 spacing.
fn reference_layout(parity: Parity) -> ComputedLayout {
    Layout::new(600.0, 400.0, 140.0, 45.0, 4.0, parity)
        .unwrap()
        .calculate()
        .unwrap()
}

/// Every board at offset `o` must have a partner at `-o` congruent under 180°
/// rotation about the origin (the center board, if any, being its own
/// partner).
fn assert_mirror_symmetric(computed: &ComputedLayout) {
    for board in &computed.boards {
        let rotated = board.rotated_180();
        let partner = computed
            .boards
            .iter()
            .find(|b| approx_eq(b.center_offset(), -board.center_offset(), 1e-9))
            .expect("missing mirror partner");
        assert!(
            same_vertex_set(partner, &rotated, 1e-9),
            "board at offset {} has no congruent partner",
            board.center_offset()
        );
    }
}

#[test]
fn zero_angle_is_rejected() {
    for angle in [0.0, 180.0, -180.0, 360.0] {
        let result = Layout::new(600.0, 400.0, 140.0, angle, 4.0, Parity::Even);
        assert!(
            matches!(result, Err(LayoutError::InvalidConfiguration(_))),
            "angle {} must be rejected",
            angle
        );
    }
}

#[test]
fn invalid_dimensions_are_rejected() {
    let cases = [
        (0.0, 400.0, 140.0, 45.0, 4.0),
        (600.0, -400.0, 140.0, 45.0, 4.0),
        (600.0, 400.0, 0.0, 45.0, 4.0),
        (600.0, 400.0, 140.0, 45.0, -1.0),
        (Real::NAN, 400.0, 140.0, 45.0, 4.0),
    ];
    for (w, h, bw, angle, spacing) in cases {
        let result = Layout::new(w, h, bw, angle, spacing, Parity::Even);
        assert!(matches!(result, Err(LayoutError::InvalidConfiguration(_))));
    }
}

#[test]
fn derived_constants() {
    let layout = Layout::new(600.0, 400.0, 140.0, 45.0, 4.0, Parity::Even).unwrap();
    // 1 / sin 45° = √2
    assert!(approx_eq(layout.offset_step(), 144.0 * SQRT_2, 1e-9));
    assert!(approx_eq(layout.board_x_half_width(), 70.0 * SQRT_2, 1e-9));
    assert!(approx_eq(layout.angle(), 45.0_f64.to_radians() as Real, 1e-12));
}

#[test]
fn even_reference_scenario() {
    let computed = reference_layout(Parity::Even);
    // Pairs at ±72√2, ±216√2, ±360√2; the next candidate misses the frame.
    assert_eq!(computed.boards.len(), 6);
    assert_mirror_symmetric(&computed);

    // No board sits on the centerline.
    assert!(
        computed
            .boards
            .iter()
            .all(|b| b.center_offset().abs() > 1.0)
    );

    // The outermost boards are clipped down to a frame corner.
    let outermost = computed
        .boards
        .iter()
        .max_by(|a, b| a.center_offset().total_cmp(&b.center_offset()))
        .unwrap();
    assert!(has_vertex(outermost, 300.0, -200.0, 1e-9));
    let outermost_mirror = computed
        .boards
        .iter()
        .min_by(|a, b| a.center_offset().total_cmp(&b.center_offset()))
        .unwrap();
    assert!(has_vertex(outermost_mirror, -300.0, 200.0, 1e-9));
}

#[test]
fn odd_reference_scenario() {
    let computed = reference_layout(Parity::Odd);
    // Center board plus pairs at ±144√2, ±288√2.
    assert_eq!(computed.boards.len(), 5);
    assert_mirror_symmetric(&computed);

    let center = computed
        .boards
        .iter()
        .find(|b| approx_eq(b.center_offset(), 0.0, 1e-12))
        .expect("odd layout must seed a center board");
    // Two crossings per bounding line, no corners enclosed.
    assert_eq!(center.len(), 4);
    // The center board maps onto itself under 180° rotation.
    assert!(same_vertex_set(center, &center.rotated_180(), 1e-9));
}

#[test]
fn original_angle_scenario() {
    // The 22° tilt from the tool this engine was built for.
    let computed = Layout::new(600.0, 400.0, 140.0, 22.0, 4.0, Parity::Even)
        .unwrap()
        .calculate()
        .unwrap();
    assert!(!computed.boards.is_empty());
    assert_eq!(computed.boards.len() % 2, 0);
    assert_mirror_symmetric(&computed);

    // Clipping never produces a vertex outside the frame.
    for board in &computed.boards {
        for v in board.vertices() {
            assert!(v.x.abs() <= 300.0 + 1e-9);
            assert!(v.y.abs() <= 200.0 + 1e-9);
        }
    }
}

#[test]
fn boards_are_simple_polygons() {
    for parity in [Parity::Even, Parity::Odd] {
        let computed = reference_layout(parity);
        for board in &computed.boards {
            assert!(board.len() >= 3);
            // Vertices are distinct and strictly ordered by angle around the
            // board center, so edges cannot cross.
            let angles: Vec<Real> = board
                .vertices()
                .iter()
                .map(|v| v.y.atan2(v.x - board.center_offset()))
                .collect();
            for pair in angles.windows(2) {
                assert!(pair[0] < pair[1], "angular order must be strict");
            }
        }
    }
}

#[test]
fn oversized_board_even_yields_single_pair() {
    // A 300 board on a 100 x 100 frame: only the innermost pair intersects.
    let computed = Layout::new(100.0, 100.0, 300.0, 45.0, 0.0, Parity::Even)
        .unwrap()
        .calculate()
        .unwrap();
    assert_eq!(computed.boards.len(), 2);
    assert_mirror_symmetric(&computed);
}

#[test]
fn wide_spacing_odd_yields_center_board_only() {
    let computed = Layout::new(100.0, 100.0, 40.0, 45.0, 200.0, Parity::Odd)
        .unwrap()
        .calculate()
        .unwrap();
    assert_eq!(computed.boards.len(), 1);
    assert!(approx_eq(computed.boards[0].center_offset(), 0.0, 1e-12));
}

#[test]
fn degenerate_center_board_is_skipped() {
    // Bounding lines of the center candidate both miss the 100 x 100 frame
    // entirely, so an odd layout comes back empty rather than holding a
    // degenerate board.
    let computed = Layout::new(100.0, 100.0, 300.0, 45.0, 0.0, Parity::Odd)
        .unwrap()
        .calculate()
        .unwrap();
    assert!(computed.boards.is_empty());
}

#[test]
fn calculate_is_pure() {
    let layout = Layout::new(600.0, 400.0, 140.0, 45.0, 4.0, Parity::Even).unwrap();
    let first = layout.calculate().unwrap();
    let second = layout.calculate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn board_at_outside_frame_is_none() {
    let layout = Layout::new(600.0, 400.0, 140.0, 45.0, 4.0, Parity::Even).unwrap();
    assert!(layout.board_at(10_000.0).unwrap().is_none());
    assert!(layout.board_at(0.0).unwrap().is_some());
}
