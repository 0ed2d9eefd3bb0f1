//! Layout generation: tiling the frame with tilted boards

use crate::board::Board;
use crate::errors::LayoutError;
use crate::float_types::{Real, is_close};
use crate::frame::Frame;
use crate::line::TiltedLine;

/// Whether a board is seeded on the frame's vertical centerline.
///
/// `Even` layouts place the innermost pair half a step either side of the
/// centerline; `Odd` layouts place one board centered at `x = 0` and expand
/// outward from there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// Board vertices lying on the frame boundary, grouped per side.
///
/// Each entry is `(coordinate along the edge, distance from the edge corner)`:
/// x and `x + width/2` for the horizontal sides, y and `y + height/2` for the
/// vertical sides. Used downstream for dimension annotation. A vertex exactly
/// on a frame corner appears in both adjacent lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeOffsets {
    pub top: Vec<(Real, Real)>,
    pub bottom: Vec<(Real, Real)>,
    pub left: Vec<(Real, Real)>,
    pub right: Vec<(Real, Real)>,
}

/// Immutable result of [`Layout::calculate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputedLayout {
    /// Boards in generation order: the center board first for [`Parity::Odd`],
    /// then symmetric pairs at increasing distance from the centerline.
    pub boards: Vec<Board>,
    pub edge_offsets: EdgeOffsets,
}

/// Validated layout configuration with its derived stepping constants.
///
/// Construction checks every parameter; [`Layout::calculate`] is then a pure
/// function of the configuration and may be called repeatedly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    frame: Frame,
    /// Tilt angle in radians.
    angle: Real,
    parity: Parity,
    /// Center-to-center distance between consecutive boards, measured along
    /// the x-axis at `y = 0`.
    offset_step: Real,
    /// Half the board's footprint along the x-axis at `y = 0`.
    board_x_half_width: Real,
}

impl Layout {
    /// Validate a configuration and derive the stepping constants.
    ///
    /// # Parameters
    ///
    /// - `width`, `height`: outer frame dimensions, must be positive
    /// - `board_width`: board width measured perpendicular to the tilt, must
    ///   be positive
    /// - `angle_degrees`: tilt angle; rejected when its sine is zero (0°, 180°
    ///   and other multiples), since the x-axis footprint of a board would be
    ///   unbounded
    /// - `spacing`: gap between adjacent boards, must not be negative
    pub fn new(
        width: Real,
        height: Real,
        board_width: Real,
        angle_degrees: Real,
        spacing: Real,
        parity: Parity,
    ) -> Result<Self, LayoutError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Frame dimensions must be positive, got {} x {}",
                width, height
            )));
        }
        if !board_width.is_finite() || board_width <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Board width must be positive, got {}",
                board_width
            )));
        }
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Spacing must not be negative, got {}",
                spacing
            )));
        }
        let angle = angle_degrees.to_radians();
        let sin = angle.sin();
        if !angle_degrees.is_finite() || is_close(sin, 0.0) {
            return Err(LayoutError::InvalidConfiguration(format!(
                "Tilt angle must not be a multiple of 180 degrees, got {}",
                angle_degrees
            )));
        }
        Ok(Self {
            frame: Frame::centered(width, height),
            angle,
            parity,
            offset_step: (board_width + spacing) / sin,
            board_x_half_width: board_width / sin / 2.0,
        })
    }

    #[inline]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Tilt angle in radians.
    #[inline]
    pub const fn angle(&self) -> Real {
        self.angle
    }

    #[inline]
    pub const fn parity(&self) -> Parity {
        self.parity
    }

    /// Center-to-center distance between consecutive boards along the x-axis
    /// at `y = 0`.
    #[inline]
    pub const fn offset_step(&self) -> Real {
        self.offset_step
    }

    /// Half the board footprint along the x-axis at `y = 0`.
    #[inline]
    pub const fn board_x_half_width(&self) -> Real {
        self.board_x_half_width
    }

    /// Generate the full board set and the per-side edge offsets.
    ///
    /// Boards expand outward from the centerline in symmetric pairs at
    /// `±offset`, stepping by [`Self::offset_step`]. Generation stops at the
    /// first offset where either side falls entirely outside the frame, so the
    /// result is always mirror-symmetric about the centerline (pairs of boards
    /// congruent under 180° rotation about the origin). The loop terminates
    /// because the offset strictly increases by a fixed positive step while
    /// the frame is finite.
    pub fn calculate(&self) -> Result<ComputedLayout, LayoutError> {
        let mut boards = Vec::new();
        let mut offset = match self.parity {
            Parity::Even => -self.offset_step / 2.0,
            Parity::Odd => {
                // A degenerate center candidate (possible when the board's
                // bounding lines both miss the frame) is skipped, not stored.
                if let Some(center) = self.board_at(0.0)? {
                    boards.push(center);
                }
                0.0
            },
        };
        loop {
            offset += self.offset_step;
            let Some(right) = self.board_at(offset)? else {
                break;
            };
            let Some(left) = self.board_at(-offset)? else {
                break;
            };
            boards.push(right);
            boards.push(left);
        }
        let edge_offsets = self.edge_offsets(&boards);
        Ok(ComputedLayout {
            boards,
            edge_offsets,
        })
    }

    /// Candidate board centered at the signed `offset`, or `None` when it lies
    /// entirely outside the frame (the loop's termination signal, not an
    /// error).
    ///
    /// The board is bounded by two tilted lines at
    /// `offset ± board_x_half_width`; its polygon collects both lines' frame
    /// crossings plus every frame corner lying between the lines, sorted
    /// angularly around `(offset, 0)`.
    pub fn board_at(&self, offset: Real) -> Result<Option<Board>, LayoutError> {
        let lower = TiltedLine::new(self.angle, offset - self.board_x_half_width);
        let upper = TiltedLine::new(self.angle, offset + self.board_x_half_width);
        let lower_hits = lower.intersect_frame(&self.frame)?;
        let upper_hits = upper.intersect_frame(&self.frame)?;
        if lower_hits.is_empty() && upper_hits.is_empty() {
            return Ok(None);
        }

        let mut points = Vec::with_capacity(lower_hits.len() + upper_hits.len() + 4);
        for corner in self.frame.corners() {
            if lower.is_point_between(*corner, &upper) {
                points.push(*corner);
            }
        }
        points.extend(lower_hits);
        points.extend(upper_hits);
        Ok(Some(Board::from_unordered(offset, points)))
    }

    /// Record every board vertex lying on a frame side, with its distance from
    /// that side's corner.
    fn edge_offsets(&self, boards: &[Board]) -> EdgeOffsets {
        let hw = self.frame.half_width();
        let hh = self.frame.half_height();
        let mut offsets = EdgeOffsets::default();
        for board in boards {
            for vertex in board.vertices() {
                if is_close(vertex.y, -hh) {
                    offsets.bottom.push((vertex.x, vertex.x + hw));
                }
                if is_close(vertex.y, hh) {
                    offsets.top.push((vertex.x, vertex.x + hw));
                }
                if is_close(vertex.x, -hw) {
                    offsets.left.push((vertex.y, vertex.y + hh));
                }
                if is_close(vertex.x, hw) {
                    offsets.right.push((vertex.y, vertex.y + hh));
                }
            }
        }
        offsets
    }
}
