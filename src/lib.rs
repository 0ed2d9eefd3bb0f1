//! A **tilted-board layout engine** for generating cutting and assembly
//! diagrams for angled-strip construction (e.g. woodworking).
//!
//! Given a rectangular frame, a board width, a spacing and a tilt angle, the
//! engine slices the frame into parallel angled strips and computes the simple
//! polygon each strip occupies once clipped to the frame, plus the offsets at
//! which boards cross each frame edge (for dimension annotation).
//!
//! Each board is bounded by two parallel [`TiltedLine`]s; its polygon is the
//! lines' crossings with the frame boundary together with any frame corners
//! falling between the lines, sorted angularly around the board center.
//! [`Layout::calculate`] expands boards outward from the frame centerline in
//! symmetric pairs until a candidate falls entirely outside the frame.
//!
//! Rendering, file I/O and measurement formatting are out of scope: the
//! results are plain point sequences (with [`geo`] polygon conversions) for a
//! downstream renderer to consume.
//!
//! # Features
//! - **f64**: use f64 as Real
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Example
//! ```
//! use tiltboard::{Layout, Parity};
//!
//! let layout = Layout::new(600.0, 400.0, 140.0, 22.0, 4.0, Parity::Even).unwrap();
//! let computed = layout.calculate().unwrap();
//! assert!(!computed.boards.is_empty());
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod board;
pub mod errors;
pub mod float_types;
pub mod frame;
pub mod layout;
pub mod line;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use board::Board;
pub use errors::LayoutError;
pub use frame::Frame;
pub use layout::{ComputedLayout, EdgeOffsets, Layout, Parity};
pub use line::TiltedLine;
