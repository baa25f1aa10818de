#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Shared mathematical primitives (scalar/vector aliases, spacing helpers).
pub mod math;
/// Panel geometry views, attribute selectors, and influence kernels.
pub mod panel;
/// Boundary-point generators and panelization.
pub mod geometry;
/// Linear-system assembly and the dense strength solve.
pub mod solver;
/// Force and pressure post-processing from solved strengths.
pub mod post;
/// Flow-field sampling and streamline advection.
pub mod flow;
/// Error types shared across modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
