//! Convenience re-exports for building panel-method solves.

pub use crate::errors::VortexPanelError;
pub use crate::flow::{streamline, velocity_field, VelocityField};
pub use crate::geometry::{
    make_circle, make_ellipse, make_jfoil, panelize, GeometryError,
};
pub use crate::math::{free_stream, linspace, Scalar, V2};
pub use crate::panel::{PanelArray, PanelAttr, PanelFrame, PanelOrder};
pub use crate::post::{chord, lift_coefficient, pressure_coefficient};
pub use crate::solver::{
    construct_a_b, solve_gamma, solve_gamma_with_report, ConfigurationError,
    NumericalError, SolveReport, TrailingEdge,
};
