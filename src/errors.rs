//! Crate-level error type aggregating the module taxonomies.

use thiserror::Error;

use crate::geometry::GeometryError;
use crate::solver::{ConfigurationError, NumericalError};

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum VortexPanelError {
    /// Wraps body-geometry construction errors.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Wraps solve-configuration errors (trailing-edge declarations).
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Wraps numerical failures of the dense solve.
    #[error(transparent)]
    Numerical(#[from] NumericalError),
}
