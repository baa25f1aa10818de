//! Boundary-point generators and panelization.
//!
//! Every builder reduces to generating an ordered, clockwise sequence of
//! boundary points and handing it to [`panelize`]. The traversal direction
//! fixes the normal-vector sign convention for the whole array, so composite
//! bodies must be built with the same winding throughout.

use num_complex::Complex;
use thiserror::Error;

use crate::math::Scalar;
use crate::panel::PanelArray;

/// Errors raised while constructing body geometry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// Coordinate arrays of different lengths.
    #[error("mismatched coordinate lengths: {x_len} x values, {y_len} y values")]
    MismatchedLengths {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
    },
    /// Fewer boundary points than needed for a single panel.
    #[error("need at least 2 boundary points, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },
    /// A panel of zero length (coincident consecutive points).
    #[error("degenerate panel at index {index}: coincident endpoints")]
    DegeneratePanel {
        /// Index of the offending panel.
        index: usize,
    },
    /// Concatenation inputs wind in opposite directions.
    #[error("concatenated bodies have inconsistent traversal orientation")]
    InconsistentOrientation,
    /// Concatenation called with no inputs.
    #[error("nothing to concatenate")]
    EmptyConcatenation,
}

/// Builds `n` panels from `n + 1` ordered boundary points, panel `k` spanning
/// point `k` to point `k + 1`.
///
/// # Errors
///
/// [`GeometryError::MismatchedLengths`] when the arrays differ in length,
/// [`GeometryError::TooFewPoints`] for fewer than two points, and
/// [`GeometryError::DegeneratePanel`] when consecutive points coincide.
pub fn panelize(x: &[Scalar], y: &[Scalar]) -> Result<PanelArray, GeometryError> {
    if x.len() != y.len() {
        return Err(GeometryError::MismatchedLengths {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(GeometryError::TooFewPoints { count: x.len() });
    }
    for k in 0..x.len() - 1 {
        let len = Scalar::hypot(x[k + 1] - x[k], y[k + 1] - y[k]);
        if !(len > 0.0) {
            return Err(GeometryError::DegeneratePanel { index: k });
        }
    }
    Ok(PanelArray::from_points(x, y))
}

/// Unit circle of `n` panels, traversed clockwise from (1, 0).
///
/// # Errors
///
/// Propagates [`panelize`] validation for unusable `n`.
pub fn make_circle(n: usize) -> Result<PanelArray, GeometryError> {
    make_ellipse(n, 1.0, 0.0, 0.0)
}

/// Ellipse of `n` panels with unit chordwise half-axis and vertical half-axis
/// `t_c`, centered at `(xcen, ycen)`, traversed clockwise.
///
/// # Errors
///
/// Propagates [`panelize`] validation, including the degenerate-panel error
/// for `t_c = 0` geometries whose endpoints coincide.
pub fn make_ellipse(
    n: usize,
    t_c: Scalar,
    xcen: Scalar,
    ycen: Scalar,
) -> Result<PanelArray, GeometryError> {
    let mut x = Vec::with_capacity(n + 1);
    let mut y = Vec::with_capacity(n + 1);
    for k in 0..n {
        let theta = 2.0 * std::f64::consts::PI * k as Scalar / n as Scalar;
        x.push(xcen + theta.cos());
        y.push(ycen - t_c * theta.sin());
    }
    // Close exactly on the starting point.
    if n > 0 {
        x.push(x[0]);
        y.push(y[0]);
    }
    panelize(&x, &y)
}

/// Joukowski foil of `n` panels: the conformal image `zeta = (z + 1/z) / 2` of
/// a circle through (1, 0) centered at `(xcen, ycen)`, traversed clockwise.
///
/// The trailing edge is the image of the through-point and lands exactly on
/// (1, 0) as a panel node. Uniform spacing on the preimage circle clusters
/// panels at the trailing edge after the map. A small negative `xcen`
/// thickens the foil (thickness-to-chord ratio near `1.3 |xcen|`); a positive
/// `ycen` cambers it.
///
/// # Errors
///
/// Propagates [`panelize`] validation for unusable `n`.
pub fn make_jfoil(
    n: usize,
    xcen: Scalar,
    ycen: Scalar,
) -> Result<PanelArray, GeometryError> {
    let center = Complex::new(xcen, ycen);
    let lever = Complex::new(1.0, 0.0) - center;
    let (radius, phi0) = (lever.norm(), lever.arg());

    let mut x = Vec::with_capacity(n + 1);
    let mut y = Vec::with_capacity(n + 1);
    for k in 0..n {
        let phi = phi0 - 2.0 * std::f64::consts::PI * k as Scalar / n as Scalar;
        let z = center + Complex::from_polar(radius, phi);
        let zeta = 0.5 * (z + z.inv());
        x.push(zeta.re);
        y.push(zeta.im);
    }
    if n > 0 {
        x.push(x[0]);
        y.push(y[0]);
    }
    panelize(&x, &y)
}
