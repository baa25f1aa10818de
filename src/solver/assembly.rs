//! No-slip system construction and Kutta-condition row substitution.
//!
//! The boundary condition is collocated at every panel center: the velocity
//! induced by all panels plus the free stream must have zero tangential
//! component on the body side of the sheet. Factoring the unknown strengths
//! out of the induced velocities turns that into a dense `N x N` system
//! `A gamma = b`, assembled here for either panel order.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use crate::math::Scalar;
use crate::panel::kernel::{constant_velocity, linear_velocity};
use crate::panel::{PanelArray, PanelOrder};

/// Errors raised while validating a solve configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A trailing-edge index outside the panel array.
    #[error("trailing-edge index {index} out of range for {len} panels")]
    IndexOutOfRange {
        /// The declared index (possibly negative).
        index: i64,
        /// Number of panels in the array.
        len: usize,
    },
    /// A trailing-edge pair naming the same panel twice.
    #[error("trailing-edge pair resolves to a single panel {index}")]
    DegeneratePair {
        /// The repeated panel index.
        index: usize,
    },
    /// Two trailing-edge pairs competing for the same substituted row.
    #[error("duplicate trailing-edge declaration for panel {row}")]
    DuplicatePair {
        /// The contested row index.
        row: usize,
    },
}

/// A declared sharp trailing edge: the pair of panel indices meeting at it.
///
/// Indices may be negative, counting from the end of the array, and are
/// resolved against the panel count when the system is assembled. Enforcing
/// the pair trades one no-slip equation for the antisymmetry constraint
/// `gamma_i + gamma_j = 0`; the row replaced is always the one belonging to
/// the **first** index of the pair.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingEdge(pub i64, pub i64);

impl TrailingEdge {
    /// Resolves both indices against `len` panels, eagerly rejecting
    /// out-of-range and degenerate declarations.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::IndexOutOfRange`] or
    /// [`ConfigurationError::DegeneratePair`].
    pub fn resolve(&self, len: usize) -> Result<(usize, usize), ConfigurationError> {
        let i = resolve_index(self.0, len)?;
        let j = resolve_index(self.1, len)?;
        if i == j {
            return Err(ConfigurationError::DegeneratePair { index: i });
        }
        Ok((i, j))
    }
}

fn resolve_index(index: i64, len: usize) -> Result<usize, ConfigurationError> {
    let n = len as i64;
    let resolved = if index < 0 { index + n } else { index };
    if resolved < 0 || resolved >= n {
        return Err(ConfigurationError::IndexOutOfRange { index, len });
    }
    Ok(resolved as usize)
}

/// Assembles the no-slip system for the array's panel order and angle of
/// attack, then substitutes one constraint row per declared trailing edge.
///
/// Constant order writes the exact `0.5` sheet-jump self-term on the
/// diagonal; off-diagonal entries are tangential projections of the
/// unit-strength kernels. Linear order accumulates each panel's two end-node
/// influences additively into the columns of the nodes it touches, the end
/// node of a panel being shared with the next panel of the same body.
///
/// # Errors
///
/// Any [`ConfigurationError`] from trailing-edge validation.
pub fn construct_a_b(
    array: &PanelArray,
    kutta: &[TrailingEdge],
) -> Result<(DMatrix<Scalar>, DVector<Scalar>), ConfigurationError> {
    let n = array.len();
    let mut a = DMatrix::zeros(n, n);
    let mut b = DVector::zeros(n);

    let (ca, sa) = (array.alpha().cos(), array.alpha().sin());
    for i in 0..n {
        b[i] = -(ca * array.sx()[i] + sa * array.sy()[i]);
    }

    match array.order() {
        PanelOrder::Constant => {
            for i in 0..n {
                let (xi, yi) = (array.xc()[i], array.yc()[i]);
                let (txi, tyi) = (array.sx()[i], array.sy()[i]);
                for j in 0..n {
                    if i == j {
                        a[(i, i)] = 0.5;
                    } else {
                        let v = constant_velocity(&array.frame(j), xi, yi);
                        a[(i, j)] = v.x * txi + v.y * tyi;
                    }
                }
            }
        }
        PanelOrder::Linear => {
            for i in 0..n {
                let (xi, yi) = (array.xc()[i], array.yc()[i]);
                let (txi, tyi) = (array.sx()[i], array.sy()[i]);
                for j in 0..n {
                    let (fa, fb) = linear_velocity(&array.frame(j), xi, yi);
                    // Start node of panel j is the end node of the previous
                    // panel in j's body; end node is unknown j itself.
                    a[(i, array.prev_in_body(j))] += fa.x * txi + fa.y * tyi;
                    a[(i, j)] += fb.x * txi + fb.y * tyi;
                }
            }
        }
    }

    apply_kutta(&mut a, &mut b, kutta, n)?;
    Ok((a, b))
}

/// Replaces the first-index row of each pair with `gamma_i + gamma_j = 0`.
fn apply_kutta(
    a: &mut DMatrix<Scalar>,
    b: &mut DVector<Scalar>,
    kutta: &[TrailingEdge],
    n: usize,
) -> Result<(), ConfigurationError> {
    let mut taken = vec![false; n];
    for edge in kutta {
        let (i, j) = edge.resolve(n)?;
        if taken[i] {
            return Err(ConfigurationError::DuplicatePair { row: i });
        }
        taken[i] = true;
        for k in 0..n {
            a[(i, k)] = 0.0;
        }
        a[(i, i)] = 1.0;
        a[(i, j)] = 1.0;
        b[i] = 0.0;
    }
    Ok(())
}
