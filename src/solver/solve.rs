//! Dense strength solve and write-back.
//!
//! The assembled system is factored once by LU; a collapsed diagonal of the
//! `U` factor is treated as a singular configuration (degenerate or
//! self-intersecting geometry, coincident bodies) and surfaced immediately —
//! no regularization is attempted.

use thiserror::Error;

use crate::errors::VortexPanelError;
use crate::math::Scalar;
use crate::panel::{PanelArray, PanelOrder};

use super::assembly::{construct_a_b, TrailingEdge};

/// Pivot magnitude below which the factorization is declared singular.
const SINGULAR_TOL: Scalar = 1.0e-13;

/// Numerical failures of the dense solve.
#[derive(Debug, Error, PartialEq)]
pub enum NumericalError {
    /// Singular or near-singular no-slip system.
    #[error("singular no-slip system (smallest LU pivot {min_pivot:.3e})")]
    Singular {
        /// Smallest pivot magnitude found on the U diagonal.
        min_pivot: Scalar,
    },
}

/// Diagnostics from a completed solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// Number of unknowns (panels).
    pub size: usize,
    /// Panel order that was solved.
    pub order: PanelOrder,
    /// Rough condition estimate from the LU U-diagonal ratio (larger is
    /// worse).
    pub cond_estimate: Scalar,
}

/// Solves the no-slip system for the array's current angle of attack and
/// panel order and writes the strengths back onto the panels in panel order.
///
/// Re-solving after [`PanelArray::set_alpha`] or [`PanelArray::set_order`]
/// overwrites the previous strengths; geometry is never touched.
///
/// # Errors
///
/// [`VortexPanelError::Configuration`] for invalid trailing-edge
/// declarations and [`VortexPanelError::Numerical`] when the system is
/// singular.
pub fn solve_gamma(
    array: &mut PanelArray,
    kutta: &[TrailingEdge],
) -> Result<(), VortexPanelError> {
    solve_gamma_with_report(array, kutta).map(|_| ())
}

/// [`solve_gamma`] returning solve diagnostics.
///
/// # Errors
///
/// As [`solve_gamma`].
pub fn solve_gamma_with_report(
    array: &mut PanelArray,
    kutta: &[TrailingEdge],
) -> Result<SolveReport, VortexPanelError> {
    let (a, b) = construct_a_b(array, kutta)?;
    let lu = a.lu();

    // Singularity and conditioning from the U diagonal, before trusting the
    // back-substitution.
    let u = lu.u();
    let dim = u.nrows().min(u.ncols());
    let mut min_pivot = Scalar::INFINITY;
    let mut max_pivot: Scalar = 0.0;
    for k in 0..dim {
        let d = u[(k, k)].abs();
        min_pivot = min_pivot.min(d);
        max_pivot = max_pivot.max(d);
    }
    if dim > 0 && min_pivot < SINGULAR_TOL {
        return Err(NumericalError::Singular { min_pivot }.into());
    }

    let g = lu
        .solve(&b)
        .ok_or(NumericalError::Singular { min_pivot })?;

    match array.order() {
        PanelOrder::Constant => array.set_strengths_constant(g.as_slice()),
        PanelOrder::Linear => array.set_strengths_linear(g.as_slice()),
    }

    Ok(SolveReport {
        size: dim,
        order: array.order(),
        cond_estimate: if min_pivot > 0.0 {
            max_pivot / min_pivot
        } else {
            Scalar::INFINITY
        },
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use crate::geometry::{make_circle, make_ellipse, make_jfoil};
    use crate::math::Scalar;

    use super::*;

    /// Largest pointwise error of the solved circle strengths against the
    /// analytic sheet `gamma = 2 sin(theta)` at the comparison stations.
    fn circle_gamma_error(n: usize, order: PanelOrder) -> Scalar {
        let mut circle = make_circle(n).unwrap();
        circle.set_order(order);
        solve_gamma(&mut circle, &[]).unwrap();
        let gamma = circle.gamma();
        let mut err: Scalar = 0.0;
        for k in 0..n {
            // Constant strengths collocate at panel centers; linear unknowns
            // live on the shared end nodes.
            let theta = match order {
                PanelOrder::Constant => 2.0 * PI * (k as Scalar + 0.5) / n as Scalar,
                PanelOrder::Linear => 2.0 * PI * (k as Scalar + 1.0) / n as Scalar,
            };
            err = err.max((gamma[k] - 2.0 * theta.sin()).abs());
        }
        err
    }

    #[test]
    fn circle_converges_to_analytic_sheet_first_order() {
        let e32 = circle_gamma_error(32, PanelOrder::Constant);
        let e64 = circle_gamma_error(64, PanelOrder::Constant);
        assert!(e32 < 0.2, "coarse error too large: {e32}");
        assert!(e64 < e32, "error did not shrink: {e32} -> {e64}");
        assert!(e64 / e32 < 0.8, "first-order decay not observed: {e32} -> {e64}");
    }

    #[test]
    fn linear_order_is_markedly_more_accurate() {
        let c64 = circle_gamma_error(64, PanelOrder::Constant);
        let l32 = circle_gamma_error(32, PanelOrder::Linear);
        let l64 = circle_gamma_error(64, PanelOrder::Linear);
        assert!(l64 < 0.25 * c64, "linear not beating constant: {l64} vs {c64}");
        assert!(l64 / l32 < 0.5, "second-order decay not observed: {l32} -> {l64}");
    }

    #[test]
    fn solved_circle_interior_is_stagnant() {
        let mut circle = make_circle(64).unwrap();
        circle.set_alpha(0.3);
        solve_gamma(&mut circle, &[]).unwrap();
        assert!(circle.velocity(0.0, 0.0).norm() < 0.02);
        // Far away the disturbance dies off and the free stream survives.
        let far = circle.velocity(50.0, 0.0);
        assert_relative_eq!(far.x, 0.3f64.cos(), epsilon = 1.0e-2);
        assert_relative_eq!(far.y, 0.3f64.sin(), epsilon = 1.0e-2);
    }

    #[test]
    fn kutta_pair_enforces_antisymmetry() {
        let mut foil = make_jfoil(64, -0.1, 0.0).unwrap();
        foil.set_alpha(0.1);
        solve_gamma(&mut foil, &[TrailingEdge(0, -1)]).unwrap();
        let g = foil.gamma();
        assert_relative_eq!(g[0] + g[63], 0.0, epsilon = 1.0e-10);

        // Without the condition the edge strengths owe each other nothing.
        solve_gamma(&mut foil, &[]).unwrap();
        let g = foil.gamma();
        assert!((g[0] + g[63]).abs() > 1.0e-3);
    }

    #[test]
    fn kutta_antisymmetry_holds_for_linear_order() {
        let mut foil = make_jfoil(64, -0.1, 0.0).unwrap();
        foil.set_alpha(0.1);
        foil.set_order(PanelOrder::Linear);
        solve_gamma(&mut foil, &[TrailingEdge(0, -1)]).unwrap();
        let g = foil.gamma();
        assert_relative_eq!(g[0] + g[63], 0.0, epsilon = 1.0e-10);
    }

    #[test]
    fn tandem_bodies_take_independent_trailing_edges() {
        let foil = make_jfoil(32, -0.1, 0.0).unwrap();
        let cylinder = make_ellipse(16, 1.0, 4.0, 0.0).unwrap();
        let mut both = PanelArray::concat(&[&foil, &cylinder]).unwrap();
        both.set_alpha(0.2);
        // The foil's trailing edge, addressed with its offset in the merged
        // sequence (offset zero here since the foil comes first).
        solve_gamma(&mut both, &[TrailingEdge(0, 31)]).unwrap();
        let g = both.gamma();
        assert_relative_eq!(g[0] + g[31], 0.0, epsilon = 1.0e-10);
    }

    #[test]
    fn coincident_bodies_are_singular() {
        let circle = make_circle(16).unwrap();
        let mut doubled = PanelArray::concat(&[&circle, &circle]).unwrap();
        let err = solve_gamma(&mut doubled, &[]).unwrap_err();
        assert!(matches!(err, VortexPanelError::Numerical(_)));
    }

    #[test]
    fn report_carries_size_order_and_conditioning() {
        let mut circle = make_circle(24).unwrap();
        let report = solve_gamma_with_report(&mut circle, &[]).unwrap();
        assert_eq!(report.size, 24);
        assert_eq!(report.order, PanelOrder::Constant);
        assert!(report.cond_estimate.is_finite() && report.cond_estimate >= 1.0);
    }
}
