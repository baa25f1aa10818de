//! Force and pressure post-processing from solved strengths.

use crate::math::Scalar;
use crate::panel::PanelArray;

/// Chord length: the x extent of the panel endpoints.
#[must_use]
pub fn chord(array: &PanelArray) -> Scalar {
    let mut min = Scalar::INFINITY;
    let mut max = Scalar::NEG_INFINITY;
    for (&a, &b) in array.x1().iter().zip(array.x2()) {
        min = min.min(a).min(b);
        max = max.max(a).max(b);
    }
    max - min
}

/// Lift coefficient from the solved sheet strengths.
///
/// The sheet circulation is `sum(gamma * 2S)`; Kutta-Joukowski with the unit
/// free stream and the half-dynamic-pressure normalization gives
/// `C_L = -4 sum(gamma_i S_i) / c`.
#[must_use]
pub fn lift_coefficient(array: &PanelArray) -> Scalar {
    let circulation: Scalar = array
        .gamma()
        .iter()
        .zip(array.s())
        .map(|(g, s)| g * s)
        .sum();
    -4.0 * circulation / chord(array)
}

/// Pressure coefficient at each panel, `c_p = 1 - gamma^2`.
///
/// On a no-slip sheet the surface speed equals the local strength magnitude,
/// so Bernoulli against the unit free stream needs nothing but `gamma`.
#[must_use]
pub fn pressure_coefficient(array: &PanelArray) -> Vec<Scalar> {
    array.gamma().iter().map(|g| 1.0 - g * g).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use crate::geometry::{make_circle, make_jfoil};
    use crate::solver::{solve_gamma, TrailingEdge};

    use super::*;

    #[test]
    fn chord_of_unit_circle_is_two() {
        let circle = make_circle(64).unwrap();
        assert_relative_eq!(chord(&circle), 2.0, max_relative = 1.0e-12);
    }

    #[test]
    fn jfoil_lift_matches_joukowski_theory() {
        let alpha = 0.1;
        let mut foil = make_jfoil(128, -0.1, 0.0).unwrap();
        foil.set_alpha(alpha);
        solve_gamma(&mut foil, &[TrailingEdge(0, -1)]).unwrap();

        // Thickness ratio measured off the built geometry.
        let max_y = foil.y1().iter().fold(Scalar::MIN, |a, &b| a.max(b));
        let min_y = foil.y1().iter().fold(Scalar::MAX, |a, &b| a.min(b));
        let t_c = (max_y - min_y) / chord(&foil);

        let expect = 2.0 * PI * (1.0 + 4.0 / (3.0 * Scalar::sqrt(3.0)) * t_c)
            * alpha.sin();
        assert_relative_eq!(lift_coefficient(&foil), expect, max_relative = 0.05);
    }

    #[test]
    fn lift_grows_with_incidence() {
        let mut foil = make_jfoil(64, -0.1, 0.0).unwrap();
        let kutta = [TrailingEdge(0, -1)];
        foil.set_alpha(0.05);
        solve_gamma(&mut foil, &kutta).unwrap();
        let cl_low = lift_coefficient(&foil);
        foil.set_alpha(0.15);
        solve_gamma(&mut foil, &kutta).unwrap();
        let cl_high = lift_coefficient(&foil);
        assert!(cl_high > cl_low && cl_low > 0.0);
    }

    #[test]
    fn circle_pressure_spans_stagnation_to_suction_peak() {
        let mut circle = make_circle(64).unwrap();
        solve_gamma(&mut circle, &[]).unwrap();
        let cp = pressure_coefficient(&circle);
        let max = cp.iter().fold(Scalar::MIN, |a, &b| a.max(b));
        let min = cp.iter().fold(Scalar::MAX, |a, &b| a.min(b));
        // Stagnation c_p -> 1 (collocation points straddle the stagnation
        // streamline), suction peak c_p -> 1 - 4 on the cylinder.
        assert_relative_eq!(max, 1.0, max_relative = 5.0e-2);
        assert_relative_eq!(min, -3.0, max_relative = 3.0e-2);
    }
}
