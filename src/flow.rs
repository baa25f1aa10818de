//! Flow-field sampling and streamline advection.
//!
//! Pure consumers of [`PanelArray::velocity`], packaged for flow-field
//! diagnostics: a rectangular grid sampler that masks points hugging the
//! body, and a fixed-step RK4 streamline tracer.

use crate::math::{linspace, Scalar, V2};
use crate::panel::PanelArray;

/// Sampled velocity field on a rectangular grid.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityField {
    /// Sample locations, row-major over the grid, body-adjacent points
    /// omitted.
    pub points: Vec<V2>,
    /// Velocity at each retained sample.
    pub velocities: Vec<V2>,
}

/// True when `(x, y)` lies within `clearance` of any panel center.
fn near_body(array: &PanelArray, x: Scalar, y: Scalar, clearance: Scalar) -> bool {
    array
        .xc()
        .iter()
        .zip(array.yc())
        .any(|(&xc, &yc)| Scalar::hypot(x - xc, y - yc) < clearance)
}

/// Samples the total velocity on an `nx` by `ny` grid spanning `x_range` and
/// `y_range`, dropping points within `clearance` of the body surface (the
/// sheet velocity is discontinuous there and the samples would only alias
/// it).
#[must_use]
pub fn velocity_field(
    array: &PanelArray,
    x_range: (Scalar, Scalar),
    y_range: (Scalar, Scalar),
    nx: usize,
    ny: usize,
    clearance: Scalar,
) -> VelocityField {
    let mut points = Vec::new();
    let mut velocities = Vec::new();
    for &y in &linspace(y_range.0, y_range.1, ny) {
        for &x in &linspace(x_range.0, x_range.1, nx) {
            if near_body(array, x, y, clearance) {
                continue;
            }
            points.push(V2::new(x, y));
            velocities.push(array.velocity(x, y));
        }
    }
    VelocityField { points, velocities }
}

/// Advects a seed point through the solved field with fixed-step
/// fourth-order Runge-Kutta, returning the visited positions (seed
/// included).
///
/// Integration stops after `steps` increments, or early if the local speed
/// collapses (stagnation) so the step would stall.
#[must_use]
pub fn streamline(
    array: &PanelArray,
    seed: V2,
    dt: Scalar,
    steps: usize,
) -> Vec<V2> {
    const STALL_SPEED: Scalar = 1.0e-10;
    let mut path = Vec::with_capacity(steps + 1);
    let mut p = seed;
    path.push(p);
    for _ in 0..steps {
        let k1 = array.velocity(p.x, p.y);
        if k1.norm() < STALL_SPEED {
            break;
        }
        let k2 = array.velocity(p.x + 0.5 * dt * k1.x, p.y + 0.5 * dt * k1.y);
        let k3 = array.velocity(p.x + 0.5 * dt * k2.x, p.y + 0.5 * dt * k2.y);
        let k4 = array.velocity(p.x + dt * k3.x, p.y + dt * k3.y);
        p += (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);
        path.push(p);
    }
    path
}
