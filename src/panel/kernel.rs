//! Closed-form influence kernels for straight vortex panels.
//!
//! Each function returns the velocity induced at a field point by one panel
//! carrying *unit* strength; the caller scales by the actual strength, which
//! keeps the boundary-condition system linear in the unknowns. The field
//! point is rotated into the panel frame (`lx` along the tangent, `lz` along
//! the normal), the analytic sheet integrals are evaluated there, and the
//! result is rotated back to the global frame.
//!
//! Sign convention: positive strength corresponds to clockwise
//! micro-circulation, so a panel under a clockwise-traversed body drives the
//! exterior flow along the traversal direction. Evaluation exactly on the
//! sheet takes the body-side limit, which makes the tangential self-term at a
//! panel's own center exactly `0.5` for the constant kernel and exactly
//! `0.25` per end node for the linear kernel.

use std::f64::consts::PI;

use crate::math::{Scalar, V2};

use super::PanelFrame;

/// Field point in panel-local coordinates: `lx` along the tangent measured
/// from the center, `lz` along the normal.
///
/// An exact on-sheet hit (`lz == 0`) is normalized to positive zero so the
/// angle difference below resolves to the body-side limit.
fn local_coords(frame: &PanelFrame, x: Scalar, y: Scalar) -> (Scalar, Scalar) {
    let dx = x - frame.xc;
    let dy = y - frame.yc;
    let lx = dx * frame.sx + dy * frame.sy;
    let lz = dx * frame.sy - dy * frame.sx;
    let lz = if lz == 0.0 { 0.0 } else { lz };
    (lx, lz)
}

/// The two sheet integrals every kernel is built from:
/// `dtheta`, the angle subtended by the panel at the field point, and
/// `lr = ln(r2/r1)`, the log ratio of distances to the panel ends.
fn sheet_terms(lx: Scalar, lz: Scalar, s: Scalar) -> (Scalar, Scalar) {
    let dtheta = Scalar::atan2(lz, lx - s) - Scalar::atan2(lz, lx + s);
    let r1_sq = (lx + s) * (lx + s) + lz * lz;
    let r2_sq = (lx - s) * (lx - s) + lz * lz;
    let lr = 0.5 * (r2_sq / r1_sq).ln();
    (dtheta, lr)
}

/// Rotates a panel-local velocity `(ul, wl)` back to the global frame.
fn to_global(frame: &PanelFrame, ul: Scalar, wl: Scalar) -> V2 {
    V2::new(
        ul * frame.sx + wl * frame.sy,
        ul * frame.sy - wl * frame.sx,
    )
}

/// Velocity at `(x, y)` induced by a unit-strength constant panel.
///
/// In the panel frame `u = dtheta / 2pi`, `w = ln(r2/r1) / 2pi`. At the
/// panel's own center this reduces to a pure tangential velocity of `0.5`.
#[must_use]
pub fn constant_velocity(frame: &PanelFrame, x: Scalar, y: Scalar) -> V2 {
    let (lx, lz) = local_coords(frame, x, y);
    let (dtheta, lr) = sheet_terms(lx, lz, frame.s);
    to_global(frame, dtheta / (2.0 * PI), lr / (2.0 * PI))
}

/// Velocities at `(x, y)` induced by the two end nodes of a unit-strength
/// linear panel, returned as `(start_node, end_node)` contributions.
///
/// The panel's total contribution is `gamma_a * start + gamma_b * end`. The
/// two parts sum to [`constant_velocity`], and each carries a tangential
/// self-term of exactly `0.25` at the panel's own center; the remaining
/// `0.25` a node needs to reach the `0.5` sheet jump comes from the adjacent
/// panel sharing it.
#[must_use]
pub fn linear_velocity(frame: &PanelFrame, x: Scalar, y: Scalar) -> (V2, V2) {
    let s = frame.s;
    let (lx, lz) = local_coords(frame, x, y);
    let (dtheta, lr) = sheet_terms(lx, lz, s);

    // Zeroth and first moments of the sheet integrals over the panel.
    let (i0, j0) = (dtheta, -lr);
    let i1 = lx * dtheta + lz * lr;
    let j1 = -lx * lr - 2.0 * s + lz * dtheta;

    let norm = 1.0 / (4.0 * PI * s);
    let u_a = (s * i0 - i1) * norm;
    let u_b = (s * i0 + i1) * norm;
    let w_a = -(s * j0 - j1) * norm;
    let w_b = -(s * j0 + j1) * norm;

    (to_global(frame, u_a, w_a), to_global(frame, u_b, w_b))
}
