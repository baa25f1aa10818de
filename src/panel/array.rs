use crate::geometry::GeometryError;
use crate::math::{free_stream, Scalar, V2};

use super::kernel::{constant_velocity, linear_velocity};
use super::{PanelAttr, PanelFrame, PanelOrder};

/// An ordered collection of panels plus the free-stream angle of attack.
///
/// Geometry is stored as parallel per-panel columns over a fixed arena:
/// endpoints, centers, half-lengths, and unit tangents. The traversal order of
/// the columns defines the surface, the arc-length parametrization, and the
/// node adjacency used by the linear-order solve. Geometry is immutable after
/// construction; the strength columns are overwritten by each solve.
///
/// Solving takes `&mut self`, so concurrent solves on one instance are
/// unrepresentable; independent instances may be solved from independent
/// threads freely.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PanelArray {
    x1: Vec<Scalar>,
    y1: Vec<Scalar>,
    x2: Vec<Scalar>,
    y2: Vec<Scalar>,
    xc: Vec<Scalar>,
    yc: Vec<Scalar>,
    s: Vec<Scalar>,
    sx: Vec<Scalar>,
    sy: Vec<Scalar>,
    gamma: Vec<Scalar>,
    gamma_a: Vec<Scalar>,
    gamma_b: Vec<Scalar>,
    alpha: Scalar,
    order: PanelOrder,
    /// Half-open panel ranges of the concatenated sub-bodies; node adjacency
    /// wraps within each range.
    bodies: Vec<(usize, usize)>,
}

impl PanelArray {
    /// Builds an array from `n + 1` ordered boundary points.
    ///
    /// Callers validate lengths and degeneracy first; this constructor only
    /// derives the per-panel columns.
    pub(crate) fn from_points(x: &[Scalar], y: &[Scalar]) -> Self {
        let n = x.len() - 1;
        let mut arr = Self {
            x1: Vec::with_capacity(n),
            y1: Vec::with_capacity(n),
            x2: Vec::with_capacity(n),
            y2: Vec::with_capacity(n),
            xc: Vec::with_capacity(n),
            yc: Vec::with_capacity(n),
            s: Vec::with_capacity(n),
            sx: Vec::with_capacity(n),
            sy: Vec::with_capacity(n),
            gamma: vec![0.0; n],
            gamma_a: vec![0.0; n],
            gamma_b: vec![0.0; n],
            alpha: 0.0,
            order: PanelOrder::default(),
            bodies: vec![(0, n)],
        };
        for k in 0..n {
            let (dx, dy) = (x[k + 1] - x[k], y[k + 1] - y[k]);
            let len = Scalar::hypot(dx, dy);
            arr.x1.push(x[k]);
            arr.y1.push(y[k]);
            arr.x2.push(x[k + 1]);
            arr.y2.push(y[k + 1]);
            arr.xc.push(0.5 * (x[k] + x[k + 1]));
            arr.yc.push(0.5 * (y[k] + y[k + 1]));
            arr.s.push(0.5 * len);
            arr.sx.push(dx / len);
            arr.sy.push(dy / len);
        }
        arr
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.s.len()
    }

    /// True if the array holds no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Free-stream angle of attack in radians.
    #[must_use]
    pub const fn alpha(&self) -> Scalar {
        self.alpha
    }

    /// Sets the free-stream angle of attack in radians.
    pub fn set_alpha(&mut self, alpha: Scalar) {
        self.alpha = alpha;
    }

    /// Panel order used by the next solve.
    #[must_use]
    pub const fn order(&self) -> PanelOrder {
        self.order
    }

    /// Selects the panel order for subsequent solves.
    pub fn set_order(&mut self, order: PanelOrder) {
        self.order = order;
    }

    /// Half-open panel ranges of the concatenated sub-bodies.
    #[must_use]
    pub fn bodies(&self) -> &[(usize, usize)] {
        &self.bodies
    }

    /// Geometry view of panel `i`, the argument of the influence kernels.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn frame(&self, i: usize) -> PanelFrame {
        PanelFrame {
            xc: self.xc[i],
            yc: self.yc[i],
            s: self.s[i],
            sx: self.sx[i],
            sy: self.sy[i],
        }
    }

    /// Panel center x coordinates.
    #[must_use]
    pub fn xc(&self) -> &[Scalar] {
        &self.xc
    }

    /// Panel center y coordinates.
    #[must_use]
    pub fn yc(&self) -> &[Scalar] {
        &self.yc
    }

    /// Panel half-lengths.
    #[must_use]
    pub fn s(&self) -> &[Scalar] {
        &self.s
    }

    /// Unit tangent x components.
    #[must_use]
    pub fn sx(&self) -> &[Scalar] {
        &self.sx
    }

    /// Unit tangent y components.
    #[must_use]
    pub fn sy(&self) -> &[Scalar] {
        &self.sy
    }

    /// First-endpoint x coordinates.
    #[must_use]
    pub fn x1(&self) -> &[Scalar] {
        &self.x1
    }

    /// First-endpoint y coordinates.
    #[must_use]
    pub fn y1(&self) -> &[Scalar] {
        &self.y1
    }

    /// Second-endpoint x coordinates.
    #[must_use]
    pub fn x2(&self) -> &[Scalar] {
        &self.x2
    }

    /// Second-endpoint y coordinates.
    #[must_use]
    pub fn y2(&self) -> &[Scalar] {
        &self.y2
    }

    /// Solved sheet strengths, one per panel.
    #[must_use]
    pub fn gamma(&self) -> &[Scalar] {
        &self.gamma
    }

    /// Strengths at the panels' first endpoints (linear order).
    #[must_use]
    pub fn gamma_start(&self) -> &[Scalar] {
        &self.gamma_a
    }

    /// Strengths at the panels' second endpoints (linear order).
    #[must_use]
    pub fn gamma_end(&self) -> &[Scalar] {
        &self.gamma_b
    }

    /// Ordered per-panel column for the selected attribute.
    #[must_use]
    pub fn get_array(&self, attr: PanelAttr) -> Vec<Scalar> {
        match attr {
            PanelAttr::Gamma => self.gamma.clone(),
            PanelAttr::GammaStart => self.gamma_a.clone(),
            PanelAttr::GammaEnd => self.gamma_b.clone(),
            PanelAttr::CenterX => self.xc.clone(),
            PanelAttr::CenterY => self.yc.clone(),
            PanelAttr::HalfLength => self.s.clone(),
            PanelAttr::TangentX => self.sx.clone(),
            PanelAttr::TangentY => self.sy.clone(),
            PanelAttr::NormalX => self.sy.clone(),
            PanelAttr::NormalY => self.sx.iter().map(|v| -v).collect(),
        }
    }

    /// Cumulative arc length at each panel center:
    /// `s_0 = S_0`, `s_i = s_{i-1} + 2 S_{i-1}`. Strictly increasing; the
    /// last value is the perimeter short of the final half-length.
    #[must_use]
    pub fn distance(&self) -> Vec<Scalar> {
        let mut out = Vec::with_capacity(self.len());
        let mut acc = 0.0;
        for (i, &half) in self.s.iter().enumerate() {
            if i == 0 {
                acc = half;
            } else {
                acc += 2.0 * self.s[i - 1];
            }
            out.push(acc);
        }
        out
    }

    /// Total velocity at an arbitrary field point: the free stream plus the
    /// superposition of every panel's induced contribution at its current
    /// strength. O(N) per query.
    #[must_use]
    pub fn velocity(&self, x: Scalar, y: Scalar) -> V2 {
        let mut v = free_stream(self.alpha);
        match self.order {
            PanelOrder::Constant => {
                for j in 0..self.len() {
                    v += constant_velocity(&self.frame(j), x, y) * self.gamma[j];
                }
            }
            PanelOrder::Linear => {
                for j in 0..self.len() {
                    let (fa, fb) = linear_velocity(&self.frame(j), x, y);
                    v += fa * self.gamma_a[j] + fb * self.gamma_b[j];
                }
            }
        }
        v
    }

    /// Ordered union of the panel sequences of `arrays`.
    ///
    /// Sub-body ranges are carried over with offsets, so node adjacency never
    /// crosses an input boundary and trailing-edge indices declared against a
    /// sub-array stay valid after shifting by its offset. Angle of attack and
    /// panel order are inherited from the first input. Inputs with opposite
    /// traversal senses are rejected.
    ///
    /// # Errors
    ///
    /// [`GeometryError::EmptyConcatenation`] when `arrays` is empty and
    /// [`GeometryError::InconsistentOrientation`] when two closed inputs wind
    /// in opposite directions.
    pub fn concat(arrays: &[&Self]) -> Result<Self, GeometryError> {
        let first = *arrays.first().ok_or(GeometryError::EmptyConcatenation)?;

        // Traversal sense via the shoelace sum; open bodies enclose next to
        // no area and are exempt.
        const AREA_TOL: Scalar = 1.0e-12;
        let mut reference: Option<Scalar> = None;
        for arr in arrays {
            let area = arr.signed_area();
            if area.abs() <= AREA_TOL {
                continue;
            }
            match reference {
                None => reference = Some(area),
                Some(r) if r * area < 0.0 => {
                    return Err(GeometryError::InconsistentOrientation)
                }
                Some(_) => {}
            }
        }

        let total: usize = arrays.iter().map(|a| a.len()).sum();
        let mut out = Self {
            x1: Vec::with_capacity(total),
            y1: Vec::with_capacity(total),
            x2: Vec::with_capacity(total),
            y2: Vec::with_capacity(total),
            xc: Vec::with_capacity(total),
            yc: Vec::with_capacity(total),
            s: Vec::with_capacity(total),
            sx: Vec::with_capacity(total),
            sy: Vec::with_capacity(total),
            gamma: Vec::with_capacity(total),
            gamma_a: Vec::with_capacity(total),
            gamma_b: Vec::with_capacity(total),
            alpha: first.alpha,
            order: first.order,
            bodies: Vec::new(),
        };
        let mut offset = 0;
        for arr in arrays {
            out.x1.extend_from_slice(&arr.x1);
            out.y1.extend_from_slice(&arr.y1);
            out.x2.extend_from_slice(&arr.x2);
            out.y2.extend_from_slice(&arr.y2);
            out.xc.extend_from_slice(&arr.xc);
            out.yc.extend_from_slice(&arr.yc);
            out.s.extend_from_slice(&arr.s);
            out.sx.extend_from_slice(&arr.sx);
            out.sy.extend_from_slice(&arr.sy);
            out.gamma.extend_from_slice(&arr.gamma);
            out.gamma_a.extend_from_slice(&arr.gamma_a);
            out.gamma_b.extend_from_slice(&arr.gamma_b);
            out.bodies
                .extend(arr.bodies.iter().map(|&(a, b)| (a + offset, b + offset)));
            offset += arr.len();
        }
        Ok(out)
    }

    /// Shoelace sum over the panel endpoints; negative for the clockwise
    /// traversals the builders produce.
    pub(crate) fn signed_area(&self) -> Scalar {
        let mut area = 0.0;
        for k in 0..self.len() {
            area += 0.5 * (self.x1[k] * self.y2[k] - self.x2[k] * self.y1[k]);
        }
        area
    }

    /// Index of the panel whose end node is panel `k`'s start node, wrapping
    /// within `k`'s sub-body.
    pub(crate) fn prev_in_body(&self, k: usize) -> usize {
        let (start, end) = self.body_of(k);
        if k == start {
            end - 1
        } else {
            k - 1
        }
    }

    fn body_of(&self, k: usize) -> (usize, usize) {
        *self
            .bodies
            .iter()
            .find(|&&(a, b)| k >= a && k < b)
            .expect("panel index inside a body range")
    }

    /// Writes back a constant-order solution in panel order.
    pub(crate) fn set_strengths_constant(&mut self, g: &[Scalar]) {
        self.gamma.copy_from_slice(g);
        self.gamma_a.copy_from_slice(g);
        self.gamma_b.copy_from_slice(g);
    }

    /// Writes back a linear-order solution: unknown `k` is panel `k`'s end
    /// node, shared with the next panel of the same body.
    pub(crate) fn set_strengths_linear(&mut self, g: &[Scalar]) {
        for k in 0..self.len() {
            self.gamma[k] = g[k];
            self.gamma_b[k] = g[k];
            self.gamma_a[k] = g[self.prev_in_body(k)];
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use crate::geometry::{make_circle, panelize};

    use super::*;

    #[test]
    fn distance_starts_at_half_width_and_tracks_perimeter() {
        let circle = make_circle(48).unwrap();
        let d = circle.distance();
        assert_relative_eq!(d[0], circle.s()[0], epsilon = 1.0e-14);
        for w in d.windows(2) {
            assert!(w[1] > w[0]);
        }
        let perimeter: Scalar = circle.s().iter().map(|h| 2.0 * h).sum();
        assert_relative_eq!(
            d[d.len() - 1],
            perimeter - circle.s()[circle.len() - 1],
            epsilon = 1.0e-12
        );
        // 48 panels approximate the unit circle's circumference closely.
        assert_relative_eq!(perimeter, 2.0 * PI, max_relative = 2.0e-3);
    }

    #[test]
    fn unsolved_array_reproduces_free_stream() {
        let mut circle = make_circle(16).unwrap();
        circle.set_alpha(0.25);
        let v = circle.velocity(80.0, -40.0);
        assert_relative_eq!(v.x, 0.25f64.cos(), epsilon = 1.0e-12);
        assert_relative_eq!(v.y, 0.25f64.sin(), epsilon = 1.0e-12);
    }

    #[test]
    fn get_array_is_aligned_with_panel_order() {
        let circle = make_circle(12).unwrap();
        assert_eq!(circle.get_array(PanelAttr::CenterX), circle.xc().to_vec());
        let nx = circle.get_array(PanelAttr::NormalX);
        let ny = circle.get_array(PanelAttr::NormalY);
        for k in 0..circle.len() {
            assert_relative_eq!(nx[k], circle.sy()[k], epsilon = 1.0e-15);
            assert_relative_eq!(ny[k], -circle.sx()[k], epsilon = 1.0e-15);
        }
    }

    #[test]
    fn concat_preserves_order_and_offsets() {
        let a = make_circle(10).unwrap();
        let b = {
            let x: Vec<Scalar> = (0..=5).map(|i| 3.0 + 0.2 * i as Scalar).collect();
            let y = vec![0.0; 6];
            panelize(&x, &y).unwrap()
        };
        let both = PanelArray::concat(&[&a, &b]).unwrap();
        assert_eq!(both.len(), a.len() + b.len());
        assert_eq!(both.bodies(), &[(0, 10), (10, 15)][..]);
        for k in 0..a.len() {
            assert_eq!(both.frame(k), a.frame(k));
        }
        for k in 0..b.len() {
            assert_eq!(both.frame(a.len() + k), b.frame(k));
        }
        // Node adjacency wraps per body, never across the seam.
        assert_eq!(both.prev_in_body(0), 9);
        assert_eq!(both.prev_in_body(10), 14);
    }

    #[test]
    fn concat_rejects_opposite_winding() {
        let a = make_circle(10).unwrap();
        let reversed = {
            let theta = crate::math::linspace(0.0, 2.0 * PI, 11);
            let x: Vec<Scalar> = theta.iter().map(|t| t.cos()).collect();
            let y: Vec<Scalar> = theta.iter().map(|t| t.sin()).collect();
            panelize(&x, &y).unwrap()
        };
        let err = PanelArray::concat(&[&a, &reversed]).unwrap_err();
        assert!(matches!(err, GeometryError::InconsistentOrientation));
    }

    #[test]
    fn concat_of_nothing_is_an_error() {
        assert!(matches!(
            PanelArray::concat(&[]),
            Err(GeometryError::EmptyConcatenation)
        ));
    }
}
