use crate::math::Scalar;

/// Geometry of a single straight panel, viewed out of a [`super::PanelArray`].
///
/// The frame is everything the influence kernels need: the collocation center,
/// the half-length, and the unit tangent. The unit normal is the tangent
/// rotated a quarter turn clockwise, `(sy, -sx)`; for the clockwise traversals
/// the builders produce it points into the body.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Panel center x.
    pub xc: Scalar,
    /// Panel center y.
    pub yc: Scalar,
    /// Half-length, strictly positive.
    pub s: Scalar,
    /// Unit tangent x component (points from the first endpoint to the second).
    pub sx: Scalar,
    /// Unit tangent y component.
    pub sy: Scalar,
}

impl PanelFrame {
    /// Unit normal `(sy, -sx)`.
    #[must_use]
    pub const fn normal(&self) -> (Scalar, Scalar) {
        (self.sy, -self.sx)
    }
}

/// Assumed variation of the sheet strength over each panel.
///
/// The order selects the influence kernel and the meaning of the solved
/// unknowns: one uniform strength per panel, or one node value per panel
/// shared with the next panel of the same body.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelOrder {
    /// Piecewise-constant strength; first-order accurate.
    #[default]
    Constant,
    /// Piecewise-linear strength, continuous at shared nodes; second-order
    /// accurate.
    Linear,
}

/// Named per-panel attributes retrievable as ordered arrays.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAttr {
    /// Sheet strength: the panel strength (constant order) or the panel's
    /// end-node value (linear order).
    Gamma,
    /// Strength at the panel's first endpoint (linear order).
    GammaStart,
    /// Strength at the panel's second endpoint (linear order).
    GammaEnd,
    /// Center x coordinate.
    CenterX,
    /// Center y coordinate.
    CenterY,
    /// Half-length.
    HalfLength,
    /// Unit tangent x component.
    TangentX,
    /// Unit tangent y component.
    TangentY,
    /// Unit normal x component.
    NormalX,
    /// Unit normal y component.
    NormalY,
}
