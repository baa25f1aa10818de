//! Panel representation and influence computation.

/// Per-panel geometry view, panel order, and attribute selectors.
mod frame;
/// Closed-form unit-strength influence kernels.
pub mod kernel;
/// Ordered panel collection with strengths and field evaluation.
mod array;

pub use array::PanelArray;
pub use frame::{PanelAttr, PanelFrame, PanelOrder};
