//! Linear-system assembly and the dense strength solve.

/// No-slip system construction and Kutta-condition row substitution.
mod assembly;
/// Dense LU solve and strength write-back.
mod solve;

pub use assembly::{construct_a_b, ConfigurationError, TrailingEdge};
pub use solve::{solve_gamma, solve_gamma_with_report, NumericalError, SolveReport};
