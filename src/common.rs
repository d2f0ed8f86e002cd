//! Scalar abstraction, problem vocabulary and error types shared by the
//! whole crate.

use num_rational::{BigRational, Rational32, Rational64};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar trait used by the solver.
///
/// Pivot ratios and the sign tests that drive row selection must never be
/// subject to rounding, so the trait is implemented for the exact rational
/// types of `num-rational` only. There is deliberately no floating-point
/// implementation: a pivot ratio computed in floating point can silently
/// corrupt the non-negativity and zero-equality tests elsewhere in the
/// algorithm.
pub trait Number:
    Clone
    + One
    + Zero
    + std::ops::Neg<Output = Self>
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::MulAssign
    + std::ops::DivAssign
    + std::cmp::PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
{
}

impl Number for Rational32 {}
impl Number for Rational64 {}
impl Number for BigRational {}

/// Whether the objective function is to be minimized or maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizationDirection {
    /// Maximize the objective function.
    Maximize,
    /// Minimize the objective function.
    Minimize,
}

/// Relational operator of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    /// The `<=` operator.
    Le,
    /// The `>=` operator.
    Ge,
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::Le => write!(f, "<="),
            ComparisonOp::Ge => write!(f, ">="),
        }
    }
}

/// Ceiling on the number of pivots a [`Solver`](crate::Solver) performs
/// before giving up, unless overridden with
/// [`SolverSettings::PivotLimit`].
pub const DEFAULT_PIVOT_LIMIT: usize = 10_000;

/// Solver settings that can be passed to the solver instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverSettings {
    /// Replaces the default ceiling on the number of pivots.
    PivotLimit(usize),
}

/// Errors raised while rewriting a stated problem into standard form.
///
/// None of these are retried: the caller must fix the input and
/// reconstruct the problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulationError {
    /// A constraint supplied a different number of coefficients than the
    /// objective function has.
    DimensionMismatch {
        /// Index of the offending constraint.
        constraint: usize,
        /// Number of objective coefficients.
        expected: usize,
        /// Number of coefficients the constraint supplied.
        found: usize,
    },
    /// A minimization mixed `<=` and `>=` constraints; the formulation
    /// layer requires a single operator for minimization problems.
    MixedComparisons,
}

impl fmt::Display for FormulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulationError::DimensionMismatch {
                constraint,
                expected,
                found,
            } => write!(
                f,
                "constraint {} supplies {} coefficients but the objective has {}",
                constraint, found, expected
            ),
            FormulationError::MixedComparisons => {
                write!(f, "minimization constraints must all use the same comparison operator")
            }
        }
    }
}

impl std::error::Error for FormulationError {}

/// Errors raised while pivoting.
///
/// Both are terminal: the tableau is left in whatever state it was in at
/// the moment of detection and must not be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The ratio test found no eligible row for a valid entering column:
    /// the objective can be improved without limit along that direction.
    /// Also reported when a program that is infeasible at the origin
    /// offers no column that could repair its basis.
    Unbounded,
    /// The pivot counter passed the configured ceiling. This is a safety
    /// valve against undetected cycling, not an expected outcome for
    /// well-formed problems.
    TooManyPivots {
        /// The ceiling that was in force.
        limit: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Unbounded => {
                write!(f, "problem is unbounded: the objective can improve without limit")
            }
            SolveError::TooManyPivots { limit } => {
                write!(f, "gave up after {} pivots; the tableau is likely cycling", limit)
            }
        }
    }
}

impl std::error::Error for SolveError {}
