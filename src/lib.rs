//! `ratlp` solves linear programs with the tableau form of the simplex
//! method, entirely over exact rational arithmetic.
//!
//! State a problem with [`Problem`], turn it into a [`Solver`] and call
//! [`solve`](Solver::solve). Maximizations may mix `<=` and `>=`
//! constraints; a program that is infeasible at the origin is first
//! driven into a feasible basis before the ordinary optimization takes
//! over. Because every pivot comparison is exact, identical inputs always
//! produce identical pivot sequences and bit-for-bit identical solutions.
//!
//! ## An example
//!
//! ```rust
//! use ratlp::{ComparisonOp, Problem, Rational64};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let r = Rational64::from_integer;
//!
//!     let mut problem = Problem::maximize(vec![r(3), r(4)]);
//!     problem.add_constraint(vec![r(1), r(1)], ComparisonOp::Le, r(4));
//!     problem.add_constraint(vec![r(2), r(1)], ComparisonOp::Le, r(5));
//!
//!     let mut solver = problem.build()?;
//!     let solution = solver.solve()?;
//!     assert_eq!(solution, vec![r(0), r(4)]);
//!     assert_eq!(solver.objective_value(), r(16));
//!     Ok(())
//! }
//! ```
//!
//! The tableau can be inspected at any step through
//! [`Solver::view`], which renders a printable table marking the next
//! pivot. This is handy when single-stepping with
//! [`can_improve`](Solver::can_improve) and [`pivot`](Solver::pivot).

#![deny(missing_docs)]

mod common;
pub use common::*;

mod problem;
pub use problem::*;

mod tableau;
pub use tableau::{AuxKind, Tableau};

mod solver;
pub use solver::*;

/// Rendering tableau snapshots for printing and debugging.
pub mod viz;
pub use viz::TableauView;

pub use num_bigint::BigInt;
pub use num_rational::{BigRational, Ratio, Rational32, Rational64};
pub use num_traits;
