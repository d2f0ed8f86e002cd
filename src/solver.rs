//! Solver facade over the tableau engine.

use crate::viz::TableauView;
use crate::{
    Number, OptimizationDirection, SolveError, SolverSettings, Tableau, DEFAULT_PIVOT_LIMIT,
};
use log::debug;

/// Drives a [`Tableau`] to termination.
///
/// A solver exclusively owns its tableau and mutates it in place; every
/// call returns synchronously. Sharing one instance across threads is the
/// caller's responsibility. A stated minimization was negated at
/// formulation time, so the solver only has to negate the reported
/// objective value on the way back out; the pivoting itself never
/// branches on direction.
#[derive(Debug, Clone)]
pub struct Solver<N> {
    tableau: Tableau<N>,
    direction: OptimizationDirection,
    pivot_limit: usize,
    pivots: usize,
}

impl<N: Number> Solver<N> {
    pub(crate) fn new(tableau: Tableau<N>, direction: OptimizationDirection) -> Self {
        Solver {
            tableau,
            direction,
            pivot_limit: DEFAULT_PIVOT_LIMIT,
            pivots: 0,
        }
    }

    /// Enable a setting.
    pub fn setting(&mut self, setting: SolverSettings) {
        match setting {
            SolverSettings::PivotLimit(limit) => self.pivot_limit = limit,
        }
    }

    /// Pivots until no further improvement is possible and returns the
    /// decision-variable assignment.
    ///
    /// Solving an already-solved instance performs no further pivots and
    /// returns the same assignment. Exceeding the pivot ceiling fails with
    /// [`SolveError::TooManyPivots`]; an unbounded direction fails with
    /// [`SolveError::Unbounded`].
    pub fn solve(&mut self) -> Result<Vec<N>, SolveError> {
        debug!(
            "solving: {} decision variables, {} constraints",
            self.tableau.num_decision_variables(),
            self.tableau.num_constraints()
        );
        while self.tableau.can_improve() {
            if self.pivots >= self.pivot_limit {
                return Err(SolveError::TooManyPivots {
                    limit: self.pivot_limit,
                });
            }
            self.tableau.pivot()?;
            self.pivots += 1;
        }
        debug!(
            "optimum found after {} pivots, objective {}",
            self.pivots,
            self.objective_value()
        );
        Ok(self.current_solution())
    }

    /// Whether another pivot can improve or repair the current basis.
    pub fn can_improve(&self) -> bool {
        self.tableau.can_improve()
    }

    /// Performs a single pivot, for stepwise driving and debugging.
    ///
    /// Returns `Ok(false)` once the tableau is terminal. Manual stepping
    /// is never interrupted by the pivot ceiling; only
    /// [`solve`](Solver::solve) enforces it.
    pub fn pivot(&mut self) -> Result<bool, SolveError> {
        let pivoted = self.tableau.pivot()?;
        if pivoted {
            self.pivots += 1;
        }
        Ok(pivoted)
    }

    /// Decision-variable assignment of the current basis, without solving.
    pub fn current_solution(&self) -> Vec<N> {
        self.tableau.solution()
    }

    /// Objective value achieved by the current assignment, reported in
    /// the stated optimization direction.
    pub fn objective_value(&self) -> N {
        let value = self.tableau.objective_value();
        match self.direction {
            OptimizationDirection::Maximize => value,
            OptimizationDirection::Minimize => -value,
        }
    }

    /// Number of pivots performed so far.
    pub fn pivots(&self) -> usize {
        self.pivots
    }

    /// The tableau being driven.
    pub fn tableau(&self) -> &Tableau<N> {
        &self.tableau
    }

    /// Read-only snapshot of the tableau, for printing and debugging.
    pub fn view(&self) -> TableauView {
        TableauView::new(&self.tableau)
    }
}
