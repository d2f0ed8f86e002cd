//! The live simplex tableau and the pivoting engine.
//!
//! The tableau always maximizes. It owns the objective row, the dense
//! row-major constraint matrix, the right-hand-side vector and the
//! row-to-variable basis mapping, and mutates all of them in place on
//! every pivot; nothing is rebuilt mid-solve. Programs whose constraints
//! contain surplus columns start with an infeasible basis and are first
//! driven into a feasible one, after which the ordinary optimality rules
//! take over. Whether the ordinary or the repair rules apply is decided by
//! a single predicate consulted before every pivot, not by separate code
//! paths.

use crate::{Number, SolveError};
use itertools::izip;
use log::trace;
use std::collections::BTreeSet;

/// Kind of an auxiliary column, fixed at formulation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxKind {
    /// Added for a `<=` row with coefficient +1; feasible at the origin.
    Slack,
    /// Added for a `>=` row with coefficient -1; the origin violates the
    /// row until feasibility has been restored.
    Surplus,
}

/// Bookkeeping for one auxiliary column: its kind and, while the column
/// is basic, the row it owns.
#[derive(Debug, Clone)]
pub(crate) struct AuxVariable {
    pub(crate) kind: AuxKind,
    pub(crate) row: Option<usize>,
}

/// The live tableau.
///
/// Variable indices below `num_decision_variables()` are decision
/// variables; the rest are the auxiliary columns, one per constraint row.
/// The basis columns always form the identity, except that an unrestored
/// surplus column carries -1 instead of +1 in its row.
#[derive(Debug, Clone)]
pub struct Tableau<N> {
    /// Current reduced costs, one per column; zero for basic columns.
    pub(crate) objective: Vec<N>,
    /// Row-major constraint coefficients, one row per constraint.
    pub(crate) matrix: Vec<Vec<N>>,
    /// One right-hand-side value per row.
    pub(crate) rhs: Vec<N>,
    /// Variable basic in each row.
    pub(crate) basis: Vec<usize>,
    /// One entry per auxiliary column, indexed by `variable - n`.
    pub(crate) aux: Vec<AuxVariable>,
    /// Original maximization costs of the decision variables.
    pub(crate) costs: Vec<N>,
    /// Columns already brought into the basis while repairing
    /// feasibility; cleared as soon as the basis becomes feasible.
    restored: BTreeSet<usize>,
}

impl<N: Number> Tableau<N> {
    pub(crate) fn new(
        objective: Vec<N>,
        matrix: Vec<Vec<N>>,
        rhs: Vec<N>,
        costs: Vec<N>,
        kinds: Vec<AuxKind>,
    ) -> Self {
        let num_decision = costs.len();
        let basis = (0..matrix.len()).map(|row| num_decision + row).collect();
        let aux = kinds
            .into_iter()
            .enumerate()
            .map(|(row, kind)| AuxVariable { kind, row: Some(row) })
            .collect();
        Tableau {
            objective,
            matrix,
            rhs,
            basis,
            aux,
            costs,
            restored: BTreeSet::new(),
        }
    }

    /// Number of decision variables.
    pub fn num_decision_variables(&self) -> usize {
        self.costs.len()
    }

    /// Number of constraint rows.
    pub fn num_constraints(&self) -> usize {
        self.matrix.len()
    }

    fn num_columns(&self) -> usize {
        self.objective.len()
    }

    fn in_basis(&self, column: usize) -> bool {
        self.basis.contains(&column)
    }

    fn is_surplus_row(&self, row: usize) -> bool {
        let var = self.basis[row];
        var >= self.num_decision_variables()
            && self.aux[var - self.num_decision_variables()].kind == AuxKind::Surplus
    }

    /// A basis is feasible when every basic auxiliary variable takes a
    /// non-negative value. An unrestored surplus column carries -1 in its
    /// row, so the value is `rhs / coefficient`, not `rhs` itself.
    pub(crate) fn is_feasible(&self) -> bool {
        self.basis.iter().enumerate().all(|(row, &var)| {
            var < self.num_decision_variables() || {
                let coefficient = self.matrix[row][var].clone();
                self.rhs[row].clone() / coefficient >= N::zero()
            }
        })
    }

    /// Candidate entering column, or `None` once the tableau is terminal.
    pub(crate) fn entering_column(&self) -> Option<usize> {
        if self.is_feasible() {
            let mut best: Option<usize> = None;
            for column in 0..self.num_columns() {
                if self.in_basis(column) || self.objective[column] >= N::zero() {
                    continue;
                }
                // Strict comparison keeps the lowest index among ties.
                match best {
                    Some(b) if self.objective[column] >= self.objective[b] => {}
                    _ => best = Some(column),
                }
            }
            best
        } else {
            let mut fallback = None;
            for column in 0..self.num_columns() {
                if self.in_basis(column) || self.restored.contains(&column) {
                    continue;
                }
                if self.pivot_row(column).is_some() {
                    return Some(column);
                }
                fallback = fallback.or(Some(column));
            }
            // No candidate admits a pivot row; report the first one anyway
            // so the pivot itself surfaces the exhausted ratio test.
            fallback
        }
    }

    /// Whether another pivot can improve or repair the current basis.
    pub fn can_improve(&self) -> bool {
        self.entering_column().is_some()
    }

    /// Row leaving the basis for the given entering column.
    ///
    /// Rows whose coefficient at the entering column is zero, or whose
    /// coefficient sign disagrees with the sign of their right-hand side,
    /// cannot produce a valid ratio and are skipped. Among the rest the
    /// minimum of `rhs / coefficient` wins; ties go to the last such row
    /// in iteration order. Taking the first tied row instead makes
    /// degenerate tableaus cycle.
    pub(crate) fn pivot_row(&self, column: usize) -> Option<usize> {
        let feasible = self.is_feasible();
        let mut best: Option<(usize, N)> = None;
        for row in 0..self.num_constraints() {
            if !feasible && !self.is_surplus_row(row) {
                continue;
            }
            let coefficient = &self.matrix[row][column];
            if coefficient.is_zero() {
                continue;
            }
            if (self.rhs[row] < N::zero()) != (*coefficient < N::zero()) {
                continue;
            }
            let ratio = self.rhs[row].clone() / coefficient.clone();
            match &best {
                Some((_, minimum)) if ratio > *minimum => {}
                _ => best = Some((row, ratio)),
            }
        }
        best.map(|(row, _)| row)
    }

    /// Performs one pivot, exchanging a basic and a non-basic variable.
    ///
    /// Returns `Ok(false)` if the tableau is already terminal, and
    /// [`SolveError::Unbounded`] if an entering column exists but no row
    /// bounds it.
    pub fn pivot(&mut self) -> Result<bool, SolveError> {
        let column = match self.entering_column() {
            Some(column) => column,
            None => return Ok(false),
        };
        let row = self.pivot_row(column).ok_or(SolveError::Unbounded)?;
        let was_feasible = self.is_feasible();
        trace!(
            "pivot: column {} enters, row {} leaves the basis to variable {}",
            column,
            row,
            self.basis[row]
        );

        // Scale the pivot row so the pivot element becomes exactly 1.
        let pivot_ratio = N::one() / self.matrix[row][column].clone();
        for value in self.matrix[row].iter_mut() {
            *value *= pivot_ratio.clone();
        }
        self.rhs[row] *= pivot_ratio;

        // The pivot row doubles as the subtrahend for every other row;
        // work from a copy so no elimination reads a half-updated row.
        let pivot_row = self.matrix[row].clone();
        let pivot_rhs = self.rhs[row].clone();

        for (i, (matrix_row, rhs)) in izip!(&mut self.matrix, &mut self.rhs).enumerate() {
            if i == row {
                continue;
            }
            let multiple = matrix_row[column].clone();
            if multiple.is_zero() {
                continue;
            }
            for (value, pivot_value) in matrix_row.iter_mut().zip(&pivot_row) {
                *value -= multiple.clone() * pivot_value.clone();
            }
            *rhs -= multiple * pivot_rhs.clone();
        }

        // Zero the entering column's objective entry the same way.
        let factor = self.objective[column].clone();
        if !factor.is_zero() {
            for (value, pivot_value) in self.objective.iter_mut().zip(&pivot_row) {
                *value -= factor.clone() * pivot_value.clone();
            }
        }

        let n = self.num_decision_variables();
        let leaving = std::mem::replace(&mut self.basis[row], column);
        if leaving >= n {
            self.aux[leaving - n].row = None;
        }
        if column >= n {
            self.aux[column - n].row = Some(row);
        }

        if self.is_feasible() {
            self.restored.clear();
        } else if !was_feasible {
            // A column spent on repairing the basis is not a candidate
            // again until the repair completes.
            self.restored.insert(column);
        }
        Ok(true)
    }

    /// Decision-variable assignment of the current basis: basic decision
    /// variables take their row's right-hand side, all others are zero.
    pub fn solution(&self) -> Vec<N> {
        let n = self.num_decision_variables();
        let mut values = vec![N::zero(); n];
        for (row, &var) in self.basis.iter().enumerate() {
            if var < n {
                values[var] = self.rhs[row].clone();
            }
        }
        values
    }

    /// Objective achieved by the current assignment, recomputed from the
    /// original costs rather than read off the tableau.
    pub fn objective_value(&self) -> N {
        self.costs
            .iter()
            .zip(self.solution())
            .fold(N::zero(), |total, (cost, value)| total + cost.clone() * value)
    }
}
