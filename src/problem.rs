//! Problem statement and the rewrite into standard form.

use crate::tableau::{AuxKind, Tableau};
use crate::{ComparisonOp, FormulationError, Number, OptimizationDirection, Solver};
use serde::{Deserialize, Serialize};

/// A single linear constraint: a coefficient per decision variable, a
/// relational operator and a right-hand-side value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint<N> {
    /// One coefficient per decision variable.
    pub coefficients: Vec<N>,
    /// Relational operator.
    pub op: ComparisonOp,
    /// Right-hand-side value.
    pub rhs: N,
}

/// A stated linear program: an optimization direction, an objective and a
/// list of constraints, all over exact rationals.
///
/// [`build`](Problem::build) rewrites the statement into standard form and
/// hands the resulting tableau to a [`Solver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem<N> {
    direction: OptimizationDirection,
    objective: Vec<N>,
    constraints: Vec<Constraint<N>>,
}

impl<N: Number> Problem<N> {
    /// States a problem in the given direction with the given objective
    /// coefficients, one per decision variable.
    pub fn new(direction: OptimizationDirection, objective: Vec<N>) -> Self {
        Problem {
            direction,
            objective,
            constraints: Vec::new(),
        }
    }

    /// States a maximization of the given objective coefficients.
    pub fn maximize(objective: Vec<N>) -> Self {
        Self::new(OptimizationDirection::Maximize, objective)
    }

    /// States a minimization of the given objective coefficients.
    pub fn minimize(objective: Vec<N>) -> Self {
        Self::new(OptimizationDirection::Minimize, objective)
    }

    /// Appends a constraint row. Dimensions are validated by
    /// [`build`](Problem::build).
    pub fn add_constraint(&mut self, coefficients: Vec<N>, op: ComparisonOp, rhs: N) {
        self.constraints.push(Constraint {
            coefficients,
            op,
            rhs,
        });
    }

    /// Number of decision variables.
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    /// The stated constraints.
    pub fn constraints(&self) -> &[Constraint<N>] {
        &self.constraints
    }

    /// Rewrites the statement into standard form and returns a solver
    /// owning the initial tableau.
    ///
    /// One auxiliary column is appended per constraint: a slack column
    /// with coefficient +1 for `<=`, a surplus column with coefficient -1
    /// for `>=`. A minimization is negated here and its objective value
    /// negated again on the way out; the tableau itself always maximizes.
    pub fn build(self) -> Result<Solver<N>, FormulationError> {
        let direction = self.direction;
        let tableau = self.formulate()?;
        Ok(Solver::new(tableau, direction))
    }

    pub(crate) fn formulate(self) -> Result<Tableau<N>, FormulationError> {
        let n = self.objective.len();
        let m = self.constraints.len();

        for (index, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() != n {
                return Err(FormulationError::DimensionMismatch {
                    constraint: index,
                    expected: n,
                    found: constraint.coefficients.len(),
                });
            }
        }
        if self.direction == OptimizationDirection::Minimize {
            let mut ops = self.constraints.iter().map(|constraint| constraint.op);
            if let Some(first) = ops.next() {
                if ops.any(|op| op != first) {
                    return Err(FormulationError::MixedComparisons);
                }
            }
        }

        // Maximization costs of the decision variables.
        let costs: Vec<N> = match self.direction {
            OptimizationDirection::Maximize => self.objective,
            OptimizationDirection::Minimize => {
                self.objective.into_iter().map(|cost| -cost).collect()
            }
        };

        // The objective moves to one side of the equation, so its
        // coefficients flip sign; auxiliary columns cost nothing.
        let mut objective_row: Vec<N> = costs.iter().map(|cost| -cost.clone()).collect();
        objective_row.resize(n + m, N::zero());

        let mut matrix = Vec::with_capacity(m);
        let mut rhs = Vec::with_capacity(m);
        let mut kinds = Vec::with_capacity(m);
        for (i, constraint) in self.constraints.into_iter().enumerate() {
            let Constraint {
                mut coefficients,
                op,
                rhs: value,
            } = constraint;
            coefficients.resize(n + m, N::zero());
            let kind = match op {
                ComparisonOp::Le => AuxKind::Slack,
                ComparisonOp::Ge => AuxKind::Surplus,
            };
            coefficients[n + i] = match kind {
                AuxKind::Slack => N::one(),
                AuxKind::Surplus => -N::one(),
            };
            matrix.push(coefficients);
            rhs.push(value);
            kinds.push(kind);
        }

        Ok(Tableau::new(objective_row, matrix, rhs, costs, kinds))
    }
}

impl<N: Number> TryFrom<Problem<N>> for Solver<N> {
    type Error = FormulationError;

    fn try_from(problem: Problem<N>) -> Result<Self, FormulationError> {
        problem.build()
    }
}
