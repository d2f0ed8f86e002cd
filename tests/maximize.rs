use ratlp::{
    BigInt, BigRational, ComparisonOp, FormulationError, Problem, Rational64, SolveError,
};

fn r(n: i64) -> Rational64 {
    Rational64::from_integer(n)
}

/// Every decision value must be non-negative and every stated constraint
/// must hold at the returned solution.
fn check_feasible(problem: &Problem<Rational64>, solution: &[Rational64]) {
    for value in solution {
        assert!(*value >= r(0), "negative decision value {}", value);
    }
    for constraint in problem.constraints() {
        let lhs = constraint
            .coefficients
            .iter()
            .zip(solution)
            .fold(r(0), |total, (coefficient, value)| total + *coefficient * *value);
        let holds = match constraint.op {
            ComparisonOp::Le => lhs <= constraint.rhs,
            ComparisonOp::Ge => lhs >= constraint.rhs,
        };
        assert!(holds, "violated constraint: {} {} {}", lhs, constraint.op, constraint.rhs);
    }
}

fn solve_expecting(problem: Problem<Rational64>, expected: Vec<Rational64>) {
    let stated = problem.clone();
    let mut solver = problem.build().unwrap();
    let solution = solver.solve().unwrap();
    assert_eq!(solution, expected);
    check_feasible(&stated, &solution);
}

#[test]
fn maximize_2x2() {
    let mut problem = Problem::maximize(vec![r(1), r(1)]);
    problem.add_constraint(vec![r(2), r(1)], ComparisonOp::Le, r(4));
    problem.add_constraint(vec![r(1), r(2)], ComparisonOp::Le, r(3));
    solve_expecting(problem, vec![Rational64::new(5, 3), Rational64::new(2, 3)]);
}

#[test]
fn maximize_2x2_objective_value() {
    let mut problem = Problem::maximize(vec![r(1), r(1)]);
    problem.add_constraint(vec![r(2), r(1)], ComparisonOp::Le, r(4));
    problem.add_constraint(vec![r(1), r(2)], ComparisonOp::Le, r(3));
    let mut solver = problem.build().unwrap();
    solver.solve().unwrap();
    assert_eq!(solver.objective_value(), Rational64::new(7, 3));
}

#[test]
fn maximize_2x2_b() {
    let mut problem = Problem::maximize(vec![r(3), r(4)]);
    problem.add_constraint(vec![r(1), r(1)], ComparisonOp::Le, r(4));
    problem.add_constraint(vec![r(2), r(1)], ComparisonOp::Le, r(5));
    solve_expecting(problem, vec![r(0), r(4)]);
}

#[test]
fn maximize_2x2_c() {
    let mut problem = Problem::maximize(vec![r(2), r(-1)]);
    problem.add_constraint(vec![r(1), r(2)], ComparisonOp::Le, r(6));
    problem.add_constraint(vec![r(3), r(2)], ComparisonOp::Le, r(12));
    solve_expecting(problem, vec![r(4), r(0)]);
}

#[test]
fn maximize_3x3() {
    let mut problem = Problem::maximize(vec![r(60), r(90), r(300)]);
    problem.add_constraint(vec![r(1), r(1), r(1)], ComparisonOp::Le, r(600));
    problem.add_constraint(vec![r(1), r(3), r(0)], ComparisonOp::Le, r(600));
    problem.add_constraint(vec![r(2), r(0), r(1)], ComparisonOp::Le, r(600));
    solve_expecting(problem, vec![r(0), r(0), r(600)]);
}

#[test]
fn maximize_3x3_b() {
    let mut problem = Problem::maximize(vec![r(70), r(210), r(140)]);
    problem.add_constraint(vec![r(1), r(1), r(1)], ComparisonOp::Le, r(100));
    problem.add_constraint(vec![r(5), r(4), r(4)], ComparisonOp::Le, r(480));
    problem.add_constraint(vec![r(40), r(20), r(30)], ComparisonOp::Le, r(3200));
    solve_expecting(problem, vec![r(0), r(100), r(0)]);
}

#[test]
fn maximize_3x3_c() {
    let mut problem = Problem::maximize(vec![r(2), r(-1), r(2)]);
    problem.add_constraint(vec![r(2), r(1), r(0)], ComparisonOp::Le, r(10));
    problem.add_constraint(vec![r(1), r(2), r(-2)], ComparisonOp::Le, r(20));
    problem.add_constraint(vec![r(0), r(1), r(2)], ComparisonOp::Le, r(5));
    solve_expecting(problem, vec![r(5), r(0), Rational64::new(5, 2)]);
}

#[test]
fn maximize_3x3_fractional_coefficients() {
    let mut problem = Problem::maximize(vec![r(11), r(16), r(15)]);
    problem.add_constraint(
        vec![r(1), r(2), Rational64::new(3, 2)],
        ComparisonOp::Le,
        r(12_000),
    );
    problem.add_constraint(
        vec![Rational64::new(2, 3), Rational64::new(2, 3), r(1)],
        ComparisonOp::Le,
        r(4_600),
    );
    problem.add_constraint(
        vec![
            Rational64::new(1, 2),
            Rational64::new(1, 3),
            Rational64::new(1, 2),
        ],
        ComparisonOp::Le,
        r(2_400),
    );
    solve_expecting(problem, vec![r(600), r(5_100), r(800)]);
}

#[test]
fn maximize_3x3_e() {
    let mut problem = Problem::maximize(vec![r(5), r(4), r(3)]);
    problem.add_constraint(vec![r(2), r(3), r(1)], ComparisonOp::Le, r(5));
    problem.add_constraint(vec![r(4), r(1), r(2)], ComparisonOp::Le, r(11));
    problem.add_constraint(vec![r(3), r(4), r(2)], ComparisonOp::Le, r(8));
    solve_expecting(problem, vec![r(2), r(0), r(1)]);
}

#[test]
fn maximize_3x3_f() {
    let mut problem = Problem::maximize(vec![r(3), r(2), r(-4)]);
    problem.add_constraint(vec![r(1), r(4), r(0)], ComparisonOp::Le, r(5));
    problem.add_constraint(vec![r(2), r(4), r(-2)], ComparisonOp::Le, r(6));
    problem.add_constraint(vec![r(1), r(1), r(-2)], ComparisonOp::Le, r(2));
    solve_expecting(problem, vec![r(4), r(0), r(1)]);
}

#[test]
fn maximize_3x3_g() {
    let mut problem = Problem::maximize(vec![r(2), r(-1), r(8)]);
    problem.add_constraint(vec![r(2), r(-4), r(6)], ComparisonOp::Le, r(3));
    problem.add_constraint(vec![r(-1), r(3), r(4)], ComparisonOp::Le, r(2));
    problem.add_constraint(vec![r(0), r(0), r(2)], ComparisonOp::Le, r(1));
    solve_expecting(
        problem,
        vec![Rational64::new(17, 2), Rational64::new(7, 2), r(0)],
    );
}

#[test]
fn maximize_3x4() {
    let mut problem = Problem::maximize(vec![r(100_000), r(40_000), r(18_000)]);
    problem.add_constraint(vec![r(20), r(6), r(3)], ComparisonOp::Le, r(182));
    problem.add_constraint(vec![r(0), r(1), r(0)], ComparisonOp::Le, r(10));
    problem.add_constraint(vec![r(-1), r(-1), r(1)], ComparisonOp::Le, r(0));
    problem.add_constraint(vec![r(-9), r(1), r(1)], ComparisonOp::Le, r(0));
    solve_expecting(problem, vec![r(4), r(10), r(14)]);
}

#[test]
fn maximize_4x4() {
    let mut problem = Problem::maximize(vec![r(1), r(2), r(1), r(2)]);
    problem.add_constraint(vec![r(1), r(0), r(1), r(0)], ComparisonOp::Le, r(1));
    problem.add_constraint(vec![r(0), r(1), r(0), r(1)], ComparisonOp::Le, r(4));
    problem.add_constraint(vec![r(1), r(1), r(0), r(0)], ComparisonOp::Le, r(2));
    problem.add_constraint(vec![r(0), r(0), r(1), r(1)], ComparisonOp::Le, r(2));
    solve_expecting(problem, vec![r(0), r(2), r(0), r(2)]);
}

#[test]
fn cup_factory() {
    let mut problem = Problem::maximize(vec![r(25), r(20)]);
    problem.add_constraint(vec![r(20), r(12)], ComparisonOp::Le, r(1_800));
    problem.add_constraint(vec![r(1), r(1)], ComparisonOp::Le, r(8 * 15));
    solve_expecting(problem, vec![r(45), r(75)]);
}

#[test]
fn mixed_operators_restore_feasibility_first() {
    let mut problem = Problem::maximize(vec![r(1)]);
    problem.add_constraint(vec![r(1)], ComparisonOp::Le, r(5));
    problem.add_constraint(vec![r(1)], ComparisonOp::Ge, r(1));
    solve_expecting(problem, vec![r(5)]);
}

#[test]
fn surplus_bound_below_with_negative_cost() {
    let mut problem = Problem::maximize(vec![r(-1)]);
    problem.add_constraint(vec![r(1)], ComparisonOp::Ge, r(2));
    let mut solver = problem.build().unwrap();
    assert_eq!(solver.solve().unwrap(), vec![r(2)]);
    assert_eq!(solver.objective_value(), r(-2));
}

#[test]
fn unbounded_direction_is_detected() {
    let mut problem = Problem::maximize(vec![r(1), r(1), r(1)]);
    problem.add_constraint(vec![r(3), r(1), r(-2)], ComparisonOp::Le, r(5));
    problem.add_constraint(vec![r(4), r(3), r(0)], ComparisonOp::Le, r(7));
    let mut solver = problem.build().unwrap();
    assert_eq!(solver.solve().unwrap_err(), SolveError::Unbounded);
}

#[test]
fn degenerate_tableau_terminates() {
    // A classic cycling tableau; the last-row tie-break keeps the pivot
    // sequence moving, so this finishes in a handful of pivots instead of
    // hitting the ceiling.
    let mut problem = Problem::maximize(vec![r(10), r(-57), r(-9), r(-24)]);
    problem.add_constraint(
        vec![
            Rational64::new(1, 2),
            Rational64::new(-11, 2),
            Rational64::new(-5, 2),
            r(9),
        ],
        ComparisonOp::Le,
        r(0),
    );
    problem.add_constraint(
        vec![
            Rational64::new(1, 2),
            Rational64::new(-3, 2),
            Rational64::new(-1, 2),
            r(1),
        ],
        ComparisonOp::Le,
        r(0),
    );
    problem.add_constraint(vec![r(1), r(0), r(0), r(0)], ComparisonOp::Le, r(1));

    let stated = problem.clone();
    let mut solver = problem.build().unwrap();
    let solution = solver.solve().unwrap();
    assert_eq!(solution, vec![r(1), r(0), r(1), r(0)]);
    assert!(solver.pivots() < 50, "took {} pivots", solver.pivots());
    check_feasible(&stated, &solution);
}

#[test]
fn degenerate_unbounded_tableau_is_detected() {
    let mut problem = Problem::maximize(vec![r(2), r(3), r(-1), r(-12)]);
    problem.add_constraint(vec![r(-2), r(-9), r(1), r(9)], ComparisonOp::Le, r(0));
    problem.add_constraint(
        vec![Rational64::new(1, 3), r(1), Rational64::new(-1, 3), r(-2)],
        ComparisonOp::Le,
        r(0),
    );
    let mut solver = problem.build().unwrap();
    assert_eq!(solver.solve().unwrap_err(), SolveError::Unbounded);
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let mut problem = Problem::maximize(vec![r(10), r(-57), r(-9)]);
    problem.add_constraint(
        vec![
            Rational64::new(1, 2),
            Rational64::new(-11, 2),
            Rational64::new(-5, 2),
            r(9),
        ],
        ComparisonOp::Le,
        r(0),
    );
    assert!(matches!(
        problem.build(),
        Err(FormulationError::DimensionMismatch { .. })
    ));
}

#[test]
fn manual_iteration_matches_solve() {
    let build = || {
        let mut problem = Problem::maximize(vec![r(10), r(-57), r(-9), r(-24)]);
        problem.add_constraint(
            vec![
                Rational64::new(1, 2),
                Rational64::new(-11, 2),
                Rational64::new(-5, 2),
                r(9),
            ],
            ComparisonOp::Le,
            r(0),
        );
        problem.add_constraint(
            vec![
                Rational64::new(1, 2),
                Rational64::new(-3, 2),
                Rational64::new(-1, 2),
                r(1),
            ],
            ComparisonOp::Le,
            r(0),
        );
        problem.add_constraint(vec![r(1), r(0), r(0), r(0)], ComparisonOp::Le, r(1));
        problem.build().unwrap()
    };

    let mut stepped = build();
    while stepped.can_improve() {
        assert!(!stepped.view().to_string().is_empty());
        stepped.pivot().unwrap();
    }

    let mut solved = build();
    let solution = solved.solve().unwrap();
    assert_eq!(stepped.current_solution(), solution);
    assert_eq!(stepped.pivots(), solved.pivots());
}

#[test]
fn identical_inputs_run_identically() {
    let build = || {
        let mut problem = Problem::maximize(vec![r(60), r(90), r(300)]);
        problem.add_constraint(vec![r(1), r(1), r(1)], ComparisonOp::Le, r(600));
        problem.add_constraint(vec![r(1), r(3), r(0)], ComparisonOp::Le, r(600));
        problem.add_constraint(vec![r(2), r(0), r(1)], ComparisonOp::Le, r(600));
        problem.build().unwrap()
    };
    let mut first = build();
    let mut second = build();
    assert_eq!(first.solve().unwrap(), second.solve().unwrap());
    assert_eq!(first.pivots(), second.pivots());
    assert_eq!(first.view().to_string(), second.view().to_string());
}

#[test]
fn big_rational_coefficients() {
    let big = |n: i64| BigRational::from_integer(BigInt::from(n));
    let mut problem = Problem::maximize(vec![big(1), big(1)]);
    problem.add_constraint(vec![big(2), big(1)], ComparisonOp::Le, big(4));
    problem.add_constraint(vec![big(1), big(2)], ComparisonOp::Le, big(3));
    let mut solver = problem.build().unwrap();
    assert_eq!(
        solver.solve().unwrap(),
        vec![
            BigRational::new(BigInt::from(5), BigInt::from(3)),
            BigRational::new(BigInt::from(2), BigInt::from(3)),
        ]
    );
}
