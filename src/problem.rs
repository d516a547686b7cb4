use crate::consts::EPS;
use crate::datatype::CsVec;

#[derive(Clone, Copy, Debug)]
pub enum OptimizationDirection {
    /// Minimize the objective function.
    Minimize,
    /// Maximize the objective function.
    Maximize,
}

/// A reference to a variable in a linear programming problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(pub(crate) usize);

impl Variable {
    /// Sequence number of the variable in the addition order.
    pub fn idx(&self) -> usize {
        self.0
    }
}

/// A sum of variables multiplied by constant coefficients, the left-hand
/// side of a constraint row.
#[derive(Clone, Debug)]
pub struct LinearExpr {
    vars: Vec<usize>,
    coeffs: Vec<f64>,
}

impl LinearExpr {
    /// Creates an empty linear expression.
    pub fn empty() -> Self {
        Self {
            vars: vec![],
            coeffs: vec![],
        }
    }

    /// Appends a single term.
    ///
    /// Terms can come in any variable order, but mentioning the same
    /// variable twice is forbidden (the [`Problem::make_row`] method will
    /// panic).
    pub fn add(&mut self, var: Variable, coeff: f64) {
        self.vars.push(var.0);
        self.coeffs.push(coeff);
    }
}

/// A single `variable * constant` term in a linear expression.
/// This is an auxiliary struct for specifying conversions.
#[doc(hidden)]
#[derive(Clone, Copy, Debug)]
pub struct LinearTerm(Variable, f64);

impl From<(Variable, f64)> for LinearTerm {
    fn from(term: (Variable, f64)) -> Self {
        LinearTerm(term.0, term.1)
    }
}

impl<'a> From<&'a (Variable, f64)> for LinearTerm {
    fn from(term: &'a (Variable, f64)) -> Self {
        LinearTerm(term.0, term.1)
    }
}

impl<I: IntoIterator<Item = impl Into<LinearTerm>>> From<I> for LinearExpr {
    fn from(iter: I) -> Self {
        let mut expr = LinearExpr::empty();
        for term in iter {
            let LinearTerm(var, coeff) = term.into();
            expr.add(var, coeff);
        }
        expr
    }
}

/// An operator relating the left-hand and right-hand sides of a constraint.
#[derive(Clone, Copy, Debug)]
pub enum ComparisonOp {
    /// The == operator (equal to)
    Eq,
    /// The <= operator (less than or equal to)
    Le,
    /// The >= operator (greater than or equal to)
    Ge,
}

/// A single constraint row: a sparse left-hand side, a comparison operator
/// and a right-hand side.
///
/// Rows double as separation candidates: [`Constraint::violation`] is the
/// "how violated" measure the oracles in
/// [`solvers::row_generation`](crate::solvers::row_generation) expect.
#[derive(Clone, Debug)]
pub struct Constraint {
    pub coeffs: CsVec,
    pub op: ComparisonOp,
    pub rhs: f64,
}

impl Constraint {
    /// Measures by how much the row is violated at `point`.
    ///
    /// Returns `None` when the row holds at `point` (within
    /// [`EPS`](crate::consts::EPS)), otherwise the amount by which the
    /// left-hand side misses the right-hand side.
    pub fn violation(&self, point: &[f64]) -> Option<f64> {
        let lhs: f64 = self
            .coeffs
            .iter()
            .map(|(var, &coeff)| coeff * point[var])
            .sum();
        let amount = match self.op {
            ComparisonOp::Le => lhs - self.rhs,
            ComparisonOp::Ge => self.rhs - lhs,
            ComparisonOp::Eq => (lhs - self.rhs).abs(),
        };
        if amount > EPS {
            Some(amount)
        } else {
            None
        }
    }
}

/// A linear programming problem: variables with bounds, an objective, and
/// the constraint rows committed so far.
///
/// Row generation grows `constraints` one row at a time; candidate rows are
/// built with [`Problem::make_row`] and committed with [`Problem::add_row`].
#[derive(Clone)]
pub struct Problem {
    pub direction: OptimizationDirection,
    pub obj_coeffs: Vec<f64>,
    pub var_mins: Vec<f64>,
    pub var_maxs: Vec<f64>,
    pub constraints: Vec<Constraint>,
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Row data can be huge, print dimensions only.
        f.debug_struct("Problem")
            .field("direction", &self.direction)
            .field("num_vars", &self.num_vars())
            .field("num_rows", &self.constraints.len())
            .finish()
    }
}

impl Problem {
    /// Creates a problem with no variables and no rows.
    pub fn new(direction: OptimizationDirection) -> Self {
        Problem {
            direction,
            obj_coeffs: vec![],
            var_mins: vec![],
            var_maxs: vec![],
            constraints: vec![],
        }
    }

    /// Adds a variable with the given objective coefficient and `(min, max)`
    /// bounds; use the infinities for absent bounds.
    pub fn add_var(&mut self, obj_coeff: f64, (min, max): (f64, f64)) -> Variable {
        let var = Variable(self.obj_coeffs.len());
        let obj_coeff = match self.direction {
            OptimizationDirection::Minimize => obj_coeff,
            OptimizationDirection::Maximize => -obj_coeff,
        };
        self.obj_coeffs.push(obj_coeff);
        self.var_mins.push(min);
        self.var_maxs.push(max);
        var
    }

    pub fn num_vars(&self) -> usize {
        self.obj_coeffs.len()
    }

    pub fn num_rows(&self) -> usize {
        self.constraints.len()
    }

    /// Builds a constraint row sized to this problem without committing it.
    ///
    /// This is how candidate rows for a separation oracle are prepared:
    /// build the family up front (or lazily), measure members with
    /// [`Constraint::violation`], and commit the chosen one with
    /// [`Problem::add_row`].
    ///
    /// # Panics
    ///
    /// Will panic if a variable appears more than once in the left-hand
    /// side expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutplane::problem::*;
    ///
    /// let mut problem = Problem::new(OptimizationDirection::Minimize);
    /// let x = problem.add_var(1.0, (0.0, f64::INFINITY));
    /// let y = problem.add_var(1.0, (0.0, f64::INFINITY));
    ///
    /// // An x + y >= 2 row, with the left-hand side given as a slice of
    /// // pairs, as any iterator of pairs, or as an explicit LinearExpr.
    /// let row = problem.make_row(&[(x, 1.0), (y, 1.0)], ComparisonOp::Ge, 2.0);
    /// assert_eq!(row.violation(&[0.5, 0.5]), Some(1.0));
    /// ```
    pub fn make_row(&self, expr: impl Into<LinearExpr>, op: ComparisonOp, rhs: f64) -> Constraint {
        let expr = expr.into();
        let mut terms: Vec<(usize, f64)> = expr.vars.into_iter().zip(expr.coeffs).collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        for pair in terms.windows(2) {
            assert_ne!(pair[0].0, pair[1].0, "variable used twice in a constraint");
        }
        let (vars, coeffs) = terms.into_iter().unzip();
        Constraint {
            coeffs: CsVec::new(self.num_vars(), vars, coeffs),
            op,
            rhs,
        }
    }

    /// Builds a constraint row and commits it in one step.
    pub fn add_constraint(&mut self, expr: impl Into<LinearExpr>, op: ComparisonOp, rhs: f64) {
        let row = self.make_row(expr, op, rhs);
        self.add_row(row);
    }

    /// Commits an already-built row, typically one chosen by a separation
    /// oracle.
    pub fn add_row(&mut self, row: Constraint) {
        self.constraints.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_basic() {
        let mut problem = Problem::new(OptimizationDirection::Maximize);
        let x = problem.add_var(1.0, (0.0, f64::INFINITY));
        let y = problem.add_var(2.0, (f64::NEG_INFINITY, f64::INFINITY));
        problem.add_constraint(&[(x, 1.0), (y, 1.0)], ComparisonOp::Le, 20.0);
        problem.add_constraint(&[(x, 1.0), (y, -4.0)], ComparisonOp::Ge, -20.0);

        assert_eq!(problem.num_rows(), 2);
        assert_eq!(problem.num_vars(), 2);
    }

    #[test]
    fn violation_is_measured_against_a_point() {
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let x = problem.add_var(1.0, (0.0, 10.0));
        let y = problem.add_var(1.0, (0.0, 10.0));

        let row = problem.make_row(&[(x, 1.0), (y, 2.0)], ComparisonOp::Le, 10.0);
        assert_eq!(row.violation(&[2.0, 3.0]), None);
        assert_eq!(row.violation(&[4.0, 4.0]), Some(2.0));

        let row = problem.make_row(&[(y, 1.0)], ComparisonOp::Ge, 5.0);
        assert_eq!(row.violation(&[0.0, 6.0]), None);
        assert_eq!(row.violation(&[0.0, 1.0]), Some(4.0));

        let row = problem.make_row(&[(x, 1.0)], ComparisonOp::Eq, 3.0);
        assert_eq!(row.violation(&[3.0, 0.0]), None);
        assert_eq!(row.violation(&[5.0, 0.0]), Some(2.0));
    }

    #[test]
    fn terms_may_come_in_any_variable_order() {
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let x = problem.add_var(1.0, (0.0, 1.0));
        let y = problem.add_var(1.0, (0.0, 1.0));

        let row = problem.make_row(&[(y, 2.0), (x, 1.0)], ComparisonOp::Le, 0.0);
        assert_eq!(row.violation(&[1.0, 1.0]), Some(3.0));
    }
}
