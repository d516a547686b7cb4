pub mod oracle;

use log::debug;
use stopwatch::Stopwatch;

use crate::solver::Status;

use self::oracle::SeparationOracle;

/// Finds an extreme-point solution to an LP by row generation: solve the
/// current rows, ask the separation oracle whether the solution violates a
/// constraint from its family, add the violated row and re-optimize, until
/// the solve comes back non-optimal or no violated row remains.
///
/// `solve_lp` re-optimizes the shared LP state and reports its status;
/// `try_add_violated` adds at most one violated row per call and reports
/// whether it did. The LP is solved at least once, and a non-optimal status
/// is returned as soon as it appears, never retried. A returned
/// [`Status::Optimal`] is an optimum of the full constraint family,
/// provided the oracle answers `false` only when no violated row exists.
///
/// ```
/// use cutplane::solver::Status;
/// use cutplane::solvers::row_generation::row_generation;
///
/// let mut pending_rows = vec![3, 5];
/// let status = row_generation(|| pending_rows.pop().is_some(), || Status::Optimal);
/// assert_eq!(status, Status::Optimal);
/// ```
pub fn row_generation<O, S>(mut try_add_violated: O, mut solve_lp: S) -> Status
where
    O: SeparationOracle,
    S: FnMut() -> Status,
{
    let sw = Stopwatch::start_new();
    let mut num_solves = 0;
    let mut num_rows = 0;
    let status = loop {
        let status = solve_lp();
        num_solves += 1;
        if !status.is_optimal() || !try_add_violated.try_add_violated() {
            break status;
        }
        num_rows += 1;
    };
    debug!(
        "row generation finished with {} after {} solves and {} added rows in {}ms",
        status,
        num_solves,
        num_rows,
        sw.elapsed_ms(),
    );
    status
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::row_generation;
    use crate::solver::Status;

    #[test]
    fn solves_at_least_once() {
        let solves = Cell::new(0);
        let status = row_generation(
            || false,
            || {
                solves.set(solves.get() + 1);
                Status::Optimal
            },
        );
        assert_eq!(status, Status::Optimal);
        assert_eq!(solves.get(), 1);
    }

    #[test]
    fn infeasible_first_solve_skips_separation() {
        let oracle_calls = Cell::new(0);
        let status = row_generation(
            || {
                oracle_calls.set(oracle_calls.get() + 1);
                true
            },
            || Status::Infeasible,
        );
        assert_eq!(status, Status::Infeasible);
        assert_eq!(oracle_calls.get(), 0);
    }

    #[test]
    fn resolves_until_no_violation_remains() {
        let solves = Cell::new(0);
        let remaining = Cell::new(3);
        let status = row_generation(
            || {
                if remaining.get() > 0 {
                    remaining.set(remaining.get() - 1);
                    true
                } else {
                    false
                }
            },
            || {
                solves.set(solves.get() + 1);
                Status::Optimal
            },
        );
        assert_eq!(status, Status::Optimal);
        assert_eq!(solves.get(), 4);
    }

    #[test]
    fn unbounded_resolve_propagates_mid_run() {
        let script = RefCell::new(vec![Status::Unbounded, Status::Optimal]);
        let added = Cell::new(0);
        let status = row_generation(
            || {
                added.set(added.get() + 1);
                true
            },
            || script.borrow_mut().pop().unwrap(),
        );
        assert_eq!(status, Status::Unbounded);
        assert_eq!(added.get(), 1);
        assert!(script.borrow().is_empty());
    }
}
