pub mod first_violated;
pub mod max_violated;
pub mod random_violated;

pub use self::first_violated::{first_violated, FirstViolated};
pub use self::max_violated::{max_violated, MaxViolated};
pub use self::random_violated::{random_violated, random_violated_with};

/// A separation oracle: asked about the current LP solution, it either
/// commits one violated constraint row to the LP and answers `true`, or
/// certifies that no row in its family is violated and answers `false`.
///
/// An invocation commits at most one row; re-solving between additions is
/// the caller's job. Candidates enumerated in one invocation must not be
/// retained into the next.
pub trait SeparationOracle {
    fn try_add_violated(&mut self) -> bool;
}

/// Any nullary closure returning `bool` works as an oracle.
impl<F: FnMut() -> bool> SeparationOracle for F {
    fn try_add_violated(&mut self) -> bool {
        self()
    }
}
