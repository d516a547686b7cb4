/// Tolerance under which a constraint row counts as satisfied.
pub const EPS: f64 = 1e-8;
