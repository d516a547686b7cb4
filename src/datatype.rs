/// Sparse row over `f64` coefficients, indexed by variable number.
pub type CsVec = sprs::CsVec<f64>;
