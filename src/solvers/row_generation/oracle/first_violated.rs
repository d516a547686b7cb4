use log::debug;

use super::SeparationOracle;
use crate::helpers::helpers;

/// Separation oracle that commits the first violated candidate in scan
/// order and stops looking.
///
/// The scan order is the candidate order after `reorder_candidates`; the
/// default keeps the enumeration order. Candidates past the committed one
/// are never measured, which makes this cheaper than [`MaxViolated`] when
/// violations are common, at the cost of not finding the deepest cut.
///
/// [`MaxViolated`]: super::MaxViolated
pub struct FirstViolated<G, H, A, R> {
    get_candidates: G,
    how_violated: H,
    add_violated: A,
    reorder_candidates: R,
}

impl<G, H, A, R> FirstViolated<G, H, A, R> {
    pub fn new(get_candidates: G, how_violated: H, add_violated: A, reorder_candidates: R) -> Self {
        FirstViolated {
            get_candidates,
            how_violated,
            add_violated,
            reorder_candidates,
        }
    }
}

impl<G, I, H, A, R, J, M> SeparationOracle for FirstViolated<G, H, A, R>
where
    G: FnMut() -> I,
    I: IntoIterator,
    R: FnMut(I) -> J,
    J: IntoIterator<Item = I::Item>,
    H: FnMut(&I::Item) -> Option<M>,
    A: FnMut(I::Item),
{
    fn try_add_violated(&mut self) -> bool {
        let cands = (self.reorder_candidates)((self.get_candidates)());
        for (pos, cand) in cands.into_iter().enumerate() {
            if (self.how_violated)(&cand).is_some() {
                debug!("committing first violated candidate, scan position {}", pos);
                (self.add_violated)(cand);
                return true;
            }
        }
        false
    }
}

/// Builds a [`FirstViolated`] oracle that scans candidates in enumeration
/// order.
pub fn first_violated<G, I, H, A>(
    get_candidates: G,
    how_violated: H,
    add_violated: A,
) -> FirstViolated<G, H, A, fn(I) -> I>
where
    G: FnMut() -> I,
    I: IntoIterator,
{
    FirstViolated::new(
        get_candidates,
        how_violated,
        add_violated,
        helpers::identity,
    )
}
