use log::debug;

use super::SeparationOracle;
use crate::helpers::helpers;

/// Separation oracle that scans every candidate and commits the one with
/// the greatest violation measure under the configured comparator.
///
/// Candidates measuring `None` are skipped. Ties keep the candidate
/// encountered first: a later candidate replaces the tracked best only when
/// `compare_how(best, candidate)` holds strictly.
pub struct MaxViolated<G, H, A, C> {
    get_candidates: G,
    how_violated: H,
    add_violated: A,
    compare_how: C,
}

impl<G, H, A, C> MaxViolated<G, H, A, C> {
    pub fn new(get_candidates: G, how_violated: H, add_violated: A, compare_how: C) -> Self {
        MaxViolated {
            get_candidates,
            how_violated,
            add_violated,
            compare_how,
        }
    }
}

impl<G, I, H, A, C, M> SeparationOracle for MaxViolated<G, H, A, C>
where
    G: FnMut() -> I,
    I: IntoIterator,
    H: FnMut(&I::Item) -> Option<M>,
    A: FnMut(I::Item),
    C: FnMut(&M, &M) -> bool,
{
    fn try_add_violated(&mut self) -> bool {
        let mut most: Option<(M, I::Item, usize)> = None;
        for (pos, cand) in (self.get_candidates)().into_iter().enumerate() {
            let how = match (self.how_violated)(&cand) {
                Some(how) => how,
                None => continue,
            };
            let replaces = match &most {
                None => true,
                Some((best, _, _)) => (self.compare_how)(best, &how),
            };
            if replaces {
                most = Some((how, cand, pos));
            }
        }
        match most {
            Some((_, cand, pos)) => {
                debug!("committing most violated candidate, scan position {}", pos);
                (self.add_violated)(cand);
                true
            }
            None => false,
        }
    }
}

/// Builds a [`MaxViolated`] oracle with the default strict "less than"
/// comparator over measures.
pub fn max_violated<G, I, H, A, M>(
    get_candidates: G,
    how_violated: H,
    add_violated: A,
) -> MaxViolated<G, H, A, fn(&M, &M) -> bool>
where
    G: FnMut() -> I,
    I: IntoIterator,
    H: FnMut(&I::Item) -> Option<M>,
    A: FnMut(I::Item),
    M: PartialOrd,
{
    MaxViolated::new(get_candidates, how_violated, add_violated, helpers::less)
}
