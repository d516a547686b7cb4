use log::debug;
use rand::Rng;

use super::first_violated::FirstViolated;
use crate::helpers::helpers;

/// Builds a [`FirstViolated`] oracle whose scan starts at a uniformly
/// random position: each invocation draws an offset from `rng` and
/// left-rotates the candidate sequence by it before scanning.
///
/// The engine is owned by the oracle and its stream advances on every
/// invocation, so successive calls are successive draws, not replays. The
/// offset is uniform over `[0, len]` inclusive; with no candidates the
/// rotation degenerates to a no-op and the oracle reports `false`.
pub fn random_violated_with<G, I, H, A, R>(
    get_candidates: G,
    how_violated: H,
    add_violated: A,
    mut rng: R,
) -> FirstViolated<G, H, A, impl FnMut(I) -> Vec<I::Item>>
where
    G: FnMut() -> I,
    I: IntoIterator,
    R: Rng,
{
    FirstViolated::new(
        get_candidates,
        how_violated,
        add_violated,
        move |cands: I| {
            let mut cands: Vec<_> = cands.into_iter().collect();
            let offset = rng.random_range(0..=cands.len());
            debug!("rotating {} candidates by {}", cands.len(), offset);
            helpers::rotate(&mut cands, offset);
            cands
        },
    )
}

/// [`random_violated_with`] using the default random engine.
pub fn random_violated<G, I, H, A>(
    get_candidates: G,
    how_violated: H,
    add_violated: A,
) -> FirstViolated<G, H, A, impl FnMut(I) -> Vec<I::Item>>
where
    G: FnMut() -> I,
    I: IntoIterator,
{
    random_violated_with(get_candidates, how_violated, add_violated, rand::rng())
}
