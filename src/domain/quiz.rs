//! Random quiz question selection.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Question;

/// Pick one candidate uniformly at random.
///
/// Returns `None` when the candidate pool is exhausted.
pub fn pick_question<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question> {
    candidates.choose(rng)
}
