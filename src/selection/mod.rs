pub mod ranking;

use rand::Rng;

use crate::record::PraiseRecord;
use crate::types::errors::EngineError;
use crate::types::identifiers::PraiseId;

pub use ranking::top_k;

/// Pick the next praise to show, avoiding immediate repetition.
///
/// Uniform over the snapshot excluding `previous`; with no `previous` the
/// draw covers the full set. A single-record set always returns that record
/// (repetition is unavoidable and accepted). Random only through the
/// caller-supplied `rng`; no hidden state.
pub fn pick_next<R: Rng>(
    rng: &mut R,
    records: &[PraiseRecord],
    previous: Option<PraiseId>,
) -> Result<PraiseId, EngineError> {
    if records.is_empty() {
        return Err(EngineError::NoContentAvailable);
    }
    if records.len() == 1 {
        return Ok(records[0].id);
    }

    let Some(previous) = previous else {
        return Ok(records[rng.gen_range(0..records.len())].id);
    };

    // Rejection sampling: expected O(1) retries, terminates as long as the
    // snapshot holds two distinct ids.
    loop {
        let candidate = records[rng.gen_range(0..records.len())].id;
        if candidate != previous {
            return Ok(candidate);
        }
    }
}

/// Uniform draw with no exclusion, behind the one-random-praise read.
pub fn pick_any<R: Rng>(rng: &mut R, records: &[PraiseRecord]) -> Result<PraiseId, EngineError> {
    if records.is_empty() {
        return Err(EngineError::NoContentAvailable);
    }
    Ok(records[rng.gen_range(0..records.len())].id)
}

/// One uniformly-random record straight from the repository.
///
/// The convenience read behind the random-praise endpoint: an empty store is
/// `NoContentAvailable`, a transport failure `Unavailable`.
pub async fn fetch_random<S, G>(
    repository: &S,
    rng: &mut G,
) -> Result<PraiseRecord, EngineError>
where
    S: crate::store::repository::PraiseRepository + ?Sized,
    G: Rng,
{
    let records = repository.fetch_all().await?;
    let id = pick_any(rng, &records)?;
    records
        .into_iter()
        .find(|r| r.id == id)
        .ok_or(EngineError::NotFound(id))
}
