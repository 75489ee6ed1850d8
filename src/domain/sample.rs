//! Random demo values.

use std::collections::HashSet;

use rand::Rng;
use tracing::instrument;

use crate::domain::{DomainError, DomainResult};

/// Draws `count` distinct integers uniformly from `[min, max]`, in draw order.
#[instrument(level = "debug", skip(rng))]
pub fn unique_values<R: Rng>(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> DomainResult<Vec<i64>> {
    if min > max {
        return Err(DomainError::InvalidRange { min, max });
    }
    let available = u64::try_from(i128::from(max) - i128::from(min) + 1).unwrap_or(u64::MAX);
    if u64::try_from(count).unwrap_or(u64::MAX) > available {
        return Err(DomainError::NotEnoughValues {
            requested: count,
            available,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let candidate = rng.gen_range(min..=max);
        if seen.insert(candidate) {
            values.push(candidate);
        }
    }
    Ok(values)
}
