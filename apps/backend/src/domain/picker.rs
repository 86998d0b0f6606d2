//! Random index selection for round setup.
//!
//! The controller draws indices through [`IndexPicker`] so tests can force a
//! particular silhouette/target pair.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::catalog::MIN_CATALOG_SIZE;
use crate::errors::domain::DomainError;

/// Source of uniformly distributed indices in `0..len`.
pub trait IndexPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// `rand`-backed picker, optionally seeded for reproducible sessions.
pub struct RandomPicker {
    rng: Mutex<StdRng>,
}

impl RandomPicker {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl IndexPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        self.rng.lock().random_range(0..len)
    }
}

/// Draw a (silhouette, target) index pair with distinct members.
///
/// The silhouette is drawn once; the target is redrawn until it differs.
pub fn pick_distinct_pair(
    picker: &dyn IndexPicker,
    len: usize,
) -> Result<(usize, usize), DomainError> {
    if len < MIN_CATALOG_SIZE {
        return Err(DomainError::catalog_too_small(len));
    }

    let silhouette = picker.pick(len);
    let mut target = picker.pick(len);
    while target == silhouette {
        target = picker.pick(len);
    }
    Ok((silhouette, target))
}
