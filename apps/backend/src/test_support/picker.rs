use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::IndexPicker;

/// Picker that cycles through a fixed index script.
///
/// The script must contain at least two distinct indices or round setup
/// will spin forever redrawing the target.
pub struct FixedPicker {
    script: Vec<usize>,
    cursor: AtomicUsize,
}

impl FixedPicker {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl IndexPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        let n = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.script[n % self.script.len()] % len
    }
}
