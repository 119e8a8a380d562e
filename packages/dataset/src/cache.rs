//! Process-wide load-once dataset handle.
//!
//! The dataset is loaded exactly once per process and shared read-only for
//! the remainder of the process lifetime. Every query operates on its own
//! filtered view; nothing ever mutates the shared records.

use std::sync::{Arc, OnceLock};

use crate::Dataset;

static DATASET: OnceLock<Arc<Dataset>> = OnceLock::new();

/// Installs the dataset as the process-wide shared instance and returns a
/// handle to it.
///
/// Idempotent: if a dataset was already installed, that one is returned and
/// the argument is discarded.
pub fn init(dataset: Dataset) -> Arc<Dataset> {
    DATASET.get_or_init(|| Arc::new(dataset)).clone()
}

/// Returns the shared dataset, or `None` if [`init`] has not run yet.
#[must_use]
pub fn get() -> Option<Arc<Dataset>> {
    DATASET.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let first = init(Dataset::new(Vec::new()));
        let second = init(Dataset::new(Vec::new()));
        assert!(Arc::ptr_eq(&first, &second));
        assert!(get().is_some());
    }
}
