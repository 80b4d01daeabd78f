//! Write every cached locale file back to storage.

use std::path::PathBuf;

use rayon::prelude::*;

use super::{
    merge::TranslationCache,
    store::{StoreError, TranslationStore},
};

/// A locale file that could not be written.
#[derive(Debug)]
pub struct FlushFailure {
    pub path: PathBuf,
    pub error: StoreError,
}

#[derive(Debug, Default)]
pub struct FlushReport {
    pub written: usize,
    pub failures: Vec<FlushFailure>,
}

/// Write all cached files, each one independently.
///
/// Entries are disjoint, so writes run in parallel. A failed write is
/// recorded and does not stop the others.
pub fn flush<S>(cache: &TranslationCache, store: &S) -> FlushReport
where
    S: TranslationStore + ?Sized,
{
    let entries: Vec<_> = cache.iter().collect();

    let failures: Vec<FlushFailure> = entries
        .par_iter()
        .filter_map(|(path, data)| {
            store
                .write(path, data)
                .err()
                .map(|error| FlushFailure {
                    path: path.to_path_buf(),
                    error,
                })
        })
        .collect();

    FlushReport {
        written: entries.len() - failures.len(),
        failures,
    }
}
