//! Generation engine.
//!
//! Enumerate → extract (parallel, order-preserving) → merge (sequential) →
//! flush (parallel, per-file fault tolerant). See [`pipeline`] for the run
//! itself.
//!
//! ## Module Structure
//!
//! - `data`: component metadata and locale file types
//! - `source`: where component definitions come from (ComponentSource, ManifestSource)
//! - `pool`: worker pool sizing and the order-preserving Dispatcher
//! - `extract`: per-component extraction worker
//! - `store`: locale file storage (TranslationStore, FsStore)
//! - `merge`: TranslationCache and the missing-description merge
//! - `flush`: writing cached locale files back
//! - `pipeline`: the end-to-end run

pub mod data;
pub mod extract;
pub mod flush;
pub mod merge;
pub mod pipeline;
pub mod pool;
pub mod source;
pub mod store;

pub use data::{ComponentDefinition, ComponentMetadata, MemberInfo, MemberKind, TranslationData};
pub use flush::{FlushFailure, FlushReport};
pub use merge::{MergeOptions, MergeReport, TranslationCache, merge_translations};
pub use pipeline::{GenerateOptions, GenerateSummary, generate};
pub use pool::{Dispatcher, PoolProbe, pool_size};
pub use source::{ComponentSource, ManifestSource};
pub use store::{FsStore, StoreError, TranslationStore};
