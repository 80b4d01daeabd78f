//! Translation merge: make sure every extracted member has a description.
//!
//! Runs strictly sequentially. Several components can target the same locale
//! file (consumers of a shared base component's props), and each file is
//! loaded once and then mutated in place, so the cache is owned by a single
//! `&mut` borrow for the whole merge.

use std::{
    collections::{BTreeMap, BTreeSet, btree_map::Entry},
    path::{Path, PathBuf},
};

use super::{
    data::{ComponentMetadata, MemberKind, TranslationData, placeholder},
    store::TranslationStore,
};

/// Locale files touched during a run, keyed by path.
///
/// Each path is read from storage at most once and never evicted; the flush
/// stage writes back every entry.
#[derive(Debug, Default)]
pub struct TranslationCache {
    files: BTreeMap<PathBuf, TranslationData>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached contents of `path`, reading it on first access.
    ///
    /// A file that cannot be read or parsed counts as having no translations
    /// yet. Placeholders from a previous run are pruned before the file is
    /// cached, so members that no longer exist do not keep stale keys.
    pub fn get_or_load<S>(&mut self, store: &S, path: &Path) -> &mut TranslationData
    where
        S: TranslationStore + ?Sized,
    {
        match self.files.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let data = match store.read(path) {
                    Ok(mut data) => {
                        data.prune_placeholders();
                        data
                    }
                    Err(_) => TranslationData::default(),
                };
                entry.insert(data)
            }
        }
    }

    pub fn get(&self, path: &Path) -> Option<&TranslationData> {
        self.files.get(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &TranslationData)> {
        self.files.iter()
    }
}

/// Where locale files live and how placeholders link back to them.
#[derive(Debug, Clone)]
pub struct MergeOptions<'a> {
    pub locale_root: &'a Path,
    pub locales: &'a [String],
    pub edit_url_base: &'a str,
}

impl MergeOptions<'_> {
    pub fn locale_file(&self, locale: &str, filename: &str) -> PathBuf {
        self.locale_root
            .join(locale)
            .join(format!("{}.json", filename))
    }
}

/// Diagnostics gathered while merging. Never used for control flow.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Components with at least one prop that does not declare a `source`.
    pub components_without_prop_source: BTreeSet<String>,
    pub placeholders_inserted: usize,
}

/// Merge the extracted metadata into the locale files held by `cache`.
///
/// Every member of every component ends up with an entry in its target file
/// for each locale: the existing description when there is one, otherwise a
/// placeholder. Nothing already present is overwritten.
pub fn merge_translations<S>(
    components: &[ComponentMetadata],
    cache: &mut TranslationCache,
    store: &S,
    options: &MergeOptions<'_>,
) -> MergeReport
where
    S: TranslationStore + ?Sized,
{
    let mut report = MergeReport::default();

    for component in components {
        for kind in MemberKind::ALL {
            for (name, info) in component.members(kind) {
                let has_source = info.source.as_deref().is_some_and(|s| !s.is_empty());
                if kind == MemberKind::Props && !has_source {
                    report
                        .components_without_prop_source
                        .insert(component.component_name.clone());
                }

                let filename = component.target_file(kind, info);

                for locale in options.locales {
                    let path = options.locale_file(locale, &filename);
                    let data = cache.get_or_load(store, &path);
                    if data.insert_if_absent(kind, name, || {
                        placeholder(options.edit_url_base, locale, &filename)
                    }) {
                        report.placeholders_inserted += 1;
                    }
                }
            }
        }
    }

    report
}
