use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use super::component::MemberKind;

/// Prefix shared by every generated placeholder description.
///
/// Detection is a plain prefix match, so a human-written description that
/// happens to start with these words is treated as a placeholder too.
pub const MISSING_DESCRIPTION: &str = "MISSING DESCRIPTION";

/// Member name -> description for members inserted during a run.
pub type Descriptions = BTreeMap<String, String>;

/// A member category in a locale file that does not hold string descriptions.
#[derive(Debug, Error)]
#[error("`{key}` must be an object of string descriptions")]
pub struct InvalidCategory {
    key: &'static str,
}

/// Contents of one locale file, e.g. `src/locale/en/v-btn.json`.
///
/// Keys read from the file keep their order at both levels, including any
/// unrelated top-level keys. Descriptions inserted during a run are held
/// apart and written after the existing members of their category, sorted by
/// name, so the output does not depend on the order members were merged in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct TranslationData {
    entries: Map<String, Value>,
    added: BTreeMap<MemberKind, Descriptions>,
}

impl TryFrom<Map<String, Value>> for TranslationData {
    type Error = InvalidCategory;

    fn try_from(entries: Map<String, Value>) -> Result<Self, Self::Error> {
        for kind in MemberKind::ALL {
            let valid = match entries.get(kind.as_str()) {
                None | Some(Value::Null) => true,
                Some(Value::Object(members)) => members.values().all(Value::is_string),
                Some(_) => false,
            };
            if !valid {
                return Err(InvalidCategory { key: kind.as_str() });
            }
        }

        Ok(Self {
            entries,
            added: BTreeMap::new(),
        })
    }
}

impl Serialize for TranslationData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

/// Two values are equal when they would be written identically.
impl PartialEq for TranslationData {
    fn eq(&self, other: &Self) -> bool {
        self.to_map() == other.to_map()
    }
}

impl TranslationData {
    fn existing(&self, kind: MemberKind) -> Option<&Map<String, Value>> {
        self.entries.get(kind.as_str()).and_then(Value::as_object)
    }

    /// Whether the file has the category, even as `null` or `{}`.
    pub fn has_category(&self, kind: MemberKind) -> bool {
        self.entries.contains_key(kind.as_str()) || self.added.contains_key(&kind)
    }

    /// Names of the members of `kind`, in the order they are written.
    pub fn member_names(&self, kind: MemberKind) -> Vec<&str> {
        let existing = self.existing(kind).into_iter().flat_map(Map::keys);
        let added = self.added.get(&kind).into_iter().flat_map(BTreeMap::keys);
        existing.chain(added).map(String::as_str).collect()
    }

    pub fn description(&self, kind: MemberKind, name: &str) -> Option<&str> {
        self.existing(kind)
            .and_then(|members| members.get(name))
            .and_then(Value::as_str)
            .or_else(|| {
                self.added
                    .get(&kind)
                    .and_then(|descriptions| descriptions.get(name))
                    .map(String::as_str)
            })
    }

    /// Top-level value as read from the file.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Drop every placeholder left over from a previous run.
    ///
    /// Categories that are absent stay absent; a category emptied by pruning
    /// stays present as `{}`.
    pub fn prune_placeholders(&mut self) -> usize {
        let mut removed = 0;
        for kind in MemberKind::ALL {
            if let Some(Value::Object(members)) = self.entries.get_mut(kind.as_str()) {
                let before = members.len();
                members.retain(|_, text| !text.as_str().is_some_and(is_placeholder));
                removed += before - members.len();
            }
        }
        removed
    }

    /// Insert a description for `name` unless one is already present.
    ///
    /// Returns true when `description` was called and inserted.
    pub fn insert_if_absent(
        &mut self,
        kind: MemberKind,
        name: &str,
        description: impl FnOnce() -> String,
    ) -> bool {
        if self.description(kind, name).is_some() {
            return false;
        }
        self.added
            .entry(kind)
            .or_default()
            .insert(name.to_string(), description());
        true
    }

    /// File contents to write: existing keys in file order, then the
    /// inserted members. A `null` category becomes an object once something
    /// is inserted into it; new categories follow the existing keys.
    fn to_map(&self) -> Map<String, Value> {
        let mut map = self.entries.clone();
        for (kind, descriptions) in &self.added {
            let category = map
                .entry(kind.as_str())
                .or_insert_with(|| Value::Object(Map::new()));
            if !category.is_object() {
                *category = Value::Object(Map::new());
            }
            if let Value::Object(members) = category {
                members.extend(
                    descriptions
                        .iter()
                        .map(|(name, text)| (name.clone(), Value::String(text.clone()))),
                );
            }
        }
        map
    }
}

pub fn is_placeholder(text: &str) -> bool {
    text.starts_with(MISSING_DESCRIPTION)
}

/// Placeholder text linking to the locale file that should hold the
/// description.
pub fn placeholder(edit_url_base: &str, locale: &str, filename: &str) -> String {
    format!(
        "{} ([edit in github]({}/{}/{}.json))",
        MISSING_DESCRIPTION,
        edit_url_base.trim_end_matches('/'),
        locale,
        filename
    )
}
