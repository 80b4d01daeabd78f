use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::kebab_case;

/// The four member categories a component exposes.
///
/// Iterated uniformly via [`MemberKind::ALL`]; the serialized names double as
/// the top-level keys of locale files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Props,
    Events,
    Slots,
    Exposed,
}

impl MemberKind {
    pub const ALL: [MemberKind; 4] = [
        MemberKind::Props,
        MemberKind::Events,
        MemberKind::Slots,
        MemberKind::Exposed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Props => "props",
            MemberKind::Events => "events",
            MemberKind::Slots => "slots",
            MemberKind::Exposed => "exposed",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live definitions of one component as supplied by the component source.
///
/// Member definitions are arbitrary JSON; only `source` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ComponentDefinition {
    #[serde(default)]
    pub props: Map<String, Value>,
    #[serde(default)]
    pub events: Map<String, Value>,
    #[serde(default)]
    pub slots: Map<String, Value>,
    #[serde(default)]
    pub exposed: Map<String, Value>,
}

impl ComponentDefinition {
    pub fn members(&self, kind: MemberKind) -> &Map<String, Value> {
        match kind {
            MemberKind::Props => &self.props,
            MemberKind::Events => &self.events,
            MemberKind::Slots => &self.slots,
            MemberKind::Exposed => &self.exposed,
        }
    }
}

/// Extracted information about a single member.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MemberInfo {
    /// Component (or mixin) the member was inherited from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Remaining descriptive fields, carried as is.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl MemberInfo {
    /// Build from a raw member definition.
    ///
    /// Objects keep their fields (a non-string `source` is dropped). Any other
    /// value is shorthand for the member's type, e.g. `"color": ["String"]`.
    pub fn from_definition(definition: &Value) -> Self {
        match definition {
            Value::Object(fields) => {
                let mut details = fields.clone();
                let source = match details.remove("source") {
                    Some(Value::String(source)) => Some(source),
                    _ => None,
                };
                Self { source, details }
            }
            Value::Null => Self::default(),
            other => {
                let mut details = Map::new();
                details.insert("type".to_string(), other.clone());
                Self {
                    source: None,
                    details,
                }
            }
        }
    }
}

pub type Members = BTreeMap<String, MemberInfo>;

/// Metadata extracted for one component. Immutable once a worker returns it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub component_name: String,
    pub kebab_name: String,
    #[serde(default)]
    pub props: Members,
    #[serde(default)]
    pub events: Members,
    #[serde(default)]
    pub slots: Members,
    #[serde(default)]
    pub exposed: Members,
}

impl ComponentMetadata {
    pub fn new(component_name: impl Into<String>) -> Self {
        let component_name = component_name.into();
        Self {
            kebab_name: kebab_case(&component_name),
            component_name,
            props: Members::new(),
            events: Members::new(),
            slots: Members::new(),
            exposed: Members::new(),
        }
    }

    pub fn members(&self, kind: MemberKind) -> &Members {
        match kind {
            MemberKind::Props => &self.props,
            MemberKind::Events => &self.events,
            MemberKind::Slots => &self.slots,
            MemberKind::Exposed => &self.exposed,
        }
    }

    pub fn members_mut(&mut self, kind: MemberKind) -> &mut Members {
        match kind {
            MemberKind::Props => &mut self.props,
            MemberKind::Events => &mut self.events,
            MemberKind::Slots => &mut self.slots,
            MemberKind::Exposed => &mut self.exposed,
        }
    }

    /// Kebab-cased name of the locale file documenting `info`.
    ///
    /// Props are routed to the file of the component they came from, so
    /// inherited props are described once. Every other kind stays with the
    /// component itself.
    pub fn target_file(&self, kind: MemberKind, info: &MemberInfo) -> String {
        match (kind, info.source.as_deref()) {
            (MemberKind::Props, Some(source)) => kebab_case(source),
            _ => self.kebab_name.clone(),
        }
    }
}
