use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::EntityId;
use crate::kind::AssemblyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(pub u32);

impl From<u32> for SourceId {
    fn from(id: u32) -> Self {
        SourceId(id)
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A backend record describing one cloning step: its inputs, its output and
/// the step-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    /// Backend source type, e.g. "ligation" or "PCR".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default)]
    pub input: Vec<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restriction_enzymes: Vec<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Source {
    pub fn new(id: impl Into<SourceId>) -> Self {
        Self {
            id: id.into(),
            source_type: None,
            input: Vec::new(),
            output: None,
            restriction_enzymes: Vec::new(),
            fields: Map::new(),
        }
    }

    /// The assembly this source performs, if it is one.
    pub fn assembly_kind(&self) -> Option<AssemblyKind> {
        self.source_type.as_deref().and_then(|t| t.parse().ok())
    }
}
