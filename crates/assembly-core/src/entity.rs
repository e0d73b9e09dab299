use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of an entity in the backend store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        EntityId(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A DNA fragment record owned by the backend store.
///
/// Only `id` is interpreted on this side. Every other field is kept verbatim
/// so the record goes back to the backend exactly as the store holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// A sequence held as the text of a sequence file, with blunt ends.
    pub fn text_file_sequence(
        id: impl Into<EntityId>,
        sequence_file_format: &str,
        file_content: impl Into<String>,
    ) -> Self {
        Self::new(id)
            .with_field("type", "TextFileSequence")
            .with_field("sequence_file_format", sequence_file_format)
            .with_field("file_content", file_content.into())
            .with_field("overhang_crick_3prime", 0)
            .with_field("overhang_watson_3prime", 0)
    }

    /// Set an opaque field. `id` is owned by the typed field and is skipped.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        if key != "id" {
            self.fields.insert(key.to_string(), value.into());
        }
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
