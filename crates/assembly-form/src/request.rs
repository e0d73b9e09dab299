//! Request payloads sent to the assembly endpoints.

use assembly_core::{Entity, EntityId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRequest {
    pub input: Vec<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction_enzymes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyRequest {
    pub source: SourceRequest,
    pub sequences: Vec<Entity>,
}

impl AssemblyRequest {
    pub fn new(sequences: Vec<Entity>) -> Self {
        Self {
            source: SourceRequest {
                input: sequences.iter().map(|e| e.id).collect(),
                restriction_enzymes: None,
            },
            sequences,
        }
    }

    pub fn with_restriction_enzymes(mut self, enzymes: Vec<String>) -> Self {
        self.source.restriction_enzymes = Some(enzymes);
        self
    }
}

/// Query parameters of an assembly request. Serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssemblyParams {
    Ligation {
        allow_partial_overlaps: bool,
        circular_only: bool,
        blunt: bool,
    },
    GibsonAssembly {
        minimal_homology: u32,
        circular_only: bool,
    },
    RestrictionAndLigation {
        allow_partial_overlaps: bool,
        circular_only: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestConfig {
    pub params: AssemblyParams,
}

/// Everything needed for one POST to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub endpoint: &'static str,
    pub request: AssemblyRequest,
    pub config: RequestConfig,
}
