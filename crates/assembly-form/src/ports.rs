//! Collaborators the configurator talks to. Hosts inject their own store
//! and backend client; tests use in-memory doubles.

use assembly_core::{Entity, Source, SourceId};
use serde::Serialize;

use crate::request::{AssemblyRequest, RequestConfig};

/// Status of the last backend request for a source. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Looks up the input entities of a source in the store.
pub trait EntityResolver {
    fn input_entities(&self, source_id: SourceId) -> Vec<Entity>;
}

/// Backend access for one source.
pub trait BackendApi {
    fn request_status(&self) -> RequestStatus;

    /// Candidate sources returned by the last successful request.
    fn sources(&self) -> Vec<Source>;

    /// Candidate entities returned by the last successful request.
    fn entities(&self) -> Vec<Entity>;

    /// Fire the request. Completion and failures are handled by the
    /// implementation and reported through `request_status`.
    fn send_post_request(
        &mut self,
        endpoint: &str,
        request: AssemblyRequest,
        config: RequestConfig,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_value(RequestStatus::Idle).unwrap(), json!({ "status": "idle" }));
        assert_eq!(
            serde_json::to_value(RequestStatus::Error("no assembly found".to_string())).unwrap(),
            json!({ "status": "error", "message": "no assembly found" })
        );
    }
}
