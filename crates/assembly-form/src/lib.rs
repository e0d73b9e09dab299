//! Configuration form for assembly sources (ligation, Gibson assembly,
//! restriction and ligation) and the request it submits to the backend.

pub mod config;
pub mod configurator;
pub mod field;
pub mod ports;
pub mod request;
pub mod state;

pub use config::FormConfig;
pub use configurator::{AssemblyConfigurator, FormEvent, Outcome};
pub use field::{visible_fields, Field};
pub use ports::{BackendApi, EntityResolver, RequestStatus};
pub use request::{AssemblyParams, AssemblyRequest, PreparedRequest, RequestConfig};
pub use state::{AssemblyForm, OverlapMode};

use assembly_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Invalid minimal homology length: {0:?}")]
    InvalidHomology(String),
    #[error("Invalid form configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
}
