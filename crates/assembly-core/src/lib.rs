pub mod entity;
pub mod kind;
pub mod source;

pub use entity::*;
pub use kind::*;
pub use source::*;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown assembly type: {0}")]
    UnknownAssemblyKind(String),
}
