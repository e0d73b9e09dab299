use serde::{Deserialize, Serialize};

use crate::CoreError;

/// The kind of assembly a source performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyKind {
    Ligation,
    GibsonAssembly,
    RestrictionAndLigation,
}

impl AssemblyKind {
    pub const ALL: [AssemblyKind; 3] = [
        AssemblyKind::Ligation,
        AssemblyKind::GibsonAssembly,
        AssemblyKind::RestrictionAndLigation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssemblyKind::Ligation => "ligation",
            AssemblyKind::GibsonAssembly => "gibson_assembly",
            AssemblyKind::RestrictionAndLigation => "restriction_and_ligation",
        }
    }

    /// Backend endpoint that computes this assembly. Same as the tag.
    pub fn endpoint(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for AssemblyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssemblyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssemblyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAssemblyKind(s.to_string()))
    }
}
