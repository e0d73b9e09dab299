use assembly_core::AssemblyKind;
use serde::Serialize;

/// A configurable control of the assembly form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    MinimalHomology,
    Enzymes,
    CircularOnly,
    AllowPartialOverlaps,
    BluntLigation,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::MinimalHomology => "Minimal homology length (in bp)",
            Field::Enzymes => "Select enzymes",
            Field::CircularOnly => "Circular assemblies only",
            Field::AllowPartialOverlaps => "Allow partial overlaps",
            Field::BluntLigation => "Blunt ligation",
        }
    }

    pub fn is_shown_for(&self, kind: AssemblyKind) -> bool {
        visible_fields(kind).contains(self)
    }
}

/// Fields shown for an assembly type, in render order.
pub fn visible_fields(kind: AssemblyKind) -> &'static [Field] {
    match kind {
        AssemblyKind::GibsonAssembly => &[Field::MinimalHomology, Field::CircularOnly],
        AssemblyKind::RestrictionAndLigation => &[
            Field::Enzymes,
            Field::CircularOnly,
            Field::AllowPartialOverlaps,
        ],
        AssemblyKind::Ligation => &[
            Field::CircularOnly,
            Field::AllowPartialOverlaps,
            Field::BluntLigation,
        ],
    }
}
