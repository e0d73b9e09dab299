use assembly_core::AssemblyKind;

use crate::config::FormConfig;
use crate::request::AssemblyParams;

/// How ligation treats fragment ends. Partial overlaps and blunt ligation
/// exclude each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapMode {
    #[default]
    None,
    PartialOverlaps,
    BluntLigation,
}

impl OverlapMode {
    pub fn toggle_partial_overlaps(self) -> Self {
        match self {
            OverlapMode::PartialOverlaps => OverlapMode::None,
            _ => OverlapMode::PartialOverlaps,
        }
    }

    pub fn toggle_blunt(self) -> Self {
        match self {
            OverlapMode::BluntLigation => OverlapMode::None,
            _ => OverlapMode::BluntLigation,
        }
    }

    pub fn allow_partial_overlaps(self) -> bool {
        self == OverlapMode::PartialOverlaps
    }

    pub fn blunt(self) -> bool {
        self == OverlapMode::BluntLigation
    }
}

/// Form state for one assembly source. Each variant carries only the fields
/// its assembly type shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyForm {
    Ligation {
        overlap: OverlapMode,
        circular_only: bool,
    },
    GibsonAssembly {
        minimal_homology: u32,
        circular_only: bool,
    },
    RestrictionAndLigation {
        enzymes: Vec<String>,
        allow_partial_overlaps: bool,
        circular_only: bool,
    },
}

impl AssemblyForm {
    pub fn new(kind: AssemblyKind, config: &FormConfig) -> Self {
        match kind {
            AssemblyKind::Ligation => AssemblyForm::Ligation {
                overlap: OverlapMode::None,
                circular_only: false,
            },
            AssemblyKind::GibsonAssembly => AssemblyForm::GibsonAssembly {
                minimal_homology: config.default_minimal_homology,
                circular_only: false,
            },
            AssemblyKind::RestrictionAndLigation => AssemblyForm::RestrictionAndLigation {
                enzymes: Vec::new(),
                allow_partial_overlaps: false,
                circular_only: false,
            },
        }
    }

    pub fn kind(&self) -> AssemblyKind {
        match self {
            AssemblyForm::Ligation { .. } => AssemblyKind::Ligation,
            AssemblyForm::GibsonAssembly { .. } => AssemblyKind::GibsonAssembly,
            AssemblyForm::RestrictionAndLigation { .. } => AssemblyKind::RestrictionAndLigation,
        }
    }

    pub fn circular_only(&self) -> bool {
        match self {
            AssemblyForm::Ligation { circular_only, .. }
            | AssemblyForm::GibsonAssembly { circular_only, .. }
            | AssemblyForm::RestrictionAndLigation { circular_only, .. } => *circular_only,
        }
    }

    pub fn allow_partial_overlaps(&self) -> Option<bool> {
        match self {
            AssemblyForm::Ligation { overlap, .. } => Some(overlap.allow_partial_overlaps()),
            AssemblyForm::RestrictionAndLigation {
                allow_partial_overlaps,
                ..
            } => Some(*allow_partial_overlaps),
            AssemblyForm::GibsonAssembly { .. } => None,
        }
    }

    pub fn blunt(&self) -> Option<bool> {
        match self {
            AssemblyForm::Ligation { overlap, .. } => Some(overlap.blunt()),
            _ => None,
        }
    }

    pub fn minimal_homology(&self) -> Option<u32> {
        match self {
            AssemblyForm::GibsonAssembly {
                minimal_homology, ..
            } => Some(*minimal_homology),
            _ => None,
        }
    }

    pub fn enzymes(&self) -> Option<&[String]> {
        match self {
            AssemblyForm::RestrictionAndLigation { enzymes, .. } => Some(enzymes),
            _ => None,
        }
    }

    pub fn toggle_circular_only(&mut self) {
        match self {
            AssemblyForm::Ligation { circular_only, .. }
            | AssemblyForm::GibsonAssembly { circular_only, .. }
            | AssemblyForm::RestrictionAndLigation { circular_only, .. } => {
                *circular_only = !*circular_only
            }
        }
    }

    /// Returns false when this form has no partial-overlaps field.
    pub fn toggle_allow_partial_overlaps(&mut self) -> bool {
        match self {
            AssemblyForm::Ligation { overlap, .. } => {
                *overlap = overlap.toggle_partial_overlaps();
                true
            }
            AssemblyForm::RestrictionAndLigation {
                allow_partial_overlaps,
                ..
            } => {
                *allow_partial_overlaps = !*allow_partial_overlaps;
                true
            }
            AssemblyForm::GibsonAssembly { .. } => false,
        }
    }

    /// Returns false when this form has no blunt-ligation field.
    pub fn toggle_blunt_ligation(&mut self) -> bool {
        match self {
            AssemblyForm::Ligation { overlap, .. } => {
                *overlap = overlap.toggle_blunt();
                true
            }
            _ => false,
        }
    }

    /// Returns false when this form has no homology field.
    pub fn set_minimal_homology(&mut self, value: u32) -> bool {
        match self {
            AssemblyForm::GibsonAssembly {
                minimal_homology, ..
            } => {
                *minimal_homology = value;
                true
            }
            _ => false,
        }
    }

    /// Returns false when this form has no enzyme selection.
    pub fn set_enzymes(&mut self, selected: Vec<String>) -> bool {
        match self {
            AssemblyForm::RestrictionAndLigation { enzymes, .. } => {
                *enzymes = selected;
                true
            }
            _ => false,
        }
    }

    /// Restriction and ligation needs at least one enzyme.
    pub fn can_submit(&self) -> bool {
        match self {
            AssemblyForm::RestrictionAndLigation { enzymes, .. } => !enzymes.is_empty(),
            _ => true,
        }
    }

    pub fn params(&self) -> AssemblyParams {
        match self {
            AssemblyForm::Ligation {
                overlap,
                circular_only,
            } => AssemblyParams::Ligation {
                allow_partial_overlaps: overlap.allow_partial_overlaps(),
                circular_only: *circular_only,
                blunt: overlap.blunt(),
            },
            AssemblyForm::GibsonAssembly {
                minimal_homology,
                circular_only,
            } => AssemblyParams::GibsonAssembly {
                minimal_homology: *minimal_homology,
                circular_only: *circular_only,
            },
            AssemblyForm::RestrictionAndLigation {
                allow_partial_overlaps,
                circular_only,
                ..
            } => AssemblyParams::RestrictionAndLigation {
                allow_partial_overlaps: *allow_partial_overlaps,
                circular_only: *circular_only,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: AssemblyKind) -> AssemblyForm {
        AssemblyForm::new(kind, &FormConfig::default())
    }

    #[test]
    fn test_defaults() {
        let gibson = form(AssemblyKind::GibsonAssembly);
        assert_eq!(gibson.minimal_homology(), Some(20));
        assert!(!gibson.circular_only());

        let ligation = form(AssemblyKind::Ligation);
        assert_eq!(ligation.allow_partial_overlaps(), Some(false));
        assert_eq!(ligation.blunt(), Some(false));

        let rl = form(AssemblyKind::RestrictionAndLigation);
        assert_eq!(rl.enzymes(), Some(&[][..]));
        assert!(!rl.can_submit());
    }

    #[test]
    fn test_overlap_mode_toggles() {
        let mode = OverlapMode::None.toggle_partial_overlaps();
        assert_eq!(mode, OverlapMode::PartialOverlaps);
        let mode = mode.toggle_blunt();
        assert_eq!(mode, OverlapMode::BluntLigation);
        assert!(!mode.allow_partial_overlaps());
        let mode = mode.toggle_partial_overlaps();
        assert_eq!(mode, OverlapMode::PartialOverlaps);
        assert!(!mode.blunt());
        assert_eq!(mode.toggle_partial_overlaps(), OverlapMode::None);
        assert_eq!(OverlapMode::BluntLigation.toggle_blunt(), OverlapMode::None);
    }

    #[test]
    fn test_flags_never_both_set() {
        let mut ligation = form(AssemblyKind::Ligation);
        // Arbitrary toggle sequence: p, b, b, p, p, b, p
        for partial in [true, false, false, true, true, false, true] {
            if partial {
                ligation.toggle_allow_partial_overlaps();
            } else {
                ligation.toggle_blunt_ligation();
            }
            let partial = ligation.allow_partial_overlaps() == Some(true);
            let blunt = ligation.blunt() == Some(true);
            assert!(!(partial && blunt));
        }
    }

    #[test]
    fn test_fields_outside_the_kind_are_rejected() {
        let mut gibson = form(AssemblyKind::GibsonAssembly);
        assert!(!gibson.toggle_allow_partial_overlaps());
        assert!(!gibson.toggle_blunt_ligation());
        assert!(!gibson.set_enzymes(vec!["EcoRI".to_string()]));
        assert_eq!(gibson, form(AssemblyKind::GibsonAssembly));

        let mut rl = form(AssemblyKind::RestrictionAndLigation);
        assert!(!rl.toggle_blunt_ligation());
        assert!(!rl.set_minimal_homology(30));
    }

    #[test]
    fn test_enzymes_unblock_submission() {
        let mut rl = form(AssemblyKind::RestrictionAndLigation);
        assert!(rl.set_enzymes(vec!["EcoRI".to_string()]));
        assert!(rl.can_submit());
        rl.set_enzymes(Vec::new());
        assert!(!rl.can_submit());
    }
}
