//! Scope-modifier catalogs per container kind.
//!
//! Each container kind offers a fixed, non-overlapping set of scope-modifier
//! kinds for its children. This is a static lookup table, not computed logic.

use crate::models::element::ElementKind;
use crate::models::modifier::ScopeModifierKind;

/// Scope-modifier kinds offered to children of a Box.
pub const BOX_SCOPE: &[ScopeModifierKind] = &[ScopeModifierKind::AlignInBox];

/// Scope-modifier kinds offered to children of a Column.
pub const COLUMN_SCOPE: &[ScopeModifierKind] = &[
    ScopeModifierKind::WeightInColumn,
    ScopeModifierKind::AlignInColumn,
];

/// Scope-modifier kinds offered to children of a Row.
pub const ROW_SCOPE: &[ScopeModifierKind] = &[
    ScopeModifierKind::WeightInRow,
    ScopeModifierKind::AlignInRow,
];

/// The legal scope-modifier kinds for children of the given container.
#[must_use]
pub const fn allowed_kinds(container: ElementKind) -> &'static [ScopeModifierKind] {
    match container {
        ElementKind::Box => BOX_SCOPE,
        ElementKind::Column => COLUMN_SCOPE,
        ElementKind::Row => ROW_SCOPE,
    }
}

/// Whether a scope-modifier kind is legal under the given container.
#[must_use]
pub fn is_legal(container: ElementKind, kind: ScopeModifierKind) -> bool {
    kind.container() == container
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_are_disjoint() {
        for kind in BOX_SCOPE {
            assert!(!COLUMN_SCOPE.contains(kind));
            assert!(!ROW_SCOPE.contains(kind));
        }
        for kind in COLUMN_SCOPE {
            assert!(!ROW_SCOPE.contains(kind));
        }
    }

    #[test]
    fn test_allowed_kinds_agree_with_container_tags() {
        for container in ElementKind::ALL {
            for kind in allowed_kinds(container) {
                assert!(is_legal(container, *kind));
            }
        }
    }

    #[test]
    fn test_cross_container_kind_is_illegal() {
        assert!(!is_legal(ElementKind::Box, ScopeModifierKind::WeightInRow));
        assert!(!is_legal(
            ElementKind::Row,
            ScopeModifierKind::AlignInColumn
        ));
    }
}
