//! Pure edit operations over ordered modifier lists.
//!
//! Order is semantically significant (it is the application order of the
//! transform chain), duplicate kinds are legal, and every operation returns a
//! new list. Reordering is a pairwise swap, not a remove+insert: moving an
//! entry "up" or "down" swaps it with its neighbor, and a swap over a longer
//! distance leaves everything between the two positions untouched.

use crate::models::element::ElementKind;
use crate::models::modifier::{
    ModifierEntry, ModifierKind, ModifierParams, ScopeEntry, ScopeModifierKind,
    ScopeModifierParams,
};

use super::scope;
use super::{EditError, EditResult};

/// Patch applied to one general modifier entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryEdit {
    /// Replace the parameters; the kind must stay the same
    Params(ModifierParams),
    /// Set the enabled flag
    Enabled(bool),
}

/// Patch applied to one scope-modifier entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScopeEntryEdit {
    /// Replace the parameters; the kind must stay the same
    Params(ScopeModifierParams),
    /// Set the enabled flag
    Enabled(bool),
}

/// Appends a new enabled entry with the default parameters for `kind`.
///
/// Every [`ModifierKind`] is legal in a general list, so this cannot fail.
#[must_use]
pub fn add(entries: &[ModifierEntry], kind: ModifierKind) -> Vec<ModifierEntry> {
    let mut next = entries.to_vec();
    next.push(ModifierEntry::new(kind));
    next
}

/// Appends a new enabled scope entry, checking it against the container kind.
pub fn add_scoped(
    entries: &[ScopeEntry],
    container: ElementKind,
    kind: ScopeModifierKind,
) -> EditResult<Vec<ScopeEntry>> {
    if !scope::is_legal(container, kind) {
        return Err(EditError::InvalidKind {
            detail: format!(
                "{kind:?} is not a {} scope modifier",
                container.display_name()
            ),
        });
    }
    let mut next = entries.to_vec();
    next.push(ScopeEntry::new(kind));
    Ok(next)
}

/// Deletes the entry at `index`; subsequent entries shift down one position.
pub fn remove<T: Clone>(entries: &[T], index: usize) -> EditResult<Vec<T>> {
    check_index(index, entries.len())?;
    let mut next = entries.to_vec();
    next.remove(index);
    Ok(next)
}

/// Swaps the entries at `from` and `to`.
///
/// `from == to` is a legal no-op. Applying the same swap twice restores the
/// original list.
pub fn reorder<T: Clone>(entries: &[T], from: usize, to: usize) -> EditResult<Vec<T>> {
    check_index(from, entries.len())?;
    check_index(to, entries.len())?;
    let mut next = entries.to_vec();
    next.swap(from, to);
    Ok(next)
}

/// Applies a patch to the entry at `index`, keeping its position.
pub fn edit(
    entries: &[ModifierEntry],
    index: usize,
    patch: EntryEdit,
) -> EditResult<Vec<ModifierEntry>> {
    check_index(index, entries.len())?;
    let mut next = entries.to_vec();
    match patch {
        EntryEdit::Params(params) => {
            let current = next[index].kind();
            if params.kind() != current {
                return Err(EditError::InvalidKind {
                    detail: format!(
                        "cannot replace {current:?} params with {:?} params",
                        params.kind()
                    ),
                });
            }
            next[index].params = params;
        }
        EntryEdit::Enabled(enabled) => next[index].enabled = enabled,
    }
    Ok(next)
}

/// Applies a patch to the scope entry at `index`, keeping its position.
pub fn edit_scoped(
    entries: &[ScopeEntry],
    index: usize,
    patch: ScopeEntryEdit,
) -> EditResult<Vec<ScopeEntry>> {
    check_index(index, entries.len())?;
    let mut next = entries.to_vec();
    match patch {
        ScopeEntryEdit::Params(params) => {
            let current = next[index].kind();
            if params.kind() != current {
                return Err(EditError::InvalidKind {
                    detail: format!(
                        "cannot replace {current:?} params with {:?} params",
                        params.kind()
                    ),
                });
            }
            next[index].params = params;
        }
        ScopeEntryEdit::Enabled(enabled) => next[index].enabled = enabled,
    }
    Ok(next)
}

fn check_index(index: usize, len: usize) -> EditResult<()> {
    if index >= len {
        return Err(EditError::IndexOutOfRange { index, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;
    use crate::models::Shape;

    fn sample() -> Vec<ModifierEntry> {
        vec![
            ModifierEntry::new(ModifierKind::Background),
            ModifierEntry::new(ModifierKind::Padding),
            ModifierEntry::new(ModifierKind::Clip),
        ]
    }

    #[test]
    fn test_add_appends_enabled_defaults() {
        let entries = add(&[], ModifierKind::Background);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].enabled);
        assert_eq!(entries[0].kind(), ModifierKind::Background);
    }

    #[test]
    fn test_add_allows_duplicate_kinds() {
        let entries = add(&add(&[], ModifierKind::Padding), ModifierKind::Padding);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_remove_shifts_down() {
        let entries = remove(&sample(), 1).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind(), ModifierKind::Background);
        assert_eq!(entries[1].kind(), ModifierKind::Clip);
    }

    #[test]
    fn test_remove_rejects_out_of_range() {
        let entries = sample();
        assert_eq!(
            remove(&entries, 3),
            Err(EditError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_append_then_remove_last_round_trips() {
        let entries = sample();
        let appended = add(&entries, ModifierKind::Rotate);
        let restored = remove(&appended, entries.len()).unwrap();
        assert_eq!(restored, entries);
    }

    #[test]
    fn test_reorder_is_a_swap() {
        let entries = reorder(&sample(), 0, 2).unwrap();
        assert_eq!(entries[0].kind(), ModifierKind::Clip);
        assert_eq!(entries[1].kind(), ModifierKind::Padding);
        assert_eq!(entries[2].kind(), ModifierKind::Background);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let entries = sample();
        assert_eq!(reorder(&entries, 1, 1).unwrap(), entries);
    }

    #[test]
    fn test_reorder_is_self_inverse() {
        let entries = sample();
        let swapped = reorder(&entries, 0, 2).unwrap();
        assert_eq!(reorder(&swapped, 0, 2).unwrap(), entries);
    }

    #[test]
    fn test_reorder_rejects_either_index_out_of_range() {
        let entries = sample();
        assert!(reorder(&entries, 3, 0).is_err());
        assert!(reorder(&entries, 0, 3).is_err());
    }

    #[test]
    fn test_edit_enabled_keeps_position_and_params() {
        let entries = edit(&sample(), 0, EntryEdit::Enabled(false)).unwrap();
        assert!(!entries[0].enabled);
        assert_eq!(entries[0].kind(), ModifierKind::Background);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_edit_params_same_kind() {
        let entries = edit(
            &sample(),
            0,
            EntryEdit::Params(ModifierParams::Background {
                color: RgbColor::PINK,
                shape: Shape::Circle,
                corner: 0,
            }),
        )
        .unwrap();
        assert_eq!(
            entries[0].params,
            ModifierParams::Background {
                color: RgbColor::PINK,
                shape: Shape::Circle,
                corner: 0,
            }
        );
    }

    #[test]
    fn test_edit_params_kind_mismatch_rejected() {
        let result = edit(
            &sample(),
            0,
            EntryEdit::Params(ModifierParams::Padding { all: 4 }),
        );
        assert!(matches!(result, Err(EditError::InvalidKind { .. })));
    }

    #[test]
    fn test_add_scoped_checks_container() {
        let added = add_scoped(&[], ElementKind::Box, ScopeModifierKind::AlignInBox).unwrap();
        assert_eq!(added.len(), 1);

        let result = add_scoped(&[], ElementKind::Box, ScopeModifierKind::WeightInRow);
        assert!(matches!(result, Err(EditError::InvalidKind { .. })));
    }
}
