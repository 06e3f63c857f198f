//! Host-side editing session over one active template.
//!
//! The session owns the single canonical copy of the active template's state.
//! Every intent is forwarded to the pure functions in [`super::list`] and the
//! element model; on success the session replaces the affected list with the
//! returned snapshot. Nothing here retains intermediate state, blocks, or
//! performs I/O.

use crate::models::element::{ElementData, ElementKind};
use crate::models::modifier::{ModifierKind, ScopeModifierKind};
use crate::models::template::Template;

use super::list::{self, EntryEdit, ScopeEntryEdit};
use super::{EditError, EditResult};

/// Addresses one of the modifier lists of the active template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRef {
    /// The parent element's modifier list
    Parent,
    /// The scope-modifier list of the child at this index
    ChildScope(usize),
    /// The general modifier list of the child at this index
    Child(usize),
}

/// Editing session holding the live copy of the active template.
#[derive(Debug, Clone)]
pub struct Session {
    /// Catalog value used by reset
    default: Template,
    /// Live, edited state
    live: Template,
    /// Whether the live state has diverged from the catalog value
    dirty: bool,
}

impl Session {
    /// Opens a session on the given template.
    #[must_use]
    pub fn new(template: Template) -> Self {
        Self {
            live: template.clone(),
            default: template,
            dirty: false,
        }
    }

    /// The live template state.
    #[must_use]
    pub const fn current(&self) -> &Template {
        &self.live
    }

    /// Whether the live state has been edited since the last select/reset.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Switches to a different template, discarding the current live state.
    pub fn select_template(&mut self, template: Template) {
        self.live = template.clone();
        self.default = template;
        self.dirty = false;
    }

    /// Replaces the live state with the catalog default (full overwrite).
    pub fn reset_to_default(&mut self) {
        self.live = self.default.clone();
        self.dirty = false;
    }

    /// Switches the parent element to a new container kind.
    ///
    /// Parameters reset to the new kind's defaults. Child scope-modifier
    /// lists are cleared: their kinds are only legal under the previous
    /// container.
    pub fn set_element_kind(&mut self, kind: ElementKind) {
        self.live.parent = self.live.parent.switch_kind(kind);
        for child in &mut self.live.children {
            child.scope_modifiers.clear();
        }
        self.dirty = true;
    }

    /// Replaces the parent element's parameters, keeping its kind.
    pub fn set_parent_data(&mut self, data: ElementData) -> EditResult<()> {
        let current = self.live.parent.kind();
        if data.kind() != current {
            return Err(EditError::InvalidKind {
                detail: format!(
                    "cannot replace {current:?} element data with {:?} data",
                    data.kind()
                ),
            });
        }
        self.live.parent.data = data;
        self.dirty = true;
        Ok(())
    }

    /// Appends a modifier to the parent's or a child's general list.
    ///
    /// `list` must not address a scope list; scope entries are added through
    /// [`Self::add_scope_modifier`].
    pub fn add_modifier(&mut self, list: ListRef, kind: ModifierKind) -> EditResult<()> {
        match list {
            ListRef::Parent => {
                self.live.parent_modifiers = list::add(&self.live.parent_modifiers, kind);
            }
            ListRef::Child(index) => {
                let child = self.child_mut(index)?;
                child.modifiers = list::add(&child.modifiers, kind);
            }
            ListRef::ChildScope(_) => {
                return Err(EditError::InvalidKind {
                    detail: format!("{kind:?} is a general modifier, not a scope modifier"),
                });
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Appends a scope modifier to a child, checked against the parent kind.
    pub fn add_scope_modifier(
        &mut self,
        child_index: usize,
        kind: ScopeModifierKind,
    ) -> EditResult<()> {
        let container = self.live.parent.kind();
        let child = self.child_mut(child_index)?;
        child.scope_modifiers = list::add_scoped(&child.scope_modifiers, container, kind)?;
        self.dirty = true;
        Ok(())
    }

    /// Deletes the entry at `index` from the addressed list.
    pub fn remove(&mut self, list: ListRef, index: usize) -> EditResult<()> {
        match list {
            ListRef::Parent => {
                self.live.parent_modifiers = list::remove(&self.live.parent_modifiers, index)?;
            }
            ListRef::Child(child_index) => {
                let child = self.child_mut(child_index)?;
                child.modifiers = list::remove(&child.modifiers, index)?;
            }
            ListRef::ChildScope(child_index) => {
                let child = self.child_mut(child_index)?;
                child.scope_modifiers = list::remove(&child.scope_modifiers, index)?;
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Swaps the entries at `from` and `to` in the addressed list.
    pub fn reorder(&mut self, list: ListRef, from: usize, to: usize) -> EditResult<()> {
        match list {
            ListRef::Parent => {
                self.live.parent_modifiers =
                    list::reorder(&self.live.parent_modifiers, from, to)?;
            }
            ListRef::Child(child_index) => {
                let child = self.child_mut(child_index)?;
                child.modifiers = list::reorder(&child.modifiers, from, to)?;
            }
            ListRef::ChildScope(child_index) => {
                let child = self.child_mut(child_index)?;
                child.scope_modifiers = list::reorder(&child.scope_modifiers, from, to)?;
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Patches the general modifier entry at `index`.
    pub fn edit_modifier(
        &mut self,
        list: ListRef,
        index: usize,
        patch: EntryEdit,
    ) -> EditResult<()> {
        match list {
            ListRef::Parent => {
                self.live.parent_modifiers =
                    list::edit(&self.live.parent_modifiers, index, patch)?;
            }
            ListRef::Child(child_index) => {
                let child = self.child_mut(child_index)?;
                child.modifiers = list::edit(&child.modifiers, index, patch)?;
            }
            ListRef::ChildScope(_) => {
                return Err(EditError::InvalidKind {
                    detail: "scope entries are edited through edit_scope_modifier".to_string(),
                });
            }
        }
        self.dirty = true;
        Ok(())
    }

    /// Patches the scope-modifier entry at `index` of the given child.
    pub fn edit_scope_modifier(
        &mut self,
        child_index: usize,
        index: usize,
        patch: ScopeEntryEdit,
    ) -> EditResult<()> {
        let child = self.child_mut(child_index)?;
        child.scope_modifiers = list::edit_scoped(&child.scope_modifiers, index, patch)?;
        self.dirty = true;
        Ok(())
    }

    /// Flips the enabled flag of the entry at `index` in the addressed list.
    pub fn toggle_enabled(&mut self, list: ListRef, index: usize) -> EditResult<()> {
        match list {
            ListRef::Parent | ListRef::Child(_) => {
                let enabled = self.entry_enabled(list, index)?;
                self.edit_modifier(list, index, EntryEdit::Enabled(!enabled))
            }
            ListRef::ChildScope(child_index) => {
                let enabled = self.entry_enabled(list, index)?;
                self.edit_scope_modifier(child_index, index, ScopeEntryEdit::Enabled(!enabled))
            }
        }
    }

    /// Number of entries in the addressed list.
    pub fn entry_count(&self, list: ListRef) -> EditResult<usize> {
        match list {
            ListRef::Parent => Ok(self.live.parent_modifiers.len()),
            ListRef::Child(index) => Ok(self.child(index)?.modifiers.len()),
            ListRef::ChildScope(index) => Ok(self.child(index)?.scope_modifiers.len()),
        }
    }

    fn entry_enabled(&self, list: ListRef, index: usize) -> EditResult<bool> {
        let enabled = match list {
            ListRef::Parent => self
                .live
                .parent_modifiers
                .get(index)
                .map(|e| e.enabled),
            ListRef::Child(child_index) => {
                self.child(child_index)?.modifiers.get(index).map(|e| e.enabled)
            }
            ListRef::ChildScope(child_index) => self
                .child(child_index)?
                .scope_modifiers
                .get(index)
                .map(|e| e.enabled),
        };
        enabled.ok_or_else(|| EditError::IndexOutOfRange {
            index,
            len: self.entry_count(list).unwrap_or(0),
        })
    }

    fn child(&self, index: usize) -> EditResult<&crate::models::template::TemplateChild> {
        let len = self.live.children.len();
        self.live
            .children
            .get(index)
            .ok_or(EditError::IndexOutOfRange { index, len })
    }

    fn child_mut(
        &mut self,
        index: usize,
    ) -> EditResult<&mut crate::models::template::TemplateChild> {
        let len = self.live.children.len();
        self.live
            .children
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::{BoxParams, ContentAlignment};

    fn session() -> Session {
        Session::new(Template::pink_square())
    }

    #[test]
    fn test_reset_overwrites_live_state() {
        let mut session = session();
        session.add_modifier(ListRef::Parent, ModifierKind::Rotate).unwrap();
        assert!(session.is_dirty());

        session.reset_to_default();
        assert!(!session.is_dirty());
        assert_eq!(session.current(), &Template::pink_square());
    }

    #[test]
    fn test_kind_switch_clears_scope_lists() {
        let mut session = session();
        assert!(!session.current().children[0].scope_modifiers.is_empty());

        session.set_element_kind(ElementKind::Row);
        assert_eq!(session.current().parent.kind(), ElementKind::Row);
        assert!(session.current().children[0].scope_modifiers.is_empty());
    }

    #[test]
    fn test_set_parent_data_rejects_kind_mismatch() {
        let mut session = session();
        session.set_element_kind(ElementKind::Column);

        let result = session.set_parent_data(ElementData::Box(BoxParams {
            content_alignment: ContentAlignment::Center,
        }));
        assert!(matches!(result, Err(EditError::InvalidKind { .. })));
    }

    #[test]
    fn test_add_scope_modifier_validates_against_parent() {
        let mut session = session();
        // Parent is a Box; a Row weight is illegal
        let result = session.add_scope_modifier(0, ScopeModifierKind::WeightInRow);
        assert!(matches!(result, Err(EditError::InvalidKind { .. })));

        session.add_scope_modifier(0, ScopeModifierKind::AlignInBox).unwrap();
    }

    #[test]
    fn test_bad_child_index_is_out_of_range() {
        let mut session = session();
        let result = session.add_modifier(ListRef::Child(9), ModifierKind::Padding);
        assert!(matches!(result, Err(EditError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_toggle_enabled_round_trips() {
        let mut session = session();
        session.toggle_enabled(ListRef::Parent, 0).unwrap();
        assert!(!session.current().parent_modifiers[0].enabled);
        session.toggle_enabled(ListRef::Parent, 0).unwrap();
        assert!(session.current().parent_modifiers[0].enabled);
    }
}
