//! End-to-end tests for editing sessions over the template catalog.

use modstudio::editor::{EditError, EntryEdit, ListRef, Session};
use modstudio::models::{
    ElementData, ElementKind, ModifierKind, ModifierParams, RowParams, Template, VerticalAlignment,
};

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_names_are_unique() {
    let catalog = Template::catalog();
    assert_eq!(catalog.len(), 4);
    for (i, a) in catalog.iter().enumerate() {
        for b in &catalog[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn test_find_is_case_insensitive() {
    assert!(Template::find("pink square").is_some());
    assert!(Template::find("RAINBOW").is_some());
    assert!(Template::find("no such template").is_none());
}

#[test]
fn test_catalog_scope_entries_match_their_container() {
    for template in Template::catalog() {
        let container = template.parent.kind();
        for child in &template.children {
            for entry in &child.scope_modifiers {
                assert_eq!(
                    entry.kind().container(),
                    container,
                    "{}: scope entry {:?} does not fit a {:?} parent",
                    template.name,
                    entry.kind(),
                    container
                );
            }
        }
    }
}

// ============================================================================
// Dirty tracking and reset
// ============================================================================

#[test]
fn test_fresh_session_is_clean() {
    let session = Session::new(Template::sun());
    assert!(!session.is_dirty());
}

#[test]
fn test_edits_mark_dirty_and_reset_restores() {
    let mut session = Session::new(Template::sun());
    let pristine = session.current().clone();

    session
        .add_modifier(ListRef::Parent, ModifierKind::Rotate)
        .unwrap();
    session.remove(ListRef::Parent, 0).unwrap();
    assert!(session.is_dirty());
    assert_ne!(*session.current(), pristine);

    session.reset_to_default();
    assert!(!session.is_dirty());
    assert_eq!(*session.current(), pristine);
}

#[test]
fn test_select_template_replaces_default_too() {
    let mut session = Session::new(Template::pink_square());
    session
        .add_modifier(ListRef::Parent, ModifierKind::Scale)
        .unwrap();

    session.select_template(Template::rainbow());
    assert!(!session.is_dirty());
    assert_eq!(session.current().name, "Rainbow");

    // Reset now targets the newly selected template
    session
        .add_modifier(ListRef::Parent, ModifierKind::Scale)
        .unwrap();
    session.reset_to_default();
    assert_eq!(*session.current(), Template::rainbow());
}

// ============================================================================
// Element kind switching
// ============================================================================

#[test]
fn test_kind_switch_resets_params_and_scope_lists() {
    let mut session = Session::new(Template::pink_square());
    assert!(!session.current().children[0].scope_modifiers.is_empty());

    session.set_element_kind(ElementKind::Row);
    let template = session.current();
    assert_eq!(template.parent.kind(), ElementKind::Row);
    assert_eq!(template.parent.data, ElementData::Row(RowParams::default()));
    assert!(
        template.children[0].scope_modifiers.is_empty(),
        "scope entries of the old container are dropped"
    );
    assert!(session.is_dirty());
}

#[test]
fn test_kind_switch_keeps_general_chains() {
    let mut session = Session::new(Template::pink_square());
    let parent_before = session.current().parent_modifiers.clone();
    let child_before = session.current().children[0].modifiers.clone();

    session.set_element_kind(ElementKind::Column);
    assert_eq!(session.current().parent_modifiers, parent_before);
    assert_eq!(session.current().children[0].modifiers, child_before);
}

#[test]
fn test_set_parent_data_rejects_kind_mismatch() {
    let mut session = Session::new(Template::pink_square());
    let result = session.set_parent_data(ElementData::Row(RowParams {
        vertical_alignment: VerticalAlignment::Bottom,
        ..RowParams::default()
    }));
    assert!(matches!(result, Err(EditError::InvalidKind { .. })));
    assert!(!session.is_dirty());
}

// ============================================================================
// List addressing
// ============================================================================

#[test]
fn test_add_general_kind_to_scope_list_is_rejected() {
    let mut session = Session::new(Template::pink_square());
    let result = session.add_modifier(ListRef::ChildScope(0), ModifierKind::Padding);
    assert!(matches!(result, Err(EditError::InvalidKind { .. })));
}

#[test]
fn test_child_index_out_of_range() {
    let mut session = Session::new(Template::sun());
    let result = session.add_modifier(ListRef::Child(5), ModifierKind::Padding);
    assert!(matches!(
        result,
        Err(EditError::IndexOutOfRange { index: 5, .. })
    ));
}

#[test]
fn test_edit_through_session_addresses_the_right_child() {
    let mut session = Session::new(Template::rainbow());
    session
        .edit_modifier(
            ListRef::Child(2),
            0,
            EntryEdit::Params(ModifierParams::Size {
                width: 200,
                height: 16,
            }),
        )
        .unwrap();

    let template = session.current();
    assert_eq!(
        template.children[2].modifiers[0].params,
        ModifierParams::Size {
            width: 200,
            height: 16,
        }
    );
    // Sibling bands are untouched
    assert_eq!(
        template.children[1].modifiers[0].params,
        ModifierParams::Size {
            width: 160,
            height: 16,
        }
    );
}

#[test]
fn test_entry_count_tracks_edits() {
    let mut session = Session::new(Template::sun());
    let before = session.entry_count(ListRef::Parent).unwrap();
    session
        .add_modifier(ListRef::Parent, ModifierKind::Offset)
        .unwrap();
    assert_eq!(session.entry_count(ListRef::Parent).unwrap(), before + 1);
}
