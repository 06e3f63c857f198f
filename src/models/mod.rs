//! Data models for elements, modifier chains, and templates.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are immutable value types, independent of UI and
//! editing logic: the editor produces new values rather than mutating these
//! in place.

pub mod child;
pub mod color;
pub mod element;
pub mod modifier;
pub mod shape;
pub mod template;

// Re-export all model types
pub use child::{ChildContent, ContentAlpha, TextStyle};
pub use color::RgbColor;
pub use element::{
    BoxParams, ColumnParams, ContentAlignment, Element, ElementData, ElementKind,
    HorizontalAlignment, HorizontalArrangement, RowParams, VerticalAlignment,
    VerticalArrangement,
};
pub use modifier::{
    ModifierEntry, ModifierKind, ModifierParams, ScopeEntry, ScopeModifierKind,
    ScopeModifierParams,
};
pub use shape::{ResolvedShape, Shape};
pub use template::{Template, TemplateChild};
