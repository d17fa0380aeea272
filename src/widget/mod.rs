// SPDX-License-Identifier: MPL-2.0
//! Capability traits for localizable widget trees.
//!
//! This crate does not model any particular GUI toolkit. A host
//! integration implements [`Widget`] for its own widget handles and
//! overrides the capability accessors its widget kind supports; the
//! walk in [`traverse`] then rewrites every user-visible string through
//! a [`Localizer`](crate::localizer::Localizer) without knowing the
//! host's object model.

pub mod traverse;

/// A mutable text slot: display text, a label, or a placeholder.
pub trait TextContent {
    fn text(&self) -> String;
    fn set_text(&mut self, text: String);
}

/// Column-title access for grid-like widgets.
///
/// Setting a title must also refresh the visible column header, if the
/// host renders headers separately from the column model.
pub trait GridColumns {
    fn column_count(&self) -> usize;
    fn column_title(&self, index: usize) -> String;
    fn set_column_title(&mut self, index: usize, title: String);
}

/// Field-label access for form-like widgets (data entry forms as well
/// as query forms).
pub trait FormFields {
    fn field_count(&self) -> usize;
    fn field_label(&self, index: usize) -> String;
    fn set_field_label(&mut self, index: usize, label: String);
}

/// Named-label access for login dialogs (user label, password label,
/// button captions, signed-in banner, ...).
pub trait LoginPanel {
    /// Names of every label the dialog carries.
    fn label_keys(&self) -> Vec<String>;
    fn label(&self, key: &str) -> Option<String>;
    fn set_label(&mut self, key: &str, value: String);
    /// Invoked once after the labels have been rewritten so the host
    /// can redraw the dialog.
    fn refresh(&mut self);
}

/// A node in the widget tree.
///
/// Every capability accessor defaults to `None`; implementations
/// override the ones that apply. A widget whose children are registered
/// at the tree root by the host (menu bars in some toolkits) should
/// return no children here and let its items be localized as roots.
pub trait Widget {
    /// Child widgets, if this widget is a container.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    /// The widget's own display text (button caption, label text, rich
    /// text content).
    fn text_mut(&mut self) -> Option<&mut dyn TextContent> {
        None
    }

    /// The label sub-widget attached to this widget, if any.
    fn label_mut(&mut self) -> Option<&mut dyn TextContent> {
        None
    }

    /// The widget's placeholder text slot, if it has one.
    fn placeholder_mut(&mut self) -> Option<&mut dyn TextContent> {
        None
    }

    fn grid_mut(&mut self) -> Option<&mut dyn GridColumns> {
        None
    }

    fn form_mut(&mut self) -> Option<&mut dyn FormFields> {
        None
    }

    fn login_mut(&mut self) -> Option<&mut dyn LoginPanel> {
        None
    }
}
