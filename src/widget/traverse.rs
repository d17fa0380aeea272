// SPDX-License-Identifier: MPL-2.0
//! Recursive localization of widget trees.

use super::Widget;
use crate::localizer::Localizer;

/// Localizes every user-visible string reachable from `widget`.
///
/// Dispatch order per node:
/// 1. grid capability: every column title is localized, nothing else;
/// 2. form capability: every field label is localized, nothing else;
/// 3. login capability: every non-empty label value is localized, then
///    the panel is refreshed once;
/// 4. a container recurses into its children only — its own text,
///    label, and placeholder are left alone;
/// 5. a leaf gets its display text, label sub-widget, and non-empty
///    placeholder localized, each when the capability is present.
pub fn localize_tree(localizer: &Localizer, widget: &mut dyn Widget) {
    if let Some(grid) = widget.grid_mut() {
        for index in 0..grid.column_count() {
            let title = grid.column_title(index);
            grid.set_column_title(index, localizer.localize_string(&title));
        }
        return;
    }

    if let Some(form) = widget.form_mut() {
        for index in 0..form.field_count() {
            let label = form.field_label(index);
            form.set_field_label(index, localizer.localize_string(&label));
        }
        return;
    }

    if let Some(login) = widget.login_mut() {
        for key in login.label_keys() {
            if let Some(value) = login.label(&key) {
                if !value.is_empty() {
                    login.set_label(&key, localizer.localize_string(&value));
                }
            }
        }
        login.refresh();
        return;
    }

    let children = widget.children_mut();
    if !children.is_empty() {
        for child in children.iter_mut() {
            localize_tree(localizer, child.as_mut());
        }
        return;
    }

    if let Some(text) = widget.text_mut() {
        let value = text.text();
        text.set_text(localizer.localize_string(&value));
    }
    if let Some(label) = widget.label_mut() {
        let value = label.text();
        label.set_text(localizer.localize_string(&value));
    }
    if let Some(placeholder) = widget.placeholder_mut() {
        let value = placeholder.text();
        if !value.is_empty() {
            placeholder.set_text(localizer.localize_string(&value));
        }
    }
}

/// Localizes a set of root widgets, e.g. every widget registered on a
/// page.
pub fn localize_forest(localizer: &Localizer, widgets: &mut [Box<dyn Widget>]) {
    for widget in widgets.iter_mut() {
        localize_tree(localizer, widget.as_mut());
    }
}
