//! Rendering of validation outcomes for display.

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::models::ValidatedUser;
use crate::utils::error_messages::{FieldErrorSet, FieldPath, FormField};

/// Serializes an accepted user to JSON
pub fn render_user(user: &ValidatedUser, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(user)
    } else {
        serde_json::to_string(user)
    }
}

/// Lists the errors grouped under each field label, in form order.
///
/// Errors of nested entries are prefixed with their full path so the user
/// can tell which row they belong to.
pub fn render_errors(errors: &FieldErrorSet) -> String {
    let mut rendered = String::new();

    for field in FormField::iter() {
        let mut field_errors = errors.iter().filter(|(path, _)| path.field() == field).peekable();
        if field_errors.peek().is_none() {
            continue;
        }

        // Writing to a String cannot fail
        let _ = writeln!(rendered, "{}", field.label());
        for (path, error) in field_errors {
            if *path == FieldPath::root(field) {
                let _ = writeln!(rendered, "  - {error}");
            } else {
                let _ = writeln!(rendered, "  - {path}: {error}");
            }
        }
    }

    rendered
}
