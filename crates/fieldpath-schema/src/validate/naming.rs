use crate::{MAX_CLASS_NAME_LEN, MAX_FIELD_NAME_LEN};

/// Ensure a class ident is non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_class_ident(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("class ident is empty".to_string());
    }
    if name.len() > MAX_CLASS_NAME_LEN {
        return Err(format!(
            "class ident '{name}' exceeds max length {MAX_CLASS_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("class ident '{name}' must be ASCII"));
    }

    Ok(())
}

/// Ensure a field ident is non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_field_ident(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("field ident is empty".to_string());
    }
    if name.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "field ident '{name}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("field ident '{name}' must be ASCII"));
    }

    Ok(())
}
