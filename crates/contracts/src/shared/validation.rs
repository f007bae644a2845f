//! Form validation helpers on top of the `validator` derive.

use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Rejects strings that are empty after trimming.
///
/// `length(min = 1)` alone lets a single space through.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("no puede estar vacío"));
        return Err(err);
    }
    Ok(())
}

/// Flattens validator output into one line: `field: message; field: message`.
///
/// Fields are sorted so the text is stable between renders. Struct-level
/// (`schema`) errors are printed without a field prefix.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            if field == "__all__" {
                messages.join(", ")
            } else {
                format!("{}: {}", field, messages.join(", "))
            }
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Validate a form and return the flattened message on failure.
pub fn validate_form<F: Validate>(form: &F) -> Result<(), String> {
    form.validate().map_err(|e| validation_message(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, max = 5, message = "longitud inválida"))]
        name: String,
        #[validate(range(min = 1, message = "seleccione un valor"))]
        parent_id: i64,
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(not_blank("  ").is_err());
        assert!(not_blank("x").is_ok());
    }

    #[test]
    fn message_lists_every_field_sorted() {
        let probe = Probe {
            name: "too long".into(),
            parent_id: 0,
        };
        let msg = validate_form(&probe).unwrap_err();
        assert_eq!(msg, "name: longitud inválida; parent_id: seleccione un valor");
    }

    #[test]
    fn valid_form_passes() {
        let probe = Probe {
            name: "ok".into(),
            parent_id: 3,
        };
        assert!(validate_form(&probe).is_ok());
    }
}
