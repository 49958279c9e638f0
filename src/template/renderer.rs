//! Placeholder substitution.
//!
//! Templates contain placeholders of the form `{{identifier}}`. Every
//! occurrence of a placeholder is replaced with the field value bound to
//! its identifier. The scan is a single left-to-right pass, so field
//! values are emitted as literal text and never re-scanned.

use std::collections::HashMap;

use crate::error::{PayrollError, PayrollResult};

/// Renders a template by substituting every `{{identifier}}` placeholder
/// with its field value.
///
/// The substitution is total: a placeholder with no matching key fails
/// with `MissingField`, so a rendered document can never contain raw
/// placeholder residue. Keys in `fields` that no placeholder references
/// are ignored.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use payslip_engine::template::render;
///
/// let fields = HashMap::from([("name".to_string(), "Ana".to_string())]);
/// assert_eq!(render("Hello {{name}}", &fields).unwrap(), "Hello Ana");
/// ```
pub fn render(template: &str, fields: &HashMap<String, String>) -> PayrollResult<String> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0usize;

    while let Some(open) = rest.find("{{") {
        output.push_str(&rest[..open]);

        let after_open = &rest[open + 2..];
        let close = after_open
            .find("}}")
            .ok_or(PayrollError::UnclosedPlaceholder {
                position: consumed + open,
            })?;

        let identifier = &after_open[..close];
        let value = fields
            .get(identifier)
            .ok_or_else(|| PayrollError::MissingField {
                placeholder: identifier.to_string(),
            })?;
        output.push_str(value);

        consumed += open + 2 + close + 2;
        rest = &after_open[close + 2..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Returns the distinct placeholder identifiers referenced by a
/// template, in order of first appearance.
///
/// Fails with `UnclosedPlaceholder` on a `{{` with no matching `}}`.
pub fn placeholders(template: &str) -> PayrollResult<Vec<String>> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = template;
    let mut consumed = 0usize;

    while let Some(open) = rest.find("{{") {
        let after_open = &rest[open + 2..];
        let close = after_open
            .find("}}")
            .ok_or(PayrollError::UnclosedPlaceholder {
                position: consumed + open,
            })?;

        let identifier = &after_open[..close];
        if !found.iter().any(|existing| existing == identifier) {
            found.push(identifier.to_string());
        }

        consumed += open + 2 + close + 2;
        rest = &after_open[close + 2..];
    }

    Ok(found)
}
