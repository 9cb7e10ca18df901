//! Parser for the `Field: value` paragraph format.
//!
//! Port CONTROL files and the installed status database both use it:
//! paragraphs are separated by blank lines, and a line starting with a
//! space or tab continues the value of the previous field.

use anyhow::Result;
use std::collections::BTreeMap;

/// One paragraph of `Field: value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    fields: BTreeMap<String, String>,
}

impl Paragraph {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Get a field that must be present and non-empty.
    pub fn required(&self, field: &str) -> Result<&str> {
        match self.get(field) {
            Some(value) if !value.is_empty() => Ok(value),
            Some(_) => anyhow::bail!("Field '{}' is empty", field),
            None => anyhow::bail!("Missing required field '{}'", field),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, field: &str, value: &str) {
        self.fields.insert(field.to_string(), value.to_string());
    }
}

/// Parse every paragraph in `content`.
pub fn parse_paragraphs(content: &str) -> Result<Vec<Paragraph>> {
    let mut paragraphs = Vec::new();
    let mut current = Paragraph::default();
    let mut last_field: Option<String> = None;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;

        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            last_field = None;
            continue;
        }

        if line.starts_with([' ', '\t']) {
            let value = last_field
                .as_ref()
                .and_then(|field| current.fields.get_mut(field));
            match value {
                Some(value) => {
                    value.push('\n');
                    value.push_str(line.trim());
                }
                None => anyhow::bail!(
                    "line {}: continuation line without a preceding field",
                    line_no
                ),
            }
            continue;
        }

        let Some((field, value)) = line.split_once(':') else {
            anyhow::bail!("line {}: expected 'Field: value', found {:?}", line_no, line);
        };
        let field = field.trim();
        if field.is_empty() {
            anyhow::bail!("line {}: field name is empty", line_no);
        }

        current.insert(field, value.trim());
        last_field = Some(field.to_string());
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs)
}
