//! Typed custom-field values with boundary validation.
//!
//! Host content platforms report custom fields as loosely-typed JSON:
//! an unset field may arrive as `null`, `false`, or an empty string,
//! and a set field as a string or an object. The `from_value`
//! constructors normalize all absent encodings to `None` and validate
//! the shape of present values, so downstream rendering code only ever
//! handles well-typed optionals.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An optional structured link: title, URL, and an optional target.
///
/// An empty `url` is a valid state — the rendered anchor falls back to
/// a non-navigating placeholder href but is still emitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkField {
    /// Link text, taken verbatim.
    pub title: String,
    /// Link destination. May be empty.
    #[serde(default)]
    pub url: String,
    /// `target` attribute value (e.g., `_blank`), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl LinkField {
    /// Validate a raw field value into an optional link.
    ///
    /// Absent encodings (`null`, `false`, `""`, missing key) yield
    /// `None`. A present link must be an object; `title`, `url`, and
    /// `target` are read as strings, each defaulting to absent/empty
    /// when missing.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Shape` if the value is present but not an
    /// object, or if a sub-field has a non-string type.
    pub fn from_value(field: &str, value: &Value) -> Result<Option<Self>, FieldError> {
        if is_absent(value) {
            return Ok(None);
        }
        let Value::Object(map) = value else {
            return Err(FieldError::shape(field, "link object", value));
        };
        let title = read_string(field, "title", map)?.unwrap_or_default();
        let url = read_string(field, "url", map)?.unwrap_or_default();
        let target = read_string(field, "target", map)?;
        Ok(Some(Self { title, url, target }))
    }
}

/// An image reference: URL plus optional alternative text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image URL.
    pub url: String,
    /// Alternative text, if the host provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl ImageRef {
    /// Create an image reference from a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
        }
    }

    /// Set the alternative text.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Validate a raw field value into an optional image reference.
    ///
    /// Hosts report images either as a bare URL string or as an object
    /// with a `url` key (and optionally `alt`). Absent encodings yield
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Shape` for a present value that is neither
    /// a string nor an object with a string `url`.
    pub fn from_value(field: &str, value: &Value) -> Result<Option<Self>, FieldError> {
        if is_absent(value) {
            return Ok(None);
        }
        match value {
            Value::String(url) => Ok(Some(Self::new(url.clone()))),
            Value::Object(map) => {
                let Some(url) = read_string(field, "url", map)? else {
                    return Err(FieldError::shape(field, "image with url", value));
                };
                let alt_text = read_string(field, "alt", map)?;
                Ok(Some(Self { url, alt_text }))
            }
            _ => Err(FieldError::shape(field, "image url or object", value)),
        }
    }
}

/// The singleton greeting block content, read once per page render.
///
/// Any subset of the three fields may be absent; rendering degrades to
/// omitting the corresponding markup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingContent {
    /// Greeting image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    /// Greeting heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Greeting body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl GreetingContent {
    /// Validate a raw field map into greeting content.
    ///
    /// Reads `greeting_image`, `greeting_title`, and `greeting_text`;
    /// each is independently optional.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Shape` if a present field has the wrong
    /// shape.
    pub fn from_fields(fields: &serde_json::Map<String, Value>) -> Result<Self, FieldError> {
        let image = match fields.get("greeting_image") {
            Some(value) => ImageRef::from_value("greeting_image", value)?,
            None => None,
        };
        let title = optional_text("greeting_title", fields.get("greeting_title"))?;
        let text = optional_text("greeting_text", fields.get("greeting_text"))?;
        Ok(Self { image, title, text })
    }

    /// True if all three fields are absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.title.is_none() && self.text.is_none()
    }
}

/// Field validation error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A present field value had an unexpected shape.
    #[error("field `{field}`: expected {expected}, got {found}")]
    Shape {
        /// Field name as reported by the host.
        field: String,
        /// Human-readable expected shape.
        expected: &'static str,
        /// Human-readable found type.
        found: &'static str,
    },
}

impl FieldError {
    fn shape(field: &str, expected: &'static str, value: &Value) -> Self {
        Self::Shape {
            field: field.to_owned(),
            expected,
            found: type_name(value),
        }
    }
}

/// True for the encodings hosts use for an unset field.
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Read an optional string sub-field, treating absent encodings as `None`.
fn read_string(
    field: &str,
    key: &str,
    map: &serde_json::Map<String, Value>,
) -> Result<Option<String>, FieldError> {
    match map.get(key) {
        None => Ok(None),
        Some(value) if is_absent(value) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(FieldError::Shape {
            field: format!("{field}.{key}"),
            expected: "string",
            found: type_name(other),
        }),
    }
}

/// Validate an optional text field (missing key counts as absent).
fn optional_text(field: &str, value: Option<&Value>) -> Result<Option<String>, FieldError> {
    match value {
        None => Ok(None),
        Some(value) if is_absent(value) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(FieldError::shape(field, "string", other)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
