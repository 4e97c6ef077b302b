//! Document attributes declared in YAML front matter.
//!
//! Recognized keys are `title`, `order`, `new` and `hidden`. Everything else
//! is carried through untouched in [`DocumentMeta::extra`] and serialized
//! next to the recognized keys.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Attributes of a documentation file.
///
/// `order`, `new` and `hidden` keep the value as declared; readers apply
/// truthiness and numeric coercion, so an oddly typed value never fails a
/// parse.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentMeta {
    /// Display title. Falls back to the filename when not declared.
    pub title: String,

    /// Position among siblings in the menu, ascending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Value>,

    /// Marks the page as new in the navigation UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<Value>,

    /// Keeps the page out of the menu when truthy. It can still be fetched
    /// directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<Value>,

    /// Unrecognized keys, passed through as declared.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Front matter fields as declared, before the title fallback applies.
#[derive(Deserialize)]
struct DeclaredMeta {
    #[serde(default, deserialize_with = "deserialize_title")]
    title: Option<String>,
    #[serde(default)]
    order: Option<Value>,
    #[serde(default)]
    new: Option<Value>,
    #[serde(default)]
    hidden: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Accept scalar titles (`title: 404`) as their string form.
fn deserialize_title<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    match Option::<serde_yaml::Value>::deserialize(d)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(D::Error::custom("title must be a scalar value")),
    }
}

impl DocumentMeta {
    /// Attributes of a file that declares nothing.
    #[must_use]
    pub fn with_title(filename: &str) -> Self {
        Self {
            title: filename.to_owned(),
            order: None,
            new: None,
            hidden: None,
            extra: BTreeMap::new(),
        }
    }

    /// Build attributes from a parsed YAML header.
    ///
    /// The title defaults to `filename`. Declared attributes are merged over
    /// that default when they form a key/value mapping; any other YAML value
    /// (scalar, sequence, empty header) declares nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if `title` is not a scalar.
    pub fn from_attributes(
        filename: &str,
        attributes: Option<serde_yaml::Value>,
    ) -> Result<Self, serde_yaml::Error> {
        let mut meta = Self::with_title(filename);
        meta.merge_attributes(attributes)?;
        Ok(meta)
    }

    /// Merge declared attributes over these ones.
    ///
    /// Only a key/value mapping declares anything; keys it names replace the
    /// current values.
    ///
    /// # Errors
    ///
    /// Returns an error if `title` is not a scalar.
    pub fn merge_attributes(
        &mut self,
        attributes: Option<serde_yaml::Value>,
    ) -> Result<(), serde_yaml::Error> {
        let Some(value @ serde_yaml::Value::Mapping(_)) = attributes else {
            return Ok(());
        };
        let declared = serde_yaml::from_value::<DeclaredMeta>(value)?;

        if let Some(title) = declared.title {
            self.title = title;
        }
        if declared.order.is_some() {
            self.order = declared.order;
        }
        if declared.new.is_some() {
            self.new = declared.new;
        }
        if declared.hidden.is_some() {
            self.hidden = declared.hidden;
        }
        self.extra.extend(declared.extra);
        Ok(())
    }

    /// Whether the page is excluded from the menu (`hidden` is truthy).
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden.as_ref().is_some_and(is_truthy)
    }

    /// Compare by `order` ascending.
    ///
    /// Falsy orders (missing, `0`, `false`, empty string) and values that
    /// aren't numeric sort last.
    #[must_use]
    pub fn cmp_order(&self, other: &Self) -> Ordering {
        self.order_key().total_cmp(&other.order_key())
    }

    fn order_key(&self) -> f64 {
        self.order
            .as_ref()
            .filter(|order| is_truthy(order))
            .and_then(numeric_value)
            .filter(|n| !n.is_nan())
            .unwrap_or(f64::INFINITY)
    }
}

/// Truthiness of a declared value: `null`, `false`, `0`, `NaN` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numeric reading of a declared value (`"2"` reads as 2).
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
