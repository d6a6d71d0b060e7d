use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::foundation::error::{VizError, VizResult};

/// Nesting depth past which flattening gives up.
///
/// Option objects build a fresh value on every call, so a misbehaving object can expand forever.
pub const MAX_OPTION_DEPTH: usize = 64;

/// Ordered option entries, keyed by option name.
pub type OptionMap = IndexMap<String, OptionValue>;

/// A value object that knows how to turn itself into plain option data.
///
/// Styles, gradients and similar helpers implement this so they can be stored inside an
/// [`Options`] container and flattened on serialization.
pub trait OptionObject: fmt::Debug + Send + Sync {
    fn to_option_value(&self) -> OptionValue;
}

/// A single option value.
#[derive(Clone, Debug)]
pub enum OptionValue {
    /// Plain JSON data, already flat.
    Json(Value),
    /// List whose items may need flattening.
    List(Vec<OptionValue>),
    /// Nested mapping whose values may need flattening.
    Map(OptionMap),
    /// Opaque object flattened through [`OptionObject::to_option_value`].
    Object(Arc<dyn OptionObject>),
}

impl OptionValue {
    /// Wrap an option object.
    pub fn object(obj: impl OptionObject + 'static) -> Self {
        Self::Object(Arc::new(obj))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(Value::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_json().and_then(Value::as_bool)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_json().and_then(Value::as_f64)
    }

    /// Short name of the value's shape, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Json(Value::Null) => "null",
            Self::Json(Value::Bool(_)) => "bool",
            Self::Json(Value::Number(_)) => "number",
            Self::Json(Value::String(_)) => "string",
            Self::Json(Value::Array(_)) | Self::List(_) => "array",
            Self::Json(Value::Object(_)) | Self::Map(_) => "object",
            Self::Object(_) => "option object",
        }
    }

    /// Flatten into plain JSON.
    pub fn to_value(&self) -> VizResult<Value> {
        flatten(self, 0)
    }
}

fn flatten(value: &OptionValue, depth: usize) -> VizResult<Value> {
    if depth > MAX_OPTION_DEPTH {
        return Err(VizError::serde(format!(
            "option values nest deeper than {MAX_OPTION_DEPTH} levels"
        )));
    }
    match value {
        OptionValue::Json(v) => Ok(v.clone()),
        OptionValue::List(items) => items
            .iter()
            .map(|item| flatten(item, depth + 1))
            .collect::<VizResult<Vec<_>>>()
            .map(Value::Array),
        OptionValue::Map(map) => flatten_map(map, depth + 1).map(Value::Object),
        OptionValue::Object(obj) => flatten(&obj.to_option_value(), depth + 1),
    }
}

fn flatten_map(map: &OptionMap, depth: usize) -> VizResult<Map<String, Value>> {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        out.insert(key.clone(), flatten(value, depth)?);
    }
    Ok(out)
}

impl From<Value> for OptionValue {
    fn from(v: Value) -> Self {
        Self::Json(v)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(m: OptionMap) -> Self {
        Self::Map(m)
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(items: Vec<OptionValue>) -> Self {
        Self::List(items)
    }
}

impl From<Arc<dyn OptionObject>> for OptionValue {
    fn from(obj: Arc<dyn OptionObject>) -> Self {
        Self::Object(obj)
    }
}

macro_rules! json_scalar_into_option {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for OptionValue {
                fn from(v: $t) -> Self {
                    Self::Json(Value::from(v))
                }
            }
        )*
    };
}

json_scalar_into_option!(&str, String, bool, i32, i64, u32, u64, usize, f32, f64);

/// Convert a JSON object into option entries.
pub fn option_map(value: Value) -> VizResult<OptionMap> {
    match value {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| (k, OptionValue::Json(v)))
            .collect()),
        Value::Null => Ok(OptionMap::new()),
        other => Err(VizError::invalid_param(
            "an object of options",
            OptionValue::Json(other).kind_name(),
        )),
    }
}

/// Shape constraint attached to an allow-listed option key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Any,
    String,
    Bool,
    Number,
    /// A number, or a string that parses as a finite one.
    Numeric,
    Object,
    Array,
    StringOrObject,
}

impl ValueKind {
    pub fn accepts(self, value: &OptionValue) -> bool {
        use OptionValue as O;
        match self {
            Self::Any => true,
            Self::String => matches!(value, O::Json(Value::String(_))),
            Self::Bool => matches!(value, O::Json(Value::Bool(_))),
            Self::Number => matches!(value, O::Json(Value::Number(_))),
            Self::Numeric => match value {
                O::Json(Value::Number(_)) => true,
                O::Json(Value::String(s)) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
                _ => false,
            },
            Self::Object => matches!(
                value,
                O::Json(Value::Object(_)) | O::Map(_) | O::Object(_)
            ),
            Self::Array => matches!(value, O::Json(Value::Array(_)) | O::List(_)),
            Self::StringOrObject => {
                Self::String.accepts(value) || Self::Object.accepts(value)
            }
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Any => "any value",
            Self::String => "a string",
            Self::Bool => "a bool",
            Self::Number => "a number",
            Self::Numeric => "a number or finite numeric string",
            Self::Object => "an object",
            Self::Array => "an array",
            Self::StringOrObject => "a string or an object",
        }
    }
}

/// One allow-listed option key.
#[derive(Clone, Copy, Debug)]
pub struct OptionRule {
    pub key: &'static str,
    pub kind: ValueKind,
}

/// Shorthand for building rule tables.
pub const fn rule(key: &'static str, kind: ValueKind) -> OptionRule {
    OptionRule { key, kind }
}

/// Allow-list for a strict [`Options`] container.
///
/// Rules are grouped in layers so entity families can share a common table and add their own
/// keys on top.
#[derive(Debug)]
pub struct OptionSchema {
    pub owner: &'static str,
    pub layers: &'static [&'static [OptionRule]],
}

impl OptionSchema {
    pub fn rule(&self, key: &str) -> Option<&'static OptionRule> {
        self.layers
            .iter()
            .copied()
            .flat_map(|layer| layer.iter())
            .find(|r| r.key == key)
    }

    pub fn allows(&self, key: &str) -> bool {
        self.rule(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.layers
            .iter()
            .copied()
            .flat_map(|layer| layer.iter())
            .map(|r| r.key)
    }

    /// Check one entry against the allow-list and its value constraint.
    pub fn check(&self, key: &str, value: &OptionValue) -> VizResult<()> {
        let Some(rule) = self.rule(key) else {
            return Err(VizError::invalid_property(self.owner, key));
        };
        if !rule.kind.accepts(value) {
            return Err(VizError::invalid_value(
                key,
                format!("{}, got {}", rule.kind.describe(), value.kind_name()),
            ));
        }
        Ok(())
    }
}

/// Ordered configuration bag with optional allow-list validation.
#[derive(Clone, Debug, Default)]
pub struct Options {
    values: OptionMap,
    schema: Option<&'static OptionSchema>,
}

impl Options {
    /// Empty strict container.
    pub fn new(schema: &'static OptionSchema) -> Self {
        Self {
            values: OptionMap::new(),
            schema: Some(schema),
        }
    }

    /// Empty container that accepts any key.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Build a container from initial entries, validating all of them first.
    pub fn with_values(schema: Option<&'static OptionSchema>, values: OptionMap) -> VizResult<Self> {
        let mut options = Self {
            values: OptionMap::new(),
            schema,
        };
        options.merge(values)?;
        Ok(options)
    }

    pub fn schema(&self) -> Option<&'static OptionSchema> {
        self.schema
    }

    pub fn is_strict(&self) -> bool {
        self.schema.is_some()
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> VizResult<&OptionValue> {
        self.values
            .get(key)
            .ok_or_else(|| VizError::MissingOption(key.to_string()))
    }

    /// Stored value, or `default` when the key is absent.
    pub fn get_or(&self, key: &str, default: impl Into<OptionValue>) -> OptionValue {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> &OptionMap {
        &self.values
    }

    /// Set one entry through the allow-list.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> VizResult<()> {
        let key = key.into();
        let value = value.into();
        if let Some(schema) = self.schema {
            schema.check(&key, &value)?;
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Merge entries through the allow-list.
    ///
    /// Every entry is checked before any is stored, so a rejected merge leaves the container
    /// untouched. Existing keys keep their position; new keys are appended in input order.
    pub fn merge(&mut self, entries: OptionMap) -> VizResult<()> {
        if let Some(schema) = self.schema {
            for (key, value) in &entries {
                schema.check(key, value)?;
            }
        }
        self.values.extend(entries);
        Ok(())
    }

    /// Set one entry without consulting the allow-list.
    pub fn set_unchecked(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        self.log_bypass(&key);
        self.values.insert(key, value.into());
    }

    /// Merge entries without consulting the allow-list.
    pub fn merge_unchecked(&mut self, entries: OptionMap) {
        for key in entries.keys() {
            self.log_bypass(key);
        }
        self.values.extend(entries);
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.values.shift_remove(key)
    }

    /// Flatten every entry into a plain JSON object.
    pub fn to_value(&self) -> VizResult<Value> {
        flatten_map(&self.values, 0).map(Value::Object)
    }

    fn log_bypass(&self, key: &str) {
        if let Some(schema) = self.schema
            && !schema.allows(key)
        {
            tracing::debug!(owner = schema.owner, key, "accepting option outside allow-list");
        }
    }
}

impl OptionObject for Options {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Map(self.values.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/support/options.rs"]
mod tests;
