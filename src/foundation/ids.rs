use std::fmt;

use crate::foundation::error::{VizError, VizResult};

/// Identifying label of a chart.
///
/// Dashboards look charts up by label, so it is stored trimmed and can never be empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Create a validated label.
    pub fn new(label: impl AsRef<str>) -> VizResult<Self> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            return Err(VizError::InvalidLabel(
                "label must be a non-empty string".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Label {
    type Error = VizError;

    fn try_from(value: &str) -> VizResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Label {
    type Error = VizError;

    fn try_from(value: String) -> VizResult<Self> {
        Self::new(value)
    }
}

/// Id of the DOM element a chart renders into.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create a validated element id: non-empty and free of whitespace.
    pub fn new(id: impl AsRef<str>) -> VizResult<Self> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(VizError::InvalidElementId(
                "element id must be a non-empty string".to_string(),
            ));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(VizError::InvalidElementId(format!(
                "element id \"{trimmed}\" must not contain whitespace"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ElementId {
    type Error = VizError;

    fn try_from(value: &str) -> VizResult<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ids.rs"]
mod tests;
