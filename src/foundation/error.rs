pub type VizResult<T> = Result<T, VizError>;

#[derive(thiserror::Error, Debug)]
pub enum VizError {
    #[error("invalid configuration property \"{property}\" for {owner}")]
    InvalidConfigProperty { owner: String, property: String },

    #[error("invalid value for configuration property \"{property}\": expected {expected}")]
    InvalidConfigValue { property: String, expected: String },

    #[error("invalid filter type \"{0}\"")]
    InvalidFilterType(String),

    #[error("invalid chart type \"{0}\"")]
    InvalidChartType(String),

    #[error("invalid parameter type: expected {expected}, got {got}")]
    InvalidParamType { expected: String, got: String },

    #[error("invalid label: {0}")]
    InvalidLabel(String),

    #[error("invalid element id: {0}")]
    InvalidElementId(String),

    #[error("invalid datatable: {0}")]
    InvalidDataTable(String),

    #[error("missing option \"{0}\"")]
    MissingOption(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VizError {
    pub fn invalid_property(owner: impl Into<String>, property: impl Into<String>) -> Self {
        Self::InvalidConfigProperty {
            owner: owner.into(),
            property: property.into(),
        }
    }

    pub fn invalid_value(property: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            property: property.into(),
            expected: expected.into(),
        }
    }

    pub fn invalid_param(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::InvalidParamType {
            expected: expected.into(),
            got: got.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for VizError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
