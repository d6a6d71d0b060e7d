use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DocumentDef {
    #[serde(default)]
    pub(crate) charts: Vec<ChartDef>,
    #[serde(default)]
    pub(crate) filters: Vec<FilterDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ChartDef {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) label: String,
    pub(crate) datatable: Value,
    #[serde(default)]
    pub(crate) options: Map<String, Value>,
    // Passed through `Chart::customize`, so keys outside the allow-list are fine here.
    #[serde(default)]
    pub(crate) customize: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FilterDef {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) column: Value,
    #[serde(default)]
    pub(crate) options: Map<String, Value>,
}
