//! JSON documents declaring a set of charts and filters.
//!
//! A document is parsed as-is, then every entry is built through the same constructors the
//! programmatic API uses. All failures are reported together, each addressed by its JSON path.

mod model;
mod validate;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};

use crate::charts::Chart;
use crate::dashboards::{Filter, FilterFactory};
use crate::definition::model::DocumentDef;
use crate::definition::validate::build_document;
use crate::foundation::error::{VizError, VizResult};
use crate::foundation::ids::Label;
use crate::support::contracts::{Jsonable, Renderable};

/// Parsed, not yet validated, definition document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    def: DocumentDef,
}

impl Document {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> VizResult<Self> {
        let def: DocumentDef = serde_json::from_reader(r)
            .map_err(|e| VizError::validation(format!("parse definition JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> VizResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            VizError::validation(format!("open definition JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_json_str(s: &str) -> VizResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn chart_count(&self) -> usize {
        self.def.charts.len()
    }

    pub fn filter_count(&self) -> usize {
        self.def.filters.len()
    }

    /// Check every entry without keeping the built entities.
    pub fn validate(&self) -> VizResult<()> {
        self.build().map(|_| ())
    }

    /// Build every entry with the default filter registry.
    pub fn build(&self) -> VizResult<Bundle> {
        self.build_with(&FilterFactory::default())
    }

    /// Build every entry, resolving filters through `factory`.
    #[tracing::instrument(skip_all, fields(charts = self.def.charts.len(), filters = self.def.filters.len()))]
    pub fn build_with(&self, factory: &FilterFactory) -> VizResult<Bundle> {
        let (charts, filters) = build_document(&self.def, factory).map_err(|e| {
            tracing::warn!(errors = e.errors.len(), "definition rejected");
            VizError::validation(format!("definition validation failed:\n{e}"))
        })?;
        Ok(Bundle { charts, filters })
    }
}

/// Charts and filters built from one document.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub charts: Vec<Chart>,
    pub filters: Vec<Filter>,
}

impl Bundle {
    pub fn chart(&self, label: &Label) -> Option<&Chart> {
        self.charts.iter().find(|c| c.label() == label)
    }
}

impl Jsonable for Bundle {
    fn to_value(&self) -> VizResult<Value> {
        let charts = self
            .charts
            .iter()
            .map(Jsonable::to_value)
            .collect::<VizResult<Vec<_>>>()?;
        let filters = self
            .filters
            .iter()
            .map(Jsonable::to_value)
            .collect::<VizResult<Vec<_>>>()?;

        let mut out = Map::new();
        out.insert("charts".into(), Value::Array(charts));
        out.insert("filters".into(), Value::Array(filters));
        Ok(Value::Object(out))
    }
}
