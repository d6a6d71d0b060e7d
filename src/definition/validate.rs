use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};

use crate::charts::{Chart, ChartKind};
use crate::dashboards::{Filter, FilterFactory, LabelOrIndex};
use crate::definition::model::{ChartDef, DocumentDef, FilterDef};
use crate::foundation::error::VizError;
use crate::support::contracts::Customizable;
use crate::support::options::{OptionMap, OptionValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Build every entity of a document, collecting all failures instead of stopping at the first.
pub(crate) fn build_document(
    def: &DocumentDef,
    factory: &FilterFactory,
) -> Result<(Vec<Chart>, Vec<Filter>), SchemaErrors> {
    let mut errors = Vec::new();

    let mut charts = Vec::with_capacity(def.charts.len());
    let mut labels = HashSet::<&str>::new();
    for (i, chart_def) in def.charts.iter().enumerate() {
        let path = [SchemaPathElem::Field("charts"), SchemaPathElem::Index(i)];

        // Dashboards look charts up by label.
        if !labels.insert(chart_def.label.trim()) {
            errors.push(SchemaError::at(
                &[path.as_slice(), &[SchemaPathElem::Field("label")]].concat(),
                format!("duplicate chart label \"{}\"", chart_def.label.trim()),
            ));
        }

        match build_chart(chart_def) {
            Ok(chart) => charts.push(chart),
            Err(e) => errors.push(entity_error(&path, e)),
        }
    }

    let mut filters = Vec::with_capacity(def.filters.len());
    for (i, filter_def) in def.filters.iter().enumerate() {
        let path = [SchemaPathElem::Field("filters"), SchemaPathElem::Index(i)];
        match build_filter(filter_def, factory) {
            Ok(filter) => filters.push(filter),
            Err(e) => errors.push(entity_error(&path, e)),
        }
    }

    if errors.is_empty() {
        Ok((charts, filters))
    } else {
        Err(SchemaErrors { errors })
    }
}

fn build_chart(def: &ChartDef) -> Result<Chart, VizError> {
    let kind = ChartKind::from_type_name(&def.kind)?;
    let mut chart = Chart::new(kind, &def.label, &def.datatable, json_entries(&def.options))?;
    if !def.customize.is_empty() {
        chart.customize(json_entries(&def.customize));
    }
    Ok(chart)
}

fn build_filter(def: &FilterDef, factory: &FilterFactory) -> Result<Filter, VizError> {
    let column = LabelOrIndex::try_from(&def.column)?;
    factory.build(&def.kind, column, json_entries(&def.options))
}

fn json_entries(map: &Map<String, Value>) -> OptionMap {
    map.iter()
        .map(|(k, v)| (k.clone(), OptionValue::Json(v.clone())))
        .collect()
}

fn entity_error(entity: &[SchemaPathElem], err: VizError) -> SchemaError {
    let field = match &err {
        VizError::InvalidChartType(_) | VizError::InvalidFilterType(_) => Some("type"),
        VizError::InvalidLabel(_) => Some("label"),
        VizError::InvalidDataTable(_) => Some("datatable"),
        VizError::InvalidParamType { .. } => Some("column"),
        VizError::InvalidConfigProperty { .. }
        | VizError::InvalidConfigValue { .. }
        | VizError::InvalidElementId(_) => Some("options"),
        _ => None,
    };
    let path = match field {
        Some(name) => [entity, &[SchemaPathElem::Field(name)]].concat(),
        None => entity.to_vec(),
    };
    SchemaError::at(&path, err.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/definition/validate.rs"]
mod tests;
