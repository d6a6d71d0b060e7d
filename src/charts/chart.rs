use serde::Serialize;
use serde_json::{Map, Value};

use crate::charts::kind::{CHART_WRAP_TYPE, ChartKind, ChartMeta};
use crate::foundation::error::{VizError, VizResult};
use crate::foundation::ids::{ElementId, Label};
use crate::support::contracts::{
    Customizable, DataTable, HasDataTable, Jsonable, Renderable, Wrappable,
};
use crate::support::options::{OptionMap, OptionValue, Options};

const ELEMENT_ID_KEY: &str = "elementId";
const EVENTS_KEY: &str = "events";

/// A single visualization: label, extracted datatable and options.
///
/// Everything is validated on construction; serialization never re-validates.
#[derive(Clone, Debug)]
pub struct Chart {
    meta: &'static ChartMeta,
    label: Label,
    datatable: Value,
    options: Options,
    element_id: Option<ElementId>,
}

impl Chart {
    /// Build a chart of `kind`.
    ///
    /// The datatable is extracted immediately. An `elementId` entry in `options` is lifted out
    /// of the option bag and stored as the chart's [`ElementId`].
    #[tracing::instrument(skip_all, fields(kind = kind.type_tag()))]
    pub fn new(
        kind: ChartKind,
        label: impl AsRef<str>,
        datatable: &dyn DataTable,
        options: OptionMap,
    ) -> VizResult<Self> {
        let meta = kind.meta();
        let label = Label::new(label)?;

        let datatable = datatable.underlying_table()?;
        if datatable.is_null() {
            return Err(VizError::InvalidDataTable(format!(
                "chart \"{label}\" was given an empty datatable"
            )));
        }

        let mut options = Options::with_values(Some(&meta.schema), options)?;
        for &(key, value) in meta.defaults {
            if !options.has(key) {
                options.set(key, value)?;
            }
        }
        let element_id = options
            .remove(ELEMENT_ID_KEY)
            .map(|v| element_id_from(&v))
            .transpose()?;

        tracing::debug!(label = %label, options = options.len(), "chart created");
        Ok(Self {
            meta,
            label,
            datatable,
            options,
            element_id,
        })
    }

    pub fn kind(&self) -> ChartKind {
        self.meta.kind
    }

    pub fn events(&self) -> Option<&OptionValue> {
        self.options.get(EVENTS_KEY).ok()
    }

    pub fn has_events(&self) -> bool {
        self.options.has(EVENTS_KEY)
    }

    /// Set one allow-listed option.
    pub fn set_option(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> VizResult<&mut Self> {
        let key = key.into();
        let value = value.into();
        if key == ELEMENT_ID_KEY {
            self.meta.schema.check(&key, &value)?;
            self.element_id = Some(element_id_from(&value)?);
        } else {
            self.options.set(key, value)?;
        }
        Ok(self)
    }

    pub fn set_element_id(&mut self, id: ElementId) -> &mut Self {
        self.element_id = Some(id);
        self
    }
}

fn element_id_from(value: &OptionValue) -> VizResult<ElementId> {
    let s = value.as_str().ok_or_else(|| {
        VizError::InvalidElementId(format!(
            "elementId must be a string, got {}",
            value.kind_name()
        ))
    })?;
    ElementId::new(s)
}

impl Renderable for Chart {
    fn label(&self) -> &Label {
        &self.label
    }

    fn element_id(&self) -> Option<&ElementId> {
        self.element_id.as_ref()
    }

    fn type_tag(&self) -> &'static str {
        self.meta.type_tag
    }

    fn version(&self) -> &'static str {
        self.meta.version
    }

    fn js_package(&self) -> &'static str {
        self.meta.js_package
    }
}

impl Wrappable for Chart {
    fn wrap_type(&self) -> &'static str {
        CHART_WRAP_TYPE
    }

    fn wrapped_type(&self) -> String {
        self.meta.type_tag.to_string()
    }
}

impl Customizable for Chart {
    fn options(&self) -> &Options {
        &self.options
    }

    /// Pass options straight through to the rendering runtime.
    ///
    /// Keys the allow-list does not know are accepted unchanged. An `elementId` entry replaces
    /// the chart's element id instead; a malformed one is logged and dropped.
    fn customize(&mut self, mut options: OptionMap) -> &mut Self {
        if let Some(value) = options.shift_remove(ELEMENT_ID_KEY) {
            match element_id_from(&value) {
                Ok(id) => self.element_id = Some(id),
                Err(err) => tracing::warn!(label = %self.label, %err, "ignoring elementId"),
            }
        }
        self.options.merge_unchecked(options);
        self
    }
}

impl HasDataTable for Chart {
    fn data_table(&self) -> &Value {
        &self.datatable
    }
}

impl Jsonable for Chart {
    fn to_value(&self) -> VizResult<Value> {
        let mut out = Map::new();
        out.insert("type".into(), Value::from(self.type_tag()));
        out.insert("label".into(), Value::from(self.label.as_str()));
        out.insert("options".into(), self.options.to_value()?);
        out.insert("datatable".into(), self.datatable.clone());
        out.insert(
            "element_id".into(),
            self.element_id
                .as_ref()
                .map_or(Value::Null, |id| Value::from(id.as_str())),
        );
        Ok(Value::Object(out))
    }
}

impl Serialize for Chart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/charts/chart.rs"]
mod tests;
