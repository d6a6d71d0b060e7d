use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::foundation::error::{VizError, VizResult};
use crate::support::contracts::{Jsonable, Wrappable};
use crate::support::options::{OptionMap, OptionRule, OptionSchema, OptionValue, Options, ValueKind as K, rule};

/// Wrapper key a filter's type is stored under inside a dashboard.
pub const FILTER_WRAP_TYPE: &str = "controlType";

const COLUMN_LABEL_KEY: &str = "filterColumnLabel";
const COLUMN_INDEX_KEY: &str = "filterColumnIndex";

/// Datatable column a filter operates on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum LabelOrIndex {
    Label(String),
    Index(usize),
}

impl fmt::Display for LabelOrIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => write!(f, "\"{label}\""),
            Self::Index(i) => write!(f, "#{i}"),
        }
    }
}

impl From<&str> for LabelOrIndex {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for LabelOrIndex {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<usize> for LabelOrIndex {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl TryFrom<i64> for LabelOrIndex {
    type Error = VizError;

    fn try_from(index: i64) -> VizResult<Self> {
        usize::try_from(index)
            .map(Self::Index)
            .map_err(|_| VizError::invalid_param("a non-negative column index", index.to_string()))
    }
}

impl TryFrom<&Value> for LabelOrIndex {
    type Error = VizError;

    fn try_from(value: &Value) -> VizResult<Self> {
        match value {
            Value::String(s) => Ok(Self::Label(s.clone())),
            Value::Number(n) => match n.as_u64() {
                Some(i) => usize::try_from(i)
                    .map(Self::Index)
                    .map_err(|_| VizError::invalid_param("a column index", n.to_string())),
                None => Err(VizError::invalid_param(
                    "a string label or non-negative integer index",
                    n.to_string(),
                )),
            },
            other => Err(VizError::invalid_param(
                "a string label or non-negative integer index",
                OptionValue::Json(other.clone()).kind_name(),
            )),
        }
    }
}

/// Static description of one filter variant.
#[derive(Debug)]
pub struct FilterMeta {
    pub type_tag: &'static str,
    pub schema: OptionSchema,
}

impl FilterMeta {
    /// Control type the rendering runtime knows this variant by.
    pub fn control_type(&self) -> String {
        format!("{}Filter", self.type_tag)
    }
}

// Column keys are written from the bound column only, so they are not allow-listed.
const COMMON: &[OptionRule] = &[rule("ui", K::Object)];

pub static CATEGORY: FilterMeta = FilterMeta {
    type_tag: "Category",
    schema: OptionSchema {
        owner: "CategoryFilter",
        layers: &[
            COMMON,
            &[rule("useFormattedValue", K::Bool), rule("values", K::Array)],
        ],
    },
};

pub static CHART_RANGE: FilterMeta = FilterMeta {
    type_tag: "ChartRange",
    schema: OptionSchema {
        owner: "ChartRangeFilter",
        layers: &[COMMON],
    },
};

pub static DATE_RANGE: FilterMeta = FilterMeta {
    type_tag: "DateRange",
    schema: OptionSchema {
        owner: "DateRangeFilter",
        layers: &[COMMON, &[rule("maxValue", K::Any), rule("minValue", K::Any)]],
    },
};

pub static NUMBER_RANGE: FilterMeta = FilterMeta {
    type_tag: "NumberRange",
    schema: OptionSchema {
        owner: "NumberRangeFilter",
        layers: &[
            COMMON,
            &[rule("maxValue", K::Numeric), rule("minValue", K::Numeric)],
        ],
    },
};

pub static STRING: FilterMeta = FilterMeta {
    type_tag: "String",
    schema: OptionSchema {
        owner: "StringFilter",
        layers: &[
            COMMON,
            &[
                rule("caseSensitive", K::Bool),
                rule("matchType", K::String),
                rule("useFormattedValue", K::Bool),
            ],
        ],
    },
};

/// A dashboard control bound to one datatable column.
#[derive(Clone, Debug)]
pub struct Filter {
    meta: &'static FilterMeta,
    column: LabelOrIndex,
    options: Options,
}

impl Filter {
    /// Build a filter of the variant described by `meta`.
    ///
    /// Most callers go through [`crate::FilterFactory`], which resolves `meta` from a type name.
    pub fn new(
        meta: &'static FilterMeta,
        column: LabelOrIndex,
        options: OptionMap,
    ) -> VizResult<Self> {
        if let LabelOrIndex::Label(label) = &column
            && label.trim().is_empty()
        {
            return Err(VizError::invalid_param(
                "a non-empty column label or a column index",
                "an empty string",
            ));
        }
        let options = Options::with_values(Some(&meta.schema), options)?;
        Ok(Self {
            meta,
            column,
            options,
        })
    }

    pub fn meta(&self) -> &'static FilterMeta {
        self.meta
    }

    pub fn type_tag(&self) -> &'static str {
        self.meta.type_tag
    }

    pub fn control_type(&self) -> String {
        self.meta.control_type()
    }

    pub fn column(&self) -> &LabelOrIndex {
        &self.column
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_option(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> VizResult<&mut Self> {
        self.options.set(key, value)?;
        Ok(self)
    }
}

impl Wrappable for Filter {
    fn wrap_type(&self) -> &'static str {
        FILTER_WRAP_TYPE
    }

    fn wrapped_type(&self) -> String {
        self.control_type()
    }
}

impl Jsonable for Filter {
    /// `{type, options}`, with the bound column written into the options.
    fn to_value(&self) -> VizResult<Value> {
        let mut options = match self.options.to_value()? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        match &self.column {
            LabelOrIndex::Label(label) => {
                options.insert(COLUMN_LABEL_KEY.into(), Value::from(label.as_str()));
            }
            LabelOrIndex::Index(i) => {
                options.insert(COLUMN_INDEX_KEY.into(), Value::from(*i));
            }
        }

        let mut out = Map::new();
        out.insert("type".into(), Value::from(self.control_type()));
        out.insert("options".into(), Value::Object(options));
        Ok(Value::Object(out))
    }
}

impl Serialize for Filter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}
