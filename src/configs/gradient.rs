use crate::foundation::error::VizResult;
use crate::support::options::{
    OptionMap, OptionObject, OptionSchema, OptionValue, Options, ValueKind as K, rule,
};

static GRADIENT_SCHEMA: OptionSchema = OptionSchema {
    owner: "Gradient",
    layers: &[&[
        rule("color1", K::String),
        rule("color2", K::String),
        rule("useObjectBoundingBoxUnits", K::Bool),
        rule("x1", K::String),
        rule("x2", K::String),
        rule("y1", K::String),
        rule("y2", K::String),
    ]],
};

/// Two-color linear gradient, positioned with percentage strings such as `"0%"`.
#[derive(Clone, Debug)]
pub struct Gradient {
    options: Options,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            options: Options::new(&GRADIENT_SCHEMA),
        }
    }
}

impl Gradient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: OptionMap) -> VizResult<Self> {
        Ok(Self {
            options: Options::with_values(Some(&GRADIENT_SCHEMA), options)?,
        })
    }

    /// Start and end colors.
    pub fn colors(
        &mut self,
        from: impl Into<OptionValue>,
        to: impl Into<OptionValue>,
    ) -> VizResult<&mut Self> {
        let mut entries = OptionMap::new();
        entries.insert("color1".to_string(), from.into());
        entries.insert("color2".to_string(), to.into());
        self.options.merge(entries)?;
        Ok(self)
    }

    /// Start (`x1`, `y1`) and end (`x2`, `y2`) positions.
    pub fn span(
        &mut self,
        start: (&str, &str),
        end: (&str, &str),
    ) -> VizResult<&mut Self> {
        let mut entries = OptionMap::new();
        entries.insert("x1".to_string(), start.0.into());
        entries.insert("y1".to_string(), start.1.into());
        entries.insert("x2".to_string(), end.0.into());
        entries.insert("y2".to_string(), end.1.into());
        self.options.merge(entries)?;
        Ok(self)
    }

    pub fn use_object_bounding_box_units(&mut self, on: bool) -> VizResult<&mut Self> {
        self.options.set("useObjectBoundingBoxUnits", on)?;
        Ok(self)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl OptionObject for Gradient {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Map(self.options.values().clone())
    }
}

impl From<Gradient> for OptionValue {
    fn from(g: Gradient) -> Self {
        OptionValue::object(g)
    }
}
