use crate::configs::Gradient;
use crate::foundation::error::VizResult;
use crate::support::options::{
    OptionMap, OptionObject, OptionSchema, OptionValue, Options, ValueKind as K, rule,
};

static BOX_STYLE_SCHEMA: OptionSchema = OptionSchema {
    owner: "BoxStyle",
    layers: &[&[
        rule("gradient", K::Object),
        rule("rx", K::Numeric),
        rule("ry", K::Numeric),
        rule("stroke", K::String),
        rule("strokeWidth", K::Numeric),
    ]],
};

/// Border and fill of an annotation box.
#[derive(Clone, Debug)]
pub struct BoxStyle {
    options: Options,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            options: Options::new(&BOX_STYLE_SCHEMA),
        }
    }
}

impl BoxStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: OptionMap) -> VizResult<Self> {
        Ok(Self {
            options: Options::with_values(Some(&BOX_STYLE_SCHEMA), options)?,
        })
    }

    /// Border color.
    pub fn stroke(&mut self, color: impl Into<OptionValue>) -> VizResult<&mut Self> {
        self.options.set("stroke", color)?;
        Ok(self)
    }

    /// Border thickness; numbers and numeric strings are both accepted.
    pub fn stroke_width(&mut self, width: impl Into<OptionValue>) -> VizResult<&mut Self> {
        self.options.set("strokeWidth", width)?;
        Ok(self)
    }

    /// x-radius of the corner curvature.
    pub fn rx(&mut self, radius: impl Into<OptionValue>) -> VizResult<&mut Self> {
        self.options.set("rx", radius)?;
        Ok(self)
    }

    /// y-radius of the corner curvature.
    pub fn ry(&mut self, radius: impl Into<OptionValue>) -> VizResult<&mut Self> {
        self.options.set("ry", radius)?;
        Ok(self)
    }

    pub fn gradient(&mut self, gradient: Gradient) -> &mut Self {
        self.options.set_unchecked("gradient", gradient);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl OptionObject for BoxStyle {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Map(self.options.values().clone())
    }
}

impl From<BoxStyle> for OptionValue {
    fn from(b: BoxStyle) -> Self {
        OptionValue::object(b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/configs/box_style.rs"]
mod tests;
