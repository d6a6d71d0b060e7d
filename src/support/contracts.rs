use serde_json::Value;

use crate::foundation::error::{VizError, VizResult};
use crate::foundation::ids::{ElementId, Label};
use crate::support::options::{OptionMap, Options};

/// Namespace every rendering-runtime class lives under.
pub const JS_NAMESPACE: &str = "google.visualization";

/// Identity and version surface shared by everything the rendering runtime can draw.
pub trait Renderable {
    fn label(&self) -> &Label;

    fn element_id(&self) -> Option<&ElementId>;

    fn type_tag(&self) -> &'static str;

    fn version(&self) -> &'static str;

    /// Name of the visualization package the runtime must load.
    fn js_package(&self) -> &'static str;

    /// Fully qualified runtime class, derived from the type tag.
    fn js_class(&self) -> String {
        format!("{JS_NAMESPACE}.{}", self.type_tag())
    }
}

/// Entities placed inside a dashboard wrapper declare which wrapper key holds their type.
pub trait Wrappable {
    fn wrap_type(&self) -> &'static str;

    fn wrapped_type(&self) -> String;
}

/// Entities carrying an [`Options`] container.
pub trait Customizable {
    fn options(&self) -> &Options;

    /// Merge options without allow-list checks.
    fn customize(&mut self, options: OptionMap) -> &mut Self;
}

/// Entities built on top of a datatable.
pub trait HasDataTable {
    fn data_table(&self) -> &Value;
}

/// Tabular dataset supplied by the caller.
///
/// Only the extracted JSON is kept; the dataset itself is never stored.
pub trait DataTable {
    fn underlying_table(&self) -> VizResult<Value>;
}

/// Raw JSON is accepted as an already-built datatable.
impl DataTable for Value {
    fn underlying_table(&self) -> VizResult<Value> {
        if self.is_null() {
            return Err(VizError::InvalidDataTable(
                "datatable payload is null".to_string(),
            ));
        }
        Ok(self.clone())
    }
}

/// Canonical structural form and its JSON text.
pub trait Jsonable {
    fn to_value(&self) -> VizResult<Value>;

    fn to_json(&self) -> VizResult<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    fn to_json_pretty(&self) -> VizResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }
}
