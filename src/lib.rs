//! `vizwire` builds validated chart and dashboard-filter configuration and serializes it to the
//! JSON payload a JavaScript visualization runtime consumes.
//!
//! - Build a [`Chart`] from a label, a [`DataTable`] and [`Options`](support::options::Options)
//! - Build a [`Filter`] through the [`FilterFactory`] from a type name
//! - Serialize either with [`Jsonable::to_json`]
//!
//! Charts and filters can also be declared in a JSON [`Document`] and built in one go.
#![forbid(unsafe_code)]

mod foundation;

pub mod charts;
pub mod configs;
pub mod dashboards;
pub mod definition;
pub mod support;

pub use crate::charts::{Chart, ChartKind};
pub use crate::configs::{BoxStyle, Gradient};
pub use crate::dashboards::{Filter, FilterFactory, LabelOrIndex};
pub use crate::definition::{Bundle, Document};
pub use crate::foundation::error::{VizError, VizResult};
pub use crate::foundation::ids::{ElementId, Label};
pub use crate::support::contracts::{
    Customizable, DataTable, HasDataTable, Jsonable, Renderable, Wrappable,
};
pub use crate::support::options::{OptionMap, OptionObject, OptionValue, Options, option_map};
